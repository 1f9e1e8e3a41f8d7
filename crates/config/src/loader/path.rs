//! Path helpers for configuration file locations.

use std::path::PathBuf;

use super::error::ConfigError;

/// Returns the default path to the configuration file.
///
/// - Linux: `~/.config/studysphere/config.json`
/// - macOS: `~/Library/Application Support/studysphere/config.json`
/// - Windows: `%AppData%\studysphere\config\config.json`
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs = directories::ProjectDirs::from("", "", "studysphere").ok_or_else(|| {
        ConfigError::ConfigDirUnavailable("no home directory for this user".to_string())
    })?;

    Ok(proj_dirs.config_dir().join("config.json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_path_ends_with_config_json() {
        let path = default_config_path().unwrap();
        assert!(path.ends_with("config.json"));
        assert!(path.to_string_lossy().contains("studysphere"));
    }
}
