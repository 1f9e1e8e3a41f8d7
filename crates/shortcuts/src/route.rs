//! Logical view routes and the routing capability.

use std::fmt;

/// The views a shortcut can navigate to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Dashboard,
    Courses,
    Profile,
}

impl Route {
    pub const ALL: [Route; 3] = [Route::Dashboard, Route::Courses, Route::Profile];

    pub fn path(self) -> &'static str {
        match self {
            Self::Dashboard => "/dashboard",
            Self::Courses => "/courses",
            Self::Profile => "/profile",
        }
    }

    /// Human-readable name for tabs and status lines.
    pub fn title(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Courses => "My Courses",
            Self::Profile => "Profile",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Navigation capability supplied by the host application.
///
/// The dispatcher never knows how navigation is carried out.
#[cfg_attr(test, mockall::automock)]
pub trait Router {
    fn navigate(&mut self, route: Route);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_and_display_agree() {
        assert_eq!(
            Route::ALL.map(Route::path),
            ["/dashboard", "/courses", "/profile"]
        );
        for route in Route::ALL {
            assert_eq!(route.to_string(), route.path());
        }
    }
}
