//! Screen router for the terminal front end.

use studysphere_shortcuts::{Route, Router};

/// Tracks the active screen. Navigation history is kept for the status line.
#[derive(Debug, Clone)]
pub struct ScreenRouter {
    current: Route,
    history: Vec<Route>,
}

impl ScreenRouter {
    pub fn new(start: Route) -> Self {
        Self {
            current: start,
            history: Vec::new(),
        }
    }

    pub fn current(&self) -> Route {
        self.current
    }

    /// Routes navigated to, oldest first.
    pub fn history(&self) -> &[Route] {
        &self.history
    }
}

impl Default for ScreenRouter {
    fn default() -> Self {
        Self::new(Route::Dashboard)
    }
}

impl Router for ScreenRouter {
    fn navigate(&mut self, route: Route) {
        tracing::info!(from = %self.current, to = %route, "Navigating");
        self.current = route;
        self.history.push(route);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigate_switches_screen_and_records_history() {
        let mut router = ScreenRouter::default();
        router.navigate(Route::Profile);
        router.navigate(Route::Profile);

        assert_eq!(router.current(), Route::Profile);
        assert_eq!(router.history(), [Route::Profile, Route::Profile]);
    }
}
