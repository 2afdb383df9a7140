//! Client-side routes of the admin application.

/// The four application routes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Login,
    Dashboard,
    Users,
    Settings,
}

impl Route {
    /// Path string, mirroring a browser-style route table
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Dashboard => "/dashboard",
            Route::Users => "/users",
            Route::Settings => "/settings",
        }
    }

    /// Parse a path back to a route
    #[must_use]
    pub fn parse(path: &str) -> Option<Route> {
        match path.trim_end_matches('/') {
            "/login" => Some(Route::Login),
            "/dashboard" | "" => Some(Route::Dashboard),
            "/users" => Some(Route::Users),
            "/settings" => Some(Route::Settings),
            _ => None,
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Route::Login => "Sign in",
            Route::Dashboard => "Dashboard",
            Route::Users => "Users",
            Route::Settings => "Settings",
        }
    }

    /// Routes reachable from the sidebar, in display order
    #[must_use]
    pub fn nav_routes() -> [Route; 3] {
        [Route::Dashboard, Route::Users, Route::Settings]
    }

    /// Whether the route renders inside the authenticated shell
    #[must_use]
    pub fn requires_auth(self) -> bool {
        !matches!(self, Route::Login)
    }
}

#[cfg(test)]
mod tests {
    use super::Route;

    #[test]
    fn path_round_trips() {
        for route in [Route::Login, Route::Dashboard, Route::Users, Route::Settings] {
            assert_eq!(Route::parse(route.path()), Some(route));
        }
    }

    #[test]
    fn parse_tolerates_trailing_slash_and_rejects_unknown() {
        assert_eq!(Route::parse("/users/"), Some(Route::Users));
        assert_eq!(Route::parse("/nope"), None);
    }

    #[test]
    fn login_is_outside_the_shell() {
        assert!(!Route::Login.requires_auth());
        assert!(Route::nav_routes().iter().all(|r| r.requires_auth()));
    }
}
