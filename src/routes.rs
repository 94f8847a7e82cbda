//! Route table and navigation requests.
//!
//! Views never navigate themselves: features return a [`Navigation`] that
//! names the target route, whether it replaces history, how long the current
//! view keeps its success message up, and the payload the next view receives.
//! The payload only lives for that one hop.

use std::{fmt, time::Duration};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Register,
    ResetRequest,
    ResetVerify,
    ResetConfirm,
    Dashboard,
    Events,
    Alerts,
}

impl Route {
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Register => "/cadastro",
            Self::ResetRequest => "/redefinir-senha",
            Self::ResetVerify => "/verificar-codigo",
            Self::ResetConfirm => "/nova-senha",
            Self::Dashboard => "/dashboard",
            Self::Events => "/dashboard/eventos",
            Self::Alerts => "/dashboard/alertas",
        }
    }

    /// Views behind the route guard.
    #[must_use]
    pub const fn is_protected(self) -> bool {
        matches!(self, Self::Dashboard | Self::Events | Self::Alerts)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.path())
    }
}

/// Payload handed to the next view at navigation time; never persisted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavigationState {
    pub email: Option<String>,
    pub token: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Navigation {
    pub to: Route,
    pub replace: bool,
    pub delay: Duration,
    pub state: NavigationState,
}

impl Navigation {
    /// Regular navigation that keeps the current view in history.
    #[must_use]
    pub fn push(to: Route) -> Self {
        Self {
            to,
            replace: false,
            delay: Duration::ZERO,
            state: NavigationState::default(),
        }
    }

    /// Redirect that replaces the current history entry.
    #[must_use]
    pub fn replace(to: Route) -> Self {
        Self {
            replace: true,
            ..Self::push(to)
        }
    }

    #[must_use]
    pub fn with_state(mut self, state: NavigationState) -> Self {
        self.state = state;
        self
    }

    #[must_use]
    pub fn after(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_dashboard_views_are_protected() {
        for route in [Route::Dashboard, Route::Events, Route::Alerts] {
            assert!(route.is_protected(), "{route} should be protected");
        }
        for route in [
            Route::Login,
            Route::Register,
            Route::ResetRequest,
            Route::ResetVerify,
            Route::ResetConfirm,
        ] {
            assert!(!route.is_protected(), "{route} should be public");
        }
    }

    #[test]
    fn display_uses_the_path() {
        assert_eq!(Route::Events.to_string(), "/dashboard/eventos");
        assert_eq!(Route::ResetConfirm.to_string(), "/nova-senha");
    }

    #[test]
    fn replace_sets_history_flag() {
        let navigation = Navigation::replace(Route::Login);
        assert!(navigation.replace);
        assert_eq!(navigation.delay, Duration::ZERO);
        assert_eq!(navigation.state, NavigationState::default());
        assert!(!Navigation::push(Route::Dashboard).replace);
    }
}
