use crate::{
    client::SessionStore,
    routes::{Navigation, Route},
};
use secrecy::ExposeSecret;
use std::sync::Arc;

/// Outcome of evaluating the guard before a view renders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Access {
    Granted,
    Redirect(Navigation),
}

/// Presence-only gate for protected views. The token is not validated
/// (expiry, signature); a stale token fails at the backend instead.
#[derive(Clone)]
pub struct RouteGuard {
    session: Arc<dyn SessionStore>,
}

impl RouteGuard {
    #[must_use]
    pub fn new(session: Arc<dyn SessionStore>) -> Self {
        Self { session }
    }

    /// True iff a non-empty access token is stored.
    #[must_use]
    pub fn is_authorized(&self) -> bool {
        self.session
            .access_token()
            .is_some_and(|token| !token.expose_secret().is_empty())
    }

    /// Public routes always render; protected ones redirect to login,
    /// replacing history, when no session is present.
    #[must_use]
    pub fn check(&self, route: Route) -> Access {
        if !route.is_protected() || self.is_authorized() {
            Access::Granted
        } else {
            Access::Redirect(Navigation::replace(Route::Login))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{Credentials, MemorySessionStore};

    #[test]
    fn absent_token_redirects_to_login_replacing_history() {
        let guard = RouteGuard::new(Arc::new(MemorySessionStore::new()));
        assert!(!guard.is_authorized());

        for route in [Route::Dashboard, Route::Events, Route::Alerts] {
            match guard.check(route) {
                Access::Redirect(navigation) => {
                    assert_eq!(navigation.to, Route::Login);
                    assert!(navigation.replace);
                }
                Access::Granted => panic!("{route} must not render without a session"),
            }
        }
    }

    #[test]
    fn any_non_empty_token_grants_access() {
        let store = MemorySessionStore::with_credentials(Credentials::new("x", "y"));
        let guard = RouteGuard::new(Arc::new(store));
        assert!(guard.is_authorized());
        assert_eq!(guard.check(Route::Dashboard), Access::Granted);
    }

    #[test]
    fn empty_token_is_not_a_session() {
        let store = MemorySessionStore::with_credentials(Credentials::new("", "refresh"));
        let guard = RouteGuard::new(Arc::new(store));
        assert!(!guard.is_authorized());
        assert!(matches!(guard.check(Route::Events), Access::Redirect(_)));
    }

    #[test]
    fn public_routes_render_without_session() {
        let guard = RouteGuard::new(Arc::new(MemorySessionStore::new()));
        for route in [
            Route::Login,
            Route::Register,
            Route::ResetRequest,
            Route::ResetVerify,
            Route::ResetConfirm,
        ] {
            assert_eq!(guard.check(route), Access::Granted);
        }
    }

    #[test]
    fn guard_sees_session_changes() -> Result<(), crate::client::SessionError> {
        let store = Arc::new(MemorySessionStore::new());
        let guard = RouteGuard::new(store.clone());
        assert!(!guard.is_authorized());

        store.set(Credentials::new("access", "refresh"))?;
        assert!(guard.is_authorized());

        store.clear()?;
        assert!(!guard.is_authorized());
        Ok(())
    }
}
