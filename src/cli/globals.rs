use crate::client::{ApiClient, AppConfig, FileSessionStore, SessionStore};
use crate::features::auth::{Access, RouteGuard};
use crate::routes::Route;
use anyhow::{Context, Result, bail};
use std::{path::PathBuf, sync::Arc};

/// Arguments shared by every subcommand.
#[derive(Debug, Clone, Default)]
pub struct GlobalArgs {
    pub api_url: Option<String>,
    pub session_file: Option<PathBuf>,
}

impl GlobalArgs {
    /// # Errors
    /// Returns an error if the base URL or the session path is invalid.
    pub fn config(&self) -> Result<AppConfig> {
        AppConfig::new(self.api_url.as_deref(), self.session_file.clone())
            .context("invalid configuration")
    }

    /// Builds the gateway over the session file.
    ///
    /// # Errors
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be built.
    pub fn api(&self) -> Result<ApiClient> {
        let config = self.config()?;
        let session: Arc<dyn SessionStore> =
            Arc::new(FileSessionStore::new(config.session_file.clone()));
        ApiClient::from_config(&config, session).context("failed to build API client")
    }

    /// Builds the gateway for a protected view, refusing to go on without a
    /// session.
    ///
    /// # Errors
    /// Returns an error naming the login redirect when no session is stored.
    pub fn guarded_api(&self, route: Route) -> Result<ApiClient> {
        let api = self.api()?;
        match RouteGuard::new(api.session().clone()).check(route) {
            Access::Granted => Ok(api),
            Access::Redirect(navigation) => {
                bail!("not logged in, redirecting to {}", navigation.to)
            }
        }
    }
}
