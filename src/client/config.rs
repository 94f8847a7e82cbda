//! Client configuration for the API endpoint and the session file location.
//! Values arrive from CLI flags or their environment fallbacks; they are
//! trimmed, validated once here and then passed around by value. Configuration
//! is public; token material never goes through it.

use super::errors::AppError;
use std::path::PathBuf;
use url::Url;

/// Backend origin used when nothing else is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000/api";
/// Session file name inside the per-user state directory.
const SESSION_FILE_NAME: &str = "session.json";
const STATE_DIR_NAME: &str = ".uebax";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub session_file: PathBuf,
}

impl AppConfig {
    /// Builds a validated config.
    ///
    /// # Errors
    /// Returns `AppError::Config` when the base URL is empty, unparsable or not
    /// http(s), or when no session file can be located.
    pub fn new(
        api_base_url: Option<&str>,
        session_file: Option<PathBuf>,
    ) -> Result<Self, AppError> {
        let api_base_url = match api_base_url.and_then(normalize_value) {
            Some(value) => normalize_base_url(&value)?,
            None => normalize_base_url(DEFAULT_API_BASE_URL)?,
        };

        let session_file = match session_file {
            Some(path) if !path.as_os_str().is_empty() => path,
            _ => default_session_file()?,
        };

        Ok(Self {
            api_base_url,
            session_file,
        })
    }
}

/// Returns `<home>/.uebax/session.json`.
///
/// # Errors
/// Returns `AppError::Config` if the home directory cannot be determined.
pub fn default_session_file() -> Result<PathBuf, AppError> {
    dirs::home_dir()
        .map(|home| home.join(STATE_DIR_NAME).join(SESSION_FILE_NAME))
        .ok_or_else(|| {
            AppError::Config(
                "Unable to locate the home directory; pass --session-file.".to_string(),
            )
        })
}

fn normalize_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Validates an http(s) base URL and drops trailing slashes so endpoint paths
/// can be appended verbatim.
fn normalize_base_url(raw: &str) -> Result<String, AppError> {
    let url = Url::parse(raw)
        .map_err(|err| AppError::Config(format!("Invalid API base URL {raw}: {err}")))?;

    match url.scheme() {
        "http" | "https" => {}
        scheme => {
            return Err(AppError::Config(format!(
                "Invalid API base URL {raw}: unsupported scheme {scheme}"
            )));
        }
    }

    if url.host().is_none() {
        return Err(AppError::Config(format!(
            "Invalid API base URL {raw}: no host specified"
        )));
    }

    Ok(raw.trim_end_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_value_trims_and_rejects_empty() {
        assert_eq!(normalize_value(""), None);
        assert_eq!(normalize_value("   "), None);
        assert_eq!(
            normalize_value("  http://api.uebax.dev "),
            Some("http://api.uebax.dev".to_string())
        );
    }

    #[test]
    fn new_falls_back_to_default_base_url() -> Result<(), AppError> {
        let config = AppConfig::new(Some("  "), Some(PathBuf::from("/tmp/session.json")))?;
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.session_file, PathBuf::from("/tmp/session.json"));
        Ok(())
    }

    #[test]
    fn new_strips_trailing_slashes() -> Result<(), AppError> {
        let config = AppConfig::new(
            Some("https://api.uebax.dev/api/"),
            Some(PathBuf::from("/tmp/session.json")),
        )?;
        assert_eq!(config.api_base_url, "https://api.uebax.dev/api");
        Ok(())
    }

    #[test]
    fn new_rejects_unsupported_scheme() {
        let result = AppConfig::new(
            Some("ftp://api.uebax.dev"),
            Some(PathBuf::from("/tmp/session.json")),
        );
        assert!(matches!(
            result,
            Err(AppError::Config(message)) if message.contains("unsupported scheme")
        ));
    }

    #[test]
    fn new_rejects_garbage() {
        let result = AppConfig::new(Some("not a url"), Some(PathBuf::from("/tmp/s.json")));
        assert!(matches!(result, Err(AppError::Config(_))));
    }
}
