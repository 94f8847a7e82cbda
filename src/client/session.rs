//! Session storage for the access/refresh credential pair.
//!
//! The store is an injected service: the gateway, the route guard and the auth
//! feature all receive the same `Arc<dyn SessionStore>` instead of reaching
//! for global state. Login is the only writer of a pair and logout the only
//! caller of `clear`.
//!
//! A pair is either fully present or absent. `FileSessionStore` keeps that
//! true on disk by writing the whole document to a sibling temp file and
//! renaming it over the target, so an interrupted write never mixes tokens
//! from two sessions.

use super::errors::SessionError;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
    sync::{PoisonError, RwLock},
};
use tracing::{debug, warn};

/// Bearer credential pair returned by a successful login.
#[derive(Clone, Debug)]
pub struct Credentials {
    access_token: SecretString,
    refresh_token: SecretString,
}

impl Credentials {
    #[must_use]
    pub fn new(access_token: impl Into<String>, refresh_token: impl Into<String>) -> Self {
        Self {
            access_token: SecretString::from(access_token.into()),
            refresh_token: SecretString::from(refresh_token.into()),
        }
    }

    #[must_use]
    pub fn access_token(&self) -> &SecretString {
        &self.access_token
    }

    #[must_use]
    pub fn refresh_token(&self) -> &SecretString {
        &self.refresh_token
    }
}

pub trait SessionStore: Send + Sync {
    /// Current pair, or `None` if never set or cleared.
    fn get(&self) -> Option<Credentials>;

    /// Overwrites both tokens unconditionally.
    ///
    /// # Errors
    /// Returns an error if the pair cannot be persisted; the previous pair is
    /// left untouched in that case.
    fn set(&self, credentials: Credentials) -> Result<(), SessionError>;

    /// Removes both tokens.
    ///
    /// # Errors
    /// Returns an error if the backing storage cannot be removed.
    fn clear(&self) -> Result<(), SessionError>;

    /// Stored access token, if any.
    fn access_token(&self) -> Option<SecretString> {
        self.get().map(|credentials| credentials.access_token)
    }
}

/// Process-local store, used by tests and embedders that manage persistence
/// themselves.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    credentials: RwLock<Option<Credentials>>,
}

impl MemorySessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_credentials(credentials: Credentials) -> Self {
        Self {
            credentials: RwLock::new(Some(credentials)),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self) -> Option<Credentials> {
        self.credentials
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn set(&self, credentials: Credentials) -> Result<(), SessionError> {
        let mut guard = self
            .credentials
            .write()
            .map_err(|_| SessionError::Poisoned)?;
        *guard = Some(credentials);
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        let mut guard = self
            .credentials
            .write()
            .map_err(|_| SessionError::Poisoned)?;
        *guard = None;
        Ok(())
    }
}

/// On-disk layout: one document with both token slots.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredSession {
    access_token: String,
    refresh_token: String,
}

/// Store that survives restarts, scoped to the current user.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: io::Error) -> SessionError {
        SessionError::Io {
            path: self.path.display().to_string(),
            source,
        }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_default();
        name.push(format!(".{}.tmp", uuid::Uuid::new_v4()));
        self.path.with_file_name(name)
    }

    fn write_atomically(&self, contents: &[u8]) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|err| self.io_error(err))?;
            }
        }

        let temp_path = self.temp_path();
        let result = write_private_file(&temp_path, contents)
            .and_then(|()| fs::rename(&temp_path, &self.path));

        if let Err(err) = result {
            let _ = fs::remove_file(&temp_path);
            return Err(self.io_error(err));
        }

        Ok(())
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self) -> Option<Credentials> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return None,
            Err(err) => {
                warn!("Unable to read session file {}: {err}", self.path.display());
                return None;
            }
        };

        match serde_json::from_str::<StoredSession>(&raw) {
            Ok(stored) => Some(Credentials::new(stored.access_token, stored.refresh_token)),
            Err(err) => {
                warn!(
                    "Ignoring corrupt session file {}: {err}",
                    self.path.display()
                );
                None
            }
        }
    }

    fn set(&self, credentials: Credentials) -> Result<(), SessionError> {
        let stored = StoredSession {
            access_token: credentials.access_token.expose_secret().to_string(),
            refresh_token: credentials.refresh_token.expose_secret().to_string(),
        };
        let contents = serde_json::to_vec(&stored)?;
        self.write_atomically(&contents)?;
        debug!("session stored at {}", self.path.display());
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                debug!("session cleared at {}", self.path.display());
                Ok(())
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(self.io_error(err)),
        }
    }
}

#[cfg(unix)]
fn write_private_file(path: &Path, contents: &[u8]) -> io::Result<()> {
    use std::os::unix::fs::OpenOptionsExt;

    let mut file = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .mode(0o600)
        .open(path)?;
    file.write_all(contents)?;
    file.sync_all()
}

#[cfg(not(unix))]
fn write_private_file(path: &Path, contents: &[u8]) -> io::Result<()> {
    let mut file = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)?;
    file.write_all(contents)?;
    file.sync_all()
}
