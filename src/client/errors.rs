use thiserror::Error;

/// Failures of the session store backing file.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session storage failed at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("session could not be encoded: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("session store lock poisoned")]
    Poisoned,
}

#[derive(Debug, Error)]
pub enum AppError {
    /// Rejected locally, no request was sent.
    #[error("Validation error: {0}")]
    Validation(String),
    /// Normalized backend error for a non-2xx answer.
    #[error("Request failed ({status}): {message}")]
    Api { status: u16, message: String },
    #[error("Network error: {0}")]
    Network(String),
    /// A success answer whose body is not the JSON the caller expects.
    #[error("Response error ({status}): {message}")]
    MalformedResponse { status: u16, message: String },
    #[error("Request error: {0}")]
    Serialization(String),
    #[error("Config error: {0}")]
    Config(String),
    #[error(transparent)]
    Session(#[from] SessionError),
}

impl AppError {
    /// The single message a view shows for this failure.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Validation(message)
            | Self::Network(message)
            | Self::Serialization(message)
            | Self::Config(message) => message.clone(),
            Self::Api { message, .. } | Self::MalformedResponse { message, .. } => message.clone(),
            Self::Session(err) => err.to_string(),
        }
    }

    /// HTTP status reported by the backend, when there was one.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } | Self::MalformedResponse { status, .. } => Some(*status),
            _ => None,
        }
    }
}
