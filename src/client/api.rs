//! Request gateway: the only path from the client to the backend.
//!
//! Every call is described by a [`RequestDescriptor`] and sent through
//! [`ApiClient::call`], which
//! - starts from `Content-Type: application/json`, overlays caller headers and,
//!   unless the descriptor skips auth, adds `Authorization: Bearer <access>`
//!   when the session store holds a non-empty access token;
//! - treats `204 No Content` as an absent body and parses anything else as JSON;
//! - turns every non-2xx answer into exactly one message (see [`normalize_error`]).
//!
//! There is no retry, timeout or cancellation here: a call resolves or fails
//! exactly once, with whatever deadline the transport itself applies.

use super::{config::AppConfig, errors::AppError, session::SessionStore};
use reqwest::{
    Client, Method, StatusCode,
    header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue},
};
use secrecy::ExposeSecret;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Message used when the backend error body carries nothing usable.
pub const DEFAULT_ERROR_MESSAGE: &str = "An error occurred in the API";

/// One backend call, built per request and consumed by [`ApiClient::call`].
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    pub endpoint: String,
    pub method: Method,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
    pub skip_auth: bool,
}

impl RequestDescriptor {
    #[must_use]
    pub fn new(method: Method, endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            method,
            headers: Vec::new(),
            body: None,
            skip_auth: false,
        }
    }

    #[must_use]
    pub fn get(endpoint: impl Into<String>) -> Self {
        Self::new(Method::GET, endpoint)
    }

    #[must_use]
    pub fn post(endpoint: impl Into<String>) -> Self {
        Self::new(Method::POST, endpoint)
    }

    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    #[must_use]
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Serializes `body` as the request payload.
    ///
    /// # Errors
    /// Returns `AppError::Serialization` if the body cannot be encoded.
    pub fn json<B: Serialize + ?Sized>(self, body: &B) -> Result<Self, AppError> {
        let payload = serde_json::to_string(body)
            .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))?;
        Ok(self.body(payload))
    }

    /// Sends the request without credentials even when a session exists.
    #[must_use]
    pub fn skip_auth(mut self) -> Self {
        self.skip_auth = true;
        self
    }
}

/// Shared gateway handle; cloning is cheap and keeps the same session store.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    session: Arc<dyn SessionStore>,
    fallback_message: String,
}

impl ApiClient {
    /// # Errors
    /// Returns `AppError::Config` if the HTTP client cannot be constructed.
    pub fn new(base_url: &str, session: Arc<dyn SessionStore>) -> Result<Self, AppError> {
        let http = Client::builder()
            .user_agent(crate::APP_USER_AGENT)
            .build()
            .map_err(|err| AppError::Config(format!("Failed to build HTTP client: {err}")))?;

        Ok(Self {
            http,
            base_url: base_url.trim().trim_end_matches('/').to_string(),
            session,
            fallback_message: DEFAULT_ERROR_MESSAGE.to_string(),
        })
    }

    /// # Errors
    /// Returns `AppError::Config` if the HTTP client cannot be constructed.
    pub fn from_config(
        config: &AppConfig,
        session: Arc<dyn SessionStore>,
    ) -> Result<Self, AppError> {
        Self::new(&config.api_base_url, session)
    }

    /// Replaces the fallback error message, e.g. for a localized UI.
    #[must_use]
    pub fn with_fallback_message(mut self, message: impl Into<String>) -> Self {
        self.fallback_message = message.into();
        self
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn session(&self) -> &Arc<dyn SessionStore> {
        &self.session
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint.trim())
    }

    /// Defaults, then caller headers, then the bearer token.
    fn build_headers(&self, descriptor: &RequestDescriptor) -> Result<HeaderMap, AppError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        for (name, value) in &descriptor.headers {
            let name = name.parse::<HeaderName>().map_err(invalid_header)?;
            let value = HeaderValue::from_str(value).map_err(invalid_header)?;
            headers.insert(name, value);
        }

        if !descriptor.skip_auth {
            if let Some(token) = self.session.access_token() {
                let token = token.expose_secret();
                if !token.is_empty() {
                    let bearer = format!("Bearer {token}");
                    let mut value = HeaderValue::from_str(&bearer).map_err(invalid_header)?;
                    value.set_sensitive(true);
                    headers.insert(AUTHORIZATION, value);
                }
            }
        }

        Ok(headers)
    }

    /// Sends one request and returns the parsed body (`None` on 204).
    ///
    /// # Errors
    /// - `AppError::Api` with the normalized message for non-2xx answers.
    /// - `AppError::Network` when the backend cannot be reached.
    /// - `AppError::MalformedResponse` when a success body is not JSON.
    #[instrument(
        skip(self, descriptor),
        fields(method = %descriptor.method, endpoint = %descriptor.endpoint)
    )]
    pub async fn call(&self, descriptor: RequestDescriptor) -> Result<Option<Value>, AppError> {
        let headers = self.build_headers(&descriptor)?;
        let url = self.url(&descriptor.endpoint);

        let mut request = self
            .http
            .request(descriptor.method.clone(), &url)
            .headers(headers);
        if let Some(body) = descriptor.body {
            request = request.body(body);
        }

        let response = request.send().await.map_err(map_request_error)?;
        let status = response.status();
        debug!("{} {} -> {}", descriptor.method, url, status);

        if status == StatusCode::NO_CONTENT {
            return Ok(None);
        }

        let text = response.text().await.map_err(map_request_error)?;
        let parsed = serde_json::from_str::<Value>(&text);

        if status.is_success() {
            parsed.map(Some).map_err(|err| AppError::MalformedResponse {
                status: status.as_u16(),
                message: format!("Failed to decode response: {err}"),
            })
        } else {
            let body = parsed.ok();
            Err(AppError::Api {
                status: status.as_u16(),
                message: normalize_error(body.as_ref(), &self.fallback_message),
            })
        }
    }

    /// Sends a request whose success answer must carry a `T`.
    ///
    /// # Errors
    /// Returns the gateway errors, or `AppError::MalformedResponse` when the
    /// body is absent or does not decode into `T`.
    pub async fn send_json<T: DeserializeOwned>(
        &self,
        descriptor: RequestDescriptor,
    ) -> Result<T, AppError> {
        match self.call(descriptor).await? {
            Some(value) => decode(value),
            None => Err(AppError::MalformedResponse {
                status: StatusCode::NO_CONTENT.as_u16(),
                message: "Expected a response body".to_string(),
            }),
        }
    }

    /// Sends a request whose success answer may be empty.
    ///
    /// # Errors
    /// Returns the gateway errors, or `AppError::MalformedResponse` when a
    /// present body does not decode into `T`.
    pub async fn send_optional_json<T: DeserializeOwned>(
        &self,
        descriptor: RequestDescriptor,
    ) -> Result<Option<T>, AppError> {
        self.call(descriptor).await?.map(decode).transpose()
    }

    /// Sends a request and discards the success body.
    ///
    /// # Errors
    /// Returns the gateway errors.
    pub async fn send_empty(&self, descriptor: RequestDescriptor) -> Result<(), AppError> {
        self.call(descriptor).await.map(|_| ())
    }
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T, AppError> {
    serde_json::from_value(value).map_err(|err| AppError::MalformedResponse {
        status: StatusCode::OK.as_u16(),
        message: format!("Failed to decode response: {err}"),
    })
}

fn invalid_header(err: impl std::fmt::Display) -> AppError {
    AppError::Serialization(format!("Failed to build request: {err}"))
}

fn map_request_error(err: reqwest::Error) -> AppError {
    AppError::Network(format!("Unable to reach the server: {err}"))
}

/// Picks the one message shown for a failed call.
///
/// Precedence:
/// 1. the first element of the first key (in the body's key order) whose value
///    is a non-empty array of strings, e.g. `{"email": ["Email already in use"]}`;
/// 2. the `detail` value, e.g. `{"detail": "Invalid token"}`;
/// 3. `fallback`.
///
/// Rule 1 depends on key order: when the backend reports several field errors
/// at once, only the first field is surfaced.
#[must_use]
pub fn normalize_error(body: Option<&Value>, fallback: &str) -> String {
    let Some(Value::Object(map)) = body else {
        return fallback.to_string();
    };

    let field_error = map.values().find_map(|value| match value {
        Value::Array(items) if !items.is_empty() && items.iter().all(Value::is_string) => {
            items.first().and_then(Value::as_str)
        }
        _ => None,
    });
    if let Some(message) = field_error {
        return message.to_string();
    }

    match map.get("detail") {
        Some(Value::String(detail)) if !detail.is_empty() => detail.clone(),
        Some(Value::Null | Value::String(_)) | None => fallback.to_string(),
        Some(other) => other.to_string(),
    }
}
