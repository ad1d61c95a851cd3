//! # API Client
//!
//! Main HTTP client for backend API communication.
//!
//! Each call performs exactly one HTTP exchange: no retries, no caching.
//! Success bodies get exactly one JSON parse attempt; failure bodies run
//! through the ordered fallback chain reified as [`ErrorBody`] so the rest
//! of the application only ever sees one message string per failure.

use std::time::Duration;

use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::core::error::{ApiError, Result};

/// Default base URL for the backend API server
const DEFAULT_API_URL: &str = "http://127.0.0.1:3001/api";

/// Environment variable overriding the base URL
pub const API_URL_ENV: &str = "HABITDESK_API_URL";

/// How a failure body is turned into a message.
///
/// `POST` responses get the JSON `message`/`title` extraction; the other
/// methods use the raw body text directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ErrorFormat {
    JsonOrText,
    TextOnly,
}

/// Outcome of the ordered error-body fallback chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorBody {
    /// A `message` or `title` field extracted from a JSON error body
    JsonMessage(String),
    /// The body was not a usable JSON error; its raw text is used verbatim
    RawText(String),
    /// The body was empty or unreadable
    Generic,
}

impl ErrorBody {
    /// The message string surfaced to callers.
    pub fn into_message(self) -> String {
        match self {
            ErrorBody::JsonMessage(message) | ErrorBody::RawText(message) => message,
            ErrorBody::Generic => "Error".to_string(),
        }
    }
}

/// HTTP client for communicating with the backend API server.
///
/// Holds a connection pool; cheap to clone the inner `reqwest::Client`.
/// The client does not persist tokens; a bearer credential is attached per
/// call only when the caller supplies one.
pub struct ApiClient {
    pub(crate) client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client with the base URL from `HABITDESK_API_URL`, falling
    /// back to the compiled default.
    pub fn new() -> Self {
        let base_url =
            std::env::var(API_URL_ENV).unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self::with_base_url(base_url)
    }

    /// Create a client against an explicit base URL.
    ///
    /// The client is configured with a 10 second timeout to prevent a hung
    /// request from leaving the form pending forever; a timeout surfaces as
    /// a network error like any other transport failure.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Base URL requests are issued against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET` a JSON value from `endpoint`.
    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str, token: Option<&str>) -> Result<T> {
        self.send(Method::GET, endpoint, None::<&()>, token, ErrorFormat::TextOnly)
            .await
    }

    /// `POST` `body` as JSON to `endpoint`.
    pub async fn post<B, T>(&self, endpoint: &str, body: &B, token: Option<&str>) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(Method::POST, endpoint, Some(body), token, ErrorFormat::JsonOrText)
            .await
    }

    /// `PUT` `body` as JSON to `endpoint`.
    pub async fn put<B, T>(&self, endpoint: &str, body: &B, token: Option<&str>) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(Method::PUT, endpoint, Some(body), token, ErrorFormat::TextOnly)
            .await
    }

    /// `DELETE` `endpoint`.
    pub async fn delete<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        token: Option<&str>,
    ) -> Result<T> {
        self.send(Method::DELETE, endpoint, None::<&()>, token, ErrorFormat::TextOnly)
            .await
    }

    async fn send<B, T>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&B>,
        token: Option<&str>,
        error_format: ErrorFormat,
    ) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, endpoint);

        let mut request = self.client.request(method, &url);
        // Bearer header only when a non-empty token was supplied
        if let Some(token) = token.filter(|t| !t.is_empty()) {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| {
            tracing::error!(endpoint, error = %e, "Request transport failure");
            ApiError::Network(format!("Network error: {e}"))
        })?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| ApiError::Network(format!("Network error: {e}")))?;

        if status.is_success() {
            serde_json::from_slice(&bytes).map_err(|e| {
                tracing::error!(endpoint, error = %e, "Response parse error on success status");
                ApiError::Parse(format!("Failed to parse response: {e}"))
            })
        } else {
            let message = normalize_error_body(&bytes, error_format).into_message();
            tracing::warn!(endpoint, status = status.as_u16(), message = %message, "Request failed");
            Err(ApiError::Http {
                status: status.as_u16(),
                message,
            })
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Ordered fallback chain for failure bodies:
/// JSON `message`/`title` field, then raw body text, then a generic marker.
fn normalize_error_body(bytes: &[u8], format: ErrorFormat) -> ErrorBody {
    if format == ErrorFormat::JsonOrText {
        if let Ok(body) = serde_json::from_slice::<shared::ApiErrorBody>(bytes) {
            let field = body
                .message
                .filter(|m| !m.is_empty())
                .or(body.title.filter(|t| !t.is_empty()));
            if let Some(message) = field {
                return ErrorBody::JsonMessage(message);
            }
        }
    }

    match std::str::from_utf8(bytes) {
        Ok(text) if !text.trim().is_empty() => ErrorBody::RawText(text.to_string()),
        _ => ErrorBody::Generic,
    }
}
