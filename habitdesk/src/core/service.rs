//! # Service Traits
//!
//! Traits for dependency injection, enabling better testability and
//! modularity. The form controller only sees these seams; the concrete
//! HTTP client and the toast surface live behind them.

use crate::core::error::Result;
use async_trait::async_trait;
use shared::AuthResponse;

/// Backend authentication operations.
///
/// Implemented by [`crate::services::api::ApiClient`] for production and by
/// mocks in controller tests.
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Login with email and password.
    async fn login(&self, email: String, password: String) -> Result<AuthResponse>;

    /// Register a new account. The response body is implementation-defined
    /// and discarded; registration never yields a session.
    async fn register(&self, email: String, password: String, full_name: String) -> Result<()>;

    /// Exchange a Google OAuth credential for a session.
    async fn google_login(&self, id_token: String) -> Result<AuthResponse>;
}

/// Notification surface (toasts). Fire-and-forget; no return value is
/// consumed.
pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}
