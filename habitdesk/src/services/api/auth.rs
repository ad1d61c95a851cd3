//! # Authentication Endpoints
//!
//! Handles user authentication (login, registration, Google login).

use serde_json::Value;
use shared::{AuthResponse, GoogleLoginRequest, LoginRequest, RegisterRequest};

use super::client::ApiClient;
use crate::core::error::Result;
use crate::core::service::AuthApi;

/// Login with email and password.
#[tracing::instrument(skip(client, password), fields(email = %email))]
pub async fn login(client: &ApiClient, email: String, password: String) -> Result<AuthResponse> {
    tracing::info!("Attempting login");
    let start = std::time::Instant::now();

    let request = LoginRequest { email, password };
    let result = client
        .post::<_, AuthResponse>("/auth/login", &request, None)
        .await;

    match &result {
        Ok(_) => tracing::info!(
            duration_ms = start.elapsed().as_millis() as u64,
            "Login successful"
        ),
        Err(e) => tracing::warn!(
            duration_ms = start.elapsed().as_millis() as u64,
            error = %e,
            "Login failed"
        ),
    }
    result
}

/// Register a new account.
///
/// The backend's success body is implementation-defined; it still gets the
/// single JSON parse attempt and is then discarded.
#[tracing::instrument(skip(client, password), fields(email = %email))]
pub async fn register(
    client: &ApiClient,
    email: String,
    password: String,
    full_name: String,
) -> Result<()> {
    tracing::info!("Attempting registration");

    let request = RegisterRequest {
        email,
        password,
        full_name,
    };
    let _body: Value = client.post("/auth/register", &request, None).await?;
    tracing::info!("Registration successful");
    Ok(())
}

/// Exchange a Google OAuth credential for a session.
#[tracing::instrument(skip(client, id_token))]
pub async fn google_login(client: &ApiClient, id_token: String) -> Result<AuthResponse> {
    tracing::info!("Attempting Google login");
    let start = std::time::Instant::now();

    let request = GoogleLoginRequest { id_token };
    let result = client
        .post::<_, AuthResponse>("/auth/google-login", &request, None)
        .await;

    match &result {
        Ok(_) => tracing::info!(
            duration_ms = start.elapsed().as_millis() as u64,
            "Google login successful"
        ),
        Err(e) => tracing::warn!(
            duration_ms = start.elapsed().as_millis() as u64,
            error = %e,
            "Google login failed"
        ),
    }
    result
}

// Implement AuthApi trait for ApiClient
#[async_trait::async_trait]
impl AuthApi for ApiClient {
    async fn login(&self, email: String, password: String) -> Result<AuthResponse> {
        login(self, email, password).await
    }

    async fn register(&self, email: String, password: String, full_name: String) -> Result<()> {
        register(self, email, password, full_name).await
    }

    async fn google_login(&self, id_token: String) -> Result<AuthResponse> {
        google_login(self, id_token).await
    }
}
