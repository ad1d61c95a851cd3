use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Registration request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    #[serde(rename = "fullName")]
    pub full_name: String,
}

/// Google login request. The credential comes verbatim from the external
/// OAuth widget's success callback.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GoogleLoginRequest {
    #[serde(rename = "idToken")]
    pub id_token: String,
}

/// Authentication response (login/google-login success).
///
/// `user` is forwarded to the caller exactly as the backend sent it; the
/// client does not depend on its shape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthResponse {
    pub token: String,
    pub user: Value,
}

/// Error body shape backends commonly return on a failure status.
///
/// Both fields are optional so that any JSON object deserializes; the
/// client falls back to raw body text when neither is present.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}
