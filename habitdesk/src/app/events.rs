//! # Form Events
//!
//! Result types sent from background request tasks back to the form owner.

use crate::core::error::ApiError;
use shared::AuthResponse;

/// Async request results delivered through the form's event channel
#[derive(Debug)]
pub enum FormEvent {
    /// Login completed
    LoginResult(Result<AuthResponse, ApiError>),
    /// Registration completed
    RegisterResult(Result<(), ApiError>),
    /// Google credential exchange completed
    GoogleLoginResult(Result<AuthResponse, ApiError>),
}
