//! # Event Handler
//!
//! Applies async request results to form state, the notification surface,
//! and the caller's `on_success` callback.

use crate::app::events::FormEvent;
use crate::app::state::FormMode;
use crate::app::AuthForm;
use crate::core::error::ApiError;
use shared::AuthResponse;

impl AuthForm {
    pub(crate) fn handle_event_impl(&self, event: FormEvent) {
        // Settle path: pending clears for every outcome, before the result
        // is inspected.
        self.state.write().pending = false;

        match event {
            FormEvent::LoginResult(result) | FormEvent::GoogleLoginResult(result) => {
                self.handle_login_result(result);
            }
            FormEvent::RegisterResult(result) => {
                self.handle_register_result(result);
            }
        }
    }

    /// Shared success path for password and Google login: notify, then hand
    /// token and user to the caller. Mode is left unchanged.
    fn handle_login_result(&self, result: Result<AuthResponse, ApiError>) {
        match result {
            Ok(auth) => {
                tracing::info!("Authenticated");
                self.notifier.success(self.translations.welcome_back);
                (self.on_success)(auth.token, auth.user);
            }
            Err(e) => {
                tracing::warn!(error = %e, "Authentication failed");
                self.notifier.error(&e.to_string());
            }
        }
    }

    /// Registration success switches back to the login form; it never
    /// invokes `on_success` (the user logs in afterwards).
    fn handle_register_result(&self, result: Result<(), ApiError>) {
        match result {
            Ok(()) => {
                tracing::info!("Account created");
                self.notifier.success(self.translations.account_created);
                self.state.write().mode = FormMode::Login;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Registration failed");
                self.notifier.error(&e.to_string());
            }
        }
    }
}
