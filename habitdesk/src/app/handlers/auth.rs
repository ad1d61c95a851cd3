//! # Authentication Handlers
//!
//! Handlers for form submission, mode switching, and the Google credential
//! exchange. Each submission claims the pending flag under the write lock
//! before spawning its request task, so at most one request is in flight
//! per form regardless of how the UI gates its buttons.

use std::sync::Arc;

use async_channel::Sender;
use parking_lot::RwLock;

use crate::app::events::FormEvent;
use crate::app::state::{FormMode, FormState};
use crate::core::service::AuthApi;

/// Submit the form in its current mode.
///
/// Internal handler function - use [`crate::app::AuthForm::submit`] instead.
pub(crate) fn handle_submit(
    state: Arc<RwLock<FormState>>,
    event_tx: Sender<FormEvent>,
    api: Arc<dyn AuthApi>,
) {
    let (mode, email, password, full_name) = {
        let mut state = state.write();
        if state.pending {
            tracing::warn!("Submit ignored: a request is already in flight");
            return;
        }
        state.pending = true;
        (
            state.mode,
            state.email.clone(),
            state.password.clone(),
            state.full_name.clone(),
        )
    };

    tokio::spawn(async move {
        match mode {
            FormMode::Login => {
                let result = api.login(email, password).await;
                let _ = event_tx.send(FormEvent::LoginResult(result)).await;
            }
            FormMode::Signup => {
                let result = api.register(email, password, full_name).await;
                let _ = event_tx.send(FormEvent::RegisterResult(result)).await;
            }
        }
    });
}

/// Exchange a Google credential delivered by the OAuth widget's success
/// callback.
///
/// Internal handler function - use
/// [`crate::app::AuthForm::google_credential`] instead.
pub(crate) fn handle_google_credential(
    state: Arc<RwLock<FormState>>,
    event_tx: Sender<FormEvent>,
    api: Arc<dyn AuthApi>,
    credential: String,
) {
    {
        let mut state = state.write();
        if state.pending {
            tracing::warn!("Google login ignored: a request is already in flight");
            return;
        }
        state.pending = true;
    }

    tokio::spawn(async move {
        let result = api.google_login(credential).await;
        let _ = event_tx.send(FormEvent::GoogleLoginResult(result)).await;
    });
}

/// Flip between login and signup. Typed fields are kept.
///
/// Internal handler function - use [`crate::app::AuthForm::toggle_mode`]
/// instead.
pub(crate) fn handle_toggle_mode(state: Arc<RwLock<FormState>>) {
    let mut state = state.write();
    state.mode = state.mode.toggled();
}
