//! # Auth Form Controller
//!
//! The [`AuthForm`] struct orchestrates the login/signup form: it owns the
//! shared [`FormState`], dispatches requests through the [`AuthApi`] seam,
//! and maps outcomes onto the notification surface and the caller's
//! `on_success` callback.
//!
//! ## Architecture
//!
//! Action methods (`submit`, `toggle_mode`, `google_credential`) run on the
//! caller's thread and return immediately; network work happens in spawned
//! Tokio tasks that send a [`FormEvent`] back through an unbounded channel.
//! The owner drains results each frame with [`AuthForm::on_tick`].
//!
//! ## Lifetime of a submission
//!
//! 1. `submit` claims the pending flag under the write lock (single-flight
//!    guard) and spawns the request task.
//! 2. The task performs exactly one HTTP exchange and sends the result.
//! 3. `on_tick` clears `pending` unconditionally, then branches on the
//!    outcome: notification, optional mode transition, optional
//!    `on_success(token, user)`.
//!
//! If the form is dropped while a request is outstanding, the channel
//! receiver goes with it and the late result dies in `send`; no state is
//! touched after disposal.

mod event_handler;
mod events;
mod handlers;
mod state;

pub use events::FormEvent;
pub use state::{FormMode, FormState};

use std::sync::Arc;

use async_channel::{unbounded, Receiver, Sender};
use parking_lot::RwLock;
use serde_json::Value;

use crate::core::service::{AuthApi, Notifier};
use crate::i18n::{Lang, Translations};

/// Callback invoked exactly once per successful authentication (login or
/// Google login, never registration) with the token and the opaque user
/// value, both forwarded verbatim.
pub type OnSuccess = Box<dyn Fn(String, Value) + Send + Sync>;

/// Login/signup form controller.
pub struct AuthForm {
    /// Shared form state; the rendering layer reads it, handlers and the
    /// event handler write it. Hold locks briefly.
    pub state: Arc<RwLock<FormState>>,

    /// Receiver for async request results, drained in [`Self::on_tick`].
    pub(crate) event_rx: Receiver<FormEvent>,

    /// Sender cloned into request tasks.
    event_tx: Sender<FormEvent>,

    api: Arc<dyn AuthApi>,
    pub(crate) notifier: Arc<dyn Notifier>,
    pub(crate) on_success: OnSuccess,

    /// Language this form renders in.
    pub lang: Lang,
    pub(crate) translations: &'static Translations,
}

impl AuthForm {
    /// Create a form in the initial state: login mode, empty fields, not
    /// pending.
    pub fn new(
        api: Arc<dyn AuthApi>,
        notifier: Arc<dyn Notifier>,
        lang: Lang,
        on_success: OnSuccess,
    ) -> Self {
        let (event_tx, event_rx) = unbounded();

        Self {
            state: Arc::new(RwLock::new(FormState::default())),
            event_rx,
            event_tx,
            api,
            notifier,
            on_success,
            lang,
            translations: lang.translations(),
        }
    }

    /// Drain pending request results (non-blocking). Call once per frame.
    pub fn on_tick(&self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_event(event);
        }
    }

    pub(crate) fn handle_event(&self, event: FormEvent) {
        self.handle_event_impl(event);
    }

    /// Submit the form in its current mode. Ignored while a request is
    /// already in flight.
    pub fn submit(&self) {
        handlers::auth::handle_submit(self.state.clone(), self.event_tx.clone(), self.api.clone());
    }

    /// Flip between login and signup; typed field values are preserved.
    pub fn toggle_mode(&self) {
        handlers::auth::handle_toggle_mode(self.state.clone());
    }

    /// OAuth widget success callback: exchange the opaque credential for a
    /// session. On success this behaves exactly like a login success.
    pub fn google_credential(&self, credential: String) {
        handlers::auth::handle_google_credential(
            self.state.clone(),
            self.event_tx.clone(),
            self.api.clone(),
            credential,
        );
    }

    /// OAuth widget error callback: the credential exchange failed inside
    /// the widget, before reaching this app. Emits the fixed failure
    /// notification and issues no backend call.
    pub fn google_error(&self) {
        tracing::warn!("Google sign-in failed inside the widget");
        self.notifier.error(self.translations.google_login_failed);
    }

    // ========== Controlled-input setters for the input layer ==========

    pub fn set_email(&self, value: String) {
        self.state.write().email = value;
    }

    pub fn set_password(&self, value: String) {
        self.state.write().password = value;
    }

    pub fn set_full_name(&self, value: String) {
        self.state.write().full_name = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ApiError;
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use serde_json::json;
    use shared::AuthResponse;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    // ========== Test doubles ==========

    struct MockApi {
        login_calls: AtomicUsize,
        register_calls: AtomicUsize,
        google_calls: AtomicUsize,
        last_login: Mutex<Option<(String, String)>>,
        last_register: Mutex<Option<(String, String, String)>>,
        last_google: Mutex<Option<String>>,
        login_result: Mutex<Result<AuthResponse, ApiError>>,
        register_result: Mutex<Result<(), ApiError>>,
        google_result: Mutex<Result<AuthResponse, ApiError>>,
    }

    impl MockApi {
        fn auth_response() -> AuthResponse {
            AuthResponse {
                token: "jwt-token-here".to_string(),
                user: json!({ "id": 7, "email": "a@b.c" }),
            }
        }

        fn succeeding() -> Self {
            Self {
                login_calls: AtomicUsize::new(0),
                register_calls: AtomicUsize::new(0),
                google_calls: AtomicUsize::new(0),
                last_login: Mutex::new(None),
                last_register: Mutex::new(None),
                last_google: Mutex::new(None),
                login_result: Mutex::new(Ok(Self::auth_response())),
                register_result: Mutex::new(Ok(())),
                google_result: Mutex::new(Ok(Self::auth_response())),
            }
        }

        fn failing_login(error: ApiError) -> Self {
            let api = Self::succeeding();
            *api.login_result.lock() = Err(error);
            api
        }
    }

    #[async_trait]
    impl AuthApi for MockApi {
        async fn login(&self, email: String, password: String) -> crate::core::error::Result<AuthResponse> {
            self.login_calls.fetch_add(1, Ordering::SeqCst);
            *self.last_login.lock() = Some((email, password));
            self.login_result.lock().clone()
        }

        async fn register(
            &self,
            email: String,
            password: String,
            full_name: String,
        ) -> crate::core::error::Result<()> {
            self.register_calls.fetch_add(1, Ordering::SeqCst);
            *self.last_register.lock() = Some((email, password, full_name));
            self.register_result.lock().clone()
        }

        async fn google_login(&self, id_token: String) -> crate::core::error::Result<AuthResponse> {
            self.google_calls.fetch_add(1, Ordering::SeqCst);
            *self.last_google.lock() = Some(id_token);
            self.google_result.lock().clone()
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        successes: Mutex<Vec<String>>,
        errors: Mutex<Vec<String>>,
    }

    impl Notifier for RecordingNotifier {
        fn success(&self, message: &str) {
            self.successes.lock().push(message.to_string());
        }

        fn error(&self, message: &str) {
            self.errors.lock().push(message.to_string());
        }
    }

    type SeenLogins = Arc<Mutex<Vec<(String, Value)>>>;

    fn form_with(api: Arc<MockApi>) -> (AuthForm, Arc<RecordingNotifier>, SeenLogins) {
        let notifier = Arc::new(RecordingNotifier::default());
        let seen: SeenLogins = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let form = AuthForm::new(
            api,
            notifier.clone(),
            Lang::En,
            Box::new(move |token, user| {
                sink.lock().push((token, user));
            }),
        );
        (form, notifier, seen)
    }

    /// Await the one outstanding result and apply it.
    async fn settle(form: &AuthForm) {
        let event = form.event_rx.recv().await.expect("request task sent a result");
        form.handle_event(event);
    }

    // ========== Login ==========

    #[tokio::test]
    async fn login_submits_once_and_forwards_token_and_user() {
        let api = Arc::new(MockApi::succeeding());
        let (form, notifier, seen) = form_with(api.clone());

        form.set_email("a@b.c".to_string());
        form.set_password("hunter2".to_string());
        form.submit();
        settle(&form).await;

        assert_eq!(api.login_calls.load(Ordering::SeqCst), 1);
        assert_eq!(
            *api.last_login.lock(),
            Some(("a@b.c".to_string(), "hunter2".to_string()))
        );

        let seen = seen.lock();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].0, "jwt-token-here");
        assert_eq!(seen[0].1["id"], 7);

        assert_eq!(*notifier.successes.lock(), vec!["Welcome back!"]);
        assert!(notifier.errors.lock().is_empty());
        // Login success leaves the mode unchanged
        assert_eq!(form.state.read().mode, FormMode::Login);
    }

    #[tokio::test]
    async fn pending_is_true_strictly_between_submit_and_settle() {
        let api = Arc::new(MockApi::succeeding());
        let (form, _notifier, _seen) = form_with(api);

        assert!(!form.state.read().pending);

        form.submit();
        assert!(form.state.read().pending, "pending set synchronously on submit");

        let event = form.event_rx.recv().await.expect("result");
        assert!(form.state.read().pending, "still pending until the result is applied");

        form.handle_event(event);
        assert!(!form.state.read().pending);
    }

    #[tokio::test]
    async fn pending_clears_on_failure_too() {
        let api = Arc::new(MockApi::failing_login(ApiError::Http {
            status: 401,
            message: "invalid credentials".to_string(),
        }));
        let (form, notifier, seen) = form_with(api);

        form.submit();
        settle(&form).await;

        assert!(!form.state.read().pending);
        assert_eq!(*notifier.errors.lock(), vec!["invalid credentials"]);
        assert!(seen.lock().is_empty());
    }

    #[tokio::test]
    async fn network_error_message_is_surfaced_verbatim() {
        let api = Arc::new(MockApi::failing_login(ApiError::Network(
            "Network error: connection refused".to_string(),
        )));
        let (form, notifier, _seen) = form_with(api);

        form.submit();
        settle(&form).await;

        assert_eq!(
            *notifier.errors.lock(),
            vec!["Network error: connection refused"]
        );
    }

    #[tokio::test]
    async fn second_submit_while_pending_is_ignored() {
        let api = Arc::new(MockApi::succeeding());
        let (form, _notifier, seen) = form_with(api.clone());

        form.submit();
        form.submit(); // in flight, must be dropped

        settle(&form).await;
        assert_eq!(api.login_calls.load(Ordering::SeqCst), 1);
        assert!(form.event_rx.try_recv().is_err(), "exactly one result event");
        assert_eq!(seen.lock().len(), 1);
    }

    // ========== Registration ==========

    #[tokio::test]
    async fn register_success_switches_to_login_without_on_success() {
        let api = Arc::new(MockApi::succeeding());
        let (form, notifier, seen) = form_with(api.clone());

        form.toggle_mode();
        form.set_email("a@b.c".to_string());
        form.set_password("hunter2".to_string());
        form.set_full_name("Ada Lovelace".to_string());
        form.submit();
        settle(&form).await;

        assert_eq!(api.register_calls.load(Ordering::SeqCst), 1);
        assert_eq!(
            *api.last_register.lock(),
            Some((
                "a@b.c".to_string(),
                "hunter2".to_string(),
                "Ada Lovelace".to_string()
            ))
        );
        assert_eq!(
            *notifier.successes.lock(),
            vec!["Account created! Please login."]
        );
        assert!(seen.lock().is_empty(), "registration never authenticates");
        assert_eq!(form.state.read().mode, FormMode::Login);
        assert!(!form.state.read().pending);
    }

    #[tokio::test]
    async fn register_failure_stays_in_signup_mode() {
        let api = Arc::new(MockApi::succeeding());
        *api.register_result.lock() = Err(ApiError::Http {
            status: 409,
            message: "email already registered".to_string(),
        });
        let (form, notifier, _seen) = form_with(api);

        form.toggle_mode();
        form.submit();
        settle(&form).await;

        assert_eq!(*notifier.errors.lock(), vec!["email already registered"]);
        assert_eq!(form.state.read().mode, FormMode::Signup);
        assert!(!form.state.read().pending);
    }

    // ========== Mode toggle ==========

    #[test]
    fn toggle_preserves_typed_fields() {
        let api = Arc::new(MockApi::succeeding());
        let (form, _notifier, _seen) = form_with(api);

        form.set_email("a@b.c".to_string());
        form.set_password("hunter2".to_string());
        form.set_full_name("Ada Lovelace".to_string());

        form.toggle_mode();
        {
            let state = form.state.read();
            assert_eq!(state.mode, FormMode::Signup);
            assert_eq!(state.email, "a@b.c");
            assert_eq!(state.password, "hunter2");
            assert_eq!(state.full_name, "Ada Lovelace");
        }

        form.toggle_mode();
        let state = form.state.read();
        assert_eq!(state.mode, FormMode::Login);
        assert_eq!(state.email, "a@b.c");
    }

    #[test]
    fn toggling_twice_is_the_identity_on_mode() {
        assert_eq!(FormMode::Login.toggled().toggled(), FormMode::Login);
        assert_eq!(FormMode::Signup.toggled().toggled(), FormMode::Signup);
    }

    // ========== Google login ==========

    #[tokio::test]
    async fn google_credential_success_behaves_like_login() {
        let api = Arc::new(MockApi::succeeding());
        let (form, notifier, seen) = form_with(api.clone());

        form.google_credential("opaque-credential".to_string());
        assert!(form.state.read().pending);
        settle(&form).await;

        assert_eq!(api.google_calls.load(Ordering::SeqCst), 1);
        assert_eq!(
            *api.last_google.lock(),
            Some("opaque-credential".to_string())
        );
        assert_eq!(seen.lock().len(), 1);
        assert_eq!(*notifier.successes.lock(), vec!["Welcome back!"]);
        assert!(!form.state.read().pending);
    }

    #[tokio::test]
    async fn google_widget_error_notifies_without_backend_call() {
        let api = Arc::new(MockApi::succeeding());
        let (form, notifier, seen) = form_with(api.clone());

        form.google_error();

        assert_eq!(*notifier.errors.lock(), vec!["Google Login Failed"]);
        assert_eq!(api.login_calls.load(Ordering::SeqCst), 0);
        assert_eq!(api.register_calls.load(Ordering::SeqCst), 0);
        assert_eq!(api.google_calls.load(Ordering::SeqCst), 0);
        assert!(seen.lock().is_empty());
        assert!(!form.state.read().pending);
    }

    // ========== Disposal ==========

    /// Login that blocks until the test releases it, so the form can be
    /// dropped while the request is still in flight.
    struct GatedApi {
        release: Receiver<()>,
        completed: Arc<AtomicBool>,
    }

    #[async_trait]
    impl AuthApi for GatedApi {
        async fn login(&self, _email: String, _password: String) -> crate::core::error::Result<AuthResponse> {
            let _ = self.release.recv().await;
            self.completed.store(true, Ordering::SeqCst);
            Ok(MockApi::auth_response())
        }

        async fn register(
            &self,
            _email: String,
            _password: String,
            _full_name: String,
        ) -> crate::core::error::Result<()> {
            Ok(())
        }

        async fn google_login(&self, _id_token: String) -> crate::core::error::Result<AuthResponse> {
            Ok(MockApi::auth_response())
        }
    }

    #[tokio::test]
    async fn late_response_after_form_drop_is_discarded() {
        let (release_tx, release_rx) = unbounded();
        let completed = Arc::new(AtomicBool::new(false));
        let api = Arc::new(GatedApi {
            release: release_rx,
            completed: completed.clone(),
        });

        let notifier = Arc::new(RecordingNotifier::default());
        let seen: SeenLogins = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let form = AuthForm::new(
            api,
            notifier.clone(),
            Lang::En,
            Box::new(move |token, user| {
                sink.lock().push((token, user));
            }),
        );

        form.submit();
        assert!(form.state.read().pending);

        // The channel receiver goes away with the form while the request
        // task is still blocked inside login.
        drop(form);
        release_tx.send(()).await.expect("request task holds the receiver");

        while !completed.load(Ordering::SeqCst) {
            tokio::task::yield_now().await;
        }
        // Give the task time to hit the closed channel with its result.
        tokio::time::sleep(std::time::Duration::from_millis(20)).await;

        assert!(notifier.successes.lock().is_empty());
        assert!(notifier.errors.lock().is_empty());
        assert!(seen.lock().is_empty());
    }

    // ========== Localization wiring ==========

    #[tokio::test]
    async fn notifications_follow_the_form_language() {
        let api = Arc::new(MockApi::succeeding());
        let notifier = Arc::new(RecordingNotifier::default());
        let form = AuthForm::new(
            api,
            notifier.clone(),
            Lang::Ar,
            Box::new(|_token, _user| {}),
        );

        form.submit();
        let event = form.event_rx.recv().await.expect("result");
        form.handle_event(event);

        assert_eq!(*notifier.successes.lock(), vec!["مرحباً بعودتك!"]);
    }

    // ========== Initial state ==========

    #[test]
    fn initial_state_is_login_and_not_pending() {
        let api = Arc::new(MockApi::succeeding());
        let (form, _notifier, _seen) = form_with(api);

        let state = form.state.read();
        assert_eq!(state.mode, FormMode::Login);
        assert_eq!(state.email, "");
        assert_eq!(state.password, "");
        assert_eq!(state.full_name, "");
        assert!(!state.pending);
    }
}
