//! # Habitdesk - Desktop Auth Client
//!
//! A desktop client for the habit tracker backend. This library crate
//! contains all modules used by the binary crate (`main.rs`).
//!
//! ## Architecture
//!
//! The application follows an event-driven pattern:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │  Front-end (input layer)                             │
//! │  - reads user input, runs presence checks            │
//! │  - calls AuthForm action methods                     │
//! │  - drains results via on_tick()                      │
//! └───────────────┬──────────────────────────────────────┘
//!                 │
//! ┌───────────────▼──────────────────────────────────────┐
//! │  AuthForm (controller)                               │
//! │  - state: Arc<RwLock<FormState>>                     │
//! │  - single-flight submit guard                        │
//! │  - maps results to notifications + on_success        │
//! └───────────────┬──────────────────────────────────────┘
//!                 │ async_channel (FormEvent)
//! ┌───────────────▼──────────────────────────────────────┐
//! │  Async tasks (Tokio)                                 │
//! │  - services::api::ApiClient (reqwest)                │
//! │  - one HTTP exchange per submission                  │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **app**: the auth form controller (state, events, handlers)
//! - **core**: error taxonomy and service traits for dependency injection
//! - **services**: the backend HTTP client
//! - **i18n**: static localization table (`en`, `ar`)
//!
//! ## State Management
//!
//! Form state is wrapped in `Arc<parking_lot::RwLock<FormState>>` so async
//! tasks and the rendering layer share it safely. Locks are held briefly.
//! Request results travel back through an unbounded `async_channel`; the
//! owner drains them with [`AuthForm::on_tick`]. Dropping the form closes
//! the receiver, so a response that arrives after disposal is discarded
//! instead of mutating freed state.

pub mod app;
pub mod core;
pub mod i18n;
pub mod services;

// Re-export commonly used types for convenience
pub use app::{AuthForm, FormEvent, FormMode, FormState};
pub use self::core::{ApiError, AuthApi, Notifier, Result};
pub use services::api::ApiClient;
