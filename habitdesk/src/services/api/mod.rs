//! # Backend API Client Module
//!
//! HTTP client for communicating with the habit tracker backend API.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs      - Module exports
//! ├── client.rs   - ApiClient struct, generic requests, error normalization
//! └── auth.rs     - Authentication endpoints (login, register, google-login)
//! ```

pub mod auth;
pub mod client;

pub use client::{ApiClient, ErrorBody};
