//! Data Transfer Objects for API communication.

pub mod auth;

pub use auth::*;
