//! Core types: error taxonomy and service traits.

pub mod error;
pub mod service;

pub use error::{ApiError, Result};
pub use service::{AuthApi, Notifier};
