//! # Shared Data Transfer Objects Library
//!
//! This library defines the wire contract between the habitdesk client and
//! the habit tracker backend API. All DTOs use JSON serialization via `serde`.
//!
//! ## Wire Format
//!
//! - The backend expects camelCase keys for a few fields (`fullName`,
//!   `idToken`); those fields carry explicit `#[serde(rename)]` attributes.
//! - The `user` value returned on successful authentication is opaque to the
//!   client and is carried as raw JSON (`serde_json::Value`), never
//!   interpreted or mutated.

pub mod dto;

// Re-export commonly used types for convenience
pub use dto::*;
