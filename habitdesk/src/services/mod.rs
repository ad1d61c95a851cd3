//! External integrations.

pub mod api;
