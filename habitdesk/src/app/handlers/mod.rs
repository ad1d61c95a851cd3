//! User action handlers.

pub(crate) mod auth;
