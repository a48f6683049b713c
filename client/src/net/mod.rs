//! Networking modules for the external chat and mail API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls, `types` defines the wire schema, and `error`
//! the typed failures every call resolves to.

pub mod api;
pub mod error;
pub mod types;
