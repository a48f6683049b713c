//! Startup errors for the host binary.

use client::config::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("invalid PORT '{0}': expected a number between 1 and 65535")]
    InvalidPort(String),

    #[error("leptos configuration: {0}")]
    Leptos(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
