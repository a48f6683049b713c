//! Typed failures for calls against the external API.

/// Errors produced by the chat and mail calls.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request could not be sent or its body could not be read.
    #[error("network error: {0}")]
    Network(String),

    /// Non-success status with a body that is not the expected JSON.
    #[error("server responded with status {status}")]
    Status { status: u16 },

    /// Success status with a body that is not the expected JSON.
    #[error("malformed response: {0}")]
    Decode(String),

    /// Called outside the browser.
    #[error("not available on server")]
    Unavailable,
}
