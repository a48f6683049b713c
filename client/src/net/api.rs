//! HTTP calls against the external chat and mail API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since these
//! calls only happen in response to browser clicks.
//!
//! ERROR HANDLING
//! ==============
//! Every call resolves to a `Result`. The response body is decoded whatever
//! the status code; only a body that fails to decode is turned into an error,
//! and then the status decides between `Status` and `Decode`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{ChatRequest, ChatResponse, MailRequest, MailResponse};
use crate::config::ApiConfig;

#[cfg(any(test, feature = "hydrate"))]
fn decode_response<T: serde::de::DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| {
        if (200..300).contains(&status) {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Status { status }
        }
    })
}

#[cfg(feature = "hydrate")]
async fn post_json<B, T>(url: &str, body: &B) -> Result<T, ApiError>
where
    B: serde::Serialize,
    T: serde::de::DeserializeOwned,
{
    let resp = gloo_net::http::Request::post(url)
        .json(body)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let status = resp.status();
    let text = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
    decode_response(status, &text)
}

/// Ask a question via `POST {base}/chat`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the body cannot be decoded.
pub async fn ask(config: &ApiConfig, request: &ChatRequest) -> Result<ChatResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json(&config.chat_url(), request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, request);
        Err(ApiError::Unavailable)
    }
}

/// Submit a mail via `POST {base}/email/send`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the body cannot be decoded.
pub async fn send_mail(config: &ApiConfig, request: &MailRequest) -> Result<MailResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json(&config.mail_url(), request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, request);
        Err(ApiError::Unavailable)
    }
}
