//! Host configuration parsed from environment variables.

use client::config::ApiConfig;

use crate::error::ServerError;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub api: ApiConfig,
}

impl ServerConfig {
    /// Build typed host config from environment variables.
    ///
    /// Required:
    /// - `CV_API_BASE`: base URL of the external chat/email API
    ///
    /// Optional:
    /// - `CV_RESPONSE_ORDERING`: `last_completed` (default) or `latest_issued`
    /// - `PORT`: default 3000
    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ServerError> {
        let api = ApiConfig::new(
            lookup("CV_API_BASE").as_deref(),
            lookup("CV_RESPONSE_ORDERING").as_deref(),
        )?;
        let port = match lookup("PORT") {
            None => DEFAULT_PORT,
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .ok()
                .filter(|p| *p != 0)
                .ok_or(ServerError::InvalidPort(raw))?,
        };
        Ok(Self { port, api })
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
