//! API endpoint configuration injected into the panel tree.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host binary resolves the external API base URL from its environment at
//! startup and renders it into the page head as `<meta>` tags. The browser reads
//! those tags once at hydration. Both sides build the same [`ApiConfig`] through
//! [`ApiConfig::new`], so validation rules live in one place.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::fmt;
use std::str::FromStr;

/// Meta tag carrying the API base URL in the rendered page.
pub const API_BASE_META: &str = "cv-api-base";
/// Meta tag carrying the response ordering policy in the rendered page.
pub const ORDERING_META: &str = "cv-response-ordering";

/// Errors produced while resolving panel configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A required value was absent or blank.
    #[error("missing configuration value: {name} not set")]
    Missing { name: &'static str },

    /// A value was present but unusable.
    #[error("invalid {name} '{value}': {reason}")]
    Invalid { name: &'static str, value: String, reason: &'static str },
}

/// How completions of overlapping requests from the same panel are applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResponseOrdering {
    /// Only the completion of the most recently issued request is applied.
    LatestIssued,
    /// Every completion is applied; whichever resolves last wins.
    #[default]
    LastCompleted,
}

impl ResponseOrdering {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::LatestIssued => "latest_issued",
            Self::LastCompleted => "last_completed",
        }
    }
}

impl fmt::Display for ResponseOrdering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResponseOrdering {
    type Err = ConfigError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim() {
            "latest_issued" => Ok(Self::LatestIssued),
            "last_completed" => Ok(Self::LastCompleted),
            other => Err(ConfigError::Invalid {
                name: "CV_RESPONSE_ORDERING",
                value: other.to_owned(),
                reason: "expected 'latest_issued' or 'last_completed'",
            }),
        }
    }
}

/// Resolved endpoint configuration for the chat and mail calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
    ordering: ResponseOrdering,
}

impl ApiConfig {
    /// Build a config from raw values.
    ///
    /// The base URL must start with `http://`, `https://`, or `/` (same-origin).
    /// Surrounding whitespace and trailing slashes are stripped. A missing
    /// ordering falls back to [`ResponseOrdering::LastCompleted`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] when the base URL is absent or blank, and
    /// [`ConfigError::Invalid`] when either value cannot be used.
    pub fn new(base_url: Option<&str>, ordering: Option<&str>) -> Result<Self, ConfigError> {
        let raw = base_url.map(str::trim).unwrap_or_default();
        if raw.is_empty() {
            return Err(ConfigError::Missing { name: "CV_API_BASE" });
        }
        if !(raw.starts_with("http://") || raw.starts_with("https://") || raw.starts_with('/')) {
            return Err(ConfigError::Invalid {
                name: "CV_API_BASE",
                value: raw.to_owned(),
                reason: "expected an http(s) URL or a path starting with '/'",
            });
        }
        let ordering = match ordering.map(str::trim).filter(|s| !s.is_empty()) {
            Some(raw) => raw.parse()?,
            None => ResponseOrdering::default(),
        };
        Ok(Self { base_url: raw.trim_end_matches('/').to_owned(), ordering })
    }

    /// Read the config the host rendered into the document head.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] when the base URL meta tag is absent.
    #[cfg(feature = "hydrate")]
    pub fn from_document() -> Result<Self, ConfigError> {
        let read_meta = |name: &str| -> Option<String> {
            let doc = web_sys::window()?.document()?;
            doc.query_selector(&format!("meta[name=\"{name}\"]"))
                .ok()
                .flatten()?
                .get_attribute("content")
        };
        Self::new(read_meta(API_BASE_META).as_deref(), read_meta(ORDERING_META).as_deref())
    }

    /// Normalized base URL without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn ordering(&self) -> ResponseOrdering {
        self.ordering
    }

    /// Full URL of the question endpoint.
    #[must_use]
    pub fn chat_url(&self) -> String {
        format!("{}/chat", self.base_url)
    }

    /// Full URL of the mail endpoint.
    #[must_use]
    pub fn mail_url(&self) -> String {
        format!("{}/email/send", self.base_url)
    }
}
