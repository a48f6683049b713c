//! Wire types for the external chat and mail endpoints.
//!
//! DESIGN
//! ======
//! Response types are lenient: every field is optional so a response missing
//! a field still decodes and degrades to the fallback text or a failure
//! notice instead of a decode error.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Answer shown when the chat endpoint returns no usable answer.
pub const NO_ANSWER: &str = "No answer";
/// Notice text for an accepted mail request.
pub const MAIL_SENT: &str = "Email sent!";
/// Reason used when a rejected mail response carries no `error`.
pub const UNKNOWN_MAIL_ERROR: &str = "unknown error";

/// Body of `POST {base}/chat`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChatRequest {
    pub question: String,
}

/// Body returned by `POST {base}/chat`.
///
/// `answer` is kept as a raw JSON value so a non-string answer is shown
/// rather than failing the decode.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub answer: Option<Value>,
}

impl ChatResponse {
    /// Response carrying a plain text answer.
    #[must_use]
    pub fn with_answer(text: impl Into<String>) -> Self {
        Self { answer: Some(Value::String(text.into())) }
    }

    /// The answer to display: the returned text, or [`NO_ANSWER`] when it is
    /// absent or falsy. Non-string answers render as JSON.
    #[must_use]
    pub fn answer_text(&self) -> String {
        match &self.answer {
            Some(value) if is_truthy(value) => display_value(value),
            _ => NO_ANSWER.to_owned(),
        }
    }
}

/// Body of `POST {base}/email/send`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MailRequest {
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

/// Body returned by `POST {base}/email/send`.
///
/// `ok` and `error` are kept as raw JSON values; the backend is free to send
/// non-boolean `ok` or structured `error` payloads.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct MailResponse {
    #[serde(default)]
    pub ok: Value,
    #[serde(default)]
    pub error: Option<Value>,
}

impl MailResponse {
    /// Whether the backend accepted the message: `ok` is truthy.
    #[must_use]
    pub fn accepted(&self) -> bool {
        is_truthy(&self.ok)
    }

    /// Human-readable rejection reason.
    #[must_use]
    pub fn error_text(&self) -> String {
        match &self.error {
            None | Some(Value::Null) => UNKNOWN_MAIL_ERROR.to_owned(),
            Some(Value::String(s)) if s.is_empty() => UNKNOWN_MAIL_ERROR.to_owned(),
            Some(other) => display_value(other),
        }
    }

    /// Notice text: [`MAIL_SENT`] on success, `Failed: <error>` otherwise.
    #[must_use]
    pub fn notice_text(&self) -> String {
        if self.accepted() {
            MAIL_SENT.to_owned()
        } else {
            failure_text(&self.error_text())
        }
    }
}

/// Format a mail failure the way rejected responses are reported.
#[must_use]
pub fn failure_text(reason: &str) -> String {
    format!("Failed: {reason}")
}

/// Truthiness of a JSON value as a browser script sees it: `false`, `0`,
/// `""` and `null` are falsy, everything else (including `[]` and `{}`) is
/// truthy.
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Strings verbatim, anything else as compact JSON.
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
