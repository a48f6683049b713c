//! Question/answer state for the CV chat panel.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

use super::sequence::RequestSeq;
use crate::config::ResponseOrdering;
use crate::net::error::ApiError;
use crate::net::types::{ChatRequest, ChatResponse};

/// What the answer area currently shows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AnswerView {
    /// Nothing asked yet.
    #[default]
    Empty,
    /// Text from a completed call, possibly the fallback.
    Answered(String),
    /// The call failed before a usable response arrived.
    Failed(String),
}

impl AnswerView {
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Empty => "",
            Self::Answered(text) | Self::Failed(text) => text,
        }
    }

    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// An issued ask: the sequence number plus the payload to send.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AskTicket {
    pub seq: u64,
    pub request: ChatRequest,
}

/// Chat panel state.
#[derive(Clone, Debug, Default)]
pub struct QueryState {
    pub question: String,
    pub answer: AnswerView,
    pub requests: RequestSeq,
}

impl QueryState {
    /// Replace the question verbatim.
    pub fn set_question(&mut self, text: String) {
        self.question = text;
    }

    /// Issue an ask for the current question. The answer is left untouched
    /// until a completion is applied.
    pub fn begin_ask(&mut self) -> AskTicket {
        AskTicket {
            seq: self.requests.issue(),
            request: ChatRequest { question: self.question.clone() },
        }
    }

    /// Record the outcome of the ask numbered `seq`. Returns whether the
    /// answer was updated.
    pub fn complete_ask(
        &mut self,
        seq: u64,
        result: Result<ChatResponse, ApiError>,
        ordering: ResponseOrdering,
    ) -> bool {
        if !self.requests.settle(seq, ordering) {
            return false;
        }
        self.answer = match result {
            Ok(resp) => AnswerView::Answered(resp.answer_text()),
            Err(e) => AnswerView::Failed(format!("Request failed: {e}")),
        };
        true
    }
}
