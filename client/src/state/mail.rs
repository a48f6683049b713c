//! Draft state for the send-email panel.
//!
//! Fields are kept after a send, successful or not.

#[cfg(test)]
#[path = "mail_test.rs"]
mod mail_test;

use super::notice::NoticeKind;
use super::sequence::RequestSeq;
use crate::config::ResponseOrdering;
use crate::net::error::ApiError;
use crate::net::types::{MailRequest, MailResponse, failure_text};

/// An issued send: the sequence number plus the payload to send.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SendTicket {
    pub seq: u64,
    pub request: MailRequest,
}

/// Mail panel state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MailDraft {
    pub recipient: String,
    pub subject: String,
    pub body: String,
    pub requests: RequestSeq,
}

impl MailDraft {
    pub fn set_recipient(&mut self, text: String) {
        self.recipient = text;
    }

    pub fn set_subject(&mut self, text: String) {
        self.subject = text;
    }

    pub fn set_body(&mut self, text: String) {
        self.body = text;
    }

    /// Issue a send of the current fields. No field is validated.
    pub fn begin_send(&mut self) -> SendTicket {
        SendTicket {
            seq: self.requests.issue(),
            request: MailRequest {
                recipient: self.recipient.clone(),
                subject: self.subject.clone(),
                body: self.body.clone(),
            },
        }
    }

    /// Settle the send numbered `seq` and return the notice to show.
    ///
    /// Every send reaches the backend, so every outcome is reported regardless
    /// of ordering; overlapping sends each produce their own notice.
    pub fn complete_send(&mut self, seq: u64, result: Result<MailResponse, ApiError>) -> (NoticeKind, String) {
        let _ = self.requests.settle(seq, ResponseOrdering::LastCompleted);
        match result {
            Ok(resp) if resp.accepted() => (NoticeKind::Success, resp.notice_text()),
            Ok(resp) => (NoticeKind::Failure, resp.notice_text()),
            Err(e) => (NoticeKind::Failure, failure_text(&e.to_string())),
        }
    }
}
