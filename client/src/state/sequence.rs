//! Per-panel request sequencing.
//!
//! DESIGN
//! ======
//! Requests from one panel are never cancelled or de-duplicated. Each issued
//! request takes the next sequence number; on completion the policy decides
//! whether its result may touch panel state. The in-flight count is settled
//! for every completion, applied or not.

#[cfg(test)]
#[path = "sequence_test.rs"]
mod sequence_test;

use crate::config::ResponseOrdering;

/// Sequence counter and in-flight tally for one panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RequestSeq {
    issued: u64,
    in_flight: u32,
}

impl RequestSeq {
    /// Register a new request and return its sequence number (starting at 1).
    pub fn issue(&mut self) -> u64 {
        self.issued += 1;
        self.in_flight += 1;
        self.issued
    }

    /// Settle the request numbered `seq`. Returns whether its result should be
    /// applied under `ordering`.
    pub fn settle(&mut self, seq: u64, ordering: ResponseOrdering) -> bool {
        self.in_flight = self.in_flight.saturating_sub(1);
        match ordering {
            ResponseOrdering::LastCompleted => true,
            ResponseOrdering::LatestIssued => seq == self.issued,
        }
    }

    /// Most recently issued sequence number, 0 before the first request.
    #[must_use]
    pub fn latest(&self) -> u64 {
        self.issued
    }

    /// Number of requests issued but not yet settled.
    #[must_use]
    pub fn in_flight(&self) -> u32 {
        self.in_flight
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.in_flight > 0
    }
}
