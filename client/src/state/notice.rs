//! Non-blocking notice banner state.
//!
//! DESIGN
//! ======
//! At most one notice is visible; a newer one replaces the older. Dismissal is
//! keyed by id so a timer armed for an older notice cannot hide a newer one.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

/// How long a notice stays up before it hides itself.
pub const NOTICE_TIMEOUT_MS: u64 = 5_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Failure,
}

impl NoticeKind {
    /// CSS modifier for the banner.
    #[must_use]
    pub fn class_suffix(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Failure => "failure",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub text: String,
}

/// Banner state shared through context.
#[derive(Clone, Debug, Default)]
pub struct NoticeState {
    pub current: Option<Notice>,
    next_id: u64,
}

impl NoticeState {
    /// Show a notice, replacing any visible one. Returns its id.
    pub fn push(&mut self, kind: NoticeKind, text: String) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.current = Some(Notice { id, kind, text });
        id
    }

    /// Hide the notice `id` if it is still the visible one.
    pub fn dismiss(&mut self, id: u64) -> bool {
        if self.current.as_ref().is_some_and(|n| n.id == id) {
            self.current = None;
            true
        } else {
            false
        }
    }
}
