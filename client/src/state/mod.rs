//! Panel state modules.
//!
//! DESIGN
//! ======
//! The two forms own independent state (`query`, `mail`) so neither action can
//! reach the other's fields. `notice` carries mail outcomes to the banner and
//! `sequence` numbers requests for stale-response gating.

pub mod mail;
pub mod notice;
pub mod query;
pub mod sequence;
