//! UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read and write panel state from Leptos context providers set up
//! in `app::App`.

pub mod ask_panel;
pub mod mail_panel;
pub mod notice_banner;
