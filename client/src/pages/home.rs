//! Landing page hosting the chat and mail panels side by side.

use leptos::prelude::*;

use crate::components::{ask_panel::AskPanel, mail_panel::MailPanel, notice_banner::NoticeBanner};
use crate::config::ApiConfig;

/// Message shown when the page was rendered without an API base URL.
pub const CONFIG_MISSING_MESSAGE: &str = "The chat service is not configured.";

/// Both panels when an [`ApiConfig`] is in context; a configuration message otherwise.
#[component]
pub fn HomePage() -> impl IntoView {
    let configured = use_context::<ApiConfig>().is_some();

    view! {
        <main class="page">
            <div class="page__column">
                {if configured {
                    view! {
                        <AskPanel/>
                        <MailPanel/>
                        <NoticeBanner/>
                    }
                        .into_any()
                } else {
                    view! {
                        <section class="panel panel--error" role="alert">
                            <p>{CONFIG_MISSING_MESSAGE}</p>
                        </section>
                    }
                        .into_any()
                }}
            </div>
        </main>
    }
}
