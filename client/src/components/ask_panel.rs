//! CV chat panel: question input, Ask button, and answer block.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each click issues one `POST {base}/chat` on a local task and returns
//! immediately. Clicks are never blocked while a call is in flight; the
//! configured ordering decides which completion reaches the answer block.

#[cfg(test)]
#[path = "ask_panel_test.rs"]
mod ask_panel_test;

use leptos::prelude::*;

use crate::config::ApiConfig;
#[cfg(any(test, feature = "hydrate"))]
use crate::net::{error::ApiError, types::ChatResponse};
use crate::state::query::QueryState;

pub const ASK_PLACEHOLDER: &str = "Ask: \"What role did I have at my last position?\"";

/// Question form bound to the shared [`QueryState`].
#[component]
pub fn AskPanel() -> impl IntoView {
    let query = expect_context::<RwSignal<QueryState>>();
    let config = expect_context::<ApiConfig>();

    let on_ask = move |_| {
        let Some(ticket) = query.try_update(QueryState::begin_ask) else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let config = config.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::ask(&config, &ticket.request).await;
                if let Err(e) = &result {
                    log::warn!("ask #{} failed: {e}", ticket.seq);
                }
                if query.try_update(|q| finish_ask(q, &config, ticket.seq, result)) == Some(false) {
                    log::debug!("discarded stale answer #{}", ticket.seq);
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (ticket, &config);
        }
    };

    let busy = move || if query.with(|q| q.requests.is_busy()) { "true" } else { "false" };

    view! {
        <section class="panel" aria-busy=busy>
            <h1 class="panel__title">"CV Chat"</h1>
            <input
                class="panel__input"
                type="text"
                placeholder=ASK_PLACEHOLDER
                prop:value=move || query.with(|q| q.question.clone())
                on:input=move |ev| query.update(|q| q.set_question(event_target_value(&ev)))
            />
            <button class="panel__button" on:click=on_ask>
                "Ask"
            </button>
            <pre
                class="panel__answer"
                class:panel__answer--failed=move || query.with(|q| q.answer.is_failed())
            >
                {move || query.with(|q| q.answer.text().to_owned())}
            </pre>
        </section>
    }
}

/// Apply a finished ask under the configured response ordering.
#[cfg(any(test, feature = "hydrate"))]
fn finish_ask(query: &mut QueryState, config: &ApiConfig, seq: u64, result: Result<ChatResponse, ApiError>) -> bool {
    query.complete_ask(seq, result, config.ordering())
}
