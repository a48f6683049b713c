//! Send-email panel: recipient, subject, body, and Send button.

#[cfg(test)]
#[path = "mail_panel_test.rs"]
mod mail_panel_test;

use leptos::prelude::*;

use crate::config::ApiConfig;
#[cfg(any(test, feature = "hydrate"))]
use crate::net::{error::ApiError, types::MailResponse};
use crate::state::mail::MailDraft;
use crate::state::notice::NoticeState;

/// Mail form bound to the shared [`MailDraft`]; outcomes go to the notice banner.
#[component]
pub fn MailPanel() -> impl IntoView {
    let mail = expect_context::<RwSignal<MailDraft>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let config = expect_context::<ApiConfig>();

    let on_send = move |_| {
        let Some(ticket) = mail.try_update(MailDraft::begin_send) else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let config = config.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::send_mail(&config, &ticket.request).await;
                if let Err(e) = &result {
                    log::warn!("send #{} failed: {e}", ticket.seq);
                }
                mail.try_update(|m| notices.try_update(|n| finish_send(m, n, ticket.seq, result)));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (ticket, &config, notices);
        }
    };

    let busy = move || if mail.with(|m| m.requests.is_busy()) { "true" } else { "false" };

    view! {
        <section class="panel" aria-busy=busy>
            <h2 class="panel__title panel__title--small">"Send Email"</h2>
            <input
                class="panel__input"
                type="text"
                placeholder="recipient@example.com"
                prop:value=move || mail.with(|m| m.recipient.clone())
                on:input=move |ev| mail.update(|m| m.set_recipient(event_target_value(&ev)))
            />
            <input
                class="panel__input"
                type="text"
                placeholder="Subject"
                prop:value=move || mail.with(|m| m.subject.clone())
                on:input=move |ev| mail.update(|m| m.set_subject(event_target_value(&ev)))
            />
            <textarea
                class="panel__input panel__input--body"
                placeholder="Body"
                prop:value=move || mail.with(|m| m.body.clone())
                on:input=move |ev| mail.update(|m| m.set_body(event_target_value(&ev)))
            ></textarea>
            <button class="panel__button" on:click=on_send>
                "Send"
            </button>
        </section>
    }
}

/// Settle a finished send and show its outcome. Returns the notice id.
#[cfg(any(test, feature = "hydrate"))]
fn finish_send(
    mail: &mut MailDraft,
    notices: &mut NoticeState,
    seq: u64,
    result: Result<MailResponse, ApiError>,
) -> u64 {
    let (kind, text) = mail.complete_send(seq, result);
    notices.push(kind, text)
}
