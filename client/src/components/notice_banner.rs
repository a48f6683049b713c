//! Status banner for mail outcomes.
//!
//! Replaces a blocking alert: the page stays interactive, the banner can be
//! closed by hand and hides itself after [`NOTICE_TIMEOUT_MS`].

use leptos::prelude::*;

use crate::state::notice::{NOTICE_TIMEOUT_MS, NoticeState};

#[component]
pub fn NoticeBanner() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();

    Effect::new(move || {
        let Some(id) = notices.with(|n| n.current.as_ref().map(|c| c.id)) else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(NOTICE_TIMEOUT_MS)).await;
            notices.try_update(|n| n.dismiss(id));
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, NOTICE_TIMEOUT_MS);
        }
    });

    move || {
        notices.with(|n| n.current.clone()).map(|notice| {
            let id = notice.id;
            view! {
                <div class=format!("notice notice--{}", notice.kind.class_suffix()) role="status">
                    <span class="notice__text">{notice.text}</span>
                    <button
                        class="notice__close"
                        aria-label="Dismiss"
                        on:click=move |_| {
                            notices.update(|n| {
                                n.dismiss(id);
                            });
                        }
                    >
                        "×"
                    </button>
                </div>
            }
        })
    }
}
