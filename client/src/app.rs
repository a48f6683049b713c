//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::{API_BASE_META, ApiConfig, ConfigError, ORDERING_META};
use crate::pages::home::HomePage;
use crate::state::{mail::MailDraft, notice::NoticeState, query::QueryState};

/// HTML shell rendered on the server for SSR + hydration.
///
/// The resolved config is written into `<meta>` tags so the browser builds the
/// same [`ApiConfig`] when it hydrates.
pub fn shell(options: LeptosOptions, config: ApiConfig) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App config=Ok(config)/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the panel state contexts and, when configured, the [`ApiConfig`].
#[component]
pub fn App(config: Result<ApiConfig, ConfigError>) -> impl IntoView {
    provide_meta_context();

    provide_context(RwSignal::new(QueryState::default()));
    provide_context(RwSignal::new(MailDraft::default()));
    provide_context(RwSignal::new(NoticeState::default()));

    let meta = config.as_ref().ok().map(|cfg| {
        view! {
            <Meta name=API_BASE_META content=cfg.base_url().to_owned()/>
            <Meta name=ORDERING_META content=cfg.ordering().as_str()/>
        }
    });
    if let Ok(cfg) = config {
        provide_context(cfg);
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/cv-panel.css"/>
        <Title text="CV Chat"/>
        {meta}

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
