//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Stitches the host's own endpoints together with Leptos SSR rendering under
//! a single Axum router. The chat and mail endpoints the panel calls are not
//! served here; they belong to the external API named by `CV_API_BASE`.

use std::path::PathBuf;

use axum::Json;
use axum::Router;
use axum::routing::get;
use client::app::{App, shell};
use client::config::ApiConfig;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use serde_json::{Value, json};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Host endpoints that do not go through Leptos.
pub fn api_routes() -> Router {
    Router::new().route("/healthz", get(healthz))
}

/// Full router: host endpoints + Leptos SSR page + `/pkg` static bundle.
pub fn app(config: ApiConfig, leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list({
        let config = config.clone();
        move || view! { <App config=Ok(config.clone())/> }
    });

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || shell(opts.clone(), config.clone())
        })
        .with_state(leptos_options.clone());

    let pkg_path = PathBuf::from(leptos_options.site_root.as_ref()).join(leptos_options.site_pkg_dir.as_ref());

    api_routes()
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(pkg_path))
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> Json<Value> {
    Json(json!({ "ok": true }))
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;
