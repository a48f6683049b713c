mod config;
mod error;
mod routes;

use leptos::prelude::get_configuration;
use tracing_subscriber::EnvFilter;

use crate::error::ServerError;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    // A missing .env file is fine; real deployments set the environment directly.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::ServerConfig::from_env().inspect_err(|e| {
        tracing::error!(error = %e, "configuration invalid");
    })?;
    tracing::info!(
        api_base = config.api.base_url(),
        ordering = %config.api.ordering(),
        "API base resolved"
    );

    let conf = get_configuration(None).map_err(|e| ServerError::Leptos(e.to_string()))?;
    let app = routes::app(config.api.clone(), conf.leptos_options);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!(port = config.port, "cv-panel listening");
    axum::serve(listener, app).await?;
    Ok(())
}
