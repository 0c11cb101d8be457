use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod api;
mod config;
mod gemini;
mod markup;
mod page;
mod prompts;
mod state;

use config::AppConfig;
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // -----------------------------
    // Logging
    // -----------------------------
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // -----------------------------
    // Shared state
    // -----------------------------
    let config = AppConfig::from_env();
    let addr = config.bind_addr.clone();
    info!(model = %config.model, "starting random page generator");

    let state = AppState::new(config)?;

    // -----------------------------
    // Routers
    // -----------------------------
    let app = Router::new()
        // Page controller
        .merge(page::router())
        // Relay endpoint, carries its own CORS headers
        .merge(api::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    info!("🌐 HTTP listening on http://{addr}");
    info!("🛠 Relay endpoint at http://{addr}{}", api::RELAY_PATH);

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
