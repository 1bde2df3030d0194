use axum::{
    routing::get,
    Router,
    middleware::{self},
};
use axum_embed::ServeEmbed;
use clap::Parser;
use common::{AppState, Config, auth::gate_middleware};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod handlers;

use handlers::{api, assets::{self, Assets}, pages};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Initialize Logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 2. Load Config from .env, environment and CLI args
    if let Err(err) = dotenvy::dotenv() {
        tracing::debug!(%err, "no .env file loaded");
    }
    let config = Config::parse();

    let state = Arc::new(AppState::from_config(config.clone())?);
    tracing::info!(
        cookie = %state.config.access_token_cookie,
        excluded = ?state.matcher.prefixes(),
        "request gate configured"
    );

    for file in Assets::iter() {
        tracing::debug!("Embedded file: {}", file);
    }

    // 3. Routing
    let app = app_router(state).layer(TraceLayer::new_for_http());

    // 4. Start Server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}

/// Every route, the fallback included, sits behind the request gate.
/// Excluded prefixes are skipped inside the middleware itself.
fn app_router(state: Arc<AppState>) -> Router {
    let serve_assets = ServeEmbed::<Assets>::new();

    Router::<Arc<AppState>>::new()
        .route("/", get(pages::home))
        .route("/login", get(pages::login))
        .route("/dashboard", get(pages::dashboard))
        .route("/api/health", get(api::health))
        .route("/favicon.ico", get(assets::favicon))
        .nest_service("/public", serve_assets)
        .fallback(pages::not_found)
        .layer(middleware::from_fn_with_state(state.clone(), gate_middleware))
        .with_state(state)
}
