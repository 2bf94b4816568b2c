use axum::{routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

mod adapters;
mod application;
mod config;
mod routes;
mod signature;

use adapters::HttpCommitFetcher;
use application::RelayService;
use config::ServerConfig;
use hookcord_integration_discord::DiscordSinkFactory;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub relay: Arc<RelayService>,
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "Hookcord is running - GitHub events flow into Discord".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[shuttle_runtime::main]
async fn main(
    #[shuttle_runtime::Secrets] secrets: shuttle_runtime::SecretStore,
) -> shuttle_axum::ShuttleAxum {
    tracing::info!("🪝 Hookcord initializing...");

    let config = ServerConfig::from_lookup(|key| secrets.get(key).or_else(|| std::env::var(key).ok()))?;

    if config.webhook_secret.is_some() {
        tracing::info!("🔐 Webhook signature verification enabled");
    } else {
        tracing::warn!("⚠️  No GITHUB_WEBHOOK_SECRET set - signature verification disabled");
    }

    if config.channel_id.is_none() || config.bot_token.is_none() {
        tracing::warn!("⚠️  No default Discord credentials - requests must carry them as query parameters");
    }

    let fetcher = Arc::new(HttpCommitFetcher::new(&config.fetch).map_err(anyhow::Error::from)?);
    let sinks = Arc::new(DiscordSinkFactory::new(config.profile.palette()));
    let relay = Arc::new(RelayService::new(config.profile, fetcher, sinks));

    tracing::info!(profile = %relay.profile(), "🎨 Render profile selected");

    let state = AppState {
        config: Arc::new(config),
        relay,
    };

    let router = Router::new()
        .route("/health", get(health_check))
        .merge(routes::webhook::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    tracing::info!("✅ Hookcord ready");

    Ok(router.into())
}
