use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use voicebridge::config::AppConfig;
use voicebridge::handlers;
use voicebridge::services::crm::highlevel::HighLevelProvider;
use voicebridge::services::tts::elevenlabs::ElevenLabsProvider;
use voicebridge::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    let tts = ElevenLabsProvider::new(
        config.tts_api_key.clone(),
        config.tts_voice_id.clone(),
        config.upstream_timeout,
    );
    let crm = HighLevelProvider::new(config.crm_api_key.clone(), config.upstream_timeout);

    let state = Arc::new(AppState {
        config: config.clone(),
        tts: Box::new(tts),
        crm: Box::new(crm),
    });

    let app = Router::new()
        .route("/health", get(handlers::health::health))
        .route("/voice", post(handlers::voice::generate_voice))
        .route("/book", post(handlers::booking::book))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
