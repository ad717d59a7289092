mod pages;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use gala_api::state::{AppState, AppStateInner};
use gala_types::config::EventConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Init logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gala=debug,tower_http=debug".into()),
        )
        .init();

    // Config
    let db_path = std::env::var("GALA_DB_PATH").unwrap_or_else(|_| "gala.db".into());
    let host = std::env::var("GALA_HOST").unwrap_or_else(|_| "0.0.0.0".into());
    let port: u16 = std::env::var("GALA_PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()?;
    let event = load_event_config()?;

    // Init database
    let db = gala_db::Database::open(&PathBuf::from(&db_path))?;

    // Shared state
    let state: AppState = Arc::new(AppStateInner { db, event });

    let app = Router::new()
        .merge(pages::router())
        .merge(gala_api::router(state))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!("Gala server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Event details and theme come compiled in; GALA_EVENT_PATH replaces them
/// with a JSON file. A malformed file is a startup error, not a fallback.
fn load_event_config() -> anyhow::Result<EventConfig> {
    match std::env::var("GALA_EVENT_PATH") {
        Ok(path) => {
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("reading event config {}", path))?;
            let config = serde_json::from_str(&raw)
                .with_context(|| format!("parsing event config {}", path))?;
            info!("Event config loaded from {}", path);
            Ok(config)
        }
        Err(_) => Ok(EventConfig::default()),
    }
}
