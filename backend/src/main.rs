use std::sync::Arc;

use axum::http::header::HeaderName;
use axum::http::{HeaderValue, Method};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::RelayConfig;
use crate::upstream::UpstreamClient;

mod config;
mod error;
mod logging;
mod models;
mod routes;
mod upstream;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<RelayConfig>,
    pub upstream: UpstreamClient,
}

impl AppState {
    pub fn new(config: RelayConfig) -> Self {
        Self {
            config: Arc::new(config),
            upstream: UpstreamClient::new(),
        }
    }
}

fn cors_layer(config: &RelayConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(vec![
            HeaderName::from_static("content-type"),
            HeaderName::from_static("x-requested-with"),
        ])
        .allow_credentials(true)
}

/// Static frontend bundle; unknown paths get `index.html` so client-side
/// routes survive a reload.
fn static_service(config: &RelayConfig) -> ServeDir<ServeFile> {
    let dist = &config.frontend_dist;
    if !dist.exists() {
        warn!("Frontend bundle not found at {}", dist.display());
    }
    ServeDir::new(dist).fallback(ServeFile::new(dist.join("index.html")))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::from_path(".env").ok();
    logging::setup();

    let config = RelayConfig::from_env()?;
    let bind_addr = config.bind_addr;
    info!("Auth service: {}", config.auth_base_url);
    info!("Donations service: {}", config.donations_base_url);

    let cors = cors_layer(&config);
    let static_files = static_service(&config);
    let state = AppState::new(config);

    let app: Router = routes::create_router(state)
        .fallback_service(static_files)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let listener = TcpListener::bind(bind_addr).await?;
    info!("Relay listening on {}", bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
