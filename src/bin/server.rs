//! Skywatch HTTP Server Binary
//!
//! Entry point for the observatory REST API server. It loads configuration,
//! sets up the HTTP router, and starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin skywatch-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `SITE_LAT` / `SITE_LON`: default observer site (default: Melbourne)
//! - `MIN_ALT_DEG`: default visibility threshold (default: 15)
//! - `WEATHER_URL`: upstream weather feed
//! - `STATIC_DIR`: frontend directory (default: static)
//! - `RUST_LOG`: log filter (default: info)

use std::net::SocketAddr;

use tracing::info;
use tracing_subscriber::EnvFilter;

use skywatch::config::Config;
use skywatch::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("Starting Skywatch HTTP Server");

    let config = Config::from_env();
    info!(
        site_lat = config.site.latitude_deg,
        site_lon = config.site.longitude_deg,
        min_alt = config.site.min_altitude_deg,
        "Observer site configured"
    );

    let state = AppState::new(config.site, config.weather_url.clone());
    let app = create_router(state, &config.static_dir);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
