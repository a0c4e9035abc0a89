use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use activities::config::AppConfig;
use activities::error::ServerError;
use activities::services::ActivityRegistry;
use activities::web::build_router;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("activities=info,tower_http=info")),
        )
        .init();

    let config = AppConfig::from_env();
    let registry = ActivityRegistry::seeded();
    info!(
        activities = registry.len(),
        version = env!("CARGO_PKG_VERSION"),
        "activity registry seeded"
    );

    let app = build_router(registry, &config.static_dir);

    // Fall back to the next port once if the configured one is taken.
    let addr = config.socket_addr()?;
    let listener = match TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            let fallback = config.fallback_addr()?;
            warn!(%addr, %fallback, error = %e, "bind failed, trying fallback port");
            TcpListener::bind(fallback).await?
        }
    };

    let bound_addr = listener.local_addr()?;
    info!("serving activities on http://{}", bound_addr);
    info!(static_dir = %config.static_dir.display(), "front-end at http://{}/", bound_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
