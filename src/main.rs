use anyhow::Context;
use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use mergington::config::AppConfig;
use mergington::database::{seed, ActivityDirectory};
use mergington::web;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // 1. Logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    let config = AppConfig::from_env();

    // 2. Seed the directory
    let activities = match &config.seed_file {
        Some(path) => seed::load_seed_file(path)
            .with_context(|| format!("loading activities from {}", path.display()))?,
        None => seed::default_activities(),
    };
    let directory = ActivityDirectory::new(activities);
    info!(
        activities = directory.activity_count().await,
        version = env!("CARGO_PKG_VERSION"),
        "activity directory ready"
    );

    // 3. Router
    let app = web::router(directory, &config.static_dir);

    // 4. Serve, with one fallback port
    let listener = match TcpListener::bind(config.bind_addr()).await {
        Ok(l) => l,
        Err(e) => {
            warn!(
                "could not bind {}: {}. trying {}",
                config.bind_addr(),
                e,
                config.fallback_bind_addr()
            );
            TcpListener::bind(config.fallback_bind_addr())
                .await
                .with_context(|| format!("binding {}", config.fallback_bind_addr()))?
        }
    };

    let bound_addr = listener.local_addr()?;
    info!("serving on http://{}", bound_addr);
    info!("open http://{}/ for the signup page", bound_addr);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
