//! Lesson files service - REST server over local upload storage

use axum_helpers::server::{create_production_app, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_files::FileStorageService;
use std::time::Duration;
use tracing::info;

mod api;
mod config;
mod openapi;

use config::Config;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    let service = FileStorageService::new(&config.storage).await?;
    info!("Serving lesson files from {}", service.root().display());

    let api_routes = api::routes(service, config.storage.max_upload_bytes);
    let router = axum_helpers::create_router::<openapi::ApiDoc>(api_routes).await?;
    let app = router.merge(health_router(config.app));

    info!("Starting Lesson Files service on port {}", config.server.port);

    create_production_app(app, &config.server, Duration::from_secs(10), async {
        info!("Shutting down: no pending work");
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Lesson Files service shutdown complete");
    Ok(())
}
