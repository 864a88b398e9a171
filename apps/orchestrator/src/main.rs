//! Orchestrator - public REST gateway for lessons

use axum_helpers::server::{create_production_app, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_lessons::HttpLessonsClient;
use domain_statistics::{
    LoggingSink, NatsEventSink, StatisticProducer, StatisticsConfig, init_metrics,
};
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{info, warn};

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

/// Start the statistics worker, publishing to NATS when it is reachable.
async fn start_statistics(config: &StatisticsConfig) -> (StatisticProducer, JoinHandle<()>) {
    let capacity = config.queue_capacity;

    match &config.nats_url {
        Some(url) => {
            info!("Connecting to NATS at {}", url);
            match NatsEventSink::connect(url, &config.subject).await {
                Ok(sink) => {
                    info!(subject = %sink.subject(), "NATS connected successfully");
                    StatisticProducer::spawn(sink, capacity)
                }
                Err(e) => {
                    warn!("Failed to connect to NATS, statistics events will only be logged: {}", e);
                    StatisticProducer::spawn(LoggingSink, capacity)
                }
            }
        }
        None => {
            warn!("NATS_URL not set, statistics events will only be logged");
            StatisticProducer::spawn(LoggingSink, capacity)
        }
    }
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);
    init_metrics()?;

    info!(
        "Forwarding lessons to {} (timeout {:?})",
        config.downstream.origin, config.downstream.timeout
    );

    let lessons_client = HttpLessonsClient::new(&config.downstream)?;
    let (producer, statistics_worker) = start_statistics(&config.statistics).await;

    let state = AppState {
        config: config.clone(),
        lessons_client,
        producer,
    };

    let api_routes = api::routes(&state);
    let router = axum_helpers::create_router::<openapi::ApiDoc>(api_routes).await?;
    let app = router
        .merge(health_router(state.config.app))
        .merge(api::metrics_router());

    let server = state.config.server.clone();
    // The router now owns the only producer handles; once the server drains
    // they are dropped and the worker flushes the queue and exits.
    drop(state);

    info!("Starting Orchestrator on port {}", server.port);

    create_production_app(app, &server, Duration::from_secs(30), async move {
        info!("Shutting down: flushing statistics events");
        if let Err(e) = statistics_worker.await {
            warn!("Statistics worker ended abnormally: {}", e);
        }
        info!("Statistics events flushed");
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Orchestrator shutdown complete");
    Ok(())
}
