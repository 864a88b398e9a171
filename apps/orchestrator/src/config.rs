//! Configuration for the orchestrator

use core_config::{AppInfo, FromEnv, app_info, server::ServerConfig};
use domain_lessons::DownstreamConfig;
use domain_statistics::StatisticsConfig;

pub use core_config::Environment;

/// Application configuration, resolved once at startup
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub environment: Environment,
    pub downstream: DownstreamConfig,
    pub statistics: StatisticsConfig,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        Ok(Self {
            app: app_info!(),
            server: ServerConfig::from_env()?,
            environment: Environment::from_env(),
            downstream: DownstreamConfig::from_env()?,
            statistics: StatisticsConfig::from_env()?,
        })
    }
}
