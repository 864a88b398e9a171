//! Configuration for the lessons file service

use core_config::{AppInfo, FromEnv, app_info, server::ServerConfig};
use domain_files::FileStorageConfig;

pub use core_config::Environment;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub environment: Environment,
    pub storage: FileStorageConfig,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        Ok(Self {
            app: app_info!(),
            server: ServerConfig::from_env()?,
            environment: Environment::from_env(),
            storage: FileStorageConfig::from_env()?,
        })
    }
}
