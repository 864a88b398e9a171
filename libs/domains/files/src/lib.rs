//! Files Domain
//!
//! Local storage for lesson material. Each lesson owns one directory under
//! the upload root; files inside it are addressed by name.
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_files::{FileStorageConfig, FileStorageService, handlers};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = FileStorageConfig::default();
//! let service = FileStorageService::new(&config).await?;
//!
//! let router = handlers::router(service, config.max_upload_bytes);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod service;

pub use config::FileStorageConfig;
pub use error::{FileError, FileResult};
pub use service::FileStorageService;
