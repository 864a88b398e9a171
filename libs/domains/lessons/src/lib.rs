//! Lessons Domain
//!
//! Gateway for lessons stored by the files-and-lessons service. Every request
//! is forwarded downstream; completed creations and deletions are reported as
//! statistics events without waiting on the broker.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints under /lessons
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐   send_event   ┌────────────────┐
//! │   Gateway   │───────────────►│ EventPublisher │
//! └──────┬──────┘                └────────────────┘
//!        │
//! ┌──────▼──────┐
//! │   Client    │  ← one HTTP round trip per operation
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_lessons::{DownstreamConfig, HttpLessonsClient, LessonsGateway, handlers};
//! use domain_statistics::{LoggingSink, StatisticProducer};
//! use core_config::FromEnv;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = DownstreamConfig::from_env()?;
//! let client = HttpLessonsClient::new(&config)?;
//! let (producer, _worker) = StatisticProducer::spawn(LoggingSink, 1024);
//!
//! let router = handlers::router(LessonsGateway::new(client, producer));
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod service;

// Re-export commonly used types
pub use client::{HttpLessonsClient, LessonsClient};
pub use config::DownstreamConfig;
pub use error::{LessonError, LessonResult};
pub use models::{CreateLesson, DeleteOutcome, Lesson, LessonId};
pub use service::LessonsGateway;
