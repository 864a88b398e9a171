//! Statistics Domain
//!
//! Audit events describing completed lifecycle transitions (a lesson was
//! created, a file was deleted, ...) and the machinery that ships them.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐  send_event (never blocks)
//! │  EventPublisher  │◄──────────── gateways / handlers
//! └────────┬─────────┘
//!          │ bounded mpsc
//! ┌────────▼─────────┐
//! │ background task  │  logs + counts outcomes (Prometheus)
//! └────────┬─────────┘
//!          │
//! ┌────────▼─────────┐
//! │    EventSink     │  NATS subject, or log-only
//! └──────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_statistics::{EventPublisher, LoggingSink, StatisticEvent, StatisticEventModel, StatisticProducer};
//!
//! # async fn run() {
//! let (producer, worker) = StatisticProducer::spawn(LoggingSink, 1024);
//! producer.send_event(StatisticEventModel::new(StatisticEvent::LessonCreated, 1));
//!
//! drop(producer);
//! worker.await.ok();
//! # }
//! ```

pub mod config;
pub mod error;
pub mod events;
pub mod metrics;
pub mod producer;
pub mod sink;
pub mod testing;

pub use config::StatisticsConfig;
pub use error::{PublishError, PublishResult};
pub use events::{StatisticEvent, StatisticEventModel};
pub use crate::metrics::{init_metrics, metrics_handler};
pub use producer::{EventPublisher, StatisticProducer};
pub use sink::{EventSink, LoggingSink, NatsEventSink};
pub use testing::{FailingSink, RecordingPublisher, RecordingSink};
