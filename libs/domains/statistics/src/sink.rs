use async_nats::Client;
use async_trait::async_trait;
use tracing::{debug, info, instrument};

use crate::error::{PublishError, PublishResult};
use crate::events::StatisticEventModel;

/// Durable destination for statistics events.
///
/// Only the producer's background task talks to a sink, so implementations
/// may take as long as they need without affecting request latency.
#[async_trait]
pub trait EventSink: Send + Sync + 'static {
    async fn send(&self, event: &StatisticEventModel) -> PublishResult<()>;

    /// Push out anything buffered. Called once when the producer shuts down.
    async fn flush(&self) -> PublishResult<()> {
        Ok(())
    }
}

/// Publishes events as JSON to a NATS subject.
#[derive(Clone)]
pub struct NatsEventSink {
    client: Client,
    subject: String,
}

impl NatsEventSink {
    pub fn new(client: Client, subject: impl Into<String>) -> Self {
        Self {
            client,
            subject: subject.into(),
        }
    }

    /// Connect to NATS and publish on `subject`.
    pub async fn connect(url: &str, subject: impl Into<String>) -> PublishResult<Self> {
        let client = async_nats::ConnectOptions::new()
            .name("statistics-producer")
            .connect(url)
            .await
            .map_err(|e| PublishError::Connect {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        Ok(Self::new(client, subject))
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }
}

#[async_trait]
impl EventSink for NatsEventSink {
    #[instrument(skip(self, event), fields(subject = %self.subject, event = %event.event, subject_id = event.subject_id))]
    async fn send(&self, event: &StatisticEventModel) -> PublishResult<()> {
        let payload = serde_json::to_vec(event)?;
        self.client
            .publish(self.subject.clone(), payload.into())
            .await
            .map_err(|e| PublishError::Broker(e.to_string()))?;

        debug!("Event published");
        Ok(())
    }

    async fn flush(&self) -> PublishResult<()> {
        self.client
            .flush()
            .await
            .map_err(|e| PublishError::Broker(e.to_string()))
    }
}

/// Sink used when no broker is configured: events only reach the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingSink;

#[async_trait]
impl EventSink for LoggingSink {
    async fn send(&self, event: &StatisticEventModel) -> PublishResult<()> {
        info!(
            event = %event.event,
            subject_id = event.subject_id,
            message = event.message.as_deref().unwrap_or(""),
            "Statistics event (no broker configured)"
        );
        Ok(())
    }
}
