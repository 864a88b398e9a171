use metrics::counter;
use std::sync::Arc;
use tokio::sync::mpsc::{self, error::TrySendError};
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use crate::events::StatisticEventModel;
use crate::metrics::{EVENTS_DROPPED, EVENTS_FAILED, EVENTS_PUBLISHED};
use crate::sink::EventSink;

/// Fire-and-forget emission of statistics events.
///
/// `send_event` must return immediately and must not report failure; whatever
/// happens to the event afterwards is the publisher's own business.
pub trait EventPublisher: Send + Sync + 'static {
    fn send_event(&self, event: StatisticEventModel);
}

impl<P: EventPublisher + ?Sized> EventPublisher for Arc<P> {
    fn send_event(&self, event: StatisticEventModel) {
        (**self).send_event(event)
    }
}

/// Queue-backed [`EventPublisher`].
///
/// Events go into a bounded channel drained by a single background task that
/// forwards them to an [`EventSink`] in arrival order. A full or closed queue
/// drops the event. The worker stops once every producer clone is dropped and
/// the queue is empty, so awaiting its handle flushes pending events.
#[derive(Clone)]
pub struct StatisticProducer {
    tx: mpsc::Sender<StatisticEventModel>,
}

impl StatisticProducer {
    /// Start the background worker. Returns the producer handle and the worker's join handle.
    pub fn spawn<S: EventSink>(sink: S, capacity: usize) -> (Self, JoinHandle<()>) {
        let (tx, rx) = mpsc::channel(capacity.max(1));
        let worker = tokio::spawn(run_worker(sink, rx));
        (Self { tx }, worker)
    }

    /// Number of events waiting to be delivered.
    pub fn pending(&self) -> usize {
        self.tx.max_capacity() - self.tx.capacity()
    }
}

impl EventPublisher for StatisticProducer {
    fn send_event(&self, event: StatisticEventModel) {
        match self.tx.try_send(event) {
            Ok(()) => {}
            Err(TrySendError::Full(event)) => {
                warn!(
                    event = %event.event,
                    subject_id = event.subject_id,
                    "Statistics queue full, dropping event"
                );
                counter!(EVENTS_DROPPED, "reason" => "full").increment(1);
            }
            Err(TrySendError::Closed(event)) => {
                warn!(
                    event = %event.event,
                    subject_id = event.subject_id,
                    "Statistics worker stopped, dropping event"
                );
                counter!(EVENTS_DROPPED, "reason" => "closed").increment(1);
            }
        }
    }
}

async fn run_worker<S: EventSink>(sink: S, mut rx: mpsc::Receiver<StatisticEventModel>) {
    info!("Statistics producer started");

    while let Some(event) = rx.recv().await {
        match sink.send(&event).await {
            Ok(()) => {
                counter!(EVENTS_PUBLISHED, "event" => event.event.to_string()).increment(1);
            }
            Err(e) => {
                error!(
                    error = %e,
                    event = %event.event,
                    subject_id = event.subject_id,
                    "Failed to publish statistics event"
                );
                counter!(EVENTS_FAILED, "event" => event.event.to_string()).increment(1);
            }
        }
    }

    if let Err(e) = sink.flush().await {
        warn!(error = %e, "Failed to flush statistics sink");
    }
    info!("Statistics producer stopped");
}
