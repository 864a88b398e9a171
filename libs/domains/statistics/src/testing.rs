//! In-memory publishers and sinks for tests of crates that emit statistics.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::{PublishError, PublishResult};
use crate::events::StatisticEventModel;
use crate::producer::EventPublisher;
use crate::sink::EventSink;

fn lock(events: &Mutex<Vec<StatisticEventModel>>) -> MutexGuard<'_, Vec<StatisticEventModel>> {
    events.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Publisher that keeps every event in memory, synchronously.
#[derive(Clone, Default)]
pub struct RecordingPublisher {
    events: Arc<Mutex<Vec<StatisticEventModel>>>,
}

impl RecordingPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<StatisticEventModel> {
        lock(&self.events).clone()
    }

    pub fn is_empty(&self) -> bool {
        lock(&self.events).is_empty()
    }
}

impl EventPublisher for RecordingPublisher {
    fn send_event(&self, event: StatisticEventModel) {
        lock(&self.events).push(event);
    }
}

/// Sink that keeps every delivered event in memory.
#[derive(Clone, Default)]
pub struct RecordingSink {
    events: Arc<Mutex<Vec<StatisticEventModel>>>,
}

impl RecordingSink {
    pub fn events(&self) -> Vec<StatisticEventModel> {
        lock(&self.events).clone()
    }
}

#[async_trait]
impl EventSink for RecordingSink {
    async fn send(&self, event: &StatisticEventModel) -> PublishResult<()> {
        lock(&self.events).push(event.clone());
        Ok(())
    }
}

/// Sink whose every delivery fails with a broker error.
#[derive(Clone, Default)]
pub struct FailingSink {
    attempts: Arc<AtomicUsize>,
}

impl FailingSink {
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EventSink for FailingSink {
    async fn send(&self, _event: &StatisticEventModel) -> PublishResult<()> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(PublishError::Broker("broker unavailable".to_string()))
    }
}
