use thiserror::Error;

/// Failure delivering an event to its sink.
///
/// Never crosses back into a request path: the producer logs it and moves on.
#[derive(Debug, Error)]
pub enum PublishError {
    #[error("Failed to serialize event: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Broker error: {0}")]
    Broker(String),

    #[error("Failed to connect to broker at {url}: {message}")]
    Connect { url: String, message: String },
}

pub type PublishResult<T> = Result<T, PublishError>;
