use async_trait::async_trait;
use reqwest::{Response, StatusCode};
use tracing::{debug, instrument, warn};

use crate::config::DownstreamConfig;
use crate::error::{LessonError, LessonResult};
use crate::models::{CreateLesson, DeleteOutcome, Lesson, LessonId};

/// Client for the service that owns lesson storage.
///
/// Every method is exactly one round trip: no retries, no caching.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LessonsClient: Send + Sync {
    /// Create a lesson, returning the identifier the service assigned (if any)
    async fn create(&self, input: CreateLesson) -> LessonResult<Option<LessonId>>;

    /// List all lessons in the order the service returns them
    async fn list(&self) -> LessonResult<Vec<Lesson>>;

    /// Get a lesson by ID
    async fn get(&self, id: LessonId) -> LessonResult<Lesson>;

    /// Delete a lesson. Any HTTP answer is a success here; only transport failures are errors.
    async fn delete(&self, id: LessonId) -> LessonResult<DeleteOutcome>;
}

/// [`LessonsClient`] speaking JSON over HTTP to `{origin}/lessons`.
#[derive(Clone)]
pub struct HttpLessonsClient {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpLessonsClient {
    pub const RESOURCE: &'static str = "lessons";

    pub fn new(config: &DownstreamConfig) -> LessonResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| LessonError::Transport(e.to_string()))?;

        Ok(Self::with_client(client, config))
    }

    /// Use an existing `reqwest::Client`; its own timeout settings apply.
    pub fn with_client(client: reqwest::Client, config: &DownstreamConfig) -> Self {
        let endpoint = format!(
            "{}/{}",
            config.origin.as_str().trim_end_matches('/'),
            Self::RESOURCE
        );
        Self { client, endpoint }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn item_url(&self, id: LessonId) -> String {
        format!("{}/{}", self.endpoint, id)
    }
}

/// Turn a non-2xx answer into `DownstreamStatus`, keeping the body for diagnostics.
async fn ensure_success(response: Response) -> LessonResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    warn!(status = %status, body = %body, "Lessons service returned an error status");
    Err(LessonError::DownstreamStatus {
        status: status.as_u16(),
        body,
    })
}

#[async_trait]
impl LessonsClient for HttpLessonsClient {
    #[instrument(skip(self, input), fields(name = %input.name))]
    async fn create(&self, input: CreateLesson) -> LessonResult<Option<LessonId>> {
        let response = self.client.post(&self.endpoint).json(&input).send().await?;
        let body = ensure_success(response).await?.text().await?;

        // An empty body is how the service spells "no identifier".
        if body.trim().is_empty() {
            return Ok(None);
        }

        let id = serde_json::from_str::<Option<LessonId>>(&body)
            .map_err(|e| LessonError::DownstreamDecode(e.to_string()))?;
        debug!(id = ?id, "Lesson created downstream");
        Ok(id)
    }

    #[instrument(skip(self))]
    async fn list(&self) -> LessonResult<Vec<Lesson>> {
        let response = self.client.get(&self.endpoint).send().await?;
        let lessons = ensure_success(response).await?.json::<Vec<Lesson>>().await?;
        debug!(count = lessons.len(), "Lessons listed downstream");
        Ok(lessons)
    }

    #[instrument(skip(self))]
    async fn get(&self, id: LessonId) -> LessonResult<Lesson> {
        let response = self.client.get(self.item_url(id)).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(LessonError::NotFound(id));
        }

        Ok(ensure_success(response).await?.json::<Lesson>().await?)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: LessonId) -> LessonResult<DeleteOutcome> {
        let response = self.client.delete(self.item_url(id)).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        debug!(status, "Lesson delete answered downstream");
        Ok(DeleteOutcome::new(status, body))
    }
}
