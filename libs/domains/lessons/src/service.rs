use domain_statistics::{EventPublisher, StatisticEvent, StatisticEventModel};
use std::sync::Arc;
use tracing::{debug, info};
use validator::Validate;

use crate::client::LessonsClient;
use crate::error::LessonResult;
use crate::models::{CreateLesson, DeleteOutcome, Lesson, LessonId};

/// Forwards lesson requests downstream and reports completed changes.
///
/// Each operation makes exactly one downstream call. A statistics event is
/// emitted only after that call succeeded, and emission never affects the
/// result returned to the caller.
pub struct LessonsGateway<C: LessonsClient, P: EventPublisher> {
    client: Arc<C>,
    publisher: Arc<P>,
}

impl<C: LessonsClient, P: EventPublisher> Clone for LessonsGateway<C, P> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
            publisher: Arc::clone(&self.publisher),
        }
    }
}

impl<C: LessonsClient, P: EventPublisher> LessonsGateway<C, P> {
    pub fn new(client: C, publisher: P) -> Self {
        Self {
            client: Arc::new(client),
            publisher: Arc::new(publisher),
        }
    }

    /// Create a lesson; emits `LESSON_CREATED` when an identifier comes back
    pub async fn create_lesson(&self, input: CreateLesson) -> LessonResult<Option<LessonId>> {
        input.validate()?;

        let id = self.client.create(input).await?;
        match id {
            Some(id) => {
                info!(lesson_id = id, "Lesson created");
                self.publisher
                    .send_event(StatisticEventModel::new(StatisticEvent::LessonCreated, id));
            }
            None => debug!("Lessons service returned no identifier"),
        }

        Ok(id)
    }

    /// List all lessons
    pub async fn list_lessons(&self) -> LessonResult<Vec<Lesson>> {
        self.client.list().await
    }

    /// Get a lesson by ID
    pub async fn get_lesson(&self, id: LessonId) -> LessonResult<Lesson> {
        self.client.get(id).await
    }

    /// Delete a lesson; emits `LESSON_DELETED` with the downstream body on 2xx
    pub async fn delete_lesson(&self, id: LessonId) -> LessonResult<DeleteOutcome> {
        let outcome = self.client.delete(id).await?;

        if outcome.is_success() {
            info!(lesson_id = id, "Lesson deleted");
            self.publisher.send_event(StatisticEventModel::with_message(
                StatisticEvent::LessonDeleted,
                id,
                outcome.body.clone(),
            ));
        } else {
            debug!(lesson_id = id, status = outcome.status, "Lesson delete not acknowledged");
        }

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::MockLessonsClient;
    use crate::error::LessonError;
    use domain_statistics::RecordingPublisher;

    fn first_lesson_input() -> CreateLesson {
        CreateLesson {
            name: "First lesson".to_string(),
            folder: "First folder".to_string(),
            description: "First description".to_string(),
        }
    }

    fn gateway(
        client: MockLessonsClient,
    ) -> (LessonsGateway<MockLessonsClient, RecordingPublisher>, RecordingPublisher) {
        let publisher = RecordingPublisher::new();
        (LessonsGateway::new(client, publisher.clone()), publisher)
    }

    #[tokio::test]
    async fn test_create_emits_created_event_with_identifier() {
        let mut client = MockLessonsClient::new();
        client
            .expect_create()
            .with(mockall::predicate::eq(first_lesson_input()))
            .times(1)
            .returning(|_| Ok(Some(1)));

        let (gateway, publisher) = gateway(client);
        let id = gateway.create_lesson(first_lesson_input()).await.unwrap();

        assert_eq!(id, Some(1));
        let events = publisher.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event, StatisticEvent::LessonCreated);
        assert_eq!(events[0].subject_id, 1);
        assert_eq!(events[0].message, None);
    }

    #[tokio::test]
    async fn test_create_with_null_identifier_emits_nothing() {
        let mut client = MockLessonsClient::new();
        client.expect_create().returning(|_| Ok(None));

        let (gateway, publisher) = gateway(client);
        assert_eq!(gateway.create_lesson(first_lesson_input()).await.unwrap(), None);
        assert!(publisher.is_empty());
    }

    #[tokio::test]
    async fn test_create_failure_emits_nothing() {
        let mut client = MockLessonsClient::new();
        client.expect_create().returning(|_| {
            Err(LessonError::DownstreamStatus {
                status: 500,
                body: "boom".to_string(),
            })
        });

        let (gateway, publisher) = gateway(client);
        assert!(gateway.create_lesson(first_lesson_input()).await.is_err());
        assert!(publisher.is_empty());
    }

    #[tokio::test]
    async fn test_create_invalid_input_never_calls_downstream() {
        let mut client = MockLessonsClient::new();
        client.expect_create().never();

        let (gateway, publisher) = gateway(client);
        let input = CreateLesson {
            name: String::new(),
            ..first_lesson_input()
        };

        let err = gateway.create_lesson(input).await.unwrap_err();
        assert!(matches!(err, LessonError::Validation(_)));
        assert!(publisher.is_empty());
    }

    #[tokio::test]
    async fn test_delete_success_emits_event_with_body() {
        let mut client = MockLessonsClient::new();
        client
            .expect_delete()
            .with(mockall::predicate::eq(1))
            .returning(|_| Ok(DeleteOutcome::new(200, "deleted")));

        let (gateway, publisher) = gateway(client);
        let outcome = gateway.delete_lesson(1).await.unwrap();

        assert_eq!(outcome, DeleteOutcome::new(200, "deleted"));
        let events = publisher.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event, StatisticEvent::LessonDeleted);
        assert_eq!(events[0].subject_id, 1);
        assert_eq!(events[0].message.as_deref(), Some("deleted"));
    }

    #[tokio::test]
    async fn test_delete_not_found_relays_status_without_event() {
        let mut client = MockLessonsClient::new();
        client
            .expect_delete()
            .with(mockall::predicate::eq(999))
            .returning(|_| Ok(DeleteOutcome::new(404, "")));

        let (gateway, publisher) = gateway(client);
        let outcome = gateway.delete_lesson(999).await.unwrap();

        assert_eq!(outcome.status, 404);
        assert!(publisher.is_empty());
    }

    #[tokio::test]
    async fn test_delete_transport_failure_emits_nothing() {
        let mut client = MockLessonsClient::new();
        client
            .expect_delete()
            .returning(|_| Err(LessonError::DownstreamTimeout("timed out".to_string())));

        let (gateway, publisher) = gateway(client);
        assert!(matches!(
            gateway.delete_lesson(1).await,
            Err(LessonError::DownstreamTimeout(_))
        ));
        assert!(publisher.is_empty());
    }

    #[tokio::test]
    async fn test_reads_emit_no_events() {
        let lessons = vec![Lesson {
            id: 1,
            name: "First lesson".to_string(),
            folder: "First folder".to_string(),
            description: "First description".to_string(),
        }];
        let listed = lessons.clone();

        let mut client = MockLessonsClient::new();
        client
            .expect_list()
            .times(2)
            .returning(move || Ok(listed.clone()));
        client
            .expect_get()
            .with(mockall::predicate::eq(999))
            .returning(|id| Err(LessonError::NotFound(id)));

        let (gateway, publisher) = gateway(client);
        assert_eq!(gateway.list_lessons().await.unwrap(), lessons);
        assert_eq!(gateway.list_lessons().await.unwrap(), lessons);
        assert!(matches!(
            gateway.get_lesson(999).await,
            Err(LessonError::NotFound(999))
        ));
        assert!(publisher.is_empty());
    }
}
