use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Kind of lifecycle transition being reported.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum StatisticEvent {
    LessonCreated,
    LessonDeleted,
    FileUploaded,
    FileDeleted,
}

/// Audit event as it travels on the wire.
///
/// `message` carries optional context, e.g. the confirmation text returned by
/// the downstream service on deletion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticEventModel {
    pub event: StatisticEvent,
    pub subject_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub occurred_at: DateTime<Utc>,
}

impl StatisticEventModel {
    pub fn new(event: StatisticEvent, subject_id: i64) -> Self {
        Self {
            event,
            subject_id,
            message: None,
            occurred_at: Utc::now(),
        }
    }

    pub fn with_message(event: StatisticEvent, subject_id: i64, message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::new(event, subject_id)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_kind_wire_names() {
        assert_eq!(
            serde_json::to_string(&StatisticEvent::LessonCreated).unwrap(),
            "\"LESSON_CREATED\""
        );
        assert_eq!(StatisticEvent::FileDeleted.to_string(), "FILE_DELETED");
        assert_eq!(
            "LESSON_DELETED".parse::<StatisticEvent>().unwrap(),
            StatisticEvent::LessonDeleted
        );
    }

    #[test]
    fn test_model_json_shape_without_message() {
        let event = StatisticEventModel::new(StatisticEvent::LessonCreated, 1);
        let json = serde_json::to_value(&event).unwrap();

        assert_eq!(json["event"], "LESSON_CREATED");
        assert_eq!(json["subjectId"], 1);
        assert!(json.get("message").is_none());
        assert!(json["occurredAt"].is_string());
    }

    #[test]
    fn test_model_carries_message() {
        let event = StatisticEventModel::with_message(StatisticEvent::LessonDeleted, 1, "deleted");
        assert_eq!(event.message.as_deref(), Some("deleted"));
        assert_eq!(serde_json::to_value(&event).unwrap()["message"], "deleted");
    }
}
