use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Identifier assigned to a lesson by the files-and-lessons service.
pub type LessonId = i64;

/// Lesson as stored by the files-and-lessons service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Lesson {
    pub id: LessonId,
    pub name: String,
    /// Upload directory holding the lesson's files
    pub folder: String,
    pub description: String,
}

/// DTO for creating a lesson
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateLesson {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[validate(length(min = 1, max = 255))]
    pub folder: String,
    #[validate(length(max = 2000))]
    pub description: String,
}

/// Raw downstream answer to a delete request.
///
/// Deletion does not interpret the status: it is relayed to the caller as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteOutcome {
    pub status: u16,
    pub body: String,
}

impl DeleteOutcome {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..=299).contains(&self.status)
    }
}
