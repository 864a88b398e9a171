use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FileError {
    #[error("Invalid name: {0}")]
    InvalidName(String),

    #[error("Directory not found: {0}")]
    DirectoryNotFound(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("No files in directory: {0}")]
    NoFiles(String),

    #[error("Invalid upload: {0}")]
    Upload(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

pub type FileResult<T> = Result<T, FileError>;

impl From<std::io::Error> for FileError {
    fn from(err: std::io::Error) -> Self {
        FileError::Storage(err.to_string())
    }
}

/// Convert FileError to AppError for standardized error responses
impl From<FileError> for AppError {
    fn from(err: FileError) -> Self {
        match err {
            FileError::InvalidName(name) => AppError::BadRequest(format!("Invalid name '{}'", name)),
            FileError::DirectoryNotFound(dir) => {
                AppError::NotFound(format!("Directory '{}' not found", dir))
            }
            FileError::FileNotFound(name) => AppError::NotFound(format!("File '{}' not found", name)),
            FileError::NoFiles(dir) => {
                AppError::NotFound(format!("Directory '{}' contains no files", dir))
            }
            FileError::Upload(msg) => AppError::BadRequest(msg),
            FileError::Storage(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for FileError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
