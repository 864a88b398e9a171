use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, Multipart, Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use axum_helpers::{
    ValidatedJson,
    errors::responses::{
        BadRequestValidationResponse, InternalServerErrorResponse, NotFoundResponse,
    },
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{OpenApi, ToSchema};
use validator::Validate;

use crate::error::{FileError, FileResult};
use crate::service::FileStorageService;

pub const TAG: &str = "files";

/// Multipart field carrying the uploaded file
pub const UPLOAD_FIELD: &str = "file";

/// DTO for creating an upload directory
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateDirectory {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
}

/// Result of a successful upload
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StoredFile {
    pub directory: String,
    pub file_name: String,
}

/// OpenAPI documentation for Files API
#[derive(OpenApi)]
#[openapi(
    paths(create_directory, list_files, upload_file, download_file, delete_file),
    components(
        schemas(CreateDirectory, StoredFile),
        responses(BadRequestValidationResponse, NotFoundResponse, InternalServerErrorResponse)
    ),
    tags(
        (name = TAG, description = "Lesson file storage")
    )
)]
pub struct ApiDoc;

/// Create the files router with all HTTP endpoints
pub fn router(service: FileStorageService, max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/directories", post(create_directory))
        .route(
            "/{directory}",
            get(list_files)
                .post(upload_file)
                .layer(DefaultBodyLimit::max(max_upload_bytes)),
        )
        .route(
            "/{directory}/{file}",
            get(download_file).delete(delete_file),
        )
        .with_state(Arc::new(service))
}

/// Create an upload directory
#[utoipa::path(
    post,
    path = "/directories",
    tag = TAG,
    request_body = CreateDirectory,
    responses(
        (status = 201, description = "Directory exists"),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_directory(
    State(service): State<Arc<FileStorageService>>,
    ValidatedJson(input): ValidatedJson<CreateDirectory>,
) -> FileResult<StatusCode> {
    service.create_directory(&input.name).await?;
    Ok(StatusCode::CREATED)
}

/// List the files of a directory
#[utoipa::path(
    get,
    path = "/{directory}",
    tag = TAG,
    params(
        ("directory" = String, Path, description = "Directory name")
    ),
    responses(
        (status = 200, description = "Sorted file names", body = Vec<String>),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_files(
    State(service): State<Arc<FileStorageService>>,
    Path(directory): Path<String>,
) -> FileResult<Json<Vec<String>>> {
    let names = service.list_file_names(&directory).await?;
    Ok(Json(names))
}

/// Upload a file into a directory
#[utoipa::path(
    post,
    path = "/{directory}",
    tag = TAG,
    params(
        ("directory" = String, Path, description = "Directory name")
    ),
    request_body(content_type = "multipart/form-data", description = "Multipart form with a `file` field"),
    responses(
        (status = 201, description = "File stored", body = StoredFile),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn upload_file(
    State(service): State<Arc<FileStorageService>>,
    Path(directory): Path<String>,
    mut multipart: Multipart,
) -> FileResult<impl IntoResponse> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| FileError::Upload(e.body_text()))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let file_name = field
            .file_name()
            .map(str::to_string)
            .ok_or_else(|| FileError::Upload("Upload has no file name".to_string()))?;
        let bytes = field
            .bytes()
            .await
            .map_err(|e| FileError::Upload(e.body_text()))?;

        let file_name = service.store_file(&file_name, &bytes, &directory).await?;
        return Ok((
            StatusCode::CREATED,
            Json(StoredFile {
                directory,
                file_name,
            }),
        ));
    }

    Err(FileError::Upload(format!(
        "Multipart field '{}' is missing",
        UPLOAD_FIELD
    )))
}

/// Download a file
#[utoipa::path(
    get,
    path = "/{directory}/{file}",
    tag = TAG,
    params(
        ("directory" = String, Path, description = "Directory name"),
        ("file" = String, Path, description = "File name")
    ),
    responses(
        (status = 200, description = "File contents as an octet-stream attachment"),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn download_file(
    State(service): State<Arc<FileStorageService>>,
    Path((directory, file)): Path<(String, String)>,
) -> FileResult<impl IntoResponse> {
    let bytes = service.load_file(&directory, &file).await?;

    Ok((
        [
            (header::CONTENT_TYPE, "application/octet-stream".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", file),
            ),
        ],
        bytes,
    ))
}

/// Delete a file
#[utoipa::path(
    delete,
    path = "/{directory}/{file}",
    tag = TAG,
    params(
        ("directory" = String, Path, description = "Directory name"),
        ("file" = String, Path, description = "File name")
    ),
    responses(
        (status = 204, description = "File deleted"),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_file(
    State(service): State<Arc<FileStorageService>>,
    Path((directory, file)): Path<(String, String)>,
) -> FileResult<StatusCode> {
    service.delete_file(&directory, &file).await?;
    Ok(StatusCode::NO_CONTENT)
}
