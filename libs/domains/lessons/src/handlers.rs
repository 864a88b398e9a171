use axum::{
    Json, Router,
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    IdPath, ValidatedJson,
    errors::responses::{
        BadGatewayResponse, BadRequestIdResponse, BadRequestValidationResponse,
        GatewayTimeoutResponse, NotFoundResponse, ServiceUnavailableResponse,
    },
};
use domain_statistics::EventPublisher;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::client::LessonsClient;
use crate::error::LessonResult;
use crate::models::{CreateLesson, Lesson, LessonId};
use crate::service::LessonsGateway;

pub const TAG: &str = "lessons";

/// OpenAPI documentation for Lessons API
#[derive(OpenApi)]
#[openapi(
    paths(create_lesson, list_lessons, get_lesson, delete_lesson),
    components(
        schemas(Lesson, CreateLesson),
        responses(
            BadRequestValidationResponse,
            BadRequestIdResponse,
            NotFoundResponse,
            BadGatewayResponse,
            GatewayTimeoutResponse,
            ServiceUnavailableResponse
        )
    ),
    tags(
        (name = TAG, description = "Lessons, forwarded to the files-and-lessons service")
    )
)]
pub struct ApiDoc;

/// Create the lessons router with all HTTP endpoints
pub fn router<C, P>(gateway: LessonsGateway<C, P>) -> Router
where
    C: LessonsClient + 'static,
    P: EventPublisher,
{
    Router::new()
        .route("/", get(list_lessons).post(create_lesson))
        .route("/{id}", get(get_lesson).delete(delete_lesson))
        .with_state(Arc::new(gateway))
}

/// Create a new lesson
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = CreateLesson,
    responses(
        (status = 200, description = "Identifier assigned downstream, or null", body = i64),
        (status = 400, response = BadRequestValidationResponse),
        (status = 502, response = BadGatewayResponse),
        (status = 503, response = ServiceUnavailableResponse),
        (status = 504, response = GatewayTimeoutResponse)
    )
)]
async fn create_lesson<C: LessonsClient, P: EventPublisher>(
    State(gateway): State<Arc<LessonsGateway<C, P>>>,
    ValidatedJson(input): ValidatedJson<CreateLesson>,
) -> LessonResult<Json<Option<LessonId>>> {
    let id = gateway.create_lesson(input).await?;
    Ok(Json(id))
}

/// List all lessons
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    responses(
        (status = 200, description = "All lessons, in downstream order", body = Vec<Lesson>),
        (status = 502, response = BadGatewayResponse),
        (status = 503, response = ServiceUnavailableResponse),
        (status = 504, response = GatewayTimeoutResponse)
    )
)]
async fn list_lessons<C: LessonsClient, P: EventPublisher>(
    State(gateway): State<Arc<LessonsGateway<C, P>>>,
) -> LessonResult<Json<Vec<Lesson>>> {
    let lessons = gateway.list_lessons().await?;
    Ok(Json(lessons))
}

/// Get a lesson by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i64, Path, description = "Lesson ID")
    ),
    responses(
        (status = 200, description = "Lesson found", body = Lesson),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 502, response = BadGatewayResponse),
        (status = 503, response = ServiceUnavailableResponse),
        (status = 504, response = GatewayTimeoutResponse)
    )
)]
async fn get_lesson<C: LessonsClient, P: EventPublisher>(
    State(gateway): State<Arc<LessonsGateway<C, P>>>,
    IdPath(id): IdPath,
) -> LessonResult<Json<Lesson>> {
    let lesson = gateway.get_lesson(id).await?;
    Ok(Json(lesson))
}

/// Delete a lesson
///
/// The downstream status and confirmation text are returned unchanged.
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i64, Path, description = "Lesson ID")
    ),
    responses(
        (status = 200, description = "Downstream confirmation text", body = String, content_type = "text/plain"),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, description = "Downstream reported the lesson missing", body = String, content_type = "text/plain"),
        (status = 503, response = ServiceUnavailableResponse),
        (status = 504, response = GatewayTimeoutResponse)
    )
)]
async fn delete_lesson<C: LessonsClient, P: EventPublisher>(
    State(gateway): State<Arc<LessonsGateway<C, P>>>,
    IdPath(id): IdPath,
) -> LessonResult<impl IntoResponse> {
    let outcome = gateway.delete_lesson(id).await?;
    let status = StatusCode::from_u16(outcome.status).unwrap_or(StatusCode::BAD_GATEWAY);

    Ok((
        status,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        outcome.body,
    ))
}
