//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for the orchestrator
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Lessons Orchestrator API",
        version = "0.1.0",
        description = "Gateway to the files-and-lessons service with lesson statistics events"
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    nest(
        (path = "/api/lessons", api = domain_lessons::handlers::ApiDoc)
    )
)]
pub struct ApiDoc;
