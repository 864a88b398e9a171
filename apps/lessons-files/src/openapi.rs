//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for the lessons file service
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Lesson Files API",
        version = "0.1.0",
        description = "Upload, list, download and delete lesson material"
    ),
    servers(
        (url = "http://localhost:8081", description = "Local development server")
    ),
    nest(
        (path = "/api/files", api = domain_files::handlers::ApiDoc)
    )
)]
pub struct ApiDoc;
