//! API routes module

use axum::Router;
use domain_files::{FileStorageService, handlers};

/// Create all API routes
pub fn routes(service: FileStorageService, max_upload_bytes: usize) -> Router {
    Router::new().nest("/files", handlers::router(service, max_upload_bytes))
}
