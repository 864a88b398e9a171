//! Lessons API routes

use domain_lessons::{LessonsGateway, handlers};

use crate::state::AppState;

/// Create lessons router
pub fn router(state: &AppState) -> axum::Router {
    let gateway = LessonsGateway::new(state.lessons_client.clone(), state.producer.clone());
    handlers::router(gateway)
}
