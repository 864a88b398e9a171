//! Custom extractors for Axum handlers.
//!
//! Both extractors reject bad input with the standard [`ErrorResponse`](crate::ErrorResponse)
//! envelope before the handler runs.

pub mod id_path;
pub mod validated_json;

pub use id_path::IdPath;
pub use validated_json::ValidatedJson;
