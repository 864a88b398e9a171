//! API routes module

pub mod lessons;

use axum::{Router, routing::get};
use domain_statistics::metrics_handler;

use crate::state::AppState;

/// Create all API routes
pub fn routes(state: &AppState) -> Router {
    Router::new().nest("/lessons", lessons::router(state))
}

/// Prometheus scrape endpoint, mounted beside /health
pub fn metrics_router() -> Router {
    Router::new().route("/metrics", get(metrics_handler))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use domain_statistics::{
        EventPublisher, LoggingSink, StatisticEvent, StatisticEventModel, StatisticProducer,
        init_metrics,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_metrics_endpoint_reports_dropped_events() {
        init_metrics().unwrap();

        // The worker cannot run between these sends on a current-thread runtime
        let (producer, worker) = StatisticProducer::spawn(LoggingSink, 1);
        for id in 0..5 {
            producer.send_event(StatisticEventModel::new(StatisticEvent::LessonCreated, id));
        }

        let response = metrics_router()
            .oneshot(Request::builder().uri("/metrics").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(body.contains("statistics_events_dropped_total{reason=\"full\"}"));

        drop(producer);
        worker.await.unwrap();
    }
}
