//! HTTP client tests against a mocked files-and-lessons service
//!
//! Each test starts its own wiremock server so the assertions cover the real
//! request shape (method, path, JSON body) and the failure classification.

use domain_lessons::*;
use reqwest::Url;
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> HttpLessonsClient {
    let config = DownstreamConfig::new(Url::parse(&server.uri()).unwrap());
    HttpLessonsClient::new(&config).unwrap()
}

fn first_lesson_input() -> CreateLesson {
    CreateLesson {
        name: "First lesson".to_string(),
        folder: "First folder".to_string(),
        description: "First description".to_string(),
    }
}

#[tokio::test]
async fn test_create_posts_body_and_decodes_identifier() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/lessons"))
        .and(body_json(json!({
            "name": "First lesson",
            "folder": "First folder",
            "description": "First description"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(1))
        .expect(1)
        .mount(&server)
        .await;

    let id = client_for(&server).create(first_lesson_input()).await.unwrap();
    assert_eq!(id, Some(1));
}

#[tokio::test]
async fn test_create_null_and_empty_bodies_mean_no_identifier() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/lessons"))
        .respond_with(ResponseTemplate::new(200).set_body_string("null"))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/lessons"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert_eq!(client.create(first_lesson_input()).await.unwrap(), None);
    assert_eq!(client.create(first_lesson_input()).await.unwrap(), None);
}

#[tokio::test]
async fn test_create_error_status_is_classified() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/lessons"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .create(first_lesson_input())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        LessonError::DownstreamStatus { status: 500, ref body } if body == "boom"
    ));
}

#[tokio::test]
async fn test_list_preserves_downstream_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/lessons"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 2, "name": "Second lesson", "folder": "Second folder", "description": "Second description"},
            {"id": 1, "name": "First lesson", "folder": "First folder", "description": "First description"}
        ])))
        .mount(&server)
        .await;

    let lessons = client_for(&server).list().await.unwrap();
    let ids: Vec<LessonId> = lessons.iter().map(|l| l.id).collect();
    assert_eq!(ids, vec![2, 1]);
}

#[tokio::test]
async fn test_get_missing_lesson_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/lessons/999"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = client_for(&server).get(999).await.unwrap_err();
    assert!(matches!(err, LessonError::NotFound(999)));
}

#[tokio::test]
async fn test_get_malformed_body_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/lessons/1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"id\": \"one\"}"))
        .mount(&server)
        .await;

    let err = client_for(&server).get(1).await.unwrap_err();
    assert!(matches!(err, LessonError::DownstreamDecode(_)));
}

#[tokio::test]
async fn test_delete_relays_any_status() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/lessons/1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("deleted"))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/lessons/999"))
        .respond_with(ResponseTemplate::new(404).set_body_string("no such lesson"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert_eq!(client.delete(1).await.unwrap(), DeleteOutcome::new(200, "deleted"));
    assert_eq!(
        client.delete(999).await.unwrap(),
        DeleteOutcome::new(404, "no such lesson")
    );
}

#[tokio::test]
async fn test_slow_downstream_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/lessons"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([]))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let config = DownstreamConfig::new(Url::parse(&server.uri()).unwrap())
        .with_timeout(Duration::from_millis(100));
    let client = HttpLessonsClient::new(&config).unwrap();

    let err = client.list().await.unwrap_err();
    assert!(matches!(err, LessonError::DownstreamTimeout(_)));
}

#[tokio::test]
async fn test_unreachable_downstream_is_unavailable() {
    // Bind then drop a listener to get a local port nobody is listening on.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let config = DownstreamConfig::new(Url::parse(&format!("http://127.0.0.1:{port}")).unwrap());
    let client = HttpLessonsClient::new(&config).unwrap();

    let err = client.delete(1).await.unwrap_err();
    assert!(matches!(err, LessonError::DownstreamUnavailable(_)));
}
