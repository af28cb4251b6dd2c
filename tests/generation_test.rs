//! Generation client tests against a mock upstream service.
use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use memeforge_api::error::AppError;
use memeforge_api::leonardo::client::LeonardoClient;
use memeforge_api::leonardo::types::{GenerationParams, JobStatus};

fn client_for(server: &MockServer) -> LeonardoClient {
    LeonardoClient::new(server.uri(), "test-key")
}

fn pending_body() -> serde_json::Value {
    json!({ "generations_by_pk": { "status": "PENDING", "generated_images": [] } })
}

fn complete_body(url: &str) -> serde_json::Value {
    json!({ "generations_by_pk": { "status": "COMPLETE", "generated_images": [{ "url": url }] } })
}

#[tokio::test]
async fn create_generation_returns_job_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/generations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "sdGenerationJob": { "generationId": "job-123" }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let params = GenerationParams::for_prompt("a doge in space");
    let job_id = client.create_generation(&params).await.unwrap();
    assert_eq!(job_id, "job-123");
}

#[tokio::test]
async fn rejected_submission_surfaces_upstream_text_without_polling() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/generations"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid api key"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let params = GenerationParams::for_prompt("a doge in space");
    let err = client.create_generation(&params).await.unwrap_err();
    match err {
        AppError::Upstream { status, body } => {
            assert_eq!(status, 401);
            assert!(body.contains("invalid api key"));
        }
        other => panic!("expected Upstream error, got {:?}", other),
    }
    // Submission failed, so nothing else was called.
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn await_completion_returns_after_exactly_three_polls() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/generations/job-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(pending_body()))
        .up_to_n_times(2)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/generations/job-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(complete_body("https://x/img.png")))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let job = client
        .await_completion("job-123", 30, Duration::ZERO)
        .await
        .unwrap();
    assert_eq!(job.status, JobStatus::Complete);
    assert_eq!(job.image_url.as_deref(), Some("https://x/img.png"));
    assert_eq!(server.received_requests().await.unwrap().len(), 3);
}

#[tokio::test]
async fn await_completion_times_out_after_the_attempt_bound() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/generations/job-9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(pending_body()))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let job = client
        .await_completion("job-9", 5, Duration::ZERO)
        .await
        .unwrap();
    assert_eq!(job.status, JobStatus::Timeout);
    assert!(job.image_url.is_none());
    assert_eq!(server.received_requests().await.unwrap().len(), 5);
}

#[tokio::test]
async fn failed_job_is_terminal_on_the_first_poll() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/generations/job-7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "generations_by_pk": { "status": "FAILED", "generated_images": [] }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let job = client
        .await_completion("job-7", 30, Duration::ZERO)
        .await
        .unwrap();
    assert_eq!(job.status, JobStatus::Failed);
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn transient_poll_errors_are_retried_within_the_bound() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/generations/job-5"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .up_to_n_times(2)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/generations/job-5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(complete_body("https://x/img.png")))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let job = client
        .await_completion("job-5", 30, Duration::ZERO)
        .await
        .unwrap();
    assert_eq!(job.status, JobStatus::Complete);
    assert_eq!(server.received_requests().await.unwrap().len(), 3);
}

#[tokio::test]
async fn malformed_poll_payload_is_fatal() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/generations/job-3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "unexpected": true })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .await_completion("job-3", 30, Duration::ZERO)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidResponse(_)));
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn unknown_status_string_is_fatal() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/generations/job-2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "generations_by_pk": { "status": "EXPLODED", "generated_images": [] }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.get_generation("job-2").await.unwrap_err();
    match err {
        AppError::InvalidResponse(msg) => assert!(msg.contains("EXPLODED")),
        other => panic!("expected InvalidResponse, got {:?}", other),
    }
}
