mod mocks;

use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use serde_json::{Value, json};

use mocks::{MockCaptions, MockGemini};
use tube_digest::server::{AppState, health_check, summary};

async fn call(captions: MockCaptions, gemini: MockGemini, uri: &str) -> (StatusCode, Value) {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(AppState { captions, gemini }))
            .service(health_check)
            .route("/summary", web::get().to(summary::<MockCaptions, MockGemini>)),
    )
    .await;

    let req = test::TestRequest::get().uri(uri).to_request();
    let resp = test::call_service(&app, req).await;
    let status = resp.status();
    let body: Value = test::read_body_json(resp).await;
    (status, body)
}

#[actix_web::test]
async fn missing_url_param_is_bad_request() {
    let (status, body) = call(
        MockCaptions::unavailable(),
        MockGemini::new("unused"),
        "/summary",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "No URL provided."}));
}

#[actix_web::test]
async fn empty_url_param_is_bad_request() {
    let (status, body) = call(
        MockCaptions::unavailable(),
        MockGemini::new("unused"),
        "/summary?url=",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "No URL provided."}));
}

#[actix_web::test]
async fn unextractable_video_id_is_bad_request() {
    let (status, body) = call(
        MockCaptions::unavailable(),
        MockGemini::new("unused"),
        "/summary?url=https%3A%2F%2Fexample.com%2Fwatch",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Invalid YouTube URL format."}));
}

#[actix_web::test]
async fn successful_summary_returns_bullet_points() {
    let gemini = MockGemini::new("- point one\n- point two\n- point three");
    let calls = gemini.summarize_calls.clone();

    let (status, body) = call(
        MockCaptions::with_transcript(&["Hello", "world"]),
        gemini,
        "/summary?url=https%3A%2F%2Fwww.youtube.com%2Fwatch%3Fv%3DdQw4w9WgXcQ",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"summary": "- point one\n- point two\n- point three"})
    );
    // The summarizer saw the joined transcript, not the raw segments.
    assert_eq!(calls.lock().unwrap().clone(), vec!["Hello world"]);
}

#[actix_web::test]
async fn shortlink_urls_are_accepted() {
    let (status, body) = call(
        MockCaptions::with_transcript(&["short", "video"]),
        MockGemini::new("- a bullet"),
        "/summary?url=https%3A%2F%2Fyoutu.be%2FABCDEFGHIJK",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"summary": "- a bullet"}));
}

#[actix_web::test]
async fn empty_transcript_is_not_found() {
    let (status, body) = call(
        MockCaptions::with_transcript(&[""]),
        MockGemini::new("unused"),
        "/summary?url=https%3A%2F%2Fyoutu.be%2FABCDEFGHIJK",
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Transcript is empty."}));
}

#[actix_web::test]
async fn unavailable_transcript_is_not_found_with_detail() {
    let gemini = MockGemini::new("unused");
    let calls = gemini.summarize_calls.clone();

    let (status, body) = call(
        MockCaptions::unavailable(),
        gemini,
        "/summary?url=https%3A%2F%2Fyoutu.be%2FABCDEFGHIJK",
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    let detail = body["error"].as_str().unwrap();
    assert!(
        detail.contains("No transcripts or captions available for video ABCDEFGHIJK"),
        "unexpected detail: {detail}"
    );
    assert!(calls.lock().unwrap().is_empty(), "summarizer must not run");
}

#[actix_web::test]
async fn summarization_failure_is_a_generic_internal_error() {
    let (status, body) = call(
        MockCaptions::with_transcript(&["some", "transcript"]),
        MockGemini::failing(),
        "/summary?url=https%3A%2F%2Fyoutu.be%2FABCDEFGHIJK",
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    // Upstream detail stays server-side.
    assert_eq!(
        body,
        json!({"error": "Internal error occurred. Ensure video has English captions."})
    );
}

#[actix_web::test]
async fn health_endpoint_reports_ok() {
    let (status, body) = call(
        MockCaptions::unavailable(),
        MockGemini::new("unused"),
        "/api/v1/health",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}
