use std::time::Duration;

use pretty_assertions::assert_eq;
use retouch_client::{
    ApiErrorKind, BackendApi, BackendSettings, ImageAction, ReqwestBackend, TextAction,
};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn backend_for(server: &MockServer) -> ReqwestBackend {
    let settings = BackendSettings {
        base_url: server.uri(),
        ..BackendSettings::default()
    };
    ReqwestBackend::new(settings).expect("backend")
}

#[tokio::test]
async fn scrape_parses_structured_content() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/scrape"))
        .and(body_json(json!({ "url": "https://example.com" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "title": "Example Domain",
            "meta_description": "Example meta",
            "images": [{ "url": "https://example.com/a.png", "alt": "A" }],
            "content_blocks": [
                { "id": "b1", "type": "heading", "text": "Welcome", "images": [] },
                { "id": "b2", "type": "paragraph", "text": "Body", "images": [
                    { "url": "https://example.com/b.png", "alt": "B" }
                ]}
            ]
        })))
        .mount(&server)
        .await;

    let page = backend_for(&server)
        .scrape("https://example.com")
        .await
        .expect("scrape ok");

    assert_eq!(page.title, "Example Domain");
    assert_eq!(page.meta_description, "Example meta");
    assert_eq!(page.images.len(), 1);
    assert_eq!(page.content_blocks.len(), 2);
    assert_eq!(page.content_blocks[0].kind, "heading");
    assert_eq!(page.content_blocks[1].images[0].alt, "B");
}

#[tokio::test]
async fn scrape_surfaces_backend_error_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/scrape"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "error": "invalid url" })))
        .mount(&server)
        .await;

    let err = backend_for(&server)
        .scrape("https://example.com")
        .await
        .unwrap_err();

    assert_eq!(err.kind, ApiErrorKind::Application);
    assert_eq!(err.message, "invalid url");
}

#[tokio::test]
async fn non_string_error_field_is_still_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/scrape"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "error": { "code": 42 },
            "title": "T"
        })))
        .mount(&server)
        .await;

    let err = backend_for(&server)
        .scrape("https://example.com")
        .await
        .unwrap_err();

    assert_eq!(err.kind, ApiErrorKind::Application);
    assert_eq!(err.message, r#"{"code":42}"#);

    // A null error field means no error at all.
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/edit"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "error": null, "result": "ok" })),
        )
        .mount(&server)
        .await;

    let result = backend_for(&server)
        .edit_text("Hello", TextAction::Rephrase)
        .await
        .expect("edit ok");
    assert_eq!(result, Some("ok".to_string()));
}

#[tokio::test]
async fn scrape_maps_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/scrape"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = backend_for(&server)
        .scrape("https://example.com")
        .await
        .unwrap_err();

    assert_eq!(err.kind, ApiErrorKind::HttpStatus(500));
    assert_eq!(err.message, "HTTP error! status: 500");
}

#[tokio::test]
async fn edit_sends_canonical_action_and_returns_result() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/edit"))
        .and(body_json(json!({
            "text": "Hello world",
            "action": "simplify"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "result": "Hi world" })))
        .mount(&server)
        .await;

    let result = backend_for(&server)
        .edit_text("Hello world", TextAction::Simplify)
        .await
        .expect("edit ok");

    assert_eq!(result, Some("Hi world".to_string()));
}

#[tokio::test]
async fn edit_treats_absent_or_empty_result_as_no_change() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/edit"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "result": "" })))
        .mount(&server)
        .await;

    let result = backend_for(&server)
        .edit_text("Hello", TextAction::Rephrase)
        .await
        .expect("edit ok");
    assert_eq!(result, None);

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/edit"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let result = backend_for(&server)
        .edit_text("Hello", TextAction::Rephrase)
        .await
        .expect("edit ok");
    assert_eq!(result, None);
}

#[tokio::test]
async fn edit_truncates_overlong_input() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/edit"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "result": "ok" })))
        .mount(&server)
        .await;

    let long = "a".repeat(500);
    backend_for(&server)
        .edit_text(&long, TextAction::Lengthen)
        .await
        .expect("edit ok");

    let requests = server.received_requests().await.expect("requests recorded");
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    let sent = body["text"].as_str().unwrap();
    assert_eq!(sent.chars().count(), 303);
    assert!(sent.ends_with("..."));
}

#[tokio::test]
async fn process_blur_sends_factor_and_omits_dimensions() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/process-image"))
        .and(body_json(json!({
            "image_url": "https://example.com/a.png",
            "action": "blur",
            "quality": 85,
            "factor": 2.0
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "image_base64": "data:image/jpg;base64,aGVsbG8=",
            "original_size": [800, 600],
            "processed_size": [800, 600],
            "original_file_size": 20480,
            "processed_file_size": 10240,
            "size_reduction_percent": 50.0,
            "format": "JPG"
        })))
        .mount(&server)
        .await;

    let image = backend_for(&server)
        .process_image("https://example.com/a.png", ImageAction::Blur)
        .await
        .expect("process ok");

    assert_eq!(image.bytes, b"hello");
    assert_eq!(image.media_type, "image/jpg");
    assert_eq!(image.original_size, (800, 600));
    assert_eq!(image.processed_size, (800, 600));
    assert_eq!(image.original_file_size, 20480);
    assert_eq!(image.processed_file_size, 10240);
    assert_eq!(image.size_reduction_percent, 50.0);
    assert_eq!(image.format, "JPG");
}

#[tokio::test]
async fn process_resize_sends_default_dimensions() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/process-image"))
        .and(body_json(json!({
            "image_url": "https://example.com/a.png",
            "action": "resize",
            "width": 400,
            "height": 300,
            "quality": 85,
            "factor": 1.0
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "image_base64": "data:image/png;base64,aGVsbG8=",
            "original_size": [800, 600],
            "processed_size": [400, 300],
            "original_file_size": 20480,
            "processed_file_size": 5120,
            "size_reduction_percent": 75.0,
            "format": "PNG"
        })))
        .mount(&server)
        .await;

    let image = backend_for(&server)
        .process_image("https://example.com/a.png", ImageAction::Resize)
        .await
        .expect("process ok");

    assert_eq!(image.processed_size, (400, 300));
    assert_eq!(image.format, "PNG");
}

#[tokio::test]
async fn process_without_success_flag_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/process-image"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": false })))
        .mount(&server)
        .await;

    let err = backend_for(&server)
        .process_image("https://example.com/a.png", ImageAction::Sepia)
        .await
        .unwrap_err();

    assert_eq!(err.kind, ApiErrorKind::Application);
    assert_eq!(err.message, "Unknown error occurred");
}

#[tokio::test]
async fn process_error_field_wins_over_success_flag() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/process-image"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "error": "Image processing failed: download error"
        })))
        .mount(&server)
        .await;

    let err = backend_for(&server)
        .process_image("https://example.com/a.png", ImageAction::Compress)
        .await
        .unwrap_err();

    assert_eq!(err.kind, ApiErrorKind::Application);
    assert_eq!(err.message, "Image processing failed: download error");
}

#[tokio::test]
async fn process_with_bad_data_uri_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/process-image"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "image_base64": "https://not-a-data-uri.example.com"
        })))
        .mount(&server)
        .await;

    let err = backend_for(&server)
        .process_image("https://example.com/a.png", ImageAction::Blur)
        .await
        .unwrap_err();

    assert_eq!(err.kind, ApiErrorKind::MalformedResponse);
}

#[tokio::test]
async fn slow_response_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/edit"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(json!({ "result": "late" })),
        )
        .mount(&server)
        .await;

    let settings = BackendSettings {
        base_url: server.uri(),
        request_timeout: Duration::from_millis(50),
        ..BackendSettings::default()
    };
    let backend = ReqwestBackend::new(settings).expect("backend");

    let err = backend
        .edit_text("Hello", TextAction::Simplify)
        .await
        .unwrap_err();

    assert_eq!(err.kind, ApiErrorKind::Timeout);
}
