use base64::Engine as _;
use genai_complete::{Config, Error, FileInput, GenAi, RemoteError};
use pretty_assertions::assert_eq;
use std::io::Write;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PNG_BYTES: &[u8] = &[
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44, 0x52,
];

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn text_response(text: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] },
            "finishReason": "STOP"
        }]
    }))
}

fn genai_for(server: &MockServer) -> GenAi {
    GenAi::new(&Config::new("test-key").with_base_url(server.uri()))
}

#[tokio::test]
async fn test_complete_text_against_gemini_endpoint() {
    init_tracing();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-pro:generateContent"))
        .and(header("x-goog-api-key", "test-key"))
        .and(body_json(serde_json::json!({
            "contents": [{ "role": "user", "parts": [{ "text": "Say hi" }] }]
        })))
        .respond_with(text_response("Hi there"))
        .expect(1)
        .mount(&server)
        .await;

    let text = genai_for(&server).complete_text("Say hi").await.unwrap();
    assert_eq!(text, "Hi there");
}

#[tokio::test]
async fn test_complete_with_files_uses_vision_model_and_ordered_parts() {
    init_tracing();
    let server = MockServer::start().await;

    let mut tmp = tempfile::NamedTempFile::new().unwrap();
    tmp.write_all(b"%PDF-1.4 tiny").unwrap();

    let png_b64 = base64::engine::general_purpose::STANDARD.encode(PNG_BYTES);
    let pdf_b64 = base64::engine::general_purpose::STANDARD.encode(b"%PDF-1.4 tiny");

    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-pro-vision:generateContent"))
        .and(body_json(serde_json::json!({
            "contents": [{
                "role": "user",
                "parts": [
                    { "text": "Describe this" },
                    { "inlineData": { "mimeType": "image/png", "data": png_b64 } },
                    { "inlineData": { "mimeType": "application/pdf", "data": pdf_b64 } }
                ]
            }]
        })))
        .respond_with(text_response("A pixel and a document"))
        .expect(1)
        .mount(&server)
        .await;

    let files = vec![
        FileInput::from_bytes("pixel.png", PNG_BYTES.to_vec(), "image/png"),
        FileInput::from_path(tmp.path()),
    ];

    let text = genai_for(&server)
        .complete_with_files("Describe this", &files)
        .await
        .unwrap();
    assert_eq!(text, "A pixel and a document");
}

#[tokio::test]
async fn test_unreadable_file_makes_no_request() {
    init_tracing();
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();

    Mock::given(method("POST"))
        .respond_with(text_response("should not happen"))
        .expect(0)
        .mount(&server)
        .await;

    let files = vec![
        FileInput::from_bytes("pixel.png", PNG_BYTES.to_vec(), "image/png"),
        FileInput::from_path(dir.path().join("missing.png")),
    ];

    let err = genai_for(&server)
        .complete_with_files("Describe this", &files)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::FileRead { .. }));
}

#[tokio::test]
async fn test_quota_rejection_surfaces_status() {
    init_tracing();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429).set_body_string("RESOURCE_EXHAUSTED"))
        .expect(1)
        .mount(&server)
        .await;

    let err = genai_for(&server).complete_text("hi").await.unwrap_err();
    match err {
        Error::RemoteGeneration(RemoteError::Status { status, body }) => {
            assert_eq!(status, 429);
            assert_eq!(body, "RESOURCE_EXHAUSTED");
        }
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_safety_block_is_remote_error() {
    init_tracing();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "promptFeedback": { "blockReason": "SAFETY" }
        })))
        .mount(&server)
        .await;

    let err = genai_for(&server).complete_text("hi").await.unwrap_err();
    assert!(matches!(
        err,
        Error::RemoteGeneration(RemoteError::Blocked(_))
    ));
}

#[tokio::test]
async fn test_empty_model_id_fails_before_network() {
    init_tracing();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(text_response("unused"))
        .expect(0)
        .mount(&server)
        .await;

    let mut config = Config::new("test-key").with_base_url(server.uri());
    config.text_model = String::new();

    let err = GenAi::new(&config).complete_text("hi").await.unwrap_err();
    assert!(matches!(err, Error::Configuration(_)));
}
