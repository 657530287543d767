use muallem_gemini::{GeminiClient, GenerateError, Generator};
use muallem_protocol::gemini::generate_content::{Content, GenerateContentRequestBody, Part};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn request_body(text: &str) -> GenerateContentRequestBody {
    GenerateContentRequestBody {
        contents: vec![Content::user(vec![Part::text(text)])],
        ..Default::default()
    }
}

#[tokio::test]
async fn generate_returns_candidate_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1beta/models/test-model:generateContent"))
        .and(header("x-goog-api-key", "secret"))
        .and(body_partial_json(json!({
            "contents": [{"role": "user", "parts": [{"text": "اشرح"}]}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": "الشرح"}]},
                "finishReason": "STOP"
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = GeminiClient::new(server.uri(), "test-model");
    let reply = client.generate("secret", request_body("اشرح")).await.unwrap();
    assert_eq!(reply, "الشرح");
}

#[tokio::test]
async fn generate_surfaces_upstream_error_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1beta/models/test-model:generateContent"))
        .respond_with(ResponseTemplate::new(400).set_body_string("API key not valid"))
        .mount(&server)
        .await;

    let client = GeminiClient::new(server.uri(), "test-model");
    let err = client
        .generate("bad-key", request_body("اشرح"))
        .await
        .unwrap_err();
    match err {
        GenerateError::Upstream { status, message } => {
            assert_eq!(status.as_u16(), 400);
            assert_eq!(message, "API key not valid");
        }
        other => panic!("expected upstream error, got {other:?}"),
    }
}

#[tokio::test]
async fn generate_without_candidates_is_an_empty_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1beta/models/test-model:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"candidates": []})))
        .mount(&server)
        .await;

    let client = GeminiClient::new(server.uri(), "test-model");
    let err = client
        .generate("secret", request_body("اشرح"))
        .await
        .unwrap_err();
    assert!(matches!(err, GenerateError::EmptyResponse));
}
