//! Tests for the chat-completion client against a local mock endpoint.

use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use english_exam_gen::config::LlmConfig;
use english_exam_gen::generator::{GeneratorError, OpenAiGenerator, QuestionGenerator};
use serde_json::{json, Value};
use tokio::net::TcpListener;

#[derive(Clone, Default)]
struct Captured {
    auth: Arc<Mutex<Option<String>>>,
    body: Arc<Mutex<Option<Value>>>,
}

/// Spawn a mock endpoint answering every request with `status` and `reply`.
async fn spawn_mock(status: StatusCode, reply: Value) -> (String, Captured) {
    let captured = Captured::default();

    let handler = move |State(captured): State<Captured>,
                        headers: HeaderMap,
                        Json(body): Json<Value>| {
        let reply = reply.clone();
        async move {
            *captured.auth.lock().unwrap() = headers
                .get("authorization")
                .and_then(|v| v.to_str().ok())
                .map(str::to_string);
            *captured.body.lock().unwrap() = Some(body);
            (status, Json(reply))
        }
    };

    let app = Router::new()
        .route("/v1/chat/completions", post(handler))
        .with_state(captured.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}/v1/chat/completions"), captured)
}

fn config(api_url: String) -> LlmConfig {
    LlmConfig {
        api_url,
        model: "test-model".to_string(),
        temperature: 0.2,
        timeout_secs: 5,
        ..LlmConfig::default()
    }
}

#[tokio::test]
async fn test_successful_completion() {
    let (url, captured) = spawn_mock(
        StatusCode::OK,
        json!({
            "id": "chatcmpl-1",
            "choices": [{ "index": 0, "message": { "role": "assistant", "content": "  Passage text \n" } }]
        }),
    )
    .await;

    let generator = OpenAiGenerator::new(&config(url), Some("sk-test".to_string())).unwrap();
    let text = generator.generate("Write a cloze passage").await.unwrap();

    assert_eq!(text, "Passage text");
    assert_eq!(
        captured.auth.lock().unwrap().as_deref(),
        Some("Bearer sk-test")
    );

    let body = captured.body.lock().unwrap().clone().unwrap();
    assert_eq!(body["model"], "test-model");
    assert_eq!(body["messages"][0]["role"], "system");
    assert_eq!(
        body["messages"][0]["content"],
        "You are an AI English test generator."
    );
    assert_eq!(body["messages"][1]["role"], "user");
    assert_eq!(body["messages"][1]["content"], "Write a cloze passage");
}

#[tokio::test]
async fn test_error_status_is_reported() {
    let (url, _) = spawn_mock(
        StatusCode::TOO_MANY_REQUESTS,
        json!({ "error": { "message": "rate limited" } }),
    )
    .await;

    let generator = OpenAiGenerator::new(&config(url), Some("sk-test".to_string())).unwrap();
    let err = generator.generate("prompt").await.unwrap_err();

    match err {
        GeneratorError::Status { status, body } => {
            assert_eq!(status, 429);
            assert!(body.contains("rate limited"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_empty_choices_is_an_error() {
    let (url, _) = spawn_mock(StatusCode::OK, json!({ "choices": [] })).await;

    let generator = OpenAiGenerator::new(&config(url), Some("sk-test".to_string())).unwrap();
    let err = generator.generate("prompt").await.unwrap_err();

    assert!(matches!(err, GeneratorError::EmptyContent));
}

#[tokio::test]
async fn test_unexpected_body_is_decode_error() {
    let (url, _) = spawn_mock(StatusCode::OK, json!({ "result": "text" })).await;

    let generator = OpenAiGenerator::new(&config(url), Some("sk-test".to_string())).unwrap();
    let err = generator.generate("prompt").await.unwrap_err();

    assert!(matches!(err, GeneratorError::Decode(_)));
}
