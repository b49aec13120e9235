//! Helpers shared by the router tests.

use std::sync::Arc;

use axum::{body::Body, response::Response};
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::llm_client::LlmClient;
use crate::posts::{MemoryPostStore, PostStore};
use crate::state::AppState;

pub fn test_state(server: &MockServer, posts: Arc<MemoryPostStore>) -> AppState {
    AppState {
        llm: LlmClient::new(
            "test-key".to_string(),
            format!("{}/v1/messages", server.uri()),
        ),
        posts: posts as Arc<dyn PostStore>,
    }
}

pub fn completion_body(text: &str) -> Value {
    json!({
        "id": "msg_test",
        "type": "message",
        "role": "assistant",
        "model": "claude-3-opus-20240229",
        "content": [{"type": "text", "text": text}],
        "stop_reason": "end_turn",
        "usage": {"input_tokens": 10, "output_tokens": 20}
    })
}

/// Mock Messages API answering every call with `status` and `body`.
/// `expected_calls` is verified when the server drops.
pub async fn mock_llm(status: u16, body: Value, expected_calls: u64) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .expect(expected_calls)
        .mount(&server)
        .await;
    server
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_str(&body_text(response).await).unwrap()
}
