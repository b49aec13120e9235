//! Remix: turns a blog post into separator-delimited tweet candidates.
//! All LLM calls go through llm_client.

pub mod handlers;
pub mod prompts;

use tracing::{debug, info};

use crate::errors::AppError;
use crate::llm_client::LlmClient;
use crate::remix::prompts::build_tweets_prompt;

/// Sends `text` through the tweet prompt and returns the model's raw output.
///
/// The caller validates `text`; this function always makes the upstream call.
pub async fn remix_text(llm: &LlmClient, text: &str) -> Result<String, AppError> {
    let prompt = build_tweets_prompt(text);
    debug!(prompt_length = prompt.len(), "sending remix prompt");

    let response = llm.call(&prompt).await?;

    let remixed = response.first_text().ok_or(AppError::MalformedUpstream)?;
    info!(output_length = remixed.len(), "remix completed");

    Ok(remixed.to_string())
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{body_string_contains, method};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn llm_for(server: &MockServer) -> LlmClient {
        LlmClient::new("test-key".to_string(), format!("{}/v1/messages", server.uri()))
    }

    #[tokio::test]
    async fn test_remix_returns_first_block_verbatim() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_string_contains("Here is the blog post:"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "content": [{"type": "text", "text": "  one ---TWEET_SEPARATOR--- two  "}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let remixed = remix_text(&llm_for(&server), "a post").await.unwrap();
        assert_eq!(remixed, "  one ---TWEET_SEPARATOR--- two  ");
    }

    #[tokio::test]
    async fn test_remix_empty_content_is_malformed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"content": []})))
            .mount(&server)
            .await;

        let err = remix_text(&llm_for(&server), "a post").await.unwrap_err();
        assert!(matches!(err, AppError::MalformedUpstream));
    }

    #[tokio::test]
    async fn test_remix_null_content_is_malformed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"content": null})),
            )
            .mount(&server)
            .await;

        let err = remix_text(&llm_for(&server), "a post").await.unwrap_err();
        assert!(matches!(err, AppError::MalformedUpstream));
    }

    #[tokio::test]
    async fn test_remix_api_failure_is_upstream_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(529).set_body_json(json!({
                "error": {"type": "overloaded_error", "message": "Overloaded"}
            })))
            .mount(&server)
            .await;

        let err = remix_text(&llm_for(&server), "a post").await.unwrap_err();
        assert!(matches!(err, AppError::Upstream(_)));
        assert!(err.to_string().contains("Overloaded"));
    }
}
