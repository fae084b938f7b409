//! HTTP embedding client for OpenAI-compatible `/embeddings` endpoints.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::embedder::{EmbedError, Embedder, TOKEN_BUDGET};

const MAX_RETRIES: u32 = 3;
const REQUEST_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Serialize)]
struct EmbeddingRequest<'a> {
    model: &'a str,
    input: &'a str,
}

#[derive(Debug, Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingRow>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingRow {
    index: usize,
    embedding: Vec<f32>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Embeddings client speaking the OpenAI wire format. Any provider exposing
/// a compatible `/embeddings` route can be substituted via `EMBEDDINGS_BASE_URL`.
#[derive(Clone)]
pub struct HttpEmbedder {
    client: Client,
    endpoint: String,
    model: String,
    api_key: String,
}

impl HttpEmbedder {
    pub fn new(api_key: String, base_url: &str, model: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            endpoint: format!("{}/embeddings", base_url.trim_end_matches('/')),
            model,
            api_key,
        }
    }
}

#[async_trait]
impl Embedder for HttpEmbedder {
    /// Embeds a single text, retrying on 429 and 5xx with exponential backoff.
    /// Empty strings are sent as-is; the provider returns a valid vector for them.
    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbedError> {
        let input = crate::embedder::truncate_to_budget(text, TOKEN_BUDGET);
        let request_body = EmbeddingRequest {
            model: &self.model,
            input,
        };

        let mut last_error: Option<EmbedError> = None;

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                // Exponential backoff: 1s, 2s
                let delay = std::time::Duration::from_millis(1000 * (1 << (attempt - 1)));
                warn!(
                    "Embedding call attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let response = self
                .client
                .post(&self.endpoint)
                .bearer_auth(&self.api_key)
                .json(&request_body)
                .send()
                .await;

            let response = match response {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(EmbedError::Http(e));
                    continue;
                }
            };

            let status = response.status();

            if status.as_u16() == 429 || status.is_server_error() {
                let body = response.text().await.unwrap_or_default();
                warn!("Embeddings API returned {}: {}", status, body);
                last_error = Some(EmbedError::Api {
                    status: status.as_u16(),
                    message: body,
                });
                continue;
            }

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                let message = serde_json::from_str::<ApiError>(&body)
                    .map(|e| e.error.message)
                    .unwrap_or(body);
                return Err(EmbedError::Api {
                    status: status.as_u16(),
                    message,
                });
            }

            let mut parsed: EmbeddingResponse =
                serde_json::from_str(&response.text().await.map_err(EmbedError::Http)?)?;
            parsed.data.sort_by_key(|row| row.index);

            let embedding = parsed
                .data
                .into_iter()
                .next()
                .map(|row| row.embedding)
                .ok_or(EmbedError::EmptyResponse)?;
            if embedding.is_empty() {
                return Err(EmbedError::EmptyResponse);
            }

            debug!("Embedding call succeeded: dimension={}", embedding.len());
            return Ok(embedding);
        }

        Err(last_error.unwrap_or(EmbedError::RateLimited {
            retries: MAX_RETRIES,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn embedder_for(server: &MockServer) -> HttpEmbedder {
        HttpEmbedder::new(
            "test-key".to_string(),
            &server.base_url(),
            "text-embedding-3-small".to_string(),
        )
    }

    #[tokio::test]
    async fn test_embed_parses_vector() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/embeddings")
                    .header("authorization", "Bearer test-key")
                    .json_body_partial(r#"{"input": "hello world"}"#);
                then.status(200).json_body(json!({
                    "data": [{"index": 0, "embedding": [0.1, 0.2, 0.3]}],
                    "model": "text-embedding-3-small",
                    "usage": {"prompt_tokens": 2, "total_tokens": 2}
                }));
            })
            .await;

        let embedding = embedder_for(&server).embed("hello world").await.unwrap();
        mock.assert_async().await;
        assert_eq!(embedding, vec![0.1, 0.2, 0.3]);
    }

    #[tokio::test]
    async fn test_embed_tolerates_empty_input() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/embeddings")
                    .json_body_partial(r#"{"input": ""}"#);
                then.status(200).json_body(json!({
                    "data": [{"index": 0, "embedding": [0.0, 0.01]}]
                }));
            })
            .await;

        let embedding = embedder_for(&server).embed("").await.unwrap();
        assert_eq!(embedding.len(), 2);
    }

    #[tokio::test]
    async fn test_embed_surfaces_api_error_message() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/embeddings");
                then.status(400)
                    .json_body(json!({"error": {"message": "invalid model"}}));
            })
            .await;

        let err = embedder_for(&server).embed("text").await.unwrap_err();
        match err {
            EmbedError::Api { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "invalid model");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_embed_empty_data_is_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/embeddings");
                then.status(200).json_body(json!({"data": []}));
            })
            .await;

        let err = embedder_for(&server).embed("text").await.unwrap_err();
        assert!(matches!(err, EmbedError::EmptyResponse));
    }
}
