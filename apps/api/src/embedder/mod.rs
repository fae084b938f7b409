/// Embedding Provider — the single point of entry for all embedding calls.
///
/// ARCHITECTURAL RULE: No other module may call the embeddings API directly.
/// Handlers and the analysis pipeline see only the `Embedder` trait, carried
/// in `AppState` as `Arc<dyn Embedder>` and constructed once at startup.
use async_trait::async_trait;
use thiserror::Error;

pub mod openai;

pub use openai::HttpEmbedder;

/// Inputs are truncated to this many whitespace-delimited tokens before the
/// request is sent, keeping payloads inside the context cap embedding models
/// typically enforce.
pub const TOKEN_BUDGET: usize = 512;

#[derive(Debug, Error)]
pub enum EmbedError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Rate limited after {retries} retries")]
    RateLimited { retries: u32 },

    #[error("Provider returned no embedding")]
    EmptyResponse,
}

/// Maps a text string (possibly empty) to a fixed-length vector.
#[async_trait]
pub trait Embedder: Send + Sync {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbedError>;
}

/// Cuts `text` after `budget` whitespace-delimited tokens.
/// Returns the input unchanged when it fits the budget.
pub fn truncate_to_budget(text: &str, budget: usize) -> &str {
    let mut tokens = 0;
    let mut in_token = false;
    for (i, c) in text.char_indices() {
        if c.is_whitespace() {
            in_token = false;
        } else if !in_token {
            in_token = true;
            tokens += 1;
            if tokens > budget {
                return text[..i].trim_end();
            }
        }
    }
    text
}
