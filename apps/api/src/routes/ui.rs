use axum::response::Html;

use crate::errors::AppError;

/// Looked up relative to the working directory, which differs between
/// `cargo run -p api` at the workspace root and running the binary directly.
const PAGE_PATHS: [&str; 2] = ["templates/index.html", "apps/api/templates/index.html"];

/// GET /
/// Serves the analyzer page; gauges render client-side from the report JSON.
pub async fn index_handler() -> Result<Html<String>, AppError> {
    for path in PAGE_PATHS {
        if let Ok(page) = tokio::fs::read_to_string(path).await {
            return Ok(Html(page));
        }
    }
    Err(AppError::Internal(anyhow::anyhow!(
        "Failed to load analyzer page: templates/index.html not found"
    )))
}
