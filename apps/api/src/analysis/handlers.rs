use axum::{extract::Multipart, extract::State, Json};
use serde::Deserialize;
use tracing::info;

use crate::analysis::pipeline::{analyze, MatchReport};
use crate::errors::AppError;
use crate::intake::Submission;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AnalyzeTextRequest {
    pub resume_text: String,
    pub job_text: String,
}

/// POST /api/v1/analyze
/// Multipart form: `resume_file` (PDF) and/or `resume_text`, `job_file`
/// (plain text) and/or `job_text`.
pub async fn handle_analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<MatchReport>, AppError> {
    let submission = Submission::from_multipart(&mut multipart).await?;
    let (resume, job) = submission.resolve()?;
    info!(
        "Analyzing submission: resume {} chars, job description {} chars",
        resume.len(),
        job.len()
    );
    let report = analyze(state.embedder.as_ref(), &resume, &job).await;
    Ok(Json(report))
}

/// POST /api/v1/analyze/text
/// JSON body for clients without multipart support.
pub async fn handle_analyze_text(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeTextRequest>,
) -> Result<Json<MatchReport>, AppError> {
    if req.resume_text.trim().is_empty() || req.job_text.trim().is_empty() {
        return Err(AppError::Validation(
            "Both resume_text and job_text are required".to_string(),
        ));
    }
    let report = analyze(state.embedder.as_ref(), &req.resume_text, &req.job_text).await;
    Ok(Json(report))
}
