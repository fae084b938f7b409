//! Analysis pipeline — runs one resume/job-description pair through
//! normalization, section extraction, embedding, similarity scoring, and
//! recommendation, producing the report consumed by the UI.

use serde::Serialize;
use tracing::warn;

use crate::analysis::gauge::{self, GaugeBand};
use crate::analysis::normalize::normalize;
use crate::analysis::recommendation::{aggregate, recommend, Verdict};
use crate::analysis::sections::{HeaderLexicon, SectionLabel};
use crate::analysis::similarity::cosine_similarity;
use crate::embedder::Embedder;

/// Which sides of the pair actually contained the section header. Scores for
/// anything other than `Both` come from embedding empty text and should be
/// read as reduced-confidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Coverage {
    Both,
    ResumeMissing,
    JobMissing,
    BothMissing,
}

/// Result of scoring one section label across the pair.
#[derive(Debug, Clone, Serialize)]
pub struct SectionOutcome {
    pub label: SectionLabel,
    pub title: &'static str,
    pub similarity: Option<f32>,
    pub gauge: Option<f32>,
    pub coverage: Coverage,
    /// Set when the embedding call for this label failed; the label is then
    /// excluded from the aggregate and the verdict.
    pub error: Option<String>,
}

/// The full match report: exactly one outcome per label, in lexicon order,
/// plus the aggregate gauge and verdict.
#[derive(Debug, Clone, Serialize)]
pub struct MatchReport {
    pub sections: Vec<SectionOutcome>,
    pub overall_score: Option<f32>,
    pub overall_gauge: Option<f32>,
    pub verdict: Verdict,
    pub recommendation: &'static str,
    pub gauge_bands: Vec<GaugeBand>,
}

/// Scores a resume against a job description. Never fails as a whole:
/// embedding errors degrade the affected section, and the verdict falls back
/// to `Undetermined` only when no section could be scored.
pub async fn analyze(embedder: &dyn Embedder, resume_text: &str, job_text: &str) -> MatchReport {
    let resume = normalize(resume_text);
    let job = normalize(job_text);
    let lexicon = HeaderLexicon::new();

    let mut sections = Vec::with_capacity(SectionLabel::ALL.len());
    let mut scored = Vec::new();

    for label in SectionLabel::ALL {
        let resume_section = lexicon.extract(&resume, label);
        let job_section = lexicon.extract(&job, label);

        let coverage = match (&resume_section, &job_section) {
            (Some(_), Some(_)) => Coverage::Both,
            (None, Some(_)) => Coverage::ResumeMissing,
            (Some(_), None) => Coverage::JobMissing,
            (None, None) => Coverage::BothMissing,
        };

        // Absent sections embed as empty text: the score is low but
        // defined, and `coverage` flags it.
        let outcome = match score_pair(
            embedder,
            resume_section.as_deref().unwrap_or(""),
            job_section.as_deref().unwrap_or(""),
        )
        .await
        {
            Ok(similarity) => {
                scored.push(similarity);
                SectionOutcome {
                    label,
                    title: label.display(),
                    similarity: Some(similarity),
                    gauge: Some(gauge::gauge_value(similarity)),
                    coverage,
                    error: None,
                }
            }
            Err(message) => {
                warn!("Embedding failed for {} section: {message}", label.keyword());
                SectionOutcome {
                    label,
                    title: label.display(),
                    similarity: None,
                    gauge: None,
                    coverage,
                    error: Some(message),
                }
            }
        };
        sections.push(outcome);
    }

    let overall_score = aggregate(&scored);
    let verdict = recommend(&scored);

    MatchReport {
        sections,
        overall_score,
        overall_gauge: overall_score.map(gauge::gauge_value),
        verdict,
        recommendation: verdict.message(),
        gauge_bands: gauge::bands(),
    }
}

async fn score_pair(
    embedder: &dyn Embedder,
    resume_section: &str,
    job_section: &str,
) -> Result<f32, String> {
    let resume_embedding = embedder
        .embed(resume_section)
        .await
        .map_err(|e| e.to_string())?;
    let job_embedding = embedder.embed(job_section).await.map_err(|e| e.to_string())?;
    Ok(cosine_similarity(&resume_embedding, &job_embedding))
}
