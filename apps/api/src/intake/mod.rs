//! Intake — turns an analyze submission (multipart files and/or pasted text)
//! into the two raw document texts the pipeline consumes.

pub mod decode;
pub mod pdf;

use axum::extract::Multipart;
use tracing::debug;

use crate::errors::AppError;

/// 10 MB cap per uploaded file.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Raw fields collected from one analyze submission. Files and pasted text
/// can coexist; `resolve` decides which wins.
#[derive(Default)]
pub struct Submission {
    pub resume_file: Option<Vec<u8>>,
    pub job_file: Option<Vec<u8>>,
    pub resume_text: Option<String>,
    pub job_text: Option<String>,
}

impl Submission {
    /// Reads every multipart field of the analyze form. Unknown fields are
    /// drained and ignored so browser form quirks don't fail the request.
    pub async fn from_multipart(multipart: &mut Multipart) -> Result<Self, AppError> {
        let mut submission = Submission::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::Validation(format!("Invalid multipart payload: {e}")))?
        {
            let name = field.name().unwrap_or("").to_string();
            match name.as_str() {
                "resume_file" => {
                    // Browsers submit unselected file inputs as empty parts
                    // with an empty filename; treat those as absent.
                    let file_name = field.file_name().map(str::to_string);
                    if file_name.as_deref().map_or(true, str::is_empty) {
                        let _ = field.bytes().await;
                        continue;
                    }
                    check_extension(file_name.as_deref(), &["pdf"], "resume")?;
                    submission.resume_file = Some(read_capped(field, "resume").await?);
                }
                "job_file" => {
                    let file_name = field.file_name().map(str::to_string);
                    if file_name.as_deref().map_or(true, str::is_empty) {
                        let _ = field.bytes().await;
                        continue;
                    }
                    check_extension(file_name.as_deref(), &["txt"], "job description")?;
                    submission.job_file = Some(read_capped(field, "job description").await?);
                }
                "resume_text" => {
                    submission.resume_text = Some(field.text().await.map_err(|e| {
                        AppError::Validation(format!("Unreadable resume_text field: {e}"))
                    })?);
                }
                "job_text" => {
                    submission.job_text = Some(field.text().await.map_err(|e| {
                        AppError::Validation(format!("Unreadable job_text field: {e}"))
                    })?);
                }
                other => {
                    debug!("Ignoring unknown multipart field: {other}");
                    let _ = field.bytes().await;
                }
            }
        }

        Ok(submission)
    }

    /// Produces `(resume_text, job_text)`. A non-empty pasted text field wins
    /// over the corresponding file (the "user edited the prefilled text"
    /// flow); otherwise the file is extracted or decoded.
    pub fn resolve(self) -> Result<(String, String), AppError> {
        let resume = match non_empty(self.resume_text) {
            Some(text) => text,
            None => match self.resume_file {
                Some(data) => pdf::extract_pdf_text(&data)?,
                None => {
                    return Err(AppError::Validation(
                        "A resume is required (PDF upload or pasted text)".to_string(),
                    ))
                }
            },
        };

        let job = match non_empty(self.job_text) {
            Some(text) => text,
            None => match self.job_file {
                Some(data) => {
                    let (text, encoding) = decode::decode_text(&data);
                    debug!("Job description decoded as {encoding}");
                    text
                }
                None => {
                    return Err(AppError::Validation(
                        "A job description is required (text upload or pasted text)".to_string(),
                    ))
                }
            },
        };

        Ok((resume, job))
    }
}

fn non_empty(text: Option<String>) -> Option<String> {
    text.filter(|t| !t.trim().is_empty())
}

fn check_extension(
    file_name: Option<&str>,
    allowed: &[&str],
    document: &str,
) -> Result<(), AppError> {
    let extension = file_name
        .and_then(|name| std::path::Path::new(name).extension())
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
        .unwrap_or_default();
    if !allowed.contains(&extension.as_str()) {
        return Err(AppError::Validation(format!(
            "Invalid {document} file type; allowed: {}",
            allowed.join(", ")
        )));
    }
    Ok(())
}

async fn read_capped(
    field: axum::extract::multipart::Field<'_>,
    document: &str,
) -> Result<Vec<u8>, AppError> {
    let data = field
        .bytes()
        .await
        .map_err(|e| AppError::Validation(format!("Unreadable {document} upload: {e}")))?;
    if data.len() > MAX_UPLOAD_BYTES {
        return Err(AppError::Validation(format!(
            "The {document} file is too large; maximum size is 10MB"
        )));
    }
    Ok(data.to_vec())
}
