use crate::errors::AppError;

/// Extracts plain text from an uploaded PDF held in memory.
/// Unreadable or text-free PDFs abort the request with a user-visible error.
pub fn extract_pdf_text(data: &[u8]) -> Result<String, AppError> {
    let text = pdf_extract::extract_text_from_mem(data)
        .map_err(|e| AppError::PdfExtraction(format!("Failed to extract text from PDF: {e}")))?;
    if text.trim().is_empty() {
        return Err(AppError::PdfExtraction(
            "No text could be extracted from the PDF".to_string(),
        ));
    }
    Ok(text)
}
