//! Resume ingestion — extracts text from an uploaded PDF.
//!
//! The extracted text lands on the session and is reported in the view as
//! `resume_loaded`, but it is not injected into any completion message.
//! TODO: decide whether the resume text should ground the system prompt.

use axum::{
    extract::{Multipart, Path, State},
    Json,
};
use serde::Serialize;
use tracing::info;

use crate::chat::manager::SessionId;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ResumeUploadResponse {
    pub characters: usize,
}

/// POST /api/v1/sessions/:id/resume
///
/// Accepts a multipart upload with a single `file` field holding a PDF and
/// stores the concatenated page text on the session.
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    Path(id): Path<SessionId>,
    mut multipart: Multipart,
) -> Result<Json<ResumeUploadResponse>, AppError> {
    let session = state
        .sessions
        .get(&id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))?;

    let mut pdf_bytes = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        if field.name() == Some("file") {
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("Could not read upload: {e}")))?;
            pdf_bytes = Some(bytes);
            break;
        }
    }

    let pdf_bytes = pdf_bytes
        .ok_or_else(|| AppError::Validation("Multipart field 'file' is required".to_string()))?;

    let text = extract_resume_text(&pdf_bytes)?;
    let characters = text.chars().count();
    info!("Session {id}: resume processed ({characters} characters extracted)");

    session.lock().await.resume_text = Some(text);

    Ok(Json(ResumeUploadResponse { characters }))
}

/// Extracts the concatenated page text from PDF bytes.
fn extract_resume_text(bytes: &[u8]) -> Result<String, AppError> {
    pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| AppError::UnprocessableEntity(format!("Could not read PDF: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_rejects_non_pdf_bytes() {
        let err = extract_resume_text(b"definitely not a pdf").unwrap_err();
        assert!(matches!(err, AppError::UnprocessableEntity(_)));
    }
}
