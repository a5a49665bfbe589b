//! Axum route handlers for the classification API.

use axum::{
    extract::{Multipart, State},
    Json,
};

use crate::classify::models::{
    preview, ClassifyResponse, ClassifyTextRequest, PREVIEW_CHARS,
};
use crate::errors::AppError;
use crate::extract::DocumentFormat;
use crate::state::AppState;

/// POST /api/v1/classify/text
///
/// Classifies pasted resume text. Blank or whitespace-only text is rejected
/// before the pipeline runs — distinct from an uploaded document whose
/// extraction legitimately yields no text.
pub async fn handle_classify_text(
    State(state): State<AppState>,
    Json(request): Json<ClassifyTextRequest>,
) -> Result<Json<ClassifyResponse>, AppError> {
    if request.resume_text.trim().is_empty() {
        return Err(AppError::Validation(
            "resume_text cannot be empty".to_string(),
        ));
    }

    let ranked = state.engine.classify_text(&request.resume_text)?;

    Ok(Json(ClassifyResponse::from_ranked(ranked, None)))
}

/// POST /api/v1/classify/file
///
/// Classifies an uploaded resume. Expects a multipart `file` field whose
/// filename declares the format (.pdf or .docx). The response carries a
/// short preview of the extracted text alongside the ranking.
pub async fn handle_classify_file(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ClassifyResponse>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart upload: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field
            .file_name()
            .map(str::to_string)
            .ok_or_else(|| AppError::Validation("uploaded file has no filename".to_string()))?;
        let format = DocumentFormat::from_filename(&filename).ok_or_else(|| {
            AppError::Validation(format!(
                "unsupported file type for {filename:?}: expected .pdf or .docx"
            ))
        })?;

        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("could not read upload: {e}")))?;

        let classification = state.engine.classify_document(&bytes, format)?;
        let text_preview = preview(&classification.extracted_text, PREVIEW_CHARS);

        return Ok(Json(ClassifyResponse::from_ranked(
            classification.result,
            Some(text_preview),
        )));
    }

    Err(AppError::Validation(
        "multipart upload must include a 'file' field".to_string(),
    ))
}
