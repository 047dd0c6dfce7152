//! Axum route handlers for the generation API.

use axum::{
    extract::{Multipart, Path, State},
    http::header,
    response::IntoResponse,
    Form, Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::models::resume::RequirementSummary;
use crate::orchestrator;
use crate::render::OutputFormat;
use crate::skills;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub job_title: String,
    pub pdf_filename: String,
    pub download_url: String,
}

#[derive(Debug, Deserialize)]
pub struct PreviewRequest {
    pub job_url: String,
}

/// POST /api/generate
///
/// Multipart form: a `job_url` text field and a `skills_file` upload.
/// The upload is spooled to a temp file and read as opaque text; only the
/// extension is validated, never the content format.
pub async fn handle_generate(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<GenerateResponse>, AppError> {
    let mut job_url: Option<String> = None;
    let mut skills_file: Option<(String, Bytes)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart body: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "job_url" => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("invalid job_url field: {e}")))?;
                job_url = Some(value);
            }
            "skills_file" => {
                let filename = field.file_name().unwrap_or("skills.txt").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("invalid skills_file field: {e}")))?;
                skills_file = Some((filename, data));
            }
            _ => {}
        }
    }

    let job_url = job_url
        .filter(|u| !u.trim().is_empty())
        .ok_or_else(|| AppError::Validation("job_url is required".to_string()))?;
    let (filename, data) = skills_file
        .ok_or_else(|| AppError::Validation("skills_file is required".to_string()))?;

    if !skills::has_supported_extension(&filename) {
        return Err(AppError::Validation(format!(
            "unsupported skills file \"{filename}\", accepted extensions: {}",
            skills::SUPPORTED_EXTENSIONS.join(", ")
        )));
    }

    // Keep the upload's extension on the spool file for log readability.
    let suffix = std::path::Path::new(&filename)
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default();
    let spool = tempfile::Builder::new()
        .prefix("skills-")
        .suffix(&suffix)
        .tempfile()?;
    std::fs::write(spool.path(), &data)?;

    info!("Generation request for {job_url} ({filename}, {} bytes)", data.len());

    let outcome = orchestrator::run(
        state.fetcher.as_ref(),
        state.llm.as_ref(),
        &job_url,
        spool.path(),
        &state.config.output_dir,
        OutputFormat::Pdf,
    )
    .await?;

    let pdf_filename = outcome
        .artifact
        .path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    Ok(Json(GenerateResponse {
        job_title: outcome.job_title,
        download_url: format!("/api/download/{pdf_filename}"),
        pdf_filename,
    }))
}

/// POST /api/preview
///
/// Form: `job_url`. Returns the extracted title and requirement list.
/// Upstream failures surface as 502: the preview is unavailable, the
/// service is not broken.
pub async fn handle_preview(
    State(state): State<AppState>,
    Form(request): Form<PreviewRequest>,
) -> Result<Json<RequirementSummary>, AppError> {
    if request.job_url.trim().is_empty() {
        return Err(AppError::Validation("job_url is required".to_string()));
    }

    let summary =
        orchestrator::preview(state.fetcher.as_ref(), state.llm.as_ref(), &request.job_url)
            .await?;

    Ok(Json(summary))
}

/// GET /api/download/:filename
///
/// Serves a previously rendered artifact from the output directory.
/// Discovery is by filename only; there is no manifest.
pub async fn handle_download(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    // The output directory is the only place we serve from.
    if filename.contains('/') || filename.contains('\\') || filename.contains("..") {
        return Err(AppError::Validation("invalid filename".to_string()));
    }

    let path = state.config.output_dir.join(&filename);
    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|_| AppError::NotFound(format!("{filename} not found")))?;

    let headers = [
        (header::CONTENT_TYPE, "application/pdf".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{filename}\""),
        ),
    ];

    Ok((headers, Bytes::from(bytes)))
}
