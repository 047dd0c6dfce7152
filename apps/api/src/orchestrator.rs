//! Pipeline orchestration.
//!
//! Flow: fetch → load skills → generate → render, or fetch → extract for
//! the preview path. Strictly sequential, no branching, no retries: the
//! first stage to fail aborts the run and its error is surfaced unchanged.
//! Either a complete artifact is produced or the run fails as a whole.

use std::path::Path;

use tracing::info;

use crate::errors::AppError;
use crate::fetch::PageFetcher;
use crate::generation::{generator, requirements};
use crate::llm_client::Completions;
use crate::models::resume::{RenderedArtifact, RequirementSummary};
use crate::render::{self, OutputFormat};
use crate::skills;

/// Result of a full pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineOutcome {
    pub job_title: String,
    pub artifact: RenderedArtifact,
}

/// Runs the full pipeline for one job posting.
pub async fn run(
    fetcher: &dyn PageFetcher,
    api: &dyn Completions,
    job_url: &str,
    skills_path: &Path,
    output_dir: &Path,
    format: OutputFormat,
) -> Result<PipelineOutcome, AppError> {
    let job_text = fetcher.fetch(job_url).await?;
    let skills_text = skills::load_skills(skills_path).await?;
    let resume = generator::generate(api, &job_text, &skills_text).await?;
    let job_title = resume.job_title.clone();

    // Rendering is CPU-bound file work; keep it off the async executor.
    let output_dir = output_dir.to_path_buf();
    let artifact = tokio::task::spawn_blocking(move || {
        render::render_resume(&resume, &output_dir, format)
    })
    .await
    .map_err(|e| AppError::Render(format!("render task failed: {e}")))??;

    info!(
        "Pipeline complete for \"{job_title}\": {} ({} bytes)",
        artifact.path.display(),
        artifact.byte_size
    );

    Ok(PipelineOutcome {
        job_title,
        artifact,
    })
}

/// Runs the lightweight preview path: posting text → requirement summary.
pub async fn preview(
    fetcher: &dyn PageFetcher,
    api: &dyn Completions,
    job_url: &str,
) -> Result<RequirementSummary, AppError> {
    let job_text = fetcher.fetch(job_url).await?;
    requirements::extract_requirements(api, &job_text).await
}
