//! Rendering — maps a validated `ResumeDocument` onto durable storage.
//!
//! One renderer abstraction with swappable backends keyed by output
//! format, all sharing the same section order and line composition:
//! Summary, Skills, Experience, Education, Projects, each omitted
//! entirely (heading included) when its source is empty.

pub mod filename;
pub mod font_metrics;
pub mod pdf;
pub mod text;

use std::path::Path;
use std::str::FromStr;

use tracing::info;

use crate::errors::AppError;
use crate::models::resume::{
    EducationEntry, ExperienceEntry, ProjectEntry, RenderedArtifact, ResumeDocument,
};

pub use filename::derive_filename;

pub(crate) const SUMMARY_HEADING: &str = "PROFESSIONAL SUMMARY";
pub(crate) const SKILLS_HEADING: &str = "SKILLS";
pub(crate) const EXPERIENCE_HEADING: &str = "WORK EXPERIENCE";
pub(crate) const EDUCATION_HEADING: &str = "EDUCATION";
pub(crate) const PROJECTS_HEADING: &str = "PROJECTS";
pub(crate) const SKILL_SEPARATOR: &str = " • ";

/// Output format of a rendered artifact, selecting the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Pdf,
    Text,
}

impl OutputFormat {
    fn backend(self) -> Box<dyn RenderBackend> {
        match self {
            OutputFormat::Pdf => Box::new(pdf::PdfBackend),
            OutputFormat::Text => Box::new(text::TextBackend),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pdf" => Ok(OutputFormat::Pdf),
            "text" | "txt" => Ok(OutputFormat::Text),
            other => Err(format!("unknown output format: {other}")),
        }
    }
}

/// A rendering backend: writes one `ResumeDocument` to one path.
/// Implementations must be pure functions of the document (no clocks,
/// no randomness) so repeated renders are byte-identical.
pub trait RenderBackend: Send + Sync {
    fn extension(&self) -> &'static str;
    fn render(&self, resume: &ResumeDocument, path: &Path) -> Result<(), AppError>;
}

/// Renders a resume into `output_dir`, returning the artifact's absolute
/// path and size.
///
/// The directory is created if absent. Runs whose job titles sanitize to
/// the same filename overwrite each other silently; callers needing
/// isolation must use distinct output directories.
pub fn render_resume(
    resume: &ResumeDocument,
    output_dir: &Path,
    format: OutputFormat,
) -> Result<RenderedArtifact, AppError> {
    let backend = format.backend();

    std::fs::create_dir_all(output_dir)?;
    let output_dir = output_dir.canonicalize()?;

    let filename = derive_filename(&resume.job_title, backend.extension());
    let path = output_dir.join(&filename);
    info!("Rendering resume to {}", path.display());

    backend.render(resume, &path)?;

    // The artifact must exist with content before we report success.
    let metadata = std::fs::metadata(&path)
        .map_err(|_| AppError::Render(format!("artifact missing after render: {}", path.display())))?;
    if metadata.len() == 0 {
        return Err(AppError::Render(format!(
            "artifact is empty: {}",
            path.display()
        )));
    }

    info!("Rendered {} ({} bytes)", path.display(), metadata.len());

    Ok(RenderedArtifact {
        path,
        byte_size: metadata.len(),
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Line composition shared by all backends
// ────────────────────────────────────────────────────────────────────────────

fn join_nonempty(parts: &[&str], separator: &str) -> Option<String> {
    let parts: Vec<&str> = parts
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(separator))
    }
}

/// `email | phone | location`, absent parts skipped.
pub(crate) fn contact_line(resume: &ResumeDocument) -> Option<String> {
    join_nonempty(&[&resume.email, &resume.phone, &resume.location], " | ")
}

/// `linkedin | github`, absent parts skipped.
pub(crate) fn link_line(resume: &ResumeDocument) -> Option<String> {
    join_nonempty(
        &[
            resume.linkedin.as_deref().unwrap_or(""),
            resume.github.as_deref().unwrap_or(""),
        ],
        " | ",
    )
}

/// The `(bold lead, regular rest)` pair for an experience entry's heading
/// line, or `None` when the entry carries neither title nor company.
pub(crate) fn experience_heading(entry: &ExperienceEntry) -> Option<(String, String)> {
    let title = entry.title.trim();
    let company = entry.company.trim();
    match (title.is_empty(), company.is_empty()) {
        (false, false) => Some((title.to_string(), format!("- {company}"))),
        (false, true) => Some((title.to_string(), String::new())),
        (true, false) => Some((String::new(), company.to_string())),
        (true, true) => None,
    }
}

/// `Degree - Institution, Year` with absent parts skipped.
pub(crate) fn education_line(entry: &EducationEntry) -> Option<(String, String)> {
    let degree = entry.degree.trim();
    let rest = join_nonempty(&[&entry.institution, &entry.year], ", ");
    match (degree.is_empty(), rest) {
        (false, Some(rest)) => Some((degree.to_string(), format!("- {rest}"))),
        (false, None) => Some((degree.to_string(), String::new())),
        (true, Some(rest)) => Some((String::new(), rest)),
        (true, None) => None,
    }
}

/// `Name: description` with absent parts skipped.
pub(crate) fn project_line(entry: &ProjectEntry) -> Option<(String, String)> {
    let name = entry.name.trim();
    let description = entry.description.trim();
    match (name.is_empty(), description.is_empty()) {
        (false, false) => Some((format!("{name}:"), description.to_string())),
        (false, true) => Some((name.to_string(), String::new())),
        (true, false) => Some((String::new(), description.to_string())),
        (true, true) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc_with_contact() -> ResumeDocument {
        ResumeDocument {
            email: "ada@example.com".to_string(),
            phone: String::new(),
            location: "Berlin".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_contact_line_skips_empty_parts() {
        let line = contact_line(&doc_with_contact()).unwrap();
        assert_eq!(line, "ada@example.com | Berlin");
    }

    #[test]
    fn test_contact_line_none_when_all_empty() {
        assert!(contact_line(&ResumeDocument::default()).is_none());
    }

    #[test]
    fn test_link_line_handles_missing_links() {
        let mut doc = ResumeDocument::default();
        assert!(link_line(&doc).is_none());
        doc.github = Some("github.com/ada".to_string());
        assert_eq!(link_line(&doc).unwrap(), "github.com/ada");
    }

    #[test]
    fn test_experience_heading_variants() {
        let full = ExperienceEntry {
            title: "Engineer".to_string(),
            company: "Acme".to_string(),
            ..Default::default()
        };
        assert_eq!(
            experience_heading(&full),
            Some(("Engineer".to_string(), "- Acme".to_string()))
        );

        let bare = ExperienceEntry::default();
        assert_eq!(experience_heading(&bare), None);
    }

    #[test]
    fn test_education_line_joins_institution_and_year() {
        let entry = EducationEntry {
            degree: "BSc".to_string(),
            institution: "TU Berlin".to_string(),
            year: "2019".to_string(),
        };
        assert_eq!(
            education_line(&entry),
            Some(("BSc".to_string(), "- TU Berlin, 2019".to_string()))
        );
    }

    #[test]
    fn test_project_line_attaches_colon_to_name() {
        let entry = ProjectEntry {
            name: "tailor".to_string(),
            description: "CV generator".to_string(),
        };
        assert_eq!(
            project_line(&entry),
            Some(("tailor:".to_string(), "CV generator".to_string()))
        );
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("pdf".parse::<OutputFormat>().unwrap(), OutputFormat::Pdf);
        assert_eq!("TXT".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert!("docx".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_render_resume_creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let resume = ResumeDocument {
            name: "Ada Example".to_string(),
            job_title: "Engineer".to_string(),
            ..Default::default()
        };

        let artifact = render_resume(&resume, &nested, OutputFormat::Text).unwrap();
        assert!(artifact.path.is_absolute());
        assert!(artifact.path.ends_with("CV_Engineer.txt"));
        assert!(artifact.byte_size > 0);
    }

    #[test]
    fn test_render_resume_overwrites_on_same_title() {
        let dir = tempfile::tempdir().unwrap();
        let mut resume = ResumeDocument {
            name: "Ada".to_string(),
            job_title: "Engineer".to_string(),
            ..Default::default()
        };

        let first = render_resume(&resume, dir.path(), OutputFormat::Text).unwrap();
        resume.name = "A much longer name than before".to_string();
        let second = render_resume(&resume, dir.path(), OutputFormat::Text).unwrap();

        assert_eq!(first.path, second.path);
        assert_ne!(first.byte_size, second.byte_size);
    }
}
