//! The structured resume record produced by the generator and consumed
//! once by the renderer. Never persisted.
//!
//! Deserialization is deliberately defensive: the JSON comes from an
//! untrusted model, so every field carries a default and entries with
//! missing sub-fields must never abort the whole document. The renderer
//! skips whatever ends up empty.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Placeholder used when the model omits the job title entirely.
pub const JOB_TITLE_PLACEHOLDER: &str = "Position";

fn default_job_title() -> String {
    JOB_TITLE_PLACEHOLDER.to_string()
}

/// One work-experience item. All sub-fields default so a partial entry
/// deserializes; the renderer drops the absent parts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExperienceEntry {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub period: String,
    #[serde(default)]
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EducationEntry {
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub year: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectEntry {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// The canonical structured resume.
///
/// Skill order is the model's relevance ordering and is trusted all the
/// way through rendering; nothing downstream may re-sort it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeDocument {
    #[serde(default = "default_job_title")]
    pub job_title: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
    #[serde(default)]
    pub projects: Vec<ProjectEntry>,
}

impl Default for ResumeDocument {
    fn default() -> Self {
        ResumeDocument {
            job_title: default_job_title(),
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            location: String::new(),
            linkedin: None,
            github: None,
            summary: String::new(),
            skills: Vec::new(),
            experience: Vec::new(),
            education: Vec::new(),
            projects: Vec::new(),
        }
    }
}

/// Preview-path output: a short title plus 6–12 requirement phrases.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequirementSummary {
    pub job_title: String,
    pub requirements: Vec<String>,
}

/// The terminal output of a pipeline run. Owned by the caller; nothing
/// mutates it afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct RenderedArtifact {
    pub path: PathBuf,
    pub byte_size: u64,
}
