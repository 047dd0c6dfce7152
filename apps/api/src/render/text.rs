//! Plain-text backend — the same sections and ordering as the PDF
//! backend, as UTF-8. Cheap to produce and exact to assert on in tests.

use std::path::Path;

use crate::errors::AppError;
use crate::models::resume::ResumeDocument;
use crate::render::{
    contact_line, education_line, experience_heading, link_line, project_line, RenderBackend,
    EDUCATION_HEADING, EXPERIENCE_HEADING, PROJECTS_HEADING, SKILLS_HEADING, SKILL_SEPARATOR,
    SUMMARY_HEADING,
};

pub struct TextBackend;

impl RenderBackend for TextBackend {
    fn extension(&self) -> &'static str {
        "txt"
    }

    fn render(&self, resume: &ResumeDocument, path: &Path) -> Result<(), AppError> {
        std::fs::write(path, compose_text(resume))?;
        Ok(())
    }
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push('\n');
}

fn push_heading(out: &mut String, heading: &str) {
    out.push('\n');
    push_line(out, heading);
}

fn joined(lead: &str, rest: &str) -> String {
    if lead.is_empty() {
        rest.to_string()
    } else if rest.is_empty() {
        lead.to_string()
    } else {
        format!("{lead} {rest}")
    }
}

pub(crate) fn compose_text(resume: &ResumeDocument) -> String {
    let mut out = String::new();

    if !resume.name.trim().is_empty() {
        push_line(&mut out, resume.name.trim());
    }
    if let Some(contact) = contact_line(resume) {
        push_line(&mut out, &contact);
    }
    if let Some(links) = link_line(resume) {
        push_line(&mut out, &links);
    }

    if !resume.summary.trim().is_empty() {
        push_heading(&mut out, SUMMARY_HEADING);
        push_line(&mut out, resume.summary.trim());
    }

    if !resume.skills.is_empty() {
        push_heading(&mut out, SKILLS_HEADING);
        push_line(&mut out, &resume.skills.join(SKILL_SEPARATOR));
    }

    if !resume.experience.is_empty() {
        push_heading(&mut out, EXPERIENCE_HEADING);
        for entry in &resume.experience {
            if let Some((lead, rest)) = experience_heading(entry) {
                push_line(&mut out, &joined(&lead, &rest));
            }
            if !entry.period.trim().is_empty() {
                push_line(&mut out, entry.period.trim());
            }
            for achievement in &entry.achievements {
                if !achievement.trim().is_empty() {
                    push_line(&mut out, &format!("• {}", achievement.trim()));
                }
            }
        }
    }

    if !resume.education.is_empty() {
        push_heading(&mut out, EDUCATION_HEADING);
        for entry in &resume.education {
            if let Some((lead, rest)) = education_line(entry) {
                push_line(&mut out, &joined(&lead, &rest));
            }
        }
    }

    if !resume.projects.is_empty() {
        push_heading(&mut out, PROJECTS_HEADING);
        for entry in &resume.projects {
            if let Some((lead, rest)) = project_line(entry) {
                push_line(&mut out, &joined(&lead, &rest));
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{EducationEntry, ExperienceEntry};

    fn sample() -> ResumeDocument {
        ResumeDocument {
            job_title: "Backend Engineer".to_string(),
            name: "Ada Example".to_string(),
            email: "ada@example.com".to_string(),
            phone: "+1 555 0100".to_string(),
            location: "Berlin".to_string(),
            summary: "Engineer with a distributed-systems focus.".to_string(),
            skills: vec!["Rust".to_string(), "PostgreSQL".to_string()],
            experience: vec![ExperienceEntry {
                title: "Engineer".to_string(),
                company: "Acme".to_string(),
                period: "2020 - 2024".to_string(),
                achievements: vec!["Cut latency by 40%".to_string()],
            }],
            education: vec![EducationEntry {
                degree: "BSc".to_string(),
                institution: "TU Berlin".to_string(),
                year: "2019".to_string(),
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_sections_appear_in_fixed_order() {
        let text = compose_text(&sample());
        let summary = text.find(SUMMARY_HEADING).unwrap();
        let skills = text.find(SKILLS_HEADING).unwrap();
        let experience = text.find(EXPERIENCE_HEADING).unwrap();
        let education = text.find(EDUCATION_HEADING).unwrap();
        assert!(summary < skills && skills < experience && experience < education);
    }

    #[test]
    fn test_empty_sections_are_omitted_with_headings() {
        let mut doc = sample();
        doc.skills.clear();
        doc.projects.clear();
        let text = compose_text(&doc);
        assert!(!text.contains(SKILLS_HEADING));
        assert!(!text.contains(PROJECTS_HEADING));
        assert!(text.contains(SUMMARY_HEADING));
    }

    #[test]
    fn test_skills_join_preserves_order() {
        let text = compose_text(&sample());
        assert!(text.contains("Rust • PostgreSQL"));
    }

    #[test]
    fn test_experience_lines() {
        let text = compose_text(&sample());
        assert!(text.contains("Engineer - Acme"));
        assert!(text.contains("2020 - 2024"));
        assert!(text.contains("• Cut latency by 40%"));
    }
}
