//! Sanitized artifact filenames derived from job titles.

/// Derives a safe filename from a job title: keep alphanumerics, spaces,
/// hyphens, and underscores; trim; spaces become underscores; the stem is
/// capped at 50 characters; `CV_` prefix and the backend's extension.
///
/// A title that is empty (or sanitizes to empty) falls back to a fixed
/// name instead of producing `CV_.<ext>`.
pub fn derive_filename(job_title: &str, extension: &str) -> String {
    let safe: String = job_title
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '-' | '_'))
        .collect();
    let safe = safe.trim();

    if safe.is_empty() {
        return format!("cv.{extension}");
    }

    let stem: String = safe.replace(' ', "_").chars().take(50).collect();
    format!("CV_{stem}.{extension}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_punctuation_is_removed_before_underscores() {
        assert_eq!(
            derive_filename("Senior Backend Engineer!!", "pdf"),
            "CV_Senior_Backend_Engineer.pdf"
        );
    }

    #[test]
    fn test_hyphens_and_underscores_survive() {
        assert_eq!(
            derive_filename("Site-Reliability_Engineer", "pdf"),
            "CV_Site-Reliability_Engineer.pdf"
        );
    }

    #[test]
    fn test_stem_is_capped_at_50_chars() {
        let title = "a".repeat(80);
        let filename = derive_filename(&title, "pdf");
        let stem = filename
            .strip_prefix("CV_")
            .and_then(|s| s.strip_suffix(".pdf"))
            .unwrap();
        assert_eq!(stem.chars().count(), 50);
    }

    #[test]
    fn test_empty_title_uses_fallback() {
        assert_eq!(derive_filename("", "pdf"), "cv.pdf");
    }

    #[test]
    fn test_all_punctuation_title_uses_fallback() {
        assert_eq!(derive_filename("!!??//", "pdf"), "cv.pdf");
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        assert_eq!(derive_filename("  Rust Engineer  ", "pdf"), "CV_Rust_Engineer.pdf");
    }

    #[test]
    fn test_extension_follows_backend() {
        assert_eq!(derive_filename("Rust Engineer", "txt"), "CV_Rust_Engineer.txt");
    }
}
