//! Skills-file loading. Content is always read as opaque UTF-8 text,
//! whatever extension the file carries. Binary formats are not decoded
//! (known limitation, not a feature).

use std::path::Path;

use tracing::info;

use crate::errors::AppError;

/// Extensions the upload surface accepts. The content is still read as
/// plain text in every case.
pub const SUPPORTED_EXTENSIONS: [&str; 5] = ["pdf", "docx", "md", "json", "txt"];

/// Reads the skills file as text.
pub async fn load_skills(path: &Path) -> Result<String, AppError> {
    let content = tokio::fs::read_to_string(path).await?;
    info!("Loaded skills file {} ({} chars)", path.display(), content.len());
    Ok(content)
}

/// Checks an uploaded filename against the accepted extension list.
pub fn has_supported_extension(filename: &str) -> bool {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|allowed| ext.eq_ignore_ascii_case(allowed))
        })
        .unwrap_or(false)
}
