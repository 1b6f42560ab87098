//! Resume upload → taxonomy skill extraction.
//!
//! Accepts a PDF or plain-text resume as multipart field `file`, pulls the
//! text out and reports the taxonomy skills it mentions.

use std::collections::BTreeMap;

use axum::extract::Multipart;
use axum::Json;
use bytes::Bytes;
use serde::Serialize;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::taxonomy::extract::extract_skills;
use crate::taxonomy::relevance::group_by_category;
use crate::taxonomy::SkillCategory;

pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

#[derive(Debug, Serialize)]
pub struct ResumeSkillsResponse {
    pub file_name: Option<String>,
    pub skills: Vec<String>,
    pub by_category: BTreeMap<SkillCategory, Vec<String>>,
    pub characters: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UploadKind {
    Pdf,
    Text,
}

fn detect_kind(file_name: Option<&str>, data: &[u8]) -> Option<UploadKind> {
    if data.starts_with(b"%PDF") {
        return Some(UploadKind::Pdf);
    }
    let ext = file_name
        .and_then(|n| n.rsplit_once('.'))
        .map(|(_, ext)| ext.to_lowercase());
    match ext.as_deref() {
        Some("pdf") => Some(UploadKind::Pdf),
        Some("txt") | Some("md") | None => Some(UploadKind::Text),
        Some(_) => None,
    }
}

/// Pulls text out of the upload. PDF parsing runs on the blocking pool.
pub async fn extract_text(file_name: Option<&str>, data: Bytes) -> Result<String, AppError> {
    if data.is_empty() {
        return Err(AppError::Validation("Uploaded file is empty".to_string()));
    }
    if data.len() > MAX_UPLOAD_BYTES {
        return Err(AppError::Validation(format!(
            "File exceeds {} MiB limit",
            MAX_UPLOAD_BYTES / (1024 * 1024)
        )));
    }

    match detect_kind(file_name, &data) {
        Some(UploadKind::Pdf) => {
            let extracted =
                tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&data))
                    .await
                    .map_err(|e| AppError::Internal(anyhow::anyhow!("PDF task failed: {e}")))?;
            let text = extracted.map_err(|e| {
                warn!("PDF extraction failed: {e}");
                AppError::UnprocessableEntity("Could not read text from PDF".to_string())
            })?;
            Ok(text)
        }
        Some(UploadKind::Text) => String::from_utf8(data.to_vec()).map_err(|_| {
            AppError::UnprocessableEntity("Text file is not valid UTF-8".to_string())
        }),
        None => Err(AppError::Validation(
            "Unsupported file type; upload a .pdf, .txt or .md resume".to_string(),
        )),
    }
}

pub fn summarize_skills(file_name: Option<String>, text: &str) -> ResumeSkillsResponse {
    let skills = extract_skills(text);
    let by_category = group_by_category(&skills);
    ResumeSkillsResponse {
        file_name,
        characters: text.chars().count(),
        skills,
        by_category,
    }
}

/// POST /api/v1/resumes/skills
pub async fn handle_resume_skills(
    mut multipart: Multipart,
) -> Result<Json<ResumeSkillsResponse>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let file_name = field.file_name().map(str::to_string);
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;

        let text = extract_text(file_name.as_deref(), data).await?;
        let response = summarize_skills(file_name, &text);
        info!(
            "Extracted {} skills from resume ({} chars)",
            response.skills.len(),
            response.characters
        );
        return Ok(Json(response));
    }

    Err(AppError::Validation("Multipart field 'file' is required".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_kind() {
        assert_eq!(detect_kind(Some("cv.PDF"), b"junk"), Some(UploadKind::Pdf));
        assert_eq!(detect_kind(None, b"%PDF-1.7"), Some(UploadKind::Pdf));
        assert_eq!(detect_kind(Some("cv.md"), b"# Me"), Some(UploadKind::Text));
        assert_eq!(detect_kind(Some("cv"), b"plain"), Some(UploadKind::Text));
        assert_eq!(detect_kind(Some("cv.docx"), b"PK"), None);
    }

    #[tokio::test]
    async fn test_extract_text_plain() {
        let text = extract_text(Some("cv.txt"), Bytes::from_static(b"Python and SQL"))
            .await
            .unwrap();
        assert_eq!(text, "Python and SQL");
    }

    #[tokio::test]
    async fn test_extract_text_rejects_empty() {
        let err = extract_text(Some("cv.txt"), Bytes::new()).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_extract_text_rejects_oversized() {
        let big = Bytes::from(vec![b'a'; MAX_UPLOAD_BYTES + 1]);
        let err = extract_text(Some("cv.txt"), big).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_extract_text_rejects_invalid_utf8() {
        let err = extract_text(Some("cv.txt"), Bytes::from_static(&[0xff, 0xfe, 0x00]))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::UnprocessableEntity(_)));
    }

    #[test]
    fn test_summarize_skills_groups_by_category() {
        let resp = summarize_skills(
            Some("cv.txt".to_string()),
            "Senior engineer: Rust, PostgreSQL, Kubernetes. Mentoring juniors.",
        );
        assert_eq!(resp.skills, vec!["rust", "postgresql", "kubernetes", "mentoring"]);
        assert!(resp.by_category[&SkillCategory::Databases].contains(&"postgresql".to_string()));
        assert!(resp.by_category[&SkillCategory::Leadership].contains(&"mentoring".to_string()));
    }
}
