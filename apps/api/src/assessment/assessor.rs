//! Assessment pipeline.
//!
//! Flow: load session → focus skills (taxonomy) → build prompt → LLM →
//!       validate and clamp → upsert into skill_assessments.

use std::collections::HashSet;

use serde::Deserialize;
use sqlx::PgPool;
use tracing::{info, warn};
use uuid::Uuid;

use crate::assessment::prompts::{
    ASSESSMENT_PROMPT_TEMPLATE, ASSESSMENT_SYSTEM, BEHAVIORAL_GUIDANCE, CASE_STUDY_GUIDANCE,
    CODING_GUIDANCE, TECHNICAL_GUIDANCE,
};
use crate::assessment::{dimensions_for_round, AssessmentReport, DimensionScore, SkillDimension};
use crate::errors::AppError;
use crate::labels::parse_label;
use crate::llm_client::prompts::EVIDENCE_INSTRUCTION;
use crate::llm_client::LlmClient;
use crate::models::session::{InterviewSessionRow, SkillAssessmentRow};
use crate::taxonomy::relevance::get_skills_for_round;
use crate::taxonomy::RoundType;

/// Transcripts longer than this are cut before prompting.
pub const MAX_TRANSCRIPT_CHARS: usize = 12_000;
const FOCUS_SKILL_LIMIT: usize = 6;

// ────────────────────────────────────────────────────────────────────────────
// LLM output shape (before validation)
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct RawAssessment {
    #[serde(default)]
    pub dimensions: Vec<RawDimension>,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub gaps: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct RawDimension {
    pub dimension: String,
    pub score: f64,
    #[serde(default)]
    pub evidence: String,
    #[serde(default)]
    pub improvement: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Prompt building
// ────────────────────────────────────────────────────────────────────────────

fn round_guidance(round: RoundType) -> &'static str {
    match round {
        RoundType::Behavioral => BEHAVIORAL_GUIDANCE,
        RoundType::Technical => TECHNICAL_GUIDANCE,
        RoundType::Coding => CODING_GUIDANCE,
        RoundType::CaseStudy => CASE_STUDY_GUIDANCE,
    }
}

/// Keeps the first `max_chars` characters, marking the cut.
pub fn truncate_transcript(transcript: &str, max_chars: usize) -> String {
    match transcript.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}\n[transcript truncated]", &transcript[..byte_idx]),
        None => transcript.to_string(),
    }
}

pub fn build_assessment_prompt(
    round: RoundType,
    role_title: &str,
    skills: &[String],
    transcript: &str,
) -> String {
    let focus = get_skills_for_round(skills, round, FOCUS_SKILL_LIMIT);
    let focus_skills = if focus.is_empty() {
        "none provided".to_string()
    } else {
        focus
            .iter()
            .map(|s| s.skill.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };

    let dimensions = dimensions_for_round(round)
        .iter()
        .map(|d| format!("- {}: {}", d.as_str(), d.rubric()))
        .collect::<Vec<_>>()
        .join("\n");

    ASSESSMENT_PROMPT_TEMPLATE
        .replace("{round_type}", &round.as_str().replace('_', " "))
        .replace("{round_guidance}", round_guidance(round))
        .replace("{role_title}", role_title)
        .replace("{focus_skills}", &focus_skills)
        .replace("{dimensions}", &dimensions)
        .replace("{evidence_instruction}", EVIDENCE_INSTRUCTION)
        .replace(
            "{transcript}",
            &truncate_transcript(transcript, MAX_TRANSCRIPT_CHARS),
        )
}

// ────────────────────────────────────────────────────────────────────────────
// Validation
// ────────────────────────────────────────────────────────────────────────────

/// Turns raw model output into a report for `round`.
///
/// Scores are clamped to 0–100. Unknown, duplicate and off-round dimensions
/// are dropped. Any expected dimension left unscored is an error.
pub fn validate_assessment(
    raw: RawAssessment,
    round: RoundType,
) -> Result<AssessmentReport, AppError> {
    let expected = dimensions_for_round(round);
    let mut seen = HashSet::new();
    let mut dimensions = Vec::with_capacity(expected.len());

    for item in raw.dimensions {
        let Some(dimension) = parse_label::<SkillDimension>(&item.dimension) else {
            warn!("Dropping unknown assessment dimension '{}'", item.dimension);
            continue;
        };
        if !expected.contains(&dimension) || !seen.insert(dimension) {
            continue;
        }
        let score = if item.score.is_finite() {
            item.score.round().clamp(0.0, 100.0) as u32
        } else {
            0
        };
        dimensions.push(DimensionScore {
            dimension,
            score,
            evidence: item.evidence.trim().to_string(),
            improvement: item.improvement.trim().to_string(),
        });
    }

    let missing: Vec<&str> = expected
        .iter()
        .filter(|d| !seen.contains(*d))
        .map(|d| d.as_str())
        .collect();
    if !missing.is_empty() {
        return Err(AppError::UnprocessableEntity(format!(
            "Assessment is missing dimensions: {}",
            missing.join(", ")
        )));
    }

    // Report in canonical round order, not model order
    dimensions.sort_by_key(|d| expected.iter().position(|e| *e == d.dimension));

    Ok(AssessmentReport {
        round_type: round,
        overall_score: overall_score(&dimensions),
        dimensions,
        summary: raw.summary.trim().to_string(),
        strengths: clean_list(raw.strengths),
        gaps: clean_list(raw.gaps),
    })
}

pub fn overall_score(dimensions: &[DimensionScore]) -> u32 {
    if dimensions.is_empty() {
        return 0;
    }
    let sum: u32 = dimensions.iter().map(|d| d.score).sum();
    (sum as f64 / dimensions.len() as f64).round() as u32
}

fn clean_list(items: Vec<String>) -> Vec<String> {
    items
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Pipeline
// ────────────────────────────────────────────────────────────────────────────

/// Runs and stores the assessment for a session. Re-running replaces the
/// previous assessment of that session.
pub async fn assess_session(
    pool: &PgPool,
    llm: &LlmClient,
    session_id: Uuid,
) -> Result<SkillAssessmentRow, AppError> {
    let session = sqlx::query_as::<_, InterviewSessionRow>(
        "SELECT * FROM interview_sessions WHERE id = $1",
    )
    .bind(session_id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("Session {session_id} not found")))?;

    let transcript = session.transcript.as_deref().unwrap_or_default();
    if transcript.trim().is_empty() {
        return Err(AppError::Validation(
            "Session has no transcript to assess".to_string(),
        ));
    }

    let round: RoundType = session.round_type.parse().map_err(AppError::Validation)?;

    let skills: Vec<String> = match session.role_kit_id {
        Some(kit_id) => {
            sqlx::query_scalar::<_, Vec<String>>("SELECT skills FROM role_kits WHERE id = $1")
                .bind(kit_id)
                .fetch_optional(pool)
                .await?
                .unwrap_or_default()
        }
        None => Vec::new(),
    };

    let role_title = session.role_title.as_deref().unwrap_or("the target role");
    let prompt = build_assessment_prompt(round, role_title, &skills, transcript);

    let raw: RawAssessment = llm.call_json(&prompt, ASSESSMENT_SYSTEM).await?;
    let report = validate_assessment(raw, round)?;

    let row = sqlx::query_as::<_, SkillAssessmentRow>(
        r#"
        INSERT INTO skill_assessments
            (id, session_id, user_id, round_type, overall_score, dimensions,
             summary, strengths, gaps, model)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
        ON CONFLICT (session_id) DO UPDATE SET
            overall_score = EXCLUDED.overall_score,
            dimensions = EXCLUDED.dimensions,
            summary = EXCLUDED.summary,
            strengths = EXCLUDED.strengths,
            gaps = EXCLUDED.gaps,
            model = EXCLUDED.model,
            created_at = NOW()
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(session.id)
    .bind(session.user_id)
    .bind(round.as_str())
    .bind(report.overall_score as i32)
    .bind(serde_json::to_value(&report.dimensions).map_err(anyhow::Error::from)?)
    .bind(&report.summary)
    .bind(&report.strengths)
    .bind(&report.gaps)
    .bind(llm.model())
    .fetch_one(pool)
    .await?;

    sqlx::query(
        r#"
        UPDATE interview_sessions
        SET status = 'assessed', completed_at = COALESCE(completed_at, NOW())
        WHERE id = $1
        "#,
    )
    .bind(session.id)
    .execute(pool)
    .await?;

    info!(
        "Assessed session {} ({}): overall {}",
        session.id, round, report.overall_score
    );

    Ok(row)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_dim(name: &str, score: f64) -> RawDimension {
        RawDimension {
            dimension: name.to_string(),
            score,
            evidence: " said X ".to_string(),
            improvement: "do Y".to_string(),
        }
    }

    fn raw(dims: Vec<RawDimension>) -> RawAssessment {
        RawAssessment {
            dimensions: dims,
            summary: " Solid. ".to_string(),
            strengths: vec!["clear".to_string(), "  ".to_string()],
            gaps: vec![],
        }
    }

    fn behavioral_dims() -> Vec<RawDimension> {
        vec![
            raw_dim("confidence", 60.0),
            raw_dim("communication", 80.0),
            raw_dim("problem_solving", 70.0),
            raw_dim("structured thinking", 65.4),
            raw_dim("Role Fit", 75.0),
        ]
    }

    #[test]
    fn test_validate_orders_and_averages() {
        let report = validate_assessment(raw(behavioral_dims()), RoundType::Behavioral).unwrap();
        assert_eq!(report.dimensions[0].dimension, SkillDimension::Communication);
        assert_eq!(report.dimensions[4].dimension, SkillDimension::Confidence);
        // (80 + 70 + 65 + 75 + 60) / 5 = 70
        assert_eq!(report.overall_score, 70);
        assert_eq!(report.summary, "Solid.");
        assert_eq!(report.strengths, vec!["clear".to_string()]);
        assert_eq!(report.dimensions[0].evidence, "said X");
    }

    #[test]
    fn test_validate_clamps_scores() {
        let mut dims = behavioral_dims();
        dims[0] = raw_dim("confidence", 140.0);
        dims[1] = raw_dim("communication", -5.0);
        let report = validate_assessment(raw(dims), RoundType::Behavioral).unwrap();
        let by = |d: SkillDimension| {
            report
                .dimensions
                .iter()
                .find(|x| x.dimension == d)
                .unwrap()
                .score
        };
        assert_eq!(by(SkillDimension::Confidence), 100);
        assert_eq!(by(SkillDimension::Communication), 0);
    }

    #[test]
    fn test_validate_drops_unknown_duplicate_and_off_round() {
        let mut dims = behavioral_dims();
        dims.push(raw_dim("charisma", 99.0));
        dims.push(raw_dim("communication", 10.0));
        dims.push(raw_dim("technical_depth", 90.0));
        let report = validate_assessment(raw(dims), RoundType::Behavioral).unwrap();
        assert_eq!(report.dimensions.len(), 5);
        let comm = &report.dimensions[0];
        assert_eq!(comm.score, 80, "first occurrence wins");
    }

    #[test]
    fn test_validate_missing_dimension_is_unprocessable() {
        let mut dims = behavioral_dims();
        dims.remove(0);
        let err = validate_assessment(raw(dims), RoundType::Behavioral).unwrap_err();
        match err {
            AppError::UnprocessableEntity(msg) => assert!(msg.contains("confidence")),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_non_finite_score_becomes_zero() {
        let mut dims = behavioral_dims();
        dims[0] = raw_dim("confidence", f64::NAN);
        let report = validate_assessment(raw(dims), RoundType::Behavioral).unwrap();
        assert_eq!(report.dimensions[4].score, 0);
    }

    #[test]
    fn test_raw_assessment_deserializes_sparse_json() {
        let raw: RawAssessment = serde_json::from_str(
            r#"{"dimensions":[{"dimension":"communication","score":72.5}]}"#,
        )
        .unwrap();
        assert_eq!(raw.dimensions.len(), 1);
        assert!(raw.summary.is_empty());
    }

    #[test]
    fn test_truncate_transcript_on_char_boundary() {
        let t = "é".repeat(10);
        let cut = truncate_transcript(&t, 4);
        assert!(cut.starts_with("éééé\n"));
        assert!(cut.ends_with("[transcript truncated]"));
        assert_eq!(truncate_transcript("short", 100), "short");
    }

    #[test]
    fn test_prompt_contains_focus_skills_and_dimensions() {
        let skills = vec!["Excel".to_string(), "market sizing".to_string(), "Rust".to_string()];
        let prompt = build_assessment_prompt(
            RoundType::CaseStudy,
            "Strategy Analyst",
            &skills,
            "Q: size the market",
        );
        assert!(prompt.contains("case study interview"));
        assert!(prompt.contains("Strategy Analyst"));
        // excel (analytics + finance) outranks market sizing in a case round
        assert!(prompt.contains("Excel, market sizing"));
        assert!(!prompt.contains("Rust"));
        assert!(prompt.contains("- structured_thinking:"));
        assert!(prompt.contains("Q: size the market"));
        assert!(!prompt.contains("{transcript}"));
    }

    #[test]
    fn test_overall_score_empty() {
        assert_eq!(overall_score(&[]), 0);
    }
}
