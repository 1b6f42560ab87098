//! Axum route handlers for the Skills API.

use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::taxonomy::relevance::{categorize_skill, get_skills_for_round, ScoredSkill};
use crate::taxonomy::{RoundType, SkillCategory};

const DEFAULT_LIMIT: usize = 5;
const MAX_LIMIT: usize = 50;

#[derive(Debug, Deserialize)]
pub struct CategorizeRequest {
    pub skills: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct CategorizedSkill {
    pub skill: String,
    pub categories: Vec<SkillCategory>,
}

#[derive(Debug, Serialize)]
pub struct CategorizeResponse {
    pub skills: Vec<CategorizedSkill>,
}

#[derive(Debug, Deserialize)]
pub struct SkillsForRoundRequest {
    pub skills: Vec<String>,
    pub round_type: String,
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct SkillsForRoundResponse {
    pub round_type: RoundType,
    pub skills: Vec<ScoredSkill>,
}

/// POST /api/v1/skills/categorize
pub async fn handle_categorize(
    Json(req): Json<CategorizeRequest>,
) -> Result<Json<CategorizeResponse>, AppError> {
    let skills = req
        .skills
        .into_iter()
        .map(|skill| CategorizedSkill {
            categories: categorize_skill(&skill),
            skill,
        })
        .collect();
    Ok(Json(CategorizeResponse { skills }))
}

/// POST /api/v1/skills/for-round
pub async fn handle_skills_for_round(
    Json(req): Json<SkillsForRoundRequest>,
) -> Result<Json<SkillsForRoundResponse>, AppError> {
    let round_type: RoundType = req.round_type.parse().map_err(AppError::Validation)?;
    let limit = req.limit.unwrap_or(DEFAULT_LIMIT);
    if limit > MAX_LIMIT {
        return Err(AppError::Validation(format!(
            "limit must be at most {MAX_LIMIT}"
        )));
    }

    let skills = get_skills_for_round(&req.skills, round_type, limit);
    Ok(Json(SkillsForRoundResponse { round_type, skills }))
}
