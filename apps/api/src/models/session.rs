use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct InterviewSessionRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub role_kit_id: Option<Uuid>,
    pub round_type: String,
    pub role_title: Option<String>,
    pub transcript: Option<String>,
    pub status: String,
    pub completed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// One LLM assessment per session. `dimensions` holds `[DimensionScore]` as JSON.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SkillAssessmentRow {
    pub id: Uuid,
    pub session_id: Uuid,
    pub user_id: Uuid,
    pub round_type: String,
    pub overall_score: i32,
    pub dimensions: Value,
    pub summary: String,
    pub strengths: Vec<String>,
    pub gaps: Vec<String>,
    pub model: String,
    pub created_at: DateTime<Utc>,
}
