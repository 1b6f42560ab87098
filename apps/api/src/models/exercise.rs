use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ExerciseRow {
    pub id: Uuid,
    /// coding | case_study | sql_analytics | hybrid
    pub exercise_type: String,
    pub title: String,
    pub prompt: String,
    /// easy | medium | hard
    pub difficulty: String,
    pub language: Option<String>,
    pub domain: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}
