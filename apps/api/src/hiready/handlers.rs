use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::FromRow;
use tracing::warn;
use uuid::Uuid;

use crate::assessment::DimensionScore;
use crate::errors::AppError;
use crate::hiready::{compute_hiready_index, HireadyReport, SessionResult};
use crate::state::AppState;

/// An assessment joined with the session it scored.
#[derive(Debug, Clone, FromRow)]
pub struct AssessedSessionRow {
    pub assessment_id: Uuid,
    pub round_type: String,
    pub overall_score: i32,
    pub dimensions: Value,
    /// When the session ended; the assessment time if the session never recorded one.
    pub completed_at: DateTime<Utc>,
}

/// Converts stored rows, skipping ones whose round type no longer parses.
pub fn session_results(rows: Vec<AssessedSessionRow>) -> Vec<SessionResult> {
    rows.into_iter()
        .filter_map(|row| {
            let round_type = match row.round_type.parse() {
                Ok(r) => r,
                Err(e) => {
                    warn!("Skipping assessment {}: {e}", row.assessment_id);
                    return None;
                }
            };
            let dimensions: Vec<DimensionScore> = serde_json::from_value(row.dimensions)
                .unwrap_or_else(|e| {
                    warn!("Assessment {} has malformed dimensions: {e}", row.assessment_id);
                    Vec::new()
                });
            Some(SessionResult {
                round_type,
                overall_score: row.overall_score.clamp(0, 100) as u32,
                dimensions,
                completed_at: row.completed_at,
            })
        })
        .collect()
}

/// GET /api/v1/users/:id/hiready-index
pub async fn handle_hiready_index(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<HireadyReport>, AppError> {
    let rows = sqlx::query_as::<_, AssessedSessionRow>(
        r#"
        SELECT a.id AS assessment_id,
               a.round_type,
               a.overall_score,
               a.dimensions,
               COALESCE(s.completed_at, a.created_at) AS completed_at
        FROM skill_assessments a
        JOIN interview_sessions s ON s.id = a.session_id
        WHERE a.user_id = $1
        ORDER BY completed_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(&state.db)
    .await?;

    Ok(Json(compute_hiready_index(&session_results(rows), Utc::now())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use serde_json::json;

    fn row(round_type: &str, dimensions: Value, completed_at: DateTime<Utc>) -> AssessedSessionRow {
        AssessedSessionRow {
            assessment_id: Uuid::new_v4(),
            round_type: round_type.to_string(),
            overall_score: 140,
            dimensions,
            completed_at,
        }
    }

    #[test]
    fn test_session_results_skips_unknown_rounds() {
        let now = Utc::now();
        let results = session_results(vec![
            row("coding", json!([]), now),
            row("pairing", json!([]), now),
        ]);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].overall_score, 100);
    }

    #[test]
    fn test_session_results_tolerates_bad_dimensions() {
        let now = Utc::now();
        let good = json!([
            {"dimension": "communication", "score": 70, "evidence": "", "improvement": ""}
        ]);
        let results = session_results(vec![
            row("technical", good, now),
            row("behavioral", json!({"not": "a list"}), now),
        ]);
        assert_eq!(results[0].dimensions.len(), 1);
        assert!(results[1].dimensions.is_empty());
    }

    #[test]
    fn test_old_session_keeps_its_completion_date() {
        let now = Utc::now();
        let old = now - Duration::days(60);
        let mut stale = row("technical", json!([]), old);
        stale.overall_score = 40;
        let mut fresh = row("technical", json!([]), now);
        fresh.overall_score = 90;

        let results = session_results(vec![stale, fresh]);
        assert_eq!(results[0].completed_at, old);
        // 60 days at a 30-day half-life weighs 0.25: (40*0.25 + 90) / 1.25 = 80
        assert_eq!(compute_hiready_index(&results, now).index, 80);
    }
}
