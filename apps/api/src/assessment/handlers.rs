//! Axum route handlers for session assessments.

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::assessment::assessor::assess_session;
use crate::errors::AppError;
use crate::models::session::SkillAssessmentRow;
use crate::state::AppState;

/// POST /api/v1/sessions/:id/assessment
///
/// Runs the LLM assessment for a completed session and stores it.
pub async fn handle_create_assessment(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<SkillAssessmentRow>, AppError> {
    let row = assess_session(&state.db, &state.llm, session_id).await?;
    Ok(Json(row))
}

/// GET /api/v1/sessions/:id/assessment
pub async fn handle_get_assessment(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<SkillAssessmentRow>, AppError> {
    let row = sqlx::query_as::<_, SkillAssessmentRow>(
        "SELECT * FROM skill_assessments WHERE session_id = $1",
    )
    .bind(session_id)
    .fetch_optional(&state.db)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("No assessment for session {session_id}")))?;

    Ok(Json(row))
}
