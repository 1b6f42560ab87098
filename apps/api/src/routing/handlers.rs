//! Axum route handlers for the Routing and Role Kit APIs.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::labels::parse_label;
use crate::models::exercise::ExerciseRow;
use crate::models::role_kit::RoleKitRow;
use crate::routing::exercises::{select_exercise, ExerciseFilter, ExerciseRepository};
use crate::routing::router::{route_exercise, RoutingDecision, RoutingInput};
use crate::routing::{Difficulty, InterviewMode};
use crate::state::AppState;
use crate::taxonomy::relevance::{get_skills_for_round, ScoredSkill};
use crate::taxonomy::RoundType;

const PLAN_SKILL_LIMIT: usize = 5;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct RouteExerciseRequest {
    pub routing: RoutingInput,
    pub level: Option<String>,
    pub language: Option<String>,
    pub domain: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RouteExerciseResponse {
    pub decision: RoutingDecision,
    pub difficulty: Difficulty,
    pub exercise: ExerciseRow,
}

#[derive(Debug, Deserialize)]
pub struct PlanQuery {
    pub round_type: String,
    pub language: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RoundPlanResponse {
    pub role_kit: RoleKitRow,
    pub round_type: RoundType,
    pub focus_skills: Vec<ScoredSkill>,
    /// Absent for behavioral rounds.
    pub decision: Option<RoutingDecision>,
    pub exercise: Option<ExerciseRow>,
}

// ────────────────────────────────────────────────────────────────────────────
// Plan building
// ────────────────────────────────────────────────────────────────────────────

/// Routing input for a round of a role kit. `None` for behavioral rounds,
/// which never get an exercise.
pub fn routing_input_for_round(kit: &RoleKitRow, round: RoundType) -> Option<RoutingInput> {
    let interview_mode = match round {
        RoundType::Behavioral => return None,
        RoundType::Coding => InterviewMode::Coding,
        RoundType::CaseStudy => InterviewMode::CaseStudy,
        RoundType::Technical => InterviewMode::Technical,
    };
    Some(RoutingInput {
        interview_mode: Some(interview_mode),
        archetype: kit.archetype.as_deref().and_then(parse_label),
        role_category: kit.category.as_deref().and_then(parse_label),
        skills: kit.skills.clone(),
        job_description: None,
        role_kit_category: kit.category.clone(),
    })
}

/// Routing decision and exercise for one round of a kit. A round with no
/// matching exercise still gets its decision; the exercise is left empty.
pub async fn plan_exercise<R: Rng + ?Sized>(
    repo: &dyn ExerciseRepository,
    kit: &RoleKitRow,
    round: RoundType,
    language: Option<String>,
    rng: &mut R,
) -> Result<(Option<RoutingDecision>, Option<ExerciseRow>), AppError> {
    let Some(input) = routing_input_for_round(kit, round) else {
        return Ok((None, None));
    };
    let decision = route_exercise(&input);
    let filter = ExerciseFilter {
        exercise_type: decision.exercise_type,
        language,
        domain: kit.domain.clone(),
    };
    let difficulty = Difficulty::from_level(&kit.level);

    match select_exercise(repo, &filter, Some(difficulty), rng).await {
        Ok(exercise) => Ok((Some(decision), Some(exercise))),
        Err(AppError::NotFound(msg)) => {
            warn!("Role kit {} {round} plan has no exercise: {msg}", kit.id);
            Ok((Some(decision), None))
        }
        Err(e) => Err(e),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/routing/decide
///
/// Runs the routing cascade only. No DB access.
pub async fn handle_decide(
    Json(input): Json<RoutingInput>,
) -> Result<Json<RoutingDecision>, AppError> {
    Ok(Json(route_exercise(&input)))
}

/// POST /api/v1/routing/exercise
///
/// Routes, then picks a concrete exercise matching the decision.
pub async fn handle_route_exercise(
    State(state): State<AppState>,
    Json(req): Json<RouteExerciseRequest>,
) -> Result<Json<RouteExerciseResponse>, AppError> {
    let decision = route_exercise(&req.routing);
    let difficulty = Difficulty::from_level(req.level.as_deref().unwrap_or_default());

    let filter = ExerciseFilter {
        exercise_type: decision.exercise_type,
        language: req.language,
        domain: req.domain,
    };
    let mut rng = StdRng::from_entropy();
    let exercise =
        select_exercise(state.exercises.as_ref(), &filter, Some(difficulty), &mut rng).await?;

    info!(
        "Routed to {} exercise {} via {:?}",
        decision.exercise_type.as_str(),
        exercise.id,
        decision.rule
    );

    Ok(Json(RouteExerciseResponse {
        decision,
        difficulty,
        exercise,
    }))
}

/// GET /api/v1/role-kits/:id/plan?round_type=
///
/// Focus skills for the round plus, for non-behavioral rounds, the routed exercise.
pub async fn handle_role_kit_plan(
    State(state): State<AppState>,
    Path(kit_id): Path<Uuid>,
    Query(query): Query<PlanQuery>,
) -> Result<Json<RoundPlanResponse>, AppError> {
    let round_type: RoundType = query.round_type.parse().map_err(AppError::Validation)?;

    let role_kit = sqlx::query_as::<_, RoleKitRow>("SELECT * FROM role_kits WHERE id = $1")
        .bind(kit_id)
        .fetch_optional(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Role kit {kit_id} not found")))?;

    let focus_skills = get_skills_for_round(&role_kit.skills, round_type, PLAN_SKILL_LIMIT);

    let mut rng = StdRng::from_entropy();
    let (decision, exercise) = plan_exercise(
        state.exercises.as_ref(),
        &role_kit,
        round_type,
        query.language,
        &mut rng,
    )
    .await?;

    Ok(Json(RoundPlanResponse {
        role_kit,
        round_type,
        focus_skills,
        decision,
        exercise,
    }))
}
