pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::state::AppState;
use crate::{assessment, hiready, resume, routing, taxonomy};

/// Multipart framing overhead allowed on top of the file itself.
const MULTIPART_OVERHEAD: usize = 64 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Skills API
        .route(
            "/api/v1/skills/categorize",
            post(taxonomy::handlers::handle_categorize),
        )
        .route(
            "/api/v1/skills/for-round",
            post(taxonomy::handlers::handle_skills_for_round),
        )
        // Routing API
        .route(
            "/api/v1/routing/decide",
            post(routing::handlers::handle_decide),
        )
        .route(
            "/api/v1/routing/exercise",
            post(routing::handlers::handle_route_exercise),
        )
        .route(
            "/api/v1/role-kits/:id/plan",
            get(routing::handlers::handle_role_kit_plan),
        )
        // Assessment API
        .route(
            "/api/v1/sessions/:id/assessment",
            post(assessment::handlers::handle_create_assessment)
                .get(assessment::handlers::handle_get_assessment),
        )
        .route(
            "/api/v1/users/:id/hiready-index",
            get(hiready::handlers::handle_hiready_index),
        )
        // Resume API
        .route(
            "/api/v1/resumes/skills",
            post(resume::handle_resume_skills).layer(DefaultBodyLimit::max(
                resume::MAX_UPLOAD_BYTES + MULTIPART_OVERHEAD,
            )),
        )
        .with_state(state)
}
