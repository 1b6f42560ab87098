use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::routing::exercises::ExerciseRepository;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub llm: LlmClient,
    pub config: Config,
    /// Exercise source for the router. Postgres in production, in-memory in tests.
    pub exercises: Arc<dyn ExerciseRepository>,
}
