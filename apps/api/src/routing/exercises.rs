//! Exercise selection: pluggable, trait-based lookup of exercise rows.
//!
//! `AppState` carries an `Arc<dyn ExerciseRepository>`; Postgres in
//! production, an in-memory list in tests.

use async_trait::async_trait;
use rand::seq::SliceRandom;
use rand::Rng;
use sqlx::PgPool;
use tracing::info;

use crate::errors::AppError;
use crate::models::exercise::ExerciseRow;
use crate::routing::{Difficulty, ExerciseType};

/// Equality filters applied when fetching candidate exercises.
#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseFilter {
    pub exercise_type: ExerciseType,
    pub language: Option<String>,
    pub domain: Option<String>,
}

#[async_trait]
pub trait ExerciseRepository: Send + Sync {
    /// All active exercises matching the filter, any difficulty.
    async fn find_candidates(&self, filter: &ExerciseFilter) -> Result<Vec<ExerciseRow>, AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// Postgres backend
// ────────────────────────────────────────────────────────────────────────────

pub struct PgExerciseRepository {
    pool: PgPool,
}

impl PgExerciseRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ExerciseRepository for PgExerciseRepository {
    async fn find_candidates(&self, filter: &ExerciseFilter) -> Result<Vec<ExerciseRow>, AppError> {
        let rows = sqlx::query_as::<_, ExerciseRow>(
            r#"
            SELECT * FROM exercises
            WHERE exercise_type = $1
              AND is_active = TRUE
              AND ($2::text IS NULL OR lower(language) = lower($2))
              AND ($3::text IS NULL OR lower(domain) = lower($3))
            "#,
        )
        .bind(filter.exercise_type.as_str())
        .bind(filter.language.as_deref())
        .bind(filter.domain.as_deref())
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Selection
// ────────────────────────────────────────────────────────────────────────────

/// Picks one exercise at random, preferring rows at the requested difficulty.
/// Falls back to any row when no difficulty match exists.
pub fn pick_exercise<R: Rng + ?Sized>(
    candidates: Vec<ExerciseRow>,
    difficulty: Option<Difficulty>,
    rng: &mut R,
) -> Option<ExerciseRow> {
    if let Some(wanted) = difficulty {
        let matched: Vec<&ExerciseRow> = candidates
            .iter()
            .filter(|e| e.difficulty.eq_ignore_ascii_case(wanted.as_str()))
            .collect();
        if let Some(choice) = matched.choose(rng) {
            return Some((*choice).clone());
        }
    }
    candidates.choose(rng).cloned()
}

/// Fetches candidates for `filter` and picks one.
///
/// A language/domain filter that matches nothing is relaxed once before
/// giving up, so a niche language still gets a generic exercise of the right type.
pub async fn select_exercise<R: Rng + ?Sized>(
    repo: &dyn ExerciseRepository,
    filter: &ExerciseFilter,
    difficulty: Option<Difficulty>,
    rng: &mut R,
) -> Result<ExerciseRow, AppError> {
    let mut candidates = repo.find_candidates(filter).await?;

    if candidates.is_empty() && (filter.language.is_some() || filter.domain.is_some()) {
        info!(
            "No {} exercise for language={:?} domain={:?}; relaxing filters",
            filter.exercise_type.as_str(),
            filter.language,
            filter.domain
        );
        let relaxed = ExerciseFilter {
            exercise_type: filter.exercise_type,
            language: None,
            domain: None,
        };
        candidates = repo.find_candidates(&relaxed).await?;
    }

    pick_exercise(candidates, difficulty, rng).ok_or_else(|| {
        AppError::NotFound(format!(
            "No active {} exercise available",
            filter.exercise_type.as_str()
        ))
    })
}
