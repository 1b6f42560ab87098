//! Exercise-type cascade.
//!
//! Rules run in order and the first one that resolves wins:
//! 1. explicit interview mode
//! 2. role archetype
//! 3. role category
//! 4. skill-keyword signal ratio
//! 5. role-kit category, then a low-confidence coding default

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::labels::{deserialize_label, parse_label};
use crate::routing::signals::{count_signals, SkillSignals};
use crate::routing::{ExerciseType, InterviewMode, RoleArchetype, RoleCategory, RoutingRule};

/// Rule 4 needs at least this many classified skills to say anything.
pub const MIN_SIGNALS: u32 = 2;
/// Coding share at or above this routes to coding.
pub const CODING_RATIO_THRESHOLD: f32 = 0.6;
/// Coding share at or below this routes to case study.
pub const CASE_RATIO_THRESHOLD: f32 = 0.3;

const FALLBACK_CONFIDENCE: f32 = 0.3;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoutingInput {
    #[serde(default, deserialize_with = "deserialize_label")]
    pub interview_mode: Option<InterviewMode>,
    #[serde(default, deserialize_with = "deserialize_label")]
    pub archetype: Option<RoleArchetype>,
    #[serde(default, deserialize_with = "deserialize_label")]
    pub role_category: Option<RoleCategory>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub job_description: Option<String>,
    /// Raw category string stored on the role kit.
    #[serde(default)]
    pub role_kit_category: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutingDecision {
    pub exercise_type: ExerciseType,
    pub rule: RoutingRule,
    pub confidence: f32,
    pub reason: String,
    pub signals: SkillSignals,
}

/// Runs the cascade. Always returns a decision.
pub fn route_exercise(input: &RoutingInput) -> RoutingDecision {
    let signals = count_signals(&input.skills, input.job_description.as_deref());

    let decision = by_mode(input)
        .or_else(|| by_archetype(input))
        .or_else(|| by_role_category(input))
        .or_else(|| by_signals(&signals))
        .unwrap_or_else(|| by_role_kit(input));

    let decision = RoutingDecision { signals, ..decision };
    debug!(
        exercise_type = decision.exercise_type.as_str(),
        rule = ?decision.rule,
        confidence = decision.confidence,
        "Routed exercise"
    );
    decision
}

fn decided(
    exercise_type: ExerciseType,
    rule: RoutingRule,
    confidence: f32,
    reason: String,
) -> RoutingDecision {
    RoutingDecision {
        exercise_type,
        rule,
        confidence,
        reason,
        signals: SkillSignals::default(),
    }
}

fn by_mode(input: &RoutingInput) -> Option<RoutingDecision> {
    let exercise_type = match input.interview_mode? {
        InterviewMode::Coding => ExerciseType::Coding,
        InterviewMode::CaseStudy => ExerciseType::CaseStudy,
        InterviewMode::Sql => ExerciseType::SqlAnalytics,
        InterviewMode::Technical | InterviewMode::Behavioral | InterviewMode::Auto => return None,
    };
    Some(decided(
        exercise_type,
        RoutingRule::ExplicitMode,
        1.0,
        format!("interview mode explicitly set to {}", exercise_type.as_str()),
    ))
}

fn by_archetype(input: &RoutingInput) -> Option<RoutingDecision> {
    use RoleArchetype::*;
    let archetype = input.archetype?;
    let exercise_type = match archetype {
        CoreSoftwareEngineer | FrontendEngineer | BackendEngineer | MobileEngineer
        | DevopsEngineer | MlEngineer => ExerciseType::Coding,
        DataAnalyst => ExerciseType::SqlAnalytics,
        DataScientist => ExerciseType::Hybrid,
        BusinessAnalyst | ProductManager | Consultant | FinanceAnalyst | Marketing
        | Operations => ExerciseType::CaseStudy,
        Other => return None,
    };
    Some(decided(
        exercise_type,
        RoutingRule::Archetype,
        0.9,
        format!("role archetype {archetype:?} maps to {}", exercise_type.as_str()),
    ))
}

fn category_exercise(category: RoleCategory) -> Option<ExerciseType> {
    match category {
        RoleCategory::Engineering => Some(ExerciseType::Coding),
        RoleCategory::Data => Some(ExerciseType::SqlAnalytics),
        RoleCategory::Product | RoleCategory::Business => Some(ExerciseType::CaseStudy),
        RoleCategory::Design | RoleCategory::Other => None,
    }
}

fn by_role_category(input: &RoutingInput) -> Option<RoutingDecision> {
    let category = input.role_category?;
    let exercise_type = category_exercise(category)?;
    Some(decided(
        exercise_type,
        RoutingRule::RoleCategory,
        0.8,
        format!("role category {category:?} maps to {}", exercise_type.as_str()),
    ))
}

fn by_signals(signals: &SkillSignals) -> Option<RoutingDecision> {
    if signals.total < MIN_SIGNALS {
        return None;
    }

    let ratio = signals.coding_ratio();
    let exercise_type = if signals.sql > signals.coding && signals.sql > signals.case_study {
        ExerciseType::SqlAnalytics
    } else if ratio >= CODING_RATIO_THRESHOLD {
        ExerciseType::Coding
    } else if ratio <= CASE_RATIO_THRESHOLD {
        ExerciseType::CaseStudy
    } else {
        ExerciseType::Hybrid
    };

    Some(decided(
        exercise_type,
        RoutingRule::SkillSignals,
        signals.max_share().clamp(0.5, 0.75),
        format!(
            "skill signals coding={} case_study={} sql={} (coding ratio {:.2})",
            signals.coding, signals.case_study, signals.sql, ratio
        ),
    ))
}

fn by_role_kit(input: &RoutingInput) -> RoutingDecision {
    let mapped = input
        .role_kit_category
        .as_deref()
        .and_then(parse_label::<RoleCategory>)
        .and_then(|c| category_exercise(c).map(|t| (c, t)));

    match mapped {
        Some((category, exercise_type)) => decided(
            exercise_type,
            RoutingRule::RoleKitFallback,
            0.5,
            format!("role kit category {category:?} maps to {}", exercise_type.as_str()),
        ),
        None => decided(
            ExerciseType::Coding,
            RoutingRule::RoleKitFallback,
            FALLBACK_CONFIDENCE,
            "no routing signal; defaulting to coding".to_string(),
        ),
    }
}
