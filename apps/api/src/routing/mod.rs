//! Technical exercise routing.
//!
//! `router` decides which kind of exercise a candidate should get through a
//! five-step cascade; `exercises` then picks a concrete exercise row.

pub mod exercises;
pub mod handlers;
pub mod router;
pub mod signals;

use serde::{Deserialize, Serialize};

/// The exercise label the cascade resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseType {
    Coding,
    CaseStudy,
    SqlAnalytics,
    Hybrid,
}

impl ExerciseType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExerciseType::Coding => "coding",
            ExerciseType::CaseStudy => "case_study",
            ExerciseType::SqlAnalytics => "sql_analytics",
            ExerciseType::Hybrid => "hybrid",
        }
    }
}

/// Interview mode the user picked explicitly. Only the first three force a
/// decision; the rest defer to the later rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterviewMode {
    Coding,
    CaseStudy,
    Sql,
    Technical,
    Behavioral,
    #[serde(other)]
    Auto,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleArchetype {
    CoreSoftwareEngineer,
    FrontendEngineer,
    BackendEngineer,
    MobileEngineer,
    DevopsEngineer,
    MlEngineer,
    DataScientist,
    DataAnalyst,
    BusinessAnalyst,
    ProductManager,
    Consultant,
    FinanceAnalyst,
    Marketing,
    Operations,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleCategory {
    Engineering,
    Data,
    Product,
    Business,
    Design,
    #[serde(other)]
    Other,
}

/// Which cascade step produced a decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoutingRule {
    ExplicitMode,
    Archetype,
    RoleCategory,
    SkillSignals,
    RoleKitFallback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Maps a free-text seniority level to an exercise difficulty.
    pub fn from_level(level: &str) -> Self {
        let level = level.trim().to_lowercase();
        let has = |words: &[&str]| words.iter().any(|w| level.contains(w));
        if has(&["intern", "entry", "junior", "graduate", "fresher", "new grad"]) {
            Difficulty::Easy
        } else if has(&[
            "senior", "staff", "principal", "lead", "manager", "director", "head",
        ]) {
            Difficulty::Hard
        } else {
            Difficulty::Medium
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}
