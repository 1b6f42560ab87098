// Skill-dimension assessment of a completed interview session.
// Flow: load session → build prompt → LLM (JSON mode) → validate → persist.
// All LLM calls go through llm_client.

pub mod assessor;
pub mod handlers;
pub mod prompts;

use serde::{Deserialize, Serialize};

use crate::taxonomy::RoundType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillDimension {
    Communication,
    TechnicalDepth,
    ProblemSolving,
    StructuredThinking,
    RoleFit,
    Confidence,
}

impl SkillDimension {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillDimension::Communication => "communication",
            SkillDimension::TechnicalDepth => "technical_depth",
            SkillDimension::ProblemSolving => "problem_solving",
            SkillDimension::StructuredThinking => "structured_thinking",
            SkillDimension::RoleFit => "role_fit",
            SkillDimension::Confidence => "confidence",
        }
    }

    /// One-line rubric handed to the model.
    pub fn rubric(&self) -> &'static str {
        match self {
            SkillDimension::Communication => "clarity, concision and listening",
            SkillDimension::TechnicalDepth => "accuracy and depth of domain knowledge",
            SkillDimension::ProblemSolving => {
                "breaking down the problem and reaching a sound answer"
            }
            SkillDimension::StructuredThinking => "frameworks, ordering and explicit trade-offs",
            SkillDimension::RoleFit => "alignment of experience and motivation with the role",
            SkillDimension::Confidence => "composure and ownership of answers",
        }
    }
}

/// Dimensions scored for a round. Behavioral rounds skip technical depth,
/// coding rounds skip role fit.
pub fn dimensions_for_round(round: RoundType) -> &'static [SkillDimension] {
    use SkillDimension::*;
    match round {
        RoundType::Behavioral => &[
            Communication,
            ProblemSolving,
            StructuredThinking,
            RoleFit,
            Confidence,
        ],
        RoundType::Coding => &[
            Communication,
            TechnicalDepth,
            ProblemSolving,
            StructuredThinking,
            Confidence,
        ],
        RoundType::Technical | RoundType::CaseStudy => &[
            Communication,
            TechnicalDepth,
            ProblemSolving,
            StructuredThinking,
            RoleFit,
            Confidence,
        ],
    }
}

/// A validated per-dimension score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionScore {
    pub dimension: SkillDimension,
    /// 0 – 100
    pub score: u32,
    pub evidence: String,
    pub improvement: String,
}

/// Validated assessment ready to persist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentReport {
    pub round_type: RoundType,
    pub overall_score: u32,
    pub dimensions: Vec<DimensionScore>,
    pub summary: String,
    pub strengths: Vec<String>,
    pub gaps: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_behavioral_has_no_technical_depth() {
        let dims = dimensions_for_round(RoundType::Behavioral);
        assert!(!dims.contains(&SkillDimension::TechnicalDepth));
    }

    #[test]
    fn test_coding_has_no_role_fit() {
        assert!(!dimensions_for_round(RoundType::Coding).contains(&SkillDimension::RoleFit));
    }

    #[test]
    fn test_dimension_as_str_matches_serde() {
        for d in dimensions_for_round(RoundType::Technical) {
            assert_eq!(serde_json::to_value(d).unwrap(), d.as_str());
        }
    }
}
