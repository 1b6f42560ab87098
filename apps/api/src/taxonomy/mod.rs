//! Skill taxonomy: static skill → category tables, round relevance scoring,
//! and taxonomy-driven skill extraction from free text.
//!
//! Pure functions only. No LLM calls and no DB access live here.

pub mod extract;
pub mod handlers;
pub mod relevance;
pub mod tables;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Coarse grouping a skill belongs to. A skill may sit in several categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    Programming,
    DataStructuresAlgorithms,
    SystemDesign,
    Frontend,
    Backend,
    CloudDevops,
    DataAnalytics,
    MachineLearning,
    Databases,
    TestingQuality,
    ProductSense,
    BusinessStrategy,
    Finance,
    Marketing,
    Operations,
    Communication,
    Leadership,
    Collaboration,
    ProblemSolving,
}

/// Interview round a candidate practices. Ordered as declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundType {
    Behavioral,
    Technical,
    Coding,
    CaseStudy,
}

impl RoundType {
    pub const ALL: [RoundType; 4] = [
        RoundType::Behavioral,
        RoundType::Technical,
        RoundType::Coding,
        RoundType::CaseStudy,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RoundType::Behavioral => "behavioral",
            RoundType::Technical => "technical",
            RoundType::Coding => "coding",
            RoundType::CaseStudy => "case_study",
        }
    }
}

impl fmt::Display for RoundType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoundType {
    type Err = String;

    /// Accepts the snake_case label plus the spellings the frontend sends
    /// (`case-study`, `case study`, `casestudy`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| c.is_alphanumeric())
            .collect();
        match key.as_str() {
            "behavioral" | "behavioural" => Ok(RoundType::Behavioral),
            "technical" => Ok(RoundType::Technical),
            "coding" => Ok(RoundType::Coding),
            "casestudy" | "case" => Ok(RoundType::CaseStudy),
            _ => Err(format!("unknown round type '{s}'")),
        }
    }
}

/// Lowercases, trims, collapses internal whitespace and strips trailing
/// punctuation. `+` and `#` survive so `C++` and `C#` stay distinct.
pub fn normalize_skill(skill: &str) -> String {
    let collapsed = skill.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed
        .to_lowercase()
        .trim_end_matches(|c: char| {
            c.is_whitespace() || (c.is_ascii_punctuation() && c != '+' && c != '#')
        })
        .to_string()
}
