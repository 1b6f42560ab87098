//! Hiready Index: composite readiness score over a user's assessed sessions.
//!
//! Per-round score: recency-weighted mean of session scores, with a 30-day
//! half-life. Index: weighted mean of round scores, where rounds the user has
//! never practiced drop out and their weight is redistributed.

pub mod handlers;

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::assessment::{DimensionScore, SkillDimension};
use crate::taxonomy::RoundType;

pub const HALF_LIFE_DAYS: f64 = 30.0;
const FOCUS_AREA_COUNT: usize = 2;

/// One assessed session as seen by the index.
#[derive(Debug, Clone)]
pub struct SessionResult {
    pub round_type: RoundType,
    pub overall_score: u32,
    pub dimensions: Vec<DimensionScore>,
    pub completed_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadinessBand {
    Ready,
    AlmostReady,
    Developing,
    GettingStarted,
}

impl ReadinessBand {
    pub fn from_index(index: u32) -> Self {
        match index {
            80.. => ReadinessBand::Ready,
            60..=79 => ReadinessBand::AlmostReady,
            40..=59 => ReadinessBand::Developing,
            _ => ReadinessBand::GettingStarted,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundBreakdown {
    pub round_type: RoundType,
    pub sessions: usize,
    pub average_score: f64,
    /// Effective weight after redistribution; sums to 1.0 across rounds.
    pub weight: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HireadyReport {
    pub index: u32,
    pub band: ReadinessBand,
    pub rounds: Vec<RoundBreakdown>,
    pub dimension_averages: BTreeMap<SkillDimension, f64>,
    pub focus_areas: Vec<SkillDimension>,
    pub sessions_considered: usize,
}

pub fn round_weight(round: RoundType) -> f64 {
    match round {
        RoundType::Technical => 0.30,
        RoundType::Coding => 0.30,
        RoundType::Behavioral => 0.25,
        RoundType::CaseStudy => 0.15,
    }
}

/// `0.5^(age/half_life)`. Sessions dated in the future count as fresh.
pub fn recency_weight(completed_at: DateTime<Utc>, now: DateTime<Utc>, half_life_days: f64) -> f64 {
    let age_days = (now - completed_at).num_seconds() as f64 / 86_400.0;
    if age_days <= 0.0 {
        return 1.0;
    }
    0.5_f64.powf(age_days / half_life_days).clamp(0.0, 1.0)
}

/// Accumulates Σw·x and Σw.
#[derive(Debug, Default, Clone, Copy)]
struct WeightedMean {
    weighted_sum: f64,
    weight: f64,
    count: usize,
}

impl WeightedMean {
    fn add(&mut self, value: f64, weight: f64) {
        self.weighted_sum += value * weight;
        self.weight += weight;
        self.count += 1;
    }

    fn mean(&self) -> f64 {
        if self.weight > 0.0 {
            self.weighted_sum / self.weight
        } else {
            0.0
        }
    }
}

pub fn compute_hiready_index(results: &[SessionResult], now: DateTime<Utc>) -> HireadyReport {
    let mut per_round: BTreeMap<RoundType, WeightedMean> = BTreeMap::new();
    let mut per_dimension: BTreeMap<SkillDimension, WeightedMean> = BTreeMap::new();

    for result in results {
        let w = recency_weight(result.completed_at, now, HALF_LIFE_DAYS);
        per_round
            .entry(result.round_type)
            .or_default()
            .add(result.overall_score as f64, w);
        for dim in &result.dimensions {
            per_dimension
                .entry(dim.dimension)
                .or_default()
                .add(dim.score as f64, w);
        }
    }

    let total_round_weight: f64 = per_round.keys().map(|r| round_weight(*r)).sum();

    let rounds: Vec<RoundBreakdown> = per_round
        .iter()
        .map(|(round, acc)| RoundBreakdown {
            round_type: *round,
            sessions: acc.count,
            average_score: round2(acc.mean()),
            weight: if total_round_weight > 0.0 {
                round_weight(*round) / total_round_weight
            } else {
                0.0
            },
        })
        .collect();

    let index = per_round
        .values()
        .zip(&rounds)
        .map(|(acc, b)| acc.mean() * b.weight)
        .sum::<f64>()
        .round()
        .clamp(0.0, 100.0) as u32;

    let dimension_averages: BTreeMap<SkillDimension, f64> = per_dimension
        .iter()
        .map(|(d, acc)| (*d, round2(acc.mean())))
        .collect();

    let mut ranked: Vec<(SkillDimension, f64)> =
        dimension_averages.iter().map(|(d, s)| (*d, *s)).collect();
    ranked.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));
    let focus_areas = ranked
        .into_iter()
        .take(FOCUS_AREA_COUNT)
        .map(|(d, _)| d)
        .collect();

    HireadyReport {
        index,
        band: ReadinessBand::from_index(index),
        rounds,
        dimension_averages,
        focus_areas,
        sessions_considered: results.len(),
    }
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
