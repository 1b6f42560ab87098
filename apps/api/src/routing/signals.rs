//! Skill-keyword signals used by the fourth routing rule.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::taxonomy::extract::{extract_skills, find_term};
use crate::taxonomy::relevance::categorize_skill;
use crate::taxonomy::{normalize_skill, SkillCategory};

const SQL_KEYWORDS: &[&str] = &[
    "sql",
    "tableau",
    "power bi",
    "looker",
    "excel",
    "etl",
    "dashboards",
    "data analysis",
    "data visualization",
    "analytics",
    "bigquery",
    "snowflake",
];

const CODING_KEYWORDS: &[&str] = &[
    "algorithms",
    "data structures",
    "coding",
    "programming",
    "software engineering",
    "leetcode",
    "debugging",
    "api",
    "backend",
    "frontend",
];

const CASE_KEYWORDS: &[&str] = &[
    "strategy",
    "consulting",
    "market",
    "pricing",
    "growth",
    "stakeholder",
    "business",
    "product",
    "go-to-market",
    "operations",
    "finance",
];

/// Counts of skills leaning toward each exercise family.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillSignals {
    pub coding: u32,
    pub case_study: u32,
    pub sql: u32,
    pub total: u32,
}

impl SkillSignals {
    /// Share of coding signals among all signals, 0.0 when empty.
    pub fn coding_ratio(&self) -> f32 {
        if self.total == 0 {
            0.0
        } else {
            self.coding as f32 / self.total as f32
        }
    }

    pub fn max_share(&self) -> f32 {
        if self.total == 0 {
            return 0.0;
        }
        self.coding.max(self.case_study).max(self.sql) as f32 / self.total as f32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Signal {
    Coding,
    CaseStudy,
    Sql,
}

/// Each term counts toward at most one family: keyword lists first
/// (SQL, then coding, then case), then taxonomy categories.
fn classify(term: &str) -> Option<Signal> {
    let has = |words: &[&str]| words.iter().any(|w| find_term(term, w).is_some());
    if has(SQL_KEYWORDS) {
        return Some(Signal::Sql);
    }
    if has(CODING_KEYWORDS) {
        return Some(Signal::Coding);
    }
    if has(CASE_KEYWORDS) {
        return Some(Signal::CaseStudy);
    }

    let cats = categorize_skill(term);
    let any = |wanted: &[SkillCategory]| cats.iter().any(|c| wanted.contains(c));
    if any(&[
        SkillCategory::Programming,
        SkillCategory::DataStructuresAlgorithms,
        SkillCategory::Frontend,
        SkillCategory::Backend,
        SkillCategory::SystemDesign,
        SkillCategory::CloudDevops,
        SkillCategory::TestingQuality,
        SkillCategory::MachineLearning,
    ]) {
        Some(Signal::Coding)
    } else if any(&[SkillCategory::Databases, SkillCategory::DataAnalytics]) {
        Some(Signal::Sql)
    } else if any(&[
        SkillCategory::BusinessStrategy,
        SkillCategory::ProductSense,
        SkillCategory::Finance,
        SkillCategory::Marketing,
        SkillCategory::Operations,
    ]) {
        Some(Signal::CaseStudy)
    } else {
        None
    }
}

/// Keyword-list terms occurring as whole words in a job description.
fn keyword_terms(job_description: &str) -> Vec<String> {
    let lower = job_description.to_lowercase();
    [SQL_KEYWORDS, CODING_KEYWORDS, CASE_KEYWORDS]
        .iter()
        .flat_map(|list| list.iter())
        .filter(|kw| find_term(&lower, kw).is_some())
        .map(|kw| kw.to_string())
        .collect()
}

/// Counts signals over the candidate's skills plus the taxonomy skills and
/// signal keywords found in the job description. Terms are de-duplicated
/// after normalization.
pub fn count_signals(skills: &[String], job_description: Option<&str>) -> SkillSignals {
    let mut terms: Vec<String> = skills.iter().map(|s| normalize_skill(s)).collect();
    if let Some(jd) = job_description {
        terms.extend(extract_skills(jd));
        terms.extend(keyword_terms(jd));
    }

    let mut seen = HashSet::new();
    let mut signals = SkillSignals::default();
    for term in terms.into_iter().filter(|t| !t.is_empty()) {
        if !seen.insert(term.clone()) {
            continue;
        }
        match classify(&term) {
            Some(Signal::Coding) => signals.coding += 1,
            Some(Signal::CaseStudy) => signals.case_study += 1,
            Some(Signal::Sql) => signals.sql += 1,
            None => continue,
        }
        signals.total += 1;
    }
    signals
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(xs: &[&str]) -> Vec<String> {
        xs.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_sql_keywords_win_over_taxonomy() {
        // "sql" is databases+analytics in the taxonomy, but the keyword list decides first
        let s = count_signals(&strings(&["SQL", "Tableau"]), None);
        assert_eq!(s.sql, 2);
        assert_eq!(s.total, 2);
    }

    #[test]
    fn test_taxonomy_fallback_classifies_languages() {
        let s = count_signals(&strings(&["Rust", "React", "Kubernetes"]), None);
        assert_eq!(s.coding, 3);
        assert_eq!(s.case_study, 0);
    }

    #[test]
    fn test_case_keywords() {
        let s = count_signals(
            &strings(&["Pricing strategy", "market sizing", "stakeholder management"]),
            None,
        );
        assert_eq!(s.case_study, 3);
    }

    #[test]
    fn test_unknown_and_duplicate_terms_ignored() {
        let s = count_signals(&strings(&["python", "Python ", "juggling", ""]), None);
        assert_eq!(s.total, 1);
        assert_eq!(s.coding, 1);
    }

    #[test]
    fn test_job_description_adds_signals() {
        let s = count_signals(
            &strings(&["python"]),
            Some("We use Docker and Kubernetes; Python is a plus."),
        );
        // python from skills, docker and kubernetes from the JD; the JD python is a duplicate
        assert_eq!(s.coding, 3);
        assert_eq!(s.total, 3);
    }

    #[test]
    fn test_job_description_keyword_lists_count() {
        let s = count_signals(
            &[],
            Some("Own pricing and growth strategy; build BigQuery and Looker dashboards"),
        );
        assert_eq!(s.sql, 3);
        assert_eq!(s.case_study, 3);
        assert_eq!(s.coding, 0);
        assert_eq!(s.total, 6);
    }

    #[test]
    fn test_job_description_keyword_deduplicated_with_skills() {
        let s = count_signals(&strings(&["SQL", "API"]), Some("Strong SQL and REST API skills"));
        // sql and api already came from the skills list
        assert_eq!(s.sql, 1);
        assert_eq!(s.coding, 1);
        assert_eq!(s.total, 2);
    }

    #[test]
    fn test_ratios() {
        let s = SkillSignals {
            coding: 3,
            case_study: 1,
            sql: 0,
            total: 4,
        };
        assert!((s.coding_ratio() - 0.75).abs() < f32::EPSILON);
        assert!((s.max_share() - 0.75).abs() < f32::EPSILON);
        assert_eq!(SkillSignals::default().coding_ratio(), 0.0);
    }
}
