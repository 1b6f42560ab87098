//! Round relevance scoring.
//!
//! Each round type carries a priority-ordered category list. A category at
//! index `i` of a list of length `n` weighs `n - i`, so the first category
//! dominates. A skill's score for a round is the sum of the weights of every
//! category it belongs to.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use super::extract::find_term;
use super::tables::{lookup, round_priorities, EXACT_ONLY, SKILL_CATEGORIES};
use super::{normalize_skill, RoundType, SkillCategory};

/// A skill ranked for a specific round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredSkill {
    pub skill: String,
    pub score: u32,
    pub categories: Vec<SkillCategory>,
    /// Position in the caller's list; the tie-breaker for equal scores.
    pub original_index: usize,
}

/// Maps a free-text skill to its categories.
///
/// Exact table hits win. Otherwise every table keyword that appears as a whole
/// word inside the skill phrase contributes, e.g. "advanced react hooks".
pub fn categorize_skill(skill: &str) -> Vec<SkillCategory> {
    let normalized = normalize_skill(skill);
    if normalized.is_empty() {
        return Vec::new();
    }
    if let Some(cats) = lookup(&normalized) {
        return cats.to_vec();
    }

    let mut out = Vec::new();
    for (key, cats) in SKILL_CATEGORIES {
        if EXACT_ONLY.contains(key) || find_term(&normalized, key).is_none() {
            continue;
        }
        for cat in *cats {
            if !out.contains(cat) {
                out.push(*cat);
            }
        }
    }
    out
}

pub fn category_weight(round: RoundType, category: SkillCategory) -> u32 {
    let prios = round_priorities(round);
    prios
        .iter()
        .position(|c| *c == category)
        .map_or(0, |i| (prios.len() - i) as u32)
}

pub fn score_categories(round: RoundType, categories: &[SkillCategory]) -> u32 {
    categories.iter().map(|c| category_weight(round, *c)).sum()
}

pub fn score_skill_for_round(skill: &str, round: RoundType) -> u32 {
    score_categories(round, &categorize_skill(skill))
}

/// Returns the `limit` skills most relevant to `round`.
///
/// Blank entries and normalized duplicates are dropped (first occurrence
/// wins). The sort is stable, so equal scores keep input order. When nothing
/// scores above zero, the first `limit` skills come back unranked so callers
/// always have something to focus on.
pub fn get_skills_for_round(skills: &[String], round: RoundType, limit: usize) -> Vec<ScoredSkill> {
    let mut seen = HashSet::new();
    let candidates: Vec<ScoredSkill> = skills
        .iter()
        .enumerate()
        .filter(|(_, s)| seen.insert(normalize_skill(s)) && !s.trim().is_empty())
        .map(|(i, s)| {
            let categories = categorize_skill(s);
            ScoredSkill {
                skill: s.trim().to_string(),
                score: score_categories(round, &categories),
                categories,
                original_index: i,
            }
        })
        .collect();

    let mut relevant: Vec<ScoredSkill> =
        candidates.iter().filter(|s| s.score > 0).cloned().collect();

    if relevant.is_empty() {
        return candidates.into_iter().take(limit).collect();
    }

    relevant.sort_by(|a, b| b.score.cmp(&a.score));
    relevant.truncate(limit);
    relevant
}

/// Groups skills by category. Skills in several categories appear under each.
/// Unknown skills are omitted.
pub fn group_by_category(skills: &[String]) -> BTreeMap<SkillCategory, Vec<String>> {
    let mut groups: BTreeMap<SkillCategory, Vec<String>> = BTreeMap::new();
    for skill in skills {
        for cat in categorize_skill(skill) {
            let bucket = groups.entry(cat).or_default();
            if !bucket.contains(skill) {
                bucket.push(skill.clone());
            }
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(xs: &[&str]) -> Vec<String> {
        xs.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_categorize_exact_hit() {
        assert_eq!(categorize_skill("React"), vec![SkillCategory::Frontend]);
        assert_eq!(
            categorize_skill("Go"),
            vec![SkillCategory::Programming, SkillCategory::Backend]
        );
    }

    #[test]
    fn test_categorize_phrase_uses_whole_words() {
        let cats = categorize_skill("Advanced React hooks and Docker");
        assert!(cats.contains(&SkillCategory::Frontend));
        assert!(cats.contains(&SkillCategory::CloudDevops));
    }

    #[test]
    fn test_categorize_phrase_ignores_exact_only_terms() {
        // "go" inside a phrase must not make this a programming skill
        assert!(categorize_skill("go getter attitude").is_empty());
    }

    #[test]
    fn test_categorize_unknown_and_blank() {
        assert!(categorize_skill("underwater basket weaving").is_empty());
        assert!(categorize_skill("   ").is_empty());
    }

    #[test]
    fn test_category_weight_first_priority_is_highest() {
        // coding: programming(6) dsa(5) backend(4) frontend(3) databases(2) testing(1)
        assert_eq!(category_weight(RoundType::Coding, SkillCategory::Programming), 6);
        assert_eq!(category_weight(RoundType::Coding, SkillCategory::TestingQuality), 1);
        assert_eq!(category_weight(RoundType::Coding, SkillCategory::Marketing), 0);
    }

    #[test]
    fn test_score_sums_all_categories() {
        // python: programming(6) + data_analytics(0) + ml(0) in coding
        assert_eq!(score_skill_for_round("python", RoundType::Coding), 6);
        // c++: programming(6) + dsa(5)
        assert_eq!(score_skill_for_round("C++", RoundType::Coding), 11);
    }

    #[test]
    fn test_get_skills_for_round_orders_by_score() {
        let skills = strings(&["communication", "React", "C++", "Excel"]);
        let top = get_skills_for_round(&skills, RoundType::Coding, 5);
        let names: Vec<_> = top.iter().map(|s| s.skill.as_str()).collect();
        assert_eq!(names, vec!["C++", "React"]);
    }

    #[test]
    fn test_get_skills_for_round_stable_tie_break() {
        // java and rust both programming+backend → equal score
        let skills = strings(&["Rust", "leadership", "Java"]);
        let top = get_skills_for_round(&skills, RoundType::Coding, 2);
        assert_eq!(top[0].skill, "Rust");
        assert_eq!(top[1].skill, "Java");
        assert_eq!(top[0].score, top[1].score);
        assert_eq!(top[1].original_index, 2);
    }

    #[test]
    fn test_get_skills_for_round_respects_limit() {
        let skills = strings(&["python", "java", "rust", "go", "kotlin"]);
        assert_eq!(get_skills_for_round(&skills, RoundType::Coding, 3).len(), 3);
        assert!(get_skills_for_round(&skills, RoundType::Coding, 0).is_empty());
    }

    #[test]
    fn test_get_skills_for_round_behavioral_prefers_soft_skills() {
        let skills = strings(&["Kubernetes", "teamwork", "Leadership", "communication"]);
        let top = get_skills_for_round(&skills, RoundType::Behavioral, 3);
        let names: Vec<_> = top.iter().map(|s| s.skill.as_str()).collect();
        assert_eq!(names, vec!["communication", "Leadership", "teamwork"]);
    }

    #[test]
    fn test_get_skills_for_round_dedups_and_skips_blank() {
        let skills = strings(&["SQL", " ", "sql", "Tableau"]);
        let top = get_skills_for_round(&skills, RoundType::CaseStudy, 10);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].skill, "SQL");
    }

    #[test]
    fn test_get_skills_for_round_dedups_trailing_punctuation() {
        let top = get_skills_for_round(&strings(&["React", "React ."]), RoundType::Coding, 5);
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].skill, "React");
        assert_eq!(categorize_skill("React ."), vec![SkillCategory::Frontend]);
    }

    #[test]
    fn test_get_skills_for_round_falls_back_to_input_order() {
        let skills = strings(&["basket weaving", "", "juggling", "origami"]);
        let top = get_skills_for_round(&skills, RoundType::Technical, 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].skill, "basket weaving");
        assert_eq!(top[1].skill, "juggling");
        assert!(top.iter().all(|s| s.score == 0));
    }

    #[test]
    fn test_group_by_category() {
        let groups = group_by_category(&strings(&["Python", "React", "unknown thing"]));
        assert_eq!(groups[&SkillCategory::Frontend], vec!["React".to_string()]);
        assert_eq!(groups[&SkillCategory::Programming], vec!["Python".to_string()]);
        assert!(groups.values().all(|v| !v.contains(&"unknown thing".to_string())));
    }
}
