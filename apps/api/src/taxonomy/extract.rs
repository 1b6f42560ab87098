//! Whole-word matching of taxonomy keywords inside free text.

use std::collections::HashSet;

use super::tables::{EXACT_ONLY, SKILL_CATEGORIES};

/// Byte offset of the first whole-word occurrence of `term` in `haystack`.
///
/// Both inputs must already be lowercase. A match is whole-word when the
/// characters on either side are not alphanumeric.
pub fn find_term(haystack: &str, term: &str) -> Option<usize> {
    if term.is_empty() {
        return None;
    }
    let mut from = 0;
    while let Some(rel) = haystack[from..].find(term) {
        let start = from + rel;
        let end = start + term.len();
        let before_ok = haystack[..start]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric());
        let after_ok = haystack[end..]
            .chars()
            .next()
            .map_or(true, |c| !c.is_alphanumeric());
        if before_ok && after_ok {
            return Some(start);
        }
        // advance past the first char of this candidate
        from = start + haystack[start..].chars().next().map_or(1, char::len_utf8);
    }
    None
}

/// Extracts taxonomy skills mentioned in `text`, ordered by first occurrence.
///
/// Ambiguous short keywords (`go`, `r`, ...) are ignored here since prose
/// produces too many false hits for them. When two keywords start at the same
/// offset the longer one is listed first (`react native` before `react`).
pub fn extract_skills(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    let mut hits: Vec<(usize, &'static str)> = SKILL_CATEGORIES
        .iter()
        .filter(|(key, _)| !EXACT_ONLY.contains(key))
        .filter_map(|(key, _)| find_term(&lower, key).map(|pos| (pos, *key)))
        .collect();

    hits.sort_by(|a, b| a.0.cmp(&b.0).then(b.1.len().cmp(&a.1.len())));

    let mut seen = HashSet::new();
    hits.into_iter()
        .filter(|(_, key)| seen.insert(*key))
        .map(|(_, key)| key.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_term_respects_word_boundaries() {
        assert_eq!(find_term("java developer", "java"), Some(0));
        assert_eq!(find_term("javascript developer", "java"), None);
        assert_eq!(find_term("senior c++ engineer", "c++"), Some(7));
        assert_eq!(find_term("used react.", "react"), Some(5));
    }

    #[test]
    fn test_find_term_skips_embedded_then_finds_later() {
        assert_eq!(find_term("javascript and java", "java"), Some(15));
    }

    #[test]
    fn test_extract_skills_orders_by_first_occurrence() {
        let text =
            "Built Kubernetes operators in Python. Led cross-functional teams; Python again.";
        let skills = extract_skills(text);
        assert_eq!(skills, vec!["kubernetes", "python", "cross-functional"]);
    }

    #[test]
    fn test_extract_skills_ignores_ambiguous_short_terms() {
        let skills = extract_skills("Ready to go and rest. R is a letter.");
        assert!(skills.is_empty(), "{skills:?}");
    }

    #[test]
    fn test_extract_skills_prefers_longer_match_at_same_offset() {
        let skills = extract_skills("React Native apps");
        assert_eq!(skills[0], "react native");
        assert!(skills.contains(&"react".to_string()));
    }

    #[test]
    fn test_extract_skills_handles_unicode_text() {
        let skills = extract_skills("Développeur — SQL et Docker ✓");
        assert_eq!(skills, vec!["sql", "docker"]);
    }
}
