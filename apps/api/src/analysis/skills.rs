//! Dictionary + pattern skill extraction.

use std::collections::{BTreeSet, HashSet};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::analysis::dictionaries::{SOFT_SKILLS, TECHNICAL_SKILLS, TOOLS};

/// Skills found in one document. Every list is sorted and deduplicated;
/// entries are title-cased (`"Machine Learning"`, `"Ci/Cd"`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillSet {
    pub all_skills: Vec<String>,
    pub technical_skills: Vec<String>,
    pub soft_skills: Vec<String>,
    pub tools: Vec<String>,
}

impl SkillSet {
    /// Lower-cased view of `all_skills`, for case-insensitive comparisons.
    pub fn all_lowercase(&self) -> HashSet<String> {
        self.all_skills.iter().map(|s| s.to_lowercase()).collect()
    }

    pub fn technical_lowercase(&self) -> HashSet<String> {
        self.technical_skills.iter().map(|s| s.to_lowercase()).collect()
    }
}

/// General engineering concepts that never appear verbatim in the dictionaries.
static PROGRAMMING_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"\b(object[- ]oriented programming|oop)\b",
        r"\b(functional programming)\b",
        r"\b(data structures?)\b",
        r"\b(algorithms?)\b",
        r"\b(design patterns?)\b",
        r"\b(api development)\b",
        r"\b(database design)\b",
        r"\b(ui/ux)\b",
        r"\b(front[- ]end|frontend)\b",
        r"\b(back[- ]end|backend)\b",
        r"\b(full[- ]stack|fullstack)\b",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid programming pattern"))
    .collect()
});

pub fn extract_skills(text: &str) -> SkillSet {
    if text.trim().is_empty() {
        return SkillSet::default();
    }

    let text_lower = text.to_lowercase();

    let mut technical = find_terms(&text_lower, TECHNICAL_SKILLS);
    let soft = find_terms(&text_lower, SOFT_SKILLS);
    let tools = find_terms(&text_lower, TOOLS);

    for pattern in PROGRAMMING_PATTERNS.iter() {
        for caps in pattern.captures_iter(&text_lower) {
            if let Some(m) = caps.get(1) {
                technical.insert(title_case(m.as_str()));
            }
        }
    }

    let all: BTreeSet<String> = technical
        .iter()
        .chain(soft.iter())
        .chain(tools.iter())
        .cloned()
        .collect();

    SkillSet {
        all_skills: all.into_iter().collect(),
        technical_skills: technical.into_iter().collect(),
        soft_skills: soft.into_iter().collect(),
        tools: tools.into_iter().collect(),
    }
}

fn find_terms(text_lower: &str, dictionary: &[&str]) -> BTreeSet<String> {
    dictionary
        .iter()
        .filter(|term| contains_term(text_lower, term))
        .map(|term| title_case(term))
        .collect()
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Byte offsets of every occurrence of `term` not glued to a neighbouring
/// word character. Terms ending in symbols (`c++`, `c#`) therefore match as
/// standalone tokens.
fn term_positions<'a>(haystack: &'a str, term: &'a str) -> impl Iterator<Item = usize> + 'a {
    haystack.match_indices(term).filter_map(move |(start, _)| {
        let before = haystack[..start].chars().next_back();
        let after = haystack[start + term.len()..].chars().next();
        let bounded = !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char);
        bounded.then_some(start)
    })
}

pub(crate) fn contains_term(haystack: &str, term: &str) -> bool {
    term_positions(haystack, term).next().is_some()
}

pub(crate) fn count_term(haystack: &str, term: &str) -> usize {
    term_positions(haystack, term).count()
}

/// Upper-cases a letter that follows a non-letter, lower-cases the rest.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_letter = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_letter = true;
        } else {
            out.push(c);
            prev_letter = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_has_no_skills() {
        assert_eq!(extract_skills(""), SkillSet::default());
        assert_eq!(extract_skills("   "), SkillSet::default());
    }

    #[test]
    fn test_categorizes_skills() {
        let skills = extract_skills(
            "Python developer with Docker, strong leadership and communication, uses Postman daily",
        );
        assert!(skills.technical_skills.contains(&"Python".to_string()));
        assert!(skills.technical_skills.contains(&"Docker".to_string()));
        assert_eq!(skills.soft_skills, vec!["Communication", "Leadership"]);
        assert_eq!(skills.tools, vec!["Postman"]);
        assert_eq!(
            skills.all_skills.len(),
            skills.technical_skills.len() + skills.soft_skills.len() + skills.tools.len()
        );
    }

    #[test]
    fn test_word_boundaries_prevent_partial_hits() {
        // "java" inside "javascript" and "go" inside "google" must not count
        let skills = extract_skills("javascript and google");
        assert!(skills.technical_skills.contains(&"Javascript".to_string()));
        assert!(!skills.technical_skills.contains(&"Java".to_string()));
        assert!(!skills.technical_skills.contains(&"Go".to_string()));
    }

    #[test]
    fn test_symbol_terminated_skills_match() {
        let skills = extract_skills("Wrote C++ and C# services with CI/CD pipelines");
        assert!(skills.technical_skills.contains(&"C++".to_string()));
        assert!(skills.technical_skills.contains(&"C#".to_string()));
        assert!(skills.technical_skills.contains(&"Ci/Cd".to_string()));
    }

    #[test]
    fn test_multi_word_skills() {
        let skills = extract_skills("Applied machine learning and problem solving with Power BI");
        assert!(skills.technical_skills.contains(&"Machine Learning".to_string()));
        assert!(skills.soft_skills.contains(&"Problem Solving".to_string()));
        assert!(skills.tools.contains(&"Power Bi".to_string()));
    }

    #[test]
    fn test_programming_patterns_are_technical() {
        let skills = extract_skills("Full-stack work on data structures and object oriented programming");
        assert!(skills.technical_skills.contains(&"Full-Stack".to_string()));
        assert!(skills.technical_skills.contains(&"Data Structures".to_string()));
        assert!(skills
            .technical_skills
            .contains(&"Object Oriented Programming".to_string()));
    }

    #[test]
    fn test_lists_are_sorted_and_unique() {
        let skills = extract_skills("rust rust python aws rust");
        assert_eq!(skills.technical_skills, vec!["Aws", "Python", "Rust"]);
    }

    #[test]
    fn test_count_term_counts_bounded_occurrences() {
        assert_eq!(count_term("led the team, led again; misled", "led"), 2);
    }

    #[test]
    fn test_title_case_matches_python_semantics() {
        assert_eq!(title_case("scikit-learn"), "Scikit-Learn");
        assert_eq!(title_case("asp.net"), "Asp.Net");
        assert_eq!(title_case("neo4j"), "Neo4J");
        assert_eq!(title_case("ui/ux"), "Ui/Ux");
    }
}
