use std::collections::HashMap;

use crate::analysis::dictionaries::ACTION_VERBS;
use crate::analysis::skills::count_term;
use crate::analysis::stopwords::is_stop_word;

const MAX_KEYWORD_SCAN_CHARS: usize = 100_000;
const TOP_KEYWORDS: usize = 50;

/// Mines noun-like keywords: the 50 most frequent content words.
///
/// A token is kept when it starts with a letter, is longer than two chars,
/// and is neither a stop word, an `-ly` adverb nor an action verb. Ties keep
/// first-occurrence order.
pub fn extract_keywords(text: &str) -> Vec<String> {
    if text.trim().chars().count() < 10 {
        return Vec::new();
    }

    let scanned = match text.char_indices().nth(MAX_KEYWORD_SCAN_CHARS) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    };

    // keyword -> (frequency, first position)
    let mut counts: HashMap<String, (usize, usize)> = HashMap::new();
    for (position, token) in tokenize(scanned).enumerate() {
        if !is_keyword_candidate(&token) {
            continue;
        }
        counts.entry(token).or_insert((0, position)).0 += 1;
    }

    let mut ranked: Vec<(String, usize, usize)> = counts
        .into_iter()
        .map(|(word, (freq, first))| (word, freq, first))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));

    ranked
        .into_iter()
        .take(TOP_KEYWORDS)
        .map(|(word, _, _)| word)
        .collect()
}

/// Total occurrences of the strong resume action verbs.
pub fn count_action_verbs(text: &str) -> usize {
    let text_lower = text.to_lowercase();
    ACTION_VERBS
        .iter()
        .map(|verb| count_term(&text_lower, verb))
        .sum()
}

fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !(c.is_alphanumeric() || c == '+' || c == '#'))
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
}

fn is_keyword_candidate(token: &str) -> bool {
    token.chars().next().is_some_and(char::is_alphabetic)
        && token.chars().count() > 2
        && !is_stop_word(token)
        && !token.ends_with("ly")
        && !ACTION_VERBS.contains(&token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_has_no_keywords() {
        assert!(extract_keywords("rust").is_empty());
        assert!(extract_keywords("         ").is_empty());
    }

    #[test]
    fn test_keywords_ranked_by_frequency() {
        let text = "Kubernetes clusters. Kubernetes operators. Terraform modules for Kubernetes and Terraform.";
        let keywords = extract_keywords(text);
        assert_eq!(keywords[0], "kubernetes");
        assert_eq!(keywords[1], "terraform");
    }

    #[test]
    fn test_filters_stop_words_verbs_and_adverbs() {
        let keywords = extract_keywords("We quickly developed the platform with 2019 tooling");
        assert_eq!(keywords, vec!["platform", "tooling"]);
    }

    #[test]
    fn test_ties_keep_first_occurrence_order() {
        let keywords = extract_keywords("zebra apple mango zebra apple mango");
        assert_eq!(keywords, vec!["zebra", "apple", "mango"]);
    }

    #[test]
    fn test_caps_at_fifty_keywords() {
        let text: String = (0..80).map(|i| format!("keyword{i} ")).collect();
        assert_eq!(extract_keywords(&text).len(), TOP_KEYWORDS);
    }

    #[test]
    fn test_count_action_verbs() {
        let text = "Developed APIs. Led migrations. Led hiring. Reduced costs. Misled nobody.";
        assert_eq!(count_action_verbs(text), 4);
    }

    #[test]
    fn test_count_action_verbs_none() {
        assert_eq!(count_action_verbs("responsible for things"), 0);
    }
}
