//! TF-IDF vectorizer and cosine similarity.
//!
//! Tokens are runs of two or more word characters, lower-cased, with English
//! stop words removed. Weights are raw counts times the smoothed IDF
//! `ln((1 + n) / (1 + df)) + 1`; every row is L2-normalised.

use std::collections::{BTreeMap, HashMap};

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::analysis::stopwords::is_stop_word;

static TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\w\w+\b").expect("valid token regex"));

#[derive(Debug, Error, PartialEq)]
pub enum TfidfError {
    #[error("empty vocabulary; documents may only contain stop words")]
    EmptyVocabulary,

    #[error("after pruning, no terms remain; try a lower min_df or a higher max_df")]
    NoTermsRemain,
}

#[derive(Debug, Clone)]
pub struct TfidfConfig {
    /// Keep only the N terms with the highest corpus frequency.
    pub max_features: Option<usize>,
    /// Drop terms found in fewer documents than this.
    pub min_df: usize,
    /// Drop terms found in more than this proportion of documents.
    pub max_df: f64,
}

impl Default for TfidfConfig {
    fn default() -> Self {
        Self {
            max_features: None,
            min_df: 1,
            max_df: 1.0,
        }
    }
}

/// Fitted document-term matrix. Row `i` is the normalised vector of document `i`.
#[derive(Debug, Clone)]
pub struct TfidfMatrix {
    pub vocabulary: Vec<String>,
    pub rows: Vec<Vec<f64>>,
}

impl TfidfMatrix {
    pub fn cosine(&self, a: usize, b: usize) -> f64 {
        cosine_similarity(&self.rows[a], &self.rows[b])
    }
}

/// Learns the vocabulary and IDF weights from `documents` and returns their vectors.
pub fn fit_transform(documents: &[&str], config: &TfidfConfig) -> Result<TfidfMatrix, TfidfError> {
    let counts: Vec<HashMap<String, usize>> = documents.iter().map(|d| term_counts(d)).collect();

    // BTreeMap keeps the vocabulary alphabetical, which also breaks max_features ties.
    let mut doc_freq: BTreeMap<&str, usize> = BTreeMap::new();
    let mut corpus_freq: HashMap<&str, usize> = HashMap::new();
    for doc in &counts {
        for (term, count) in doc {
            *doc_freq.entry(term.as_str()).or_insert(0) += 1;
            *corpus_freq.entry(term.as_str()).or_insert(0) += count;
        }
    }

    if doc_freq.is_empty() {
        return Err(TfidfError::EmptyVocabulary);
    }

    let n_docs = documents.len() as f64;
    let max_doc_count = config.max_df * n_docs;
    let mut vocabulary: Vec<&str> = doc_freq
        .iter()
        .filter(|(_, df)| **df >= config.min_df && **df as f64 <= max_doc_count)
        .map(|(term, _)| *term)
        .collect();

    if let Some(limit) = config.max_features {
        // Stable sort: equal frequencies stay alphabetical.
        vocabulary.sort_by(|a, b| corpus_freq[b].cmp(&corpus_freq[a]));
        vocabulary.truncate(limit);
        vocabulary.sort_unstable();
    }

    if vocabulary.is_empty() {
        return Err(TfidfError::NoTermsRemain);
    }

    let idf: Vec<f64> = vocabulary
        .iter()
        .map(|term| ((1.0 + n_docs) / (1.0 + doc_freq[term] as f64)).ln() + 1.0)
        .collect();

    let rows = counts
        .iter()
        .map(|doc| {
            let mut row: Vec<f64> = vocabulary
                .iter()
                .zip(&idf)
                .map(|(term, weight)| doc.get(*term).copied().unwrap_or(0) as f64 * weight)
                .collect();
            l2_normalize(&mut row);
            row
        })
        .collect();

    Ok(TfidfMatrix {
        vocabulary: vocabulary.into_iter().map(String::from).collect(),
        rows,
    })
}

/// Cosine of the angle between two vectors; 0.0 when either is all zeros.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b = b.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}

fn term_counts(document: &str) -> HashMap<String, usize> {
    let lower = document.to_lowercase();
    let mut counts = HashMap::new();
    for token in TOKEN.find_iter(&lower) {
        let term = token.as_str();
        if is_stop_word(term) {
            continue;
        }
        *counts.entry(term.to_string()).or_insert(0) += 1;
    }
    counts
}

fn l2_normalize(row: &mut [f64]) {
    let norm = row.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm > 0.0 {
        row.iter_mut().for_each(|x| *x /= norm);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_documents_have_similarity_one() {
        let doc = "Rust engineer building distributed systems";
        let matrix = fit_transform(&[doc, doc], &TfidfConfig::default()).unwrap();
        assert!((matrix.cosine(0, 1) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_disjoint_documents_have_similarity_zero() {
        let matrix = fit_transform(
            &["rust kubernetes terraform", "painting sculpture pottery"],
            &TfidfConfig::default(),
        )
        .unwrap();
        assert_eq!(matrix.cosine(0, 1), 0.0);
    }

    #[test]
    fn test_partial_overlap_is_between_zero_and_one() {
        let matrix = fit_transform(
            &["rust engineer kubernetes", "rust engineer python"],
            &TfidfConfig::default(),
        )
        .unwrap();
        let sim = matrix.cosine(0, 1);
        assert!(sim > 0.0 && sim < 1.0, "sim = {sim}");
    }

    #[test]
    fn test_stop_words_only_is_empty_vocabulary() {
        let result = fit_transform(&["the and of", "to be or not"], &TfidfConfig::default());
        assert_eq!(result.unwrap_err(), TfidfError::EmptyVocabulary);
    }

    #[test]
    fn test_max_df_prunes_shared_terms() {
        let config = TfidfConfig {
            max_df: 0.95,
            ..TfidfConfig::default()
        };
        let result = fit_transform(&["rust python", "rust python"], &config);
        assert_eq!(result.unwrap_err(), TfidfError::NoTermsRemain);
    }

    #[test]
    fn test_max_features_keeps_most_frequent_terms() {
        let config = TfidfConfig {
            max_features: Some(2),
            ..TfidfConfig::default()
        };
        let matrix = fit_transform(&["alpha alpha alpha beta beta gamma", "delta"], &config).unwrap();
        assert_eq!(matrix.vocabulary, vec!["alpha", "beta"]);
    }

    #[test]
    fn test_max_features_ties_break_alphabetically() {
        let config = TfidfConfig {
            max_features: Some(2),
            ..TfidfConfig::default()
        };
        // zeta, alpha and omega all appear once; only one fits after "mid".
        let matrix = fit_transform(&["zeta alpha mid mid", "omega"], &config).unwrap();
        assert_eq!(matrix.vocabulary, vec!["alpha", "mid"]);
    }

    #[test]
    fn test_single_character_tokens_ignored() {
        let matrix = fit_transform(&["a b c rust", "x y z rust"], &TfidfConfig::default()).unwrap();
        assert_eq!(matrix.vocabulary, vec!["rust"]);
    }

    #[test]
    fn test_rows_are_unit_length() {
        let matrix =
            fit_transform(&["rust rust python", "go java"], &TfidfConfig::default()).unwrap();
        for row in &matrix.rows {
            let norm: f64 = row.iter().map(|x| x * x).sum::<f64>().sqrt();
            assert!((norm - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_cosine_of_zero_vector() {
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 0.0]), 0.0);
    }
}
