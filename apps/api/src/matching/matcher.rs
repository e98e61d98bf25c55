//! Resume ↔ job matching.
//!
//! match = (0.40 × skill overlap + 0.30 × technical overlap + 0.30 × TF-IDF cosine) × 100

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::analysis::round2;
use crate::analysis::skills::{extract_skills, SkillSet};
use crate::matching::tfidf::{fit_transform, TfidfConfig};

const WEIGHT_SKILLS: f64 = 0.40;
const WEIGHT_TECHNICAL: f64 = 0.30;
const WEIGHT_COSINE: f64 = 0.30;

/// Used for any term that cannot be computed (no job skills, too-short text, empty vocabulary).
const NEUTRAL_RATE: f64 = 0.5;
/// Both texts must be longer than this (trimmed) for a TF-IDF comparison.
const MIN_SIMILARITY_CHARS: usize = 10;
const MAX_TFIDF_FEATURES: usize = 500;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub match_percentage: f64,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub matched_technical_skills: Vec<String>,
    pub missing_technical_skills: Vec<String>,
    /// TF-IDF cosine similarity scaled to 0–100.
    pub cosine_similarity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedResume {
    pub index: usize,
    pub match_percentage: f64,
}

pub fn calculate_match_score(resume_text: &str, job_description: &str) -> MatchResult {
    calculate_match_with_skills(resume_text, &extract_skills(resume_text), job_description)
}

/// Like `calculate_match_score`, for callers that already extracted the resume's skills.
pub fn calculate_match_with_skills(
    resume_text: &str,
    resume_skills: &SkillSet,
    job_description: &str,
) -> MatchResult {
    let job_skills = extract_skills(job_description);

    let resume_all = resume_skills.all_lowercase();
    let job_all = job_skills.all_lowercase();
    let resume_technical = resume_skills.technical_lowercase();
    let job_technical = job_skills.technical_lowercase();

    let matched_skills = sorted(resume_all.intersection(&job_all));
    let missing_skills = sorted(job_all.difference(&resume_all));
    let matched_technical = sorted(resume_technical.intersection(&job_technical));
    let missing_technical = sorted(job_technical.difference(&resume_technical));

    let skill_rate = overlap_rate(matched_skills.len(), job_all.len());
    let technical_rate = overlap_rate(matched_technical.len(), job_technical.len());
    let cosine = text_similarity(resume_text, job_description);

    let final_match =
        (skill_rate * WEIGHT_SKILLS + technical_rate * WEIGHT_TECHNICAL + cosine * WEIGHT_COSINE)
            * 100.0;

    MatchResult {
        match_percentage: round2(final_match),
        matched_skills,
        missing_skills,
        matched_technical_skills: matched_technical,
        missing_technical_skills: missing_technical,
        cosine_similarity: round2(cosine * 100.0),
    }
}

/// Scores every resume against one job, best first. Equal scores keep submission order.
pub fn rank_resumes(resumes: &[String], job_description: &str) -> Vec<RankedResume> {
    let mut ranked: Vec<RankedResume> = resumes
        .iter()
        .enumerate()
        .map(|(index, resume)| RankedResume {
            index,
            match_percentage: calculate_match_score(resume, job_description).match_percentage,
        })
        .collect();

    ranked.sort_by(|a, b| b.match_percentage.total_cmp(&a.match_percentage));
    ranked
}

pub fn match_interpretation(score: f64) -> &'static str {
    if score >= 80.0 {
        "Excellent Match - You're a strong candidate for this position"
    } else if score >= 70.0 {
        "Good Match - Your profile aligns well with the job requirements"
    } else if score >= 60.0 {
        "Fair Match - You meet some of the job requirements"
    } else if score >= 50.0 {
        "Moderate Match - Consider developing additional skills"
    } else {
        "Low Match - Significant skill gap exists for this position"
    }
}

fn overlap_rate(matched: usize, required: usize) -> f64 {
    if required == 0 {
        NEUTRAL_RATE
    } else {
        matched as f64 / required as f64
    }
}

/// TF-IDF cosine between the two texts, or the neutral rate when it cannot be computed.
fn text_similarity(resume_text: &str, job_description: &str) -> f64 {
    if resume_text.trim().chars().count() <= MIN_SIMILARITY_CHARS
        || job_description.trim().chars().count() <= MIN_SIMILARITY_CHARS
    {
        return NEUTRAL_RATE;
    }

    // With a two-document corpus any max_df below 1.0 prunes every shared term.
    let config = TfidfConfig {
        max_features: Some(MAX_TFIDF_FEATURES),
        min_df: 1,
        max_df: 1.0,
    };

    match fit_transform(&[resume_text, job_description], &config) {
        Ok(matrix) => matrix.cosine(0, 1),
        Err(e) => {
            warn!("TF-IDF similarity unavailable: {e}");
            NEUTRAL_RATE
        }
    }
}

fn sorted<'a>(items: impl Iterator<Item = &'a String>) -> Vec<String> {
    let mut out: Vec<String> = items.cloned().collect();
    out.sort();
    out
}
