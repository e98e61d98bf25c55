//! ATS scoring: five weighted heuristics over resume text.
//!
//! | component       | weight |
//! |-----------------|--------|
//! | keyword_density | 0.40   |
//! | formatting      | 0.20   |
//! | action_verbs    | 0.15   |
//! | experience      | 0.15   |
//! | skill_match     | 0.10   |

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::analysis::dictionaries::{EXPERIENCE_KEYWORDS, RESUME_SECTIONS};
use crate::analysis::keywords::{count_action_verbs, extract_keywords};
use crate::analysis::round2;
use crate::analysis::skills::{extract_skills, SkillSet};

const WEIGHT_KEYWORD_DENSITY: f64 = 0.40;
const WEIGHT_FORMATTING: f64 = 0.20;
const WEIGHT_ACTION_VERBS: f64 = 0.15;
const WEIGHT_EXPERIENCE: f64 = 0.15;
const WEIGHT_SKILL_MATCH: f64 = 0.10;

/// Skill-match score used when there is no job to compare against.
const NEUTRAL_SKILL_MATCH: f64 = 50.0;

const BULLET_INDICATORS: &[char] = &['•', '●', '▪', '■', '-', '*'];

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}\b").expect("valid email regex")
});

static PHONE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\d{3}[-.]?\d{3}[-.]?\d{4}\b").expect("valid phone regex"));

// Matched against lower-cased text.
static DATE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"\b(jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\s+\d{4}\b",
        r"\b\d{4}\s*[-–]\s*\d{4}\b",
        r"\b\d{4}\s*[-–]\s*present\b",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid date regex"))
    .collect()
});

static QUANTIFIER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\d+[%$kKmM]?\b").expect("valid number regex"));

/// Overall ATS score plus its five components, each 0–100 and rounded to 2 dp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtsBreakdown {
    pub overall_score: f64,
    pub keyword_density: f64,
    pub formatting: f64,
    pub action_verbs: f64,
    pub experience: f64,
    pub skill_match: f64,
}

/// Scores a resume; `job_description` may be empty.
pub fn calculate_ats_score(resume_text: &str, job_description: &str) -> AtsBreakdown {
    let skills = extract_skills(resume_text);
    score_with_skills(resume_text, &skills, job_description)
}

/// Same as [`calculate_ats_score`] for callers that already extracted the resume's skills.
pub fn score_with_skills(
    resume_text: &str,
    skills: &SkillSet,
    job_description: &str,
) -> AtsBreakdown {
    let text_lower = resume_text.to_lowercase();

    let keyword_density = keyword_density_score(resume_text, &text_lower, skills);
    let formatting = formatting_score(resume_text, &text_lower);
    let action_verbs = capped_ratio(count_action_verbs(resume_text) as f64, 15.0);
    let experience = experience_score(resume_text, &text_lower);
    let skill_match = skill_match_score(skills, job_description);

    let overall = keyword_density * WEIGHT_KEYWORD_DENSITY
        + formatting * WEIGHT_FORMATTING
        + action_verbs * WEIGHT_ACTION_VERBS
        + experience * WEIGHT_EXPERIENCE
        + skill_match * WEIGHT_SKILL_MATCH;

    AtsBreakdown {
        overall_score: round2(overall),
        keyword_density: round2(keyword_density),
        formatting: round2(formatting),
        action_verbs: round2(action_verbs),
        experience: round2(experience),
        skill_match: round2(skill_match),
    }
}

/// Human-readable band for an ATS score.
pub fn score_interpretation(score: f64) -> &'static str {
    if score >= 80.0 {
        "Excellent - Your resume is highly optimized for ATS systems"
    } else if score >= 70.0 {
        "Good - Your resume should pass most ATS systems"
    } else if score >= 60.0 {
        "Fair - Your resume needs some improvements"
    } else if score >= 50.0 {
        "Poor - Your resume may not pass ATS screening"
    } else {
        "Critical - Your resume needs significant improvements"
    }
}

/// `min(value / target * 100, 100)`
fn capped_ratio(value: f64, target: f64) -> f64 {
    (value / target * 100.0).min(100.0)
}

fn keyword_density_score(resume_text: &str, text_lower: &str, skills: &SkillSet) -> f64 {
    let sections_found = RESUME_SECTIONS
        .iter()
        .filter(|section| text_lower.contains(*section))
        .count();
    let section_score = capped_ratio(sections_found as f64, 6.0);
    let keyword_score = capped_ratio(extract_keywords(resume_text).len() as f64, 30.0);
    let technical_score = capped_ratio(skills.technical_skills.len() as f64, 10.0);

    (section_score + keyword_score + technical_score) / 3.0
}

fn formatting_score(resume_text: &str, text_lower: &str) -> f64 {
    let mut score = 0.0;

    if EMAIL.is_match(resume_text) {
        score += 20.0;
    }
    if PHONE.is_match(resume_text) {
        score += 20.0;
    }
    if DATE_PATTERNS.iter().any(|p| p.is_match(text_lower)) {
        score += 20.0;
    }
    if resume_text.contains(BULLET_INDICATORS) {
        score += 20.0;
    }

    let word_count = resume_text.split_whitespace().count();
    if (400..=2000).contains(&word_count) {
        score += 20.0;
    } else if word_count > 300 {
        score += 10.0;
    }

    score
}

fn experience_score(resume_text: &str, text_lower: &str) -> f64 {
    let mut score = 0.0;

    let numbers = QUANTIFIER.find_iter(resume_text).count();
    if numbers >= 5 {
        score += 50.0;
    } else if numbers >= 2 {
        score += 25.0;
    }

    let indicators = EXPERIENCE_KEYWORDS
        .iter()
        .filter(|kw| text_lower.contains(*kw))
        .count();
    score += (indicators as f64 / 5.0 * 50.0).min(50.0);

    score
}

fn skill_match_score(resume_skills: &SkillSet, job_description: &str) -> f64 {
    if job_description.is_empty() {
        return NEUTRAL_SKILL_MATCH;
    }

    let job_skills = extract_skills(job_description).all_lowercase();
    if job_skills.is_empty() {
        return NEUTRAL_SKILL_MATCH;
    }

    let resume_skills = resume_skills.all_lowercase();
    let matched = resume_skills.intersection(&job_skills).count();
    matched as f64 / job_skills.len() as f64 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const STRONG_RESUME: &str = "Jane Doe jane.doe@example.com 555-123-4567 \
        Summary Senior engineer. Experience Acme Corp Jan 2019 - Present \
        - Developed Python microservices on AWS serving 2M users \
        - Led a team of 6 engineers and reduced latency by 40% \
        - Implemented CI/CD with Docker and Kubernetes, increased deploys 3x \
        - Designed PostgreSQL schemas, created dashboards, improved reliability to 99% \
        - Managed migrations and achieved $500k savings \
        Education BSc Computer Science 2014 - 2018 \
        Skills Python, Rust, Go, SQL, Docker, Kubernetes, AWS, Terraform, Linux, Git, React \
        Projects Open source contributions";

    #[test]
    fn test_empty_resume_scores_only_neutral_skill_match() {
        let breakdown = calculate_ats_score("", "");
        assert_eq!(breakdown.keyword_density, 0.0);
        assert_eq!(breakdown.formatting, 0.0);
        assert_eq!(breakdown.action_verbs, 0.0);
        assert_eq!(breakdown.experience, 0.0);
        assert_eq!(breakdown.skill_match, 50.0);
        assert_eq!(breakdown.overall_score, 5.0);
    }

    #[test]
    fn test_formatting_signals() {
        let breakdown = calculate_ats_score(STRONG_RESUME, "");
        // email + phone + dates + bullets; the fixture is well under 300 words
        assert_eq!(breakdown.formatting, 80.0);
    }

    #[test]
    fn test_experience_caps_at_100() {
        let breakdown = calculate_ats_score(STRONG_RESUME, "");
        assert_eq!(breakdown.experience, 100.0);
    }

    #[test]
    fn test_scores_bounded_0_to_100() {
        let breakdown = calculate_ats_score(STRONG_RESUME, "Rust engineer with Kubernetes");
        for value in [
            breakdown.overall_score,
            breakdown.keyword_density,
            breakdown.formatting,
            breakdown.action_verbs,
            breakdown.experience,
            breakdown.skill_match,
        ] {
            assert!((0.0..=100.0).contains(&value), "{value} out of range");
        }
    }

    #[test]
    fn test_skill_match_against_job() {
        let breakdown = calculate_ats_score("Python and Docker", "Python, Docker, Java and Scala");
        assert_eq!(breakdown.skill_match, 50.0);

        let full = calculate_ats_score("Python and Docker", "Python and Docker");
        assert_eq!(full.skill_match, 100.0);
    }

    #[test]
    fn test_job_without_skills_is_neutral() {
        let breakdown = calculate_ats_score("Python", "friendly office with snacks");
        assert_eq!(breakdown.skill_match, 50.0);
    }

    #[test]
    fn test_overall_is_weighted_sum() {
        let b = calculate_ats_score(STRONG_RESUME, "");
        let expected = b.keyword_density * 0.40
            + b.formatting * 0.20
            + b.action_verbs * 0.15
            + b.experience * 0.15
            + b.skill_match * 0.10;
        assert!((b.overall_score - expected).abs() < 0.02);
    }

    #[test]
    fn test_word_count_bands() {
        let long: String = "word ".repeat(450);
        assert_eq!(formatting_score(&long, &long), 20.0);
        let medium: String = "word ".repeat(350);
        assert_eq!(formatting_score(&medium, &medium), 10.0);
    }

    #[test]
    fn test_interpretation_bands() {
        assert!(score_interpretation(85.0).starts_with("Excellent"));
        assert!(score_interpretation(70.0).starts_with("Good"));
        assert!(score_interpretation(65.5).starts_with("Fair"));
        assert!(score_interpretation(50.0).starts_with("Poor"));
        assert!(score_interpretation(10.0).starts_with("Critical"));
    }
}
