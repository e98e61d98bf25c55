//! Deterministic critique used whenever the LLM is unavailable, plus the
//! plain-text renderings returned as `ai_feedback`.

use crate::feedback::Feedback;
use crate::matching::matcher::{match_interpretation, MatchResult};

const DEFAULT_SCORE: f64 = 70.0;

const DEFAULT_IMPROVEMENTS: [&str; 5] = [
    "Add quantifiable achievements with specific metrics (e.g., 'Increased sales by 25%')",
    "Use strong action verbs at the start of each bullet point (e.g., 'Developed', 'Led', 'Implemented')",
    "Include relevant technical skills and tools mentioned in the job description",
    "Optimize your resume format for ATS by using standard section headings",
    "Add a professional summary highlighting your key qualifications and career objectives",
];

const DEFAULT_BULLETS: [&str; 3] = [
    "Developed and implemented scalable web applications using React and Node.js, resulting in 40% faster page load times",
    "Led a cross-functional team of 5 developers to deliver a mission-critical project 2 weeks ahead of schedule",
    "Optimized database queries and reduced server response time by 35%, improving overall system performance",
];

pub fn default_feedback(extracted_skills: &[String], missing_skills: &[String]) -> Feedback {
    let strengths = first_n(extracted_skills, 5).join(", ");
    let gaps = if missing_skills.is_empty() {
        "emerging technologies".to_string()
    } else {
        first_n(missing_skills, 3).join(", ")
    };

    Feedback {
        ats_score: DEFAULT_SCORE,
        missing_skills: first_n(missing_skills, 10).to_vec(),
        improvements: DEFAULT_IMPROVEMENTS.iter().map(|s| s.to_string()).collect(),
        rewritten_bullets: DEFAULT_BULLETS.iter().map(|s| s.to_string()).collect(),
        recruiter_summary: format!(
            "Candidate demonstrates strong technical skills including {strengths}. \
             To improve chances, focus on quantifying achievements and addressing skill gaps in {gaps}. \
             Overall profile shows good potential with room for optimization."
        ),
    }
}

/// Critique block: score, improvements, suggested bullets, recruiter summary.
pub fn render_feedback_text(feedback: &Feedback) -> String {
    format!(
        "ATS Score: {}/100\n\n\
         Key Improvements:\n{}\n\n\
         Suggested Bullet Points:\n{}\n\n\
         Recruiter Summary:\n{}",
        format_score(feedback.ats_score),
        bulleted(&feedback.improvements),
        bulleted(&feedback.rewritten_bullets),
        feedback.recruiter_summary
    )
}

/// Interpretation block used when no critique was requested.
pub fn render_match_summary(result: &MatchResult) -> String {
    format!(
        "Match Interpretation: {}\n\n\
         Technical Skills Matched: {}\n\
         Technical Skills Missing: {}\n\n\
         Focus on acquiring: {}",
        match_interpretation(result.match_percentage),
        result.matched_technical_skills.len(),
        result.missing_technical_skills.len(),
        first_n(&result.missing_technical_skills, 5).join(", ")
    )
}

fn first_n(items: &[String], n: usize) -> &[String] {
    &items[..items.len().min(n)]
}

fn bulleted(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("• {item}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Whole scores print without a fractional part ("70", not "70.0").
fn format_score(score: f64) -> String {
    if score.fract() == 0.0 {
        format!("{score:.0}")
    } else {
        format!("{score}")
    }
}
