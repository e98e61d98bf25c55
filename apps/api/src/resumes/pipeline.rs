//! Resume analysis pipeline: extract → clean → skills → ATS score.

use anyhow::Context;
use bytes::Bytes;
use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::analysis::ats_scorer::{score_interpretation, score_with_skills};
use crate::analysis::skills::extract_skills;
use crate::errors::AppError;
use crate::extraction::{clean_text, parse_pdf};
use crate::models::resume::ResumeAnalysis;

/// Cleaned resumes shorter than this are rejected as incomplete.
pub const MIN_RESUME_CHARS: usize = 100;

/// Analyzes already-extracted resume text. `job_description` may be empty;
/// when present it drives the skill-match component of the ATS score.
pub fn analyze_text(
    filename: &str,
    text: &str,
    job_description: &str,
) -> Result<ResumeAnalysis, AppError> {
    let cleaned = clean_text(text);
    if cleaned.chars().count() < MIN_RESUME_CHARS {
        return Err(AppError::Validation(
            "Resume text is too short. Please upload a complete resume.".to_string(),
        ));
    }

    let skills = extract_skills(&cleaned);
    let breakdown = score_with_skills(&cleaned, &skills, job_description);

    info!(
        "Analyzed {filename}: {} skills, ATS score {}",
        skills.all_skills.len(),
        breakdown.overall_score
    );

    Ok(ResumeAnalysis {
        id: Uuid::new_v4(),
        filename: filename.to_string(),
        raw_text: cleaned,
        extracted_skills: skills.all_skills,
        technical_skills: skills.technical_skills,
        soft_skills: skills.soft_skills,
        tools: skills.tools,
        ats_score: breakdown.overall_score,
        interpretation: score_interpretation(breakdown.overall_score).to_string(),
        ats_breakdown: breakdown,
        created_at: Utc::now(),
    })
}

/// Extracts and analyzes a PDF. Extraction and scoring are CPU bound and run
/// on the blocking pool.
pub async fn analyze_pdf(filename: String, pdf: Bytes) -> Result<ResumeAnalysis, AppError> {
    tokio::task::spawn_blocking(move || {
        let text = parse_pdf(&pdf)?;
        analyze_text(&filename, &text, "")
    })
    .await
    .context("resume analysis task failed")?
}
