use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::analysis::skills::extract_skills;
use crate::errors::AppError;
use crate::extraction::clean_text;
use crate::feedback::{render_feedback_text, render_match_summary, FeedbackRequest};
use crate::matching::matcher::{
    calculate_match_with_skills, match_interpretation, rank_resumes, RankedResume,
};
use crate::models::job::{JobMatch, JobPosting};
use crate::state::AppState;

/// Minimum trimmed length of a usable job description.
const MIN_JOB_DESCRIPTION_CHARS: usize = 10;

/// Reported as `feedback_backend` when the caller opted out of a critique.
const NO_FEEDBACK_BACKEND: &str = "none";

fn default_true() -> bool {
    true
}

#[derive(Deserialize)]
pub struct MatchRequest {
    pub resume_text: String,
    pub job: JobPosting,
    #[serde(default = "default_true")]
    pub include_ai_feedback: bool,
}

#[derive(Deserialize)]
pub struct RankRequest {
    pub job: JobPosting,
    pub resumes: Vec<String>,
}

#[derive(Serialize)]
pub struct RankResponse {
    pub job_title: String,
    pub total: usize,
    pub rankings: Vec<RankedResume>,
}

fn validate_job(job: &JobPosting) -> Result<(), AppError> {
    if job.description.trim().chars().count() < MIN_JOB_DESCRIPTION_CHARS {
        return Err(AppError::Validation(
            "Job description is too short. Minimum 10 characters required.".to_string(),
        ));
    }
    Ok(())
}

/// POST /api/v1/jobs/match
pub async fn handle_match(
    State(state): State<AppState>,
    payload: Result<Json<MatchRequest>, JsonRejection>,
) -> Result<Json<JobMatch>, AppError> {
    let Json(req) = payload?;
    validate_job(&req.job)?;

    // Matches the cleaned text an upload would have produced.
    let job_text = req.job.matching_text();
    let (resume_text, resume_skills, result) = tokio::task::spawn_blocking(move || {
        let resume_text = clean_text(&req.resume_text);
        let skills = extract_skills(&resume_text);
        let result = calculate_match_with_skills(&resume_text, &skills, &job_text);
        (resume_text, skills, result)
    })
    .await
    .map_err(anyhow::Error::from)?;

    if resume_text.is_empty() {
        return Err(AppError::Validation("Resume text is required".to_string()));
    }

    let (ai_feedback, feedback, feedback_backend) = if req.include_ai_feedback {
        let request = FeedbackRequest {
            resume_text,
            extracted_skills: resume_skills.all_skills,
            job_description: req.job.description.clone(),
            missing_skills: result.missing_skills.clone(),
        };
        let critique = state.feedback.critique(&request).await;
        (
            render_feedback_text(&critique.feedback),
            Some(critique.feedback),
            critique.backend,
        )
    } else {
        (render_match_summary(&result), None, NO_FEEDBACK_BACKEND)
    };

    info!(
        "Matched resume against '{}': {}% ({feedback_backend} feedback)",
        req.job.title, result.match_percentage
    );

    Ok(Json(JobMatch {
        id: Uuid::new_v4(),
        job_title: Some(req.job.title).filter(|t| !t.trim().is_empty()),
        interpretation: match_interpretation(result.match_percentage).to_string(),
        match_percentage: result.match_percentage,
        matched_skills: result.matched_skills,
        missing_skills: result.missing_skills,
        matched_technical_skills: result.matched_technical_skills,
        missing_technical_skills: result.missing_technical_skills,
        cosine_similarity: result.cosine_similarity,
        ai_feedback,
        feedback,
        feedback_backend: feedback_backend.to_string(),
        created_at: Utc::now(),
    }))
}

/// POST /api/v1/jobs/rank
pub async fn handle_rank(
    payload: Result<Json<RankRequest>, JsonRejection>,
) -> Result<Json<RankResponse>, AppError> {
    let Json(req) = payload?;
    validate_job(&req.job)?;
    if req.resumes.is_empty() {
        return Err(AppError::Validation(
            "At least one resume is required".to_string(),
        ));
    }

    let job_text = req.job.matching_text();
    let resumes = req.resumes;
    let rankings = tokio::task::spawn_blocking(move || {
        let cleaned: Vec<String> = resumes.iter().map(|r| clean_text(r)).collect();
        rank_resumes(&cleaned, &job_text)
    })
        .await
        .map_err(anyhow::Error::from)?;

    Ok(Json(RankResponse {
        job_title: req.job.title,
        total: rankings.len(),
        rankings,
    }))
}
