use axum::{
    extract::{
        rejection::{BytesRejection, JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    Json,
};
use bytes::Bytes;
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::resume::ResumeAnalysis;
use crate::resumes::pipeline::{analyze_pdf, analyze_text};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct AnalyzeQuery {
    pub filename: Option<String>,
}

#[derive(Deserialize)]
pub struct AnalyzeTextRequest {
    pub text: String,
    pub filename: Option<String>,
    #[serde(default)]
    pub job_description: String,
}

const DEFAULT_TEXT_FILENAME: &str = "resume.txt";

/// POST /api/v1/resumes/analyze?filename=resume.pdf
/// Body: the raw PDF bytes.
pub async fn handle_analyze_pdf(
    State(state): State<AppState>,
    query: Result<Query<AnalyzeQuery>, QueryRejection>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<ResumeAnalysis>, AppError> {
    let Query(params) = query?;
    let filename = params
        .filename
        .filter(|name| name.to_lowercase().ends_with(".pdf"))
        .ok_or_else(|| AppError::Validation("Only PDF files are allowed".to_string()))?;

    let pdf = body.map_err(|rejection| match rejection.status() {
        StatusCode::PAYLOAD_TOO_LARGE => AppError::PayloadTooLarge(format!(
            "File too large. Maximum size is {} bytes.",
            state.config.max_upload_bytes
        )),
        _ => AppError::Validation(rejection.body_text()),
    })?;

    let analysis = analyze_pdf(filename, pdf).await?;
    Ok(Json(analysis))
}

/// POST /api/v1/resumes/analyze-text
/// Re-analyzes resume text that was extracted earlier.
pub async fn handle_analyze_text(
    payload: Result<Json<AnalyzeTextRequest>, JsonRejection>,
) -> Result<Json<ResumeAnalysis>, AppError> {
    let Json(req) = payload?;
    let filename = req
        .filename
        .unwrap_or_else(|| DEFAULT_TEXT_FILENAME.to_string());
    let analysis = analyze_text(&filename, &req.text, &req.job_description)?;
    Ok(Json(analysis))
}
