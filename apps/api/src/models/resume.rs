use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::analysis::ats_scorer::AtsBreakdown;

/// Result of analyzing one resume: cleaned text, skills and ATS score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeAnalysis {
    pub id: Uuid,
    pub filename: String,
    pub raw_text: String,
    pub extracted_skills: Vec<String>,
    pub technical_skills: Vec<String>,
    pub soft_skills: Vec<String>,
    pub tools: Vec<String>,
    pub ats_score: f64,
    pub ats_breakdown: AtsBreakdown,
    pub interpretation: String,
    pub created_at: DateTime<Utc>,
}
