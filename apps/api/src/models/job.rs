use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::feedback::Feedback;

/// A job posting as submitted by the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPosting {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub required_skills: Vec<String>,
}

impl JobPosting {
    /// Description text the matcher compares against. Explicit required
    /// skills are appended so they count even when the prose omits them.
    pub fn matching_text(&self) -> String {
        if self.required_skills.is_empty() {
            return self.description.clone();
        }
        format!(
            "{}\nRequired skills: {}",
            self.description,
            self.required_skills.join(", ")
        )
    }
}

/// Outcome of matching one resume against one job description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobMatch {
    pub id: Uuid,
    pub job_title: Option<String>,
    pub match_percentage: f64,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub matched_technical_skills: Vec<String>,
    pub missing_technical_skills: Vec<String>,
    pub cosine_similarity: f64,
    pub interpretation: String,
    /// Plain-text critique, ready for display.
    pub ai_feedback: String,
    /// Structured critique; absent when AI feedback was not requested.
    pub feedback: Option<Feedback>,
    /// "openai" | "gemini" | "template" | "none"
    pub feedback_backend: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matching_text_without_required_skills() {
        let job = JobPosting {
            title: "Engineer".to_string(),
            description: "Build services in Rust".to_string(),
            required_skills: vec![],
        };
        assert_eq!(job.matching_text(), "Build services in Rust");
    }

    #[test]
    fn test_matching_text_appends_required_skills() {
        let job = JobPosting {
            title: "Engineer".to_string(),
            description: "Build services".to_string(),
            required_skills: vec!["Rust".to_string(), "Kafka".to_string()],
        };
        assert_eq!(job.matching_text(), "Build services\nRequired skills: Rust, Kafka");
    }

    #[test]
    fn test_required_skills_default_to_empty() {
        let job: JobPosting =
            serde_json::from_str(r#"{"title": "SRE", "description": "Keep it up"}"#).unwrap();
        assert!(job.required_skills.is_empty());
    }
}
