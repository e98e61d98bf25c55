//! Resume critique: a pluggable generator of structured feedback.
//!
//! `LlmFeedbackGenerator` asks OpenAI or Gemini; `TemplateFeedbackGenerator`
//! returns the deterministic template. `AppState` holds an
//! `Arc<dyn FeedbackGenerator>` chosen at startup from `AI_PROVIDER`.

pub mod prompts;
pub mod template;

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::{AiProvider, Config};
use crate::llm_client::{
    LlmClient, LlmError, LlmProvider, DEFAULT_GEMINI_MODEL, DEFAULT_OPENAI_MODEL,
};
use prompts::{CRITIQUE_PROMPT_TEMPLATE, CRITIQUE_SYSTEM, GENERAL_EVALUATION, NONE_IDENTIFIED};
pub use template::{default_feedback, render_feedback_text, render_match_summary};

const MAX_PROMPT_RESUME_CHARS: usize = 3000;
const MAX_PROMPT_JD_CHARS: usize = 2000;
const MAX_PROMPT_SKILLS: usize = 30;
const MAX_PROMPT_MISSING: usize = 20;

/// Structured critique. Every field is required when parsing an LLM reply;
/// a reply missing any of them falls back to the template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    pub ats_score: f64,
    pub missing_skills: Vec<String>,
    pub improvements: Vec<String>,
    pub rewritten_bullets: Vec<String>,
    pub recruiter_summary: String,
}

/// Everything a generator needs to critique one resume.
#[derive(Debug, Clone, Default)]
pub struct FeedbackRequest {
    pub resume_text: String,
    pub extracted_skills: Vec<String>,
    /// Empty for a general evaluation.
    pub job_description: String,
    pub missing_skills: Vec<String>,
}

/// A critique together with the backend that actually produced it.
#[derive(Debug, Clone)]
pub struct Critique {
    pub feedback: Feedback,
    /// "openai" | "gemini" | "template"
    pub backend: &'static str,
}

/// Implement this to swap critique backends without touching handlers.
#[async_trait]
pub trait FeedbackGenerator: Send + Sync {
    /// Never fails: backends that can fail degrade to the template.
    async fn critique(&self, request: &FeedbackRequest) -> Critique;

    /// The backend this generator tries first.
    fn backend(&self) -> &'static str;
}

// ────────────────────────────────────────────────────────────────────────────
// TemplateFeedbackGenerator
// ────────────────────────────────────────────────────────────────────────────

pub struct TemplateFeedbackGenerator;

pub const TEMPLATE_BACKEND: &str = "template";

#[async_trait]
impl FeedbackGenerator for TemplateFeedbackGenerator {
    async fn critique(&self, request: &FeedbackRequest) -> Critique {
        Critique {
            feedback: default_feedback(&request.extracted_skills, &request.missing_skills),
            backend: TEMPLATE_BACKEND,
        }
    }

    fn backend(&self) -> &'static str {
        TEMPLATE_BACKEND
    }
}

// ────────────────────────────────────────────────────────────────────────────
// LlmFeedbackGenerator
// ────────────────────────────────────────────────────────────────────────────

pub struct LlmFeedbackGenerator {
    llm: LlmClient,
}

impl LlmFeedbackGenerator {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }

    async fn ask(&self, request: &FeedbackRequest) -> Result<Feedback, LlmError> {
        let prompt = build_prompt(request);
        let mut feedback: Feedback = self.llm.call_json(&prompt, CRITIQUE_SYSTEM).await?;
        feedback.ats_score = feedback.ats_score.clamp(0.0, 100.0);
        Ok(feedback)
    }
}

#[async_trait]
impl FeedbackGenerator for LlmFeedbackGenerator {
    async fn critique(&self, request: &FeedbackRequest) -> Critique {
        match self.ask(request).await {
            Ok(feedback) => Critique {
                feedback,
                backend: self.backend(),
            },
            Err(e) => {
                warn!(
                    "{} feedback failed, using template: {e}",
                    self.llm.provider().name()
                );
                Critique {
                    feedback: default_feedback(&request.extracted_skills, &request.missing_skills),
                    backend: TEMPLATE_BACKEND,
                }
            }
        }
    }

    fn backend(&self) -> &'static str {
        self.llm.provider().name()
    }
}

/// Picks the generator for the configured provider. A provider without an API
/// key, or an unknown provider, runs on the template alone.
pub fn generator_from_config(config: &Config) -> anyhow::Result<Arc<dyn FeedbackGenerator>> {
    let provider = match &config.ai_provider {
        AiProvider::OpenAi => config.openai_api_key.clone().map(|api_key| LlmProvider::OpenAi {
            api_key,
            model: config
                .openai_model
                .clone()
                .unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_string()),
        }),
        AiProvider::Gemini => config.gemini_api_key.clone().map(|api_key| LlmProvider::Gemini {
            api_key,
            model: config
                .gemini_model
                .clone()
                .unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
        }),
        AiProvider::Template => None,
    };

    match provider {
        Some(provider) => {
            info!(
                "AI feedback via {} (model: {})",
                provider.name(),
                provider.model()
            );
            Ok(Arc::new(LlmFeedbackGenerator::new(LlmClient::new(provider)?)))
        }
        None => {
            if config.ai_provider != AiProvider::Template {
                warn!("No API key for {:?}; AI feedback uses the template", config.ai_provider);
            } else {
                info!("AI feedback uses the template");
            }
            Ok(Arc::new(TemplateFeedbackGenerator))
        }
    }
}

/// Renders the critique prompt. Long inputs are cut to keep the prompt bounded.
pub fn build_prompt(request: &FeedbackRequest) -> String {
    let resume: String = request
        .resume_text
        .chars()
        .take(MAX_PROMPT_RESUME_CHARS)
        .collect();
    let skills = request
        .extracted_skills
        .iter()
        .take(MAX_PROMPT_SKILLS)
        .cloned()
        .collect::<Vec<_>>()
        .join(", ");
    let job_description = if request.job_description.is_empty() {
        GENERAL_EVALUATION.to_string()
    } else {
        request
            .job_description
            .chars()
            .take(MAX_PROMPT_JD_CHARS)
            .collect()
    };
    let missing = if request.missing_skills.is_empty() {
        NONE_IDENTIFIED.to_string()
    } else {
        request
            .missing_skills
            .iter()
            .take(MAX_PROMPT_MISSING)
            .cloned()
            .collect::<Vec<_>>()
            .join(", ")
    };

    // Fill from the bottom of the template up, one occurrence each, so text
    // inserted earlier can never be mistaken for a placeholder.
    CRITIQUE_PROMPT_TEMPLATE
        .replacen("{missing_skills}", &missing, 1)
        .replacen("{job_description}", &job_description, 1)
        .replacen("{skills}", &skills, 1)
        .replacen("{resume_text}", &resume, 1)
}
