use std::sync::Arc;

use crate::config::Config;
use crate::feedback::FeedbackGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable critique backend, chosen at startup from AI_PROVIDER.
    pub feedback: Arc<dyn FeedbackGenerator>,
}
