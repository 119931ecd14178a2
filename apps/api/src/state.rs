use std::sync::Arc;

use crate::chat::manager::SessionManager;
use crate::config::Config;
use crate::llm_client::CompletionClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Registry of live chat sessions, one per browser session.
    pub sessions: Arc<SessionManager>,
    /// Pluggable completion backend. Default: `GroqClient`.
    pub completions: Arc<dyn CompletionClient>,
    pub config: Config,
}
