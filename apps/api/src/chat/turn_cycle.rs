//! The turn cycle — one explicit state transition per submitted message.
//!
//! `Idle → (non-empty submit) → Requesting → Idle`
//!
//! Every operation returns a fresh `ChatView`; the page re-renders from the
//! returned view rather than from implicit shared state.

use serde::Serialize;
use tracing::error;

use crate::chat::session::{ChatSession, Phase, Turn};
use crate::chat::settings::SessionSettings;
use crate::llm_client::CompletionClient;

/// Snapshot of a session handed back to the page after every operation.
#[derive(Debug, Clone, Serialize)]
pub struct ChatView {
    pub turns: Vec<Turn>,
    pub phase: Phase,
    pub settings: SessionSettings,
    pub resume_loaded: bool,
    /// Set when the last completion attempt failed. The attempted user turn
    /// stays in `turns`.
    pub error: Option<String>,
}

impl ChatView {
    pub fn of(session: &ChatSession) -> Self {
        Self {
            turns: session.all().to_vec(),
            phase: session.phase,
            settings: session.settings.clone(),
            resume_loaded: session.resume_text.is_some(),
            error: None,
        }
    }

    fn with_error(session: &ChatSession, message: String) -> Self {
        Self {
            error: Some(message),
            ..Self::of(session)
        }
    }
}

/// Runs one full turn cycle for `input`.
///
/// Empty or whitespace-only input causes no transition at all: nothing is
/// appended, no request is made, and the unchanged view is returned. On
/// success the user and assistant turns are both appended. On completion
/// failure the user turn stays (it is not rolled back), no assistant turn is
/// appended, and the error is surfaced in the view.
pub async fn run_turn(
    session: &mut ChatSession,
    input: &str,
    client: &dyn CompletionClient,
) -> ChatView {
    if !session.append_user(input) {
        return ChatView::of(session);
    }

    session.phase = Phase::Requesting;
    let config = session.settings.request_config();
    let result = client.complete(input, &config).await;
    session.phase = Phase::Idle;

    match result {
        Ok(reply) => {
            session.append_assistant(reply);
            ChatView::of(session)
        }
        Err(e) => {
            error!("Completion request failed: {e}");
            ChatView::with_error(session, e.to_string())
        }
    }
}
