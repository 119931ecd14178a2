//! Chat session store — an ordered, append-only log of conversation turns.

use serde::{Deserialize, Serialize};

use crate::chat::settings::SessionSettings;

/// Originating role of a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One message in the conversation. Immutable once appended.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub content: String,
}

/// Where the session is in its turn cycle. `Requesting` is only observable
/// from inside a cycle; the per-session mutex serializes submits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Idle,
    Requesting,
}

/// The conversation state for one browser session. Lives in memory only;
/// destroyed when the session is deleted or the process exits.
#[derive(Debug)]
pub struct ChatSession {
    turns: Vec<Turn>,
    pub settings: SessionSettings,
    pub phase: Phase,
    /// Text extracted from an uploaded resume PDF. Held on the session but
    /// not injected into completion requests.
    pub resume_text: Option<String>,
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            turns: Vec::new(),
            settings: SessionSettings::default(),
            phase: Phase::Idle,
            resume_text: None,
        }
    }

    /// Appends a user turn. Empty or whitespace-only content is rejected
    /// silently: nothing is appended and `false` is returned.
    pub fn append_user(&mut self, content: &str) -> bool {
        if content.trim().is_empty() {
            return false;
        }
        self.turns.push(Turn {
            role: Role::User,
            content: content.to_string(),
        });
        true
    }

    /// Appends an assistant turn. Only the turn cycle calls this, immediately
    /// after the user turn whose completion produced `content` — the log
    /// never holds two consecutive assistant turns.
    pub fn append_assistant(&mut self, content: String) {
        debug_assert!(
            matches!(self.turns.last().map(|t| t.role), Some(Role::User)),
            "assistant turn must directly follow the user turn that produced it"
        );
        self.turns.push(Turn {
            role: Role::Assistant,
            content,
        });
    }

    /// Resets the conversation to empty. Settings and resume text survive;
    /// only the turn log is cleared.
    pub fn clear(&mut self) {
        self.turns.clear();
    }

    /// Ordered read-only view of the conversation, oldest first.
    pub fn all(&self) -> &[Turn] {
        &self.turns
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}
