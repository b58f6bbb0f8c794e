//! Conversation state

use serde::{Deserialize, Serialize};

/// Guided-flow step. `Completed` is the steady state; messages there are
/// handled by keyword dispatch, not further transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Step {
    Greeting,
    GetName,
    ShowSuggestions,
    Completed,
}

/// Per-session dialogue state, created lazily on first message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationState {
    pub step: Step,
    pub name: Option<String>,
}

impl ConversationState {
    pub fn new() -> Self {
        Self {
            step: Step::Greeting,
            name: None,
        }
    }

    /// Restart the guided flow, keeping the name the user already gave
    pub fn reset_keep_name(&mut self) {
        self.step = Step::Greeting;
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Student")
    }
}

impl Default for ConversationState {
    fn default() -> Self {
        Self::new()
    }
}
