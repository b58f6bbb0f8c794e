//! Chat handlers
//!
//! Thin wrappers over the dialogue engine. Conversation state is read
//! from and written back to the session store around each message; a
//! missing profile never turns into an HTTP error here - the engine
//! answers it conversationally.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::logic::knowledge::categories::{quick_actions, QuickAction};
use crate::{AppResult, AppState};

fn default_session_id() -> String {
    "default".to_string()
}

#[derive(Debug, Deserialize)]
pub struct StartRequest {
    #[serde(default = "default_session_id")]
    pub session_id: String,
}

#[derive(Debug, Deserialize)]
pub struct MessageRequest {
    #[serde(default = "default_session_id")]
    pub session_id: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
}

/// Open (or restart) a conversation. When a profile exists the guided
/// flow restarts but keeps the name, so a returning student is greeted
/// with a fresh offer instead of stale state.
pub async fn start(
    State(state): State<AppState>,
    Json(req): Json<StartRequest>,
) -> AppResult<Json<ChatResponse>> {
    let mut conv = state
        .sessions
        .get_conversation(&req.session_id)
        .unwrap_or_default();

    let profile = state.sessions.get_profile(&req.session_id);
    if profile.is_some() {
        conv.reset_keep_name();
    }

    let response = state.chat.handle_message(&mut conv, "", profile.as_ref())?;
    state.sessions.put_conversation(&req.session_id, conv);

    Ok(Json(ChatResponse { response }))
}

/// One user message through the dialogue engine
pub async fn message(
    State(state): State<AppState>,
    Json(req): Json<MessageRequest>,
) -> AppResult<Json<ChatResponse>> {
    let mut conv = state
        .sessions
        .get_conversation(&req.session_id)
        .unwrap_or_default();
    let profile = state.sessions.get_profile(&req.session_id);

    let response = state
        .chat
        .handle_message(&mut conv, &req.message, profile.as_ref())?;
    state.sessions.put_conversation(&req.session_id, conv);

    Ok(Json(ChatResponse { response }))
}

/// Drop the conversation state entirely (name included)
pub async fn reset(
    State(state): State<AppState>,
    Json(req): Json<StartRequest>,
) -> AppResult<Json<Value>> {
    state.sessions.delete_conversation(&req.session_id);
    Ok(Json(json!({ "reset": req.session_id })))
}

/// Quick-action buttons shown under the chat input
pub async fn actions() -> Json<Vec<QuickAction>> {
    Json(quick_actions())
}
