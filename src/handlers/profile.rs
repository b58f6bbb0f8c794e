//! Profile submission handlers
//!
//! One submission runs the full pipeline: validate, scale, classify,
//! correct, cache. Validation failures reject the request with nothing
//! cached; a new prediction restarts the guided chat flow but keeps the
//! name the user already gave.

use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::BTreeMap;
use tracing::info;

use crate::logic::advisor::apply_correction;
use crate::logic::features::ProfileForm;
use crate::logic::session::StudentProfile;
use crate::{AppError, AppResult, AppState};

fn default_session_id() -> String {
    "default".to_string()
}

#[derive(Debug, Deserialize)]
pub struct SubmitRequest {
    #[serde(default = "default_session_id")]
    pub session_id: String,
    #[serde(flatten)]
    pub form: ProfileForm,
}

#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub prediction: String,
    /// Max class probability, in percent
    pub confidence: f32,
    /// Full distribution, label -> percent
    pub probabilities: BTreeMap<String, f32>,
}

/// Submit the academic form: predict, correct, cache the profile
pub async fn submit(
    State(state): State<AppState>,
    Json(req): Json<SubmitRequest>,
) -> AppResult<Json<SubmitResponse>> {
    let features = req.form.into_features()?;
    let mut result = state.engine.predict(&features)?;
    apply_correction(&mut result, &features);

    if result.final_class != result.raw_class {
        info!(
            raw = result.raw_class.as_str(),
            corrected = result.final_class.as_str(),
            "boundary correction applied"
        );
    }

    state.sessions.put_profile(
        &req.session_id,
        StudentProfile::new(features, result.final_class),
    );
    state.sessions.reset_conversation_keep_name(&req.session_id);

    let probabilities = result
        .probabilities
        .iter()
        .map(|(class, p)| (class.as_str().to_string(), p * 100.0))
        .collect();

    Ok(Json(SubmitResponse {
        prediction: result.final_class.as_str().to_string(),
        confidence: result.confidence * 100.0,
        probabilities,
    }))
}

/// Drop the cached profile for a session
pub async fn clear(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> AppResult<Json<Value>> {
    if !state.sessions.delete_profile(&session_id) {
        return Err(AppError::NotFound(format!(
            "No profile for session: {session_id}"
        )));
    }
    Ok(Json(json!({ "cleared": session_id })))
}
