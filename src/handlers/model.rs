//! Model diagnostics handler

use axum::extract::State;
use axum::Json;

use crate::logic::model::ModelInfo;
use crate::AppState;

/// Loaded-artifact diagnostics: paths, feature names, class labels
pub async fn info(State(state): State<AppState>) -> Json<ModelInfo> {
    Json(state.engine.info())
}
