//! StudyMentor Server
//!
//! Academic performance advisor for engineering students: a dense ONNX
//! classifier predicts a performance class from 8 submitted metrics, a
//! boundary corrector adjusts borderline calls, and a rule-based advisor
//! plus keyword-driven chat turn the result into guidance text.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       STUDYMENTOR                           │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ┌───────────┐  ┌──────────────┐  ┌─────────────────────┐  │
//! │  │  API      │  │  Classifier  │  │  Advisor + Chat     │  │
//! │  │  (Axum)   │  │  (ONNX)      │  │  (rules/templates)  │  │
//! │  └─────┬─────┘  └──────┬───────┘  └──────────┬──────────┘  │
//! │        └───────────────┼─────────────────────┘              │
//! │                        ▼                                    │
//! │                ┌──────────────┐                             │
//! │                │ SessionStore │  (process memory)           │
//! │                └──────────────┘                             │
//! └─────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod error;
mod handlers;
mod logic;

use axum::{
    routing::{delete, get, post},
    Router,
};
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use logic::advisor::RandomChooser;
use logic::chat::ChatAdvisor;
use logic::model::ClassifierEngine;
use logic::session::SessionStore;

pub use error::{AppError, AppResult};

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "studymentor=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    tracing::info!("StudyMentor server starting...");
    tracing::info!("Model directory: {}", config.model_dir);

    // Load the classifier artifacts once; a broken artifact set must
    // stop startup, not limp along
    let engine = ClassifierEngine::load(Path::new(&config.model_dir))
        .expect("Failed to load classifier artifacts");

    let state = AppState {
        engine: Arc::new(engine),
        sessions: Arc::new(SessionStore::new()),
        chat: ChatAdvisor::new(Arc::new(RandomChooser)),
        config: config.clone(),
    };

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("🚀 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind server address");
    axum::serve(listener, app)
        .await
        .expect("Server error");
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<ClassifierEngine>,
    pub sessions: Arc<SessionStore>,
    pub chat: ChatAdvisor,
    pub config: config::Config,
}

/// Create the main router with all routes
fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::check))
        // Prediction pipeline
        .route("/api/v1/profile", post(handlers::profile::submit))
        .route("/api/v1/profile/:session_id", delete(handlers::profile::clear))
        // Chat
        .route("/api/v1/chat/start", post(handlers::chat::start))
        .route("/api/v1/chat/message", post(handlers::chat::message))
        .route("/api/v1/chat/reset", post(handlers::chat::reset))
        .route("/api/v1/chat/actions", get(handlers::chat::actions))
        // Diagnostics
        .route("/api/v1/model/info", get(handlers::model::info))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
