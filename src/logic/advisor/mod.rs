//! Advisor Module - Prediction Correction & Advice Generation
//!
//! Everything between the raw classifier output and the text the student
//! reads: boundary correction, per-metric profile analysis, advice
//! composition and the personalized data summary.

pub mod analyzer;
pub mod composer;
pub mod corrector;
pub mod summary;

pub use analyzer::{analyze_profile, ProfileAnalysis};
pub use composer::{compose_advice, RandomChooser, TemplateChooser};
pub use corrector::{apply_correction, correct_prediction};
pub use summary::personalized_summary;
