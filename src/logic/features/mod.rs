//! Features Module - Student Profile Features
//!
//! The 8 numeric inputs a prediction runs on, plus the mapping from raw
//! form fields (ordinal buckets, Yes/No selections) into that vector.

pub mod form;
pub mod vector;

pub use form::{ProfileForm, ValidationError};
pub use vector::{FeatureVector, FEATURE_COUNT, FEATURE_NAMES};
