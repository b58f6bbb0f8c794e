//! Model Module - Classifier Inference
//!
//! Thin wrapper around the externally-trained artifacts: a StandardScaler
//! (`scaler.json`), a label encoder (`labels.json`) and a dense ONNX
//! classifier (`model.onnx`). The artifacts are consumed as a black box;
//! training lives outside this repository.

pub mod inference;
pub mod labels;
pub mod scaler;

pub use inference::{ClassifierEngine, InferenceError, ModelInfo, PredictionResult};
pub use labels::{LabelEncoder, PerformanceClass, UnknownCategoryError};
pub use scaler::Scaler;
