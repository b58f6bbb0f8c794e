//! Inference Engine - ONNX Runtime Integration
//!
//! Loads the dense classifier and runs one `[1, 8] -> [1, 4]` pass per
//! prediction. Failures propagate to the caller; there is no fallback
//! heuristic and no retry - a broken artifact set must surface, not be
//! masked (see error policy).

use chrono::{DateTime, Utc};
use ndarray::Array2;
use ort::session::{builder::GraphOptimizationLevel, Session};
use ort::value::Value;
use parking_lot::Mutex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;

use crate::logic::features::{FeatureVector, FEATURE_COUNT, FEATURE_NAMES};

use super::labels::{LabelEncoder, PerformanceClass};
use super::scaler::Scaler;

#[derive(Debug, Clone, thiserror::Error)]
#[error("InferenceError: {0}")]
pub struct InferenceError(pub String);

/// Classifier output for one feature vector
#[derive(Debug, Clone, Serialize)]
pub struct PredictionResult {
    /// Class the model itself picked (argmax)
    pub raw_class: PerformanceClass,
    /// Class after boundary correction; equals `raw_class` until the
    /// corrector has run
    pub final_class: PerformanceClass,
    /// Max probability
    pub confidence: f32,
    /// Full distribution, values in [0, 1]
    pub probabilities: BTreeMap<PerformanceClass, f32>,
}

/// Model/scaler diagnostics for the info route
#[derive(Debug, Clone, Serialize)]
pub struct ModelInfo {
    pub model_path: String,
    pub feature_count: usize,
    pub scaler_n_features: usize,
    pub feature_names: Vec<&'static str>,
    pub class_labels: Vec<String>,
    pub loaded_at: DateTime<Utc>,
}

/// Scaler + label encoder + ONNX session, loaded once at startup
pub struct ClassifierEngine {
    // Session::run needs &mut; predictions serialize on this lock
    session: Mutex<Session>,
    scaler: Scaler,
    labels: LabelEncoder,
    model_path: String,
    loaded_at: DateTime<Utc>,
}

impl ClassifierEngine {
    /// Load `model.onnx`, `scaler.json` and `labels.json` from a directory
    pub fn load(model_dir: &Path) -> Result<Self, InferenceError> {
        let model_path = model_dir.join("model.onnx");
        tracing::info!("Loading ONNX model from: {}", model_path.display());

        if !model_path.exists() {
            return Err(InferenceError(format!(
                "Model not found: {}",
                model_path.display()
            )));
        }

        let session = Session::builder()
            .map_err(|e| InferenceError(format!("Failed to create session builder: {}", e)))?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(|e| InferenceError(format!("Failed to set optimization: {}", e)))?
            .commit_from_file(&model_path)
            .map_err(|e| InferenceError(format!("Failed to load model: {}", e)))?;

        let scaler = Scaler::from_file(&model_dir.join("scaler.json"))?;
        let labels = LabelEncoder::from_file(&model_dir.join("labels.json"))?;

        tracing::info!("ONNX model loaded successfully");

        Ok(Self {
            session: Mutex::new(session),
            scaler,
            labels,
            model_path: model_path.display().to_string(),
            loaded_at: Utc::now(),
        })
    }

    /// Scale the features and run one classification pass
    pub fn predict(&self, features: &FeatureVector) -> Result<PredictionResult, InferenceError> {
        let scaled = self.scaler.transform(&features.to_array())?;

        let input_array = Array2::<f32>::from_shape_vec((1, FEATURE_COUNT), scaled.to_vec())
            .map_err(|e| InferenceError(format!("Array error: {}", e)))?;

        let mut session = self.session.lock();

        let output_name = session
            .outputs
            .first()
            .map(|o| o.name.clone())
            .ok_or_else(|| InferenceError("No output defined".to_string()))?;

        let input_tensor = Value::from_array(input_array)
            .map_err(|e| InferenceError(format!("Tensor error: {}", e)))?;

        let outputs = session
            .run(ort::inputs![input_tensor])
            .map_err(|e| InferenceError(format!("Inference failed: {}", e)))?;

        let output = outputs
            .get(&output_name)
            .ok_or_else(|| InferenceError("No output".to_string()))?;

        let output_tensor = output
            .try_extract_tensor::<f32>()
            .map_err(|e| InferenceError(format!("Extract error: {}", e)))?;

        read_distribution(output_tensor.1, &self.labels)
    }

    pub fn info(&self) -> ModelInfo {
        ModelInfo {
            model_path: self.model_path.clone(),
            feature_count: FEATURE_COUNT,
            scaler_n_features: self.scaler.n_features(),
            feature_names: FEATURE_NAMES.to_vec(),
            class_labels: self
                .labels
                .classes()
                .iter()
                .map(|c| c.as_str().to_string())
                .collect(),
            loaded_at: self.loaded_at,
        }
    }
}

/// Turn a raw model output row into argmax class + probability map
fn read_distribution(
    data: &[f32],
    labels: &LabelEncoder,
) -> Result<PredictionResult, InferenceError> {
    let class_count = labels.classes().len();
    if data.len() < class_count {
        return Err(InferenceError(format!(
            "Model produced {} outputs, expected {}",
            data.len(),
            class_count
        )));
    }

    let mut probabilities = BTreeMap::new();
    let mut best_idx = 0usize;
    let mut best_prob = f32::MIN;

    for idx in 0..class_count {
        let prob = data[idx];
        probabilities.insert(labels.inverse_transform(idx)?, prob);
        if prob > best_prob {
            best_prob = prob;
            best_idx = idx;
        }
    }

    let raw_class = labels.inverse_transform(best_idx)?;

    Ok(PredictionResult {
        raw_class,
        final_class: raw_class,
        confidence: best_prob,
        probabilities,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sklearn_order_encoder() -> LabelEncoder {
        // Alphabetical, as sklearn's LabelEncoder sorts its classes
        LabelEncoder::new(vec![
            PerformanceClass::Average,
            PerformanceClass::BelowAverage,
            PerformanceClass::Excellent,
            PerformanceClass::Good,
        ])
    }

    #[test]
    fn test_read_distribution_argmax() {
        let labels = sklearn_order_encoder();
        let result = read_distribution(&[0.05, 0.05, 0.7, 0.2], &labels).unwrap();

        assert_eq!(result.raw_class, PerformanceClass::Excellent);
        assert_eq!(result.final_class, result.raw_class);
        assert!((result.confidence - 0.7).abs() < 1e-6);
        assert_eq!(
            result.probabilities[&PerformanceClass::Good],
            0.2,
        );
    }

    #[test]
    fn test_read_distribution_short_output_fails() {
        let labels = sklearn_order_encoder();
        let err = read_distribution(&[0.5, 0.5], &labels).unwrap_err();
        assert!(err.to_string().contains("expected 4"));
    }

    #[test]
    fn test_probability_map_covers_all_classes() {
        let labels = sklearn_order_encoder();
        let result = read_distribution(&[0.25, 0.25, 0.25, 0.25], &labels).unwrap();
        for class in PerformanceClass::ORDERED {
            assert!(result.probabilities.contains_key(&class));
        }
    }
}
