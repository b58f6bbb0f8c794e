//! StandardScaler parameters exported from training
//!
//! `scaler.json` carries the fitted mean/scale arrays. Transform is
//! `(x - mean) / scale` per feature; a feature-count mismatch between the
//! artifact and this build is an inference error, never silently padded.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::logic::features::FEATURE_COUNT;

use super::inference::InferenceError;

/// Fitted StandardScaler parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scaler {
    pub mean: Vec<f32>,
    pub scale: Vec<f32>,
    /// Feature names the scaler was fit with, for the diagnostics route
    #[serde(default)]
    pub feature_names: Vec<String>,
}

impl Scaler {
    pub fn from_file(path: &Path) -> Result<Self, InferenceError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| InferenceError(format!("Failed to read {}: {}", path.display(), e)))?;
        let scaler: Scaler = serde_json::from_str(&raw)
            .map_err(|e| InferenceError(format!("Invalid scaler file: {}", e)))?;
        scaler.check_width()?;
        Ok(scaler)
    }

    fn check_width(&self) -> Result<(), InferenceError> {
        if self.mean.len() != FEATURE_COUNT || self.scale.len() != FEATURE_COUNT {
            return Err(InferenceError(format!(
                "Scaler was fit with {} features, model expects {}",
                self.mean.len(),
                FEATURE_COUNT
            )));
        }
        Ok(())
    }

    /// Number of features the scaler was fit with
    pub fn n_features(&self) -> usize {
        self.mean.len()
    }

    /// Scale a raw feature vector
    pub fn transform(
        &self,
        features: &[f32; FEATURE_COUNT],
    ) -> Result<[f32; FEATURE_COUNT], InferenceError> {
        self.check_width()?;

        let mut scaled = [0.0f32; FEATURE_COUNT];
        for i in 0..FEATURE_COUNT {
            scaled[i] = (features[i] - self.mean[i]) / self.scale[i];
        }
        Ok(scaled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_standardizes() {
        let scaler = Scaler {
            mean: vec![5.0; FEATURE_COUNT],
            scale: vec![2.0; FEATURE_COUNT],
            feature_names: vec![],
        };
        let scaled = scaler.transform(&[7.0; FEATURE_COUNT]).unwrap();
        assert!(scaled.iter().all(|&v| (v - 1.0).abs() < 1e-6));
    }

    #[test]
    fn test_from_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scaler.json");
        std::fs::write(
            &path,
            serde_json::json!({
                "mean": vec![1.0; FEATURE_COUNT],
                "scale": vec![2.0; FEATURE_COUNT],
                "feature_names": ["total_cgpa"]
            })
            .to_string(),
        )
        .unwrap();

        let scaler = Scaler::from_file(&path).unwrap();
        assert_eq!(scaler.n_features(), FEATURE_COUNT);
    }

    #[test]
    fn test_from_file_rejects_wrong_width() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scaler.json");
        std::fs::write(&path, r#"{"mean": [0.0], "scale": [1.0]}"#).unwrap();

        assert!(Scaler::from_file(&path).is_err());
    }

    #[test]
    fn test_feature_count_mismatch_fails() {
        let scaler = Scaler {
            mean: vec![0.0; 7],
            scale: vec![1.0; 7],
            feature_names: vec![],
        };
        let err = scaler.transform(&[0.0; FEATURE_COUNT]).unwrap_err();
        assert!(err.to_string().contains("fit with 7 features"));
    }
}
