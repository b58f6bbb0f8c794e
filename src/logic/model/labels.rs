//! Performance categories and the label encoder
//!
//! The four categories are ordered: each one's improvement target is the
//! next one up. The encoder preserves the index order the classifier was
//! trained with (`labels.json`), which is not the semantic order.

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::inference::InferenceError;

/// The 4 performance categories, in ascending order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PerformanceClass {
    #[serde(rename = "Below Average")]
    BelowAverage,
    Average,
    Good,
    Excellent,
}

/// A label string outside the 4 known categories reached a lookup.
/// This is an internal invariant violation and must stay loud.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown performance category: {0}")]
pub struct UnknownCategoryError(pub String);

impl PerformanceClass {
    /// All classes in ascending performance order
    pub const ORDERED: [PerformanceClass; 4] = [
        PerformanceClass::BelowAverage,
        PerformanceClass::Average,
        PerformanceClass::Good,
        PerformanceClass::Excellent,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PerformanceClass::BelowAverage => "Below Average",
            PerformanceClass::Average => "Average",
            PerformanceClass::Good => "Good",
            PerformanceClass::Excellent => "Excellent",
        }
    }

    /// Parse a category label. Anything outside the 4 known labels fails.
    pub fn from_label(label: &str) -> Result<Self, UnknownCategoryError> {
        match label {
            "Below Average" => Ok(PerformanceClass::BelowAverage),
            "Average" => Ok(PerformanceClass::Average),
            "Good" => Ok(PerformanceClass::Good),
            "Excellent" => Ok(PerformanceClass::Excellent),
            other => Err(UnknownCategoryError(other.to_string())),
        }
    }

    /// Next level up the ordered list; None when already Excellent
    pub fn next_level(&self) -> Option<PerformanceClass> {
        match self {
            PerformanceClass::BelowAverage => Some(PerformanceClass::Average),
            PerformanceClass::Average => Some(PerformanceClass::Good),
            PerformanceClass::Good => Some(PerformanceClass::Excellent),
            PerformanceClass::Excellent => None,
        }
    }
}

impl std::fmt::Display for PerformanceClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Ordered class labels from the trained label encoder
#[derive(Debug, Clone)]
pub struct LabelEncoder {
    classes: Vec<PerformanceClass>,
}

impl LabelEncoder {
    pub fn new(classes: Vec<PerformanceClass>) -> Self {
        Self { classes }
    }

    /// Load `labels.json`, an ordered array of category name strings.
    /// An unrecognized label means the artifact set is inconsistent.
    pub fn from_file(path: &Path) -> Result<Self, InferenceError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| InferenceError(format!("Failed to read {}: {}", path.display(), e)))?;
        let labels: Vec<String> = serde_json::from_str(&raw)
            .map_err(|e| InferenceError(format!("Invalid labels file: {}", e)))?;

        let classes = labels
            .iter()
            .map(|l| PerformanceClass::from_label(l))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| InferenceError(format!("Label encoder artifact: {}", e)))?;

        if classes.len() != PerformanceClass::ORDERED.len() {
            return Err(InferenceError(format!(
                "Label encoder has {} classes, expected {}",
                classes.len(),
                PerformanceClass::ORDERED.len()
            )));
        }

        Ok(Self { classes })
    }

    /// Classes in encoder (training) order
    pub fn classes(&self) -> &[PerformanceClass] {
        &self.classes
    }

    /// Class for a model output index
    pub fn inverse_transform(&self, index: usize) -> Result<PerformanceClass, InferenceError> {
        self.classes
            .get(index)
            .copied()
            .ok_or_else(|| InferenceError(format!("Class index {} out of range", index)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_label_known() {
        assert_eq!(
            PerformanceClass::from_label("Below Average").unwrap(),
            PerformanceClass::BelowAverage
        );
        assert_eq!(
            PerformanceClass::from_label("Excellent").unwrap(),
            PerformanceClass::Excellent
        );
    }

    #[test]
    fn test_from_label_unknown_is_loud() {
        let err = PerformanceClass::from_label("Outstanding").unwrap_err();
        assert!(err.to_string().contains("Outstanding"));
    }

    #[test]
    fn test_next_level_ordering() {
        assert_eq!(
            PerformanceClass::Good.next_level(),
            Some(PerformanceClass::Excellent)
        );
        assert_eq!(PerformanceClass::Excellent.next_level(), None);
    }

    #[test]
    fn test_from_file_sklearn_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("labels.json");
        std::fs::write(&path, r#"["Average", "Below Average", "Excellent", "Good"]"#).unwrap();

        let encoder = LabelEncoder::from_file(&path).unwrap();
        assert_eq!(encoder.inverse_transform(0).unwrap(), PerformanceClass::Average);
        assert_eq!(encoder.inverse_transform(3).unwrap(), PerformanceClass::Good);
    }

    #[test]
    fn test_from_file_rejects_unknown_label() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("labels.json");
        std::fs::write(&path, r#"["Average", "Below Average", "Excellent", "Stellar"]"#).unwrap();

        let err = LabelEncoder::from_file(&path).unwrap_err();
        assert!(err.to_string().contains("Stellar"));
    }

    #[test]
    fn test_inverse_transform() {
        // sklearn's LabelEncoder sorts labels alphabetically
        let encoder = LabelEncoder::new(vec![
            PerformanceClass::Average,
            PerformanceClass::BelowAverage,
            PerformanceClass::Excellent,
            PerformanceClass::Good,
        ]);
        assert_eq!(encoder.inverse_transform(2).unwrap(), PerformanceClass::Excellent);
        assert!(encoder.inverse_transform(4).is_err());
    }
}
