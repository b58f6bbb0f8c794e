//! Prediction Corrector
//!
//! Deterministic post-hoc fix for the one confusion the classifier is
//! known to make: Excellent vs Good on boundary profiles. Exactly two
//! rules, evaluated in order, mutually exclusive by their raw-class
//! guards. No other class pair is ever corrected.

use std::collections::BTreeMap;

use crate::logic::features::FeatureVector;
use crate::logic::model::{PerformanceClass, PredictionResult};

/// `(raw_class, confidence, features, probabilities) -> final_class`
///
/// Pure function: no side effects, no randomness. Probabilities are in
/// [0, 1].
pub fn correct_prediction(
    raw_class: PerformanceClass,
    confidence: f32,
    features: &FeatureVector,
    probabilities: &BTreeMap<PerformanceClass, f32>,
) -> PerformanceClass {
    let prob_of = |class: PerformanceClass| probabilities.get(&class).copied().unwrap_or(0.0);

    // Rule 1: low-confidence Excellent with sub-8.0 CGPA is likely Good
    if raw_class == PerformanceClass::Excellent
        && features.total_cgpa < 8.0
        && confidence < 0.85
        && prob_of(PerformanceClass::Good) > 0.15
    {
        return PerformanceClass::Good;
    }

    // Rule 2: low-confidence Good with Excellent characteristics
    // (CGPA >= 8.5, no backlogs, attendance >= 85) is likely Excellent
    if raw_class == PerformanceClass::Good
        && features.total_cgpa >= 8.5
        && features.backlogs == 0
        && features.attendance >= 85.0
        && confidence < 0.8
        && prob_of(PerformanceClass::Excellent) > 0.2
    {
        return PerformanceClass::Excellent;
    }

    raw_class
}

/// Run the correction on a prediction in place, filling `final_class`
pub fn apply_correction(result: &mut PredictionResult, features: &FeatureVector) {
    result.final_class = correct_prediction(
        result.raw_class,
        result.confidence,
        features,
        &result.probabilities,
    );
}
