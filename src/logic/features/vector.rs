//! Feature Vector - Core data structure for ML input
//!
//! Feature order MUST match the order the scaler was fit with.

use serde::{Deserialize, Serialize};

/// Number of features the scaler and model expect
pub const FEATURE_COUNT: usize = 8;

/// Feature names in scaler order
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "total_cgpa",
    "attendance",
    "study_hours",
    "backlogs",
    "competitions",
    "projects_internships",
    "prevsem_cgpa",
    "confidence_level",
];

/// One student's academic metrics, validated and bucket-mapped.
///
/// All 8 fields are present and in range by construction - the only way
/// to build one outside this module is `ProfileForm::into_features`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    /// Cumulative CGPA, 0-10
    pub total_cgpa: f32,
    /// Attendance percentage, 0-100
    pub attendance: f32,
    /// Weekly study hours (representative value of the selected bucket)
    pub study_hours: u32,
    /// Backlog count (bucket "5+" maps to 6)
    pub backlogs: u32,
    /// 1 if the student participates in competitions
    pub competitions: u8,
    /// 1 if the student has projects or internships
    pub projects_internships: u8,
    /// Previous semester CGPA, 0-10
    pub prevsem_cgpa: f32,
    /// Self-reported confidence, 1-10
    pub confidence_level: u8,
}

impl FeatureVector {
    /// Values in scaler order, ready for `Scaler::transform`
    pub fn to_array(&self) -> [f32; FEATURE_COUNT] {
        [
            self.total_cgpa,
            self.attendance,
            self.study_hours as f32,
            self.backlogs as f32,
            self.competitions as f32,
            self.projects_internships as f32,
            self.prevsem_cgpa,
            self.confidence_level as f32,
        ]
    }
}
