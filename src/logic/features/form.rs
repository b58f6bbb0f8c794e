//! Form field mapping and validation
//!
//! Raw form fields arrive as numbers plus ordinal bucket labels. Every
//! field is checked before a `FeatureVector` is built; a violation
//! rejects the whole submission with no partial state.

use serde::Deserialize;

use super::vector::FeatureVector;

/// Raw prediction form, field names as the UI sends them
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileForm {
    pub total_cgpa: f32,
    pub prevsem_cgpa: f32,
    pub attendance: f32,
    /// Ordinal bucket, e.g. "21-30 (Regular)"
    pub study_hours: String,
    /// Ordinal bucket, "0" through "4" or "5+"
    pub backlogs: String,
    /// "Yes", "No" or "More than 2"
    pub competitions: String,
    /// "Yes", "No" or "More than 2"
    pub projects_internships: String,
    pub confidence_level: i32,
}

#[derive(Debug, Clone, thiserror::Error)]
#[error("{0}")]
pub struct ValidationError(pub String);

/// Weekly study-hours bucket to representative numeric value
pub fn map_study_hours(bucket: &str) -> Result<u32, ValidationError> {
    match bucket {
        "0-10 (Minimal)" => Ok(5),
        "11-20 (Moderate)" => Ok(15),
        "21-30 (Regular)" => Ok(25),
        "31+ (Intensive)" => Ok(35),
        other => Err(ValidationError(format!("Unknown study hours selection: {other}"))),
    }
}

/// Backlogs bucket to count ("5+" is represented as 6)
pub fn map_backlogs(bucket: &str) -> Result<u32, ValidationError> {
    match bucket {
        "0" => Ok(0),
        "1" => Ok(1),
        "2" => Ok(2),
        "3" => Ok(3),
        "4" => Ok(4),
        "5+" => Ok(6),
        other => Err(ValidationError(format!("Unknown backlogs selection: {other}"))),
    }
}

/// "Yes" / "More than 2" count as participation, anything else as none.
/// The original form treats unrecognized values as "No" rather than
/// rejecting them, so this cannot fail.
pub fn map_participation(choice: &str) -> u8 {
    if choice == "Yes" || choice == "More than 2" {
        1
    } else {
        0
    }
}

impl ProfileForm {
    /// Validate ranges, map ordinal buckets, build the feature vector
    pub fn into_features(self) -> Result<FeatureVector, ValidationError> {
        if !(0.0..=10.0).contains(&self.total_cgpa) {
            return Err(ValidationError("Total CGPA must be between 0 and 10".into()));
        }
        if !(0.0..=10.0).contains(&self.prevsem_cgpa) {
            return Err(ValidationError(
                "Previous Semester CGPA must be between 0 and 10".into(),
            ));
        }
        if !(0.0..=100.0).contains(&self.attendance) {
            return Err(ValidationError("Attendance must be between 0% and 100%".into()));
        }
        if !(1..=10).contains(&self.confidence_level) {
            return Err(ValidationError(
                "Confidence level must be between 1 and 10".into(),
            ));
        }

        Ok(FeatureVector {
            total_cgpa: self.total_cgpa,
            attendance: self.attendance,
            study_hours: map_study_hours(&self.study_hours)?,
            backlogs: map_backlogs(&self.backlogs)?,
            competitions: map_participation(&self.competitions),
            projects_internships: map_participation(&self.projects_internships),
            prevsem_cgpa: self.prevsem_cgpa,
            confidence_level: self.confidence_level as u8,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_form() -> ProfileForm {
        ProfileForm {
            total_cgpa: 7.5,
            prevsem_cgpa: 7.2,
            attendance: 82.0,
            study_hours: "21-30 (Regular)".to_string(),
            backlogs: "0".to_string(),
            competitions: "Yes".to_string(),
            projects_internships: "No".to_string(),
            confidence_level: 6,
        }
    }

    #[test]
    fn test_valid_form_maps_buckets() {
        let features = base_form().into_features().unwrap();
        assert_eq!(features.study_hours, 25);
        assert_eq!(features.backlogs, 0);
        assert_eq!(features.competitions, 1);
        assert_eq!(features.projects_internships, 0);
    }

    #[test]
    fn test_study_hours_buckets() {
        assert_eq!(map_study_hours("0-10 (Minimal)").unwrap(), 5);
        assert_eq!(map_study_hours("11-20 (Moderate)").unwrap(), 15);
        assert_eq!(map_study_hours("21-30 (Regular)").unwrap(), 25);
        assert_eq!(map_study_hours("31+ (Intensive)").unwrap(), 35);
        assert!(map_study_hours("sometimes").is_err());
    }

    #[test]
    fn test_backlogs_five_plus_maps_to_six() {
        assert_eq!(map_backlogs("5+").unwrap(), 6);
        assert!(map_backlogs("7").is_err());
    }

    #[test]
    fn test_more_than_two_counts_as_participation() {
        assert_eq!(map_participation("Yes"), 1);
        assert_eq!(map_participation("More than 2"), 1);
        assert_eq!(map_participation("No"), 0);
        assert_eq!(map_participation("maybe"), 0);
    }

    #[test]
    fn test_cgpa_out_of_range_rejected() {
        let mut form = base_form();
        form.total_cgpa = 10.5;
        let err = form.into_features().unwrap_err();
        assert!(err.to_string().contains("Total CGPA"));
    }

    #[test]
    fn test_attendance_out_of_range_rejected() {
        let mut form = base_form();
        form.attendance = 101.0;
        assert!(form.into_features().is_err());
    }

    #[test]
    fn test_confidence_out_of_range_rejected() {
        let mut form = base_form();
        form.confidence_level = 0;
        assert!(form.into_features().is_err());

        let mut form = base_form();
        form.confidence_level = 11;
        assert!(form.into_features().is_err());
    }
}
