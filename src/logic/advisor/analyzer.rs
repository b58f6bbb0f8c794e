//! Profile Analyzer
//!
//! Independent per-metric threshold rules. Each metric is banded on its
//! own; the only cross-feed is that backlog risk also lands in
//! `risk_factors`. Bands are first-match-wins with inclusive lower
//! bounds.

use serde::Serialize;

use crate::logic::features::FeatureVector;

/// Aggregated qualitative findings for one student
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProfileAnalysis {
    /// Space-joined per-metric summary sentences
    pub performance_summary: String,
    pub key_strengths: Vec<String>,
    pub critical_areas: Vec<String>,
    pub improvement_opportunities: Vec<String>,
    /// Backlog-derived only
    pub risk_factors: Vec<String>,
}

struct MetricFindings {
    summary: &'static str,
    strengths: &'static [&'static str],
    concerns: &'static [&'static str],
}

/// Run every metric rule and aggregate the findings
pub fn analyze_profile(features: &FeatureVector) -> ProfileAnalysis {
    let mut analysis = ProfileAnalysis::default();
    let mut summary_parts: Vec<String> = Vec::new();

    let cgpa = analyze_cgpa(features.total_cgpa);
    summary_parts.push(cgpa_summary(features.total_cgpa, cgpa.summary));
    analysis
        .key_strengths
        .extend(cgpa.strengths.iter().map(|s| s.to_string()));
    analysis
        .critical_areas
        .extend(cgpa.concerns.iter().map(|s| s.to_string()));

    let attendance = analyze_attendance(features.attendance);
    summary_parts.push(attendance.summary.to_string());
    analysis
        .critical_areas
        .extend(attendance.concerns.iter().map(|s| s.to_string()));

    let study = analyze_study_habits(features.study_hours);
    summary_parts.push(study.summary.to_string());
    analysis
        .improvement_opportunities
        .extend(study.concerns.iter().map(|s| s.to_string()));

    if features.backlogs > 0 {
        let (concern, risk) = analyze_backlogs(features.backlogs);
        analysis.critical_areas.push(concern);
        analysis.risk_factors.push(risk.to_string());
    }

    analysis.improvement_opportunities.extend(analyze_extracurricular(
        features.competitions,
        features.projects_internships,
    ));

    analysis
        .improvement_opportunities
        .push(analyze_confidence(features.confidence_level).to_string());

    analysis.performance_summary = summary_parts.join(" ");
    analysis
}

// The CGPA summary interpolates the value; the template carries a `{}`
// slot filled by `cgpa_summary`.
fn cgpa_summary(cgpa: f32, template: &str) -> String {
    template.replace("{cgpa}", &format!("{}", cgpa))
}

fn analyze_cgpa(cgpa: f32) -> MetricFindings {
    if cgpa >= 8.5 {
        MetricFindings {
            summary: "Your CGPA of {cgpa}/10 is excellent and demonstrates strong academic capabilities.",
            strengths: &["Outstanding academic performance", "Strong conceptual understanding"],
            concerns: &[],
        }
    } else if cgpa >= 7.0 {
        MetricFindings {
            summary: "With a CGPA of {cgpa}/10, you're performing well but have room for growth.",
            strengths: &["Solid academic foundation", "Good learning ability"],
            concerns: &["Aim for 8.0+ CGPA to unlock better opportunities"],
        }
    } else if cgpa >= 6.0 {
        MetricFindings {
            summary: "Your current CGPA of {cgpa}/10 indicates potential that needs better channeling.",
            strengths: &["Basic understanding of subjects"],
            concerns: &["Need significant academic improvement", "Focus on study techniques"],
        }
    } else {
        MetricFindings {
            summary: "A CGPA of {cgpa}/10 requires immediate attention and strategic improvement.",
            strengths: &[],
            concerns: &["Critical academic performance", "Urgent intervention needed"],
        }
    }
}

fn analyze_attendance(attendance: f32) -> MetricFindings {
    if attendance >= 90.0 {
        MetricFindings {
            summary: "Your excellent attendance shows great discipline and commitment to learning.",
            strengths: &[],
            concerns: &[],
        }
    } else if attendance >= 80.0 {
        MetricFindings {
            summary: "Good attendance, but reaching 90%+ would maximize your learning potential.",
            strengths: &[],
            concerns: &["Slight improvement needed in regularity"],
        }
    } else if attendance >= 70.0 {
        MetricFindings {
            summary: "Your attendance needs attention as it might be affecting concept understanding.",
            strengths: &[],
            concerns: &["Moderate attendance concern", "Missing important classroom interactions"],
        }
    } else {
        MetricFindings {
            summary: "Low attendance is significantly impacting your academic performance.",
            strengths: &[],
            concerns: &["Critical attendance issue", "Missing foundational concepts"],
        }
    }
}

// For study hours the "concerns" slot carries suggestions
fn analyze_study_habits(study_hours: u32) -> MetricFindings {
    if study_hours >= 25 {
        MetricFindings {
            summary: "Your study commitment is excellent - focus now on optimizing techniques.",
            strengths: &[],
            concerns: &["Try advanced study methods like active recall and spaced repetition"],
        }
    } else if study_hours >= 20 {
        MetricFindings {
            summary: "Good study routine, but increasing to 25+ hours with better techniques will help.",
            strengths: &[],
            concerns: &["Implement Pomodoro technique", "Create structured study schedule"],
        }
    } else if study_hours >= 15 {
        MetricFindings {
            summary: "Your study hours are below optimal - this is likely affecting performance.",
            strengths: &[],
            concerns: &["Increase to 20-25 hours weekly", "Focus on consistent daily schedule"],
        }
    } else {
        MetricFindings {
            summary: "Insufficient study time is a major factor in academic challenges.",
            strengths: &[],
            concerns: &["Immediately increase study hours", "Seek academic counseling"],
        }
    }
}

/// Concern string naming the count, plus the risk band label.
/// Only called when backlogs > 0.
fn analyze_backlogs(backlogs: u32) -> (String, &'static str) {
    if backlogs == 1 {
        (
            format!("You have {} backlog - address it this semester", backlogs),
            "Low risk with timely action",
        )
    } else if backlogs <= 3 {
        (
            format!("{} backlogs need strategic clearance plan", backlogs),
            "Medium risk - requires focused effort",
        )
    } else {
        (
            format!("{} backlogs - this is critically affecting your academic progress", backlogs),
            "High risk - immediate intervention needed",
        )
    }
}

fn analyze_extracurricular(competitions: u8, projects: u8) -> Vec<String> {
    let mut suggestions = Vec::new();

    if competitions == 0 {
        suggestions.push("Participate in coding competitions to enhance technical skills".to_string());
    }
    if projects == 0 {
        suggestions.push("Start building projects to gain practical experience".to_string());
    }
    if competitions > 0 && projects > 0 {
        suggestions.push("Great extracurricular involvement - continue building on this".to_string());
    }

    suggestions
}

fn analyze_confidence(confidence_level: u8) -> &'static str {
    if confidence_level >= 8 {
        "Maintain your high confidence - it's a great asset"
    } else if confidence_level >= 6 {
        "Good confidence level - continue building through achievements"
    } else {
        "Work on confidence through small wins and preparation"
    }
}
