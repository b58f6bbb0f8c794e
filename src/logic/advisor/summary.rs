//! Personalized data summary
//!
//! Fixed template re-rendering the stored metrics with per-metric quick
//! actions. Separate from the advice composer: no randomness, no
//! template pools, always the same layout.

use crate::logic::model::{PerformanceClass, UnknownCategoryError};
use crate::logic::session::StudentProfile;

use super::analyzer::analyze_profile;

fn yes_no(flag: u8) -> &'static str {
    if flag > 0 {
        "Yes"
    } else {
        "No"
    }
}

/// Render the academic summary for a stored profile
pub fn personalized_summary(
    profile: &StudentProfile,
    name: &str,
) -> Result<String, UnknownCategoryError> {
    let f = &profile.features;
    let class = PerformanceClass::from_label(&profile.predicted_class)?;
    let next_level = match class.next_level() {
        Some(next) => next.as_str().to_string(),
        None => "maintain your excellent performance".to_string(),
    };

    let analysis = analyze_profile(f);

    let mut summary = format!("📊 **Academic Summary for {}**\n\n", name);

    summary.push_str("🎯 **Your Performance Overview:**\n");
    summary.push_str(&format!("• **CGPA**: {}/10\n", f.total_cgpa));
    summary.push_str(&format!("• **Attendance**: {}%\n", f.attendance));
    summary.push_str(&format!("• **Study Hours**: {} hrs/week\n", f.study_hours));
    summary.push_str(&format!("• **Backlogs**: {}\n", f.backlogs));
    summary.push_str(&format!("• **Competitions**: {}\n", yes_no(f.competitions)));
    summary.push_str(&format!(
        "• **Projects/Internships**: {}\n",
        yes_no(f.projects_internships)
    ));
    summary.push_str(&format!("• **Confidence Level**: {}/10\n\n", f.confidence_level));

    if !analysis.key_strengths.is_empty() {
        summary.push_str("✅ **Your Strengths:**\n");
        for strength in analysis.key_strengths.iter().take(3) {
            summary.push_str(&format!("• {}\n", strength));
        }
        summary.push('\n');
    }

    if !analysis.critical_areas.is_empty() {
        summary.push_str("🎯 **Focus Areas for Improvement:**\n");
        for area in analysis.critical_areas.iter().take(3) {
            summary.push_str(&format!("• {}\n", area));
        }
        summary.push('\n');
    }

    summary.push_str("💡 **Quick Action Plan:**\n");

    if f.total_cgpa < 8.0 {
        summary.push_str(&format!("• Target CGPA: 8.0+ (Current: {}/10)\n", f.total_cgpa));
    } else {
        summary.push_str(&format!("• Maintain your excellent CGPA of {}/10\n", f.total_cgpa));
    }

    if f.attendance < 85.0 {
        summary.push_str(&format!(
            "• Improve attendance to 90%+ (Current: {}%)\n",
            f.attendance
        ));
    } else {
        summary.push_str(&format!("• Great attendance at {}%\n", f.attendance));
    }

    if f.study_hours < 20 {
        summary.push_str(&format!(
            "• Increase study hours to 25+/week (Current: {} hrs)\n",
            f.study_hours
        ));
    } else {
        summary.push_str(&format!("• Good study routine of {} hrs/week\n", f.study_hours));
    }

    if f.backlogs > 0 {
        summary.push_str(&format!("• Clear {} backlog(s) this semester\n", f.backlogs));
    } else {
        summary.push_str("• No backlogs - excellent!\n");
    }

    if f.competitions == 0 {
        summary.push_str("• Participate in coding competitions\n");
    }
    if f.projects_internships == 0 {
        summary.push_str("• Start building projects portfolio\n");
    }

    summary.push_str(&format!("\n🎯 **Predicted Performance**: {}\n", profile.predicted_class));
    summary.push_str(&format!("🚀 **Next Level**: {}", next_level));

    Ok(summary)
}
