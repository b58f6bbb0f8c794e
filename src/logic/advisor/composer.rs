//! Advice Composer
//!
//! Assembles the multi-paragraph advice blob: randomized template slots
//! for variety, fixed recommendation blocks gated by thresholds. The
//! random choice is behind a trait so tests can pin the variant while
//! production keeps true randomness - the pools are fixed either way.

use rand::Rng;

use crate::logic::features::FeatureVector;
use crate::logic::model::{PerformanceClass, UnknownCategoryError};

use super::analyzer::analyze_profile;

/// Picks a template index from a pool of `pool_len` candidates
pub trait TemplateChooser: Send + Sync {
    fn choose(&self, pool_len: usize) -> usize;
}

/// Uniform random selection (production)
pub struct RandomChooser;

impl TemplateChooser for RandomChooser {
    fn choose(&self, pool_len: usize) -> usize {
        rand::thread_rng().gen_range(0..pool_len)
    }
}

const GREETING: [&str; 3] = [
    "I've analyzed your academic profile, and here's my assessment:",
    "Based on your current performance, here are my recommendations:",
    "Let me provide you with personalized suggestions for improvement:",
];

const STRENGTH_ACK: [&str; 3] = [
    "Great job on {strength}! This shows your potential in {area}.",
    "I notice you're strong in {strength} - this is a valuable asset.",
    "Your {strength} is impressive and will help you in your academic journey.",
];

const IMPROVEMENT_FOCUS: [&str; 3] = [
    "To reach the next level, focus on improving {area}.",
    "The main area needing attention is {area}. Here's how to improve:",
    "I recommend prioritizing {area} for significant performance gains.",
];

const ACTION_PLAN: [&str; 3] = [
    "Here's a step-by-step plan to help you improve:",
    "Let me outline a clear action plan for you:",
    "Follow this structured approach for better results:",
];

const ENCOURAGEMENT: [&str; 3] = [
    "With consistent effort, you can definitely achieve {target}!",
    "Remember, small daily improvements lead to big results!",
    "You have the potential - it's about building the right habits!",
];

fn pick(pool: &[&'static str], chooser: &dyn TemplateChooser) -> &'static str {
    pool[chooser.choose(pool.len()).min(pool.len() - 1)]
}

/// Encouragement target: the next level up, or the maintain phrase for a
/// student already at the top. An unrecognized label fails loudly.
fn target_performance(label: &str) -> Result<String, UnknownCategoryError> {
    let class = PerformanceClass::from_label(label)?;
    Ok(match class.next_level() {
        Some(next) => next.as_str().to_string(),
        None => "maintain your excellent performance".to_string(),
    })
}

/// Build the full advice text for one profile.
///
/// Paragraphs, joined by blank lines: greeting, performance summary,
/// strength acknowledgment (if any strength), improvement focus (if any
/// critical area), action-plan intro, qualifying recommendation blocks,
/// encouragement.
pub fn compose_advice(
    features: &FeatureVector,
    predicted_label: &str,
    chooser: &dyn TemplateChooser,
) -> Result<String, UnknownCategoryError> {
    let target = target_performance(predicted_label)?;
    let analysis = analyze_profile(features);

    let mut parts: Vec<String> = Vec::new();

    parts.push(pick(&GREETING, chooser).to_string());
    parts.push(analysis.performance_summary.clone());

    if let Some(strength) = analysis.key_strengths.first() {
        let area = if strength.to_lowercase().contains("academic") {
            "academics"
        } else {
            "this area"
        };
        parts.push(
            pick(&STRENGTH_ACK, chooser)
                .replace("{strength}", strength)
                .replace("{area}", area),
        );
    }

    if let Some(area) = analysis.critical_areas.first() {
        parts.push(pick(&IMPROVEMENT_FOCUS, chooser).replace("{area}", &area.to_lowercase()));
    }

    parts.push(pick(&ACTION_PLAN, chooser).to_string());
    parts.extend(specific_recommendations(features));
    parts.push(pick(&ENCOURAGEMENT, chooser).replace("{target}", &target));

    Ok(parts.join("\n\n"))
}

/// Threshold-gated recommendation blocks, always in this order
fn specific_recommendations(features: &FeatureVector) -> Vec<String> {
    let mut recommendations = Vec::new();

    if features.total_cgpa < 8.0 {
        recommendations.push(format!(
            "🎯 **Academic Excellence Plan:**\n\
             • Target CGPA: 8.0+ (Current: {}/10)\n\
             • Strategy: Identify 2 weakest subjects for focused improvement\n\
             • Action: Daily 1-hour dedicated study for each weak subject\n\
             • Resources: Faculty guidance + peer study groups",
            features.total_cgpa
        ));
    }

    if features.attendance < 85.0 {
        recommendations.push(format!(
            "📅 **Attendance Improvement:**\n\
             • Current: {}% → Target: 90%+\n\
             • Benefit: Better concept clarity + faculty rapport\n\
             • Tip: Set morning alarms + prepare notes night before\n\
             • Accountability: Study partner for mutual motivation",
            features.attendance
        ));
    }

    if features.study_hours < 20 {
        recommendations.push(format!(
            "⏰ **Study Optimization:**\n\
             • Current: {} hrs/week → Target: 25+ hrs\n\
             • Technique: Pomodoro (25min focus, 5min break)\n\
             • Schedule: 4-5 hours daily with variety in subjects\n\
             • Quality: Active learning over passive reading",
            features.study_hours
        ));
    }

    if features.backlogs > 0 {
        recommendations.push(format!(
            "🔧 **Backlog Clearance Strategy:**\n\
             • Current: {} backlogs\n\
             • Priority: Clear easiest backlog first for momentum\n\
             • Schedule: 2 hours daily backlog study\n\
             • Goal: Clear 1-2 backlogs per semester",
            features.backlogs
        ));
    }

    if features.competitions == 0 || features.projects_internships == 0 {
        let mut skill_text = String::from("🚀 **Skill Development Roadmap:**\n");
        if features.competitions == 0 {
            skill_text.push_str(
                "• Start with college-level coding competitions\n\
                 • Practice on HackerRank/LeetCode (30min daily)\n\
                 • Join programming clubs\n",
            );
        }
        if features.projects_internships == 0 {
            skill_text.push_str(
                "• Build 2 mini-projects this semester\n\
                 • Learn Git and create GitHub portfolio\n\
                 • Apply for summer internships\n",
            );
        }
        recommendations.push(skill_text);
    }

    recommendations
}
