//! Category menu - long-form guidance blocks
//!
//! Six fixed responses keyed by multi-word category names. A message
//! matches a category when it contains any whitespace-split word of the
//! category name as a substring - loose on purpose, matching order is
//! the listed order.

use serde::Serialize;

/// Category keys, in match-priority order
pub const CATEGORY_KEYS: [&str; 6] = [
    "academic performance analysis",
    "study techniques time management",
    "exam preparation strategies",
    "career guidance placements",
    "mental health motivation",
    "campus life balance",
];

/// Quick-action button shown under the chat
#[derive(Debug, Clone, Serialize)]
pub struct QuickAction {
    pub text: &'static str,
    pub query: &'static str,
}

pub fn quick_actions() -> Vec<QuickAction> {
    vec![
        QuickAction { text: "📋 Get My Summary", query: "summary" },
        QuickAction { text: "📊 Academic Analysis", query: "academic performance analysis" },
        QuickAction { text: "🎯 Study Techniques", query: "study techniques time management" },
        QuickAction { text: "📖 Exam Preparation", query: "exam preparation strategies" },
        QuickAction { text: "💼 Career Guidance", query: "career guidance placements" },
        QuickAction { text: "😌 Mental Health", query: "mental health motivation" },
        QuickAction { text: "🌿 Campus Life", query: "campus life balance" },
    ]
}

/// First category whose name shares a word (substring) with the message
pub fn match_category(user_lower: &str) -> Option<&'static str> {
    CATEGORY_KEYS
        .iter()
        .find(|key| key.split_whitespace().any(|word| user_lower.contains(word)))
        .copied()
}

/// Fixed long-form response for a category key
pub fn category_response(key: &str) -> Option<&'static str> {
    match key {
        "academic performance analysis" => Some(
            "📊 **Academic Performance Analysis & Improvement**\n\
             \n\
             **Key Areas to Focus On:**\n\
             • **CGPA Improvement**: Target 8.0+ for better opportunities\n\
             • **Attendance Management**: Maintain 85%+ for better learning\n\
             • **Study Hours Optimization**: 25+ hours weekly with effective techniques\n\
             • **Backlog Clearance**: Strategic approach to clear pending subjects\n\
             • **Subject Balance**: Equal focus on theory and practical subjects\n\
             \n\
             **Action Plan:**\n\
             1. Identify 2 weakest subjects for focused improvement\n\
             2. Create weekly study schedule with time slots\n\
             3. Use active recall and spaced repetition techniques\n\
             4. Regular self-assessment through mock tests\n\
             5. Seek faculty guidance for difficult topics",
        ),
        "study techniques time management" => Some(
            "🎯 **Study Techniques & Time Management**\n\
             \n\
             **Effective Study Methods:**\n\
             • **Pomodoro Technique**: 25min study + 5min break (4 cycles then long break)\n\
             • **Active Recall**: Test yourself instead of re-reading\n\
             • **Spaced Repetition**: Review at intervals (1d, 3d, 1w, 2w)\n\
             • **Feynman Technique**: Teach concepts in simple terms\n\
             • **Mind Mapping**: Visual organization of complex topics\n\
             \n\
             **Time Management Strategies:**\n\
             • Create weekly timetable with fixed study slots\n\
             • Use Eisenhower Matrix for task prioritization\n\
             • Study during peak energy hours (morning/evening)\n\
             • Eliminate distractions (phone off/silent mode)\n\
             • Track progress with weekly reviews",
        ),
        "exam preparation strategies" => Some(
            "📖 **Exam Preparation Strategies**\n\
             \n\
             **3-Phase Preparation Plan:**\n\
             \n\
             **Phase 1: Foundation (4-6 weeks before)**\n\
             • Complete syllabus reading\n\
             • Create chapter-wise notes\n\
             • Identify important topics\n\
             \n\
             **Phase 2: Intensive Practice (2-3 weeks before)**\n\
             • Solve previous years' papers\n\
             • Chapter-wise mock tests\n\
             • Focus on weak areas\n\
             \n\
             **Phase 3: Revision (Last week)**\n\
             • Quick revision of notes\n\
             • Formula/theorem practice\n\
             • Time management practice\n\
             \n\
             **Exam Day Tips:**\n\
             • Reach early, stay calm\n\
             • Read all questions first\n\
             • Attempt known questions first\n\
             • Keep last 15min for review\n\
             • Don't panic if stuck - move on",
        ),
        "career guidance placements" => Some(
            "💼 **Career Guidance & Placements**\n\
             \n\
             **Placement Preparation Roadmap:**\n\
             \n\
             **Technical Skills:**\n\
             • Programming: DSA, OOPs, DBMS, OS\n\
             • Practice: LeetCode, HackerRank, CodeChef\n\
             • Projects: 2-3 good projects with GitHub portfolio\n\
             \n\
             **Soft Skills & Communication:**\n\
             • Group Discussion practice\n\
             • HR interview preparation\n\
             • Resume building with achievements\n\
             • Body language and confidence\n\
             \n\
             **Higher Studies Options:**\n\
             • Maintain 8.0+ CGPA for good colleges\n\
             • Research experience and publications\n\
             • Strong recommendation letters\n\
             • Early preparation for GATE/GRE/CAT\n\
             \n\
             **Internship Strategy:**\n\
             • Apply 3-4 months in advance\n\
             • Tailor resume for each company\n\
             • Build LinkedIn profile and network\n\
             • Learn from each internship experience",
        ),
        "mental health motivation" => Some(
            "😌 **Mental Health & Motivation**\n\
             \n\
             **Stress Management Techniques:**\n\
             • Regular exercise (30min daily)\n\
             • 7-8 hours quality sleep\n\
             • Healthy diet with proper hydration\n\
             • Mindfulness meditation (10min daily)\n\
             • Breaks and hobbies for relaxation\n\
             \n\
             **Staying Motivated:**\n\
             • Set SMART goals (Specific, Measurable, Achievable, Relevant, Time-bound)\n\
             • Break large tasks into small achievable steps\n\
             • Reward yourself for milestones achieved\n\
             • Find study partners for accountability\n\
             • Visualize your long-term success\n\
             \n\
             **Avoiding Burnout:**\n\
             • Take regular breaks during study\n\
             • Maintain work-life balance\n\
             • Don't compare with others\n\
             • Seek help when needed\n\
             • Remember your purpose and goals",
        ),
        "campus life balance" => Some(
            "🌿 **Campus Life & Balance**\n\
             \n\
             **Extracurricular Activities:**\n\
             • Join clubs related to your interests\n\
             • Participate in college festivals and events\n\
             • Take leadership roles in student bodies\n\
             • Attend workshops and seminars\n\
             • Build your network with seniors and professors\n\
             \n\
             **Networking Strategy:**\n\
             • Connect with alumni on LinkedIn\n\
             • Attend tech meetups and conferences\n\
             • Participate in hackathons and competitions\n\
             • Build relationships with faculty members\n\
             • Create professional online presence\n\
             \n\
             **Work-Life Balance:**\n\
             • Schedule fun activities weekly\n\
             • Learn to say no when overwhelmed\n\
             • Maintain physical health with exercise\n\
             • Pursue hobbies and interests\n\
             • Socialize with friends and family\n\
             \n\
             **Time Management:**\n\
             • Academic time (6-8 hours daily)\n\
             • Extracurricular (2-3 hours weekly)\n\
             • Personal time (1-2 hours daily)\n\
             • Social activities (weekends)\n\
             • Rest and relaxation (adequate sleep)",
        ),
        _ => None,
    }
}
