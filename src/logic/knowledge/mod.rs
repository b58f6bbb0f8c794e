//! Knowledge Base - static educational content
//!
//! Category -> topic -> text content, searched by keyword overlap. The
//! matching is deliberately substring-based (a topic token anywhere in
//! the message counts); that is the behavior the chat flow was tuned
//! around.

pub mod categories;

use serde::Serialize;

pub struct Topic {
    pub name: &'static str,
    pub content: &'static str,
}

pub struct Category {
    pub name: &'static str,
    pub topics: &'static [Topic],
}

/// One search match, rendered with title-cased names
#[derive(Debug, Clone, Serialize)]
pub struct SearchHit {
    pub category: String,
    pub topic: String,
    pub content: &'static str,
}

pub static KNOWLEDGE_BASE: &[Category] = &[
    Category {
        name: "study_techniques",
        topics: &[
            Topic {
                name: "pomodoro",
                content: "🎯 **Pomodoro Technique**: Study for 25 minutes, then take a 5-minute break. After 4 cycles, take a longer 15-30 minute break. This improves focus and prevents burnout.",
            },
            Topic {
                name: "active_recall",
                content: "🧠 **Active Recall**: Instead of re-reading, test yourself on the material. Use flashcards, practice questions, or teach the concepts to someone else.",
            },
            Topic {
                name: "spaced_repetition",
                content: "📅 **Spaced Repetition**: Review material at increasing intervals (1 day, 3 days, 1 week, 2 weeks). Use apps like Anki or create a revision schedule.",
            },
            Topic {
                name: "feynman",
                content: "💡 **Feynman Technique**: Choose a concept and explain it in simple terms as if teaching a child. Identify gaps in your understanding and simplify further.",
            },
        ],
    },
    Category {
        name: "time_management",
        topics: &[
            Topic {
                name: "weekly_schedule",
                content: "⏰ **Weekly Schedule**: Create a timetable with fixed study slots. Include: 2-3 hours daily for core subjects, 1 hour for revisions, and regular breaks.",
            },
            Topic {
                name: "priority_matrix",
                content: "🎯 **Eisenhower Matrix**: Categorize tasks as: 1. Urgent & Important (do now), 2. Important but not urgent (schedule), 3. Urgent but not important (delegate), 4. Neither (eliminate).",
            },
            Topic {
                name: "productivity_tips",
                content: "🚀 **Productivity Tips**: Study during your peak energy hours, eliminate distractions (phone off), use the '2-minute rule' for small tasks, and track your progress weekly.",
            },
        ],
    },
    Category {
        name: "subject_specific",
        topics: &[
            Topic {
                name: "programming",
                content: "💻 **Programming**: Practice daily on platforms like LeetCode/HackerRank. Build projects to apply concepts. Learn debugging techniques and version control with Git.",
            },
            Topic {
                name: "mathematics",
                content: "📐 **Mathematics**: Understand concepts before solving problems. Practice regularly, focus on weak areas, and review previous years' question papers.",
            },
            Topic {
                name: "theory_subjects",
                content: "📚 **Theory Subjects**: Create concise notes, use mind maps, teach concepts to others, and practice writing answers within time limits.",
            },
            Topic {
                name: "practical_labs",
                content: "🔬 **Practical Labs**: Prepare beforehand, understand the theory behind experiments, document properly, and analyze results critically.",
            },
        ],
    },
    Category {
        name: "exam_preparation",
        topics: &[
            Topic {
                name: "revision_strategy",
                content: "📖 **Revision Strategy**: 3-phase approach: 1. Quick overview (2 weeks before), 2. Detailed study (1 week before), 3. Final revision (last 3 days).",
            },
            Topic {
                name: "time_management_exams",
                content: "⏱️ **Exam Time Management**: Divide time according to marks, attempt known questions first, keep last 15 minutes for review, and don't panic if stuck.",
            },
            Topic {
                name: "stress_management",
                content: "😌 **Exam Stress Relief**: Practice deep breathing, get 7-8 hours sleep, eat healthy, take short breaks, and maintain positive self-talk.",
            },
        ],
    },
    Category {
        name: "career_guidance",
        topics: &[
            Topic {
                name: "higher_studies",
                content: "🎓 **Higher Studies**: Maintain 8.0+ CGPA, gain research experience, build strong relationships with professors for recommendations, and prepare for entrance exams early.",
            },
            Topic {
                name: "placements",
                content: "💼 **Placements**: Develop technical skills, build projects portfolio, practice communication skills, prepare for aptitude tests, and attend company presentations.",
            },
            Topic {
                name: "internships",
                content: "🏢 **Internships**: Start applying 3-4 months in advance, tailor your resume for each role, prepare for interviews, and treat internships as learning opportunities.",
            },
            Topic {
                name: "resume_building",
                content: "📄 **Resume Tips**: One-page format, action verbs, quantify achievements, include projects and skills, tailor for each application, and proofread carefully.",
            },
        ],
    },
    Category {
        name: "mental_health",
        topics: &[
            Topic {
                name: "stress_management",
                content: "🌿 **Stress Management**: Regular exercise, 7-8 hours sleep, healthy diet, mindfulness meditation, and talking to friends/family.",
            },
            Topic {
                name: "motivation",
                content: "🔥 **Staying Motivated**: Set small achievable goals, track progress, reward yourself, find study partners, and remember your long-term vision.",
            },
            Topic {
                name: "burnout_prevention",
                content: "🛑 **Avoid Burnout**: Take regular breaks, maintain hobbies, set boundaries, get enough sleep, and don't compare yourself to others.",
            },
        ],
    },
    Category {
        name: "campus_life",
        topics: &[
            Topic {
                name: "extracurricular",
                content: "🎭 **Extracurriculars**: Join clubs related to your interests, participate in college events, take leadership roles, and balance with academics.",
            },
            Topic {
                name: "networking",
                content: "🤝 **Networking**: Attend workshops, connect with seniors and professors, participate in tech communities, and build your LinkedIn profile.",
            },
            Topic {
                name: "time_balance",
                content: "⚖️ **Work-Life Balance**: Prioritize tasks, learn to say no, schedule fun activities, and maintain physical health alongside studies.",
            },
        ],
    },
];

/// snake_case -> "Title Case"
fn title_case(name: &str) -> String {
    name.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Search by topic-name overlap, then fall back to a looser match on the
/// first 20 content words.
pub fn search(query: &str) -> Vec<SearchHit> {
    let query_lower = query.to_lowercase();
    let mut results = Vec::new();

    for category in KNOWLEDGE_BASE {
        for topic in category.topics {
            let topic_lower = topic.name.to_lowercase();
            if topic_lower.contains(&query_lower)
                || topic.name.split_whitespace().any(|w| query_lower.contains(w))
            {
                results.push(SearchHit {
                    category: title_case(category.name),
                    topic: title_case(topic.name),
                    content: topic.content,
                });
            }
        }
    }

    if results.is_empty() {
        for category in KNOWLEDGE_BASE {
            for topic in category.topics {
                let content_lower = topic.content.to_lowercase();
                if content_lower
                    .split_whitespace()
                    .take(20)
                    .any(|w| query_lower.contains(w))
                {
                    results.push(SearchHit {
                        category: title_case(category.name),
                        topic: title_case(topic.name),
                        content: topic.content,
                    });
                }
            }
        }
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("study_techniques"), "Study Techniques");
        assert_eq!(title_case("pomodoro"), "Pomodoro");
    }

    #[test]
    fn test_search_by_topic_token() {
        let hits = search("tell me about pomodoro");
        assert!(!hits.is_empty());
        assert_eq!(hits[0].topic, "Pomodoro");
        assert_eq!(hits[0].category, "Study Techniques");
    }

    #[test]
    fn test_search_query_inside_topic_name() {
        // "recall" is a substring of the topic "active_recall"
        let hits = search("recall");
        assert!(hits.iter().any(|h| h.topic == "Active Recall"));
    }

    #[test]
    fn test_search_no_match_returns_empty() {
        let hits = search("zzz");
        assert!(hits.is_empty());
    }

    #[test]
    fn test_query_as_substring_of_topic_name() {
        // "repetition" sits inside the topic name "spaced_repetition";
        // substring semantics keep this a hit
        let hits = search("repetition");
        assert!(hits.iter().any(|h| h.topic == "Spaced Repetition"));
    }
}
