//! Chat engine
//!
//! Every message runs through the global rules first (farewell, summary
//! request, category menu, out-of-scope gate), then falls through to the
//! guided flow for the current step. Matching is substring containment
//! over the lowercased message throughout.

use std::sync::Arc;

use tracing::debug;

use crate::logic::advisor::{compose_advice, personalized_summary, TemplateChooser};
use crate::logic::knowledge::{self, categories};
use crate::logic::model::UnknownCategoryError;
use crate::logic::session::StudentProfile;

use super::keywords;
use super::state::{ConversationState, Step};

/// Global keyword rules, checked in priority order before any step logic
enum GlobalRule {
    Farewell,
    Summary,
    Category(&'static str),
    OutOfScope,
}

/// Stateless dialogue handler. Conversation state lives in the session
/// store; the engine only transforms (state, message) into (state',
/// reply).
#[derive(Clone)]
pub struct ChatAdvisor {
    chooser: Arc<dyn TemplateChooser>,
}

impl ChatAdvisor {
    pub fn new(chooser: Arc<dyn TemplateChooser>) -> Self {
        Self { chooser }
    }

    /// Advance the conversation by one message and return the reply.
    ///
    /// `profile` is the cached prediction for this session, if the form
    /// has been submitted. Errors only on a corrupt stored class label.
    pub fn handle_message(
        &self,
        conv: &mut ConversationState,
        message: &str,
        profile: Option<&StudentProfile>,
    ) -> Result<String, UnknownCategoryError> {
        let user_lower = message.trim().to_lowercase();

        if let Some(rule) = self.match_global_rule(conv, &user_lower) {
            return self.apply_global_rule(rule, conv, &user_lower, profile);
        }

        match conv.step {
            Step::Greeting => {
                conv.step = Step::GetName;
                Ok("Hello! I'm your academic advisor. What's your name?".to_string())
            }
            Step::GetName => Ok(self.take_name(conv, message)),
            Step::ShowSuggestions => self.answer_suggestions_offer(conv, &user_lower, profile),
            Step::Completed => Ok(self.answer_completed(conv, message, &user_lower)),
        }
    }

    /// First matching global rule, if any. The out-of-scope gate only
    /// applies once the guided flow has finished; earlier steps expect
    /// free-form input (a name is almost never an academic keyword).
    /// An empty message matches no keyword, so before completion it
    /// falls through to the step logic; after completion it deflects.
    fn match_global_rule(
        &self,
        conv: &ConversationState,
        user_lower: &str,
    ) -> Option<GlobalRule> {
        if keywords::contains_any(user_lower, &keywords::FAREWELL) {
            return Some(GlobalRule::Farewell);
        }
        if keywords::contains_any(user_lower, &keywords::SUMMARY_REQUEST) {
            return Some(GlobalRule::Summary);
        }
        if let Some(key) = categories::match_category(user_lower) {
            return Some(GlobalRule::Category(key));
        }
        if conv.step == Step::Completed && keywords::is_out_of_scope(user_lower) {
            return Some(GlobalRule::OutOfScope);
        }
        None
    }

    // Global rules answer without advancing the guided flow; a student
    // who says goodbye mid-flow resumes where they left off.
    fn apply_global_rule(
        &self,
        rule: GlobalRule,
        conv: &ConversationState,
        user_lower: &str,
        profile: Option<&StudentProfile>,
    ) -> Result<String, UnknownCategoryError> {
        match rule {
            GlobalRule::Farewell => {
                debug!(name = conv.display_name(), "farewell received");
                Ok(format!(
                    "Goodbye {}! Feel free to come back anytime for academic advice. Good luck with your studies! 🎓",
                    conv.display_name()
                ))
            }
            GlobalRule::Summary => match profile {
                Some(profile) => personalized_summary(profile, conv.display_name()),
                None => Ok("I don't have your academic data yet. Please submit the form first to get your personalized summary.".to_string()),
            },
            GlobalRule::Category(key) => {
                debug!(category = key, message = user_lower, "category menu hit");
                Ok(categories::category_response(key)
                    .unwrap_or("I can help you with that! Please ask more specifically.")
                    .to_string())
            }
            GlobalRule::OutOfScope => Ok(
                "Hmm 🤔 I'm not sure I have information about that. I can provide help with academic topics like study techniques, career guidance, exam preparation, and more.\n\nClick any option below to get started!"
                    .to_string(),
            ),
        }
    }

    /// Name capture: stored verbatim (trimmed), no normalization
    fn take_name(&self, conv: &mut ConversationState, message: &str) -> String {
        let name = message.trim();
        if name.len() < 2 {
            return "Please enter a valid name:".to_string();
        }
        conv.name = Some(name.to_string());
        conv.step = Step::ShowSuggestions;
        format!(
            "Nice to meet you, {}! I can analyze your academic data and provide personalized suggestions. Would you like me to do that? (yes/no)",
            name
        )
    }

    fn answer_suggestions_offer(
        &self,
        conv: &mut ConversationState,
        user_lower: &str,
        profile: Option<&StudentProfile>,
    ) -> Result<String, UnknownCategoryError> {
        if keywords::contains_any(user_lower, &keywords::AFFIRMATIVE) {
            match profile {
                Some(profile) => {
                    let advice = compose_advice(
                        &profile.features,
                        &profile.predicted_class,
                        self.chooser.as_ref(),
                    )?;
                    conv.step = Step::Completed;
                    Ok(format!(
                        "Great! Here are my personalized suggestions for you, {}:\n\n{}",
                        conv.display_name(),
                        advice
                    ))
                }
                None => Ok(
                    "I don't have your academic data. Please submit the form first.".to_string(),
                ),
            }
        } else if keywords::contains_any(user_lower, &keywords::NEGATIVE) {
            conv.step = Step::Completed;
            Ok(format!(
                "No problem {}! Feel free to ask anytime you need academic advice.",
                conv.display_name()
            ))
        } else {
            Ok(
                "Please answer with 'yes' or 'no'. Would you like personalized academic suggestions?"
                    .to_string(),
            )
        }
    }

    /// Completed-state small talk and knowledge lookup
    fn answer_completed(
        &self,
        conv: &ConversationState,
        message: &str,
        user_lower: &str,
    ) -> String {
        let name = conv.display_name();

        if keywords::contains_any(user_lower, &keywords::GREETING) {
            return format!("Hello again {}! How can I help you today?", name);
        }
        if keywords::contains_any(user_lower, &keywords::THANKS) {
            return format!("You're welcome {}! Good luck with your studies! 🎓", name);
        }
        if keywords::contains_any(user_lower, &keywords::HELP) {
            return format!(
                "I can help with study techniques, time management, and academic planning. What specifically do you need, {}?",
                name
            );
        }

        let hits = knowledge::search(user_lower);
        if hits.is_empty() {
            return format!(
                "I'm here to help with academic suggestions, {}. You can ask about study tips or specific improvements!",
                name
            );
        }

        let mut reply = format!("Here's what I found about '{}':\n\n", message.trim());
        for hit in hits.iter().take(2) {
            reply.push_str(&format!(
                "**{}** ({})\n{}\n\n",
                hit.topic, hit.category, hit.content
            ));
        }
        reply
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::advisor::RandomChooser;
    use crate::logic::features::FeatureVector;
    use crate::logic::model::PerformanceClass;

    struct FixedChooser(usize);

    impl TemplateChooser for FixedChooser {
        fn choose(&self, pool_len: usize) -> usize {
            self.0.min(pool_len - 1)
        }
    }

    fn advisor() -> ChatAdvisor {
        ChatAdvisor::new(Arc::new(FixedChooser(0)))
    }

    fn profile() -> StudentProfile {
        StudentProfile::new(
            FeatureVector {
                total_cgpa: 7.2,
                attendance: 78.0,
                study_hours: 15,
                backlogs: 2,
                competitions: 0,
                projects_internships: 1,
                prevsem_cgpa: 7.0,
                confidence_level: 6,
            },
            PerformanceClass::Average,
        )
    }

    #[test]
    fn test_fresh_session_asks_for_name() {
        let advisor = advisor();
        let mut conv = ConversationState::new();

        let reply = advisor.handle_message(&mut conv, "", None).unwrap();

        assert!(reply.contains("What's your name?"));
        assert_eq!(conv.step, Step::GetName);
    }

    #[test]
    fn test_short_name_is_rejected() {
        let advisor = advisor();
        let mut conv = ConversationState::new();
        advisor.handle_message(&mut conv, "", None).unwrap();

        let reply = advisor.handle_message(&mut conv, "A", None).unwrap();

        assert_eq!(reply, "Please enter a valid name:");
        assert_eq!(conv.step, Step::GetName);
        assert!(conv.name.is_none());
    }

    #[test]
    fn test_name_is_stored_verbatim() {
        let advisor = advisor();
        let mut conv = ConversationState::new();
        advisor.handle_message(&mut conv, "", None).unwrap();

        let reply = advisor.handle_message(&mut conv, "  Priya S  ", None).unwrap();

        assert!(reply.contains("Nice to meet you, Priya S!"));
        assert_eq!(conv.name.as_deref(), Some("Priya S"));
        assert_eq!(conv.step, Step::ShowSuggestions);
    }

    #[test]
    fn test_affirmative_without_profile_prompts_for_form() {
        let advisor = advisor();
        let mut conv = ConversationState::new();
        conv.step = Step::ShowSuggestions;
        conv.name = Some("Priya".to_string());

        let reply = advisor.handle_message(&mut conv, "yes please", None).unwrap();

        assert!(reply.contains("Please submit the form first"));
        assert_eq!(conv.step, Step::ShowSuggestions);
    }

    #[test]
    fn test_affirmative_with_profile_delivers_advice() {
        let advisor = advisor();
        let mut conv = ConversationState::new();
        conv.step = Step::ShowSuggestions;
        conv.name = Some("Priya".to_string());
        let profile = profile();

        let reply = advisor
            .handle_message(&mut conv, "sure", Some(&profile))
            .unwrap();

        assert!(reply.starts_with("Great! Here are my personalized suggestions for you, Priya:"));
        assert!(reply.contains("I've analyzed your academic profile"));
        assert_eq!(conv.step, Step::Completed);
    }

    #[test]
    fn test_negative_completes_without_advice() {
        let advisor = advisor();
        let mut conv = ConversationState::new();
        conv.step = Step::ShowSuggestions;
        conv.name = Some("Priya".to_string());

        let reply = advisor.handle_message(&mut conv, "nope", None).unwrap();

        assert!(reply.starts_with("No problem Priya!"));
        assert_eq!(conv.step, Step::Completed);
    }

    #[test]
    fn test_ambiguous_offer_reply_reprompts() {
        let advisor = advisor();
        let mut conv = ConversationState::new();
        conv.step = Step::ShowSuggestions;
        conv.name = Some("Priya".to_string());

        let reply = advisor.handle_message(&mut conv, "maybe", None).unwrap();

        assert!(reply.contains("Please answer with 'yes' or 'no'"));
        assert_eq!(conv.step, Step::ShowSuggestions);
    }

    #[test]
    fn test_farewell_beats_everything() {
        let advisor = advisor();
        let mut conv = ConversationState::new();
        conv.step = Step::Completed;
        conv.name = Some("Priya".to_string());
        let profile = profile();

        // "summary" is also present, farewell wins
        let reply = advisor
            .handle_message(&mut conv, "bye, skip the summary", Some(&profile))
            .unwrap();

        assert!(reply.starts_with("Goodbye Priya!"));
    }

    #[test]
    fn test_farewell_without_name_uses_fallback() {
        let advisor = advisor();
        let mut conv = ConversationState::new();

        let reply = advisor.handle_message(&mut conv, "bye", None).unwrap();

        assert!(reply.starts_with("Goodbye Student!"));
    }

    #[test]
    fn test_farewell_does_not_advance_the_flow() {
        let advisor = advisor();
        let mut conv = ConversationState::new();

        let reply = advisor.handle_message(&mut conv, "bye", None).unwrap();
        assert!(reply.starts_with("Goodbye Student!"));
        assert_eq!(conv.step, Step::Greeting);

        // coming back still starts the guided flow from the top
        let reply = advisor.handle_message(&mut conv, "hi again", None).unwrap();
        assert!(reply.contains("What's your name?"));
        assert_eq!(conv.step, Step::GetName);
    }

    #[test]
    fn test_empty_message_after_completion_deflects() {
        let advisor = advisor();
        let mut conv = ConversationState::new();
        conv.step = Step::Completed;
        conv.name = Some("Priya".to_string());

        let reply = advisor.handle_message(&mut conv, "", None).unwrap();

        assert!(reply.contains("I'm not sure I have information about that"));
        assert!(!reply.contains("Here's what I found"));
    }

    #[test]
    fn test_summary_rule_beats_category_menu() {
        let advisor = advisor();
        let mut conv = ConversationState::new();
        conv.step = Step::Completed;
        conv.name = Some("Priya".to_string());
        let profile = profile();

        // "analysis" would hit the category menu, the summary words win
        let reply = advisor
            .handle_message(&mut conv, "summary of my analysis", Some(&profile))
            .unwrap();

        assert!(reply.contains("Academic Summary for Priya"));
    }

    #[test]
    fn test_summary_without_profile() {
        let advisor = advisor();
        let mut conv = ConversationState::new();
        conv.step = Step::Completed;

        let reply = advisor.handle_message(&mut conv, "show my summary", None).unwrap();

        assert!(reply.contains("I don't have your academic data yet"));
    }

    #[test]
    fn test_category_rule_interrupts_guided_flow() {
        let advisor = advisor();
        let mut conv = ConversationState::new();
        conv.step = Step::ShowSuggestions;
        conv.name = Some("Priya".to_string());

        let reply = advisor
            .handle_message(&mut conv, "career guidance placements", None)
            .unwrap();

        assert!(reply.contains("Career Guidance & Placements"));
        assert_eq!(conv.step, Step::ShowSuggestions);
    }

    #[test]
    fn test_out_of_scope_only_after_completion() {
        let advisor = advisor();

        let mut completed = ConversationState::new();
        completed.step = Step::Completed;
        let reply = advisor
            .handle_message(&mut completed, "pizza recipes", None)
            .unwrap();
        assert!(reply.contains("I'm not sure I have information about that"));

        // same message during name capture is taken as a name
        let mut naming = ConversationState::new();
        naming.step = Step::GetName;
        let reply = advisor.handle_message(&mut naming, "Pizza Recipes", None).unwrap();
        assert!(reply.contains("Nice to meet you, Pizza Recipes!"));
    }

    #[test]
    fn test_completed_greeting_and_thanks() {
        let advisor = advisor();
        let mut conv = ConversationState::new();
        conv.step = Step::Completed;
        conv.name = Some("Priya".to_string());

        let reply = advisor.handle_message(&mut conv, "hello", None).unwrap();
        assert_eq!(reply, "Hello again Priya! How can I help you today?");

        let reply = advisor.handle_message(&mut conv, "thanks", None).unwrap();
        assert_eq!(reply, "You're welcome Priya! Good luck with your studies! 🎓");
    }

    #[test]
    fn test_completed_knowledge_lookup_caps_at_two() {
        let advisor = ChatAdvisor::new(Arc::new(RandomChooser));
        let mut conv = ConversationState::new();
        conv.step = Step::Completed;
        conv.name = Some("Priya".to_string());

        let reply = advisor
            .handle_message(&mut conv, "pomodoro technique", None)
            .unwrap();

        assert!(reply.starts_with("Here's what I found about 'pomodoro technique':"));
        assert!(reply.contains("**Pomodoro**"));
        assert!(reply.matches("**").count() <= 10);
    }
}
