//! Session Store - per-session state, process-memory only
//!
//! Replaces the module-level mutable maps of the original design with an
//! explicit store: `get`/`put`/`delete` for both the cached student
//! profile and the conversation state, keyed by an opaque session id
//! supplied by the caller. Nothing survives a restart.
//!
//! Concurrency: sessions are independent; racing writes to the same
//! session are last-write-wins, which is acceptable at human interaction
//! timescale.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::chat::state::ConversationState;
use super::features::FeatureVector;
use super::model::PerformanceClass;

/// Cached prediction context for one session: the submitted metrics plus
/// the corrected class label. Overwritten by the next submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentProfile {
    pub features: FeatureVector,
    /// Corrected class, stored as its display label
    pub predicted_class: String,
}

impl StudentProfile {
    pub fn new(features: FeatureVector, final_class: PerformanceClass) -> Self {
        Self {
            features,
            predicted_class: final_class.as_str().to_string(),
        }
    }
}

/// In-memory store for profiles and conversations
#[derive(Default)]
pub struct SessionStore {
    profiles: RwLock<HashMap<String, StudentProfile>>,
    conversations: RwLock<HashMap<String, ConversationState>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_profile(&self, session_id: &str) -> Option<StudentProfile> {
        self.profiles.read().get(session_id).cloned()
    }

    pub fn put_profile(&self, session_id: &str, profile: StudentProfile) {
        self.profiles.write().insert(session_id.to_string(), profile);
    }

    pub fn delete_profile(&self, session_id: &str) -> bool {
        self.profiles.write().remove(session_id).is_some()
    }

    pub fn get_conversation(&self, session_id: &str) -> Option<ConversationState> {
        self.conversations.read().get(session_id).cloned()
    }

    pub fn put_conversation(&self, session_id: &str, state: ConversationState) {
        self.conversations
            .write()
            .insert(session_id.to_string(), state);
    }

    pub fn delete_conversation(&self, session_id: &str) -> bool {
        self.conversations.write().remove(session_id).is_some()
    }

    /// A fresh prediction restarts the guided flow but keeps the name the
    /// user already gave. No-op when the session has no conversation yet.
    pub fn reset_conversation_keep_name(&self, session_id: &str) {
        let mut conversations = self.conversations.write();
        if let Some(state) = conversations.get_mut(session_id) {
            state.reset_keep_name();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::chat::state::Step;

    fn profile() -> StudentProfile {
        StudentProfile {
            features: FeatureVector {
                total_cgpa: 8.0,
                attendance: 90.0,
                study_hours: 25,
                backlogs: 0,
                competitions: 1,
                projects_internships: 1,
                prevsem_cgpa: 7.8,
                confidence_level: 8,
            },
            predicted_class: "Good".to_string(),
        }
    }

    #[test]
    fn test_sessions_are_isolated() {
        let store = SessionStore::new();
        store.put_profile("alice", profile());

        assert!(store.get_profile("alice").is_some());
        assert!(store.get_profile("bob").is_none());

        let mut conv = ConversationState::new();
        conv.name = Some("Alice".to_string());
        store.put_conversation("alice", conv);
        assert!(store.get_conversation("bob").is_none());
    }

    #[test]
    fn test_delete_reports_presence() {
        let store = SessionStore::new();
        store.put_profile("s1", profile());

        assert!(store.delete_profile("s1"));
        assert!(!store.delete_profile("s1"));
        assert!(!store.delete_conversation("s1"));
    }

    #[test]
    fn test_resubmission_overwrites_profile() {
        let store = SessionStore::new();
        store.put_profile("s1", profile());

        let mut updated = profile();
        updated.predicted_class = "Excellent".to_string();
        store.put_profile("s1", updated);

        assert_eq!(store.get_profile("s1").unwrap().predicted_class, "Excellent");
    }

    #[test]
    fn test_reset_keeps_name() {
        let store = SessionStore::new();
        let mut conv = ConversationState::new();
        conv.step = Step::Completed;
        conv.name = Some("Priya".to_string());
        store.put_conversation("s1", conv);

        store.reset_conversation_keep_name("s1");

        let reset = store.get_conversation("s1").unwrap();
        assert_eq!(reset.step, Step::Greeting);
        assert_eq!(reset.name.as_deref(), Some("Priya"));
    }

    #[test]
    fn test_reset_without_conversation_is_noop() {
        let store = SessionStore::new();
        store.reset_conversation_keep_name("ghost");
        assert!(store.get_conversation("ghost").is_none());
    }
}
