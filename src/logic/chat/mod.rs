//! Chat Module - Dialogue State Machine
//!
//! A small guided flow (greeting -> name -> suggestions offer ->
//! completed) layered under a set of global keyword rules. All matching
//! is substring containment, first match wins.

pub mod engine;
pub mod keywords;
pub mod state;

pub use engine::ChatAdvisor;
pub use state::{ConversationState, Step};
