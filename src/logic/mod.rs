//! Core logic - everything between the HTTP surface and the model
//! artifacts. Handlers stay thin; the behavior lives here.

pub mod advisor;
pub mod chat;
pub mod features;
pub mod knowledge;
pub mod model;
pub mod session;
