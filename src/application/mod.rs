//! Application layer - orchestration over the domain and ports.

mod chat_session;
mod controller;

pub use chat_session::{ChatSession, UNCONFIGURED_REPLY};
pub use controller::{Advisor, SendError, SendOutcome, TagSelection};
