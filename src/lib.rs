//! Health Compass - Conversational Health Guidance
//!
//! This crate implements the conversation-state and knowledge-lookup core
//! of a health assistant: a static symptom catalog, an append-only symptom
//! log, a display transcript, and a chat session over an external LLM
//! completion service.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
