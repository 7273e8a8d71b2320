//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the application core and the outside world. Adapters implement them.
//!
//! - `ChatProvider` - chat completion service
//! - `KnowledgeSource` - static catalog loading
//! - `TranscriptExporter` - transcript serialization to a destination
//! - `SpeechRecognizer` / `TextToSpeech` - speech engines

mod chat_provider;
mod knowledge_source;
mod speech;
mod transcript_export;

pub use chat_provider::{ChatError, ChatMessage, ChatProvider, ChatRequest, ChatRole, ProviderInfo};
pub use knowledge_source::{KnowledgeSource, LoadError};
pub use speech::{AudioError, RecognitionOutcome, SpeechRecognizer, TextToSpeech};
pub use transcript_export::{ExportError, TranscriptExporter};
