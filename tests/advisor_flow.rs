//! Integration tests for the full advisor flow.
//!
//! These tests verify the end-to-end path the presentation layer
//! drives: catalog load → tag selection → send → transcript/log/history
//! updates → export → reset, using the mock chat provider and a
//! temporary directory instead of external services.

use std::sync::Arc;

use tempfile::TempDir;

use health_compass::adapters::ai::{MockChatProvider, MockReply};
use health_compass::adapters::export::TextFileExporter;
use health_compass::adapters::knowledge::JsonFileKnowledgeSource;
use health_compass::application::{Advisor, ChatSession, SendError, UNCONFIGURED_REPLY};
use health_compass::config::LanguageConfig;
use health_compass::domain::knowledge::KnowledgeCatalog;
use health_compass::domain::Speaker;
use health_compass::ports::{ChatRole, KnowledgeSource};

const PREAMBLE: &str = "You are a helpful health assistant.";
const DISCLAIMER: &str = "\n\nThis is general advice. Consult a doctor.";

const CATALOG_JSON: &str = r#"[
    {
        "tag": "fever",
        "patterns": ["I have a fever", "My temperature is high"],
        "tips": ["Stay hydrated"],
        "severity": {"mild": "rest and fluids", "severe": "see a doctor"}
    },
    {
        "tag": "cough",
        "patterns": ["I can't stop coughing"]
    }
]"#;

async fn load_catalog(dir: &TempDir) -> KnowledgeCatalog {
    let path = dir.path().join("health_data.json");
    std::fs::write(&path, CATALOG_JSON).unwrap();
    let entries = JsonFileKnowledgeSource::new(&path).load().await.unwrap();
    KnowledgeCatalog::new(entries)
}

fn advisor(catalog: KnowledgeCatalog, provider: MockChatProvider) -> Advisor {
    let session = ChatSession::new(Some(Arc::new(provider)), PREAMBLE);
    Advisor::new(catalog, None, session, LanguageConfig::default(), DISCLAIMER)
}

// =============================================================================
// Catalog → send → export
// =============================================================================

#[tokio::test]
async fn full_conversation_flow() {
    let dir = TempDir::new().unwrap();
    let catalog = load_catalog(&dir).await;
    let provider = MockChatProvider::new().with_reply("Rest and drink fluids.");
    let mock = provider.clone();
    let mut advisor = advisor(catalog, provider);

    // Catalog drives the selection surface.
    assert_eq!(advisor.tags(), vec!["fever", "cough"]);
    let selection = advisor.select_tag("fever");
    assert_eq!(selection.severity_levels, vec!["mild", "severe"]);
    assert_eq!(advisor.severity_advice("fever", "severe"), "see a doctor");

    // Draft and send.
    advisor.set_input_text("I have a fever");
    advisor.select_severity("mild");
    let outcome = advisor.send().await.unwrap();

    assert_eq!(outcome.user_text, "I have a fever");
    assert_eq!(outcome.reply, format!("Rest and drink fluids.{DISCLAIMER}"));

    // The provider saw the profile-embedded prompt with the preamble
    // as prior history.
    let calls = mock.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].history.len(), 1);
    assert!(calls[0].turn.starts_with("I have a fever\n\nUser Profile:"));

    // Transcript pairs User then Bot; history grew to preamble + 2.
    let lines = advisor.transcript().all();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].speaker(), Speaker::User);
    assert_eq!(lines[1].speaker(), Speaker::Bot);
    assert_eq!(advisor.chat_history().len(), 3);
    assert_eq!(advisor.chat_history()[2].role, ChatRole::Model);

    // The symptom log captured the report.
    assert_eq!(advisor.symptom_log().len(), 1);
    assert_eq!(advisor.symptom_counts().get("fever"), Some(&1));

    // Export renders one line per entry.
    let out = dir.path().join("transcript.txt");
    advisor.export(&TextFileExporter::new(), &out).await.unwrap();
    let written = std::fs::read_to_string(&out).unwrap();
    assert!(written.starts_with("User: I have a fever\nBot: Rest and drink fluids."));
}

#[tokio::test]
async fn export_matches_line_format_exactly() {
    let provider = MockChatProvider::new();
    let session = ChatSession::new(Some(Arc::new(provider)), PREAMBLE);
    let mut advisor = Advisor::new(
        KnowledgeCatalog::empty(),
        None,
        session,
        LanguageConfig::default(),
        "",
    );

    // Build the transcript through the public surface: one exchange
    // with scripted texts.
    advisor.select_tag("fever");
    advisor.set_input_text("hi");
    advisor.send().await.unwrap();

    let dir = TempDir::new().unwrap();
    let out = dir.path().join("t.txt");
    advisor.export(&TextFileExporter::new(), &out).await.unwrap();

    let written = std::fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "User: hi");
    assert_eq!(lines[1], "Bot: I'm a mock assistant.");
}

// =============================================================================
// Validation and degraded modes
// =============================================================================

#[tokio::test]
async fn failed_validation_mutates_nothing_across_the_stack() {
    let dir = TempDir::new().unwrap();
    let catalog = load_catalog(&dir).await;
    let provider = MockChatProvider::new();
    let mock = provider.clone();
    let mut advisor = advisor(catalog, provider);

    // No tag.
    advisor.set_input_text("hello");
    assert_eq!(advisor.send().await.unwrap_err(), SendError::NoTagSelected);

    // Tag but blank text. select_tag clears the text draft.
    advisor.select_tag("fever");
    assert_eq!(advisor.send().await.unwrap_err(), SendError::EmptyInput);

    assert!(advisor.transcript().is_empty());
    assert!(advisor.symptom_log().is_empty());
    assert_eq!(advisor.chat_history().len(), 1);
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn provider_failure_still_keeps_stores_in_lockstep() {
    let dir = TempDir::new().unwrap();
    let catalog = load_catalog(&dir).await;
    let provider = MockChatProvider::new().with_failure(MockReply::NetworkDown);
    let mut advisor = advisor(catalog, provider);

    advisor.select_tag("fever");
    advisor.set_input_text("I have a fever");
    let outcome = advisor.send().await.unwrap();

    // The error text is the displayed reply (plus disclaimer) AND the
    // recorded model turn.
    assert!(outcome.reply.starts_with("Error contacting chat service:"));
    assert_eq!(advisor.chat_history().len(), 3);
    let model_turn = &advisor.chat_history()[2];
    assert!(outcome.reply.starts_with(&model_turn.text));
    assert_eq!(advisor.symptom_log().len(), 1);
}

#[tokio::test]
async fn missing_credential_degrades_to_fixed_notice() {
    let session = ChatSession::new(None, PREAMBLE);
    let mut advisor = Advisor::new(
        KnowledgeCatalog::empty(),
        None,
        session,
        LanguageConfig::default(),
        DISCLAIMER,
    );

    advisor.select_tag("fever");
    advisor.set_input_text("hello");
    let outcome = advisor.send().await.unwrap();

    assert!(outcome.reply.starts_with(UNCONFIGURED_REPLY));
    assert_eq!(advisor.chat_history().len(), 3);
}

#[tokio::test]
async fn unloadable_catalog_degrades_to_empty_lookups() {
    let source = JsonFileKnowledgeSource::new("/nonexistent/health_data.json");
    let (catalog, notice) = match source.load().await {
        Ok(entries) => (KnowledgeCatalog::new(entries), None),
        Err(e) => (KnowledgeCatalog::empty(), Some(e.to_string())),
    };

    let session = ChatSession::new(None, PREAMBLE);
    let advisor = Advisor::new(catalog, notice, session, LanguageConfig::default(), DISCLAIMER);

    assert!(advisor.tags().is_empty());
    assert!(advisor.catalog_notice().unwrap().contains("not readable"));
    assert_eq!(advisor.severity_advice("fever", "severe"), "");
}

// =============================================================================
// Reset and snapshots
// =============================================================================

#[tokio::test]
async fn reset_clears_conversation_state_but_keeps_profile() {
    let dir = TempDir::new().unwrap();
    let catalog = load_catalog(&dir).await;
    let mut advisor = advisor(catalog, MockChatProvider::new().with_reply("ok"));

    advisor.set_age("40");
    advisor.set_language("Urdu");
    advisor.select_tag("fever");
    advisor.set_input_text("I have a fever");
    advisor.send().await.unwrap();

    advisor.reset();

    assert!(advisor.transcript().is_empty());
    assert!(advisor.symptom_log().is_empty());
    assert_eq!(advisor.chat_history().len(), 1);
    assert_eq!(advisor.chat_history()[0].text, PREAMBLE);
    assert_eq!(advisor.profile().age(), "40");
    assert_eq!(advisor.language_code(), "ur");
}

#[tokio::test]
async fn logged_profile_snapshots_survive_later_edits() {
    let dir = TempDir::new().unwrap();
    let catalog = load_catalog(&dir).await;
    let mut advisor = advisor(catalog, MockChatProvider::new().with_reply("ok"));

    advisor.set_age("30");
    advisor.select_tag("fever");
    advisor.set_input_text("I have a fever");
    advisor.send().await.unwrap();

    advisor.set_age("99");

    let logged = &advisor.symptom_log().entries()[0];
    assert_eq!(logged.profile().age(), "30");
    assert_eq!(advisor.profile().age(), "99");
}
