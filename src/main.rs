//! Health Compass terminal frontend.
//!
//! Thin presentation layer over the `Advisor` controller: a line-based
//! REPL exposing tag selection, profile editing, send, export, speech
//! capture, and read-aloud.

use std::error::Error;
use std::io::Write as _;
use std::path::Path;
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use health_compass::adapters::ai::{GeminiConfig, GeminiProvider};
use health_compass::adapters::export::TextFileExporter;
use health_compass::adapters::knowledge::JsonFileKnowledgeSource;
use health_compass::adapters::speech::{
    CommandSpeechRecognizer, CommandTextToSpeech, SpeechPlayback,
};
use health_compass::application::{Advisor, ChatSession, TagSelection};
use health_compass::config::AppConfig;
use health_compass::domain::knowledge::KnowledgeCatalog;
use health_compass::ports::{
    ChatProvider, KnowledgeSource, RecognitionOutcome, SpeechRecognizer, TextToSpeech,
};

const EMERGENCY_NOTICE: &str =
    "If this is a medical emergency, call your local emergency number immediately!";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if let Err(e) = run().await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    let source = JsonFileKnowledgeSource::new(&config.knowledge.path);
    let (catalog, notice) = match source.load().await {
        Ok(entries) => (KnowledgeCatalog::new(entries), None),
        Err(e) => {
            tracing::warn!(error = %e, "knowledge catalog unavailable");
            (KnowledgeCatalog::empty(), Some(e.to_string()))
        }
    };

    let provider: Option<Arc<dyn ChatProvider>> = if config.ai.has_credential() {
        let key = config.ai.gemini_api_key.clone().unwrap_or_default();
        let gemini = GeminiProvider::new(
            GeminiConfig::new(key)
                .with_model(config.ai.model.clone())
                .with_base_url(config.ai.base_url.clone())
                .with_timeout(config.ai.timeout())
                .with_max_retries(config.ai.max_retries),
        )?;
        Some(Arc::new(gemini))
    } else {
        tracing::warn!("no chat credential configured, replies will be a fixed notice");
        None
    };

    let session = ChatSession::new(provider, config.chat.system_preamble.clone());
    let mut advisor = Advisor::new(
        catalog,
        notice,
        session,
        config.language.clone(),
        config.chat.disclaimer.clone(),
    );

    let recognizer = config.speech.recognizer_command.as_ref().map(|cmd| {
        CommandSpeechRecognizer::new(
            cmd.clone(),
            config.speech.listen_timeout(),
            config.speech.phrase_time_limit(),
        )
    });
    let mut playback = config.speech.synthesizer_command.as_ref().map(|cmd| {
        let engine: Arc<dyn TextToSpeech> = Arc::new(CommandTextToSpeech::new(cmd.clone()));
        SpeechPlayback::new(engine)
    });
    let exporter = TextFileExporter::new();

    println!("Health Compass. Type :help for commands.");
    if let Some(notice) = advisor.catalog_notice() {
        println!("note: {notice}");
    }
    println!("Bot: Hello! Please select a tag or type your health question.");

    let mut selection: Option<TagSelection> = None;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    prompt()?;
    while let Some(line) = lines.next_line().await? {
        let line = line.trim().to_string();
        let (command, rest) = match line.split_once(' ') {
            Some((c, r)) => (c, r.trim()),
            None => (line.as_str(), ""),
        };

        match command {
            "" => {}
            ":help" => print_help(),
            ":quit" | ":q" => break,
            ":tags" => {
                let tags = advisor.tags();
                if tags.is_empty() {
                    println!("No tags available.");
                } else {
                    println!("Tags: {}", tags.join(", "));
                }
            }
            ":tag" => {
                let picked = advisor.select_tag(rest);
                println!("Selected tag: {rest}");
                for (i, pattern) in picked.patterns.iter().enumerate() {
                    println!("  [{i}] {pattern}");
                }
                if !picked.tips.is_empty() {
                    println!("Tips: {}", picked.tips.join(" | "));
                }
                if !picked.severity_levels.is_empty() {
                    println!("Severity levels: {}", picked.severity_levels.join(", "));
                }
                selection = Some(picked);
            }
            ":pattern" => match selection
                .as_ref()
                .and_then(|s| rest.parse::<usize>().ok().and_then(|i| s.patterns.get(i)))
            {
                Some(pattern) => {
                    println!("Pattern: {pattern}");
                    advisor.select_pattern(pattern.clone());
                }
                None => println!("No such pattern. Select a tag and use :pattern <index>."),
            },
            ":severity" => match advisor.select_severity(rest) {
                Some(advice) => println!("Severity advice: {advice}"),
                None => println!("No advice for severity '{rest}'."),
            },
            ":age" => advisor.set_age(rest),
            ":gender" => advisor.set_gender(rest),
            ":lang" => advisor.set_language(rest),
            ":profile" => println!("{}", advisor.profile().summary()),
            ":send" => send(&mut advisor, "").await,
            ":speak" => match &recognizer {
                None => println!("No recognizer configured."),
                Some(recognizer) => match recognizer.listen(advisor.language_code()).await {
                    Ok(RecognitionOutcome::Recognized(text)) => {
                        println!("You (via speech): {text}");
                        advisor.set_input_text(text);
                    }
                    Ok(RecognitionOutcome::NoSpeech) => println!("No speech detected."),
                    Ok(RecognitionOutcome::Unintelligible) => {
                        println!("Could not recognize speech. Please speak clearly.")
                    }
                    Err(e) => println!("Audio input error: {e}"),
                },
            },
            ":read" => match &mut playback {
                None => println!("No synthesizer configured."),
                Some(playback) if playback.is_playing() => {
                    if let Err(e) = playback.stop().await {
                        println!("Audio output error: {e}");
                    }
                }
                Some(playback) => match advisor.last_bot_message() {
                    None => println!("No bot message to read."),
                    Some(message) => {
                        let language = advisor.language_code().to_string();
                        if let Err(e) = playback.start(message.to_string(), language) {
                            println!("Audio output error: {e}");
                        }
                    }
                },
            },
            ":chart" => {
                let counts = advisor.symptom_counts();
                if counts.is_empty() {
                    println!("No symptoms logged yet.");
                } else {
                    let mut counts: Vec<_> = counts.into_iter().collect();
                    counts.sort();
                    for (tag, count) in counts {
                        println!("{tag:<12} {}", "#".repeat(count));
                    }
                }
            }
            ":export" => {
                if rest.is_empty() {
                    println!("Usage: :export <path>");
                } else {
                    match advisor.export(&exporter, Path::new(rest)).await {
                        Ok(()) => println!("Conversation exported to {rest}."),
                        Err(e) => println!("Export error: {e}"),
                    }
                }
            }
            ":emergency" => println!("{EMERGENCY_NOTICE}"),
            ":reset" => {
                advisor.reset();
                selection = None;
                println!("Bot: Conversation reset. Please select a tag or type your question.");
            }
            _ => send(&mut advisor, &line).await,
        }

        prompt()?;
    }

    Ok(())
}

/// Runs the send action, optionally setting typed text first.
async fn send(advisor: &mut Advisor, typed: &str) {
    if !typed.is_empty() {
        advisor.set_input_text(typed);
    }
    match advisor.send().await {
        Ok(outcome) => {
            println!("You: {}", outcome.user_text);
            println!("Bot: {}", outcome.reply.trim());
        }
        Err(e) => println!("Input error: {e}."),
    }
}

fn prompt() -> std::io::Result<()> {
    print!("> ");
    std::io::stdout().flush()
}

fn print_help() {
    println!(
        "Commands:\n  \
         :tags                 list symptom tags\n  \
         :tag <name>           select a tag\n  \
         :pattern <index>      pick a canned question for the tag\n  \
         :severity <level>     pick a severity level\n  \
         :age/:gender/:lang    edit the profile\n  \
         :profile              show the profile\n  \
         :send                 send the drafted question\n  \
         :speak                capture a question by voice\n  \
         :read                 read the last reply aloud (toggle)\n  \
         :chart                symptom counts by tag\n  \
         :export <path>        export the transcript\n  \
         :emergency            emergency notice\n  \
         :reset                clear the conversation\n  \
         :quit                 exit\n\
         Anything else is sent as your question."
    );
}
