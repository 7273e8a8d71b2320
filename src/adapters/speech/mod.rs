//! Speech engine adapters.

mod command_stt;
mod command_tts;
mod playback;

pub use command_stt::CommandSpeechRecognizer;
pub use command_tts::CommandTextToSpeech;
pub use playback::SpeechPlayback;
