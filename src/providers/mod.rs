//! Provider abstraction layer for speech recognition and synthesis
//!
//! Platform speech services stay behind these traits; the engine only sees
//! explicit request/response calls, never callback registration.
mod recognition;
mod scripted;
mod synthesis;

pub use recognition::{RecognitionProvider, RecognitionRequest, RecognitionResponse};
pub use scripted::{RecordingSynthesizer, ScriptedRecognizer};
pub use synthesis::{
    SpeechPrompt, SpeechSettings, SynthesisProvider, playback_plan, speak_with_fallback,
};
