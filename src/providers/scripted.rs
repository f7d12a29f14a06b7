//! Scripted providers for tests and host harnesses
//!
//! Queue transcripts ahead of time, then run the practice flow exactly as
//! it would run against a platform recognizer.

use std::collections::VecDeque;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::error::{Error, Result};
use crate::providers::recognition::{
    RecognitionProvider, RecognitionRequest, RecognitionResponse,
};
use crate::providers::synthesis::{SpeechPrompt, SynthesisProvider};

/// Recognition provider that replays queued transcripts in order
#[derive(Default)]
pub struct ScriptedRecognizer {
    queue: Mutex<VecDeque<RecognitionResponse>>,
}

impl ScriptedRecognizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a plain transcript
    pub fn push_transcript(&self, text: impl Into<String>) {
        self.queue
            .lock()
            .push_back(RecognitionResponse::new(text));
    }

    /// Queue a full response, confidence and all
    pub fn push_response(&self, response: RecognitionResponse) {
        self.queue.lock().push_back(response);
    }

    pub fn remaining(&self) -> usize {
        self.queue.lock().len()
    }
}

#[async_trait]
impl RecognitionProvider for ScriptedRecognizer {
    fn name(&self) -> &'static str {
        "scripted"
    }

    async fn recognize(&self, _request: RecognitionRequest) -> Result<RecognitionResponse> {
        self.queue
            .lock()
            .pop_front()
            .ok_or_else(|| Error::Recognition("no scripted transcript queued".to_string()))
    }

    fn is_configured(&self) -> bool {
        true
    }
}

/// Synthesis provider that records prompts instead of playing audio.
///
/// Locales listed as failing return an error, which exercises the
/// playback fallback chain.
#[derive(Default)]
pub struct RecordingSynthesizer {
    spoken: Mutex<Vec<SpeechPrompt>>,
    failing_locales: Vec<String>,
}

impl RecordingSynthesizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every prompt in the given locales fail
    pub fn with_failing_locales(locales: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            spoken: Mutex::new(Vec::new()),
            failing_locales: locales.into_iter().map(Into::into).collect(),
        }
    }

    /// Everything successfully "spoken" so far
    pub fn spoken(&self) -> Vec<SpeechPrompt> {
        self.spoken.lock().clone()
    }
}

#[async_trait]
impl SynthesisProvider for RecordingSynthesizer {
    fn name(&self) -> &'static str {
        "recording"
    }

    async fn speak(&self, prompt: SpeechPrompt) -> Result<()> {
        if self.failing_locales.contains(&prompt.settings.locale) {
            return Err(Error::Synthesis(format!(
                "no voice for locale {}",
                prompt.settings.locale
            )));
        }
        self.spoken.lock().push(prompt);
        Ok(())
    }

    fn is_configured(&self) -> bool {
        true
    }
}
