//! Speech recognition provider trait and types

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::Language;

/// Request for one listen-and-transcribe pass
#[derive(Debug, Clone)]
pub struct RecognitionRequest {
    /// Language the learner is expected to speak
    pub language: Language,
    /// Locale passed to the platform recognizer (e.g. "ar-SA")
    pub locale: Option<String>,
    /// How long to listen before giving up, in milliseconds
    pub timeout_ms: Option<u64>,
}

impl RecognitionRequest {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            locale: None,
            timeout_ms: None,
        }
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = Some(timeout_ms);
        self
    }

    /// Locale to hand the recognizer, falling back to the language tag
    pub fn effective_locale(&self) -> &str {
        self.locale.as_deref().unwrap_or(self.language.tag())
    }
}

/// Response from recognition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecognitionResponse {
    /// Best transcript for the utterance
    pub text: String,
    /// Confidence score (0.0 - 1.0) if the recognizer reports one
    pub confidence: Option<f32>,
    /// Detected language if available
    pub language: Option<String>,
}

impl RecognitionResponse {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            confidence: None,
            language: None,
        }
    }
}

/// Trait for speech recognition providers
#[async_trait]
pub trait RecognitionProvider: Send + Sync {
    /// Get the provider name
    fn name(&self) -> &'static str;

    /// Run one recognition pass and resolve to a transcript
    async fn recognize(&self, request: RecognitionRequest) -> Result<RecognitionResponse>;

    /// Check if the provider is configured and ready
    fn is_configured(&self) -> bool;
}
