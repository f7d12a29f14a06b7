//! Speech synthesis provider trait and playback planning
//!
//! The engine never produces audio itself; it plans what the host should
//! speak and with which voice parameters.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::content::PracticeWord;
use crate::error::{Error, Result};

/// Voice parameters for one spoken prompt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeechSettings {
    /// Locale of the voice (e.g. "ar-SA", "ar", "en")
    pub locale: String,
    pub pitch: f32,
    pub rate: f32,
}

impl SpeechSettings {
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            pitch: 1.0,
            rate: 1.0,
        }
    }

    pub fn with_pitch(mut self, pitch: f32) -> Self {
        self.pitch = pitch;
        self
    }

    pub fn with_rate(mut self, rate: f32) -> Self {
        self.rate = rate;
        self
    }
}

/// One utterance the host should try to play
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeechPrompt {
    pub text: String,
    pub settings: SpeechSettings,
}

impl SpeechPrompt {
    pub fn new(text: impl Into<String>, settings: SpeechSettings) -> Self {
        Self {
            text: text.into(),
            settings,
        }
    }
}

/// Ordered fallback plan for playing a practice word aloud.
///
/// Saudi Arabic tuned slow for learning first, then generic Arabic, then
/// the phonetic rendering through an English voice. The host walks the
/// list until one attempt succeeds; [`speak_with_fallback`] does the walk.
pub fn playback_plan(word: &PracticeWord) -> Vec<SpeechPrompt> {
    vec![
        SpeechPrompt::new(
            &word.arabic,
            SpeechSettings::new("ar-SA").with_pitch(0.85).with_rate(0.5),
        ),
        SpeechPrompt::new(
            &word.arabic,
            SpeechSettings::new("ar").with_pitch(0.85).with_rate(0.5),
        ),
        SpeechPrompt::new(
            &word.phonetic,
            SpeechSettings::new("en").with_pitch(0.8).with_rate(0.6),
        ),
    ]
}

/// Trait for speech synthesis providers
#[async_trait]
pub trait SynthesisProvider: Send + Sync {
    /// Get the provider name
    fn name(&self) -> &'static str;

    /// Play one prompt to completion
    async fn speak(&self, prompt: SpeechPrompt) -> Result<()>;

    /// Check if the provider is configured and ready
    fn is_configured(&self) -> bool;
}

/// Walk a playback plan until one prompt succeeds
pub async fn speak_with_fallback(
    provider: &dyn SynthesisProvider,
    plan: Vec<SpeechPrompt>,
) -> Result<()> {
    let mut last_error = Error::Synthesis("empty playback plan".to_string());

    for prompt in plan {
        let locale = prompt.settings.locale.clone();
        match provider.speak(prompt).await {
            Ok(()) => return Ok(()),
            Err(e) => {
                debug!("Synthesis attempt with locale {} failed: {}", locale, e);
                last_error = e;
            }
        }
    }

    Err(last_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Difficulty;

    #[test]
    fn test_playback_plan_order() {
        let word = PracticeWord::new(
            "بِسْمِ اللَّهِ",
            "Bismillah",
            "In the name of Allah",
            "bis.mil.laːh",
            Difficulty::Easy,
        );

        let plan = playback_plan(&word);
        assert_eq!(plan.len(), 3);
        assert_eq!(plan[0].settings.locale, "ar-SA");
        assert_eq!(plan[1].settings.locale, "ar");
        assert_eq!(plan[2].settings.locale, "en");

        // Arabic attempts speak the script, the English fallback speaks the guide
        assert_eq!(plan[0].text, word.arabic);
        assert_eq!(plan[2].text, word.phonetic);
    }

    #[test]
    fn test_learning_rate_is_slow() {
        let word = PracticeWord::new("اللَّه", "Allah", "God", "ʔallaːh", Difficulty::Easy);
        let plan = playback_plan(&word);
        assert!(plan.iter().all(|p| p.settings.rate < 1.0));
    }
}
