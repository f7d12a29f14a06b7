//! Practice session engine
//!
//! Drives the walk through a practice set: play the target, collect a
//! transcript, score it, hand feedback to the host. All state is explicit
//! and owned here; scoring stays pure in [`crate::scoring`].

use tracing::{debug, info};

use crate::content::{PracticeWord, practice_words};
use crate::error::{Error, Result};
use crate::feedback;
use crate::metrics::{SessionStats, StatsRecorder};
use crate::providers::{RecognitionProvider, RecognitionRequest};
use crate::scoring::{Scorer, Thresholds};
use crate::types::{Attempt, Language};

/// Points awarded for each completed attempt
const POINTS_PER_ATTEMPT: u32 = 10;

/// Recognizer locale for recitation practice
const RECITATION_LOCALE: &str = "ar-SA";

/// A stateful walk through a list of practice words
pub struct PracticeSession {
    words: Vec<PracticeWord>,
    position: usize,
    scorer: Scorer,
    /// Language feedback messages are rendered in
    display_language: Language,
    stats: StatsRecorder,
}

impl PracticeSession {
    /// Create a session over the given words; the list must be non-empty
    pub fn new(words: Vec<PracticeWord>, thresholds: Thresholds) -> Result<Self> {
        if words.is_empty() {
            return Err(Error::Content("practice session needs at least one word".to_string()));
        }

        info!("Starting practice session with {} words", words.len());

        Ok(Self {
            words,
            position: 0,
            scorer: Scorer::new(thresholds),
            display_language: Language::English,
            stats: StatsRecorder::new(),
        })
    }

    /// Create a session over the built-in practice set
    pub fn built_in(thresholds: Thresholds) -> Self {
        Self {
            words: practice_words(),
            position: 0,
            scorer: Scorer::new(thresholds),
            display_language: Language::English,
            stats: StatsRecorder::new(),
        }
    }

    pub fn with_display_language(mut self, language: Language) -> Self {
        self.display_language = language;
        self
    }

    /// The word currently being practiced
    pub fn current(&self) -> &PracticeWord {
        &self.words[self.position]
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Whether the session is on its final word
    pub fn is_last(&self) -> bool {
        self.position == self.words.len() - 1
    }

    /// Move to the next word, wrapping to the start after the last
    pub fn advance(&mut self) {
        self.position = (self.position + 1) % self.words.len();
        debug!("Advanced to word {} of {}", self.position + 1, self.words.len());
    }

    /// Move to the previous word, wrapping to the end before the first
    pub fn go_back(&mut self) {
        self.position = if self.position == 0 {
            self.words.len() - 1
        } else {
            self.position - 1
        };
        debug!("Moved back to word {} of {}", self.position + 1, self.words.len());
    }

    /// Score a transcript against the current word and record the attempt
    pub fn grade_transcript(&mut self, transcript: &str) -> Attempt {
        let target = self.current().arabic.clone();
        let result = self.scorer.score(transcript, &target);

        self.stats.record(result.verdict, POINTS_PER_ATTEMPT);

        debug!(
            "Graded attempt on '{}': {:.3} ({})",
            self.current().transliteration,
            result.similarity,
            result.verdict.as_str()
        );

        Attempt::new(target, transcript.to_string(), result, POINTS_PER_ATTEMPT)
    }

    /// One full practice turn: request a transcript, then grade it
    pub async fn practice_once(
        &mut self,
        recognizer: &dyn RecognitionProvider,
    ) -> Result<Attempt> {
        let request =
            RecognitionRequest::new(Language::Arabic).with_locale(RECITATION_LOCALE);
        let response = recognizer.recognize(request).await?;
        Ok(self.grade_transcript(&response.text))
    }

    /// Feedback message for an attempt, in the session's display language
    pub fn feedback(&self, attempt: &Attempt) -> &'static str {
        feedback::message(attempt.result.verdict, self.display_language)
    }

    /// Snapshot of the session's running statistics
    pub fn stats(&self) -> SessionStats {
        self.stats.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Verdict;

    fn session() -> PracticeSession {
        PracticeSession::built_in(Thresholds::default())
    }

    #[test]
    fn test_empty_word_list_is_rejected() {
        assert!(PracticeSession::new(Vec::new(), Thresholds::default()).is_err());
    }

    #[test]
    fn test_navigation_wraps_both_ways() {
        let mut session = session();
        let len = session.len();

        assert_eq!(session.position(), 0);
        session.go_back();
        assert_eq!(session.position(), len - 1);
        assert!(session.is_last());
        session.advance();
        assert_eq!(session.position(), 0);
    }

    #[test]
    fn test_grading_exact_match() {
        let mut session = session();
        let target = session.current().arabic.clone();

        let attempt = session.grade_transcript(&target);
        assert_eq!(attempt.result.similarity, 1.0);
        assert_eq!(attempt.result.verdict, Verdict::Correct);
        assert_eq!(attempt.points, 10);
        assert_eq!(attempt.target, target);
    }

    #[test]
    fn test_grading_accrues_points() {
        let mut session = session();
        session.grade_transcript("something unrelated");
        session.grade_transcript("something else");

        let stats = session.stats();
        assert_eq!(stats.attempts, 2);
        assert_eq!(stats.points, 20);
        assert_eq!(stats.incorrect, 2);
    }

    #[test]
    fn test_feedback_follows_display_language() {
        let mut session = session().with_display_language(Language::Arabic);
        let target = session.current().arabic.clone();
        let attempt = session.grade_transcript(&target);

        assert_eq!(session.feedback(&attempt), "نطق ممتاز!");
    }
}
