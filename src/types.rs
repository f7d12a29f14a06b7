//! Core types used throughout the practice engine

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for practice attempts
pub type AttemptId = Uuid;

/// Tiered judgement of one pronunciation attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// Similarity above the high threshold
    Correct,
    /// Similarity above the low threshold but not the high one
    Close,
    /// Everything else
    Incorrect,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Correct => "correct",
            Self::Close => "close",
            Self::Incorrect => "incorrect",
        }
    }

    /// Get all verdict tiers
    pub fn all() -> &'static [Verdict] {
        &[Verdict::Correct, Verdict::Close, Verdict::Incorrect]
    }
}

/// Similarity score plus verdict for one recognized utterance
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// Positional word similarity in [0.0, 1.0]
    pub similarity: f64,
    pub verdict: Verdict,
}

/// Display language for bilingual content and feedback
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    #[default]
    English,
    Arabic,
}

impl Language {
    /// Language tag as used by platform speech services
    pub fn tag(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Arabic => "ar",
        }
    }
}

/// Coarse difficulty rating for practice words
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }

    /// Get all difficulty ratings
    pub fn all() -> &'static [Difficulty] {
        &[Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]
    }
}

/// One scored utterance, handed to the host for rendering feedback
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attempt {
    pub id: AttemptId,
    /// The phrase the learner was asked to say
    pub target: String,
    /// What the recognizer heard
    pub transcript: String,
    pub result: ComparisonResult,
    /// Points awarded for this attempt
    pub points: u32,
    pub created_at: DateTime<Utc>,
}

impl Attempt {
    pub fn new(target: String, transcript: String, result: ComparisonResult, points: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            target,
            transcript,
            result,
            points,
            created_at: Utc::now(),
        }
    }
}
