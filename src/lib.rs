//! Makhraj - Pronunciation practice engine for recitation learning
//!
//! Scores recognized speech against target phrases with a strictly
//! positional word metric, and drives the surrounding practice flow:
//! content tables, verdict-keyed feedback, speech provider abstraction,
//! and per-session statistics.

pub mod content;
pub mod error;
pub mod feedback;
pub mod metrics;
pub mod providers;
pub mod scoring;
pub mod session;
pub mod types;

pub use error::{Error, Result};
pub use types::*;

/// Re-export the main engine components for convenience
pub use content::{ALPHABET, Chapter, ChapterLibrary, Letter, Phrase, PracticeWord, practice_words};
pub use metrics::{SessionStats, StatsRecorder};
pub use providers::{RecognitionProvider, ScriptedRecognizer, SynthesisProvider};
pub use scoring::{Scorer, Thresholds, compare_tokens, positional_similarity, score};
pub use session::PracticeSession;
