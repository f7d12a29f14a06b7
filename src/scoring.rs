//! Positional transcript scoring
//!
//! Compares a recognized utterance against a target phrase word by word.
//! The metric is strictly positional: a heard token counts only when it
//! equals the token at the same index in the target, so word order and
//! word count mismatches lower the score even when the right words are
//! present somewhere in the utterance.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::types::{ComparisonResult, Verdict};

/// Jaro-Winkler score above which a mismatched token is flagged as a near miss
const NEAR_MISS_SIMILARITY: f64 = 0.7;

/// Verdict cut points over the similarity range
///
/// Both comparisons are strict: a similarity of exactly `high` is Close,
/// exactly `low` is Incorrect.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    /// Similarity above this is Correct
    pub high: f64,
    /// Similarity above this (but not above `high`) is Close
    pub low: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            high: 0.8,
            low: 0.5,
        }
    }
}

impl Thresholds {
    /// Create validated thresholds; requires `0.0 <= low <= high <= 1.0`
    pub fn new(high: f64, low: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&high) || !(0.0..=1.0).contains(&low) || low > high {
            return Err(Error::Config(format!(
                "thresholds must satisfy 0.0 <= low <= high <= 1.0, got high={high} low={low}"
            )));
        }
        Ok(Self { high, low })
    }

    /// Map a similarity value to its verdict tier
    pub fn verdict_for(&self, similarity: f64) -> Verdict {
        if similarity > self.high {
            Verdict::Correct
        } else if similarity > self.low {
            Verdict::Close
        } else {
            Verdict::Incorrect
        }
    }
}

/// Lowercase and split on whitespace
fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(String::from)
        .collect()
}

/// Positional word similarity between two phrases.
///
/// Both sides are lowercased and split on whitespace; no punctuation or
/// diacritic normalization is applied. The number of index-aligned equal
/// tokens is divided by the longer token count.
///
/// Empty-input policy: when both sides have zero tokens the phrases are
/// considered identical and the result is 1.0; when only one side is
/// empty the result is 0.0. Never NaN, never a panic.
pub fn positional_similarity(recognized: &str, target: &str) -> f64 {
    let heard = tokenize(recognized);
    let expected = tokenize(target);

    let denominator = heard.len().max(expected.len());
    if denominator == 0 {
        return 1.0;
    }

    let matches = heard
        .iter()
        .zip(expected.iter())
        .filter(|(h, e)| h == e)
        .count();

    matches as f64 / denominator as f64
}

/// Score a recognized transcript against a target phrase
pub fn score(recognized: &str, target: &str, thresholds: &Thresholds) -> ComparisonResult {
    let similarity = positional_similarity(recognized, target);
    let verdict = thresholds.verdict_for(similarity);

    debug!("Scored utterance: {:.3} -> {:?}", similarity, verdict);

    ComparisonResult {
        similarity,
        verdict,
    }
}

/// Per-position comparison of one heard token against the expected token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenComparison {
    /// Token the target has at this position, if any
    pub expected: Option<String>,
    /// Token the recognizer heard at this position, if any
    pub heard: Option<String>,
    /// Exact equality after lowercasing
    pub matched: bool,
    /// Mismatched token that is nonetheless close in spelling
    pub near_miss: bool,
}

/// Walk both token sequences and report every position.
///
/// Diagnostic companion to [`score`]: the similarity number counts only
/// `matched` positions. `near_miss` is advisory, for hosts that want to
/// highlight almost-right words; it never contributes to the score.
pub fn compare_tokens(recognized: &str, target: &str) -> Vec<TokenComparison> {
    let heard = tokenize(recognized);
    let expected = tokenize(target);
    let len = heard.len().max(expected.len());

    (0..len)
        .map(|i| {
            let h = heard.get(i).cloned();
            let e = expected.get(i).cloned();
            let matched = matches!((&h, &e), (Some(a), Some(b)) if a == b);
            let near_miss = !matched
                && matches!(
                    (&h, &e),
                    (Some(a), Some(b)) if strsim::jaro_winkler(a, b) >= NEAR_MISS_SIMILARITY
                );
            TokenComparison {
                expected: e,
                heard: h,
                matched,
                near_miss,
            }
        })
        .collect()
}

/// Scorer holding a fixed threshold configuration
#[derive(Debug, Clone, Default)]
pub struct Scorer {
    thresholds: Thresholds,
}

impl Scorer {
    pub fn new(thresholds: Thresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    /// Score a recognized transcript against a target phrase
    pub fn score(&self, recognized: &str, target: &str) -> ComparisonResult {
        score(recognized, target, &self.thresholds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_phrases() {
        let result = score("bismillah", "bismillah", &Thresholds::default());
        assert_eq!(result.similarity, 1.0);
        assert_eq!(result.verdict, Verdict::Correct);
    }

    #[test]
    fn test_identical_multi_word() {
        let result = score("as salamu alaykum", "as salamu alaykum", &Thresholds::default());
        assert_eq!(result.similarity, 1.0);
        assert_eq!(result.verdict, Verdict::Correct);
    }

    #[test]
    fn test_disjoint_single_words() {
        let result = score("apple", "banana", &Thresholds::default());
        assert_eq!(result.similarity, 0.0);
        assert_eq!(result.verdict, Verdict::Incorrect);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(positional_similarity("ALLAH", "allah"), 1.0);
        assert_eq!(positional_similarity("As-Salamu Alaykum", "as-salamu alaykum"), 1.0);
    }

    #[test]
    fn test_order_sensitivity() {
        // Same words swapped: two tokens, zero positional matches
        assert_eq!(positional_similarity("hello world", "world hello"), 0.0);
    }

    #[test]
    fn test_asymmetric_length() {
        // 2 positional matches / max(3, 2)
        assert_eq!(positional_similarity("a b c", "a b"), 2.0 / 3.0);
        assert_eq!(positional_similarity("a b", "a b c"), 2.0 / 3.0);
    }

    #[test]
    fn test_high_boundary_is_strict() {
        // 4 of 5 positional matches: similarity exactly 0.8 is Close, not Correct
        let result = score("a b c d x", "a b c d e", &Thresholds::default());
        assert_eq!(result.similarity, 0.8);
        assert_eq!(result.verdict, Verdict::Close);
    }

    #[test]
    fn test_low_boundary_is_strict() {
        // 1 of 2 positional matches: similarity exactly 0.5 is Incorrect, not Close
        let result = score("a x", "a b", &Thresholds::default());
        assert_eq!(result.similarity, 0.5);
        assert_eq!(result.verdict, Verdict::Incorrect);
    }

    #[test]
    fn test_both_empty() {
        let result = score("", "", &Thresholds::default());
        assert_eq!(result.similarity, 1.0);
        assert_eq!(result.verdict, Verdict::Correct);
        assert!(!result.similarity.is_nan());
    }

    #[test]
    fn test_one_side_empty() {
        assert_eq!(positional_similarity("", "bismillah"), 0.0);
        assert_eq!(positional_similarity("bismillah", ""), 0.0);
    }

    #[test]
    fn test_whitespace_only_counts_as_empty() {
        assert_eq!(positional_similarity("   ", "  \t "), 1.0);
        assert_eq!(positional_similarity("   ", "hello"), 0.0);
    }

    #[test]
    fn test_extra_whitespace_between_words() {
        assert_eq!(positional_similarity("hello   world", "hello world"), 1.0);
    }

    #[test]
    fn test_no_punctuation_normalization() {
        // Trailing punctuation makes tokens differ; that is intentional
        assert_eq!(positional_similarity("hello world!", "hello world"), 0.5);
    }

    #[test]
    fn test_arabic_input() {
        let result = score(
            "بِسْمِ اللَّهِ الرَّحْمَٰنِ الرَّحِيمِ",
            "بِسْمِ اللَّهِ الرَّحْمَٰنِ الرَّحِيمِ",
            &Thresholds::default(),
        );
        assert_eq!(result.similarity, 1.0);
        assert_eq!(result.verdict, Verdict::Correct);
    }

    #[test]
    fn test_determinism() {
        let a = positional_similarity("sub han allah", "subhan allah wa");
        let b = positional_similarity("sub han allah", "subhan allah wa");
        assert_eq!(a, b);
    }

    #[test]
    fn test_custom_thresholds_change_verdict_not_similarity() {
        let strict = Thresholds::new(0.95, 0.9).unwrap();
        let lenient = Thresholds::new(0.5, 0.2).unwrap();

        // 3 of 4 matches
        let default_result = score("a b c x", "a b c d", &Thresholds::default());
        let strict_result = score("a b c x", "a b c d", &strict);
        let lenient_result = score("a b c x", "a b c d", &lenient);

        assert_eq!(default_result.similarity, 0.75);
        assert_eq!(strict_result.similarity, 0.75);
        assert_eq!(lenient_result.similarity, 0.75);

        assert_eq!(default_result.verdict, Verdict::Close);
        assert_eq!(strict_result.verdict, Verdict::Incorrect);
        assert_eq!(lenient_result.verdict, Verdict::Correct);
    }

    #[test]
    fn test_threshold_validation() {
        assert!(Thresholds::new(0.8, 0.5).is_ok());
        assert!(Thresholds::new(0.5, 0.5).is_ok());
        assert!(Thresholds::new(0.5, 0.8).is_err());
        assert!(Thresholds::new(1.2, 0.5).is_err());
        assert!(Thresholds::new(0.8, -0.1).is_err());
    }

    #[test]
    fn test_thresholds_serde() {
        let json = r#"{"high":0.9,"low":0.6}"#;
        let thresholds: Thresholds = serde_json::from_str(json).unwrap();
        assert_eq!(thresholds.high, 0.9);
        assert_eq!(thresholds.low, 0.6);
    }

    #[test]
    fn test_scorer_uses_configured_thresholds() {
        let scorer = Scorer::new(Thresholds::new(0.9, 0.1).unwrap());
        // 4 of 5 matches is 0.8: Close at these thresholds
        let result = scorer.score("a b c d x", "a b c d e");
        assert_eq!(result.verdict, Verdict::Close);
    }

    #[test]
    fn test_compare_tokens_positions() {
        let steps = compare_tokens("bismi allah rahman", "bismi allahi rahman");
        assert_eq!(steps.len(), 3);
        assert!(steps[0].matched);
        assert!(!steps[1].matched);
        assert!(steps[2].matched);
    }

    #[test]
    fn test_compare_tokens_near_miss() {
        let steps = compare_tokens("bismillah", "bismilah");
        assert!(!steps[0].matched);
        assert!(steps[0].near_miss);

        // Completely different words are not near misses
        let steps = compare_tokens("apple", "banana");
        assert!(!steps[0].matched);
        assert!(!steps[0].near_miss);
    }

    #[test]
    fn test_compare_tokens_length_mismatch() {
        let steps = compare_tokens("a b c", "a b");
        assert_eq!(steps.len(), 3);
        assert_eq!(steps[2].heard.as_deref(), Some("c"));
        assert_eq!(steps[2].expected, None);
        assert!(!steps[2].matched);
        assert!(!steps[2].near_miss);
    }

    #[test]
    fn test_compare_tokens_agrees_with_similarity() {
        let recognized = "al hamdu lillah rab";
        let target = "al hamdu lillahi rabbi alameen";

        let steps = compare_tokens(recognized, target);
        let matches = steps.iter().filter(|s| s.matched).count();
        let similarity = positional_similarity(recognized, target);

        assert_eq!(similarity, matches as f64 / steps.len() as f64);
    }
}
