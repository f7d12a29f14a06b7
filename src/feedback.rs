//! Verdict-keyed feedback messages
//!
//! Data-driven lookup tables the host renders directly. Selection policy
//! for the encouragement pool (random vs. deterministic) is left to the
//! caller; [`encouragement`] gives a deterministic pick.

use crate::types::{Language, Verdict};

/// Short banner title for a verdict
pub fn title(verdict: Verdict, language: Language) -> &'static str {
    match (verdict, language) {
        (Verdict::Correct, Language::English) => "Correct Pronunciation",
        (Verdict::Correct, Language::Arabic) => "نطق صحيح",
        (Verdict::Close, Language::English) => "Close, but needs improvement",
        (Verdict::Close, Language::Arabic) => "قريب، لكن يحتاج تحسين",
        (Verdict::Incorrect, Language::English) => "Incorrect Pronunciation",
        (Verdict::Incorrect, Language::Arabic) => "نطق غير صحيح",
    }
}

/// Full feedback message for a verdict
pub fn message(verdict: Verdict, language: Language) -> &'static str {
    match (verdict, language) {
        (Verdict::Correct, Language::English) => "Excellent pronunciation!",
        (Verdict::Correct, Language::Arabic) => "نطق ممتاز!",
        (Verdict::Close, Language::English) => {
            "Good, but try again for better pronunciation."
        }
        (Verdict::Close, Language::Arabic) => {
            "جيد، لكن حاول مرة أخرى للحصول على نطق أفضل."
        }
        (Verdict::Incorrect, Language::English) => "Try listening again and repeat.",
        (Verdict::Incorrect, Language::Arabic) => "حاول الاستماع مرة أخرى والتكرار.",
    }
}

/// Generic encouragement strings shown between attempts
pub const ENCOURAGEMENTS: &[&str] = &[
    "Great pronunciation! 🌟",
    "Very good! Keep practicing! 👏",
    "Good effort! Try to pronounce it a bit slower. 📚",
    "Nice try! Listen to the example again and repeat. 🎯",
    "Excellent! Your pronunciation is improving! ⭐",
];

/// Deterministic pick from the encouragement pool
pub fn encouragement(n: usize) -> &'static str {
    ENCOURAGEMENTS[n % ENCOURAGEMENTS.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_verdict_has_messages() {
        for &verdict in Verdict::all() {
            for language in [Language::English, Language::Arabic] {
                assert!(!title(verdict, language).is_empty());
                assert!(!message(verdict, language).is_empty());
            }
        }
    }

    #[test]
    fn test_languages_differ() {
        assert_ne!(
            message(Verdict::Correct, Language::English),
            message(Verdict::Correct, Language::Arabic)
        );
    }

    #[test]
    fn test_encouragement_wraps() {
        assert_eq!(encouragement(0), ENCOURAGEMENTS[0]);
        assert_eq!(encouragement(ENCOURAGEMENTS.len()), ENCOURAGEMENTS[0]);
        assert_eq!(encouragement(ENCOURAGEMENTS.len() + 2), ENCOURAGEMENTS[2]);
    }
}
