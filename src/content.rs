//! Built-in practice content
//!
//! Phrase and chapter types matching the original lesson tables, plus the
//! seed content the default session practices against. Hosts with their
//! own curriculum construct these types from their content store instead.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::types::Difficulty;

/// Proficiency level of a chapter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

/// What kind of material a chapter teaches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Letters,
    Words,
    Sentences,
    Stories,
    Verses,
}

/// A word or short phrase the learner practices aloud
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PracticeWord {
    /// Target text in Arabic script
    pub arabic: String,
    pub transliteration: String,
    pub meaning: String,
    /// IPA-ish guide, also the synthesis fallback when Arabic voices fail
    pub phonetic: String,
    pub difficulty: Difficulty,
}

impl PracticeWord {
    pub fn new(
        arabic: impl Into<String>,
        transliteration: impl Into<String>,
        meaning: impl Into<String>,
        phonetic: impl Into<String>,
        difficulty: Difficulty,
    ) -> Self {
        Self {
            arabic: arabic.into(),
            transliteration: transliteration.into(),
            meaning: meaning.into(),
            phonetic: phonetic.into(),
            difficulty,
        }
    }
}

/// The built-in pronunciation practice set
pub fn practice_words() -> Vec<PracticeWord> {
    vec![
        PracticeWord::new("اللَّه", "Allah", "God", "ʔallaːh", Difficulty::Easy),
        PracticeWord::new(
            "السَّلَامُ عَلَيْكُمْ",
            "As-salamu alaykum",
            "Peace be upon you",
            "ʔas.sa.laː.mu ʕa.lay.kum",
            Difficulty::Medium,
        ),
        PracticeWord::new(
            "بِسْمِ اللَّهِ",
            "Bismillah",
            "In the name of Allah",
            "bis.mil.laːh",
            Difficulty::Easy,
        ),
        PracticeWord::new(
            "الْحَمْدُ لِلَّهِ",
            "Alhamdulillah",
            "All praise is due to Allah",
            "ʔal.ħam.du lil.laːh",
            Difficulty::Medium,
        ),
        PracticeWord::new(
            "سُبْحَانَ اللَّهِ",
            "Subhanallah",
            "Glory be to Allah",
            "sub.ħaː.nal.laːh",
            Difficulty::Medium,
        ),
        PracticeWord::new(
            "لَا إِلَٰهَ إِلَّا اللَّهُ",
            "La ilaha illa Allah",
            "There is no god but Allah",
            "laː ʔi.laː.ha ʔil.lal.laːh",
            Difficulty::Hard,
        ),
    ]
}

/// One line of chapter content the learner reads and repeats
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Phrase {
    pub text: String,
    pub phonetic: Option<String>,
    pub translation: Option<String>,
}

impl Phrase {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            phonetic: None,
            translation: None,
        }
    }

    pub fn with_phonetic(mut self, phonetic: impl Into<String>) -> Self {
        self.phonetic = Some(phonetic.into());
        self
    }

    pub fn with_translation(mut self, translation: impl Into<String>) -> Self {
        self.translation = Some(translation.into());
        self
    }
}

/// A reading chapter: titled, graded sequence of phrases
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chapter {
    pub id: u32,
    pub title_en: String,
    pub title_ar: String,
    pub level: Level,
    pub category: Category,
    /// Fine-grained difficulty from 1 to 5
    pub grade: u8,
    pub phrases: Vec<Phrase>,
}

/// Ordered collection of chapters with id lookup
#[derive(Debug, Clone, Default)]
pub struct ChapterLibrary {
    chapters: Vec<Chapter>,
}

impl ChapterLibrary {
    /// Build a library from chapters, kept in ascending id order
    pub fn new(mut chapters: Vec<Chapter>) -> Self {
        chapters.sort_by_key(|c| c.id);
        debug!("Loaded {} chapters into library", chapters.len());
        Self { chapters }
    }

    /// The seed curriculum: one chapter per category
    pub fn built_in() -> Self {
        Self::new(vec![
            Chapter {
                id: 1,
                title_en: "Arabic Letters: Alif to Jeem".to_string(),
                title_ar: "الحروف العربية: من الألف إلى الجيم".to_string(),
                level: Level::Beginner,
                category: Category::Letters,
                grade: 1,
                phrases: vec![
                    Phrase::new("أ").with_phonetic("alif").with_translation("A"),
                    Phrase::new("ب").with_phonetic("baa").with_translation("B"),
                    Phrase::new("ت").with_phonetic("taa").with_translation("T"),
                    Phrase::new("ث").with_phonetic("thaa").with_translation("Th"),
                    Phrase::new("ج").with_phonetic("jeem").with_translation("J"),
                ],
            },
            Chapter {
                id: 11,
                title_en: "Simple Two-Letter Words".to_string(),
                title_ar: "كلمات من حرفين".to_string(),
                level: Level::Intermediate,
                category: Category::Words,
                grade: 3,
                phrases: vec![
                    Phrase::new("بَيْت")
                        .with_phonetic("bayt")
                        .with_translation("house"),
                    Phrase::new("كِتَاب")
                        .with_phonetic("kitaab")
                        .with_translation("book"),
                    Phrase::new("قَلَم")
                        .with_phonetic("qalam")
                        .with_translation("pen"),
                ],
            },
            Chapter {
                id: 31,
                title_en: "Simple Sentences".to_string(),
                title_ar: "جمل بسيطة".to_string(),
                level: Level::Advanced,
                category: Category::Sentences,
                grade: 4,
                phrases: vec![
                    Phrase::new("هَذَا بَيْت")
                        .with_phonetic("hadhaa bayt")
                        .with_translation("This is a house"),
                    Phrase::new("أَنَا طَالِب")
                        .with_phonetic("ana taalib")
                        .with_translation("I am a student"),
                    Phrase::new("الْكِتَابُ جَمِيل")
                        .with_phonetic("al-kitaabu jameel")
                        .with_translation("The book is beautiful"),
                ],
            },
            Chapter {
                id: 45,
                title_en: "Short Story: The Kind Boy".to_string(),
                title_ar: "قصة قصيرة: الولد الطيب".to_string(),
                level: Level::Advanced,
                category: Category::Stories,
                grade: 5,
                phrases: vec![
                    Phrase::new(
                        "كَانَ هُنَاكَ وَلَدٌ طَيِّب. يُحِبُّ مُسَاعَدَةَ النَّاس. كُلُّ يَوْمٍ يَذْهَبُ إِلَى الْمَدْرَسَة بِسَعَادَة.",
                    )
                    .with_phonetic(
                        "kaana hunaaka waladun tayyib. yuhibbu musaa'adat an-naas. kullu yawmin yadh-habu ila al-madrasa bi-sa'aada.",
                    )
                    .with_translation(
                        "There was a kind boy. He loves helping people. Every day he goes to school happily.",
                    ),
                ],
            },
            Chapter {
                id: 52,
                title_en: "Quranic Verses: Al-Fatiha".to_string(),
                title_ar: "آيات قرآنية: الفاتحة".to_string(),
                level: Level::Advanced,
                category: Category::Verses,
                grade: 5,
                phrases: vec![
                    Phrase::new("بِسْمِ اللَّهِ الرَّحْمَٰنِ الرَّحِيمِ")
                        .with_phonetic("bismillaahi ar-rahmaani ar-raheem")
                        .with_translation(
                            "In the name of Allah, the Most Gracious, the Most Merciful",
                        ),
                    Phrase::new("الْحَمْدُ لِلَّهِ رَبِّ الْعَالَمِينَ")
                        .with_phonetic("al-hamdu lillaahi rabbi al-'aalameen")
                        .with_translation("Praise be to Allah, Lord of the worlds"),
                ],
            },
        ])
    }

    pub fn len(&self) -> usize {
        self.chapters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chapters.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Chapter> {
        self.chapters.iter()
    }

    /// Look up a chapter by id
    pub fn get(&self, id: u32) -> Option<&Chapter> {
        self.chapters.iter().find(|c| c.id == id)
    }

    /// Look up a chapter by id, erroring when absent
    pub fn require(&self, id: u32) -> Result<&Chapter> {
        self.get(id)
            .ok_or_else(|| Error::Content(format!("no chapter with id {id}")))
    }

    /// The chapter that follows `id` in library order, if any
    pub fn next_after(&self, id: u32) -> Option<&Chapter> {
        let index = self.chapters.iter().position(|c| c.id == id)?;
        self.chapters.get(index + 1)
    }
}

/// One Arabic letter with its spoken sound
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Letter {
    pub glyph: &'static str,
    pub name: &'static str,
    /// Syllable passed to synthesis when sounding the letter out
    pub sound: &'static str,
}

/// The 28 letters of the Arabic alphabet
pub const ALPHABET: &[Letter] = &[
    Letter { glyph: "ا", name: "Alif", sound: "aa" },
    Letter { glyph: "ب", name: "Baa", sound: "ba" },
    Letter { glyph: "ت", name: "Taa", sound: "ta" },
    Letter { glyph: "ث", name: "Thaa", sound: "tha" },
    Letter { glyph: "ج", name: "Jeem", sound: "ja" },
    Letter { glyph: "ح", name: "Haa", sound: "ha" },
    Letter { glyph: "خ", name: "Khaa", sound: "kha" },
    Letter { glyph: "د", name: "Daal", sound: "da" },
    Letter { glyph: "ذ", name: "Dhaal", sound: "dha" },
    Letter { glyph: "ر", name: "Raa", sound: "ra" },
    Letter { glyph: "ز", name: "Zaay", sound: "za" },
    Letter { glyph: "س", name: "Seen", sound: "sa" },
    Letter { glyph: "ش", name: "Sheen", sound: "sha" },
    Letter { glyph: "ص", name: "Saad", sound: "sa" },
    Letter { glyph: "ض", name: "Daad", sound: "da" },
    Letter { glyph: "ط", name: "Taa", sound: "ta" },
    Letter { glyph: "ظ", name: "Dhaa", sound: "dha" },
    Letter { glyph: "ع", name: "Ayn", sound: "a" },
    Letter { glyph: "غ", name: "Ghayn", sound: "gha" },
    Letter { glyph: "ف", name: "Faa", sound: "fa" },
    Letter { glyph: "ق", name: "Qaaf", sound: "qa" },
    Letter { glyph: "ك", name: "Kaaf", sound: "ka" },
    Letter { glyph: "ل", name: "Laam", sound: "la" },
    Letter { glyph: "م", name: "Meem", sound: "ma" },
    Letter { glyph: "ن", name: "Noon", sound: "na" },
    Letter { glyph: "ه", name: "Haa", sound: "ha" },
    Letter { glyph: "و", name: "Waaw", sound: "wa" },
    Letter { glyph: "ي", name: "Yaa", sound: "ya" },
];
