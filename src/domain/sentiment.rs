//! Keyword-based sentiment classification of note text

use serde::{Deserialize, Serialize};
use std::fmt;

const POSITIVE_WORDS: &[&str] = &[
    "happy",
    "great",
    "calm",
    "excited",
    "love",
    "peace",
    "joy",
    "wonderful",
    "amazing",
    "good",
    "proud",
];

const NEGATIVE_WORDS: &[&str] = &[
    "sad",
    "angry",
    "stressed",
    "tired",
    "hate",
    "anxious",
    "worried",
    "depressed",
    "awful",
    "terrible",
    "bad",
];

/// Coarse classification of a note
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    #[default]
    Neutral,
}

impl Sentiment {
    pub const ALL: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Negative, Sentiment::Neutral];

    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Net keyword score of `text`.
///
/// Each vocabulary word counts at most once and matches as a plain substring
/// of the lower-cased text, so "sad" also matches inside "sadly".
pub fn score(text: &str) -> i32 {
    if text.is_empty() {
        return 0;
    }

    let lower = text.to_lowercase();
    let hits = |words: &[&str]| words.iter().filter(|w| lower.contains(*w)).count() as i32;

    hits(POSITIVE_WORDS) - hits(NEGATIVE_WORDS)
}

/// Classify a note as positive, negative or neutral
pub fn classify(text: &str) -> Sentiment {
    match score(text) {
        s if s > 0 => Sentiment::Positive,
        s if s < 0 => Sentiment::Negative,
        _ => Sentiment::Neutral,
    }
}
