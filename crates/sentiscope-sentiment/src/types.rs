use std::collections::BTreeMap;
use std::ops::Deref;

use serde::{Deserialize, Serialize};

/// Raw lexicon scoring output for one piece of text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    /// Sum of applied weights over every token.
    pub score: i32,
    /// `score / tokens.len()`, or `0.0` when there are no tokens.
    pub comparative: f64,
    /// One entry per distinct scored word. Repeated words keep the last applied weight.
    pub calculation: BTreeMap<String, i32>,
    /// Every token in input order.
    pub tokens: Vec<String>,
    /// Tokens with a nonzero applied weight, one element per occurrence.
    pub words: Vec<String>,
    pub positive: Vec<String>,
    pub negative: Vec<String>,
}

/// Three-way polarity derived from the sign of a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentType {
    Positive,
    Neutral,
    Negative,
}

impl SentimentType {
    #[must_use]
    pub fn from_score(score: i32) -> Self {
        match score.signum() {
            1 => SentimentType::Positive,
            -1 => SentimentType::Negative,
            _ => SentimentType::Neutral,
        }
    }

    /// Display glyph for this polarity.
    #[must_use]
    pub fn emoji(self) -> &'static str {
        match self {
            SentimentType::Positive => "😊",
            SentimentType::Neutral => "😐",
            SentimentType::Negative => "😞",
        }
    }
}

impl std::fmt::Display for SentimentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SentimentType::Positive => write!(f, "positive"),
            SentimentType::Neutral => write!(f, "neutral"),
            SentimentType::Negative => write!(f, "negative"),
        }
    }
}

/// A [`SentimentResult`] with its classification attached.
///
/// Serializes flat: the base fields sit next to `type` and `emoji`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnhancedSentimentResult {
    #[serde(flatten)]
    pub result: SentimentResult,
    #[serde(rename = "type")]
    pub kind: SentimentType,
    pub emoji: String,
}

impl EnhancedSentimentResult {
    /// Classify a base result by the sign of its score.
    #[must_use]
    pub fn classify(result: SentimentResult) -> Self {
        let kind = SentimentType::from_score(result.score);
        Self {
            result,
            kind,
            emoji: kind.emoji().to_string(),
        }
    }

    /// The canonical result for empty or whitespace-only input.
    #[must_use]
    pub fn neutral() -> Self {
        Self::classify(SentimentResult::default())
    }
}

impl Deref for EnhancedSentimentResult {
    type Target = SentimentResult;

    fn deref(&self) -> &Self::Target {
        &self.result
    }
}
