//! Plain-text rendering of results and history entries.

use sentiscope_sentiment::{EnhancedSentimentResult, SentimentType};

use crate::history::HistoryEntry;

const HISTORY_TEXT_MAX_CHARS: usize = 60;

/// Multi-line summary of one analysis.
#[must_use]
pub fn result_block(result: &EnhancedSentimentResult) -> String {
    format!(
        "{} {}\nscore: {}  intensity: {:.2}\npositive words: {}\nnegative words: {}",
        result.emoji,
        result.kind,
        result.score,
        result.comparative,
        word_list(&result.positive),
        word_list(&result.negative),
    )
}

/// One-line summary of a history entry.
#[must_use]
pub fn history_line(entry: &HistoryEntry) -> String {
    format!(
        "{}  {}  {} {} ({})  {}",
        entry.id,
        entry.timestamp.format("%Y-%m-%d %H:%M:%S"),
        entry.result.emoji,
        capitalized(entry.result.kind),
        entry.result.score,
        truncate(&entry.text, HISTORY_TEXT_MAX_CHARS),
    )
}

fn word_list(words: &[String]) -> String {
    if words.is_empty() {
        "-".to_string()
    } else {
        words.join(", ")
    }
}

fn capitalized(kind: SentimentType) -> &'static str {
    match kind {
        SentimentType::Positive => "Positive",
        SentimentType::Neutral => "Neutral",
        SentimentType::Negative => "Negative",
    }
}

/// Cut `text` to `max` characters, appending `...` when shortened.
fn truncate(text: &str, max: usize) -> String {
    let single_line = text.replace(['\n', '\r'], " ");
    if single_line.chars().count() <= max {
        return single_line;
    }
    let mut out: String = single_line.chars().take(max).collect();
    out.push_str("...");
    out
}
