//! Unicode-aware word tokenizer.
//!
//! A token is a maximal run of alphabetic characters, combining marks, and
//! decimal digits. An apostrophe between two such runs joins them, so
//! contractions like `don't` stay whole. Everything else splits, including
//! `_` and `-`.

use std::sync::LazyLock;

use regex::Regex;

static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\p{Alphabetic}\p{M}\p{Nd}]+(?:['’][\p{Alphabetic}\p{M}\p{Nd}]+)*")
        .expect("valid token regex")
});

/// Split `text` into lowercase tokens in their original order.
///
/// Typographic apostrophes are normalized to `'`.
#[must_use]
pub fn tokenize(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    TOKEN_RE
        .find_iter(&lower)
        .map(|m| m.as_str().replace('’', "'"))
        .collect()
}
