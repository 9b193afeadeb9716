//! Bundled English lexicon: the AFINN-165 word list.
//!
//! Weights are integers in `-5..=5`. AFINN phrases that span several tokens
//! (`well-being`, `side-effect`, ...) are left out since the tokenizer splits
//! them and they could never match.

use super::LexiconFile;

const AFINN_165: &str = include_str!("../../data/afinn-165.json");

/// Decode the embedded table.
pub(crate) fn builtin_file() -> LexiconFile {
    serde_json::from_str(AFINN_165).expect("valid embedded AFINN-165 table")
}
