//! Word-to-weight tables used by the scorer.

mod builtin;

use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::Path;
use std::sync::{Arc, LazyLock};

use serde::Deserialize;

use crate::error::SentimentError;
use crate::tokenizer::tokenize;

static BUILTIN: LazyLock<Arc<Lexicon>> = LazyLock::new(|| {
    let file = builtin::builtin_file();
    Arc::new(Lexicon::from_entries(file.version, file.words))
});

/// Immutable mapping from lowercase word to signed integer weight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicon {
    version: String,
    weights: HashMap<String, i32>,
}

impl Lexicon {
    /// The bundled AFINN-165 table, built once per process.
    #[must_use]
    pub fn builtin() -> Arc<Lexicon> {
        Arc::clone(&BUILTIN)
    }

    /// Build a lexicon from `(word, weight)` pairs.
    ///
    /// Keys are lowercased. A later duplicate replaces an earlier one.
    #[must_use]
    pub fn from_entries<I, W>(version: impl Into<String>, entries: I) -> Self
    where
        I: IntoIterator<Item = (W, i32)>,
        W: AsRef<str>,
    {
        let weights = entries
            .into_iter()
            .map(|(word, weight)| (normalize_key(word.as_ref()), weight))
            .collect();
        Self {
            version: version.into(),
            weights,
        }
    }

    /// Return a copy with `extras` layered over the existing weights.
    ///
    /// # Errors
    ///
    /// Returns `SentimentError::Validation` if any extra word is not a single
    /// token, since the scorer could never match it.
    pub fn with_overrides<I, W>(&self, extras: I) -> Result<Self, SentimentError>
    where
        I: IntoIterator<Item = (W, i32)>,
        W: AsRef<str>,
    {
        let mut weights = self.weights.clone();
        let mut changed = false;
        for (word, weight) in extras {
            weights.insert(validate_word(word.as_ref())?, weight);
            changed = true;
        }
        let version = if changed {
            format!("{}+overrides", self.version)
        } else {
            self.version.clone()
        };
        Ok(Self { version, weights })
    }

    /// Weight for `word`, or `0` when it is not listed. Case-insensitive.
    #[must_use]
    pub fn weight(&self, word: &str) -> i32 {
        if let Some(&w) = self.weights.get(word) {
            return w;
        }
        self.weights
            .get(&normalize_key(word))
            .copied()
            .unwrap_or(0)
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.weights.contains_key(word) || self.weights.contains_key(&normalize_key(word))
    }

    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

fn normalize_key(word: &str) -> String {
    word.trim().to_lowercase().replace('’', "'")
}

/// Normalize `word` to a lexicon key and check the scorer can match it.
///
/// # Errors
///
/// Returns `SentimentError::Validation` if the word is empty or does not
/// survive tokenization as exactly one token.
pub fn validate_word(word: &str) -> Result<String, SentimentError> {
    let key = normalize_key(word);
    if key.is_empty() {
        return Err(SentimentError::Validation(
            "lexicon words must be non-empty".to_string(),
        ));
    }
    if tokenize(&key) != [key.as_str()] {
        return Err(SentimentError::Validation(format!(
            "lexicon word '{word}' is not a single token"
        )));
    }
    Ok(key)
}

/// On-disk lexicon layout. YAML, or JSON (which the YAML parser accepts).
///
/// ```yaml
/// version: reviews-2
/// words:
///   good: 3
///   terrible: -5
/// ```
#[derive(Debug, Deserialize)]
pub struct LexiconFile {
    #[serde(default = "default_version")]
    pub version: String,
    pub words: BTreeMap<String, i32>,
}

fn default_version() -> String {
    "custom".to_string()
}

/// Load and validate a lexicon file.
///
/// # Errors
///
/// Returns `SentimentError` if the file cannot be read, parsed, or fails validation.
pub fn load_lexicon(path: &Path) -> Result<Lexicon, SentimentError> {
    let content = std::fs::read_to_string(path).map_err(|e| SentimentError::LexiconIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let lexicon = parse_lexicon(&content)?;
    tracing::info!(
        path = %path.display(),
        version = lexicon.version(),
        entries = lexicon.len(),
        "loaded lexicon"
    );
    Ok(lexicon)
}

/// Parse and validate lexicon file contents.
///
/// # Errors
///
/// Returns `SentimentError::LexiconParse` for malformed input and
/// `SentimentError::Validation` for entries the scorer could never match.
pub fn parse_lexicon(content: &str) -> Result<Lexicon, SentimentError> {
    let file: LexiconFile = serde_yaml::from_str(content)?;
    validate_lexicon(&file)?;
    Ok(Lexicon::from_entries(file.version, file.words))
}

fn validate_lexicon(file: &LexiconFile) -> Result<(), SentimentError> {
    if file.version.trim().is_empty() {
        return Err(SentimentError::Validation(
            "lexicon version must be non-empty".to_string(),
        ));
    }

    if file.words.is_empty() {
        return Err(SentimentError::Validation(
            "lexicon must contain at least one word".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for word in file.words.keys() {
        let key = validate_word(word)?;
        if !seen.insert(key) {
            return Err(SentimentError::Validation(format!(
                "duplicate lexicon word (case-insensitive): '{word}'"
            )));
        }
    }

    Ok(())
}
