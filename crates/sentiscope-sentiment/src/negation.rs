//! Optional negation pass over token/weight pairs.
//!
//! Runs after lexicon lookup and before aggregation. A scored token preceded
//! (within the window) by a negator has its weight sign flipped, so
//! "not good" contributes `-good` instead of `+good`.

use std::collections::HashSet;

const DEFAULT_NEGATORS: &[&str] = &[
    "not", "no", "never", "none", "nobody", "nothing", "neither", "nor", "cannot", "without",
    "don't", "doesn't", "didn't", "isn't", "aren't", "wasn't", "weren't", "won't", "wouldn't",
    "can't", "couldn't", "shouldn't", "dont", "doesnt", "isnt", "cant", "wont",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NegationStage {
    negators: HashSet<String>,
    window: usize,
}

impl Default for NegationStage {
    fn default() -> Self {
        Self {
            negators: DEFAULT_NEGATORS.iter().map(|w| (*w).to_string()).collect(),
            window: 1,
        }
    }
}

impl NegationStage {
    /// Build a stage with a custom negator list. Words are lowercased.
    #[must_use]
    pub fn with_negators<I, W>(negators: I) -> Self
    where
        I: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        Self {
            negators: negators
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
            window: 1,
        }
    }

    /// How many preceding tokens are checked for a negator. Clamped to at least 1.
    #[must_use]
    pub fn with_window(mut self, window: usize) -> Self {
        self.window = window.max(1);
        self
    }

    #[must_use]
    pub fn window(&self) -> usize {
        self.window
    }

    #[must_use]
    pub fn is_negator(&self, token: &str) -> bool {
        self.negators.contains(token)
    }

    /// Flip the sign of every nonzero weight whose token is negated.
    ///
    /// `tokens` and `weights` are parallel slices. Negators keep their own weight.
    pub fn apply(&self, tokens: &[String], weights: &mut [i32]) {
        debug_assert_eq!(tokens.len(), weights.len());
        for (i, weight) in weights.iter_mut().enumerate().take(tokens.len()) {
            if *weight == 0 {
                continue;
            }
            let start = i.saturating_sub(self.window);
            if tokens[start..i].iter().any(|t| self.is_negator(t)) {
                *weight = weight.saturating_neg();
            }
        }
    }
}
