//! Lexicon scorer: tokens in, score and evidence out.

use std::sync::{Arc, LazyLock};

use crate::lexicon::Lexicon;
use crate::negation::NegationStage;
use crate::tokenizer::tokenize;
use crate::types::{EnhancedSentimentResult, SentimentResult};

static DEFAULT_SCORER: LazyLock<Scorer> = LazyLock::new(Scorer::default);

/// Scores text against an injected [`Lexicon`].
///
/// Cheap to clone and safe to share across threads; `analyze` takes `&self`
/// and touches no shared mutable state.
#[derive(Debug, Clone)]
pub struct Scorer {
    lexicon: Arc<Lexicon>,
    negation: Option<NegationStage>,
}

impl Default for Scorer {
    fn default() -> Self {
        Self::new(Lexicon::builtin())
    }
}

impl Scorer {
    #[must_use]
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self {
            lexicon,
            negation: None,
        }
    }

    /// Enable the negation pass.
    #[must_use]
    pub fn with_negation(mut self, stage: NegationStage) -> Self {
        self.negation = Some(stage);
        self
    }

    #[must_use]
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    #[must_use]
    pub fn negation(&self) -> Option<&NegationStage> {
        self.negation.as_ref()
    }

    /// Score `text` and classify it.
    ///
    /// Total over all input: empty or whitespace-only text returns
    /// [`EnhancedSentimentResult::neutral`].
    #[must_use]
    pub fn analyze(&self, text: &str) -> EnhancedSentimentResult {
        if text.trim().is_empty() {
            return EnhancedSentimentResult::neutral();
        }

        let result = self.score(tokenize(text));
        tracing::trace!(
            score = result.score,
            tokens = result.tokens.len(),
            words = result.words.len(),
            "scored text"
        );
        EnhancedSentimentResult::classify(result)
    }

    fn score(&self, tokens: Vec<String>) -> SentimentResult {
        let mut weights: Vec<i32> = tokens.iter().map(|t| self.lexicon.weight(t)).collect();
        if let Some(stage) = &self.negation {
            stage.apply(&tokens, &mut weights);
        }

        let mut result = SentimentResult::default();
        for (token, &weight) in tokens.iter().zip(&weights) {
            if weight == 0 {
                continue;
            }
            result.score = result.score.saturating_add(weight);
            result.words.push(token.clone());
            if weight > 0 {
                result.positive.push(token.clone());
            } else {
                result.negative.push(token.clone());
            }
            result.calculation.insert(token.clone(), weight);
        }

        result.comparative = if tokens.is_empty() {
            0.0
        } else {
            #[allow(clippy::cast_precision_loss)]
            let denom = tokens.len() as f64;
            f64::from(result.score) / denom
        };
        result.tokens = tokens;
        result
    }
}

/// Score `text` with the built-in lexicon and no negation pass.
#[must_use]
pub fn analyze(text: &str) -> EnhancedSentimentResult {
    DEFAULT_SCORER.analyze(text)
}
