//! Lexicon-based sentiment scoring.
//!
//! Tokenizes free-form text, looks each token up in an integer-weighted
//! lexicon, and aggregates the weights into a score, a length-normalized
//! comparative value, and a positive/neutral/negative classification.
//!
//! ```
//! use sentiscope_sentiment::{analyze, SentimentType};
//!
//! let result = analyze("What a wonderful day");
//! assert_eq!(result.kind, SentimentType::Positive);
//! assert_eq!(result.words, vec!["wonderful"]);
//! ```

pub mod error;
pub mod lexicon;
pub mod negation;
pub mod scorer;
pub mod tokenizer;
pub mod types;

pub use error::SentimentError;
pub use lexicon::{load_lexicon, parse_lexicon, validate_word, Lexicon, LexiconFile};
pub use negation::NegationStage;
pub use scorer::{analyze, Scorer};
pub use tokenizer::tokenize;
pub use types::{EnhancedSentimentResult, SentimentResult, SentimentType};
