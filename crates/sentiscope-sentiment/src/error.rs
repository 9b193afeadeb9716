use thiserror::Error;

#[derive(Debug, Error)]
pub enum SentimentError {
    #[error("failed to read lexicon file {path}: {source}")]
    LexiconIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("lexicon parse error: {0}")]
    LexiconParse(#[from] serde_yaml::Error),

    #[error("invalid lexicon: {0}")]
    Validation(String),
}
