use std::path::PathBuf;

/// Runtime settings shared by every sentiscope binary.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Tracing filter used when `RUST_LOG` is not set.
    pub log_level: String,
    /// Lexicon file replacing the built-in table. `None` keeps the built-in.
    pub lexicon_path: Option<PathBuf>,
    pub history_path: PathBuf,
    /// Maximum number of retained history entries. Always at least 1.
    pub history_limit: usize,
    /// Whether the negation stage is enabled by default.
    pub negation: bool,
}
