//! Lexicon command handlers and active-lexicon resolution.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::Subcommand;
use sentiscope_sentiment::Lexicon;

/// Sub-commands available under `lexicon`.
#[derive(Debug, Subcommand)]
pub enum LexiconCommands {
    /// Load a lexicon file and report whether it is valid
    Validate {
        /// Path to a YAML or JSON lexicon file
        path: PathBuf,
    },
    /// Print the weight of each word in the active lexicon
    Lookup {
        /// Words to look up
        #[arg(required = true)]
        words: Vec<String>,

        /// Use this lexicon file instead of the configured one
        #[arg(long)]
        lexicon: Option<PathBuf>,
    },
}

/// Resolve the lexicon for this invocation.
///
/// A command-line path wins over `SENTISCOPE_LEXICON_PATH`; with neither, the
/// built-in table is used.
///
/// # Errors
///
/// Returns an error if the selected lexicon file cannot be loaded.
pub(crate) fn load_active_lexicon(
    config: &sentiscope_core::AppConfig,
    override_path: Option<&Path>,
) -> anyhow::Result<Arc<Lexicon>> {
    match override_path.or(config.lexicon_path.as_deref()) {
        Some(path) => Ok(Arc::new(sentiscope_sentiment::load_lexicon(path)?)),
        None => Ok(Lexicon::builtin()),
    }
}

/// Validate a lexicon file and print a summary.
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed, or fails validation.
pub(crate) fn run_lexicon_validate(path: &Path) -> anyhow::Result<()> {
    let lexicon = sentiscope_sentiment::load_lexicon(path)?;
    println!(
        "{}: valid lexicon '{}' with {} words",
        path.display(),
        lexicon.version(),
        lexicon.len()
    );
    Ok(())
}

/// Print each word's weight in the active lexicon.
///
/// # Errors
///
/// Returns an error if the lexicon cannot be loaded.
pub(crate) fn run_lexicon_lookup(
    config: &sentiscope_core::AppConfig,
    words: &[String],
    override_path: Option<&Path>,
) -> anyhow::Result<()> {
    let lexicon = load_active_lexicon(config, override_path)?;
    for word in words {
        println!("{word}\t{}", lexicon.weight(word));
    }
    Ok(())
}
