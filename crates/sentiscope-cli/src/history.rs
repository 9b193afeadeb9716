//! Bounded, newest-first history of analyzed submissions.
//!
//! Persisted as a JSON array. A file that cannot be read or decoded is
//! treated as an empty history so a corrupt store never blocks analysis.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use clap::Subcommand;
use serde::{Deserialize, Serialize};
use sentiscope_sentiment::EnhancedSentimentResult;
use uuid::Uuid;

use crate::render;

/// Sub-commands available under `history`.
#[derive(Debug, Subcommand)]
pub enum HistoryCommands {
    /// List retained results, newest first
    List {
        /// Print entries as JSON instead of one line each
        #[arg(long)]
        json: bool,
    },
    /// Delete a single entry by id
    Delete {
        /// Entry id as shown by `history list`
        id: String,
    },
    /// Remove every entry
    Clear,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: String,
    pub text: String,
    pub result: EnhancedSentimentResult,
    pub timestamp: DateTime<Utc>,
}

impl HistoryEntry {
    #[must_use]
    pub fn new(text: impl Into<String>, result: EnhancedSentimentResult) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text: text.into(),
            result,
            timestamp: Utc::now(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<HistoryEntry>,
    limit: usize,
}

impl History {
    #[must_use]
    pub fn new(limit: usize) -> Self {
        Self {
            entries: Vec::new(),
            limit: limit.max(1),
        }
    }

    /// Load history from `path`, keeping at most `limit` entries.
    ///
    /// A missing file yields an empty history. An unreadable or corrupt file
    /// is logged and also yields an empty history.
    #[must_use]
    pub fn load(path: &Path, limit: usize) -> Self {
        let mut history = Self::new(limit);

        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return history,
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "failed to read history, starting empty"
                );
                return history;
            }
        };

        match serde_json::from_str::<Vec<HistoryEntry>>(&content) {
            Ok(entries) => {
                history.entries = entries;
                history.entries.truncate(history.limit);
            }
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "corrupt history file, starting empty"
                );
            }
        }

        history
    }

    /// Write the history to `path`, creating parent directories as needed.
    ///
    /// The JSON goes to a sibling temp file first and is renamed over `path`,
    /// so an interrupted write never leaves a truncated history behind.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be written.
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&self.entries)?;

        let tmp_path = temp_sibling(path);
        std::fs::write(&tmp_path, json)?;
        if let Err(e) = std::fs::rename(&tmp_path, path) {
            std::fs::remove_file(&tmp_path).ok();
            return Err(e.into());
        }

        tracing::debug!(path = %path.display(), entries = self.entries.len(), "history saved");
        Ok(())
    }

    /// Insert `entry` at the front, dropping the oldest entries beyond the limit.
    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.insert(0, entry);
        self.entries.truncate(self.limit);
    }

    /// Remove the entry with `id`. Returns `false` if no entry matched.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    #[must_use]
    pub fn limit(&self) -> usize {
        self.limit
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// Unique name in the same directory so the rename stays on one filesystem.
fn temp_sibling(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map_or_else(|| "history".into(), |n| n.to_string_lossy().into_owned());
    path.with_file_name(format!(".{name}.{}.tmp", Uuid::new_v4()))
}

/// List retained history entries.
///
/// # Errors
///
/// Returns an error if JSON output cannot be serialized.
pub(crate) fn run_history_list(
    config: &sentiscope_core::AppConfig,
    json: bool,
) -> anyhow::Result<()> {
    let history = History::load(&config.history_path, config.history_limit);

    if json {
        println!("{}", serde_json::to_string_pretty(history.entries())?);
        return Ok(());
    }

    if history.is_empty() {
        println!("history is empty");
        return Ok(());
    }

    for entry in history.entries() {
        println!("{}", render::history_line(entry));
    }
    println!("{} of {} entries retained", history.len(), history.limit());
    Ok(())
}

/// Delete one history entry by id.
///
/// # Errors
///
/// Returns an error if the id is unknown or the history cannot be saved.
pub(crate) fn run_history_delete(
    config: &sentiscope_core::AppConfig,
    id: &str,
) -> anyhow::Result<()> {
    let mut history = History::load(&config.history_path, config.history_limit);
    if !history.remove(id) {
        anyhow::bail!("history entry '{id}' not found");
    }
    history.save(&config.history_path)?;
    println!("deleted history entry {id}");
    Ok(())
}

/// Remove every history entry.
///
/// # Errors
///
/// Returns an error if the history cannot be saved.
pub(crate) fn run_history_clear(config: &sentiscope_core::AppConfig) -> anyhow::Result<()> {
    let mut history = History::load(&config.history_path, config.history_limit);
    let removed = history.len();
    history.clear();
    history.save(&config.history_path)?;
    println!("cleared {removed} history entries");
    Ok(())
}

#[cfg(test)]
#[path = "history_test.rs"]
mod tests;
