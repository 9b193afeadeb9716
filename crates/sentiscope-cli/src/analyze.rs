//! `analyze` command: score one submission, print it, record it.

use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use sentiscope_sentiment::{validate_word, Lexicon, NegationStage, Scorer};

use crate::history::{History, HistoryEntry};
use crate::lexicon::load_active_lexicon;
use crate::render;

#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Text to analyze. Read from stdin when omitted
    pub text: Vec<String>,

    /// Print the full result as JSON
    #[arg(long)]
    pub json: bool,

    /// Use this lexicon file instead of the configured one
    #[arg(long)]
    pub lexicon: Option<PathBuf>,

    /// Flip the weight of words that follow a negator ("not good")
    #[arg(long)]
    pub negation: bool,

    /// Extra word weight layered over the lexicon; repeatable
    #[arg(long = "extra", value_name = "WORD=WEIGHT", value_parser = parse_extra)]
    pub extras: Vec<(String, i32)>,

    /// Do not record this result in history
    #[arg(long)]
    pub no_history: bool,
}

/// Parse a `WORD=WEIGHT` pair. The word must be a single token.
pub(crate) fn parse_extra(raw: &str) -> Result<(String, i32), String> {
    let (word, weight) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected WORD=WEIGHT, got '{raw}'"))?;
    if word.trim().is_empty() {
        return Err(format!("missing word in '{raw}'"));
    }
    let word = validate_word(word).map_err(|e| e.to_string())?;
    let weight = weight
        .trim()
        .parse::<i32>()
        .map_err(|e| format!("invalid weight in '{raw}': {e}"))?;
    Ok((word, weight))
}

/// Build the scorer for one invocation.
///
/// # Errors
///
/// Returns an error if an extra word cannot be added to the lexicon.
pub(crate) fn build_scorer(
    lexicon: Arc<Lexicon>,
    extras: &[(String, i32)],
    negation: bool,
) -> anyhow::Result<Scorer> {
    let lexicon = if extras.is_empty() {
        lexicon
    } else {
        Arc::new(lexicon.with_overrides(extras.iter().map(|(w, n)| (w.as_str(), *n)))?)
    };
    let scorer = Scorer::new(lexicon);
    Ok(if negation {
        scorer.with_negation(NegationStage::default())
    } else {
        scorer
    })
}

fn read_input(args: &[String]) -> anyhow::Result<String> {
    if args.is_empty() {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        Ok(args.join(" "))
    }
}

/// Score the submitted text and print the result.
///
/// Blank submissions are rejected before scoring. History write failures are
/// logged and do not fail the command.
///
/// # Errors
///
/// Returns an error if the input is blank, stdin cannot be read, or the
/// lexicon cannot be built.
pub(crate) fn run_analyze(
    config: &sentiscope_core::AppConfig,
    args: &AnalyzeArgs,
) -> anyhow::Result<()> {
    let text = read_input(&args.text)?;
    if text.trim().is_empty() {
        anyhow::bail!("no text to analyze");
    }

    let lexicon = load_active_lexicon(config, args.lexicon.as_deref())?;
    let scorer = build_scorer(lexicon, &args.extras, args.negation || config.negation)?;
    tracing::debug!(
        lexicon = scorer.lexicon().version(),
        negation = scorer.negation().is_some(),
        "analyzing submission"
    );

    let result = scorer.analyze(&text);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", render::result_block(&result));
    }

    if !args.no_history {
        let mut history = History::load(&config.history_path, config.history_limit);
        history.push(HistoryEntry::new(text.trim(), result));
        if let Err(e) = history.save(&config.history_path) {
            tracing::warn!(
                path = %config.history_path.display(),
                error = %e,
                "failed to save history"
            );
        }
    }

    Ok(())
}
