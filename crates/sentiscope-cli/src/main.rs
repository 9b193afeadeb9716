mod analyze;
mod history;
mod lexicon;
mod render;

use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::analyze::AnalyzeArgs;
use crate::history::HistoryCommands;
use crate::lexicon::LexiconCommands;

#[derive(Debug, Parser)]
#[command(name = "sentiscope")]
#[command(about = "Lexicon-based sentiment analysis")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Score text and print its sentiment
    Analyze(AnalyzeArgs),
    /// Inspect or prune recent results
    History {
        #[command(subcommand)]
        command: HistoryCommands,
    },
    /// Validate lexicon files and look up word weights
    Lexicon {
        #[command(subcommand)]
        command: LexiconCommands,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let config = sentiscope_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match command {
        Commands::Analyze(args) => analyze::run_analyze(&config, &args)?,
        Commands::History { command } => match command {
            HistoryCommands::List { json } => history::run_history_list(&config, json)?,
            HistoryCommands::Delete { id } => history::run_history_delete(&config, &id)?,
            HistoryCommands::Clear => history::run_history_clear(&config)?,
        },
        Commands::Lexicon { command } => match command {
            LexiconCommands::Validate { path } => lexicon::run_lexicon_validate(&path)?,
            LexiconCommands::Lookup {
                words,
                lexicon: path,
            } => lexicon::run_lexicon_lookup(&config, &words, path.as_deref())?,
        },
    }

    Ok(())
}
