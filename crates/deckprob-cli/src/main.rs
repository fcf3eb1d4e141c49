use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};

use deckprob_cli::config::{CliConfig, OutputFormat};
use deckprob_cli::logging::init_logging;
use deckprob_cli::render::render;
use deckprob_cli::session::Session;
use deckprob_core::model::deck::{Deck, MAX_SEQUENCE_LEN};
use deckprob_core::{AppInfo, Evaluation, Evaluator};

/// Conditional draw probabilities over an 11 R / 6 B deck.
#[derive(Debug, Parser)]
#[command(
    name = "deckprob",
    author,
    version,
    about = "Order matters: P(observed | given) for draws from an 11 R / 6 B deck"
)]
struct Cli {
    /// Path to an optional YAML configuration file.
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Override the output format.
    #[arg(long, value_enum, global = true)]
    format: Option<OutputFormat>,

    /// Override the number of decimals printed for probabilities.
    #[arg(long, value_name = "DIGITS", global = true)]
    precision: Option<usize>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Evaluate one pair of sequences (unknown characters are dropped, input is cut to 17).
    Eval {
        /// Sequence assumed to be true, e.g. XXR.
        given: String,
        /// Sequence whose probability is wanted, e.g. RXR.
        observed: String,
    },
    /// Edit the two sequences line by line from stdin, re-evaluating after each edit.
    Session,
    /// Deal a sequence off a shuffled deck.
    Deal {
        /// RNG seed; omit for a fresh shuffle.
        #[arg(long, value_name = "SEED")]
        seed: Option<u64>,
        /// Number of cards to deal.
        #[arg(long, value_name = "LEN", default_value_t = MAX_SEQUENCE_LEN)]
        length: usize,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let mut config = match cli.config.as_ref() {
        Some(path) => CliConfig::from_path(path)?,
        None => CliConfig::default(),
    };

    if let Some(format) = cli.format {
        config.output.format = format;
    }

    if let Some(precision) = cli.precision {
        config.output.precision = precision;
    }

    config.validate()?;

    let _logging_guard = init_logging(&config.logging)?;
    tracing::info!(app = AppInfo::name(), version = AppInfo::version(), "starting");

    match cli.command {
        Command::Eval { given, observed } => {
            let evaluator = Evaluator::with_inputs(&given, &observed);
            println!("{}", render(&evaluator, &config.output, false)?);
            Ok(match evaluator.state() {
                Evaluation::Error(_) => ExitCode::from(2),
                Evaluation::AwaitingInput | Evaluation::Result(_) => ExitCode::SUCCESS,
            })
        }
        Command::Session => {
            let mut session = Session::new(config.output.clone());
            let edits = session.run(io::stdin().lock(), io::stdout().lock())?;
            tracing::info!(edits, "session ended");
            Ok(ExitCode::SUCCESS)
        }
        Command::Deal { seed, length } => {
            let deck = match seed {
                Some(seed) => Deck::shuffled_with_seed(seed),
                None => Deck::shuffled(&mut rand::thread_rng()),
            };
            let dealt = deck.deal(length);
            match config.output.format {
                OutputFormat::Text => println!("{dealt}"),
                OutputFormat::Json => println!(
                    "{}",
                    serde_json::to_string(&dealt).context("serializing dealt sequence")?
                ),
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}
