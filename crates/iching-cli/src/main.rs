//! Command-line I Ching reader.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use commands::Format;
use iching_reading::ReadingConfig;

#[derive(Parser)]
#[command(
    name = "iching",
    about = "Cast and read I Ching hexagrams with the three-coin method",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log engine decisions to stderr (same as RUST_LOG=debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Toss three coins six times and derive the four hexagrams
    Cast {
        /// The question to ask (at least 5 characters)
        question: Option<String>,

        /// RNG seed for a reproducible cast
        #[arg(short, long)]
        seed: Option<u64>,

        /// JSON text corpus keyed by hexagram number
        #[arg(short, long)]
        corpus: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: Format,
    },

    /// Derive a reading from given line values, bottom line first
    Resolve {
        /// Six values from 6-9, e.g. 9,8,9,8,9,8
        lines: String,

        /// JSON text corpus keyed by hexagram number
        #[arg(short, long)]
        corpus: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: Format,
    },

    /// Resolve a yin/yang bit pattern, bottom line first
    Bits {
        /// Six bits, e.g. 101011
        bits: String,
    },

    /// Show a hexagram by King Wen number
    Show {
        /// King Wen number (1-64)
        number: String,

        /// JSON text corpus keyed by hexagram number
        #[arg(short, long)]
        corpus: Option<PathBuf>,
    },

    /// Print the King Wen lookup table
    Table,

    /// Cast a reading and print the request for an interpreter
    Prompt {
        /// The question to ask (at least 5 characters)
        question: String,

        /// RNG seed for a reproducible cast
        #[arg(short, long)]
        seed: Option<u64>,

        /// JSON text corpus keyed by hexagram number
        #[arg(short, long)]
        corpus: Option<PathBuf>,

        /// Print the request and chat messages as JSON
        #[arg(long)]
        json: bool,
    },
}

fn config(seed: Option<u64>, corpus: Option<PathBuf>) -> ReadingConfig {
    let mut config = ReadingConfig::default();
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    if let Some(path) = corpus {
        config = config.with_corpus_path(path);
    }
    config
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let result = match cli.command {
        Commands::Cast {
            question,
            seed,
            corpus,
            format,
        } => commands::cast::run(question.as_deref(), &config(seed, corpus), format),
        Commands::Resolve {
            lines,
            corpus,
            format,
        } => commands::resolve::run(&lines, &config(None, corpus), format),
        Commands::Bits { bits } => commands::bits::run(&bits),
        Commands::Show { number, corpus } => commands::show::run(&number, &config(None, corpus)),
        Commands::Table => commands::table::run(),
        Commands::Prompt {
            question,
            seed,
            corpus,
            json,
        } => commands::prompt::run(&question, &config(seed, corpus), json),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
