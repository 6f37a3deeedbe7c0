//! CLI definitions and entry point

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use super::commands;
use signpath::config::Config;
use signpath::core::models::DictionaryKind;
use signpath::output::OutputMode;

/// signpath - Text to sign-language media
#[derive(Parser, Debug)]
#[command(
    name = "signpath",
    version,
    about = "Translate text into sign-language media assets",
    long_about = "Translate free-form text into an ordered list of sign-language media assets.\n\n\
                  Each word is matched against sentences first, then words, and is\n\
                  spelled out letter by letter from the alphabet as a last resort."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Directory holding sentences.json, words.json and alphabet.json
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Configuration file (defaults to .signpath.toml, then ~/.signpath/config.toml)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create empty dictionaries and asset folders in the data directory
    Init {
        /// Overwrite existing dictionary files
        #[arg(short, long)]
        force: bool,
    },

    /// Translate text into signs
    Translate {
        /// Text to translate
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Add or update a dictionary entry
    Add {
        /// Key to register (a word, a sentence, or a single letter/digit)
        key: String,

        /// Asset path (relative paths are resolved against the assets root)
        path: String,

        /// Dictionary: words, sentences, alphabet
        #[arg(short = 't', long = "to", default_value = "words")]
        kind: DictionaryKind,
    },

    /// Import a JSON dictionary file
    Import {
        /// JSON object mapping keys to asset paths
        file: PathBuf,

        /// Dictionary: words, sentences, alphabet
        #[arg(short = 'i', long = "into", default_value = "words")]
        kind: DictionaryKind,

        /// Merge into existing entries instead of replacing the dictionary
        #[arg(long)]
        merge: bool,
    },

    /// Register every media file in a directory as dictionary entries
    Scan {
        /// Directory to scan (defaults to <assets root>/static/<kind>)
        dir: Option<PathBuf>,

        /// Dictionary: words, sentences, alphabet
        #[arg(short = 'i', long = "into")]
        kind: DictionaryKind,

        /// Do not overwrite keys that already exist
        #[arg(long)]
        keep_existing: bool,
    },

    /// Show dictionary contents
    Show {
        /// Dictionary to show (all when omitted)
        kind: Option<DictionaryKind>,
    },

    /// Show dictionary sizes and sample coverage
    Stats {
        /// Sample text to resolve (defaults to the configured sample)
        #[arg(short, long)]
        text: Option<String>,
    },

    /// List dictionary entries whose asset file is missing
    Audit,

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let cwd = std::env::current_dir()?;
    let mut config =
        Config::discover(cli.config.as_deref(), &cwd).context("failed to load configuration")?;
    if let Some(dir) = cli.data_dir {
        config = config.with_data_dir(dir);
    }
    log::debug!("Using data directory {}", config.data_dir().display());

    match cli.command {
        Some(Command::Init { force }) => commands::init(&config, force, output_mode),
        Some(Command::Translate { text }) => {
            commands::translate(&config, &text.join(" "), output_mode)
        },
        Some(Command::Add { key, path, kind }) => {
            commands::add(&config, kind, &key, &path, output_mode)
        },
        Some(Command::Import { file, kind, merge }) => {
            commands::import(&config, &file, kind, merge, output_mode)
        },
        Some(Command::Scan {
            dir,
            kind,
            keep_existing,
        }) => commands::scan(&config, dir.as_deref(), kind, keep_existing, output_mode),
        Some(Command::Show { kind }) => commands::show(&config, kind, output_mode),
        Some(Command::Stats { text }) => commands::stats(&config, text.as_deref(), output_mode),
        Some(Command::Audit) => commands::audit(&config, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": signpath::VERSION
                    })
                );
            } else {
                println!("signpath v{}", signpath::VERSION);
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": signpath::VERSION,
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("signpath v{}", signpath::VERSION);
                println!("\nRun 'signpath --help' for usage");
                println!("Run 'signpath translate \"yes thank you 8\"' to get started");
            }
            Ok(())
        },
    }
}
