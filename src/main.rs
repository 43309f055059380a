// Copyright (c) 2025 Trie Dict Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Trie Dict - command-line entrypoint.
//!
//! Loads a word list into a prefix dictionary and answers exact lookups,
//! prefix predictions and full dumps. Results go to stdout, logs to stderr.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use trie_dict_lib::config::{ConfigLoader, LogConfig, TrieDictConfig, ENV_PREFIX};
use trie_dict_lib::data_structures::PrefixDict;
use trie_dict_lib::error::{TrieDictError, TrieDictResult};
use trie_dict_lib::word_list::load_word_list;

/// Command line arguments for the trie dictionary tool.
#[derive(Parser, Debug)]
#[clap(name = "trie_dict", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Check whether keys are complete entries
    Contains {
        /// Word list, one entry per line
        #[clap(short, long, value_parser)]
        words: PathBuf,

        /// Keys to look up
        #[clap(required = true)]
        keys: Vec<String>,
    },

    /// List every entry starting with a prefix
    Predict {
        /// Word list, one entry per line
        #[clap(short, long, value_parser)]
        words: PathBuf,

        /// Print the predictions as a JSON array
        #[clap(long)]
        json: bool,

        /// Prefix to expand
        prefix: String,
    },

    /// Print every entry with its index
    Dump {
        /// Word list, one entry per line
        #[clap(short, long, value_parser)]
        words: PathBuf,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_logging(log: &LogConfig) -> TrieDictResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_file(log.source_location)
        .with_line_number(log.source_location);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };
    result.map_err(|e| TrieDictError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

fn load_config(path: Option<&Path>) -> TrieDictConfig {
    match ConfigLoader::new(path, ENV_PREFIX).load() {
        Ok(config) => config,
        Err(e) => {
            // Logging is not configured yet; fall back to the defaults to report.
            let _ = init_logging(&LogConfig::default());
            error!("Configuration error: {}", e);
            process::exit(1);
        }
    }
}

fn load_dict(words: &Path, config: &TrieDictConfig) -> anyhow::Result<PrefixDict> {
    load_word_list(words, &config.dict)
        .with_context(|| format!("Failed to load word list {}", words.display()))
}

fn gen_config(output: &Path) -> TrieDictResult<()> {
    let default_config = TrieDictConfig::default();

    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let toml = toml::to_string_pretty(&default_config)
        .map_err(|e| TrieDictError::Custom(format!("Failed to serialize config: {e}")))?;
    std::fs::write(output, toml)?;

    Ok(())
}

/// Main entry point for the application.
fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Generating a config must work even when the current one is broken.
    if let Command::GenConfig { output } = &args.command {
        init_logging(&LogConfig::default())?;
        gen_config(output)?;
        info!("Default configuration written to {:?}", output);
        return Ok(());
    }

    let config = load_config(args.config.as_deref());
    init_logging(&config.log)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.command {
        Command::Contains { words, keys } => {
            let dict = load_dict(&words, &config)?;
            for key in keys {
                writeln!(out, "{}\t{}", key, dict.contains(&key))?;
            }
        }
        Command::Predict {
            words,
            json,
            prefix,
        } => {
            let dict = load_dict(&words, &config)?;
            let mut predictions = dict.predict(&prefix);
            predictions.sort();
            info!(prefix = %prefix, matches = predictions.len(), "Predicted");

            if json {
                let text = serde_json::to_string_pretty(&predictions).map_err(TrieDictError::from)?;
                writeln!(out, "{text}")?;
            } else {
                for prediction in &predictions {
                    writeln!(out, "{prediction}")?;
                }
            }
        }
        Command::Dump { words } => {
            let dict = load_dict(&words, &config)?;
            let entries = dict.dump_to(&mut out)?;
            info!(entries = entries.len(), "Dumped dictionary");
        }
        Command::Validate => {
            info!("Configuration validated successfully");
        }
        Command::GenConfig { .. } => {}
    }

    out.flush()?;
    Ok(())
}
