use crate::cli::Cli;
use clap::Parser;
use std::path::PathBuf;
use tracing::debug;

/// Application configuration derived from CLI arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl Config {
    /// Parse CLI arguments into a Config. `None` means both paths were not
    /// given and the caller should print usage.
    pub fn from_cli() -> Option<Self> {
        Self::from_parsed(Cli::parse())
    }

    pub fn from_parsed(cli: Cli) -> Option<Self> {
        if !cli.extra.is_empty() {
            debug!("ignoring {} extra arguments", cli.extra.len());
        }
        match (cli.input, cli.output) {
            (Some(input), Some(output)) => Some(Config { input, output }),
            _ => None,
        }
    }
}
