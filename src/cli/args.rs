//! CLI argument definitions using clap
//!
//! Commands:
//! - fastfilter filter [--config <path>]
//! - fastfilter serve [--config <path>]
//! - fastfilter ops

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// fastfilter - sort-then-binary-search threshold filtering over JSON arrays
#[derive(Parser, Debug)]
#[command(name = "fastfilter")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Read one request from stdin, write one response, and exit
    Filter {
        /// Path to configuration file (defaults apply when omitted)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Answer requests line by line until stdin closes
    Serve {
        /// Path to configuration file (defaults apply when omitted)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Print the registered operation names as a JSON array
    Ops,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
