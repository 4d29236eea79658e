//! Command-line driver around the classification library

pub mod orchestration;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::OutputFormat;

#[derive(Debug, Parser)]
#[command(
    name = "commit-classify",
    version,
    about = "Classify conventional commit messages and detect release commits"
)]
pub struct Cli {
    #[arg(short, long, global = true, help = "Custom configuration file path")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, value_enum, help = "Output format (overrides config)")]
    pub format: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Classify commit messages into type, scope, description and breaking flag
    Classify {
        #[arg(help = "Commit message (read from stdin when omitted)")]
        message: Option<String>,

        #[arg(
            short = 'z',
            long,
            conflicts_with = "message",
            help = "Read NUL-separated messages from stdin"
        )]
        null: bool,
    },

    /// Print the version recorded by a release marker commit
    Release {
        #[arg(help = "Commit message (read from stdin when omitted)")]
        message: Option<String>,

        #[arg(
            long,
            overrides_with = "no_merge",
            help = "Test every line, as for a merge commit"
        )]
        merge: bool,

        #[arg(
            long,
            overrides_with = "merge",
            help = "Test only the subject, even if the config enables merge mode"
        )]
        no_merge: bool,
    },

    /// Compute the next version from newest-first commit messages on stdin
    Bump {
        #[arg(long, help = "Current version (defaults to the last release marker)")]
        current: Option<String>,

        #[arg(short = 'z', long, help = "Read NUL-separated messages from stdin")]
        null: bool,

        #[arg(
            long,
            overrides_with = "no_merge",
            help = "Treat every message as a merge commit"
        )]
        merge: bool,

        #[arg(
            long,
            overrides_with = "merge",
            help = "Treat every message as a regular commit, even if the config enables merge mode"
        )]
        no_merge: bool,
    },
}
