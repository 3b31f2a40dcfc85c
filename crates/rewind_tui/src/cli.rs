//! Command-line interface for rewind.

use clap::{Parser, Subcommand};

/// Rewind - tic-tac-toe with time travel
#[derive(Parser, Debug)]
#[command(name = "rewind")]
#[command(about = "Two-player tic-tac-toe with full move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./rewind.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq, Default)]
pub enum Command {
    /// Play interactively in the terminal
    #[default]
    Play,

    /// Apply moves and print the resulting board, status and move list
    Show {
        /// Square indices (0-8) to play in order, comma separated
        #[arg(short, long, value_delimiter = ',')]
        moves: Vec<usize>,

        /// Move number to view after playing
        #[arg(short, long)]
        jump: Option<usize>,
    },
}
