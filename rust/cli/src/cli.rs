//! Command-line argument types.

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(
    name = "pig",
    version,
    about = "Play the dice game Pig at the terminal"
)]
pub struct PigCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Play interactive games of Pig until nobody wants another
    Play {
        /// Number of players (asked interactively when omitted)
        #[arg(long, value_parser = clap::value_parser!(u8).range(2..))]
        players: Option<u8>,
        /// Points needed to win
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        target: Option<u32>,
        /// Seed for the die (random when omitted)
        #[arg(long)]
        seed: Option<u64>,
        /// How game events are written to stdout
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Roll the seeded die a number of times and show the distribution
    Rolls {
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, default_value_t = 60, value_parser = clap::value_parser!(u32).range(1..=1_000_000))]
        count: u32,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}

/// Rendering of game events.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable transcript
    Text,
    /// One JSON object per event; prompts move to stderr
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }
}
