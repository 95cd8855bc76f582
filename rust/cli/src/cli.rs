//! Command-line definitions for the `headsup` binary.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "headsup",
    version,
    about = "Heads-up Texas Hold'em against a scripted opponent"
)]
pub struct HeadsupCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play hands against the opponent policy
    Play {
        /// Stop after this many hands
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        hands: Option<u32>,
        /// Seed for the deck and the opponent
        #[arg(long)]
        seed: Option<u64>,
        /// Opponent policy name (reference, passive)
        #[arg(long)]
        opponent: Option<String>,
        /// Pause before each opponent action, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,
        /// Starting stack for both seats
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        stack: Option<u32>,
    },
    /// Print the best five-card hand among the given cards
    Eval {
        /// Cards such as As, Td, 10h (at least five)
        #[arg(required = true, num_args = 1..)]
        cards: Vec<String>,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}
