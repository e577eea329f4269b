//! Command-line definitions.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "fivedraw",
    version,
    about = "Five-card draw poker at the terminal"
)]
pub struct FivedrawCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play against CPU opponents, reading actions from stdin
    Play {
        /// Number of CPU seats (1-7); defaults to the configured value
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=7))]
        opponents: Option<u8>,
        /// Rounds to play before the session ends
        #[arg(long, default_value_t = 5)]
        rounds: u32,
        #[arg(long)]
        seed: Option<u64>,
        /// Name shown for your seat
        #[arg(long, default_value = "YOU")]
        name: String,
    },
    /// Run an all-CPU table and report the results
    Sim {
        #[arg(long)]
        rounds: u32,
        /// Seats at the table (2-8)
        #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u8).range(2..=8))]
        players: u8,
        #[arg(long)]
        seed: Option<u64>,
        /// Write one JSON round record per line
        #[arg(long)]
        output: Option<String>,
        /// CPU policy for every seat (baseline, baseline-draw); defaults to
        /// the configured draw style
        #[arg(long)]
        ai: Option<String>,
    },
    /// Evaluate five cards, e.g. `eval Ah Kh Qh Jh 10h`
    Eval {
        #[arg(num_args = 5, required = true)]
        cards: Vec<String>,
    },
    /// Display the resolved configuration with value sources
    Cfg,
}
