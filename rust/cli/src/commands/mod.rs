//! Command handler modules for the fivedraw CLI.
//!
//! Every subcommand follows the same pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Output streams (`&mut dyn Write`) and stdin (`&mut dyn BufRead`) passed in
//! - Errors propagated via [`CliError`](crate::error::CliError)
//!
//! # Example
//!
//! ```rust
//! use fivedraw_cli::commands::handle_eval_command;
//!
//! let cards: Vec<String> = ["Ah", "Ad", "9c", "9s", "2h"].iter().map(|s| s.to_string()).collect();
//! let mut out = Vec::new();
//! let mut err = Vec::new();
//! handle_eval_command(&cards, &mut out, &mut err).unwrap();
//! assert!(String::from_utf8(out).unwrap().contains("2 Pair"));
//! ```

pub mod cfg;
pub mod eval;
pub mod play;
pub mod sim;

pub use cfg::handle_cfg_command;
pub use eval::handle_eval_command;
pub use play::{PlayOptions, handle_play_command};
pub use sim::{SimOptions, handle_sim_command};
