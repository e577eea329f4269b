//! Simulation command: an all-CPU table played for a number of rounds.
//!
//! Each round's [`RoundRecord`](fivedraw_engine::logger::RoundRecord) can be
//! written as one JSON line per round with `--output`.
//!
//! # Examples
//!
//! ```no_run
//! use fivedraw_cli::commands::{SimOptions, handle_sim_command};
//! use std::io;
//!
//! let opts = SimOptions {
//!     rounds: 100,
//!     players: 4,
//!     seed: Some(42),
//!     output: Some("data/sim.jsonl".to_string()),
//!     ai: None,
//! };
//! handle_sim_command(opts, &mut io::stdout(), &mut io::stderr()).unwrap();
//! ```

use crate::config::{self, Config};
use crate::error::CliError;
use crate::session::{Session, cpu_names};
use crate::ui;
use fivedraw_ai::{AIOpponent, BaselineAI, create_ai};
use fivedraw_engine::config::{MAX_SEATS, MIN_SEATS};
use fivedraw_engine::errors::GameError;
use fivedraw_engine::logger::RoundLogger;
use fivedraw_engine::table::SeatSpec;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct SimOptions {
    pub rounds: u32,
    pub players: usize,
    pub seed: Option<u64>,
    /// JSONL path for round records
    pub output: Option<String>,
    /// Policy name accepted by [`create_ai`]; `None` uses the configured draw style
    pub ai: Option<String>,
}

/// Handle the sim command.
///
/// Stops early, without error, once fewer than two seats have chips.
pub fn handle_sim_command(
    opts: SimOptions,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = config::load()?;
    execute_sim_command(&cfg, opts, out, err)
}

fn execute_sim_command(
    cfg: &Config,
    opts: SimOptions,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if opts.rounds == 0 {
        ui::write_error(err, "rounds must be >= 1")?;
        return Err(CliError::InvalidInput("rounds must be >= 1".to_string()));
    }
    if !(MIN_SEATS..=MAX_SEATS).contains(&opts.players) {
        let msg = format!("players must be {}-{}", MIN_SEATS, MAX_SEATS);
        ui::write_error(err, &msg)?;
        return Err(CliError::InvalidInput(msg));
    }
    let seed = opts.seed.or(cfg.seed).unwrap_or_else(rand::random);

    let names = cpu_names(seed, opts.players);
    let mut cpus: Vec<Option<Box<dyn AIOpponent>>> = Vec::with_capacity(opts.players);
    for seat in 0..opts.players {
        let ai_seed = seed.wrapping_add(seat as u64);
        let ai: Box<dyn AIOpponent> = match opts.ai.as_deref() {
            Some(kind) => create_ai(kind, ai_seed).ok_or_else(|| {
                CliError::InvalidInput(format!(
                    "Unknown AI '{}'. Valid: baseline, baseline-draw",
                    kind
                ))
            })?,
            None => Box::new(BaselineAI::new(ai_seed).with_draw_style(cfg.draw_style)),
        };
        cpus.push(Some(ai));
    }
    let seats = names.iter().map(SeatSpec::cpu).collect();
    let mut session = Session::new(cfg.table_config(), seats, cpus, seed)?;

    let mut logger = match &opts.output {
        Some(path) => {
            ensure_parent_dir(Path::new(path))?;
            Some(RoundLogger::create(path)?)
        }
        None => None,
    };

    writeln!(
        out,
        "sim: players={} rounds={} seed={}",
        opts.players, opts.rounds, seed
    )?;

    let mut played = 0u32;
    let mut aborted = 0u32;
    for _ in 0..opts.rounds {
        match session.play_cpu_round() {
            Ok(()) => {}
            Err(GameError::NotEnoughPlayers { .. }) => break,
            Err(e) => return Err(e.into()),
        }
        session.discard_events();
        played += 1;
        if session
            .table()
            .outcome()
            .is_some_and(|o| o.winner.is_none())
        {
            aborted += 1;
        }
        if let Some(logger) = logger.as_mut() {
            logger.write(session.table().record())?;
        }
    }

    if played < opts.rounds {
        ui::display_warning(
            err,
            &format!(
                "Stopped after {} rounds: fewer than two players have chips",
                played
            ),
        )?;
    }
    writeln!(out, "Simulated: {} rounds", played)?;
    if aborted > 0 {
        writeln!(out, "Aborted: {}", aborted)?;
    }
    for p in session.table().players() {
        writeln!(out, "  {:<10} {}", session.name(p.seat()), p.balance())?;
    }
    if let Some(path) = &opts.output {
        writeln!(out, "Records: {}", path)?;
    }
    Ok(())
}

fn ensure_parent_dir(path: &Path) -> std::io::Result<()> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => std::fs::create_dir_all(dir),
        _ => Ok(()),
    }
}
