//! # Play Command
//!
//! Interactive five-card draw against CPU opponents. The human sits in seat 0
//! and answers betting and discard prompts on stdin; CPU seats act through
//! the baseline policy.
//!
//! - Betting input: `fold|f`, `check|k`, `call|c`, `bet N`, `raise N`, `q`
//! - Discard input: card positions 1-5 separated by spaces or commas, blank
//!   to stand pat, `q` to quit
//! - `q` aborts the running round (all contributions refunded) and ends the
//!   session normally; closing stdin mid-round is an interruption

use crate::config::{self, Config};
use crate::error::CliError;
use crate::formatters::{format_hand, format_hand_numbered, format_validated};
use crate::io_utils::read_stdin_line;
use crate::session::{DrawOutcome, Session, cpu_names};
use crate::ui;
use crate::validation::{DiscardInput, ParseResult, parse_discards, parse_player_action};
use fivedraw_ai::{AIOpponent, BaselineAI};
use fivedraw_engine::errors::GameError;
use fivedraw_engine::game::Phase;
use fivedraw_engine::table::SeatSpec;
use std::io::{BufRead, Write};

const HUMAN_SEAT: usize = 0;

/// Command-line overrides for a play session; `None` falls back to the
/// resolved configuration.
#[derive(Debug, Clone, Default)]
pub struct PlayOptions {
    pub opponents: Option<usize>,
    pub rounds: u32,
    pub seed: Option<u64>,
    pub name: String,
}

/// What the human chose to do with the session.
enum Flow {
    Continue,
    Quit,
}

/// Handle the play command: interactive rounds until `rounds` are played,
/// the human quits or runs out of chips, or fewer than two seats are funded.
///
/// # Errors
///
/// * `CliError::InvalidInput` if `rounds` is 0 or the opponent count is out of range
/// * `CliError::Interrupted` if stdin closes in the middle of a round
/// * `CliError::Engine` for engine failures other than a failed draw
pub fn handle_play_command(
    opts: PlayOptions,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let cfg = config::load()?;
    execute_play_command(&cfg, opts, out, err, stdin)
}

fn execute_play_command(
    cfg: &Config,
    opts: PlayOptions,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    if opts.rounds == 0 {
        ui::write_error(err, "rounds must be >= 1")?;
        return Err(CliError::InvalidInput("rounds must be >= 1".to_string()));
    }
    let opponents = opts.opponents.unwrap_or(cfg.opponents);
    if let Err(e) = config::validate_opponents(opponents) {
        ui::write_error(err, &e.to_string())?;
        return Err(CliError::InvalidInput(e.to_string()));
    }
    let seed = opts.seed.or(cfg.seed).unwrap_or_else(rand::random);

    let mut seats = vec![SeatSpec::human(opts.name.clone())];
    let mut cpus: Vec<Option<Box<dyn AIOpponent>>> = vec![None];
    for (i, name) in cpu_names(seed, opponents).into_iter().enumerate() {
        seats.push(SeatSpec::cpu(name));
        let ai = BaselineAI::new(seed.wrapping_add(i as u64 + 1)).with_draw_style(cfg.draw_style);
        cpus.push(Some(Box::new(ai)));
    }
    let mut session = Session::new(cfg.table_config(), seats, cpus, seed)?;

    writeln!(
        out,
        "play: opponents={} rounds={} seed={}",
        opponents, opts.rounds, seed
    )?;
    writeln!(
        out,
        "Ante: {}  Raise increment: {}",
        cfg.ante, cfg.raise_increment
    )?;

    let mut played = 0u32;
    for _ in 0..opts.rounds {
        if session.table().player(HUMAN_SEAT)?.balance() == 0 {
            writeln!(out, "You are out of chips.")?;
            break;
        }
        match session.start_round() {
            Ok(()) => {}
            Err(GameError::NotEnoughPlayers { .. }) => {
                writeln!(out, "No opponents left with chips.")?;
                break;
            }
            Err(e) => return Err(e.into()),
        }
        ui::write_rule(out)?;
        session.drain_events(out)?;
        show_hand(&session, out)?;

        let flow = play_round(&mut session, out, err, stdin)?;
        session.drain_events(out)?;
        played += 1;
        show_balances(&session, out)?;
        if let Flow::Quit = flow {
            break;
        }
    }

    let balance = session.table().player(HUMAN_SEAT)?.balance();
    writeln!(out, "Session rounds={} balance={}", played, balance)?;
    Ok(())
}

fn play_round(
    session: &mut Session,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<Flow, CliError> {
    while session.table().phase().in_round() {
        session.drain_events(out)?;
        match session.table().phase() {
            Phase::Draw => {
                if let Flow::Quit = draw_phase(session, out, err, stdin)? {
                    return Ok(Flow::Quit);
                }
            }
            _ => {
                let Some(seat) = session.table().to_act() else {
                    break;
                };
                if session.is_cpu(seat) {
                    if let Some(mv) = session.step_cpu()? {
                        writeln!(out, "{} {}", session.name(mv.seat), format_validated(&mv.action))?;
                    }
                } else if let Flow::Quit = human_action(session, seat, out, err, stdin)? {
                    return Ok(Flow::Quit);
                }
            }
        }
    }
    Ok(Flow::Continue)
}

fn human_action(
    session: &mut Session,
    seat: usize,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<Flow, CliError> {
    loop {
        let table = session.table();
        let player = table.player(seat)?;
        writeln!(
            out,
            "Pot: {}  To call: {}  Your balance: {}",
            table.pot(),
            table.to_call(seat)?,
            player.balance()
        )?;
        write!(out, "Enter action (fold/check/call/bet N/raise N/q): ")?;
        out.flush()?;

        let Some(input) = read_stdin_line(stdin) else {
            session.abort_round()?;
            return Err(CliError::Interrupted(
                "Input closed in the middle of a round".to_string(),
            ));
        };
        match parse_player_action(&input) {
            ParseResult::Action(action) => match session.apply(seat, action) {
                Ok(validated) => {
                    writeln!(out, "{} {}", session.name(seat), format_validated(&validated))?;
                    return Ok(Flow::Continue);
                }
                Err(e) => ui::write_error(err, &format!("Invalid action: {}", e))?,
            },
            ParseResult::Quit => {
                session.abort_round()?;
                return Ok(Flow::Quit);
            }
            ParseResult::Invalid(msg) => ui::write_error(err, &msg)?,
        }
    }
}

fn draw_phase(
    session: &mut Session,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<Flow, CliError> {
    let human_in = !session.table().player(HUMAN_SEAT)?.is_folded();
    if human_in {
        loop {
            let hand = session.table().player(HUMAN_SEAT)?.hand().to_vec();
            writeln!(out, "Your hand: {}", format_hand_numbered(&hand))?;
            write!(out, "Discard (positions 1-5, blank to stand pat, q to quit): ")?;
            out.flush()?;

            let Some(input) = read_stdin_line(stdin) else {
                session.abort_round()?;
                return Err(CliError::Interrupted(
                    "Input closed in the middle of a round".to_string(),
                ));
            };
            match parse_discards(&input) {
                DiscardInput::Indices(indices) => {
                    session.set_discards(HUMAN_SEAT, &indices)?;
                    break;
                }
                DiscardInput::Quit => {
                    session.abort_round()?;
                    return Ok(Flow::Quit);
                }
                DiscardInput::Invalid(msg) => ui::write_error(err, &msg)?,
            }
        }
    }

    session.cpu_discards()?;
    let discarded: Vec<(usize, usize)> = session
        .table()
        .players()
        .iter()
        .filter(|p| !p.is_folded() && p.seat() != HUMAN_SEAT)
        .map(|p| (p.seat(), p.discards().len()))
        .collect();
    for (seat, n) in discarded {
        writeln!(out, "{} draws {}", session.name(seat), n)?;
    }

    if session.complete_draw()? == DrawOutcome::Aborted {
        ui::display_warning(err, "The deck ran out during the draw; round aborted")?;
        return Ok(Flow::Continue);
    }
    if human_in {
        show_hand(session, out)?;
    }
    Ok(Flow::Continue)
}

fn show_hand(session: &Session, out: &mut dyn Write) -> Result<(), CliError> {
    let player = session.table().player(HUMAN_SEAT)?;
    if !player.hand().is_empty() {
        writeln!(out, "Your hand: {}", format_hand(player.hand()))?;
    }
    Ok(())
}

fn show_balances(session: &Session, out: &mut dyn Write) -> Result<(), CliError> {
    let line = session
        .table()
        .players()
        .iter()
        .map(|p| format!("{}={}", session.name(p.seat()), p.balance()))
        .collect::<Vec<_>>()
        .join(" ");
    writeln!(out, "Balances: {}", line)?;
    Ok(())
}
