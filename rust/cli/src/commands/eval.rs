//! Hand evaluation command: scores five cards given on the command line.

use crate::error::CliError;
use crate::formatters::format_hand;
use crate::ui;
use fivedraw_engine::cards::Card;
use fivedraw_engine::hand::evaluate_hand;
use std::io::Write;

/// Handle the eval command.
///
/// Cards use the short notation `Ah`, `10d`, `Tc`, `2s`. The same card may not
/// appear twice.
pub fn handle_eval_command(
    cards: &[String],
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let parsed = match parse_five(cards) {
        Ok(p) => p,
        Err(msg) => {
            ui::write_error(err, &msg)?;
            return Err(CliError::InvalidInput(msg));
        }
    };

    let ev = evaluate_hand(&parsed);
    writeln!(out, "Hand: {}", format_hand(&parsed))?;
    writeln!(out, "Category: {} (rank {})", ev.name, ev.rank())?;
    writeln!(out, "Score: {}", ev.score)?;
    Ok(())
}

fn parse_five(cards: &[String]) -> Result<[Card; 5], String> {
    let parsed = cards
        .iter()
        .map(|s| s.parse::<Card>().map_err(|e| e.to_string()))
        .collect::<Result<Vec<_>, _>>()?;
    for (i, c) in parsed.iter().enumerate() {
        if parsed[..i].contains(c) {
            return Err(format!("Duplicate card: {}", cards[i]));
        }
    }
    let count = parsed.len();
    parsed
        .try_into()
        .map_err(|_| format!("Expected 5 cards, got {}", count))
}
