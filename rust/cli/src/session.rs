//! Drives a [`Table`] for the commands: owns the CPU policies, collects table
//! events from a channel, and handles card-source failures during the draw.

use std::io::Write;
use std::sync::mpsc::{self, Receiver};

use fivedraw_ai::AIOpponent;
use fivedraw_engine::config::TableConfig;
use fivedraw_engine::deck::Deck;
use fivedraw_engine::errors::GameError;
use fivedraw_engine::events::TableEvent;
use fivedraw_engine::game::Phase;
use fivedraw_engine::player::PlayerAction;
use fivedraw_engine::rules::ValidatedAction;
use fivedraw_engine::table::{SeatSpec, Table};
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::formatters::format_event;

/// Names handed out to CPU seats, shuffled per session.
pub const CPU_NAMES: [&str; 10] = [
    "Maverick", "Ace", "Spike", "Rusty", "Duke", "Viper", "Lucky", "Shadow", "Bandit", "Tex",
];

/// `count` distinct CPU names in seed order.
pub fn cpu_names(seed: u64, count: usize) -> Vec<String> {
    let mut names = CPU_NAMES.to_vec();
    names.shuffle(&mut ChaCha8Rng::seed_from_u64(seed));
    names.into_iter().take(count).map(String::from).collect()
}

/// One seat's pending decision as reported by [`Session::step_cpu`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CpuMove {
    pub seat: usize,
    pub action: ValidatedAction,
}

/// How the draw phase ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawOutcome {
    Completed,
    /// Replacement cards could not be fetched; every contribution went back.
    Aborted,
}

pub struct Session {
    table: Table,
    cpus: Vec<Option<Box<dyn AIOpponent>>>,
    events: Receiver<TableEvent>,
    names: Vec<String>,
}

impl Session {
    /// Seats `seats` at a fresh seeded table. `cpus[i]` is the policy for
    /// seat `i`, `None` for a human seat.
    pub fn new(
        config: TableConfig,
        seats: Vec<SeatSpec>,
        cpus: Vec<Option<Box<dyn AIOpponent>>>,
        seed: u64,
    ) -> Result<Self, GameError> {
        if cpus.len() != seats.len() {
            return Err(GameError::InvalidConfig(format!(
                "{} seats but {} seat policies",
                seats.len(),
                cpus.len()
            )));
        }
        let names = seats.iter().map(|s| s.name.clone()).collect();
        let (tx, rx) = mpsc::channel();
        let table = Table::new(config, seats, Box::new(Deck::new_with_seed(seed)))?
            .with_sink(Box::new(tx))
            .with_seed(seed);
        Ok(Self {
            table,
            cpus,
            events: rx,
            names,
        })
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn name(&self, seat: usize) -> &str {
        self.names.get(seat).map(String::as_str).unwrap_or("?")
    }

    pub fn is_cpu(&self, seat: usize) -> bool {
        matches!(self.cpus.get(seat), Some(Some(_)))
    }

    /// Writes the transcript line of every event received since the last call.
    pub fn drain_events(&self, out: &mut dyn Write) -> std::io::Result<()> {
        for event in self.events.try_iter() {
            if let Some(line) = format_event(&event, &self.names) {
                writeln!(out, "{}", line)?;
            }
        }
        Ok(())
    }

    /// Drops pending events without printing them.
    pub fn discard_events(&self) {
        self.events.try_iter().for_each(drop);
    }

    pub fn start_round(&mut self) -> Result<(), GameError> {
        self.table.start_round()
    }

    pub fn apply(&mut self, seat: usize, action: PlayerAction) -> Result<ValidatedAction, GameError> {
        self.table.apply_action(seat, action)
    }

    pub fn set_discards(&mut self, seat: usize, indices: &[usize]) -> Result<(), GameError> {
        self.table.set_discards(seat, indices)
    }

    pub fn abort_round(&mut self) -> Result<(), GameError> {
        self.table.abort_round()
    }

    /// Lets the CPU seat the table is waiting on act. Returns `None` when the
    /// table is not waiting on a CPU.
    ///
    /// A policy answer the engine refuses is replaced by a fold.
    pub fn step_cpu(&mut self) -> Result<Option<CpuMove>, GameError> {
        let Some(seat) = self.table.to_act() else {
            return Ok(None);
        };
        let Some(Some(ai)) = self.cpus.get_mut(seat) else {
            return Ok(None);
        };
        let action = ai.get_action(&self.table, seat);
        let validated = match self.table.apply_action(seat, action) {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!(seat, ?action, error = %e, "cpu action refused, folding");
                self.table.apply_action(seat, PlayerAction::Fold)?
            }
        };
        Ok(Some(CpuMove {
            seat,
            action: validated,
        }))
    }

    /// Registers the discards of every CPU still in the round.
    pub fn cpu_discards(&mut self) -> Result<(), GameError> {
        for seat in 0..self.cpus.len() {
            let player = self.table.player(seat)?;
            if player.is_folded() {
                continue;
            }
            let hand = player.hand().to_vec();
            if let Some(Some(ai)) = self.cpus.get_mut(seat) {
                let indices = ai.choose_discards(&hand);
                if !indices.is_empty() {
                    self.table.set_discards(seat, &indices)?;
                }
            }
        }
        Ok(())
    }

    /// Replaces the registered discards. If the card source gives out even
    /// after a reshuffle the round is aborted and refunded.
    pub fn complete_draw(&mut self) -> Result<DrawOutcome, GameError> {
        match self.table.complete_draw() {
            Ok(()) => Ok(DrawOutcome::Completed),
            Err(GameError::CardSource(e)) => {
                tracing::warn!(round = self.table.round_number(), error = %e, "draw failed");
                self.table.abort_round()?;
                Ok(DrawOutcome::Aborted)
            }
            Err(e) => Err(e),
        }
    }

    /// Plays one round where every seat is a CPU.
    pub fn play_cpu_round(&mut self) -> Result<(), GameError> {
        self.table.start_round()?;
        while self.table.phase().in_round() {
            match self.table.phase() {
                Phase::Draw => {
                    self.cpu_discards()?;
                    self.complete_draw()?;
                }
                _ => {
                    if self.step_cpu()?.is_none() {
                        let seat = self.table.to_act().unwrap_or_default();
                        return Err(GameError::InvalidConfig(format!(
                            "seat {} has no policy",
                            seat
                        )));
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fivedraw_ai::{BaselineAI, DrawStyle};

    fn all_cpu(n: usize, seed: u64) -> Session {
        let names = cpu_names(seed, n);
        let seats = names.iter().map(SeatSpec::cpu).collect();
        let cpus = (0..n)
            .map(|i| {
                Some(Box::new(
                    BaselineAI::new(seed + i as u64).with_draw_style(DrawStyle::KeepMadeCards),
                ) as Box<dyn AIOpponent>)
            })
            .collect();
        Session::new(TableConfig::default(), seats, cpus, seed).unwrap()
    }

    #[test]
    fn test_cpu_names_are_distinct_and_seeded() {
        let a = cpu_names(3, 7);
        let b = cpu_names(3, 7);
        assert_eq!(a, b);
        let mut sorted = a.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), 7);
    }

    #[test]
    fn test_policy_count_must_match_seats() {
        let seats = vec![SeatSpec::human("YOU"), SeatSpec::cpu("Tex")];
        let r = Session::new(TableConfig::default(), seats, vec![None], 1);
        assert!(matches!(r, Err(GameError::InvalidConfig(_))));
    }

    #[test]
    fn test_cpu_rounds_conserve_chips() {
        let mut s = all_cpu(4, 11);
        for _ in 0..20 {
            if s.table().funded_seats() < 2 {
                break;
            }
            s.play_cpu_round().unwrap();
            assert_eq!(s.table().phase(), Phase::Showdown);
            assert_eq!(s.table().total_chips(), 4000);
        }
    }

    #[test]
    fn test_events_are_rendered() {
        let mut s = all_cpu(2, 5);
        s.play_cpu_round().unwrap();
        let mut out = Vec::new();
        s.drain_events(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Round 1"));
        assert!(text.contains(" wins "));

        let mut again = Vec::new();
        s.drain_events(&mut again).unwrap();
        assert!(again.is_empty());
    }

    #[test]
    fn test_step_cpu_skips_human_turn() {
        let seats = vec![SeatSpec::cpu("Tex"), SeatSpec::human("YOU")];
        let cpus: Vec<Option<Box<dyn AIOpponent>>> = vec![Some(Box::new(BaselineAI::new(1))), None];
        let mut s = Session::new(TableConfig::default(), seats, cpus, 3).unwrap();
        s.start_round().unwrap();
        // dealer is seat 0, so the human seat acts first
        assert_eq!(s.table().to_act(), Some(1));
        assert!(!s.is_cpu(1));
        assert_eq!(s.step_cpu().unwrap(), None);
    }
}
