//! Observer interface between the table and whatever presents it.
//!
//! The table pushes a [`TableEvent`] into its [`EventSink`] after every state
//! change. Sinks only observe; nothing flows back into the table.

use std::sync::mpsc;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::game::Phase;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TableEvent {
    RoundStarted {
        round: u32,
        dealer: usize,
    },
    PhaseChanged {
        phase: Phase,
    },
    PotUpdated {
        pot: u32,
    },
    PlayerUpdated {
        seat: usize,
        balance: u32,
        current_bet: u32,
        status: String,
        folded: bool,
        all_in: bool,
    },
    TurnChanged {
        seat: usize,
    },
    HandRevealed {
        seat: usize,
        cards: Vec<Card>,
        hand_name: String,
    },
    RoundEnded {
        round: u32,
        winner: Option<usize>,
        amount: u32,
        revealed: bool,
    },
}

pub trait EventSink: Send {
    fn emit(&mut self, event: TableEvent);
}

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: TableEvent) {}
}

/// Forwards events over a channel. A dropped receiver is not an error for
/// the table; the event is lost.
impl EventSink for mpsc::Sender<TableEvent> {
    fn emit(&mut self, event: TableEvent) {
        if self.send(event).is_err() {
            tracing::trace!("event receiver dropped");
        }
    }
}
