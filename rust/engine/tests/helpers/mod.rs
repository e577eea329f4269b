#![allow(dead_code)]

use std::collections::VecDeque;

use fivedraw_engine::cards::Card;
use fivedraw_engine::config::TableConfig;
use fivedraw_engine::deck::CardSource;
use fivedraw_engine::errors::CardSourceError;
use fivedraw_engine::table::{SeatSpec, Table};

/// Parses "2s 2h 9d" into cards.
pub fn cards(s: &str) -> Vec<Card> {
    s.split_whitespace().map(|c| c.parse().unwrap()).collect()
}

pub fn hand(s: &str) -> [Card; 5] {
    cards(s).try_into().unwrap()
}

/// Deals cards in exactly the order given. Mucked cards go to the back of the
/// queue on reshuffle; `fail_next` makes the next N draws fail.
#[derive(Debug, Default)]
pub struct ScriptedSource {
    queue: VecDeque<Card>,
    muck: Vec<Card>,
    pub fail_next: usize,
}

impl ScriptedSource {
    pub fn new(order: &str) -> Self {
        Self {
            queue: cards(order).into(),
            ..Self::default()
        }
    }
}

impl CardSource for ScriptedSource {
    fn draw(&mut self, n: usize) -> Result<Vec<Card>, CardSourceError> {
        if self.fail_next > 0 {
            self.fail_next -= 1;
            return Err(CardSourceError::Unavailable("scripted failure".into()));
        }
        if n > self.queue.len() {
            return Err(CardSourceError::Exhausted {
                requested: n,
                available: self.queue.len(),
            });
        }
        Ok(self.queue.drain(..n).collect())
    }

    fn reshuffle(&mut self) -> Result<(), CardSourceError> {
        self.queue.extend(self.muck.drain(..));
        Ok(())
    }

    fn muck(&mut self, cards: &[Card]) {
        self.muck.extend_from_slice(cards);
    }

    fn new_round(&mut self) -> Result<(), CardSourceError> {
        Ok(())
    }
}

/// Always fails.
pub struct BrokenSource;

impl CardSource for BrokenSource {
    fn draw(&mut self, _n: usize) -> Result<Vec<Card>, CardSourceError> {
        Err(CardSourceError::Unavailable("deck service down".into()))
    }
    fn reshuffle(&mut self) -> Result<(), CardSourceError> {
        Ok(())
    }
    fn muck(&mut self, _cards: &[Card]) {}
    fn new_round(&mut self) -> Result<(), CardSourceError> {
        Ok(())
    }
}

pub fn seats(n: usize) -> Vec<SeatSpec> {
    (0..n)
        .map(|i| {
            if i == 0 {
                SeatSpec::human("YOU")
            } else {
                SeatSpec::cpu(format!("CPU {}", i))
            }
        })
        .collect()
}

pub fn scripted_table(n: usize, order: &str) -> Table {
    Table::new(TableConfig::default(), seats(n), Box::new(ScriptedSource::new(order))).unwrap()
}
