use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::GameError;

/// Number of cards in a hand.
pub const HAND_SIZE: usize = 5;

/// Action a seat may take during a betting street.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum PlayerAction {
    /// Fold and forfeit the round
    Fold,
    /// Check (only valid when nothing is owed)
    Check,
    /// Match the required bet
    Call,
    /// Open the betting: pay what is owed plus the increment
    Bet(u32),
    /// Raise a wager: pay what is owed plus the increment
    Raise(u32),
}

/// One seat at the table with its chips, cards and per-round flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    seat: usize,
    human: bool,
    name: String,
    balance: u32,
    hand: Vec<Card>,
    current_bet: u32,
    /// Chips put into the pot this round (ante + collected bets).
    contributed: u32,
    status: String,
    folded: bool,
    all_in: bool,
    discards: BTreeSet<usize>,
}

impl Player {
    pub fn new(seat: usize, human: bool, name: impl Into<String>, balance: u32) -> Self {
        Self {
            seat,
            human,
            name: name.into(),
            balance,
            hand: Vec::with_capacity(HAND_SIZE),
            current_bet: 0,
            contributed: 0,
            status: String::new(),
            folded: false,
            all_in: false,
            discards: BTreeSet::new(),
        }
    }

    pub fn seat(&self) -> usize {
        self.seat
    }
    pub fn is_human(&self) -> bool {
        self.human
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn balance(&self) -> u32 {
        self.balance
    }
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }
    pub fn current_bet(&self) -> u32 {
        self.current_bet
    }
    pub fn contributed(&self) -> u32 {
        self.contributed
    }
    pub fn status(&self) -> &str {
        &self.status
    }
    pub fn is_folded(&self) -> bool {
        self.folded
    }
    pub fn is_all_in(&self) -> bool {
        self.all_in
    }
    pub fn discards(&self) -> &BTreeSet<usize> {
        &self.discards
    }

    /// Still able to act this street: neither folded nor all-in.
    pub fn is_active(&self) -> bool {
        !self.folded && !self.all_in
    }

    /// Clears everything that only lives for one round.
    pub fn reset_round(&mut self) {
        self.hand.clear();
        self.current_bet = 0;
        self.contributed = 0;
        self.status.clear();
        self.folded = false;
        self.all_in = false;
        self.discards.clear();
    }

    pub(crate) fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }

    pub(crate) fn set_hand(&mut self, cards: Vec<Card>) {
        self.hand = cards;
    }

    pub(crate) fn fold(&mut self) {
        self.folded = true;
    }

    pub(crate) fn sit_out(&mut self) {
        self.folded = true;
        self.status = "Out".to_string();
    }

    /// Posts the ante directly into the pot. A short stack posts what it has
    /// and is all-in for the rest of the round. Returns the amount posted.
    pub(crate) fn post_ante(&mut self, ante: u32) -> u32 {
        let paid = ante.min(self.balance);
        self.balance -= paid;
        self.contributed += paid;
        if self.balance == 0 {
            self.all_in = true;
        }
        paid
    }

    /// Moves `amount` from balance into the current-round bet.
    pub(crate) fn commit(&mut self, amount: u32) -> Result<(), GameError> {
        if amount > self.balance {
            return Err(GameError::InsufficientChips {
                needed: amount,
                available: self.balance,
            });
        }
        self.balance -= amount;
        self.current_bet += amount;
        if self.balance == 0 && amount > 0 {
            self.all_in = true;
        }
        Ok(())
    }

    /// Hands the current-round bet over to the pot.
    pub(crate) fn collect_bet(&mut self) -> u32 {
        let bet = self.current_bet;
        self.current_bet = 0;
        self.contributed += bet;
        bet
    }

    /// Takes back every chip this player put in this round.
    pub(crate) fn refund(&mut self) -> u32 {
        let total = self.contributed + self.current_bet;
        self.balance += total;
        self.contributed = 0;
        self.current_bet = 0;
        total
    }

    pub(crate) fn add_chips(&mut self, amount: u32) {
        self.balance = self.balance.saturating_add(amount);
    }

    /// Replaces the discard selection. Indices must be below the hand size.
    pub(crate) fn select_discards(&mut self, indices: &[usize]) -> Result<(), GameError> {
        if let Some(&index) = indices.iter().find(|&&i| i >= self.hand.len()) {
            return Err(GameError::InvalidDiscard {
                index,
                hand_size: self.hand.len(),
            });
        }
        self.discards = indices.iter().copied().collect();
        Ok(())
    }

    /// Removes the selected cards and returns them; the kept cards keep their order.
    pub(crate) fn take_discards(&mut self) -> Vec<Card> {
        let mut thrown = Vec::with_capacity(self.discards.len());
        let mut kept = Vec::with_capacity(HAND_SIZE);
        for (i, c) in self.hand.drain(..).enumerate() {
            if self.discards.contains(&i) {
                thrown.push(c);
            } else {
                kept.push(c);
            }
        }
        self.hand = kept;
        self.discards.clear();
        thrown
    }

    pub(crate) fn receive(&mut self, cards: Vec<Card>) {
        self.hand.extend(cards);
    }
}
