use thiserror::Error;

use crate::game::Phase;

/// Failure reported by a [`crate::deck::CardSource`].
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum CardSourceError {
    #[error("Card source exhausted: requested {requested}, available {available}")]
    Exhausted { requested: usize, available: usize },
    #[error("Card source unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid bet amount: {amount}, minimum: {minimum}")]
    InvalidBetAmount { amount: u32, minimum: u32 },
    #[error("Insufficient chips: needed {needed}, available {available}")]
    InsufficientChips { needed: u32, available: u32 },
    #[error("Cannot check while {to_call} is owed")]
    CheckNotAllowed { to_call: u32 },
    #[error("Cannot bet while facing a wager of {to_call}; raise instead")]
    BetFacingWager { to_call: u32 },
    #[error("Nothing to raise; bet instead")]
    NothingToRaise,
    #[error("Player already folded")]
    PlayerAlreadyFolded,
    #[error("It's not player {actual}'s turn (expected player {expected})")]
    NotPlayersTurn { expected: usize, actual: usize },
    #[error("Action not allowed in phase {phase:?}")]
    WrongPhase { phase: Phase },
    #[error("No seat {0} at this table")]
    InvalidSeat(usize),
    #[error("Invalid discard index {index}; a hand holds {hand_size} cards")]
    InvalidDiscard { index: usize, hand_size: usize },
    #[error("Not enough funded players to start a round (need 2, have {funded})")]
    NotEnoughPlayers { funded: usize },
    #[error("Round already in progress")]
    RoundInProgress,
    #[error("No round in progress")]
    NoRoundInProgress,
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Card source failed after reshuffle: {0}")]
    CardSource(#[from] CardSourceError),
}
