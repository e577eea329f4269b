//! # fivedraw-ai: CPU Opponents for Five-Card Draw
//!
//! Provides the decision-making for CPU seats at a [`Table`]. A driver asks
//! the opponent for a betting action whenever a CPU seat is to act, and for a
//! set of discard indices during the draw.
//!
//! ## Core Components
//!
//! - [`AIOpponent`] - Trait defining the interface for AI decision-making
//! - [`baseline`] - Decision-table policy with a seeded RNG
//! - [`create_ai`] - Factory function for creating AI opponents
//!
//! ## Quick Start
//!
//! ```rust
//! use fivedraw_ai::{create_ai, AIOpponent};
//! use fivedraw_engine::config::TableConfig;
//! use fivedraw_engine::deck::Deck;
//! use fivedraw_engine::table::{SeatSpec, Table};
//!
//! let mut ai = create_ai("baseline", 42).expect("known AI type");
//!
//! let seats = vec![SeatSpec::cpu("Maverick"), SeatSpec::cpu("Ace")];
//! let mut table = Table::new(TableConfig::default(), seats, Box::new(Deck::new_with_seed(42))).unwrap();
//! table.start_round().unwrap();
//!
//! let seat = table.to_act().expect("someone acts first");
//! let action = ai.get_action(&table, seat);
//! table.apply_action(seat, action).unwrap();
//! ```
//!
//! ## AI Types
//!
//! - `"baseline"` - decision table, stands pat in the draw
//! - `"baseline-draw"` - same betting, discards unpaired cards

use fivedraw_engine::cards::Card;
use fivedraw_engine::player::PlayerAction;
use fivedraw_engine::table::Table;

pub mod baseline;

pub use baseline::{BaselineAI, BaselineConfig, DrawStyle};

/// Trait defining the interface for CPU opponents.
///
/// # Required Methods
///
/// - [`get_action`](AIOpponent::get_action) - Choose a betting action for a seat
/// - [`name`](AIOpponent::name) - Return the AI's identifier/name
///
/// # Example Implementation
///
/// ```rust
/// use fivedraw_ai::AIOpponent;
/// use fivedraw_engine::player::PlayerAction;
/// use fivedraw_engine::table::Table;
///
/// struct AlwaysCall;
///
/// impl AIOpponent for AlwaysCall {
///     fn get_action(&mut self, _table: &Table, _seat: usize) -> PlayerAction {
///         PlayerAction::Call
///     }
///
///     fn name(&self) -> &str {
///         "AlwaysCall"
///     }
/// }
/// ```
pub trait AIOpponent: Send {
    /// Determine the next action for `seat`, which the table is waiting on.
    ///
    /// The returned action must be one the engine accepts for that seat's
    /// balance and cost to call.
    fn get_action(&mut self, table: &Table, seat: usize) -> PlayerAction;

    /// Indices (0-based) of the cards to throw away in the draw. Standing pat
    /// by default.
    fn choose_discards(&mut self, hand: &[Card]) -> Vec<usize> {
        let _ = hand;
        Vec::new()
    }

    /// Return the name/identifier of this AI implementation.
    fn name(&self) -> &str;
}

/// Creates an AI opponent by type string, seeding its RNG with `seed`.
///
/// Returns `None` for an unknown type.
///
/// # Example
///
/// ```rust
/// use fivedraw_ai::create_ai;
///
/// let ai = create_ai("baseline", 1).unwrap();
/// assert_eq!(ai.name(), "BaselineAI");
/// assert!(create_ai("oracle", 1).is_none());
/// ```
pub fn create_ai(ai_type: &str, seed: u64) -> Option<Box<dyn AIOpponent>> {
    match ai_type {
        "baseline" => Some(Box::new(BaselineAI::new(seed))),
        "baseline-draw" => Some(Box::new(
            BaselineAI::new(seed).with_draw_style(DrawStyle::KeepMadeCards),
        )),
        _ => None,
    }
}
