//! # fivedraw-engine: Five-Card Draw Round Engine
//!
//! Table-level state machine for a simplified five-card draw game: flat ante,
//! two betting streets around a single draw, showdown or fold-out. No side
//! pots and no blinds.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and parsing
//! - [`deck`] - The [`deck::CardSource`] collaborator and a seeded ChaCha20 deck
//! - [`hand`] - Five-card hand evaluation and scoring
//! - [`player`] - Per-seat state and player actions
//! - [`rules`] - Action validation against stack and cost to call
//! - [`betting`] - Turn rotation and street termination
//! - [`table`] - The round state machine
//! - [`game`] - Phases and their transition table
//! - [`config`] - Table stakes
//! - [`events`] - Observer interface for presentation layers
//! - [`logger`] - Round records and JSONL history
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use fivedraw_engine::cards::Card;
//! use fivedraw_engine::hand::{evaluate_hand, Category};
//!
//! let cards: [Card; 5] = ["5h", "6h", "7h", "8h", "9h"].map(|s| s.parse().unwrap());
//! let ev = evaluate_hand(&cards);
//! assert_eq!(ev.category, Category::StraightFlush);
//! assert_eq!(ev.name, "Str. Flush");
//! ```
//!
//! ## Action Validation
//!
//! ```rust
//! use fivedraw_engine::rules::{validate_action, ValidatedAction};
//! use fivedraw_engine::player::PlayerAction;
//!
//! let balance = 1000;
//! let to_call = 10;
//!
//! match validate_action(balance, to_call, PlayerAction::Call) {
//!     Ok(validated) => assert_eq!(validated, ValidatedAction::Call { pay: 10 }),
//!     Err(e) => panic!("Invalid action: {}", e),
//! }
//! ```

pub mod betting;
pub mod cards;
pub mod config;
pub mod deck;
pub mod errors;
pub mod events;
pub mod game;
pub mod hand;
pub mod logger;
pub mod player;
pub mod rules;
pub mod table;
