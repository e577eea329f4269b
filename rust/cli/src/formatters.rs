//! Card, hand, action and table-event formatters for terminal display.
//!
//! Suits use Unicode symbols with an ASCII fallback for Windows consoles that
//! cannot render them.
//!
//! - **Unicode mode**: Uses ♥ ♦ ♣ ♠ symbols
//! - **ASCII mode**: Uses h d c s letters
//!
//! ## Example
//!
//! ```rust
//! use fivedraw_engine::cards::{Card, Rank, Suit};
//! use fivedraw_cli::formatters::{format_card, format_hand};
//!
//! let ace_spades = Card::new(Rank::Ace, Suit::Spades);
//! assert!(format_card(&ace_spades) == "A♠" || format_card(&ace_spades) == "As");
//!
//! let hand = vec![ace_spades];
//! assert!(format_hand(&hand).starts_with("[A"));
//! ```

use fivedraw_engine::cards::{Card, Rank, Suit};
use fivedraw_engine::events::TableEvent;
use fivedraw_engine::game::Phase;
use fivedraw_engine::player::PlayerAction;
use fivedraw_engine::rules::ValidatedAction;

/// Check if the terminal supports Unicode card symbols.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals (TERM_PROGRAM),
/// or VS Code (VSCODE_INJECTION). On Unix-like systems, assumes Unicode support.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: &Suit) -> String {
    if supports_unicode() {
        match suit {
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
            Suit::Spades => "♠",
        }
        .to_string()
    } else {
        match suit {
            Suit::Hearts => "h",
            Suit::Diamonds => "d",
            Suit::Clubs => "c",
            Suit::Spades => "s",
        }
        .to_string()
    }
}

/// Format a Rank as a string (2-10, J, Q, K, A).
pub fn format_rank(rank: &Rank) -> String {
    match rank {
        Rank::Jack => "J".to_string(),
        Rank::Queen => "Q".to_string(),
        Rank::King => "K".to_string(),
        Rank::Ace => "A".to_string(),
        other => other.value().to_string(),
    }
}

/// String like "A♠" (Unicode) or "As" (ASCII)
pub fn format_card(card: &Card) -> String {
    format!("{}{}", format_rank(&card.rank), format_suit(&card.suit))
}

/// Formatted hand like "[A♠ K♥ Q♦]" or "[]" if empty
pub fn format_hand(cards: &[Card]) -> String {
    let formatted_cards: Vec<String> = cards.iter().map(format_card).collect();
    format!("[{}]", formatted_cards.join(" "))
}

/// Hand with 1-based positions for the discard prompt: "1:A♠ 2:K♥ ...".
pub fn format_hand_numbered(cards: &[Card]) -> String {
    cards
        .iter()
        .enumerate()
        .map(|(i, c)| format!("{}:{}", i + 1, format_card(c)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Formatted action string like "fold", "call", "bet 25".
///
/// ```rust
/// use fivedraw_engine::player::PlayerAction;
/// # use fivedraw_cli::formatters::format_action;
///
/// assert_eq!(format_action(&PlayerAction::Fold), "fold");
/// assert_eq!(format_action(&PlayerAction::Bet(25)), "bet 25");
/// ```
pub fn format_action(action: &PlayerAction) -> String {
    match action {
        PlayerAction::Fold => "fold".to_string(),
        PlayerAction::Check => "check".to_string(),
        PlayerAction::Call => "call".to_string(),
        PlayerAction::Bet(amount) => format!("bet {}", amount),
        PlayerAction::Raise(amount) => format!("raise {}", amount),
    }
}

/// What an accepted action actually did, with the chips it moved.
pub fn format_validated(action: &ValidatedAction) -> String {
    match action {
        ValidatedAction::Fold => "folds".to_string(),
        ValidatedAction::Check => "checks".to_string(),
        ValidatedAction::Call { pay } => format!("calls {}", pay),
        ValidatedAction::Bet { pay, .. } => format!("bets {}", pay),
        ValidatedAction::Raise { pay, increment } => {
            format!("raises {} (puts in {})", increment, pay)
        }
    }
}

fn phase_label(phase: Phase) -> &'static str {
    match phase {
        Phase::Setup => "Setup",
        Phase::PreDraw => "Betting (before the draw)",
        Phase::Draw => "Draw",
        Phase::PostDraw => "Betting (after the draw)",
        Phase::Showdown => "Showdown",
    }
}

/// Transcript line for a table event, or `None` for events the transcript
/// does not show (pot and seat updates are printed with the prompts).
pub fn format_event(event: &TableEvent, names: &[String]) -> Option<String> {
    let name = |seat: usize| names.get(seat).map(String::as_str).unwrap_or("?");
    match event {
        TableEvent::RoundStarted { round, dealer } => {
            Some(format!("Round {} (dealer: {})", round, name(*dealer)))
        }
        TableEvent::PhaseChanged { phase } => Some(format!("-- {} --", phase_label(*phase))),
        TableEvent::HandRevealed {
            seat,
            cards,
            hand_name,
        } => Some(format!(
            "{} shows {} ({})",
            name(*seat),
            format_hand(cards),
            hand_name
        )),
        TableEvent::RoundEnded {
            winner: Some(seat),
            amount,
            revealed,
            ..
        } => Some(if *revealed {
            format!("{} wins {}", name(*seat), amount)
        } else {
            format!("{} wins {} (everyone else folded)", name(*seat), amount)
        }),
        TableEvent::RoundEnded { winner: None, .. } => {
            Some("Round aborted, all chips returned".to_string())
        }
        TableEvent::PotUpdated { .. }
        | TableEvent::PlayerUpdated { .. }
        | TableEvent::TurnChanged { .. } => None,
    }
}
