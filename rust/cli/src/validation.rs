//! Input parsing and validation for interactive commands.
//!
//! Betting input becomes a [`ParseResult`], discard input a [`DiscardInput`].
//! Neither touches the table; the engine still validates the action itself.

use fivedraw_engine::player::{PlayerAction, HAND_SIZE};

/// Result type for parsing user input into player actions.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    /// Valid player action parsed from input
    Action(PlayerAction),
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

/// Parse user input string into a PlayerAction or special commands.
///
/// Accepts the following input formats (case-insensitive):
/// - "f" or "fold" → Fold
/// - "k" or "check" → Check
/// - "c" or "call" → Call
/// - "bet X" → Bet with increment X
/// - "raise X" → Raise by increment X
/// - "q" or "quit" → Quit command
///
/// # Example
///
/// ```rust
/// # use fivedraw_cli::validation::{parse_player_action, ParseResult};
/// use fivedraw_engine::player::PlayerAction;
///
/// assert_eq!(
///     parse_player_action("fold"),
///     ParseResult::Action(PlayerAction::Fold)
/// );
///
/// assert_eq!(
///     parse_player_action("raise 25"),
///     ParseResult::Action(PlayerAction::Raise(25))
/// );
///
/// assert_eq!(parse_player_action("q"), ParseResult::Quit);
///
/// match parse_player_action("invalid") {
///     ParseResult::Invalid(msg) => assert!(msg.contains("Unrecognized")),
///     _ => panic!("Expected Invalid"),
/// }
/// ```
pub fn parse_player_action(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    let parts: Vec<&str> = input.split_whitespace().collect();

    let Some(&head) = parts.first() else {
        return ParseResult::Invalid("Empty input".to_string());
    };

    match head {
        "q" | "quit" => ParseResult::Quit,
        "fold" | "f" => ParseResult::Action(PlayerAction::Fold),
        "check" | "k" => ParseResult::Action(PlayerAction::Check),
        "call" | "c" => ParseResult::Action(PlayerAction::Call),
        "bet" => match parse_amount(parts.get(1), "Bet") {
            Ok(amount) => ParseResult::Action(PlayerAction::Bet(amount)),
            Err(msg) => ParseResult::Invalid(msg),
        },
        "raise" => match parse_amount(parts.get(1), "Raise") {
            Ok(amount) => ParseResult::Action(PlayerAction::Raise(amount)),
            Err(msg) => ParseResult::Invalid(msg),
        },
        _ => ParseResult::Invalid(format!(
            "Unrecognized action '{}'. Valid actions: fold, check, call, bet <amount>, raise <amount>, q",
            head
        )),
    }
}

fn parse_amount(token: Option<&&str>, what: &str) -> Result<u32, String> {
    let Some(token) = token else {
        return Err(format!(
            "{} requires an amount (e.g., '{} 25')",
            what,
            what.to_lowercase()
        ));
    };
    match token.parse::<u32>() {
        Ok(amount) if amount > 0 => Ok(amount),
        Ok(_) => Err(format!("{} amount must be positive", what)),
        Err(_) => Err(format!("Invalid {} amount", what.to_lowercase())),
    }
}

/// What the player typed at the discard prompt.
#[derive(Debug, PartialEq)]
pub enum DiscardInput {
    /// 0-based indices, sorted and without duplicates; empty to stand pat
    Indices(Vec<usize>),
    Quit,
    Invalid(String),
}

/// Parses 1-based card positions separated by spaces or commas.
///
/// ```rust
/// # use fivedraw_cli::validation::{parse_discards, DiscardInput};
/// assert_eq!(parse_discards("1 3"), DiscardInput::Indices(vec![0, 2]));
/// assert_eq!(parse_discards(""), DiscardInput::Indices(vec![]));
/// assert!(matches!(parse_discards("6"), DiscardInput::Invalid(_)));
/// ```
pub fn parse_discards(input: &str) -> DiscardInput {
    let input = input.trim().to_lowercase();
    if input == "q" || input == "quit" {
        return DiscardInput::Quit;
    }
    let mut indices = Vec::new();
    for token in input.split(|c: char| c.is_whitespace() || c == ',').filter(|t| !t.is_empty()) {
        match token.parse::<usize>() {
            Ok(pos) if (1..=HAND_SIZE).contains(&pos) => indices.push(pos - 1),
            _ => {
                return DiscardInput::Invalid(format!(
                    "'{}' is not a card position (1-{})",
                    token, HAND_SIZE
                ));
            }
        }
    }
    indices.sort_unstable();
    indices.dedup();
    DiscardInput::Indices(indices)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_forms() {
        assert_eq!(parse_player_action("f"), ParseResult::Action(PlayerAction::Fold));
        assert_eq!(parse_player_action("k"), ParseResult::Action(PlayerAction::Check));
        assert_eq!(parse_player_action("C"), ParseResult::Action(PlayerAction::Call));
        assert_eq!(parse_player_action("QUIT"), ParseResult::Quit);
    }

    #[test]
    fn test_amounts_are_required_and_positive() {
        assert!(matches!(parse_player_action("bet"), ParseResult::Invalid(m) if m.contains("requires")));
        assert!(matches!(parse_player_action("raise 0"), ParseResult::Invalid(m) if m.contains("positive")));
        assert!(matches!(parse_player_action("bet ten"), ParseResult::Invalid(_)));
        assert_eq!(parse_player_action("  Bet 40 "), ParseResult::Action(PlayerAction::Bet(40)));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(parse_player_action("   "), ParseResult::Invalid("Empty input".to_string()));
    }

    #[test]
    fn test_discards_dedup_and_commas() {
        assert_eq!(parse_discards("5,1 1"), DiscardInput::Indices(vec![0, 4]));
        assert_eq!(parse_discards("q"), DiscardInput::Quit);
        assert!(matches!(parse_discards("0"), DiscardInput::Invalid(_)));
        assert!(matches!(parse_discards("two"), DiscardInput::Invalid(_)));
    }
}
