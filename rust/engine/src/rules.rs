use crate::errors::GameError;
use crate::player::PlayerAction as A;

/// An action that has been checked against the actor's stack, carrying the
/// exact number of chips it moves from balance into the current bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidatedAction {
    Fold,
    Check,
    Call { pay: u32 },
    Bet { pay: u32, increment: u32 },
    Raise { pay: u32, increment: u32 },
}

impl ValidatedAction {
    /// Chips moved from balance into the current-round bet.
    pub fn pay(&self) -> u32 {
        match *self {
            ValidatedAction::Fold | ValidatedAction::Check => 0,
            ValidatedAction::Call { pay }
            | ValidatedAction::Bet { pay, .. }
            | ValidatedAction::Raise { pay, .. } => pay,
        }
    }

    /// Status label shown next to the seat after the action.
    pub fn status(&self) -> String {
        match *self {
            ValidatedAction::Fold => "Fold".to_string(),
            ValidatedAction::Check => "Check".to_string(),
            ValidatedAction::Call { .. } => "Call".to_string(),
            ValidatedAction::Bet { increment, .. } => format!("Bet {}", increment),
            ValidatedAction::Raise { increment, .. } => format!("Raise {}", increment),
        }
    }
}

/// Validates a player action against the actor's balance and the cost to continue.
///
/// # Arguments
///
/// * `balance` - Chips the player still has behind
/// * `to_call` - Required bet minus the player's current-round bet
/// * `action` - The action the player wishes to perform
///
/// # Errors
///
/// - [`GameError::CheckNotAllowed`] - check while a call is owed
/// - [`GameError::BetFacingWager`] - bet while a call is owed
/// - [`GameError::NothingToRaise`] - raise when nothing is owed
/// - [`GameError::InvalidBetAmount`] - zero increment
/// - [`GameError::InsufficientChips`] - the action costs more than `balance`
///
/// # Examples
///
/// ```
/// use fivedraw_engine::rules::{validate_action, ValidatedAction};
/// use fivedraw_engine::player::PlayerAction;
/// use fivedraw_engine::errors::GameError;
///
/// let result = validate_action(1000, 10, PlayerAction::Raise(25));
/// assert_eq!(result, Ok(ValidatedAction::Raise { pay: 35, increment: 25 }));
///
/// let result = validate_action(1000, 10, PlayerAction::Check);
/// assert_eq!(result, Err(GameError::CheckNotAllowed { to_call: 10 }));
/// ```
pub fn validate_action(balance: u32, to_call: u32, action: A) -> Result<ValidatedAction, GameError> {
    let afford = |needed: u32| {
        if needed > balance {
            Err(GameError::InsufficientChips {
                needed,
                available: balance,
            })
        } else {
            Ok(())
        }
    };
    match action {
        A::Fold => Ok(ValidatedAction::Fold),
        A::Check => {
            if to_call == 0 {
                Ok(ValidatedAction::Check)
            } else {
                Err(GameError::CheckNotAllowed { to_call })
            }
        }
        A::Call => {
            if to_call == 0 {
                return Ok(ValidatedAction::Check);
            }
            afford(to_call)?;
            Ok(ValidatedAction::Call { pay: to_call })
        }
        A::Bet(increment) => {
            if to_call > 0 {
                return Err(GameError::BetFacingWager { to_call });
            }
            if increment == 0 {
                return Err(GameError::InvalidBetAmount {
                    amount: increment,
                    minimum: 1,
                });
            }
            afford(increment)?;
            Ok(ValidatedAction::Bet {
                pay: increment,
                increment,
            })
        }
        A::Raise(increment) => {
            if to_call == 0 {
                return Err(GameError::NothingToRaise);
            }
            if increment == 0 {
                return Err(GameError::InvalidBetAmount {
                    amount: increment,
                    minimum: 1,
                });
            }
            let pay = to_call.saturating_add(increment);
            afford(pay)?;
            Ok(ValidatedAction::Raise { pay, increment })
        }
    }
}
