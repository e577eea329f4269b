//! Betting street bookkeeping: whose turn it is, when the street closes, and
//! how a validated action changes a seat.

use serde::{Deserialize, Serialize};

use crate::errors::GameError;
use crate::player::Player;
use crate::rules::ValidatedAction;

/// Outcome of asking for the next actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// This seat must act next.
    Act(usize),
    /// Nobody is left to act; the street is over.
    Closed,
}

/// State of one betting street.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BettingRound {
    /// Current-round contribution every active player must match.
    pub required_bet: u32,
    /// Seat that last set `required_bet`; action returning here closes the street.
    pub last_raiser: usize,
    /// Seat currently considered for action.
    pub turn: usize,
}

impl BettingRound {
    /// Opens a street with `first` to act and the closing marker on the same seat.
    pub fn open(first: usize, required_bet: u32) -> Self {
        Self {
            required_bet,
            last_raiser: first,
            turn: first,
        }
    }

    pub fn to_call(&self, player: &Player) -> u32 {
        self.required_bet.saturating_sub(player.current_bet())
    }

    /// Finds the seat that acts next, starting at `self.turn` and skipping
    /// folded and all-in seats. Stepping onto the marker while skipping closes
    /// the street, so a full lap without a raise always terminates.
    pub fn select(&mut self, players: &[Player]) -> Turn {
        if self.is_settled(players) {
            return Turn::Closed;
        }
        let n = players.len();
        if players[self.turn].is_active() {
            return Turn::Act(self.turn);
        }
        for _ in 0..n {
            self.turn = (self.turn + 1) % n;
            if self.turn == self.last_raiser {
                return Turn::Closed;
            }
            if players[self.turn].is_active() {
                return Turn::Act(self.turn);
            }
        }
        Turn::Closed
    }

    /// Moves past the seat that just acted.
    pub fn advance(&mut self, players: &[Player]) -> Turn {
        self.turn = (self.turn + 1) % players.len();
        if self.turn == self.last_raiser {
            return Turn::Closed;
        }
        self.select(players)
    }

    /// Applies an already validated action for `seat`. Chip movement, flags,
    /// status, required bet and marker change together or not at all.
    pub fn apply(
        &mut self,
        players: &mut [Player],
        seat: usize,
        action: ValidatedAction,
    ) -> Result<(), GameError> {
        let player = players.get_mut(seat).ok_or(GameError::InvalidSeat(seat))?;
        if player.is_folded() {
            return Err(GameError::PlayerAlreadyFolded);
        }
        match action {
            ValidatedAction::Fold => player.fold(),
            ValidatedAction::Check => {}
            ValidatedAction::Call { pay } => player.commit(pay)?,
            ValidatedAction::Bet { pay, .. } | ValidatedAction::Raise { pay, .. } => {
                player.commit(pay)?;
                self.required_bet = player.current_bet();
                self.last_raiser = seat;
            }
        }
        player.set_status(action.status());
        Ok(())
    }

    /// True when no further action is possible: one player left in the round,
    /// nobody able to act, or a lone active player who has already matched.
    fn is_settled(&self, players: &[Player]) -> bool {
        let contenders = players.iter().filter(|p| !p.is_folded()).count();
        if contenders <= 1 {
            return true;
        }
        let mut active = players.iter().filter(|p| p.is_active());
        match (active.next(), active.next()) {
            (None, _) => true,
            (Some(only), None) => only.current_bet() >= self.required_bet,
            _ => false,
        }
    }
}
