use serde::{Deserialize, Serialize};

use crate::errors::GameError;

/// Default ante every player posts at round start.
pub const DEFAULT_ANTE: u32 = 10;
/// Default bet/raise increment.
pub const DEFAULT_RAISE_INCREMENT: u32 = 25;
/// Default starting balance for each player in chips.
pub const STARTING_BALANCE: u32 = 1000;
/// Most seats a single 52-card deck can serve with a full draw.
pub const MAX_SEATS: usize = 8;
/// Fewest seats that make a game.
pub const MIN_SEATS: usize = 2;

/// Table stakes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
    pub ante: u32,
    /// Increment offered to human controls and used by the baseline AI.
    pub raise_increment: u32,
    pub starting_balance: u32,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            ante: DEFAULT_ANTE,
            raise_increment: DEFAULT_RAISE_INCREMENT,
            starting_balance: STARTING_BALANCE,
        }
    }
}

impl TableConfig {
    pub fn validate(&self) -> Result<(), GameError> {
        if self.ante == 0 {
            return Err(GameError::InvalidConfig("ante must be >0".into()));
        }
        if self.raise_increment == 0 {
            return Err(GameError::InvalidConfig("raise_increment must be >0".into()));
        }
        if self.starting_balance == 0 {
            return Err(GameError::InvalidConfig("starting_balance must be >0".into()));
        }
        Ok(())
    }
}
