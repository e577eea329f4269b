use serde::{Deserialize, Serialize};

/// Where a table is in the life of a round.
///
/// `Showdown` is terminal for a round whether the pot went to the last player
/// standing or to the best hand; the next round starts again at `PreDraw`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Phase {
    /// Table created, no round dealt yet
    Setup,
    /// First betting street
    PreDraw,
    /// Discard and replace
    Draw,
    /// Second betting street
    PostDraw,
    /// Pot awarded; round over
    Showdown,
}

impl Phase {
    /// The complete transition table. Anything not listed here is refused.
    /// `Draw -> Showdown` is only taken when a round is aborted.
    pub fn can_advance_to(self, next: Phase) -> bool {
        use Phase::*;
        matches!(
            (self, next),
            (Setup, PreDraw)
                | (PreDraw, Draw)
                | (PreDraw, Showdown)
                | (Draw, PostDraw)
                | (Draw, Showdown)
                | (PostDraw, Showdown)
                | (Showdown, PreDraw)
        )
    }

    pub fn is_betting(self) -> bool {
        matches!(self, Phase::PreDraw | Phase::PostDraw)
    }

    /// A round is running between the deal and the pot award.
    pub fn in_round(self) -> bool {
        matches!(self, Phase::PreDraw | Phase::Draw | Phase::PostDraw)
    }
}
