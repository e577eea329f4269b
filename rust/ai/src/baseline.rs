//! Baseline AI for CPU seats.
//!
//! A fixed decision table keyed on the cost to continue, whether the hand is
//! already made, and one random draw per decision. The RNG is seeded so whole
//! simulations replay exactly.

use std::str::FromStr;

use fivedraw_engine::cards::Card;
use fivedraw_engine::hand::{evaluate_slice, Category};
use fivedraw_engine::player::PlayerAction;
use fivedraw_engine::table::Table;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::AIOpponent;

/// Thresholds of the decision table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaselineConfig {
    /// With nothing to call, a weak hand still bets when the draw exceeds this.
    pub bet_threshold: f64,
    /// Facing a wager, a strong hand raises when the draw exceeds this.
    pub raise_threshold: f64,
    /// A weak hand folds to anything costing more than this.
    pub fold_cost: u32,
}

impl Default for BaselineConfig {
    fn default() -> Self {
        Self {
            bet_threshold: 0.8,
            raise_threshold: 0.7,
            fold_cost: 50,
        }
    }
}

/// What a CPU seat does in the draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawStyle {
    /// Never exchange cards.
    #[default]
    StandPat,
    /// Keep pairs, trips and quads (and made hands from a straight up);
    /// with nothing, keep the two highest cards.
    KeepMadeCards,
}

impl FromStr for DrawStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stand-pat" | "stand_pat" | "standpat" => Ok(DrawStyle::StandPat),
            "keep-made" | "keep_made" | "keepmade" => Ok(DrawStyle::KeepMadeCards),
            other => Err(format!("unknown draw style: {}", other)),
        }
    }
}

impl std::fmt::Display for DrawStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DrawStyle::StandPat => write!(f, "stand-pat"),
            DrawStyle::KeepMadeCards => write!(f, "keep-made"),
        }
    }
}

/// Decision-table AI with a seeded ChaCha8 RNG.
///
/// # Example
///
/// ```rust
/// use fivedraw_ai::baseline::BaselineAI;
/// use fivedraw_ai::AIOpponent;
///
/// let ai = BaselineAI::new(7);
/// assert_eq!(ai.name(), "BaselineAI");
/// ```
#[derive(Debug, Clone)]
pub struct BaselineAI {
    rng: ChaCha8Rng,
    config: BaselineConfig,
    draw_style: DrawStyle,
}

impl BaselineAI {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            config: BaselineConfig::default(),
            draw_style: DrawStyle::default(),
        }
    }

    pub fn with_config(mut self, config: BaselineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_draw_style(mut self, style: DrawStyle) -> Self {
        self.draw_style = style;
        self
    }

    pub fn draw_style(&self) -> DrawStyle {
        self.draw_style
    }
}

/// Pure decision table. `draw` is a uniform sample from `[0, 1)`.
///
/// | cost | condition                    | action        |
/// |------|------------------------------|---------------|
/// | 0    | strong, or draw > bet thr.   | bet increment |
/// | 0    | otherwise                    | check         |
/// | > 0  | cost > fold_cost, not strong | fold          |
/// | > 0  | strong and draw > raise thr. | raise         |
/// | > 0  | otherwise                    | call          |
pub fn decide(cost: u32, strong: bool, draw: f64, increment: u32, cfg: &BaselineConfig) -> PlayerAction {
    if cost == 0 {
        if strong || draw > cfg.bet_threshold {
            PlayerAction::Bet(increment)
        } else {
            PlayerAction::Check
        }
    } else if cost > cfg.fold_cost && !strong {
        PlayerAction::Fold
    } else if strong && draw > cfg.raise_threshold {
        PlayerAction::Raise(increment)
    } else {
        PlayerAction::Call
    }
}

/// Shrinks `action` until the seat can pay for it.
pub fn fit_to_stack(action: PlayerAction, cost: u32, balance: u32) -> PlayerAction {
    match action {
        PlayerAction::Call if cost > balance => PlayerAction::Fold,
        PlayerAction::Bet(inc) if inc > balance => {
            if balance == 0 {
                PlayerAction::Check
            } else {
                PlayerAction::Bet(balance)
            }
        }
        PlayerAction::Raise(inc) if cost.saturating_add(inc) > balance => {
            if cost >= balance {
                fit_to_stack(PlayerAction::Call, cost, balance)
            } else {
                PlayerAction::Raise(balance - cost)
            }
        }
        other => other,
    }
}

/// Indices to throw away under the keep-made-cards style.
pub fn keep_made_discards(hand: &[Card]) -> Vec<usize> {
    let Some(ev) = evaluate_slice(hand) else {
        return Vec::new();
    };
    if ev.category >= Category::Straight {
        return Vec::new();
    }
    let mut counts = [0u8; 15];
    for c in hand {
        counts[c.rank.value() as usize] += 1;
    }
    if ev.category == Category::HighCard {
        let mut order: Vec<usize> = (0..hand.len()).collect();
        order.sort_by_key(|&i| std::cmp::Reverse(hand[i].rank));
        let mut thrown: Vec<usize> = order.into_iter().skip(2).collect();
        thrown.sort_unstable();
        return thrown;
    }
    hand.iter()
        .enumerate()
        .filter(|(_, c)| counts[c.rank.value() as usize] == 1)
        .map(|(i, _)| i)
        .collect()
}

fn is_strong(hand: &[Card]) -> bool {
    evaluate_slice(hand).is_some_and(|ev| ev.rank() >= 1)
}

impl AIOpponent for BaselineAI {
    fn get_action(&mut self, table: &Table, seat: usize) -> PlayerAction {
        let Ok(player) = table.player(seat) else {
            return PlayerAction::Fold;
        };
        let cost = table.to_call(seat).unwrap_or(0);
        let strong = is_strong(player.hand());
        let draw: f64 = self.rng.random();
        let increment = table.config().raise_increment;

        let wanted = decide(cost, strong, draw, increment, &self.config);
        let action = fit_to_stack(wanted, cost, player.balance());
        tracing::debug!(seat, cost, strong, draw, ?action, "baseline decision");
        action
    }

    fn choose_discards(&mut self, hand: &[Card]) -> Vec<usize> {
        match self.draw_style {
            DrawStyle::StandPat => Vec::new(),
            DrawStyle::KeepMadeCards => keep_made_discards(hand),
        }
    }

    fn name(&self) -> &str {
        "BaselineAI"
    }
}
