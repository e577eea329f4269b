use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Suit};

/// Weight of the category in [`HandEvaluation::score`]; larger than any
/// possible positional sum (14 × Σ15^i for i < 5 = 759,374).
pub const CATEGORY_WEIGHT: u64 = 1_000_000;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl Category {
    pub fn rank(self) -> u8 {
        self as u8
    }

    /// Short label shown at the table.
    pub fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::OnePair => "Pair",
            Category::TwoPair => "2 Pair",
            Category::ThreeOfAKind => "Trips",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Quads",
            Category::StraightFlush => "Str. Flush",
        }
    }
}

/// Result of scoring a five-card hand.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HandEvaluation {
    pub category: Category,
    pub name: String,
    /// `category × 1,000,000 + Σ value_i × 15^i` over the ascending values.
    pub score: u64,
}

impl HandEvaluation {
    pub fn rank(&self) -> u8 {
        self.category.rank()
    }
}

/// Scores exactly five cards. Aces are high only, so A-2-3-4-5 is not a straight.
///
/// ```
/// use fivedraw_engine::cards::Card;
/// use fivedraw_engine::hand::{evaluate_hand, Category};
///
/// let hand: Vec<Card> = ["2s", "2h", "9d", "9c", "Ks"]
///     .iter()
///     .map(|s| s.parse().unwrap())
///     .collect();
/// let ev = evaluate_hand(&hand.try_into().unwrap());
/// assert_eq!(ev.category, Category::TwoPair);
/// assert_eq!(ev.name, "2 Pair");
/// ```
pub fn evaluate_hand(cards: &[Card; 5]) -> HandEvaluation {
    let mut values: Vec<u8> = cards.iter().map(|c| c.rank.value()).collect();
    values.sort_unstable();

    let mut rank_counts = [0u8; 15]; // 2..14 used
    for &v in &values {
        rank_counts[v as usize] += 1;
    }
    let multiples: Vec<u8> = rank_counts.iter().copied().filter(|&c| c > 0).collect();
    let has = |n: u8| multiples.contains(&n);
    let pairs = multiples.iter().filter(|&&c| c == 2).count();

    let flush = is_flush(cards);
    let straight = multiples.len() == 5 && values[4] - values[0] == 4;

    let category = if flush && straight {
        Category::StraightFlush
    } else if has(4) {
        Category::FourOfAKind
    } else if has(3) && has(2) {
        Category::FullHouse
    } else if flush {
        Category::Flush
    } else if straight {
        Category::Straight
    } else if has(3) {
        Category::ThreeOfAKind
    } else if pairs == 2 {
        Category::TwoPair
    } else if pairs == 1 {
        Category::OnePair
    } else {
        Category::HighCard
    };

    HandEvaluation {
        category,
        name: category.name().to_string(),
        score: category.rank() as u64 * CATEGORY_WEIGHT + positional_sum(&values),
    }
}

/// Evaluates a hand held as a slice; `None` unless it holds exactly five cards.
pub fn evaluate_slice(cards: &[Card]) -> Option<HandEvaluation> {
    let five: &[Card; 5] = cards.try_into().ok()?;
    Some(evaluate_hand(five))
}

pub fn compare_hands(a: &HandEvaluation, b: &HandEvaluation) -> Ordering {
    a.score.cmp(&b.score)
}

fn is_flush(cards: &[Card; 5]) -> bool {
    let first: Suit = cards[0].suit;
    cards.iter().all(|c| c.suit == first)
}

fn positional_sum(sorted_values: &[u8]) -> u64 {
    sorted_values
        .iter()
        .enumerate()
        .map(|(i, &v)| v as u64 * 15u64.pow(i as u32))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hand(s: [&str; 5]) -> [Card; 5] {
        s.map(|c| c.parse().unwrap())
    }

    #[test]
    fn positional_sum_stays_below_category_weight() {
        assert!(positional_sum(&[14, 14, 14, 14, 14]) < CATEGORY_WEIGHT);
    }

    #[test]
    fn score_follows_formula() {
        let ev = evaluate_hand(&hand(["2c", "3d", "4h", "5s", "7c"]));
        assert_eq!(ev.category, Category::HighCard);
        assert_eq!(ev.score, 2 + 3 * 15 + 4 * 225 + 5 * 3375 + 7 * 50625);
    }

    #[test]
    fn slice_of_wrong_length_is_not_evaluated() {
        let h = hand(["2c", "3d", "4h", "5s", "7c"]);
        assert!(evaluate_slice(&h[..4]).is_none());
        assert!(evaluate_slice(&h).is_some());
    }
}
