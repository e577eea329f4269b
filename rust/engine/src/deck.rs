use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};
use crate::errors::CardSourceError;

/// Where the table gets its cards from.
///
/// `draw` is all-or-nothing: on error no card leaves the source. The table
/// reacts to a failed draw by calling [`CardSource::reshuffle`] once and
/// retrying before giving up (see [`draw_with_retry`]).
pub trait CardSource: Send {
    fn draw(&mut self, n: usize) -> Result<Vec<Card>, CardSourceError>;

    /// Return mucked cards to the stock and shuffle it.
    fn reshuffle(&mut self) -> Result<(), CardSourceError>;

    /// Hand discarded cards back so a later reshuffle can reuse them.
    fn muck(&mut self, cards: &[Card]);

    /// Start over from a complete deck. Called at every round start.
    fn new_round(&mut self) -> Result<(), CardSourceError>;
}

/// Draws `n` cards, reshuffling and retrying once if the first attempt fails.
pub fn draw_with_retry(source: &mut dyn CardSource, n: usize) -> Result<Vec<Card>, CardSourceError> {
    match source.draw(n) {
        Ok(cards) => Ok(cards),
        Err(first) => {
            tracing::warn!(requested = n, error = %first, "card draw failed, reshuffling");
            source.reshuffle()?;
            source.draw(n)
        }
    }
}

/// Seeded 52-card deck with a muck pile.
///
/// # Examples
///
/// ```
/// use fivedraw_engine::deck::{CardSource, Deck};
///
/// let mut a = Deck::new_with_seed(42);
/// let mut b = Deck::new_with_seed(42);
/// a.new_round().unwrap();
/// b.new_round().unwrap();
/// assert_eq!(a.draw(5).unwrap(), b.draw(5).unwrap());
/// assert_eq!(a.remaining(), 47);
/// ```
#[derive(Debug)]
pub struct Deck {
    stock: Vec<Card>,
    muck: Vec<Card>,
    rng: ChaCha20Rng,
}

impl Deck {
    pub fn new_with_seed(seed: u64) -> Self {
        let rng = ChaCha20Rng::seed_from_u64(seed);
        // Keep initial order until shuffle is called explicitly
        Self {
            stock: full_deck(),
            muck: Vec::new(),
            rng,
        }
    }

    pub fn shuffle(&mut self) {
        self.stock = full_deck();
        self.muck.clear();
        self.stock.shuffle(&mut self.rng);
    }

    pub fn remaining(&self) -> usize {
        self.stock.len()
    }

    pub fn mucked(&self) -> usize {
        self.muck.len()
    }
}

impl CardSource for Deck {
    fn draw(&mut self, n: usize) -> Result<Vec<Card>, CardSourceError> {
        if n > self.stock.len() {
            return Err(CardSourceError::Exhausted {
                requested: n,
                available: self.stock.len(),
            });
        }
        let at = self.stock.len() - n;
        let mut cards = self.stock.split_off(at);
        cards.reverse();
        Ok(cards)
    }

    fn reshuffle(&mut self) -> Result<(), CardSourceError> {
        self.stock.append(&mut self.muck);
        self.stock.shuffle(&mut self.rng);
        Ok(())
    }

    fn muck(&mut self, cards: &[Card]) {
        self.muck.extend_from_slice(cards);
    }

    fn new_round(&mut self) -> Result<(), CardSourceError> {
        self.shuffle();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn draw_is_all_or_nothing() {
        let mut d = Deck::new_with_seed(1);
        d.new_round().unwrap();
        let _ = d.draw(50).unwrap();
        let err = d.draw(3).unwrap_err();
        assert_eq!(
            err,
            CardSourceError::Exhausted {
                requested: 3,
                available: 2
            }
        );
        assert_eq!(d.remaining(), 2);
    }

    #[test]
    fn retry_uses_mucked_cards() {
        let mut d = Deck::new_with_seed(9);
        d.new_round().unwrap();
        let dealt = d.draw(50).unwrap();
        d.muck(&dealt[..4]);
        let cards = draw_with_retry(&mut d, 5).unwrap();
        assert_eq!(cards.len(), 5);
        assert_eq!(d.remaining(), 1);
        assert_eq!(d.mucked(), 0);
        // nothing still held by players comes back
        let held: HashSet<Card> = dealt[4..].iter().copied().collect();
        assert!(cards.iter().all(|c| !held.contains(c)));
    }

    #[test]
    fn retry_gives_up_after_one_reshuffle() {
        let mut d = Deck::new_with_seed(9);
        d.new_round().unwrap();
        let _ = d.draw(52).unwrap();
        assert!(draw_with_retry(&mut d, 1).is_err());
    }
}
