use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tracing::trace;

use crate::cards::{full_deck, Card, Suit};
use crate::errors::DealError;

/// A 52-card deck that tracks which cards have left it.
///
/// Dealt and removed cards move to a separate pile so [`Deck::reset`] can put
/// them back between rounds.
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
    dealt: Vec<Card>,
    rng: ChaCha20Rng,
}

impl Deck {
    pub const SIZE: usize = 52;

    pub fn new_with_seed(seed: u64) -> Self {
        let rng = ChaCha20Rng::seed_from_u64(seed);
        // Keep canonical order until shuffle is called explicitly
        Self {
            cards: full_deck(),
            dealt: Vec::with_capacity(Self::SIZE),
            rng,
        }
    }

    /// Shuffles the cards still in the deck.
    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
    }

    pub fn deal_card(&mut self) -> Option<Card> {
        let c = self.cards.pop()?;
        self.dealt.push(c);
        Some(c)
    }

    /// Deals `n` cards. Nothing is dealt if fewer than `n` remain.
    pub fn deal(&mut self, n: usize) -> Result<Vec<Card>, DealError> {
        if n > self.cards.len() {
            return Err(DealError::DeckExhausted {
                requested: n,
                remaining: self.cards.len(),
            });
        }
        let dealt: Vec<Card> = (0..n).filter_map(|_| self.deal_card()).collect();
        trace!(count = dealt.len(), remaining = self.cards.len(), "dealt cards");
        Ok(dealt)
    }

    /// Looks up a live card by rank and suit.
    pub fn find(&self, rank: u8, suit: Suit) -> Option<Card> {
        self.cards
            .iter()
            .find(|c| c.rank() == rank && c.suit() == suit)
            .copied()
    }

    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Removes specific cards from the deck. Cards that are not in the deck
    /// are ignored.
    pub fn remove_cards(&mut self, cards: &[Card]) {
        for card in cards {
            if let Some(pos) = self.cards.iter().position(|c| c == card) {
                let c = self.cards.remove(pos);
                self.dealt.push(c);
            }
        }
    }

    /// Returns all dealt and removed cards, restoring canonical order.
    pub fn reset(&mut self) {
        trace!(returned = self.dealt.len(), "deck reset");
        self.cards = full_deck();
        self.dealt.clear();
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Cards that have been dealt or removed since the last reset.
    pub fn dealt(&self) -> &[Card] {
        &self.dealt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deal_fails_without_dealing_when_short() {
        let mut deck = Deck::new_with_seed(1);
        deck.deal(50).unwrap();
        let err = deck.deal(3).unwrap_err();
        assert_eq!(
            err,
            DealError::DeckExhausted {
                requested: 3,
                remaining: 2
            }
        );
        assert_eq!(deck.remaining(), 2);
    }

    #[test]
    fn remove_ignores_missing_cards() {
        let mut deck = Deck::new_with_seed(1);
        let ace = deck.find(14, Suit::Spades).unwrap();
        deck.remove_cards(&[ace]);
        deck.remove_cards(&[ace]);
        assert_eq!(deck.remaining(), 51);
        assert_eq!(deck.dealt(), &[ace]);
        assert!(deck.find(14, Suit::Spades).is_none());
    }
}
