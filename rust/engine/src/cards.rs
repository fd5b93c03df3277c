use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Numeric rank of an ace played high.
pub const ACE_HIGH: u8 = 14;
/// Numeric rank of an ace played low, only used for ace-low straights.
pub const ACE_LOW: u8 = 1;
/// Numeric rank of a ten, the bottom card of a royal flush.
pub const TEN: u8 = 10;

/// Standard rank table: numeric rank paired with its display label.
pub const RANKS: [(u8, &str); 13] = [
    (2, "2"),
    (3, "3"),
    (4, "4"),
    (5, "5"),
    (6, "6"),
    (7, "7"),
    (8, "8"),
    (9, "9"),
    (10, "10"),
    (11, "J"),
    (12, "Q"),
    (13, "K"),
    (14, "A"),
];

/// One of the four suits in a standard 52-card deck.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    /// Spades (♠)
    Spades,
    /// Hearts (♥)
    Hearts,
    /// Diamonds (♦)
    Diamonds,
    /// Clubs (♣)
    Clubs,
}

impl Suit {
    /// Lowercase suit name, as used in card names ("A of spades").
    pub fn as_str(&self) -> &'static str {
        match self {
            Suit::Spades => "spades",
            Suit::Hearts => "hearts",
            Suit::Diamonds => "diamonds",
            Suit::Clubs => "clubs",
        }
    }

    /// Single uppercase letter used by the shorthand card notation.
    pub fn letter(&self) -> char {
        match self {
            Suit::Spades => 'S',
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Suit::Spades => '♠',
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
        }
    }

    /// Parses a shorthand suit letter, case-insensitive.
    pub fn from_letter(c: char) -> Option<Suit> {
        match c.to_ascii_uppercase() {
            'S' => Some(Suit::Spades),
            'H' => Some(Suit::Hearts),
            'D' => Some(Suit::Diamonds),
            'C' => Some(Suit::Clubs),
            _ => None,
        }
    }

    /// Position of the suit in per-suit count tables.
    pub(crate) fn index(&self) -> usize {
        match self {
            Suit::Spades => 0,
            Suit::Hearts => 1,
            Suit::Diamonds => 2,
            Suit::Clubs => 3,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Suits in the order the deck is built.
pub fn all_suits() -> [Suit; 4] {
    [Suit::Hearts, Suit::Diamonds, Suit::Spades, Suit::Clubs]
}

/// Returns the display label for a rank in 2..=14.
pub fn label_for_rank(rank: u8) -> Option<&'static str> {
    RANKS
        .iter()
        .find(|(r, _)| *r == rank)
        .map(|(_, label)| *label)
}

/// A single playing card.
///
/// Cards are immutable once built. The `label` is the display symbol of the
/// rank ("A", "K", "10", "2") and is the key used when grouping cards into
/// pairs, trips and quads, so the synthetic ace-low card never collides with
/// a real ace in rank counts.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize)]
pub struct Card {
    rank: u8,
    suit: Suit,
    label: &'static str,
}

impl Card {
    /// Builds a card from raw parts. No validation is done here; callers
    /// that read user input go through [`crate::parse`] first.
    pub const fn new(rank: u8, suit: Suit, label: &'static str) -> Self {
        Self { rank, suit, label }
    }

    /// Builds a card using the standard label for `rank`.
    pub fn from_rank(rank: u8, suit: Suit) -> Option<Self> {
        label_for_rank(rank).map(|label| Self::new(rank, suit, label))
    }

    pub fn rank(&self) -> u8 {
        self.rank
    }

    pub fn suit(&self) -> Suit {
        self.suit
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Human readable name, e.g. "10 of diamonds".
    pub fn name(&self) -> String {
        format!("{} of {}", self.label, self.suit)
    }

    /// Shorthand notation accepted by the parser, e.g. "10D".
    pub fn short(&self) -> String {
        format!("{}{}", self.label, self.suit.letter())
    }

    /// Compares two cards by rank only. Cards of equal rank compare equal
    /// whatever their suit.
    pub fn cmp_rank(&self, other: &Card) -> Ordering {
        self.rank.cmp(&other.rank)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.label, self.suit)
    }
}

/// All 52 cards in canonical order: suits as in [`all_suits`], ranks 2..=14.
pub fn full_deck() -> Vec<Card> {
    let mut v = Vec::with_capacity(52);
    for &s in &all_suits() {
        for &(rank, label) in &RANKS {
            v.push(Card::new(rank, s, label));
        }
    }
    v
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_uses_label_and_suit() {
        let card = Card::new(10, Suit::Diamonds, "10");
        assert_eq!(card.name(), "10 of diamonds");
        assert_eq!(card.to_string(), "10 of diamonds");
        assert_eq!(card.short(), "10D");
    }

    #[test]
    fn ordering_ignores_suit() {
        let a = Card::new(14, Suit::Hearts, "A");
        let b = Card::new(14, Suit::Clubs, "A");
        let k = Card::new(13, Suit::Hearts, "K");
        assert_eq!(a.cmp_rank(&b), Ordering::Equal);
        assert_ne!(a, b);
        assert_eq!(k.cmp_rank(&a), Ordering::Less);
        assert_eq!(a.cmp_rank(&k), Ordering::Greater);
    }

    #[test]
    fn from_rank_uses_standard_labels() {
        assert_eq!(Card::from_rank(12, Suit::Spades).map(|c| c.label()), Some("Q"));
        assert_eq!(Card::from_rank(10, Suit::Spades).map(|c| c.label()), Some("10"));
        assert!(Card::from_rank(1, Suit::Spades).is_none());
        assert!(Card::from_rank(15, Suit::Spades).is_none());
    }

    #[test]
    fn suit_letters_round_trip() {
        for s in all_suits() {
            assert_eq!(Suit::from_letter(s.letter()), Some(s));
            assert_eq!(Suit::from_letter(s.letter().to_ascii_lowercase()), Some(s));
        }
        assert_eq!(Suit::from_letter('x'), None);
    }

    #[test]
    fn construction_accepts_any_values() {
        let odd = Card::new(0, Suit::Clubs, "?");
        assert_eq!(odd.rank(), 0);
        assert_eq!(odd.label(), "?");
    }
}
