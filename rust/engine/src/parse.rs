//! Shorthand card notation.
//!
//! A token is a rank followed by a suit letter, case-insensitive: `AS`,
//! `10D`, `3h`. `T` is accepted as an alias for ten. Tokens are resolved
//! against a live [`Deck`] so cards that were already dealt are rejected.

use std::collections::HashSet;

use crate::cards::{Card, Suit, ACE_HIGH};
use crate::deck::Deck;
use crate::errors::ParseError;

/// Usage hint shown after a parse failure.
pub const USAGE_HINT: &str =
    "Enter cards as rank + suit separated by spaces, e.g. AS 10D 3h (ranks 2-10 J Q K A, suits S H D C)";

/// Parses a single token into a numeric rank and a suit.
///
/// ```
/// use pokerhand_engine::cards::Suit;
/// use pokerhand_engine::parse::parse_token;
///
/// assert_eq!(parse_token("10d"), Ok((10, Suit::Diamonds)));
/// assert_eq!(parse_token("AS"), Ok((14, Suit::Spades)));
/// assert!(parse_token("1S").is_err());
/// ```
pub fn parse_token(token: &str) -> Result<(u8, Suit), ParseError> {
    let token = token.trim();
    let mut chars = token.chars();
    let suit_char = chars
        .next_back()
        .ok_or_else(|| ParseError::InvalidRank(token.to_string()))?;
    let rank_part = chars.as_str();
    if rank_part.is_empty() {
        return Err(ParseError::InvalidRank(token.to_string()));
    }
    let suit =
        Suit::from_letter(suit_char).ok_or_else(|| ParseError::InvalidSuit(token.to_string()))?;
    let rank = parse_rank(rank_part).ok_or_else(|| ParseError::InvalidRank(token.to_string()))?;
    Ok((rank, suit))
}

fn parse_rank(s: &str) -> Option<u8> {
    match s.to_ascii_uppercase().as_str() {
        "J" => Some(11),
        "Q" => Some(12),
        "K" => Some(13),
        "A" => Some(ACE_HIGH),
        "T" => Some(10),
        digits => match digits.parse::<u8>() {
            Ok(r) if (2..=10).contains(&r) => Some(r),
            _ => None,
        },
    }
}

/// Parses exactly `expected` tokens and looks each one up in `deck`.
///
/// Tokens may be separated by whitespace or commas. The deck is not
/// modified; callers remove the returned cards once they accept them.
pub fn parse_cards(input: &str, expected: usize, deck: &Deck) -> Result<Vec<Card>, ParseError> {
    let tokens: Vec<&str> = input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .collect();
    if tokens.len() != expected {
        return Err(ParseError::InvalidCardCount {
            expected,
            actual: tokens.len(),
        });
    }

    let mut seen = HashSet::with_capacity(expected);
    let mut cards = Vec::with_capacity(expected);
    for token in tokens {
        let (rank, suit) = parse_token(token)?;
        if !seen.insert((rank, suit)) {
            return Err(ParseError::DuplicateCard(token.to_string()));
        }
        let card = deck
            .find(rank, suit)
            .ok_or_else(|| ParseError::CardNotInDeck(token.to_string()))?;
        cards.push(card);
    }
    Ok(cards)
}
