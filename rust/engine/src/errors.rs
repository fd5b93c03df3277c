use thiserror::Error;

/// Errors raised while turning shorthand card tokens into cards.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Expected {expected} cards, got {actual}")]
    InvalidCardCount { expected: usize, actual: usize },
    #[error("Invalid suit in '{0}' (use S, H, D or C)")]
    InvalidSuit(String),
    #[error("Invalid rank in '{0}' (use 2-10, J, Q, K or A)")]
    InvalidRank(String),
    #[error("Card '{0}' is not in the deck")]
    CardNotInDeck(String),
    #[error("Card '{0}' was entered more than once")]
    DuplicateCard(String),
}

/// Errors raised while dealing from a deck.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DealError {
    #[error("Cannot deal {requested} cards, only {remaining} left in the deck")]
    DeckExhausted { requested: usize, remaining: usize },
}
