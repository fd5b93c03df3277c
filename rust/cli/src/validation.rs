//! Input parsing and validation for interactive commands.
//!
//! The play loop reads one line per prompt and turns it into a
//! [`ParseResult`]; parse failures carry the engine's error so the caller can
//! show it and prompt again.

use pokerhand_engine::cards::Card;
use pokerhand_engine::deck::Deck;
use pokerhand_engine::errors::ParseError;
use pokerhand_engine::parse::parse_cards;

/// Result of parsing one line of interactive input.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    /// The expected number of cards, all available in the deck
    Cards(Vec<Card>),
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with the parse error
    Invalid(ParseError),
}

/// Parse a line of user input into cards or the quit command.
///
/// # Example
///
/// ```rust
/// # use pokerhand_cli::validation::{parse_card_input, ParseResult};
/// use pokerhand_engine::deck::Deck;
///
/// let deck = Deck::new_with_seed(1);
/// assert!(matches!(parse_card_input("AS KD", 2, &deck), ParseResult::Cards(_)));
/// assert_eq!(parse_card_input("q", 2, &deck), ParseResult::Quit);
/// assert!(matches!(parse_card_input("AS", 2, &deck), ParseResult::Invalid(_)));
/// ```
pub fn parse_card_input(input: &str, expected: usize, deck: &Deck) -> ParseResult {
    let input = input.trim();
    if input.eq_ignore_ascii_case("q") || input.eq_ignore_ascii_case("quit") {
        return ParseResult::Quit;
    }
    match parse_cards(input, expected, deck) {
        Ok(cards) => ParseResult::Cards(cards),
        Err(e) => ParseResult::Invalid(e),
    }
}

/// Validate the number of tokens given to `eval`: a draw hand or a
/// Hold'em hand.
pub fn validate_eval_count(count: usize) -> Result<(), String> {
    if count == 5 || count == 7 {
        Ok(())
    } else {
        Err(format!("expected 5 or 7 cards, got {}", count))
    }
}
