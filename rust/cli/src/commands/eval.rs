//! Eval command: classify a hand typed on the command line.
//!
//! Five tokens form a draw hand; seven tokens are read as two pocket cards
//! followed by five community cards.

use crate::error::CliError;
use crate::formatters::{format_result, format_verbose};
use crate::validation::validate_eval_count;
use pokerhand_engine::deck::Deck;
use pokerhand_engine::game::{DealtHand, Variant};
use pokerhand_engine::parse::parse_cards;
use std::io::Write;

/// Handle the eval command.
///
/// Tokens are resolved against a fresh deck, so duplicates are rejected.
/// Prints the category tag, or the card lines and result sentence when
/// `verbose` is set.
pub fn handle_eval_command(
    cards: &[String],
    verbose: bool,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let input = cards.join(" ");
    let count = input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .count();
    validate_eval_count(count).map_err(CliError::InvalidInput)?;

    let deck = Deck::new_with_seed(0);
    let parsed = parse_cards(&input, count, &deck)?;
    let pocket_size = if count == Variant::Holdem.hand_size() {
        Variant::Holdem.pocket_size()
    } else {
        count
    };
    let hand = DealtHand {
        pocket: parsed[..pocket_size].to_vec(),
        community: parsed[pocket_size..].to_vec(),
    };
    let result = hand.evaluate();

    if verbose {
        for line in format_verbose(&hand, &result) {
            writeln!(out, "{}", line)?;
        }
    } else {
        writeln!(out, "{}", format_result(&result))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(s: &str) -> Vec<String> {
        s.split_whitespace().map(String::from).collect()
    }

    fn run_eval(s: &str, verbose: bool) -> Result<String, CliError> {
        let mut out = Vec::new();
        handle_eval_command(&args(s), verbose, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_eval_ace_low_straight() {
        assert_eq!(run_eval("2S AH 3C 5D 4S", false).unwrap(), "straight\n");
    }

    #[test]
    fn test_eval_full_house() {
        assert_eq!(run_eval("2S 2H 3D 3C 3H", false).unwrap(), "full_house\n");
    }

    #[test]
    fn test_eval_pair_label() {
        assert_eq!(run_eval("2S 2H 4H JC 7D", false).unwrap(), "pair (2)\n");
    }

    #[test]
    fn test_eval_holdem_verbose() {
        let output = run_eval("JS 8H 9C 10D 7S AS KC", true).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "Pocket cards: J of spades, 8 of hearts");
        assert_eq!(
            lines[1],
            "Community cards: 9 of clubs, 10 of diamonds, 7 of spades, A of spades, K of clubs"
        );
        assert_eq!(lines[2], "You have a straight!");
    }

    #[test]
    fn test_eval_draw_verbose() {
        let output = run_eval("2S 8H 4H JC 7D", true).unwrap();
        assert!(output.starts_with("Your cards: 2 of spades"));
        assert!(output.ends_with("You have a high card!\n"));
    }

    #[test]
    fn test_eval_rejects_wrong_count() {
        assert!(matches!(
            run_eval("AS KS QS", false),
            Err(CliError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_eval_rejects_bad_token() {
        assert!(matches!(
            run_eval("AS KS QS JS 10Z", false),
            Err(CliError::Parse(_))
        ));
    }
}
