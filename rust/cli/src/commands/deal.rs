//! Deal command handler for single hand dealing and classification.
//!
//! Deals one hand of the chosen variant from a freshly shuffled deck and
//! prints the cards with their category. Supports optional seeding for
//! deterministic dealing.

use crate::error::CliError;
use crate::formatters::{format_board, format_result, format_verbose};
use pokerhand_engine::game::{Game, Variant};
use std::io::Write;

/// Handle the deal command.
///
/// # Arguments
///
/// * `variant` - Draw (5 cards) or Hold'em (2 + 5 cards)
/// * `seed` - Optional RNG seed for deterministic dealing
/// * `verbose` - Print long card names and the result sentence
/// * `out` - Output stream for command results
pub fn handle_deal_command(
    variant: Variant,
    seed: Option<u64>,
    verbose: bool,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let seed = seed.unwrap_or_else(rand::random);
    let mut game = Game::new(variant, seed);
    let (hand, result) = game.play_round()?;

    if verbose {
        for line in format_verbose(&hand, &result) {
            writeln!(out, "{}", line)?;
        }
        return Ok(());
    }

    match variant {
        Variant::Draw => writeln!(out, "Hand: {}", format_board(&hand.pocket))?,
        Variant::Holdem => {
            writeln!(out, "Pocket: {}", format_board(&hand.pocket))?;
            writeln!(out, "Board: {}", format_board(&hand.community))?;
        }
    }
    writeln!(out, "Result: {}", format_result(&result))?;
    Ok(())
}
