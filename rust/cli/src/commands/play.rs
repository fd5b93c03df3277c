//! # Play Command
//!
//! Interactive hand entry. The user types the cards of each hand in
//! shorthand notation and gets the classification back.
//!
//! ## Features
//!
//! - Draw hands take five cards at one prompt; Hold'em hands take the two
//!   pocket cards, then the five community cards
//! - Invalid input prints the error and a usage hint, then prompts again
//! - Cards already entered for the current hand cannot be entered twice
//! - `q`/`quit` or end of input ends the session

use crate::error::CliError;
use crate::formatters::format_verbose;
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{ParseResult, parse_card_input};
use pokerhand_engine::cards::Card;
use pokerhand_engine::game::{DealtHand, Game, Variant};
use pokerhand_engine::parse::USAGE_HINT;
use std::io::{BufRead, ErrorKind, Write};
use tracing::debug;

/// Outcome of one prompt.
enum Prompted {
    Cards(Vec<Card>),
    Quit,
    Eof,
}

/// Handle the play command: enter and classify hands until the user quits.
///
/// # Arguments
///
/// * `variant` - Draw (5 cards) or Hold'em (2 + 5 cards)
/// * `out` - Output stream for prompts and results
/// * `err` - Error stream for parse errors and hints
/// * `stdin` - Input stream for card entry
///
/// # Returns
///
/// * `Ok(())` when the user quits or input ends between hands
/// * `Err(CliError::Interrupted)` if input ends part way through a Hold'em hand
pub fn handle_play_command(
    variant: Variant,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    writeln!(out, "play: variant={} (enter q to quit)", variant)?;

    let mut game = Game::new(variant, 0);
    let mut played = 0u32;

    loop {
        game.reset();
        let Some(hand) = read_hand(&mut game, out, err, stdin)? else {
            break;
        };
        let result = hand.evaluate();
        for line in format_verbose(&hand, &result) {
            writeln!(out, "{}", line)?;
        }
        played += 1;
        debug!(played, category = %result.category, "hand entered");
    }

    writeln!(out, "Hands played: {}", played)?;
    Ok(())
}

/// Reads all cards of one hand. `None` means the session is over.
fn read_hand(
    game: &mut Game,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<Option<DealtHand>, CliError> {
    let variant = game.variant();
    let pocket_prompt = match variant {
        Variant::Draw => "Enter your 5 cards:".to_string(),
        Variant::Holdem => format!("Enter your {} pocket cards:", variant.pocket_size()),
    };
    let pocket = match read_cards(game, variant.pocket_size(), &pocket_prompt, out, err, stdin)? {
        Prompted::Cards(cards) => cards,
        Prompted::Quit | Prompted::Eof => return Ok(None),
    };

    let community = if variant.community_size() == 0 {
        Vec::new()
    } else {
        let prompt = format!("Enter the {} community cards:", variant.community_size());
        match read_cards(game, variant.community_size(), &prompt, out, err, stdin)? {
            Prompted::Cards(cards) => cards,
            Prompted::Quit => return Ok(None),
            Prompted::Eof => {
                return Err(CliError::Interrupted(
                    "input closed before the community cards were entered".to_string(),
                ));
            }
        }
    };

    Ok(Some(DealtHand { pocket, community }))
}

/// Prompts until `expected` valid cards are entered, the user quits, or
/// input ends. Accepted cards are taken out of the game deck.
fn read_cards(
    game: &mut Game,
    expected: usize,
    prompt: &str,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<Prompted, CliError> {
    loop {
        ui::prompt(out, prompt)?;
        let line = match read_stdin_line(stdin) {
            Ok(Some(line)) => line,
            Ok(None) => {
                writeln!(out)?;
                return Ok(Prompted::Eof);
            }
            // The undecodable line is already consumed; ask again.
            Err(e) if e.kind() == ErrorKind::InvalidData => {
                debug!(error = %e, "rejected undecodable input");
                ui::write_error(err, "Input is not valid UTF-8")?;
                writeln!(err, "{}", USAGE_HINT)?;
                continue;
            }
            Err(e) => return Err(e.into()),
        };
        match parse_card_input(&line, expected, game.deck()) {
            ParseResult::Cards(cards) => {
                game.take_cards(&cards);
                return Ok(Prompted::Cards(cards));
            }
            ParseResult::Quit => return Ok(Prompted::Quit),
            ParseResult::Invalid(e) => {
                debug!(input = %line, error = %e, "rejected card input");
                ui::write_error(err, &e.to_string())?;
                writeln!(err, "{}", USAGE_HINT)?;
            }
        }
    }
}
