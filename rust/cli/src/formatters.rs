//! Card and result formatters for terminal display.
//!
//! Cards are shown in short form with Unicode suit symbols where the terminal
//! supports them (`A♠`), falling back to letters (`AS`) otherwise. Verbose
//! output uses the long card names ("A of spades").
//!
//! ## Example
//!
//! ```rust
//! use pokerhand_engine::cards::{Card, Suit};
//! use pokerhand_cli::formatters::{format_card, format_board};
//!
//! let ace_spades = Card::new(14, Suit::Spades, "A");
//! assert!(format_card(&ace_spades) == "A♠" || format_card(&ace_spades) == "AS");
//!
//! let board = vec![ace_spades];
//! assert!(format_board(&board).starts_with("[A"));
//! ```

use pokerhand_engine::cards::Card;
use pokerhand_engine::game::{DealtHand, Tally};
use pokerhand_engine::hand::{Category, HandEvaluation};

/// Check if the terminal supports Unicode card symbols by detecting modern terminal environments.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals (TERM_PROGRAM),
/// or VS Code (VSCODE_INJECTION). On Unix-like systems, assumes Unicode support.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

/// Format a Card as label plus suit, e.g. "10♦" or "10D".
pub fn format_card(card: &Card) -> String {
    if supports_unicode() {
        format!("{}{}", card.label(), card.suit().symbol())
    } else {
        card.short()
    }
}

/// Format cards in bracket notation, e.g. "[A♠ K♥ Q♦]" or "[]" if empty.
pub fn format_board(cards: &[Card]) -> String {
    if cards.is_empty() {
        "[]".to_string()
    } else {
        let formatted_cards: Vec<String> = cards.iter().map(format_card).collect();
        format!("[{}]", formatted_cards.join(" "))
    }
}

/// Long card names joined by commas: "A of spades, 10 of diamonds".
pub fn format_names(cards: &[Card]) -> String {
    cards
        .iter()
        .map(Card::name)
        .collect::<Vec<_>>()
        .join(", ")
}

/// One-line result tag, e.g. "pair (2)" or "straight".
pub fn format_result(result: &HandEvaluation) -> String {
    match result.label {
        Some(label) => format!("{} ({})", result.category, label),
        None => result.category.to_string(),
    }
}

/// Verbose description of a hand: the cards, then the result sentence.
///
/// Draw hands print a single "Your cards" line; Hold'em hands print pocket
/// and community cards separately.
pub fn format_verbose(hand: &DealtHand, result: &HandEvaluation) -> Vec<String> {
    let mut lines = Vec::with_capacity(3);
    if hand.community.is_empty() {
        lines.push(format!("Your cards: {}", format_names(&hand.pocket)));
    } else {
        lines.push(format!("Pocket cards: {}", format_names(&hand.pocket)));
        lines.push(format!("Community cards: {}", format_names(&hand.community)));
    }
    lines.push(result.message());
    lines
}

/// Category histogram as aligned text rows, highest category first.
pub fn format_tally(tally: &Tally) -> Vec<String> {
    let mut lines = Vec::with_capacity(Category::ALL.len() + 1);
    lines.push(format!("Rounds: {}", tally.rounds));
    for category in Category::ALL.iter().rev() {
        let count = tally.count(*category);
        let pct = if tally.rounds == 0 {
            0.0
        } else {
            count as f64 * 100.0 / tally.rounds as f64
        };
        lines.push(format!("{:<16} {:>10} {:>7.3}%", category.as_str(), count, pct));
    }
    lines
}
