//! # pokerhand-engine: Poker Hand Classification
//!
//! Classifies a poker hand of 5 to 7 cards into the highest category it
//! satisfies, from high card up to royal flush. Works for five-card draw hands
//! and for Texas Hold'em hands (2 pocket + 5 community cards).
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Card) and deck construction
//! - [`deck`] - Seeded deck shuffling, dealing, removal and reset
//! - [`hand`] - Category cascade and straight/flush detection
//! - [`parse`] - Shorthand card tokens ("AS", "10D", "3h")
//! - [`game`] - Round dealing and simulation
//! - [`errors`] - Error types for parsing and dealing
//!
//! ## Quick Start
//!
//! ```rust
//! use pokerhand_engine::cards::{Card, Suit};
//! use pokerhand_engine::hand::{evaluate, Category};
//!
//! // Pocket J♠ 8♥ with a 9-10-7 board makes a jack-high straight
//! let cards = [
//!     Card::new(11, Suit::Spades, "J"),
//!     Card::new(8, Suit::Hearts, "8"),
//!     Card::new(9, Suit::Clubs, "9"),
//!     Card::new(10, Suit::Diamonds, "10"),
//!     Card::new(7, Suit::Spades, "7"),
//!     Card::new(14, Suit::Spades, "A"),
//!     Card::new(13, Suit::Clubs, "K"),
//! ];
//!
//! assert_eq!(evaluate(&cards).category, Category::Straight);
//! ```
//!
//! ## Parsing Cards
//!
//! ```rust
//! use pokerhand_engine::deck::Deck;
//! use pokerhand_engine::hand::{evaluate, Category};
//! use pokerhand_engine::parse::parse_cards;
//!
//! let deck = Deck::new_with_seed(7);
//! let cards = parse_cards("AS 2h 3c 5d 4s", 5, &deck).unwrap();
//! assert_eq!(evaluate(&cards).category, Category::Straight);
//! ```

pub mod cards;
pub mod deck;
pub mod errors;
pub mod game;
pub mod hand;
pub mod parse;
