use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::DealError;
use crate::hand::{evaluate, Category, HandEvaluation};

/// Which kind of hand is dealt each round.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Five-card draw: five private cards.
    Draw,
    /// Texas Hold'em: two pocket cards plus five community cards.
    Holdem,
}

impl Variant {
    pub fn pocket_size(&self) -> usize {
        match self {
            Variant::Draw => 5,
            Variant::Holdem => 2,
        }
    }

    pub fn community_size(&self) -> usize {
        match self {
            Variant::Draw => 0,
            Variant::Holdem => 5,
        }
    }

    pub fn hand_size(&self) -> usize {
        self.pocket_size() + self.community_size()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Draw => "draw",
            Variant::Holdem => "holdem",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "draw" => Ok(Variant::Draw),
            "holdem" | "hold'em" => Ok(Variant::Holdem),
            other => Err(format!("unknown variant '{}' (expected draw or holdem)", other)),
        }
    }
}

/// Cards dealt to the player for one round.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct DealtHand {
    /// Private cards; all five cards in a draw hand.
    pub pocket: Vec<Card>,
    /// Shared board cards; empty for draw.
    pub community: Vec<Card>,
}

impl DealtHand {
    /// All cards of the hand, pocket cards first.
    pub fn cards(&self) -> Vec<Card> {
        let mut all = Vec::with_capacity(self.pocket.len() + self.community.len());
        all.extend_from_slice(&self.pocket);
        all.extend_from_slice(&self.community);
        all
    }

    pub fn evaluate(&self) -> HandEvaluation {
        evaluate(&self.cards())
    }
}

/// Per-category counts from a simulation.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize)]
pub struct Tally {
    pub rounds: u64,
    pub counts: BTreeMap<Category, u64>,
}

impl Tally {
    pub fn record(&mut self, category: Category) {
        self.rounds += 1;
        *self.counts.entry(category).or_insert(0) += 1;
    }

    pub fn count(&self, category: Category) -> u64 {
        self.counts.get(&category).copied().unwrap_or(0)
    }
}

/// Deals and classifies hands round after round from one seeded deck.
///
/// # Examples
///
/// ```
/// use pokerhand_engine::game::{Game, Variant};
///
/// let mut game = Game::new(Variant::Holdem, 42);
/// let (hand, result) = game.play_round().unwrap();
/// assert_eq!(hand.pocket.len(), 2);
/// assert_eq!(hand.community.len(), 5);
/// println!("{}", result.message());
/// ```
#[derive(Debug)]
pub struct Game {
    deck: Deck,
    variant: Variant,
    round: u64,
}

impl Game {
    pub fn new(variant: Variant, seed: u64) -> Self {
        let mut deck = Deck::new_with_seed(seed);
        deck.shuffle();
        Self {
            deck,
            variant,
            round: 0,
        }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Rounds played since the game was created.
    pub fn round(&self) -> u64 {
        self.round
    }

    /// Deals one hand from the current deck.
    pub fn deal(&mut self) -> Result<DealtHand, DealError> {
        let pocket = self.deck.deal(self.variant.pocket_size())?;
        let community = self.deck.deal(self.variant.community_size())?;
        Ok(DealtHand { pocket, community })
    }

    /// Removes cards the player picked by hand so they cannot be dealt.
    pub fn take_cards(&mut self, cards: &[Card]) {
        self.deck.remove_cards(cards);
    }

    /// Returns every dealt card to the deck and reshuffles.
    pub fn reset(&mut self) {
        self.deck.reset();
        self.deck.shuffle();
    }

    /// Starts a new round: fresh deck, one hand dealt and classified.
    pub fn play_round(&mut self) -> Result<(DealtHand, HandEvaluation), DealError> {
        self.reset();
        self.round += 1;
        let hand = self.deal()?;
        let result = hand.evaluate();
        debug!(round = self.round, category = %result.category, "round played");
        Ok((hand, result))
    }

    /// Plays `rounds` rounds and counts the categories.
    pub fn simulate(&mut self, rounds: u64) -> Result<Tally, DealError> {
        let mut tally = Tally::default();
        for _ in 0..rounds {
            let (_, result) = self.play_round()?;
            tally.record(result.category);
        }
        info!(rounds, variant = %self.variant, "simulation finished");
        Ok(tally)
    }
}
