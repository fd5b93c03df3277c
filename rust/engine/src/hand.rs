use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cards::{Card, Suit, ACE_HIGH, ACE_LOW, TEN};

/// Number of same-suit cards that make a flush, and of cards in a straight.
const RUN: usize = 5;

/// Hand categories ordered by precedence, lowest first.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    HighCard = 0,
    Pair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::HighCard,
        Category::Pair,
        Category::TwoPair,
        Category::ThreeOfAKind,
        Category::Straight,
        Category::Flush,
        Category::FullHouse,
        Category::FourOfAKind,
        Category::StraightFlush,
        Category::RoyalFlush,
    ];

    /// Snake case tag, e.g. "full_house".
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::HighCard => "high_card",
            Category::Pair => "pair",
            Category::TwoPair => "two_pair",
            Category::ThreeOfAKind => "three_of_a_kind",
            Category::Straight => "straight",
            Category::Flush => "flush",
            Category::FullHouse => "full_house",
            Category::FourOfAKind => "four_of_a_kind",
            Category::StraightFlush => "straight_flush",
            Category::RoyalFlush => "royal_flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of classifying a hand.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize)]
pub struct HandEvaluation {
    pub category: Category,
    /// Label of the grouped rank for pair, three and four of a kind.
    pub label: Option<&'static str>,
}

impl HandEvaluation {
    fn of(category: Category) -> Self {
        Self {
            category,
            label: None,
        }
    }

    fn with_label(category: Category, label: &'static str) -> Self {
        Self {
            category,
            label: Some(label),
        }
    }

    /// Sentence announcing the result, e.g. "You have a pair of 2s!".
    pub fn message(&self) -> String {
        let label = self.label.unwrap_or("?");
        match self.category {
            Category::RoyalFlush => "You have a royal flush!".to_string(),
            Category::StraightFlush => "You have a straight flush!".to_string(),
            Category::FourOfAKind => format!("You have four {}s!", label),
            Category::FullHouse => "You have a full house!".to_string(),
            Category::Flush => "You have a flush!".to_string(),
            Category::Straight => "You have a straight!".to_string(),
            Category::ThreeOfAKind => format!("You have three {}s!", label),
            Category::TwoPair => "You have two pair!".to_string(),
            Category::Pair => format!("You have a pair of {}s!", label),
            Category::HighCard => "You have a high card!".to_string(),
        }
    }
}

/// Count of cards sharing one label.
#[derive(Debug, Clone, Copy)]
struct RankGroup {
    label: &'static str,
    rank: u8,
    count: u8,
}

/// Label -> count mapping for one hand, highest rank first.
#[derive(Debug, Clone)]
struct RankGroupCount {
    groups: Vec<RankGroup>,
}

impl RankGroupCount {
    fn from_cards(cards: &[Card]) -> Self {
        let mut groups: Vec<RankGroup> = Vec::with_capacity(cards.len());
        for c in cards {
            match groups.iter_mut().find(|g| g.label == c.label()) {
                Some(g) => g.count += 1,
                None => groups.push(RankGroup {
                    label: c.label(),
                    rank: c.rank(),
                    count: 1,
                }),
            }
        }
        groups.sort_by(|a, b| b.rank.cmp(&a.rank));
        Self { groups }
    }

    /// Highest-ranked label with exactly `count` cards.
    fn label_with(&self, count: u8) -> Option<&'static str> {
        self.groups
            .iter()
            .find(|g| g.count == count)
            .map(|g| g.label)
    }

    fn labels_with(&self, count: u8) -> usize {
        self.groups.iter().filter(|g| g.count == count).count()
    }
}

/// Suit -> count mapping for one hand.
#[derive(Debug, Clone, Copy, Default)]
struct SuitGroupCount([u8; 4]);

impl SuitGroupCount {
    fn from_cards(cards: &[Card]) -> Self {
        let mut counts = [0u8; 4];
        for c in cards {
            counts[c.suit().index()] += 1;
        }
        Self(counts)
    }

    fn count(&self, suit: Suit) -> u8 {
        self.0[suit.index()]
    }
}

/// Derived data for a single evaluation. Built once per [`evaluate`] call
/// and dropped with it.
struct HandContext<'a> {
    cards: &'a [Card],
    ranks: RankGroupCount,
    suits: SuitGroupCount,
}

impl<'a> HandContext<'a> {
    fn new(cards: &'a [Card]) -> Self {
        Self {
            cards,
            ranks: RankGroupCount::from_cards(cards),
            suits: SuitGroupCount::from_cards(cards),
        }
    }

    /// Cards of the suit that appears exactly five times, if any.
    fn flush(&self) -> Option<Vec<Card>> {
        let suit = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs]
            .into_iter()
            .find(|&s| self.suits.count(s) as usize == RUN)?;
        Some(
            self.cards
                .iter()
                .filter(|c| c.suit() == suit)
                .copied()
                .collect(),
        )
    }

    fn four_of_a_kind(&self) -> Option<&'static str> {
        self.ranks.label_with(4)
    }

    fn full_house(&self) -> bool {
        self.pair().is_some() && self.three_of_a_kind().is_some()
    }

    fn three_of_a_kind(&self) -> Option<&'static str> {
        self.ranks.label_with(3)
    }

    fn two_pair(&self) -> bool {
        self.ranks.labels_with(2) >= 2
    }

    fn pair(&self) -> Option<&'static str> {
        self.ranks.label_with(2)
    }
}

/// Classifies 5 to 7 cards into the highest category they satisfy.
///
/// Checks run from royal flush down to pair and stop at the first match;
/// anything else is a high card. The evaluator never fails: malformed input
/// simply falls through the cascade.
///
/// ```
/// use pokerhand_engine::cards::{Card, Suit};
/// use pokerhand_engine::hand::{evaluate, Category};
///
/// let cards = [
///     Card::new(2, Suit::Spades, "2"),
///     Card::new(2, Suit::Hearts, "2"),
///     Card::new(4, Suit::Hearts, "4"),
///     Card::new(11, Suit::Clubs, "J"),
///     Card::new(7, Suit::Diamonds, "7"),
/// ];
/// let result = evaluate(&cards);
/// assert_eq!(result.category, Category::Pair);
/// assert_eq!(result.message(), "You have a pair of 2s!");
/// ```
pub fn evaluate(cards: &[Card]) -> HandEvaluation {
    let ctx = HandContext::new(cards);
    let result = classify(&ctx);
    debug!(
        cards = cards.len(),
        category = %result.category,
        label = result.label.unwrap_or(""),
        "hand evaluated"
    );
    result
}

fn classify(ctx: &HandContext<'_>) -> HandEvaluation {
    let flush = ctx.flush();

    if let Some(flush_cards) = &flush {
        if check_straight(flush_cards) {
            if is_royal(flush_cards) {
                return HandEvaluation::of(Category::RoyalFlush);
            }
            return HandEvaluation::of(Category::StraightFlush);
        }
    }

    if let Some(label) = ctx.four_of_a_kind() {
        return HandEvaluation::with_label(Category::FourOfAKind, label);
    }

    if ctx.full_house() {
        return HandEvaluation::of(Category::FullHouse);
    }

    if flush.is_some() {
        return HandEvaluation::of(Category::Flush);
    }

    if check_straight(ctx.cards) {
        return HandEvaluation::of(Category::Straight);
    }

    if let Some(label) = ctx.three_of_a_kind() {
        return HandEvaluation::with_label(Category::ThreeOfAKind, label);
    }

    if ctx.two_pair() {
        return HandEvaluation::of(Category::TwoPair);
    }

    if let Some(label) = ctx.pair() {
        return HandEvaluation::with_label(Category::Pair, label);
    }

    HandEvaluation::of(Category::HighCard)
}

fn is_royal(flush_cards: &[Card]) -> bool {
    let high = flush_cards.iter().map(Card::rank).max();
    let low = flush_cards.iter().map(Card::rank).min();
    high == Some(ACE_HIGH) && low == Some(TEN)
}

/// True if any five of `cards` form a run, with the ace playable high or low.
pub fn check_straight(cards: &[Card]) -> bool {
    let mut sorted: Vec<Card> = cards.to_vec();
    sorted.sort_by(|a, b| b.cmp_rank(a));
    // A pair inside a run would break the window scan.
    sorted.dedup_by(|a, b| a.rank() == b.rank());

    let Some(first) = sorted.first().copied() else {
        return false;
    };

    let mut ace_low = false;
    if first.rank() == ACE_HIGH {
        if let Some(last) = sorted.last() {
            let low_ace = Card::new(ACE_LOW, last.suit(), first.label());
            let mut ace_low_sorted = sorted[1..].to_vec();
            ace_low_sorted.push(low_ace);
            ace_low = check_straight_ranks(&ace_low_sorted);
        }
    }

    ace_low || check_straight_ranks(&sorted)
}

/// True if five consecutive positions of a rank-descending sequence hold
/// five consecutive descending ranks.
pub fn check_straight_ranks(cards: &[Card]) -> bool {
    cards.windows(RUN).any(|w| {
        w.windows(2)
            .all(|pair| pair[0].rank().checked_sub(1) == Some(pair[1].rank()))
    })
}
