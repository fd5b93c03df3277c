//! Command-line argument definitions.

use clap::{Parser, Subcommand, ValueEnum};
use pokerhand_engine::game::Variant;

#[derive(Parser, Debug)]
#[command(
    name = "pokerhand",
    version,
    about = "Classify poker hands from high card to royal flush"
)]
pub struct PokerhandCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify a hand given as shorthand tokens (5 cards, or 2 pocket + 5 community)
    Eval {
        /// Cards such as AS 10D 3h
        #[arg(required = true, num_args = 1..)]
        cards: Vec<String>,
        /// Print the cards and a result sentence
        #[arg(long, short)]
        verbose: bool,
    },
    /// Deal one random hand and classify it
    Deal {
        #[arg(long, value_enum)]
        variant: Option<VariantArg>,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, short)]
        verbose: bool,
    },
    /// Deal many hands and count the categories
    Sim {
        #[arg(long, value_enum)]
        variant: Option<VariantArg>,
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        rounds: Option<u64>,
        #[arg(long)]
        seed: Option<u64>,
        /// Print the tally as JSON
        #[arg(long)]
        json: bool,
    },
    /// Enter hands interactively and classify them
    Play {
        #[arg(long, value_enum)]
        variant: Option<VariantArg>,
    },
    /// Show the resolved configuration
    Cfg,
}

/// Hand variant as accepted on the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum VariantArg {
    /// Five-card draw
    Draw,
    /// Texas Hold'em (2 pocket + 5 community cards)
    Holdem,
}

impl From<VariantArg> for Variant {
    fn from(v: VariantArg) -> Self {
        match v {
            VariantArg::Draw => Variant::Draw,
            VariantArg::Holdem => Variant::Holdem,
        }
    }
}
