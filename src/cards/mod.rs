//! Cards and decks.
//!
//! ## Key Types
//!
//! - `Suit`, `Rank`: the standard 4 × 13 pack
//! - `Card`: immutable value, compared by rank only
//! - `Deck`: ordered pile with shuffle, deal and pop

pub mod card;
pub mod deck;

pub use card::{Card, Rank, Suit};
pub use deck::{Deck, PopAll};
