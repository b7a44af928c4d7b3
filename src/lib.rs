//! # war-sim
//!
//! A two-player simulation of the card game War.
//!
//! ## Flow
//!
//! A full 52-card pack is shuffled and dealt alternately into two draw piles.
//! Rounds are then resolved one after another, with wars on ties, until a
//! player has to draw and has no cards left in either pile.
//!
//! ## Modules
//!
//! - `core`: Players, RNG, configuration, errors
//! - `cards`: Cards and decks
//! - `trace`: Human-readable event output
//! - `games`: The War state machine and its setup

pub mod core;
pub mod cards;
pub mod trace;
pub mod games;

// Re-export commonly used types
pub use crate::core::{DeckError, GameError, GameRng, Player, Seats, WarConfig};

pub use crate::cards::{Card, Deck, Rank, Suit};

pub use crate::trace::{NullTrace, RecordingTrace, StdoutTrace, TraceEvent, TraceSink};

pub use crate::games::war::{
    deal_new_game, GameOutcome, GameReport, PlayerPiles, RoundResult, WarGame,
};
