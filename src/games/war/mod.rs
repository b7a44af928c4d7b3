//! Two-player War.
//!
//! - The pack is shuffled and dealt alternately, 26 cards each
//! - Each round both players reveal their top card; higher rank takes both
//! - Ties escalate into a war: two more cards each, compare the newest again
//! - Won cards go to a discard pile that is shuffled back in when the draw
//!   pile runs dry
//! - A player who must draw with both piles empty loses

mod game;
pub mod setup;

pub use game::{GameOutcome, GameReport, PlayerPiles, RoundResult, WarGame};
pub use setup::deal_new_game;
