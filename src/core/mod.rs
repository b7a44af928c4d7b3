//! Core types: players, RNG, configuration, errors.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::{WarConfig, DEFAULT_WAR_DRAWS};
pub use error::{DeckError, GameError};
pub use player::{Player, Seats};
pub use rng::GameRng;
