//! Error types.
//!
//! A player running out of cards is not an error; it is reported through
//! `RoundResult::PlayerLost`. The variants here only fire on bad input or a
//! broken invariant.

/// Failures of a single deck operation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DeckError {
    #[error("cannot pop from an empty deck")]
    Empty,

    #[error("cannot deal into zero decks")]
    NoDealTargets,
}

/// Failures that abort a game.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("deck error: {0}")]
    Deck(#[from] DeckError),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
