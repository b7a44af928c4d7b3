//! Human-readable game trace.
//!
//! Decks and the game report what happens through a [`TraceSink`]. The
//! binary prints to stdout with [`StdoutTrace`]; tests capture events with
//! [`RecordingTrace`] and assert on them.
//!
//! The trace is diagnostic text, not a stable format. Card pops are printed
//! tab-separated on one line so a round's draws read side by side:
//!
//! ```text
//! A --> Nine of Clubs	B --> Four of Hearts	Player A wins the round.
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use serde::Serialize;

use crate::cards::Card;
use crate::core::Player;

/// Something worth showing to a person watching the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum TraceEvent {
    /// A named deck gave up its top card.
    CardPopped { deck: String, card: Card },
    /// A round was decided.
    RoundWon { winner: Player },
    /// A player's discard pile was shuffled back into their draw pile.
    DeckRefilled { player: Player },
    /// The game stopped. `loser` is `None` when the round limit ended it.
    GameOver { loser: Option<Player>, rounds: u64 },
}

impl std::fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TraceEvent::CardPopped { deck, card } => write!(f, "{} --> {}", deck, card),
            TraceEvent::RoundWon { winner } => write!(f, "{} wins the round.", winner),
            TraceEvent::DeckRefilled { player } => write!(f, "{} fills empty deck.", player),
            TraceEvent::GameOver { loser, rounds } => {
                match loser {
                    Some(player) => writeln!(f, "{} lost.", player)?,
                    None => writeln!(f, "Round limit reached.")?,
                }
                write!(f, "The game took {} rounds.", rounds)
            }
        }
    }
}

/// Destination for trace events.
pub trait TraceSink: std::fmt::Debug {
    fn emit(&mut self, event: &TraceEvent);
}

/// Prints every event to stdout.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdoutTrace;

impl TraceSink for StdoutTrace {
    fn emit(&mut self, event: &TraceEvent) {
        match event {
            TraceEvent::CardPopped { .. } => print!("{}\t", event),
            _ => println!("{}", event),
        }
    }
}

/// Discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullTrace;

impl TraceSink for NullTrace {
    fn emit(&mut self, _event: &TraceEvent) {}
}

/// Records events in memory.
///
/// Clones share one buffer, so the same recorder can be handed to both
/// player decks and the game and still yield a single ordered log.
#[derive(Clone, Debug, Default)]
pub struct RecordingTrace {
    events: Rc<RefCell<Vec<TraceEvent>>>,
}

impl RecordingTrace {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far.
    #[must_use]
    pub fn events(&self) -> Vec<TraceEvent> {
        self.events.borrow().clone()
    }

    /// Number of recorded events matching a predicate.
    #[must_use]
    pub fn count(&self, predicate: impl Fn(&TraceEvent) -> bool) -> usize {
        self.events.borrow().iter().filter(|e| predicate(e)).count()
    }

    /// Rendered text of every event, one entry per event.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.events.borrow().iter().map(ToString::to_string).collect()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

impl TraceSink for RecordingTrace {
    fn emit(&mut self, event: &TraceEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}
