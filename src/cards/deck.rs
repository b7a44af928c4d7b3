//! Ordered card piles.
//!
//! A `Deck` is a `Vec<Card>` whose last element is the top card. The same
//! type serves as the full 52-card pack, each player's draw pile, their
//! discard pile, and the temporary piles built up during a round.
//!
//! ## Usage
//!
//! ```
//! use war_sim::cards::Deck;
//! use war_sim::core::GameRng;
//!
//! let mut rng = GameRng::new(1);
//! let mut pack = Deck::full(&mut rng);
//! let mut hands = [Deck::new(), Deck::new()];
//!
//! pack.deal(&mut hands).unwrap();
//! assert!(pack.is_empty());
//! assert_eq!(hands[0].len(), 26);
//! assert_eq!(hands[1].len(), 26);
//! ```

use std::ops::Index;

use super::card::{Card, Rank, Suit};
use crate::core::{DeckError, GameRng};
use crate::trace::{StdoutTrace, TraceEvent, TraceSink};

/// An ordered, mutable pile of cards.
///
/// Named decks report every card they give up to their trace sink.
#[derive(Debug, Default)]
pub struct Deck {
    name: Option<String>,
    cards: Vec<Card>,
    trace: Option<Box<dyn TraceSink>>,
}

impl Deck {
    /// Create an empty, unnamed deck. Pops are not traced.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty deck whose pops are printed to stdout.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self::named_with_trace(name, StdoutTrace)
    }

    /// Create an empty deck whose pops go to the given sink.
    #[must_use]
    pub fn named_with_trace(name: impl Into<String>, trace: impl TraceSink + 'static) -> Self {
        Self {
            name: Some(name.into()),
            cards: Vec::new(),
            trace: Some(Box::new(trace)),
        }
    }

    /// Create a shuffled 52-card pack.
    #[must_use]
    pub fn full(rng: &mut GameRng) -> Self {
        let mut deck = Self::new();
        deck.initialise(rng);
        deck
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Append cards to the top, in the order given.
    pub fn put(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
    }

    /// Remove and return the top card.
    pub fn pop(&mut self) -> Result<Card, DeckError> {
        let card = self.cards.pop().ok_or(DeckError::Empty)?;
        if let (Some(name), Some(trace)) = (&self.name, self.trace.as_mut()) {
            trace.emit(&TraceEvent::CardPopped {
                deck: name.clone(),
                card,
            });
        }
        Ok(card)
    }

    /// Lazily pop every card, top first.
    ///
    /// Each card is removed (and traced) only when the iterator is advanced,
    /// so dropping the iterator early leaves the rest in the deck.
    pub fn pop_all(&mut self) -> PopAll<'_> {
        PopAll { deck: self }
    }

    /// Shuffle in place.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
    }

    /// Add one card for every suit and rank, then shuffle.
    pub fn initialise(&mut self, rng: &mut GameRng) {
        for suit in Suit::ALL {
            self.put(Rank::ALL.into_iter().map(|rank| Card::new(suit, rank)));
        }
        self.shuffle(rng);
    }

    /// Empty this deck into `into`, one card at a time in turn.
    ///
    /// The first card popped goes to `into[0]`, the second to `into[1]`,
    /// wrapping around after the last target.
    pub fn deal(&mut self, into: &mut [Deck]) -> Result<(), DeckError> {
        if into.is_empty() {
            return Err(DeckError::NoDealTargets);
        }
        let targets = into.len();
        for (i, card) in self.pop_all().enumerate() {
            into[i % targets].put([card]);
        }
        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate bottom to top.
    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Card at `index`, counting from the end when negative (`-1` is the top).
    #[must_use]
    pub fn get(&self, index: isize) -> Option<&Card> {
        let idx = if index < 0 {
            self.cards.len().checked_sub(index.unsigned_abs())?
        } else {
            index as usize
        };
        self.cards.get(idx)
    }

    /// The top card, if any.
    #[must_use]
    pub fn last(&self) -> Option<&Card> {
        self.cards.last()
    }
}

impl Index<usize> for Deck {
    type Output = Card;

    fn index(&self, index: usize) -> &Self::Output {
        &self.cards[index]
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Consumes the deck bottom to top without tracing.
impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

/// Iterator returned by [`Deck::pop_all`].
#[derive(Debug)]
pub struct PopAll<'a> {
    deck: &'a mut Deck,
}

impl Iterator for PopAll<'_> {
    type Item = Card;

    fn next(&mut self) -> Option<Card> {
        self.deck.pop().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.deck.len(), Some(self.deck.len()))
    }
}

impl ExactSizeIterator for PopAll<'_> {}
