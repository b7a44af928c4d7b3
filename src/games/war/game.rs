//! War game state machine.

use std::cmp::Ordering;

use serde::Serialize;

use crate::cards::Deck;
use crate::core::{DeckError, GameError, GameRng, Player, Seats, DEFAULT_WAR_DRAWS};
use crate::trace::{StdoutTrace, TraceEvent, TraceSink};

/// A player's draw pile and discard pile.
#[derive(Debug, Default)]
pub struct PlayerPiles {
    /// Face-down pile cards are played from.
    pub deck: Deck,
    /// Face-up pile of cards won, shuffled back in when `deck` runs out.
    pub stack: Deck,
}

impl PlayerPiles {
    #[must_use]
    pub fn new(deck: Deck) -> Self {
        Self {
            deck,
            stack: Deck::new(),
        }
    }

    /// Out of the game: nothing left to draw or to refill from.
    #[must_use]
    pub fn is_out(&self) -> bool {
        self.deck.is_empty() && self.stack.is_empty()
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.deck.len() + self.stack.len()
    }
}

/// Result of resolving one round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RoundResult {
    /// The round was decided and play goes on.
    Continue {
        winner: Player,
        /// Cards moved onto the winner's discard pile, both sides included.
        cards_won: usize,
        /// Ties resolved before the round was decided.
        wars: u32,
    },
    /// A player needed to draw with both piles empty.
    PlayerLost(Player),
}

/// How a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum GameOutcome {
    PlayerLost(Player),
    /// The configured round limit was hit first.
    RoundLimit,
}

impl GameOutcome {
    #[must_use]
    pub fn loser(self) -> Option<Player> {
        match self {
            GameOutcome::PlayerLost(player) => Some(player),
            GameOutcome::RoundLimit => None,
        }
    }
}

/// Summary of a finished game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GameReport {
    pub outcome: GameOutcome,
    /// Rounds completed. The round a loss interrupts does not count.
    pub rounds: u64,
    pub wars: u64,
    /// Cards moved onto discard piles over all completed rounds.
    pub cards_transferred: u64,
    /// Seed of the RNG used for refills.
    pub seed: u64,
}

/// Two-player War.
///
/// ## Round
///
/// Each player reveals one card. The higher rank takes both. On a tie each
/// player adds `war_draws` more cards (one face-down then one face-up by
/// default) and the newest cards are compared again, for as many ties as
/// occur. The winner's discard pile gets the winner's cards followed by the
/// loser's.
///
/// Before every single draw, an empty draw pile is refilled from that
/// player's shuffled discard pile. If both are empty the player has lost,
/// even in the middle of a war.
///
/// ## Example
///
/// ```
/// use war_sim::cards::{Card, Deck, Rank, Suit};
/// use war_sim::core::{GameRng, Player};
/// use war_sim::games::war::{RoundResult, WarGame};
/// use war_sim::trace::NullTrace;
///
/// let mut a = Deck::new();
/// a.put([Card::new(Suit::Spades, Rank::King)]);
/// let mut b = Deck::new();
/// b.put([Card::new(Suit::Hearts, Rank::Two)]);
///
/// let mut game = WarGame::new(a, b, GameRng::new(0)).with_trace(NullTrace);
/// assert!(matches!(
///     game.play_round().unwrap(),
///     RoundResult::Continue { winner: Player::A, cards_won: 2, wars: 0 }
/// ));
/// assert_eq!(game.play_round().unwrap(), RoundResult::PlayerLost(Player::B));
/// ```
#[derive(Debug)]
pub struct WarGame {
    piles: Seats<PlayerPiles>,
    rng: GameRng,
    trace: Box<dyn TraceSink>,
    war_draws: usize,
    round_limit: Option<u64>,
    rounds: u64,
    wars: u64,
    cards_transferred: u64,
}

impl WarGame {
    /// Start a game from two dealt draw piles, with empty discard piles.
    #[must_use]
    pub fn new(deck_a: Deck, deck_b: Deck, rng: GameRng) -> Self {
        Self::from_piles(
            Seats::new(PlayerPiles::new(deck_a), PlayerPiles::new(deck_b)),
            rng,
        )
    }

    /// Start a game from arbitrary piles.
    #[must_use]
    pub fn from_piles(piles: Seats<PlayerPiles>, rng: GameRng) -> Self {
        Self {
            piles,
            rng,
            trace: Box::new(StdoutTrace),
            war_draws: DEFAULT_WAR_DRAWS,
            round_limit: None,
            rounds: 0,
            wars: 0,
            cards_transferred: 0,
        }
    }

    /// Send round, refill and game-over events to `trace`.
    #[must_use]
    pub fn with_trace(mut self, trace: impl TraceSink + 'static) -> Self {
        self.trace = Box::new(trace);
        self
    }

    #[must_use]
    pub fn with_war_draws(mut self, draws: usize) -> Self {
        assert!(draws > 0, "war_draws must be at least 1");
        self.war_draws = draws;
        self
    }

    #[must_use]
    pub fn with_round_limit(mut self, limit: Option<u64>) -> Self {
        self.round_limit = limit;
        self
    }

    /// A player's draw pile.
    #[must_use]
    pub fn deck(&self, player: Player) -> &Deck {
        &self.piles[player].deck
    }

    /// A player's discard pile.
    #[must_use]
    pub fn stack(&self, player: Player) -> &Deck {
        &self.piles[player].stack
    }

    #[must_use]
    pub fn piles(&self, player: Player) -> &PlayerPiles {
        &self.piles[player]
    }

    /// Cards across all four piles. 52 between rounds of a full game.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.piles.iter().map(|(_, p)| p.total()).sum()
    }

    #[must_use]
    pub fn rounds_played(&self) -> u64 {
        self.rounds
    }

    /// Play rounds until a player loses or the round limit is reached.
    pub fn play(&mut self) -> Result<GameReport, GameError> {
        let outcome = loop {
            if self.round_limit.is_some_and(|limit| self.rounds >= limit) {
                break GameOutcome::RoundLimit;
            }
            match self.play_round()? {
                RoundResult::Continue { .. } => {}
                RoundResult::PlayerLost(loser) => break GameOutcome::PlayerLost(loser),
            }
        };

        self.trace.emit(&TraceEvent::GameOver {
            loser: outcome.loser(),
            rounds: self.rounds,
        });
        log::info!(
            "game over after {} rounds ({} wars): {:?}",
            self.rounds,
            self.wars,
            outcome
        );

        Ok(self.report(outcome))
    }

    /// Resolve one round, including any wars.
    ///
    /// Cards revealed in a round that ends in a loss are left out of play.
    pub fn play_round(&mut self) -> Result<RoundResult, GameError> {
        let mut held: Seats<Deck> = Seats::with_default();

        if let Some(loser) = self.both_to_stacks(&mut held)? {
            return Ok(RoundResult::PlayerLost(loser));
        }

        let mut wars = 0u32;
        let winner = loop {
            let a = held[Player::A].last().copied().ok_or(DeckError::Empty)?;
            let b = held[Player::B].last().copied().ok_or(DeckError::Empty)?;
            match a.compare(&b) {
                Ordering::Greater => break Player::A,
                Ordering::Less => break Player::B,
                Ordering::Equal => {
                    wars += 1;
                    log::debug!("war #{} on {} vs {}", wars, a, b);
                    for _ in 0..self.war_draws {
                        if let Some(loser) = self.both_to_stacks(&mut held)? {
                            log::debug!("{} ran out of cards during a war", loser);
                            return Ok(RoundResult::PlayerLost(loser));
                        }
                    }
                }
            }
        };

        let (held_a, held_b) = held.into_inner();
        let (won, lost) = match winner {
            Player::A => (held_a, held_b),
            Player::B => (held_b, held_a),
        };
        let cards_won = won.len() + lost.len();
        self.piles[winner].stack.put(won.into_iter().chain(lost));

        self.rounds += 1;
        self.wars += u64::from(wars);
        self.cards_transferred += cards_won as u64;
        self.trace.emit(&TraceEvent::RoundWon { winner });

        Ok(RoundResult::Continue {
            winner,
            cards_won,
            wars,
        })
    }

    /// Refill any empty draw pile from its discard pile.
    ///
    /// Returns the first player (A is checked before B) who has nothing
    /// left to draw, and stops checking at that point.
    pub fn fill_empty_decks(&mut self) -> Option<Player> {
        for player in Player::ALL {
            let piles = &mut self.piles[player];
            if !piles.deck.is_empty() {
                continue;
            }
            if piles.stack.is_empty() {
                return Some(player);
            }

            piles.stack.shuffle(&mut self.rng);
            piles.deck.put(piles.stack.pop_all());
            log::debug!("{} refilled draw pile with {} cards", player, piles.deck.len());
            self.trace.emit(&TraceEvent::DeckRefilled { player });
        }
        None
    }

    /// Each player moves one card from their draw pile onto their held pile.
    fn both_to_stacks(&mut self, held: &mut Seats<Deck>) -> Result<Option<Player>, GameError> {
        if let Some(loser) = self.fill_empty_decks() {
            return Ok(Some(loser));
        }
        for player in Player::ALL {
            let card = self.piles[player].deck.pop()?;
            held[player].put([card]);
        }
        Ok(None)
    }

    fn report(&self, outcome: GameOutcome) -> GameReport {
        GameReport {
            outcome,
            rounds: self.rounds,
            wars: self.wars,
            cards_transferred: self.cards_transferred,
            seed: self.rng.seed(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, Rank, Suit};
    use crate::trace::{NullTrace, RecordingTrace};

    fn deck_of(ranks: &[Rank], suit: Suit) -> Deck {
        let mut deck = Deck::new();
        deck.put(ranks.iter().map(|&r| Card::new(suit, r)));
        deck
    }

    fn game(a: &[Rank], b: &[Rank]) -> WarGame {
        WarGame::new(deck_of(a, Suit::Spades), deck_of(b, Suit::Hearts), GameRng::new(42))
            .with_trace(NullTrace)
    }

    #[test]
    fn test_higher_card_wins_round() {
        let mut game = game(&[Rank::Three, Rank::Ace], &[Rank::Four, Rank::Ten]);

        let result = game.play_round().unwrap();

        assert_eq!(
            result,
            RoundResult::Continue { winner: Player::A, cards_won: 2, wars: 0 }
        );
        assert_eq!(game.stack(Player::A).len(), 2);
        assert!(game.stack(Player::B).is_empty());
        assert_eq!(game.deck(Player::A).len(), 1);
        assert_eq!(game.deck(Player::B).len(), 1);
        assert_eq!(game.rounds_played(), 1);
    }

    #[test]
    fn test_winner_cards_go_first() {
        // B's Queen beats A's Five
        let mut game = game(&[Rank::Five], &[Rank::Queen]);

        game.play_round().unwrap();

        let stack: Vec<Card> = game.stack(Player::B).iter().copied().collect();
        assert_eq!(
            stack,
            vec![
                Card::new(Suit::Hearts, Rank::Queen),
                Card::new(Suit::Spades, Rank::Five),
            ]
        );
    }

    #[test]
    fn test_single_war_draws_two_more_each() {
        // Top cards (last) tie on Nine; then a face-down and a face-up card each.
        let mut game = game(
            &[Rank::Two, Rank::King, Rank::Three, Rank::Nine],
            &[Rank::Two, Rank::Jack, Rank::Four, Rank::Nine],
        );

        let result = game.play_round().unwrap();

        assert_eq!(
            result,
            RoundResult::Continue { winner: Player::A, cards_won: 6, wars: 1 }
        );
        assert_eq!(game.stack(Player::A).len(), 6);
        assert_eq!(game.deck(Player::A).len(), 1);
        assert_eq!(game.deck(Player::B).len(), 1);
    }

    #[test]
    fn test_war_order_is_preserved_on_stack() {
        let mut game = game(&[Rank::Two, Rank::Three, Rank::Nine], &[Rank::Ace, Rank::Four, Rank::Nine]);

        game.play_round().unwrap();

        // B wins with the Ace; B's held cards then A's, each in draw order.
        let ranks: Vec<(Suit, Rank)> = game
            .stack(Player::B)
            .iter()
            .map(|c| (c.suit(), c.rank()))
            .collect();
        assert_eq!(
            ranks,
            vec![
                (Suit::Hearts, Rank::Nine),
                (Suit::Hearts, Rank::Four),
                (Suit::Hearts, Rank::Ace),
                (Suit::Spades, Rank::Nine),
                (Suit::Spades, Rank::Three),
                (Suit::Spades, Rank::Two),
            ]
        );
    }

    #[test]
    fn test_custom_war_draws() {
        let mut game = game(&[Rank::King, Rank::Seven], &[Rank::Queen, Rank::Seven])
            .with_war_draws(1);

        let result = game.play_round().unwrap();

        assert_eq!(
            result,
            RoundResult::Continue { winner: Player::A, cards_won: 4, wars: 1 }
        );
    }

    #[test]
    fn test_refill_from_stack() {
        let stack_cards = [Rank::Two, Rank::Five, Rank::Jack];
        let piles = Seats::new(
            PlayerPiles {
                deck: Deck::new(),
                stack: deck_of(&stack_cards, Suit::Clubs),
            },
            PlayerPiles::new(deck_of(&[Rank::Six], Suit::Hearts)),
        );
        let recorder = RecordingTrace::new();
        let mut game = WarGame::from_piles(piles, GameRng::new(1)).with_trace(recorder.clone());

        assert_eq!(game.fill_empty_decks(), None);

        assert!(game.stack(Player::A).is_empty());
        let mut refilled: Vec<Rank> = game.deck(Player::A).iter().map(|c| c.rank()).collect();
        refilled.sort_by_key(|r| r.value());
        assert_eq!(refilled, stack_cards.to_vec());
        assert_eq!(
            recorder.events(),
            vec![TraceEvent::DeckRefilled { player: Player::A }]
        );
    }

    #[test]
    fn test_loss_detected_before_draw() {
        let mut game = game(&[Rank::Two], &[]);

        assert_eq!(game.play_round().unwrap(), RoundResult::PlayerLost(Player::B));
        // Nothing was drawn
        assert_eq!(game.deck(Player::A).len(), 1);
        assert_eq!(game.rounds_played(), 0);
    }

    #[test]
    fn test_a_checked_first() {
        let mut game = game(&[], &[]);
        assert_eq!(game.fill_empty_decks(), Some(Player::A));
    }

    #[test]
    fn test_loss_mid_war() {
        // Tie on Eight, B has only one card left for the war.
        let mut game = game(&[Rank::Two, Rank::Three, Rank::Eight], &[Rank::Four, Rank::Eight]);

        assert_eq!(game.play_round().unwrap(), RoundResult::PlayerLost(Player::B));
        assert_eq!(game.rounds_played(), 0);
    }

    #[test]
    fn test_play_reports_loser() {
        let recorder = RecordingTrace::new();
        let mut game = game(&[Rank::Ace, Rank::Ace], &[Rank::Two, Rank::Three])
            .with_trace(recorder.clone());

        let report = game.play().unwrap();

        // A wins both rounds, leaving B with nothing to refill from.
        assert_eq!(report.outcome, GameOutcome::PlayerLost(Player::B));
        assert_eq!(report.rounds, 2);
        assert_eq!(report.cards_transferred, 4);
        assert_eq!(report.seed, 42);
        assert_eq!(
            recorder.events().last(),
            Some(&TraceEvent::GameOver { loser: Some(Player::B), rounds: 2 })
        );
    }

    #[test]
    fn test_round_limit() {
        // Alternating winners keep both players in the game.
        let mut game = game(
            &[Rank::Ace, Rank::Two, Rank::Ace, Rank::Two],
            &[Rank::Two, Rank::Ace, Rank::Two, Rank::Ace],
        )
        .with_round_limit(Some(3));

        let report = game.play().unwrap();

        assert_eq!(report.outcome, GameOutcome::RoundLimit);
        assert_eq!(report.rounds, 3);
        assert_eq!(game.total_cards(), 8);
    }

    #[test]
    #[should_panic(expected = "war_draws must be at least 1")]
    fn test_zero_war_draws_rejected() {
        let _ = game(&[], &[]).with_war_draws(0);
    }
}
