//! Building a ready-to-play game from a fresh pack.

use crate::cards::Deck;
use crate::core::{GameError, GameRng, Player, WarConfig};
use crate::trace::TraceSink;

use super::game::WarGame;

/// Shuffle a full pack, deal it alternately into two named draw piles, and
/// start a game over them.
///
/// Player A receives the first card dealt. Both draw piles and the game
/// itself report to clones of `trace`.
///
/// ```
/// use war_sim::core::{Player, WarConfig};
/// use war_sim::games::war::deal_new_game;
/// use war_sim::trace::NullTrace;
///
/// let game = deal_new_game(&WarConfig::default().with_seed(9), NullTrace).unwrap();
/// assert_eq!(game.deck(Player::A).len(), 26);
/// assert_eq!(game.deck(Player::B).len(), 26);
/// ```
pub fn deal_new_game(
    config: &WarConfig,
    trace: impl TraceSink + Clone + 'static,
) -> Result<WarGame, GameError> {
    config.validate()?;

    let mut rng = GameRng::from_seed_or_entropy(config.seed);
    log::debug!("dealing with seed {}", rng.seed());

    let mut hands = Player::ALL
        .map(|player| Deck::named_with_trace(config.player_name(player), trace.clone()));
    Deck::full(&mut rng).deal(&mut hands)?;
    let [deck_a, deck_b] = hands;

    Ok(WarGame::new(deck_a, deck_b, rng)
        .with_trace(trace)
        .with_war_draws(config.war_draws)
        .with_round_limit(config.round_limit))
}
