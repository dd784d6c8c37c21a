//! Game engine and state management.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::deck::Deck;
use crate::error::GameError;
use crate::options::GameOptions;
use crate::player::Player;
use crate::result::{Outcome, RoundResult, Seat};

mod round;
pub mod state;

pub use state::GameState;

/// A game of War between two players.
///
/// The game owns the deck and both players. Build it with [`Game::new`] (a
/// seeded shuffle) or [`Game::with_deck`] (a fixed arrangement), then call
/// [`Game::play_to_end`] or drive it round by round with [`Game::setup`] and
/// [`Game::play_round`].
#[derive(Debug, Clone)]
pub struct Game {
    /// Undealt cards.
    deck: Deck,
    /// Both players, indexed by [`Seat::index`].
    players: [Player; 2],
    /// Current game state.
    state: GameState,
    /// Every round played so far.
    rounds: Vec<RoundResult>,
}

impl Game {
    /// Creates a new game whose deck is shuffled from the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use warrs::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.state(), GameState::Setup);
    /// assert_eq!(game.cards_in_deck(), 52);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        debug!(seed, "creating game");
        Self::with_deck(options, Deck::shuffled(&mut rng))
    }

    /// Creates a new game that deals `deck` as-is, without shuffling.
    #[must_use]
    pub fn with_deck(options: GameOptions, deck: Deck) -> Self {
        let GameOptions {
            player_one,
            player_two,
        } = options;

        Self {
            deck,
            players: [Player::new(player_one), Player::new(player_two)],
            state: GameState::Setup,
            rounds: Vec::new(),
        }
    }

    /// Deals the deck, 26 cards to each player, and starts play.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in `Setup` state or the deck does
    /// not hold a full 52 cards.
    pub fn setup(&mut self) -> Result<(), GameError> {
        if self.state != GameState::Setup {
            return Err(GameError::InvalidState);
        }

        let (first, second) = self.deck.deal()?;
        self.players[Seat::One.index()].receive_cards(first);
        self.players[Seat::Two.index()].receive_cards(second);

        self.state = GameState::Playing;
        debug!(
            one = self.players[0].cards_remaining(),
            two = self.players[1].cards_remaining(),
            "hands dealt"
        );

        Ok(())
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the player in `seat`.
    #[must_use]
    pub const fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }

    /// Returns both players.
    #[must_use]
    pub const fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Returns the rounds played so far, oldest first.
    #[must_use]
    pub fn rounds(&self) -> &[RoundResult] {
        &self.rounds
    }

    /// Returns the number of cards still in the deck (0 once dealt).
    #[must_use]
    pub fn cards_in_deck(&self) -> usize {
        self.deck.len()
    }

    /// Returns the current scores, indexed by [`Seat::index`].
    #[must_use]
    pub const fn scores(&self) -> [u32; 2] {
        [self.players[0].score(), self.players[1].score()]
    }

    /// Returns the number of rounds that ended in a tie.
    #[must_use]
    pub fn ties(&self) -> u32 {
        self.rounds
            .iter()
            .filter(|round| round.outcome.is_tie())
            .count() as u32
    }

    /// Returns the seat with the strictly higher score, or a tie.
    #[must_use]
    pub const fn leader(&self) -> Outcome {
        let [one, two] = self.scores();
        if one > two {
            Outcome::Winner(Seat::One)
        } else if two > one {
            Outcome::Winner(Seat::Two)
        } else {
            Outcome::Tie
        }
    }
}
