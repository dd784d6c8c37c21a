use tracing::{debug, info, instrument};

use crate::card::Card;
use crate::error::{GameError, PlayError};
use crate::result::{GameResult, Outcome, RoundResult, Seat};

use super::{Game, GameState};

impl Game {
    /// Compares two played cards by rank.
    ///
    /// The higher rank wins; equal ranks tie regardless of suit.
    ///
    /// # Example
    ///
    /// ```
    /// use warrs::{Card, FaceValue, Game, Outcome, Seat, Suit};
    ///
    /// let ten = Card::new(Suit::Hearts, FaceValue::Ten);
    /// let five = Card::new(Suit::Clubs, FaceValue::Five);
    /// assert_eq!(Game::resolve_round(ten, five), Outcome::Winner(Seat::One));
    /// ```
    #[must_use]
    pub const fn resolve_round(first: Card, second: Card) -> Outcome {
        let (first, second) = (first.rank(), second.rank());
        if first > second {
            Outcome::Winner(Seat::One)
        } else if second > first {
            Outcome::Winner(Seat::Two)
        } else {
            Outcome::Tie
        }
    }

    fn play_card(&mut self, seat: Seat) -> Result<Card, GameError> {
        self.players[seat.index()]
            .play_top_card()
            .map_err(|source| GameError::Play { seat, source })
    }

    /// Plays one round: each player turns over their top card and the higher
    /// rank scores a point.
    ///
    /// The game finishes once both hands are empty.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidState`] unless the game is `Playing`, and
    /// [`GameError::Play`] if either hand is empty while the other is not.
    pub fn play_round(&mut self) -> Result<RoundResult, GameError> {
        if self.state != GameState::Playing {
            return Err(GameError::InvalidState);
        }

        // Hands must stay untouched when either seat is out of cards.
        for seat in Seat::BOTH {
            if !self.players[seat.index()].has_cards() {
                return Err(GameError::Play {
                    seat,
                    source: PlayError::EmptyHand,
                });
            }
        }

        // Both hands were checked above, so neither play can fail here.
        let first = self.play_card(Seat::One)?;
        let second = self.play_card(Seat::Two)?;

        let outcome = Self::resolve_round(first, second);
        if let Outcome::Winner(seat) = outcome {
            self.players[seat.index()].award_point();
        }

        let result = RoundResult {
            round: self.rounds.len() as u32 + 1,
            cards: [first, second],
            outcome,
            scores: self.scores(),
        };
        self.rounds.push(result);

        debug!(
            round = result.round,
            first = %first,
            second = %second,
            outcome = ?outcome,
            "round resolved"
        );

        if self.players.iter().all(|player| !player.has_cards()) {
            self.state = GameState::Finished;
            info!(
                rounds = self.rounds.len(),
                scores = ?self.scores(),
                outcome = ?self.leader(),
                "game finished"
            );
        }

        Ok(result)
    }

    /// Plays the game through to the end and returns the final result.
    ///
    /// Deals first if the game is still in `Setup`.
    ///
    /// # Errors
    ///
    /// Returns an error if dealing or any round fails, or if the game has
    /// already finished.
    ///
    /// # Example
    ///
    /// ```
    /// use warrs::{Game, GameOptions};
    ///
    /// let mut game = Game::new(GameOptions::default(), 7);
    /// let result = game.play_to_end().unwrap();
    /// assert_eq!(result.rounds, 26);
    /// ```
    #[instrument(level = "debug", skip_all)]
    pub fn play_to_end(&mut self) -> Result<GameResult, GameError> {
        if self.state == GameState::Setup {
            self.setup()?;
        }
        if self.state != GameState::Playing {
            return Err(GameError::InvalidState);
        }

        while self.state == GameState::Playing {
            self.play_round()?;
        }

        self.result().ok_or(GameError::InvalidState)
    }

    /// Returns the final result, or `None` if the game has not finished.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        if self.state != GameState::Finished {
            return None;
        }

        Some(GameResult {
            scores: self.scores(),
            ties: self.ties(),
            rounds: self.rounds.len() as u32,
            outcome: self.leader(),
        })
    }
}
