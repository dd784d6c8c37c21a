//! Error types for game operations.

use thiserror::Error;

use crate::result::Seat;

/// Errors that can occur when building a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Face label is not one of 2-10, J, Q, K, A.
    #[error("unrecognized face value")]
    InvalidFaceValue,
    /// Rank is outside 2..=14.
    #[error("rank must be between 2 and 14")]
    InvalidRank,
}

/// Errors that can occur when building a deck from a fixed arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The arrangement does not hold a full deck.
    #[error("expected {expected} cards, found {found}")]
    WrongCardCount {
        /// Required number of cards.
        expected: usize,
        /// Number of cards supplied.
        found: usize,
    },
    /// The same card appears more than once.
    #[error("duplicate card in arrangement")]
    DuplicateCard,
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// The deck does not hold exactly one full deck (already dealt, or altered).
    #[error("cannot deal: expected {expected} cards in the deck, found {found}")]
    WrongCardCount {
        /// Required number of cards.
        expected: usize,
        /// Number of cards in the deck.
        found: usize,
    },
}

/// Errors that can occur when a player plays a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    /// The player has no cards left.
    #[error("hand is empty")]
    EmptyHand,
}

/// Errors that can occur while driving a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// Invalid game state for this operation.
    #[error("invalid game state for this operation")]
    InvalidState,
    /// Dealing the deck failed.
    #[error(transparent)]
    Deal(#[from] DealError),
    /// A player could not play a card.
    #[error("player {seat} could not play: {source}")]
    Play {
        /// The seat that failed to play.
        seat: Seat,
        /// The underlying failure.
        source: PlayError,
    },
}
