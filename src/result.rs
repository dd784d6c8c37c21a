//! Round and game result types.

use core::fmt;

use crate::card::Card;

/// One of the two seats at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    /// The first player, dealt the top half of the deck.
    One,
    /// The second player, dealt the bottom half of the deck.
    Two,
}

impl Seat {
    /// Both seats, in play order.
    pub const BOTH: [Self; 2] = [Self::One, Self::Two];

    /// Returns the index of this seat (0 or 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::One => 0,
            Self::Two => 1,
        }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::One => f.write_str("one"),
            Self::Two => f.write_str("two"),
        }
    }
}

/// Outcome of a round or of a whole game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The given seat won.
    Winner(Seat),
    /// Neither seat won.
    Tie,
}

impl Outcome {
    /// Returns the winning seat, if any.
    #[must_use]
    pub const fn winner(self) -> Option<Seat> {
        match self {
            Self::Winner(seat) => Some(seat),
            Self::Tie => None,
        }
    }

    /// Returns whether nobody won.
    #[must_use]
    pub const fn is_tie(self) -> bool {
        matches!(self, Self::Tie)
    }
}

/// Result of a single round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// Round number, starting at 1.
    pub round: u32,
    /// Cards played, indexed by [`Seat::index`].
    pub cards: [Card; 2],
    /// Who took the point.
    pub outcome: Outcome,
    /// Scores after this round, indexed by [`Seat::index`].
    pub scores: [u32; 2],
}

impl RoundResult {
    /// Returns the card played by `seat`.
    #[must_use]
    pub const fn card(&self, seat: Seat) -> Card {
        self.cards[seat.index()]
    }

    /// Returns the running score of `seat` after this round.
    #[must_use]
    pub const fn score(&self, seat: Seat) -> u32 {
        self.scores[seat.index()]
    }
}

/// Result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResult {
    /// Final scores, indexed by [`Seat::index`].
    pub scores: [u32; 2],
    /// Number of rounds in which no point was awarded.
    pub ties: u32,
    /// Number of rounds played.
    pub rounds: u32,
    /// Seat with the strictly higher score, or a tie.
    pub outcome: Outcome,
}

impl GameResult {
    /// Returns the final score of `seat`.
    #[must_use]
    pub const fn score(&self, seat: Seat) -> u32 {
        self.scores[seat.index()]
    }
}
