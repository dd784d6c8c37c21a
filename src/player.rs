//! Player state: name, hand and score.

use alloc::collections::VecDeque;
use alloc::string::String;

use crate::card::Card;
use crate::error::PlayError;

/// A player at the table.
///
/// The hand is a queue: cards are played in the order they were received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// Display name.
    name: String,
    /// Cards still to play, front first.
    hand: VecDeque<Card>,
    /// Points won so far.
    score: u32,
}

impl Player {
    /// Creates a player with an empty hand and no points.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: VecDeque::new(),
            score: 0,
        }
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Appends cards to the back of the hand, keeping their order.
    pub fn receive_cards<I>(&mut self, cards: I)
    where
        I: IntoIterator<Item = Card>,
    {
        self.hand.extend(cards);
    }

    /// Removes and returns the card at the front of the hand.
    ///
    /// # Errors
    ///
    /// Returns [`PlayError::EmptyHand`] if the player has no cards.
    pub fn play_top_card(&mut self) -> Result<Card, PlayError> {
        self.hand.pop_front().ok_or(PlayError::EmptyHand)
    }

    /// Returns whether the player still holds cards.
    #[must_use]
    pub fn has_cards(&self) -> bool {
        !self.hand.is_empty()
    }

    /// Returns the number of cards left in the hand.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.hand.len()
    }

    /// Returns the hand, next card first.
    #[must_use]
    pub const fn hand(&self) -> &VecDeque<Card> {
        &self.hand
    }

    /// Adds one point.
    pub const fn award_point(&mut self) {
        self.score += 1;
    }

    /// Returns the current score.
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }
}
