//! The 52-card deck: build, shuffle, deal.

use alloc::vec::Vec;
use core::mem;

use rand::Rng;
use tracing::debug;

use crate::card::{Card, DECK_SIZE, FaceValue, HAND_SIZE, Suit};
use crate::error::{DealError, DeckError};

/// A deck of playing cards.
///
/// A deck starts with one card per suit and face value. It is dealt exactly
/// once; dealing moves every card out and leaves the deck empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a full, unshuffled deck.
    ///
    /// Cards are ordered suit-major ([`Suit::ALL`]) then by face value
    /// ([`FaceValue::ALL`]).
    #[must_use]
    pub fn new() -> Self {
        Self {
            cards: build_full_deck(),
        }
    }

    /// Creates a full deck shuffled with `rng`.
    ///
    /// # Example
    ///
    /// ```
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaCha8Rng;
    /// use warrs::{DECK_SIZE, Deck};
    ///
    /// let mut rng = ChaCha8Rng::seed_from_u64(7);
    /// let deck = Deck::shuffled(&mut rng);
    /// assert_eq!(deck.len(), DECK_SIZE);
    /// ```
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::new();
        deck.shuffle(rng);
        deck
    }

    /// Creates a deck with a fixed arrangement, first card on top.
    ///
    /// # Errors
    ///
    /// Returns an error unless `cards` holds exactly 52 distinct cards.
    pub fn from_cards(cards: Vec<Card>) -> Result<Self, DeckError> {
        if cards.len() != DECK_SIZE {
            return Err(DeckError::WrongCardCount {
                expected: DECK_SIZE,
                found: cards.len(),
            });
        }

        let mut sorted = cards.clone();
        sorted.sort_unstable();
        if sorted.windows(2).any(|pair| pair[0] == pair[1]) {
            return Err(DeckError::DuplicateCard);
        }

        Ok(Self { cards })
    }

    /// Shuffles the deck in place (Fisher-Yates).
    ///
    /// Walks from the last position down to 1, swapping each position with a
    /// uniformly chosen position at or before it.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for i in (1..self.cards.len()).rev() {
            let j = rng.random_range(0..=i);
            self.cards.swap(i, j);
        }
        debug!(cards = self.cards.len(), "deck shuffled");
    }

    /// Splits the deck into two hands of 26 cards.
    ///
    /// The first 26 cards form the first hand and the rest the second. The
    /// deck is empty afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::WrongCardCount`] if the deck does not hold exactly
    /// 52 cards, for example when it has already been dealt.
    pub fn deal(&mut self) -> Result<(Vec<Card>, Vec<Card>), DealError> {
        if self.cards.len() != DECK_SIZE {
            return Err(DealError::WrongCardCount {
                expected: DECK_SIZE,
                found: self.cards.len(),
            });
        }

        let mut first = mem::take(&mut self.cards);
        let second = first.split_off(HAND_SIZE);
        debug!(first = first.len(), second = second.len(), "deck dealt");

        Ok((first, second))
    }

    /// Returns the cards in the deck, top first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

fn build_full_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);

    for suit in Suit::ALL {
        for face in FaceValue::ALL {
            cards.push(Card::new(suit, face));
        }
    }

    cards
}
