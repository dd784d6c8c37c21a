//! Card types and the rank table.

use core::fmt;
use core::str::FromStr;

use crate::error::CardError;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Spades.
    Spades,
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
}

impl Suit {
    /// All suits, in the order a fresh deck is built.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Hearts, Self::Diamonds, Self::Clubs];

    /// Returns the suit name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Spades => "Spades",
            Self::Hearts => "Hearts",
            Self::Diamonds => "Diamonds",
            Self::Clubs => "Clubs",
        }
    }

    /// Returns the symbol printed after the suit name.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Spades => "🗡️",
            Self::Hearts => "❤️",
            Self::Diamonds => "💎",
            Self::Clubs => "🍀",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name(), self.symbol())
    }
}

/// Face value of a card, from Two up to Ace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FaceValue {
    /// 2.
    Two,
    /// 3.
    Three,
    /// 4.
    Four,
    /// 5.
    Five,
    /// 6.
    Six,
    /// 7.
    Seven,
    /// 8.
    Eight,
    /// 9.
    Nine,
    /// 10.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Ace (highest).
    Ace,
}

impl FaceValue {
    /// All face values, lowest first.
    pub const ALL: [Self; 13] = [
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    /// Returns the rank used for comparison (2..=14).
    ///
    /// Number cards rank as their number; Jack, Queen, King and Ace rank
    /// 11, 12, 13 and 14.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
            Self::Six => 6,
            Self::Seven => 7,
            Self::Eight => 8,
            Self::Nine => 9,
            Self::Ten => 10,
            Self::Jack => 11,
            Self::Queen => 12,
            Self::King => 13,
            Self::Ace => 14,
        }
    }

    /// Returns the face value with the given rank.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidRank`] if `rank` is outside 2..=14.
    pub const fn from_rank(rank: u8) -> Result<Self, CardError> {
        match rank {
            2..=14 => Ok(Self::ALL[(rank - 2) as usize]),
            _ => Err(CardError::InvalidRank),
        }
    }

    /// Returns the short label printed on the card ("2".."10", "J", "Q", "K", "A").
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
            Self::Ace => "A",
        }
    }
}

impl fmt::Display for FaceValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FaceValue {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|face| face.label() == s)
            .ok_or(CardError::InvalidFaceValue)
    }
}

/// A playing card.
///
/// Cards are immutable once built; the rank is always derived from the face
/// value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    suit: Suit,
    face: FaceValue,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(suit: Suit, face: FaceValue) -> Self {
        Self { suit, face }
    }

    /// Creates a card from a face label such as `"10"` or `"Q"`.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidFaceValue`] if the label is not one of the
    /// 13 recognized face values.
    ///
    /// # Example
    ///
    /// ```
    /// use warrs::{Card, CardError, Suit};
    ///
    /// let queen = Card::parse(Suit::Hearts, "Q").unwrap();
    /// assert_eq!(queen.rank(), 12);
    /// assert_eq!(Card::parse(Suit::Hearts, "1"), Err(CardError::InvalidFaceValue));
    /// ```
    pub fn parse(suit: Suit, face: &str) -> Result<Self, CardError> {
        Ok(Self::new(suit, face.parse()?))
    }

    /// Returns the suit.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the face value.
    #[must_use]
    pub const fn face(&self) -> FaceValue {
        self.face
    }

    /// Returns the rank (2..=14).
    #[must_use]
    pub const fn rank(&self) -> u8 {
        self.face.rank()
    }

    /// Returns a readable description such as `"K of Spades 🗡️"`.
    #[must_use]
    pub fn describe(&self) -> alloc::string::String {
        alloc::format!("{self}")
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.face, self.suit)
    }
}

/// Number of cards in a full deck.
pub const DECK_SIZE: usize = 52;

/// Number of cards each player is dealt.
pub const HAND_SIZE: usize = DECK_SIZE / 2;
