//! A two-player War card game engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that builds and shuffles a 52-card
//! [`Deck`], deals half to each [`Player`], and plays 26 rounds in which the
//! higher-ranked card scores a point. Ties score nothing.
//!
//! # Example
//!
//! ```
//! use warrs::{Game, GameOptions, Outcome};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! let result = game.play_to_end().unwrap();
//! let [one, two] = result.scores;
//! assert_eq!(one + two + result.ties, 26);
//! match result.outcome {
//!     Outcome::Winner(seat) => println!("{} wins", game.player(seat).name()),
//!     Outcome::Tie => println!("tie"),
//! }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod options;
pub mod player;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, FaceValue, HAND_SIZE, Suit};
pub use deck::Deck;
pub use error::{CardError, DealError, DeckError, GameError, PlayError};
pub use game::{Game, GameState};
pub use options::GameOptions;
pub use player::Player;
pub use result::{GameResult, Outcome, RoundResult, Seat};
