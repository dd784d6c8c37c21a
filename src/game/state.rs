//! Game state types.

/// Game state.
///
/// A game moves `Setup` -> `Playing` -> `Finished` and never goes back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Deck built and shuffled, waiting to be dealt.
    Setup,
    /// Hands dealt; rounds are being played.
    Playing,
    /// Both hands are exhausted.
    Finished,
}
