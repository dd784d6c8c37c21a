//! Game configuration options.

use alloc::string::String;

/// Configuration options for a game of War.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use warrs::GameOptions;
///
/// let options = GameOptions::default()
///     .with_player_one("Alice")
///     .with_player_two("Bob");
/// assert_eq!(options.player_one, "Alice");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Name of the first player.
    pub player_one: String,
    /// Name of the second player.
    pub player_two: String,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            player_one: String::from("Player 1"),
            player_two: String::from("Player 2"),
        }
    }
}

impl GameOptions {
    /// Sets the first player's name.
    ///
    /// # Example
    ///
    /// ```
    /// use warrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_player_one("Ada");
    /// assert_eq!(options.player_one, "Ada");
    /// ```
    #[must_use]
    pub fn with_player_one(mut self, name: impl Into<String>) -> Self {
        self.player_one = name.into();
        self
    }

    /// Sets the second player's name.
    ///
    /// # Example
    ///
    /// ```
    /// use warrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_player_two("Grace");
    /// assert_eq!(options.player_two, "Grace");
    /// ```
    #[must_use]
    pub fn with_player_two(mut self, name: impl Into<String>) -> Self {
        self.player_two = name.into();
        self
    }
}
