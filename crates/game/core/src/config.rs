/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Seconds each player gets per turn.
    pub time_limit: u32,
    /// Pool the seed word of every round is drawn from.
    pub initial_words: Vec<String>,
    /// Coins in a brand-new wallet.
    pub starting_coins: u32,
    /// Round wins needed before the game-won bonus can be paid.
    pub games_to_win: u32,
}

impl GameConfig {
    // ===== word format bounds =====
    pub const MIN_WORD_LENGTH: usize = 2;
    pub const MAX_WORD_LENGTH: usize = 20;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_TIME_LIMIT: u32 = 10;
    pub const DEFAULT_STARTING_COINS: u32 = 50;
    pub const DEFAULT_GAMES_TO_WIN: u32 = 3;
    pub const DEFAULT_INITIAL_WORDS: [&'static str; 5] =
        ["apple", "elephant", "tiger", "rainbow", "ocean"];

    pub fn new() -> Self {
        Self {
            time_limit: Self::DEFAULT_TIME_LIMIT,
            initial_words: Self::DEFAULT_INITIAL_WORDS
                .iter()
                .map(|word| word.to_string())
                .collect(),
            starting_coins: Self::DEFAULT_STARTING_COINS,
            games_to_win: Self::DEFAULT_GAMES_TO_WIN,
        }
    }

    pub fn with_time_limit(time_limit: u32) -> Self {
        Self {
            time_limit,
            ..Self::new()
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
