/// How hard the computer opponent plays.
///
/// Affects the words the oracle is asked for and the coin multiplier.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

/// Static tuning attached to each [`Difficulty`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DifficultySettings {
    pub name: &'static str,
    pub description: &'static str,
    /// Word complexity requested from the oracle, on a 1-10 scale.
    pub word_complexity: u8,
    pub coin_multiplier: f64,
}

impl Difficulty {
    pub const fn settings(self) -> DifficultySettings {
        match self {
            Difficulty::Easy => DifficultySettings {
                name: "Easy",
                description: "AI uses simple, common words",
                word_complexity: 3,
                coin_multiplier: 1.0,
            },
            Difficulty::Normal => DifficultySettings {
                name: "Normal",
                description: "AI uses moderate difficulty words",
                word_complexity: 6,
                coin_multiplier: 1.5,
            },
            Difficulty::Hard => DifficultySettings {
                name: "Hard",
                description: "AI uses complex, challenging words",
                word_complexity: 9,
                coin_multiplier: 2.0,
            },
        }
    }

    pub const fn coin_multiplier(self) -> f64 {
        self.settings().coin_multiplier
    }
}
