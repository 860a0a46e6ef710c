//! Power-up catalog entries.

/// Effect family of a power-up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[strum(serialize_all = "camelCase")]
pub enum PowerUpKind {
    /// Adds seconds to the current turn as soon as it is activated.
    ExtraTime,
    /// Asks the oracle for simpler words for a number of computer turns.
    EasyMode,
    /// Lets the human play again instead of the computer, once.
    SkipTurn,
}

/// A purchasable power-up.
///
/// Catalog entries are templates; wallet and active entries are copies.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PowerUp {
    pub id: String,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: PowerUpKind,
    pub name: String,
    pub description: String,
    pub cost: u32,
    pub icon: String,
    /// Seconds for [`PowerUpKind::ExtraTime`], computer turns for
    /// [`PowerUpKind::EasyMode`], absent for single-use effects.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub duration: Option<u32>,
}

impl PowerUp {
    pub fn new(
        id: impl Into<String>,
        kind: PowerUpKind,
        name: impl Into<String>,
        description: impl Into<String>,
        cost: u32,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            name: name.into(),
            description: description.into(),
            cost,
            icon: icon.into(),
            duration: None,
        }
    }

    #[must_use]
    pub fn with_duration(mut self, duration: u32) -> Self {
        self.duration = Some(duration);
        self
    }
}
