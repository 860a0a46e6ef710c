use super::PowerUp;

/// Persisted coin balance and owned-but-unused power-ups.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Wallet {
    pub coins: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub power_ups: Vec<PowerUp>,
}

impl Wallet {
    pub fn with_coins(coins: u32) -> Self {
        Self {
            coins,
            power_ups: Vec::new(),
        }
    }

    /// Number of owned copies of the power-up with `id`.
    pub fn count(&self, id: &str) -> usize {
        self.power_ups.iter().filter(|p| p.id == id).count()
    }

    /// Removes and returns one owned copy of the power-up with `id`.
    pub(crate) fn take(&mut self, id: &str) -> Option<PowerUp> {
        let index = self.power_ups.iter().position(|p| p.id == id)?;
        Some(self.power_ups.remove(index))
    }
}
