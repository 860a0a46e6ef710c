//! Coin economy and power-up bookkeeping.
//!
//! Every operation is a pure transform: it reads a [`GameState`] and returns
//! the next one, or an [`EconomyError`] leaving the caller's state as it was.

use std::sync::LazyLock;

use crate::error::{ErrorSeverity, GameError};
use crate::state::{Difficulty, GameState, Player, PowerUp, PowerUpKind};

/// Seconds granted by an extra-time power-up without an explicit duration.
pub const DEFAULT_EXTRA_TIME: u32 = 30;

/// Events that pay out coins.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum RewardKind {
    WordSubmitted,
    RoundWon,
    GameWon,
    StreakBonus,
    DailyLogin,
}

impl RewardKind {
    /// Coins paid before the difficulty multiplier is applied.
    pub const fn base_reward(self) -> u32 {
        match self {
            RewardKind::WordSubmitted => 2,
            RewardKind::RoundWon => 10,
            RewardKind::GameWon => 25,
            RewardKind::StreakBonus => 5,
            RewardKind::DailyLogin => 5,
        }
    }
}

/// Errors surfaced by purchases and activations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EconomyError {
    #[error("Not enough coins")]
    NotEnoughCoins { cost: u32, coins: u32 },

    #[error("Power-up not found")]
    PowerUpNotFound { id: String },

    #[error("Extra time can only be used on your turn")]
    NotYourTurn { id: String },
}

impl GameError for EconomyError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotEnoughCoins { .. } => "NOT_ENOUGH_COINS",
            Self::PowerUpNotFound { .. } => "POWER_UP_NOT_FOUND",
            Self::NotYourTurn { .. } => "NOT_YOUR_TURN",
        }
    }
}

static CATALOG: LazyLock<Vec<PowerUp>> = LazyLock::new(|| {
    vec![
        PowerUp::new(
            "extra-time-30",
            PowerUpKind::ExtraTime,
            "Extra Time +30s",
            "Add 30 seconds to your current turn",
            10,
            "⏰",
        )
        .with_duration(30),
        PowerUp::new(
            "extra-time-60",
            PowerUpKind::ExtraTime,
            "Extra Time +60s",
            "Add 60 seconds to your current turn",
            18,
            "⏰",
        )
        .with_duration(60),
        PowerUp::new(
            "easy-mode",
            PowerUpKind::EasyMode,
            "Easy Mode",
            "Make the AI use simpler words for 3 turns",
            15,
            "🎯",
        )
        .with_duration(3),
        PowerUp::new(
            "skip-turn",
            PowerUpKind::SkipTurn,
            "Skip Turn",
            "Skip the computer's turn once",
            25,
            "⏭️",
        ),
    ]
});

/// Power-ups offered in the shop.
pub fn catalog() -> &'static [PowerUp] {
    &CATALOG
}

/// Looks up a shop entry by id.
pub fn find_in_catalog(id: &str) -> Option<&'static PowerUp> {
    catalog().iter().find(|item| item.id == id)
}

/// Coins paid for `reward` at `difficulty`, rounded down.
pub fn coins_for(reward: RewardKind, multiplier: f64, difficulty: Difficulty) -> u32 {
    let amount = f64::from(reward.base_reward()) * multiplier * difficulty.coin_multiplier();
    // float-to-int casts saturate, so a negative multiplier pays nothing
    amount.floor() as u32
}

/// Credits the wallet with the coins for `reward`.
pub fn award_coins(state: &GameState, reward: RewardKind, multiplier: f64) -> GameState {
    let mut next = state.clone();
    let amount = coins_for(reward, multiplier, state.difficulty);
    next.wallet.coins = next.wallet.coins.saturating_add(amount);
    next
}

/// Buys one copy of `item` into the wallet.
pub fn purchase_power_up(state: &GameState, item: &PowerUp) -> Result<GameState, EconomyError> {
    let coins = state.wallet.coins;
    let remaining = coins
        .checked_sub(item.cost)
        .ok_or(EconomyError::NotEnoughCoins {
            cost: item.cost,
            coins,
        })?;

    let mut next = state.clone();
    next.wallet.coins = remaining;
    next.wallet.power_ups.push(item.clone());
    Ok(next)
}

/// Consumes one owned copy of power-up `id` and applies its effect.
///
/// Extra time lands on the running turn immediately and is refused outside
/// the human's turn, where the next turn would reset `time_left` anyway. The
/// other kinds are parked in `active_power_ups` until the engine consumes them.
pub fn activate_power_up(state: &GameState, id: &str) -> Result<GameState, EconomyError> {
    let mut next = state.clone();
    let power_up = next
        .wallet
        .take(id)
        .ok_or_else(|| EconomyError::PowerUpNotFound { id: id.to_string() })?;

    match power_up.kind {
        PowerUpKind::ExtraTime => {
            if !state.is_turn_of(Player::Human) {
                return Err(EconomyError::NotYourTurn { id: id.to_string() });
            }
            let extra = power_up.duration.unwrap_or(DEFAULT_EXTRA_TIME);
            next.time_left = next.time_left.saturating_add(extra);
        }
        PowerUpKind::EasyMode | PowerUpKind::SkipTurn => {
            next.active_power_ups.push(power_up);
        }
    }

    Ok(next)
}

/// Counts one computer turn off every timed effect.
///
/// Effects without a duration stay until they are consumed.
pub fn update_active_power_ups(state: &GameState) -> GameState {
    let mut next = state.clone();
    next.active_power_ups = state
        .active_power_ups
        .iter()
        .filter_map(|power_up| match power_up.duration {
            Some(turns) if turns <= 1 => None,
            Some(turns) => {
                let mut ticked = power_up.clone();
                ticked.duration = Some(turns - 1);
                Some(ticked)
            }
            None => Some(power_up.clone()),
        })
        .collect();
    next
}

pub fn is_easy_mode_active(state: &GameState) -> bool {
    has_active(state, PowerUpKind::EasyMode)
}

pub fn can_skip_turn(state: &GameState) -> bool {
    has_active(state, PowerUpKind::SkipTurn)
}

/// Spends an active skip-turn: the human plays again with a fresh clock.
///
/// Returns an unchanged copy when no skip-turn is active.
pub fn consume_skip_turn(state: &GameState) -> GameState {
    let mut next = state.clone();
    let Some(index) = next
        .active_power_ups
        .iter()
        .position(|p| p.kind == PowerUpKind::SkipTurn)
    else {
        return next;
    };

    next.active_power_ups.remove(index);
    next.current_player = Player::Human;
    next.time_left = next.base_time_limit;
    next.is_loading = false;
    next.nonce += 1;
    next
}

fn has_active(state: &GameState, kind: PowerUpKind) -> bool {
    state.active_power_ups.iter().any(|p| p.kind == kind)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine;
    use crate::state::{Profile, Wallet};

    fn state_with_coins(coins: u32) -> GameState {
        let profile = Profile {
            wallet: Wallet::with_coins(coins),
            ..Profile::default()
        };
        GameState::new("apple", 10, profile)
    }

    fn item(id: &str) -> &'static PowerUp {
        find_in_catalog(id).unwrap()
    }

    #[test]
    fn purchase_fails_without_enough_coins() {
        let state = state_with_coins(10);
        let priced = PowerUp::new("pricey", PowerUpKind::EasyMode, "Pricey", "", 15, "");

        let err = purchase_power_up(&state, &priced).unwrap_err();

        assert_eq!(err.to_string(), "Not enough coins");
        assert_eq!(state.wallet, Wallet::with_coins(10));
    }

    #[test]
    fn purchase_deducts_cost_and_stores_copy() {
        let state = state_with_coins(30);

        let next = purchase_power_up(&state, item("skip-turn")).unwrap();

        assert_eq!(next.wallet.coins, 5);
        assert_eq!(next.wallet.count("skip-turn"), 1);
    }

    #[test]
    fn purchase_at_exact_balance_leaves_zero() {
        let state = state_with_coins(10);
        let next = purchase_power_up(&state, item("extra-time-30")).unwrap();
        assert_eq!(next.wallet.coins, 0);
    }

    #[test]
    fn activating_unowned_power_up_fails() {
        let state = state_with_coins(50);
        let err = activate_power_up(&state, "easy-mode").unwrap_err();
        assert_eq!(err.to_string(), "Power-up not found");
    }

    #[test]
    fn extra_time_applies_immediately() {
        let state = purchase_power_up(&state_with_coins(50), item("extra-time-60")).unwrap();
        let state = engine::start(&state);

        let next = activate_power_up(&state, "extra-time-60").unwrap();

        assert_eq!(next.time_left, 70);
        assert!(next.wallet.power_ups.is_empty());
        assert!(next.active_power_ups.is_empty());
    }

    #[test]
    fn extra_time_is_kept_when_not_the_human_turn() {
        let owned = purchase_power_up(&state_with_coins(50), item("extra-time-30")).unwrap();
        let computer_turn =
            engine::submit_word(&engine::start(&owned), "eagle", Player::Human).unwrap();

        for state in [&owned, &computer_turn] {
            let err = activate_power_up(state, "extra-time-30").unwrap_err();

            assert_eq!(err.error_code(), "NOT_YOUR_TURN");
            assert!(err.severity().is_recoverable());
            assert_eq!(state.wallet.count("extra-time-30"), 1);
        }
    }

    #[test]
    fn extra_time_without_duration_uses_default() {
        let mut state = engine::start(&state_with_coins(0));
        state.wallet.power_ups.push(PowerUp::new(
            "bare-time",
            PowerUpKind::ExtraTime,
            "Bare",
            "",
            1,
            "",
        ));

        let next = activate_power_up(&state, "bare-time").unwrap();

        assert_eq!(next.time_left, 10 + DEFAULT_EXTRA_TIME);
    }

    #[test]
    fn easy_mode_expires_after_three_computer_turns() {
        let state = purchase_power_up(&state_with_coins(50), item("easy-mode")).unwrap();
        let mut state = activate_power_up(&state, "easy-mode").unwrap();
        assert!(is_easy_mode_active(&state));

        for _ in 0..2 {
            state = update_active_power_ups(&state);
            assert!(is_easy_mode_active(&state));
        }
        state = update_active_power_ups(&state);

        assert!(!is_easy_mode_active(&state));
        assert!(state.active_power_ups.is_empty());
    }

    #[test]
    fn skip_turn_survives_updates_until_consumed() {
        let mut state = state_with_coins(0);
        state.current_player = Player::Computer;
        state.time_left = 2;
        state.active_power_ups.push(item("skip-turn").clone());

        state = update_active_power_ups(&state);
        assert!(can_skip_turn(&state));

        let next = consume_skip_turn(&state);

        assert!(next.active_power_ups.is_empty());
        assert_eq!(next.current_player, Player::Human);
        assert_eq!(next.time_left, next.base_time_limit);
        assert_eq!(next.nonce, state.nonce + 1);
    }

    #[test]
    fn consume_skip_turn_without_one_is_noop() {
        let state = state_with_coins(0);
        assert_eq!(consume_skip_turn(&state), state);
    }

    #[test]
    fn rewards_scale_with_difficulty_and_round_down() {
        assert_eq!(coins_for(RewardKind::WordSubmitted, 1.0, Difficulty::Easy), 2);
        assert_eq!(coins_for(RewardKind::WordSubmitted, 1.0, Difficulty::Normal), 3);
        assert_eq!(coins_for(RewardKind::GameWon, 1.0, Difficulty::Normal), 37);
        assert_eq!(coins_for(RewardKind::RoundWon, 1.0, Difficulty::Hard), 20);
        assert_eq!(coins_for(RewardKind::StreakBonus, 2.0, Difficulty::Easy), 10);
    }

    #[test]
    fn award_adds_to_balance() {
        let mut state = state_with_coins(50);
        state.difficulty = Difficulty::Hard;

        let next = award_coins(&state, RewardKind::DailyLogin, 1.0);

        assert_eq!(next.wallet.coins, 60);
    }
}
