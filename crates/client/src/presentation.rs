//! Text rendering of state and events.
use std::fmt::Write;

use game_core::{GameState, GameStatus, Player, ledger};
use runtime::{GameEvent, RuntimeError};

/// Seconds left at which the countdown starts being announced.
const COUNTDOWN_WARNING: u32 = 3;

pub const HELP: &str = "\
Commands:
  /start              start a round
  /reset              new chain (keeps coins and score)
  /shop               list power-ups
  /buy <id>           buy a power-up
  /use <id>           activate an owned power-up
  /skip               spend an active skip-turn
  /difficulty <level> easy, normal or hard
  /status             show the current game
  /help               this text
  /quit               leave
Anything else is played as your word.";

pub fn render_status(state: &GameState) -> String {
    let chain = state
        .word_chain
        .iter()
        .map(|entry| entry.word.as_str())
        .collect::<Vec<_>>()
        .join(" → ");

    let mut out = String::new();
    let _ = writeln!(out, "Chain: {chain}");
    match state.status {
        GameStatus::Idle => {
            let _ = writeln!(out, "Type /start to play.");
        }
        GameStatus::Playing if state.current_player == Player::Human => {
            let _ = writeln!(
                out,
                "Your turn: a word starting with '{}' ({}s)",
                state.expected_first_letter().to_ascii_uppercase(),
                state.time_left
            );
        }
        GameStatus::Playing => {
            let _ = writeln!(out, "Computer's turn.");
        }
        GameStatus::GameOver => {
            let _ = writeln!(out, "Round over. /start for another, /reset for a new chain.");
        }
    }
    if let Some(error) = &state.error {
        let _ = writeln!(out, "! {error}");
    }
    let _ = write!(
        out,
        "Score {}-{} | Coins {} | Difficulty {}",
        state.score.player, state.score.computer, state.wallet.coins, state.difficulty
    );
    if !state.active_power_ups.is_empty() {
        let active = state
            .active_power_ups
            .iter()
            .map(|power_up| match power_up.duration {
                Some(turns) => format!("{} ({turns})", power_up.name),
                None => power_up.name.clone(),
            })
            .collect::<Vec<_>>()
            .join(", ");
        let _ = write!(out, " | Active: {active}");
    }
    out
}

pub fn render_shop(state: &GameState) -> String {
    let mut out = format!("Coins: {}\n", state.wallet.coins);
    for item in ledger::catalog() {
        let _ = writeln!(
            out,
            "  {} {:<14} {:>3} coins  owned {}  {}",
            item.icon,
            item.id,
            item.cost,
            state.wallet.count(&item.id),
            item.description
        );
    }
    out
}

/// One line for events worth telling the player about.
pub fn describe_event(event: &GameEvent) -> Option<String> {
    match event {
        GameEvent::WordAccepted {
            player: Player::Computer,
            word,
            ..
        } => Some(format!("Computer: {word}")),
        GameEvent::WordRejected {
            player: Player::Computer,
            word,
            reason,
        } => Some(format!("Computer played '{word}' ({reason})")),
        GameEvent::ComputerThinking { .. } => Some("Computer is thinking...".to_string()),
        GameEvent::TurnSkipped { .. } => Some("Computer's turn skipped.".to_string()),
        GameEvent::RoundEnded { winner, score } => {
            let verdict = match winner {
                Player::Human => "You win the round!",
                Player::Computer => "Computer wins the round.",
            };
            Some(format!("{verdict} Score {}-{}", score.player, score.computer))
        }
        GameEvent::TimerTick { remaining, .. } if *remaining <= COUNTDOWN_WARNING => {
            Some(format!("{remaining}s left"))
        }
        _ => None,
    }
}

/// Player-facing line for a refused request; `None` for infrastructure
/// failures, which the caller should propagate instead.
pub fn describe_rejection(error: &RuntimeError) -> Option<String> {
    let severity = error.severity()?;
    if severity.ends_round() {
        Some(format!("✗ {error} (round lost)"))
    } else if severity.is_recoverable() {
        Some(format!("✗ {error}"))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{Profile, Score, TurnTag, engine};

    #[test]
    fn status_shows_required_letter() {
        let state = engine::start(&GameState::new("apple", 10, Profile::new_player(50)));

        let text = render_status(&state);

        assert!(text.starts_with("Chain: apple\n"));
        assert!(text.contains("starting with 'E' (10s)"));
        assert!(text.ends_with("Score 0-0 | Coins 50 | Difficulty normal"));
    }

    #[test]
    fn shop_lists_whole_catalog() {
        let state = GameState::new("apple", 10, Profile::new_player(50));

        let text = render_shop(&state);

        for id in ["extra-time-30", "extra-time-60", "easy-mode", "skip-turn"] {
            assert!(text.contains(id), "missing {id}");
        }
    }

    #[test]
    fn quiet_events_are_not_described() {
        let tag = TurnTag::default();
        assert_eq!(
            describe_event(&GameEvent::TimerTick { tag, remaining: 7 }),
            None
        );
        assert_eq!(
            describe_event(&GameEvent::TimerTick { tag, remaining: 2 }).as_deref(),
            Some("2s left")
        );
        assert_eq!(
            describe_event(&GameEvent::RoundEnded {
                winner: Player::Human,
                score: Score::new(2, 1),
            })
            .as_deref(),
            Some("You win the round! Score 2-1")
        );
    }

    #[test]
    fn rejections_say_whether_the_round_was_lost() {
        use game_core::{EconomyError, SubmitError, ValidationError};

        let invalid = RuntimeError::from(SubmitError::Invalid(ValidationError::Empty));
        let broke = RuntimeError::from(EconomyError::NotEnoughCoins { cost: 25, coins: 5 });

        assert_eq!(
            describe_rejection(&invalid).as_deref(),
            Some("✗ Word cannot be empty (round lost)")
        );
        assert_eq!(describe_rejection(&broke).as_deref(), Some("✗ Not enough coins"));
        assert_eq!(describe_rejection(&RuntimeError::CommandChannelClosed), None);
    }
}
