//! Line-oriented terminal frontend.
//!
//! Reads one command or word per line from stdin and prints state and event
//! updates as they arrive from the runtime.
use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::broadcast::error::RecvError;

use game_core::{Difficulty, Player};
use runtime::{GameEvent, RuntimeHandle};

use crate::presentation::{
    HELP, describe_event, describe_rejection, render_shop, render_status,
};

/// A parsed line of player input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Start,
    Reset,
    Shop,
    Buy(String),
    Use(String),
    Skip,
    SetDifficulty(Difficulty),
    Status,
    Help,
    Quit,
    Word(String),
    Empty,
    /// A command that could not be understood, with a hint.
    Invalid(String),
}

pub fn parse_input(line: &str) -> Input {
    let line = line.trim();
    if line.is_empty() {
        return Input::Empty;
    }
    let Some(command) = line.strip_prefix('/') else {
        return Input::Word(line.to_string());
    };

    let mut parts = command.split_whitespace();
    let name = parts.next().unwrap_or_default().to_ascii_lowercase();
    let argument = parts.next().map(str::to_string);

    match (name.as_str(), argument) {
        ("start", _) => Input::Start,
        ("reset", _) => Input::Reset,
        ("shop", _) => Input::Shop,
        ("buy", Some(id)) => Input::Buy(id),
        ("use", Some(id)) => Input::Use(id),
        ("buy" | "use", None) => Input::Invalid(format!("usage: /{name} <power-up id>")),
        ("skip", _) => Input::Skip,
        ("difficulty", Some(level)) => match level.parse() {
            Ok(difficulty) => Input::SetDifficulty(difficulty),
            Err(_) => Input::Invalid(format!("unknown difficulty '{level}'")),
        },
        ("difficulty", None) => Input::Invalid("usage: /difficulty easy|normal|hard".into()),
        ("status", _) => Input::Status,
        ("help", _) => Input::Help,
        ("quit" | "exit", _) => Input::Quit,
        _ => Input::Invalid(format!("unknown command '/{name}', try /help")),
    }
}

/// Runs until the player quits or stdin closes.
pub async fn run(handle: RuntimeHandle) -> Result<()> {
    let mut events = handle.subscribe();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("Word Train: chain words by their last letter. /help for commands.");
    println!("{}", render_status(&handle.query_state().await?));

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                let input = parse_input(&line);
                if input == Input::Quit {
                    break;
                }
                dispatch(&handle, input).await?;
            }
            event = events.recv() => match event {
                Ok(event) => on_event(&event),
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "Frontend fell behind on events");
                }
                Err(RecvError::Closed) => break,
            },
        }
    }

    tracing::info!("Frontend closed");
    Ok(())
}

fn on_event(event: &GameEvent) {
    if let Some(line) = describe_event(event) {
        println!("{line}");
    }
    if let GameEvent::StateChanged(state) = event
        && state.is_turn_of(Player::Human)
        && state.time_left == state.base_time_limit
    {
        println!("{}", render_status(state));
    }
}

/// Executes one input. Gameplay rejections are printed, not returned.
async fn dispatch(handle: &RuntimeHandle, input: Input) -> Result<()> {
    let outcome = match input {
        Input::Start => handle.start().await.map(|_| ()),
        Input::Reset => handle
            .reset_round()
            .await
            .map(|state| println!("{}", render_status(&state))),
        Input::Shop => handle
            .query_state()
            .await
            .map(|state| print!("{}", render_shop(&state))),
        Input::Buy(id) => handle
            .purchase_power_up(id)
            .await
            .map(|state| println!("Bought. Coins left: {}", state.wallet.coins)),
        Input::Use(id) => handle
            .activate_power_up(id)
            .await
            .map(|state| println!("{}", render_status(&state))),
        Input::Skip => handle.consume_skip_turn().await.map(|_| ()),
        Input::SetDifficulty(difficulty) => handle
            .set_difficulty(difficulty)
            .await
            .map(|state| println!("Difficulty: {}", state.difficulty.settings().description)),
        Input::Status => handle
            .query_state()
            .await
            .map(|state| println!("{}", render_status(&state))),
        Input::Help => {
            println!("{HELP}");
            Ok(())
        }
        Input::Word(word) => handle.submit_word(word).await.map(|_| ()),
        Input::Invalid(hint) => {
            println!("{hint}");
            Ok(())
        }
        Input::Empty | Input::Quit => Ok(()),
    };

    match outcome {
        Ok(()) => Ok(()),
        Err(error) => match describe_rejection(&error) {
            Some(line) => {
                println!("{line}");
                Ok(())
            }
            None => Err(error.into()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_a_word() {
        assert_eq!(parse_input("  Elephant \n"), Input::Word("Elephant".into()));
        assert_eq!(parse_input("   "), Input::Empty);
    }

    #[test]
    fn commands_parse_with_arguments() {
        assert_eq!(parse_input("/START"), Input::Start);
        assert_eq!(parse_input("/buy skip-turn"), Input::Buy("skip-turn".into()));
        assert_eq!(
            parse_input("/difficulty Hard"),
            Input::SetDifficulty(Difficulty::Hard)
        );
        assert_eq!(parse_input("/exit"), Input::Quit);
    }

    #[test]
    fn malformed_commands_get_hints() {
        assert!(matches!(parse_input("/use"), Input::Invalid(_)));
        assert!(matches!(parse_input("/difficulty extreme"), Input::Invalid(_)));
        assert!(matches!(parse_input("/dance"), Input::Invalid(_)));
        assert!(matches!(parse_input("/"), Input::Invalid(_)));
    }
}
