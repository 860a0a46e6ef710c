//! Word oracle: produces the computer's next word.
//!
//! [`WordOracle`] asks a [`WordGenerator`] (normally the Gemini client) for a
//! word, extracts and re-validates whatever comes back, and falls back to a
//! static per-letter list on any failure. It never fails outright, so a
//! computer turn always ends with a word in hand.

mod fallback;
mod gemini;
mod generator;
mod prompt;

pub use fallback::{fallback_word, fallback_words};
pub use gemini::{DEFAULT_GEMINI_URL, GeminiConfig, GeminiGenerator};
pub use generator::{WordGenerator, extract_word};
pub use prompt::build_prompt;

use std::sync::{Arc, Mutex};
use std::time::Duration;

use game_core::validation::{self, ValidationError};
use game_core::{Difficulty, GameState, ledger};
use rand::SeedableRng;
use rand::rngs::StdRng;
use thiserror::Error;
use tracing::{debug, warn};

/// Everything a generator needs to propose the next word.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordRequest {
    pub last_word: String,
    pub used_words: Vec<String>,
    pub difficulty: Difficulty,
    pub easy_mode: bool,
}

impl WordRequest {
    /// Builds the request for the computer's turn in `state`.
    pub fn from_state(state: &GameState) -> Self {
        Self {
            last_word: state.current_word.clone(),
            used_words: state.used_words().map(str::to_string).collect(),
            difficulty: state.difficulty,
            easy_mode: ledger::is_easy_mode_active(state),
        }
    }

    /// Letter the generated word must start with.
    pub fn required_letter(&self) -> char {
        validation::last_letter(&self.last_word).unwrap_or('a')
    }
}

/// Why a generated word could not be used.
#[derive(Debug, Error)]
pub enum OracleError {
    #[error("no word generator configured")]
    NotConfigured,

    #[error("word request timed out after {0:?}")]
    Timeout(Duration),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("generator responded with status {status}")]
    Status { status: u16 },

    #[error("malformed generator response: {0}")]
    MalformedResponse(String),

    #[error("generated word {word:?} rejected: {reason}")]
    InvalidWord {
        word: String,
        reason: ValidationError,
    },
}

/// Oracle tuning.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OracleConfig {
    /// Upper bound on a single generator call. Kept below the turn limit.
    pub timeout: Duration,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_millis(8_000),
        }
    }
}

/// Word source for the computer player.
#[derive(Clone)]
pub struct WordOracle {
    generator: Option<Arc<dyn WordGenerator>>,
    config: OracleConfig,
    rng: Arc<Mutex<StdRng>>,
}

impl WordOracle {
    pub fn new(generator: Arc<dyn WordGenerator>, config: OracleConfig) -> Self {
        Self {
            generator: Some(generator),
            config,
            rng: Arc::new(Mutex::new(StdRng::from_entropy())),
        }
    }

    /// An oracle that always answers from the fallback list.
    pub fn fallback_only() -> Self {
        Self {
            generator: None,
            config: OracleConfig::default(),
            rng: Arc::new(Mutex::new(StdRng::from_entropy())),
        }
    }

    /// Reseeds the fallback picker, for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = Arc::new(Mutex::new(StdRng::seed_from_u64(seed)));
        self
    }

    pub fn config(&self) -> &OracleConfig {
        &self.config
    }

    /// Returns the computer's word. Falls back on any generator failure.
    pub async fn next_word(&self, request: &WordRequest) -> String {
        match self.generate(request).await {
            Ok(word) => {
                debug!(%word, "Generator produced word");
                word
            }
            Err(error) => {
                let word = self.fallback(request);
                warn!(%error, fallback = %word, "Word generation failed, using fallback");
                word
            }
        }
    }

    /// One generator attempt, validated against the request. No retry.
    pub async fn generate(&self, request: &WordRequest) -> Result<String, OracleError> {
        let generator = self.generator.as_ref().ok_or(OracleError::NotConfigured)?;

        let raw = tokio::time::timeout(self.config.timeout, generator.generate(request))
            .await
            .map_err(|_| OracleError::Timeout(self.config.timeout))??;

        let word = extract_word(&raw)
            .ok_or_else(|| OracleError::MalformedResponse(raw.clone()))?;

        validation::validate_word(
            &word,
            request.required_letter(),
            request.used_words.iter().map(String::as_str),
        )
        .map_err(|reason| OracleError::InvalidWord {
            word: word.clone(),
            reason,
        })?;

        Ok(word)
    }

    fn fallback(&self, request: &WordRequest) -> String {
        let mut rng = self
            .rng
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        fallback_word(request.required_letter(), &request.used_words, &mut *rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct Fixed(&'static str);

    #[async_trait]
    impl WordGenerator for Fixed {
        async fn generate(&self, _request: &WordRequest) -> Result<String, OracleError> {
            Ok(self.0.to_string())
        }
    }

    struct Stalled;

    #[async_trait]
    impl WordGenerator for Stalled {
        async fn generate(&self, _request: &WordRequest) -> Result<String, OracleError> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok("never".to_string())
        }
    }

    fn request(last_word: &str, used: &[&str]) -> WordRequest {
        WordRequest {
            last_word: last_word.to_string(),
            used_words: used.iter().map(|w| w.to_string()).collect(),
            difficulty: Difficulty::Normal,
            easy_mode: false,
        }
    }

    #[tokio::test]
    async fn generated_word_is_cleaned_and_accepted() {
        let oracle = WordOracle::new(
            Arc::new(Fixed("  Tiger.\nThat is my word")),
            OracleConfig::default(),
        );

        let word = oracle.next_word(&request("elephant", &["apple", "elephant"])).await;

        assert_eq!(word, "tiger");
    }

    #[tokio::test]
    async fn wrong_letter_from_generator_is_rejected() {
        let oracle = WordOracle::new(Arc::new(Fixed("zebra")), OracleConfig::default());

        let err = oracle
            .generate(&request("elephant", &["elephant"]))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            OracleError::InvalidWord {
                reason: ValidationError::WrongFirstLetter { expected: 't' },
                ..
            }
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn timeout_resolves_to_unused_fallback() {
        let oracle = WordOracle::new(Arc::new(Stalled), OracleConfig::default()).with_seed(3);
        let used = ["apple", "elephant", "tree", "trust", "time", "together"];

        let word = oracle.next_word(&request("elephant", &used)).await;

        assert_eq!(word, "treasure");
    }

    #[tokio::test]
    async fn missing_generator_uses_fallback() {
        let oracle = WordOracle::fallback_only().with_seed(1);

        let word = oracle.next_word(&request("dragon", &[])).await;

        assert!(fallback_words('n').contains(&word.as_str()));
    }

    #[test]
    fn request_from_state_reflects_easy_mode() {
        let mut state = GameState::new("apple", 10, game_core::Profile::default());
        state
            .active_power_ups
            .push(ledger::find_in_catalog("easy-mode").unwrap().clone());

        let request = WordRequest::from_state(&state);

        assert!(request.easy_mode);
        assert_eq!(request.required_letter(), 'e');
        assert_eq!(request.used_words, vec!["apple".to_string()]);
    }
}
