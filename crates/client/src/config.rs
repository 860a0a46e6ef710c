//! Client configuration loaded from the environment.
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use game_core::{Difficulty, GameConfig};
use runtime::{GeminiConfig, OracleConfig, RuntimeConfig};

/// Everything the binary needs to assemble a runtime and a frontend.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub gemini_api_key: Option<String>,
    pub gemini_api_url: Option<String>,
    pub oracle_timeout: Duration,
    pub computer_delay: Duration,
    pub time_limit: u32,
    pub data_dir: Option<PathBuf>,
    pub log_dir: Option<PathBuf>,
    pub difficulty: Option<Difficulty>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            gemini_api_key: None,
            gemini_api_url: None,
            oracle_timeout: Duration::from_millis(8_000),
            computer_delay: Duration::from_millis(1_000),
            time_limit: GameConfig::DEFAULT_TIME_LIMIT,
            data_dir: None,
            log_dir: None,
            difficulty: None,
        }
    }
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `GEMINI_API_KEY` - Gemini API key; without it the computer uses fallback words
    /// - `GEMINI_API_URL` - Override for the `generateContent` endpoint
    /// - `ORACLE_TIMEOUT_MS` - Word generation timeout (default: 8000)
    /// - `COMPUTER_DELAY_MS` - Pause before the computer answers (default: 1000)
    /// - `TURN_TIME_LIMIT` - Seconds per turn (default: 10)
    /// - `WORD_TRAIN_DATA_DIR` - Save directory (default: platform data dir)
    /// - `WORD_TRAIN_LOG_DIR` - Log directory (default: platform cache dir)
    /// - `WORD_TRAIN_DIFFICULTY` - `easy`, `normal` or `hard`; overrides the saved setting
    pub fn from_env() -> Self {
        let mut config = Self::default();

        config.gemini_api_key = env::var("GEMINI_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());
        config.gemini_api_url = env::var("GEMINI_API_URL").ok();

        if let Some(ms) = read_env::<u64>("ORACLE_TIMEOUT_MS") {
            config.oracle_timeout = Duration::from_millis(ms);
        }
        if let Some(ms) = read_env::<u64>("COMPUTER_DELAY_MS") {
            config.computer_delay = Duration::from_millis(ms);
        }
        if let Some(seconds) = read_env::<u32>("TURN_TIME_LIMIT") {
            config.time_limit = seconds.max(1);
        }

        config.data_dir = env::var("WORD_TRAIN_DATA_DIR").ok().map(PathBuf::from);
        config.log_dir = env::var("WORD_TRAIN_LOG_DIR").ok().map(PathBuf::from);
        config.difficulty = read_env::<Difficulty>("WORD_TRAIN_DIFFICULTY");

        config
    }

    pub fn runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            game_config: GameConfig::with_time_limit(self.time_limit),
            oracle: OracleConfig {
                timeout: self.oracle_timeout,
            },
            computer_delay: self.computer_delay,
            ..RuntimeConfig::default()
        }
    }

    /// Gemini settings, if an API key is configured.
    pub fn gemini(&self) -> Option<GeminiConfig> {
        let key = self.gemini_api_key.as_ref()?;
        let config = GeminiConfig::new(key.clone());
        Some(match &self.gemini_api_url {
            Some(url) => config.with_url(url.clone()),
            None => config,
        })
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runtime_config_carries_timing() {
        let config = ClientConfig {
            time_limit: 15,
            computer_delay: Duration::from_millis(200),
            ..ClientConfig::default()
        };

        let runtime = config.runtime_config();

        assert_eq!(runtime.game_config.time_limit, 15);
        assert_eq!(runtime.computer_delay, Duration::from_millis(200));
        assert_eq!(runtime.oracle.timeout, Duration::from_millis(8_000));
    }

    #[test]
    fn gemini_requires_key() {
        assert!(ClientConfig::default().gemini().is_none());

        let config = ClientConfig {
            gemini_api_key: Some("secret".into()),
            gemini_api_url: Some("http://localhost:9000/generate".into()),
            ..ClientConfig::default()
        };
        let gemini = config.gemini().unwrap();

        assert_eq!(gemini.api_key, "secret");
        assert_eq!(gemini.api_url, "http://localhost:9000/generate");
    }
}
