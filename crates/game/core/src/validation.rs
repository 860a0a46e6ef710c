//! Word validation rules.
//!
//! Checks a candidate word against the chain: format, required first letter
//! and uniqueness. There is no dictionary lookup; any string that passes the
//! rules is accepted.

use crate::config::GameConfig;
use crate::error::{ErrorSeverity, GameError};

/// Reasons a word is refused, in the order they are checked.
///
/// The `Display` text is shown to players verbatim.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ValidationError {
    #[error("Word cannot be empty")]
    Empty,

    #[error("Word must be 2-20 letters only")]
    InvalidFormat,

    #[error("Word must start with '{}'", .expected.to_ascii_uppercase())]
    WrongFirstLetter { expected: char },

    #[error("Word already used")]
    AlreadyUsed,
}

impl GameError for ValidationError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Empty => "WORD_EMPTY",
            Self::InvalidFormat => "WORD_INVALID_FORMAT",
            Self::WrongFirstLetter { .. } => "WORD_WRONG_FIRST_LETTER",
            Self::AlreadyUsed => "WORD_ALREADY_USED",
        }
    }
}

/// Trims and lower-cases a word.
pub fn normalize(word: &str) -> String {
    word.trim().to_lowercase()
}

/// First letter of `word`, lower-cased.
pub fn first_letter(word: &str) -> Option<char> {
    word.trim().chars().next().map(|c| c.to_ascii_lowercase())
}

/// Last letter of `word`, lower-cased.
pub fn last_letter(word: &str) -> Option<char> {
    word.trim().chars().next_back().map(|c| c.to_ascii_lowercase())
}

/// True if `word` is 2-20 ASCII letters.
pub fn is_valid_word_format(word: &str) -> bool {
    let word = word.trim();
    (GameConfig::MIN_WORD_LENGTH..=GameConfig::MAX_WORD_LENGTH).contains(&word.len())
        && word.chars().all(|c| c.is_ascii_alphabetic())
}

/// Validates `word` as the next link of a chain.
///
/// `used_words` is compared case-insensitively. The first failing rule wins.
pub fn validate_word<'a, I>(
    word: &str,
    expected_first_letter: char,
    used_words: I,
) -> Result<(), ValidationError>
where
    I: IntoIterator<Item = &'a str>,
{
    let word = normalize(word);

    if word.is_empty() {
        return Err(ValidationError::Empty);
    }

    if !is_valid_word_format(&word) {
        return Err(ValidationError::InvalidFormat);
    }

    let expected = expected_first_letter.to_ascii_lowercase();
    if first_letter(&word) != Some(expected) {
        return Err(ValidationError::WrongFirstLetter { expected });
    }

    if used_words
        .into_iter()
        .any(|used| used.trim().eq_ignore_ascii_case(&word))
    {
        return Err(ValidationError::AlreadyUsed);
    }

    Ok(())
}
