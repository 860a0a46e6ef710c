//! Generator seam and response cleanup.

use async_trait::async_trait;

use super::{OracleError, WordRequest};

/// External source of candidate words.
///
/// Implementations return the raw text they received; the oracle extracts
/// and validates the word itself.
#[async_trait]
pub trait WordGenerator: Send + Sync {
    async fn generate(&self, request: &WordRequest) -> Result<String, OracleError>;
}

/// Pulls the word out of free-form generator text.
///
/// Takes the first whitespace-delimited token, drops every non-letter and
/// lower-cases the rest. Returns `None` when nothing is left.
pub fn extract_word(raw: &str) -> Option<String> {
    let token = raw.split_whitespace().next()?;
    let word: String = token
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_lowercase())
        .collect();
    (!word.is_empty()).then_some(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn takes_first_token_only() {
        assert_eq!(extract_word("Tiger\n\nA large cat."), Some("tiger".into()));
    }

    #[test]
    fn strips_punctuation_and_markup() {
        assert_eq!(extract_word("**Rainbow**!"), Some("rainbow".into()));
        assert_eq!(extract_word("\"don't\""), Some("dont".into()));
    }

    #[test]
    fn empty_or_symbol_only_yields_none() {
        assert_eq!(extract_word("   "), None);
        assert_eq!(extract_word("123 tiger"), None);
    }
}
