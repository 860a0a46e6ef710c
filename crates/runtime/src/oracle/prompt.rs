//! Prompt text sent to the word generator.

use game_core::Difficulty;

use super::WordRequest;

/// Builds the generation prompt for `request`.
pub fn build_prompt(request: &WordRequest) -> String {
    let letter = request.required_letter().to_ascii_uppercase();
    let guidance = difficulty_guidance(request);

    let mut prompt = format!(
        "Generate a single English word that starts with the letter \"{letter}\". \n\
         The word should be:\n\
         - A common English word\n\
         - Between 3-15 letters long\n\
         - A noun, verb, or adjective\n\
         - Not a proper noun\n\
         - {guidance}\n\
         \n\
         Respond with ONLY the word, nothing else."
    );

    if !request.used_words.is_empty() {
        prompt.push_str("\nDo not use these already used words: ");
        prompt.push_str(&request.used_words.join(", "));
    }

    prompt
}

fn difficulty_guidance(request: &WordRequest) -> String {
    let difficulty = if request.easy_mode {
        Difficulty::Easy
    } else {
        request.difficulty
    };
    let settings = difficulty.settings();
    format!(
        "{} (complexity {} on a scale of 1-10)",
        settings.description, settings.word_complexity
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(difficulty: Difficulty, easy_mode: bool, used: &[&str]) -> WordRequest {
        WordRequest {
            last_word: "apple".into(),
            used_words: used.iter().map(|w| w.to_string()).collect(),
            difficulty,
            easy_mode,
        }
    }

    #[test]
    fn names_upper_case_letter_and_exclusions() {
        let prompt = build_prompt(&request(Difficulty::Normal, false, &["apple", "egg"]));

        assert!(prompt.contains("starts with the letter \"E\""));
        assert!(prompt.contains("Respond with ONLY the word, nothing else."));
        assert!(prompt.ends_with("\nDo not use these already used words: apple, egg"));
    }

    #[test]
    fn easy_mode_overrides_difficulty() {
        let hard = build_prompt(&request(Difficulty::Hard, false, &[]));
        let eased = build_prompt(&request(Difficulty::Hard, true, &[]));

        assert!(hard.contains("- AI uses complex, challenging words (complexity 9"));
        assert!(eased.contains("- AI uses simple, common words (complexity 3"));
        assert!(!eased.contains("already used"));
    }
}
