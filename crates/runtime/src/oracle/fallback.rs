//! Static word lists used when the generator cannot be.

use rand::Rng;
use rand::seq::SliceRandom;

/// Built-in words starting with `letter`. Unknown letters get `["word"]`.
pub fn fallback_words(letter: char) -> &'static [&'static str] {
    match letter.to_ascii_lowercase() {
        'a' => &["apple", "animal", "amazing", "adventure", "awesome"],
        'b' => &["banana", "beautiful", "bright", "butterfly", "brave"],
        'c' => &["cat", "creative", "colorful", "curious", "calm"],
        'd' => &["dog", "delicious", "dynamic", "dream", "dance"],
        'e' => &["elephant", "exciting", "energy", "explore", "elegant"],
        'f' => &["flower", "fantastic", "friendly", "fresh", "fun"],
        'g' => &["garden", "gentle", "great", "green", "graceful"],
        'h' => &["happy", "harmony", "hope", "heart", "home"],
        'i' => &["ice", "incredible", "inspire", "imagine", "island"],
        'j' => &["joy", "journey", "jump", "jungle", "jewel"],
        'k' => &["kind", "knowledge", "key", "kitchen", "kite"],
        'l' => &["love", "light", "laugh", "learn", "life"],
        'm' => &["music", "magic", "mountain", "moon", "memory"],
        'n' => &["nature", "nice", "new", "night", "natural"],
        'o' => &["ocean", "orange", "open", "opportunity", "optimistic"],
        'p' => &["peace", "positive", "planet", "power", "perfect"],
        'q' => &["quiet", "question", "quick", "quality", "queen"],
        'r' => &["rainbow", "river", "relax", "respect", "radiant"],
        's' => &["sun", "smile", "strong", "special", "success"],
        't' => &["tree", "trust", "time", "together", "treasure"],
        'u' => &["unique", "universe", "understand", "unity", "uplifting"],
        'v' => &["victory", "vibrant", "value", "vision", "voice"],
        'w' => &["water", "wonderful", "wisdom", "warm", "welcome"],
        'x' => &["xylophone", "xenial", "xerus", "xeric", "xylem"],
        'y' => &["yellow", "young", "yesterday", "yoga", "yummy"],
        'z' => &["zebra", "zen", "zest", "zone", "zoom"],
        _ => &["word"],
    }
}

/// Picks a random unused fallback word for `letter`.
///
/// When every listed word is used, returns `letter` followed by "ord".
pub fn fallback_word<R>(letter: char, used_words: &[String], rng: &mut R) -> String
where
    R: Rng + ?Sized,
{
    let available: Vec<&str> = fallback_words(letter)
        .iter()
        .copied()
        .filter(|word| !used_words.iter().any(|used| used.eq_ignore_ascii_case(word)))
        .collect();

    match available.choose(rng) {
        Some(word) => word.to_string(),
        None => format!("{}ord", letter.to_ascii_lowercase()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn used(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn every_letter_has_five_words_starting_with_it() {
        for letter in 'a'..='z' {
            let words = fallback_words(letter);
            assert_eq!(words.len(), 5, "letter {letter}");
            assert!(words.iter().all(|w| w.starts_with(letter)));
        }
        assert_eq!(fallback_words('1'), &["word"]);
    }

    #[test]
    fn used_words_are_skipped_case_insensitively() {
        let mut rng = StdRng::seed_from_u64(9);
        let used = used(&["Dog", "delicious", "DYNAMIC", "dream"]);

        assert_eq!(fallback_word('d', &used, &mut rng), "dance");
    }

    #[test]
    fn exhausted_list_synthesizes_word() {
        let mut rng = StdRng::seed_from_u64(9);
        let used = used(&["zebra", "zen", "zest", "zone", "zoom"]);

        assert_eq!(fallback_word('z', &used, &mut rng), "zord");
    }
}
