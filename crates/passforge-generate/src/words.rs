use rand::seq::IndexedRandom;
use rand::Rng;

use passforge_core::words_in_range;

/// Pick a corpus word within the inclusive length window.
pub(crate) fn random_word(min_length: usize, max_length: usize, rng: &mut impl Rng) -> &'static str {
    words_in_range(min_length, max_length)
        .choose(rng)
        .copied()
        .unwrap_or("apple")
}

/// Uppercase the first character, leaving the rest untouched.
pub(crate) fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}
