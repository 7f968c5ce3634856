use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use passforge_core::PAD_SPECIAL;

use crate::words::{capitalize_first, random_word};

/// Letter families eligible for leet substitution in complex passphrases.
/// At most one family is substituted per word; this is deliberately kept
/// distinct from the unconditional map used by `Word` components.
const LEET_MAP: &[(char, char)] = &[
    ('a', '4'),
    ('e', '3'),
    ('i', '1'),
    ('o', '0'),
    ('s', '5'),
    ('t', '7'),
];

/// Candidate separators for complex passphrases. Index 3 onward are the
/// punctuation-style separators favored when special characters are on.
const SEPARATORS: &[&str] = &["", "-", "_", ".", "!", "@", "#"];

/// Word-length window used by complex passphrases.
const COMPLEX_WORD_MIN: usize = 4;
const COMPLEX_WORD_MAX: usize = 8;

/// Options for plain memorable passphrases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemorableOptions {
    pub num_words: usize,
    pub separator: String,
    /// Append a zero-padded 3-digit random suffix.
    pub add_numbers: bool,
    /// Capitalize the first letter of each word.
    pub capitalize: bool,
    pub word_min_length: usize,
    pub word_max_length: usize,
}

impl Default for MemorableOptions {
    fn default() -> Self {
        Self {
            num_words: 4,
            separator: "-".to_string(),
            add_numbers: true,
            capitalize: true,
            word_min_length: 3,
            word_max_length: 8,
        }
    }
}

/// Generate a memorable passphrase from corpus words.
pub fn generate_memorable(options: &MemorableOptions, rng: &mut impl Rng) -> String {
    let mut words = Vec::with_capacity(options.num_words);
    for _ in 0..options.num_words {
        let word = random_word(options.word_min_length, options.word_max_length, rng);
        if options.capitalize {
            words.push(capitalize_first(word));
        } else {
            words.push(word.to_string());
        }
    }

    let mut password = words.join(&options.separator);
    if options.add_numbers {
        password.push_str(&format!("{:03}", rng.random_range(0..=999)));
    }
    password
}

/// Options for complex memorable passphrases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComplexOptions {
    pub num_words: usize,
    pub add_special_chars: bool,
    /// Insert a zero-padded 2-digit random token at a random position.
    pub add_numbers: bool,
    /// Apply case transforms and probabilistic leet substitution per word.
    pub transform_words: bool,
    /// Minimum total length, enforced by inserting special characters.
    /// Only honored when `add_special_chars` is true; with special
    /// characters disabled an unmet minimum is left as is.
    pub min_length: usize,
}

impl Default for ComplexOptions {
    fn default() -> Self {
        Self {
            num_words: 3,
            add_special_chars: true,
            add_numbers: true,
            transform_words: true,
            min_length: 16,
        }
    }
}

/// Generate a complex memorable passphrase with transforms, random
/// separators, a numeric token, and length padding.
pub fn generate_complex(options: &ComplexOptions, rng: &mut impl Rng) -> String {
    let mut words = Vec::with_capacity(options.num_words);
    for _ in 0..options.num_words {
        let mut word = random_word(COMPLEX_WORD_MIN, COMPLEX_WORD_MAX, rng).to_string();
        if options.transform_words {
            word = transform_word(&word, rng);
            if rng.random_range(0..3) == 0 {
                word = leet_substitute(&word, rng);
            }
        }
        words.push(word);
    }

    let mut password = String::new();
    for (index, word) in words.iter().enumerate() {
        password.push_str(word);
        if index + 1 < words.len() {
            password.push_str(pick_separator(options.add_special_chars, rng));
        }
    }

    if options.add_numbers {
        let number = format!("{:02}", rng.random_range(0..=9999));
        match rng.random_range(0..3) {
            0 => password.insert_str(0, &number),
            1 => {
                let mid = password.len() / 2;
                password.insert_str(mid, &number);
            }
            _ => password.push_str(&number),
        }
    }

    if options.add_special_chars {
        let pad: Vec<char> = PAD_SPECIAL.chars().collect();
        while password.len() < options.min_length {
            let position = rng.random_range(0..=password.len());
            password.insert(position, pad[rng.random_range(0..pad.len())]);
        }
    }

    debug!(
        words = options.num_words,
        length = password.len(),
        "generated complex passphrase"
    );
    password
}

/// One of four transform modes, chosen uniformly.
fn transform_word(word: &str, rng: &mut impl Rng) -> String {
    match rng.random_range(0..4) {
        0 => capitalize_first(word),
        1 => word.to_ascii_uppercase(),
        2 => word.to_ascii_lowercase(),
        _ => {
            if word.len() > 4 {
                capitalize_first(word)
            } else {
                word.to_ascii_uppercase()
            }
        }
    }
}

/// Each family is accepted with probability 1/2; the first accepted family
/// is substituted (case-insensitively) and the pass stops, whether or not
/// the letter was present.
fn leet_substitute(word: &str, rng: &mut impl Rng) -> String {
    for &(letter, digit) in LEET_MAP {
        if rng.random_bool(0.5) {
            return word
                .chars()
                .map(|c| if c.eq_ignore_ascii_case(&letter) { digit } else { c })
                .collect();
        }
    }
    word.to_string()
}

/// With special characters on, punctuation separators win 2 of 3 draws;
/// otherwise the gap uses one of {none, hyphen, underscore}.
fn pick_separator(add_special_chars: bool, rng: &mut impl Rng) -> &'static str {
    if add_special_chars && rng.random_range(0..3) < 2 {
        SEPARATORS[rng.random_range(3..SEPARATORS.len())]
    } else {
        SEPARATORS[rng.random_range(0..3)]
    }
}
