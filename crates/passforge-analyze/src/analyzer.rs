use std::collections::HashSet;

use passforge_core::CharClass;

use crate::model::{StrengthLabel, StrengthReport};

/// Ascending digit triples treated as simple sequences. The set wraps at
/// the end (890), so it is kept as an explicit table rather than derived.
const DIGIT_RUNS: &[&str] = &[
    "012", "123", "234", "345", "456", "567", "678", "789", "890",
];

/// Keyboard-row triples treated as simple sequences.
const KEYBOARD_RUNS: &[&str] = &[
    "qwe", "wer", "ert", "rty", "tyu", "yui", "uio", "iop", "asd", "sdf", "dfg", "fgh", "ghj",
    "hjk", "jkl", "zxc", "xcv", "cvb", "vbn", "bnm",
];

/// Common passwords penalized when present as a substring.
const COMMON_PASSWORDS: &[&str] = &["password", "123456", "qwerty", "admin", "login", "welcome"];

/// Score a credential string.
///
/// Never fails; empty input yields score 0 with "Too short" feedback.
pub fn analyze(password: &str) -> StrengthReport {
    let length = password.chars().count();
    let mut score: i32 = 0;
    let mut feedback = Vec::new();

    if length >= 16 {
        score += 3;
    } else if length >= 12 {
        score += 2;
    } else if length >= 8 {
        score += 1;
    } else {
        feedback.push("Too short".to_string());
    }

    let has_lowercase = password.chars().any(|c| c.is_ascii_lowercase());
    let has_uppercase = password.chars().any(|c| c.is_ascii_uppercase());
    let has_digits = password.chars().any(|c| c.is_ascii_digit());
    let has_special = password.chars().any(|c| CharClass::Special.contains(c));

    let char_types = [has_lowercase, has_uppercase, has_digits, has_special]
        .iter()
        .filter(|present| **present)
        .count();
    score += char_types as i32;
    if char_types < 3 {
        feedback.push("Use different character types".to_string());
    }

    let unique_chars = password.chars().collect::<HashSet<_>>().len();
    if length > 0 {
        let ratio = unique_chars as f64 / length as f64;
        if ratio >= 0.8 {
            score += 2;
        } else if ratio >= 0.6 {
            score += 1;
        } else {
            feedback.push("Too many repeated characters".to_string());
        }
    }

    let lowered = password.to_lowercase();
    if has_simple_sequence(&lowered) {
        score -= 2;
        feedback.push("Avoid simple sequences".to_string());
    }

    if COMMON_PASSWORDS
        .iter()
        .any(|common| lowered.contains(common))
    {
        score -= 3;
        feedback.push("Avoid common passwords".to_string());
    }

    let score = score.max(0) as u32;
    StrengthReport {
        score,
        label: StrengthLabel::from_score(score),
        length,
        has_lowercase,
        has_uppercase,
        has_digits,
        has_special,
        unique_chars,
        feedback,
    }
}

/// First matching check wins; later checks are skipped.
fn has_simple_sequence(lowered: &str) -> bool {
    let chars: Vec<char> = lowered.chars().collect();
    if chars.windows(3).any(|w| w[0] == w[1] && w[1] == w[2]) {
        return true;
    }
    if DIGIT_RUNS.iter().any(|run| lowered.contains(run)) {
        return true;
    }
    if chars.windows(3).any(alphabetic_run) {
        return true;
    }
    KEYBOARD_RUNS.iter().any(|run| lowered.contains(run))
}

fn alphabetic_run(window: &[char]) -> bool {
    window.iter().all(|c| c.is_ascii_lowercase())
        && window[1] as u32 == window[0] as u32 + 1
        && window[2] as u32 == window[1] as u32 + 1
}
