use crate::errors::GenerationError;
use crate::request::{ClassRule, GenerationRequest};

/// Display labels for the ten complexity levels. Display only; the
/// generation parameters come from [`level_params`].
const DESCRIPTIONS: [&str; 10] = [
    "Very Simple - lowercase only (9 chars)",
    "Simple - letters and digits (10 chars)",
    "Basic - letters and digits, no ambiguous (13 chars)",
    "Medium - all types, no ambiguous (14 chars)",
    "Good - all character types (17 chars)",
    "Strong - all types, more requirements (18 chars)",
    "Very Strong - increased length (18 chars)",
    "Excellent - high requirements (20 chars)",
    "Maximum - very long and complex (24 chars)",
    "Extreme - maximum protection (28 chars)",
];

/// Map a complexity level in 1..=10 to generation parameters.
///
/// Length, class enablement, and per-class minimums are all non-decreasing
/// in severity across the bands.
pub fn level_params(level: u8) -> Result<GenerationRequest, GenerationError> {
    if !(1..=10).contains(&level) {
        return Err(GenerationError::InvalidLevel(level));
    }

    let request = match level {
        1..=2 => GenerationRequest {
            length: 8 + level as usize,
            lowercase: ClassRule::on(2),
            uppercase: if level >= 2 {
                ClassRule::on(1)
            } else {
                ClassRule::off()
            },
            digits: if level >= 2 {
                ClassRule::on(1)
            } else {
                ClassRule::off()
            },
            special: ClassRule::off(),
            exclude_ambiguous: true,
        },
        3..=4 => GenerationRequest {
            length: 10 + level as usize,
            lowercase: ClassRule::on(2),
            uppercase: ClassRule::on(1),
            digits: ClassRule::on(1),
            special: if level >= 4 {
                ClassRule::on(1)
            } else {
                ClassRule::off()
            },
            exclude_ambiguous: level <= 3,
        },
        5..=6 => GenerationRequest {
            length: 12 + level as usize,
            lowercase: ClassRule::on(2),
            uppercase: ClassRule::on(2),
            digits: ClassRule::on(2),
            special: ClassRule::on(1),
            exclude_ambiguous: false,
        },
        7..=8 => GenerationRequest {
            length: 16 + (level as usize - 6) * 2,
            lowercase: ClassRule::on(3),
            uppercase: ClassRule::on(2),
            digits: ClassRule::on(2),
            special: ClassRule::on(2),
            exclude_ambiguous: false,
        },
        _ => GenerationRequest {
            length: 20 + (level as usize - 8) * 4,
            lowercase: ClassRule::on(4),
            uppercase: ClassRule::on(3),
            digits: ClassRule::on(3),
            special: ClassRule::on(3),
            exclude_ambiguous: false,
        },
    };

    Ok(request)
}

/// Human-readable description for a complexity level.
pub fn level_description(level: u8) -> Result<&'static str, GenerationError> {
    if !(1..=10).contains(&level) {
        return Err(GenerationError::InvalidLevel(level));
    }
    Ok(DESCRIPTIONS[level as usize - 1])
}
