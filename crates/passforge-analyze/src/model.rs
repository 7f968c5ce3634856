use serde::{Deserialize, Serialize};

/// Nominal score ceiling used for display. The score itself is only
/// clamped at zero, not capped upward.
pub const NOMINAL_MAX_SCORE: u32 = 15;

/// Qualitative strength label derived from the final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrengthLabel {
    VeryWeak,
    Weak,
    Medium,
    Strong,
    VeryStrong,
    Excellent,
}

impl StrengthLabel {
    /// Threshold mapping from the final clamped score.
    pub fn from_score(score: u32) -> Self {
        match score {
            10.. => StrengthLabel::Excellent,
            8..=9 => StrengthLabel::VeryStrong,
            6..=7 => StrengthLabel::Strong,
            4..=5 => StrengthLabel::Medium,
            2..=3 => StrengthLabel::Weak,
            _ => StrengthLabel::VeryWeak,
        }
    }
}

impl std::fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            StrengthLabel::VeryWeak => "Very Weak",
            StrengthLabel::Weak => "Weak",
            StrengthLabel::Medium => "Medium",
            StrengthLabel::Strong => "Strong",
            StrengthLabel::VeryStrong => "Very Strong",
            StrengthLabel::Excellent => "Excellent",
        })
    }
}

/// Strength report for one credential string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrengthReport {
    pub score: u32,
    pub label: StrengthLabel,
    pub length: usize,
    pub has_lowercase: bool,
    pub has_uppercase: bool,
    pub has_digits: bool,
    pub has_special: bool,
    pub unique_chars: usize,
    /// Advisory strings in the order the checks ran.
    pub feedback: Vec<String>,
}
