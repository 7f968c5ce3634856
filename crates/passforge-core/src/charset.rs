use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Lowercase letter pool.
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
/// Uppercase letter pool.
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
/// Digit pool.
pub const DIGITS: &str = "0123456789";
/// Special character pool.
pub const SPECIAL: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Characters easily confused visually. This is a cross-cutting set, not a
/// class of its own; it is subtracted from class pools on request.
pub const AMBIGUOUS: &str = "il1Lo0O";

/// Subset of special characters used when padding a passphrase up to a
/// minimum length.
pub const PAD_SPECIAL: &str = "!@#$%^&*";

/// One of the four character classes a password can draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharClass {
    Lowercase,
    Uppercase,
    Digits,
    Special,
}

impl CharClass {
    /// All classes in registry order.
    pub const ALL: [CharClass; 4] = [
        CharClass::Lowercase,
        CharClass::Uppercase,
        CharClass::Digits,
        CharClass::Special,
    ];

    /// The full character set for this class.
    pub fn chars(self) -> &'static str {
        match self {
            CharClass::Lowercase => LOWERCASE,
            CharClass::Uppercase => UPPERCASE,
            CharClass::Digits => DIGITS,
            CharClass::Special => SPECIAL,
        }
    }

    /// The usable pool for this class, with the ambiguous set subtracted
    /// when exclusion is requested.
    pub fn usable(self, exclude_ambiguous: bool) -> Vec<char> {
        if exclude_ambiguous {
            strip_ambiguous(self.chars()).chars().collect()
        } else {
            self.chars().chars().collect()
        }
    }

    /// Whether `c` belongs to this class.
    pub fn contains(self, c: char) -> bool {
        self.chars().contains(c)
    }

    /// Stable lowercase name, used in component type lists.
    pub fn name(self) -> &'static str {
        match self {
            CharClass::Lowercase => "lowercase",
            CharClass::Uppercase => "uppercase",
            CharClass::Digits => "digits",
            CharClass::Special => "special",
        }
    }

    /// Parse a class from its stable name.
    pub fn from_name(name: &str) -> Option<CharClass> {
        match name {
            "lowercase" => Some(CharClass::Lowercase),
            "uppercase" => Some(CharClass::Uppercase),
            "digits" => Some(CharClass::Digits),
            "special" => Some(CharClass::Special),
            _ => None,
        }
    }
}

/// Remove every ambiguous character from `chars`.
pub fn strip_ambiguous(chars: &str) -> String {
    chars.chars().filter(|c| !AMBIGUOUS.contains(*c)).collect()
}

pub(crate) fn validate() -> Result<()> {
    for class in CharClass::ALL {
        if class.chars().is_empty() {
            return Err(Error::InvalidTable(format!(
                "character class {} is empty",
                class.name()
            )));
        }
        // Every class must survive ambiguous exclusion.
        if class.usable(true).is_empty() {
            return Err(Error::InvalidTable(format!(
                "character class {} has no unambiguous characters",
                class.name()
            )));
        }
    }
    if PAD_SPECIAL.is_empty() {
        return Err(Error::InvalidTable(
            "padding character set is empty".to_string(),
        ));
    }
    Ok(())
}
