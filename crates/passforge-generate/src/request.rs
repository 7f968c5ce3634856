use serde::{Deserialize, Serialize};

use passforge_core::CharClass;

use crate::errors::GenerationError;

/// Enablement and minimum quota for one character class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassRule {
    pub enabled: bool,
    pub minimum: usize,
}

impl ClassRule {
    /// Enabled class with the given minimum quota.
    pub const fn on(minimum: usize) -> Self {
        Self {
            enabled: true,
            minimum,
        }
    }

    /// Disabled class; a disabled class contributes no quota.
    pub const fn off() -> Self {
        Self {
            enabled: false,
            minimum: 0,
        }
    }
}

/// Parameters for constrained password generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationRequest {
    pub length: usize,
    pub lowercase: ClassRule,
    pub uppercase: ClassRule,
    pub digits: ClassRule,
    pub special: ClassRule,
    pub exclude_ambiguous: bool,
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self {
            length: 12,
            lowercase: ClassRule::on(1),
            uppercase: ClassRule::on(1),
            digits: ClassRule::on(1),
            special: ClassRule::on(1),
            exclude_ambiguous: false,
        }
    }
}

impl GenerationRequest {
    /// The rule configured for `class`.
    pub fn rule(&self, class: CharClass) -> ClassRule {
        match class {
            CharClass::Lowercase => self.lowercase,
            CharClass::Uppercase => self.uppercase,
            CharClass::Digits => self.digits,
            CharClass::Special => self.special,
        }
    }

    /// Enabled classes in registry order.
    pub fn enabled_classes(&self) -> impl Iterator<Item = CharClass> + '_ {
        CharClass::ALL
            .into_iter()
            .filter(|class| self.rule(*class).enabled)
    }

    /// Sum of minimum quotas over enabled classes.
    pub fn total_minimums(&self) -> usize {
        self.enabled_classes()
            .map(|class| self.rule(class).minimum)
            .sum()
    }

    /// Check the request invariants.
    pub fn validate(&self) -> Result<(), GenerationError> {
        if self.length < 4 {
            return Err(GenerationError::InvalidRequest(
                "password length must be at least 4".to_string(),
            ));
        }
        if self.enabled_classes().next().is_none() {
            return Err(GenerationError::InvalidRequest(
                "no character classes selected".to_string(),
            ));
        }
        if self.total_minimums() > self.length {
            return Err(GenerationError::InvalidRequest(
                "minimum requirements exceed password length".to_string(),
            ));
        }
        Ok(())
    }
}
