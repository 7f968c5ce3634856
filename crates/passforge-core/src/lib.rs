//! Core contracts and static tables for Passforge.
//!
//! This crate defines the character class registry, the word corpus used by
//! passphrase generation, and the shared error type. All tables are
//! process-wide immutable statics; [`validate_tables`] checks their
//! invariants once at startup.

pub mod charset;
pub mod corpus;
pub mod error;

pub use charset::{strip_ambiguous, CharClass, AMBIGUOUS, PAD_SPECIAL};
pub use corpus::{words_in_range, WORDS};
pub use error::{Error, Result};

/// Validate every static table. Callers should run this once before using
/// the generation crates.
pub fn validate_tables() -> Result<()> {
    charset::validate()?;
    corpus::validate()
}
