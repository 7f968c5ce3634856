use thiserror::Error;

/// Core error type shared across Passforge crates.
#[derive(Debug, Error)]
pub enum Error {
    /// A static table violates internal invariants.
    #[error("invalid table: {0}")]
    InvalidTable(String),
}

/// Convenience alias for results returned by Passforge crates.
pub type Result<T> = std::result::Result<T, Error>;
