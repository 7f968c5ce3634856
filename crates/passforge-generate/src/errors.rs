use thiserror::Error;

/// Errors emitted by the generation engine. All variants are recoverable
/// values; the engine never retries on the caller's behalf.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// Length/quota contradictions in a generation request.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    /// Complexity level outside 1..=10.
    #[error("invalid complexity level: {0} (must be 1-10)")]
    InvalidLevel(u8),
    /// Malformed numeric or type string in component configuration.
    #[error("parse error: {0}")]
    Parse(String),
}
