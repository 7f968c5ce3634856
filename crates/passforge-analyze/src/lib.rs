//! Heuristic strength analysis for credential strings.
//!
//! The analyzer is pure: no randomness, no I/O, and identical input always
//! yields an identical report.

pub mod analyzer;
pub mod model;
pub mod report;

pub use analyzer::analyze;
pub use model::{StrengthLabel, StrengthReport, NOMINAL_MAX_SCORE};
pub use report::render_report;
