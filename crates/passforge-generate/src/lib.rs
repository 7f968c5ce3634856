//! Randomized credential generation engine for Passforge.
//!
//! This crate turns typed requests into passwords and passphrases. Every
//! entry point takes a caller-supplied `rand::Rng`, so the engine itself
//! performs no I/O and holds no state between calls.

pub mod complexity;
pub mod components;
pub mod errors;
pub mod passphrase;
pub mod password;
pub mod request;
mod words;

pub use complexity::{level_description, level_params};
pub use components::{
    build_components, Component, NumberConfig, RandomCharsConfig, WordCase, WordConfig,
};
pub use errors::GenerationError;
pub use passphrase::{generate_complex, generate_memorable, ComplexOptions, MemorableOptions};
pub use password::generate_password;
pub use request::{ClassRule, GenerationRequest};
