//! Errors raised by character set construction and password sampling.

use thiserror::Error;

/// Validation failures of the generation core. None of these are transient.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Explicit character set is unusable.
    #[error("Invalid character set: {0}")]
    Config(String),

    /// Zero, or too large to allocate.
    #[error("Invalid password length: {0}")]
    InvalidLength(usize),

    #[error("Cannot generate a password from an empty character set")]
    EmptyAlphabet,
}

pub type Result<T> = std::result::Result<T, Error>;
