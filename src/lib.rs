//! Password generation core.
//!
//! Builds a filtered character set from [`Settings`] and samples passwords
//! from it with a cryptographically secure generator. Nothing in this crate
//! writes to stdout or stderr; rendering belongs to the caller.

pub mod entropy;
mod error;
pub mod pass;
pub mod settings;

pub use error::{Error, Result};
pub use pass::{Alphabet, Password};
pub use settings::Settings;
