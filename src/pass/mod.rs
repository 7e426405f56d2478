//! Password generation.

pub mod charset;
mod generate;

pub use charset::Alphabet;
pub use generate::{Password, generate, generate_batch, generate_with};
