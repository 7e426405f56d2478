//! Password generation settings.
//!
//! A `Settings` value is the fully resolved configuration for one run. Bounds
//! on length and count are enforced by whoever builds it (the CLI checks
//! [`MIN_LENGTH`], [`MAX_LENGTH`] and [`MAX_COUNT`]); the core only rejects
//! values it cannot work with at all.

pub const DEFAULT_LENGTH: usize = 16;
pub const MIN_LENGTH: usize = 4;
pub const MAX_LENGTH: usize = 128;
pub const MAX_COUNT: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub pass_length: usize,
    pub number_of_passwords: usize,
    pub include_digits: bool,
    pub include_punctuation: bool,
    pub exclude_ambiguous: bool,
    /// Replaces the letter/digit/punctuation sets entirely when present.
    pub explicit_chars: Option<String>,
}

impl Settings {
    /// Menu one-shot: letters and punctuation, no digits.
    pub fn menu() -> Self {
        Self {
            include_digits: false,
            ..Self::default()
        }
    }

    /// Every optional set switched off, leaving the 52 letters.
    pub fn letters_only() -> Self {
        Self {
            include_digits: false,
            include_punctuation: false,
            ..Self::default()
        }
    }

    pub fn with_count(self, number_of_passwords: usize) -> Self {
        Self {
            number_of_passwords,
            ..self
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pass_length: DEFAULT_LENGTH,
            number_of_passwords: 1,
            include_digits: true,
            include_punctuation: true,
            exclude_ambiguous: false,
            explicit_chars: None,
        }
    }
}
