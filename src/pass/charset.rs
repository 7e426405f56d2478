//! Character set building for password generation.

use std::fmt;

use tracing::debug;

use crate::error::{Error, Result};
use crate::settings::Settings;

const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";
const PUNCTUATION: &str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;

/// Characters that break shell quoting or are invisible.
pub const BLOCKLIST: &[char] = &[' ', '\'', '`', '"', '\\', '\t', '\n', '\r'];

/// Characters easily mistaken for one another.
pub const AMBIGUOUS: &[char] = &['l', '1', 'I', 'O', '0'];

/// Distinct characters in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Alphabet(Vec<char>);

impl Alphabet {
    pub fn chars(&self) -> &[char] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, c: char) -> bool {
        self.0.contains(&c)
    }

    fn remove_all(&mut self, blocked: &[char]) {
        self.0.retain(|c| !blocked.contains(c));
    }
}

impl Extend<char> for Alphabet {
    fn extend<I: IntoIterator<Item = char>>(&mut self, iter: I) {
        for c in iter {
            if !self.0.contains(&c) {
                self.0.push(c);
            }
        }
    }
}

impl FromIterator<char> for Alphabet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut alphabet = Alphabet::default();
        alphabet.extend(iter);
        alphabet
    }
}

/// Takes the characters as given, dropping repeats. No filtering.
impl From<&str> for Alphabet {
    fn from(s: &str) -> Self {
        s.chars().collect()
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|c| write!(f, "{c}"))
    }
}

/// Build the character pool for `settings`.
///
/// Letters are always present. The blocklist is applied to the whole pool,
/// but only once punctuation has been added; digits alone never trigger it.
/// An explicit character set skips every inclusion and ambiguity rule. It is
/// used as given except that repeats and blocklisted characters are dropped,
/// so no pool ever holds a blocklisted character.
pub fn build(settings: &Settings) -> Result<Alphabet> {
    if let Some(ref chars) = settings.explicit_chars {
        return explicit(chars);
    }

    let mut alphabet: Alphabet = LOWERCASE.chars().chain(UPPERCASE.chars()).collect();

    if settings.include_digits {
        alphabet.extend(DIGITS.chars());
    }

    if settings.include_punctuation {
        alphabet.extend(PUNCTUATION.chars());
        alphabet.remove_all(BLOCKLIST);
    }

    if settings.exclude_ambiguous {
        alphabet.remove_all(AMBIGUOUS);
    }

    debug!(size = alphabet.len(), "built character set");
    Ok(alphabet)
}

fn explicit(chars: &str) -> Result<Alphabet> {
    let mut alphabet = Alphabet::from(chars);
    alphabet.remove_all(BLOCKLIST);

    if alphabet.is_empty() {
        return Err(Error::Config(
            "no usable characters left after removing whitespace and quotes".into(),
        ));
    }

    debug!(size = alphabet.len(), "using explicit character set");
    Ok(alphabet)
}
