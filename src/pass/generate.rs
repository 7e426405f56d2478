//! Password generation.

use std::fmt;

use rand::CryptoRng;
use tracing::debug;
use zeroize::Zeroize;

use super::charset::{self, Alphabet};
use crate::entropy;
use crate::error::{Error, Result};
use crate::settings::Settings;

/// A generated password. The buffer is wiped on drop.
pub struct Password(String);

impl Password {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}

impl Drop for Password {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

/// Generate one password from the thread-local CSPRNG.
pub fn generate(alphabet: &Alphabet, length: usize) -> Result<Password> {
    generate_with(alphabet, length, &mut entropy::rng())
}

/// Generate one password, drawing each position independently and uniformly
/// from `alphabet`. Repeated characters are allowed.
pub fn generate_with<R: CryptoRng + ?Sized>(
    alphabet: &Alphabet,
    length: usize,
    rng: &mut R,
) -> Result<Password> {
    if length < 1 {
        return Err(Error::InvalidLength(length));
    }
    if alphabet.is_empty() {
        return Err(Error::EmptyAlphabet);
    }

    let chars = alphabet.chars();
    // Sized up front so the buffer never reallocates and leaves a copy behind.
    let widest = chars.iter().map(|c| c.len_utf8()).max().unwrap_or(1);
    let capacity = length.checked_mul(widest).ok_or(Error::InvalidLength(length))?;
    let mut pass = String::new();
    pass.try_reserve_exact(capacity).map_err(|_| Error::InvalidLength(length))?;
    for _ in 0..length {
        pass.push(chars[entropy::index(rng, chars.len())]);
    }

    Ok(Password(pass))
}

/// Build the pool once, then generate `settings.number_of_passwords` passwords.
/// Nothing is returned unless every password succeeds.
pub fn generate_batch(settings: &Settings) -> Result<Vec<Password>> {
    let alphabet = charset::build(settings)?;
    let mut rng = entropy::rng();

    let passwords = (0..settings.number_of_passwords)
        .map(|_| generate_with(&alphabet, settings.pass_length, &mut rng))
        .collect::<Result<Vec<_>>>()?;

    debug!(
        count = passwords.len(),
        length = settings.pass_length,
        pool = alphabet.len(),
        "generated passwords"
    );
    Ok(passwords)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn two_letter_pool() {
        let alphabet = Alphabet::from("AB");
        for _ in 0..200 {
            let pass = generate(&alphabet, 5).unwrap();
            assert_eq!(pass.len(), 5);
            assert!(pass.as_str().chars().all(|c| c == 'A' || c == 'B'));
        }
    }

    #[test]
    fn empty_pool_is_rejected() {
        assert_eq!(
            generate(&Alphabet::from(""), 5).unwrap_err(),
            Error::EmptyAlphabet
        );
    }

    #[test]
    fn zero_length_is_rejected() {
        let alphabet = Alphabet::from("abc");
        assert_eq!(
            generate(&alphabet, 0).unwrap_err(),
            Error::InvalidLength(0)
        );
    }

    #[test]
    fn unallocatable_length_is_rejected() {
        assert_eq!(
            generate(&Alphabet::from("ab"), usize::MAX).unwrap_err(),
            Error::InvalidLength(usize::MAX)
        );
        // Overflows the byte count for a multi-byte pool.
        let wide = usize::MAX / 2 + 1;
        assert_eq!(
            generate(&Alphabet::from("€"), wide).unwrap_err(),
            Error::InvalidLength(wide)
        );
    }

    #[test]
    fn oversized_batch_is_an_error() {
        let settings = Settings {
            pass_length: usize::MAX,
            ..Settings::default()
        };
        assert_eq!(
            generate_batch(&settings).unwrap_err(),
            Error::InvalidLength(usize::MAX)
        );
    }

    #[test]
    fn length_is_checked_before_pool() {
        assert_eq!(
            generate(&Alphabet::from(""), 0).unwrap_err(),
            Error::InvalidLength(0)
        );
    }

    #[test]
    fn single_char_pool_repeats() {
        let pass = generate(&Alphabet::from("x"), 12).unwrap();
        assert_eq!(pass.as_str(), "xxxxxxxxxxxx");
    }

    #[test]
    fn same_seed_same_password() {
        let alphabet = charset::build(&Settings::default()).unwrap();
        let a = generate_with(&alphabet, 32, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = generate_with(&alphabet, 32, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a.as_str(), b.as_str());
    }

    #[test]
    fn consecutive_passwords_differ() {
        let alphabet = charset::build(&Settings::letters_only()).unwrap();
        let a = generate(&alphabet, 16).unwrap();
        let b = generate(&alphabet, 16).unwrap();
        assert_ne!(a.as_str(), b.as_str());
    }

    #[test]
    fn draws_are_roughly_even() {
        let alphabet = Alphabet::from("AB");
        let mut rng = StdRng::seed_from_u64(1);
        let pass = generate_with(&alphabet, 10_000, &mut rng).unwrap();
        let a = pass.as_str().chars().filter(|&c| c == 'A').count();
        assert!((4_500..5_500).contains(&a), "skewed draw: {a} of 10000");
    }

    #[test]
    fn multibyte_pool() {
        let alphabet = Alphabet::from("äöü€");
        let pass = generate(&alphabet, 9).unwrap();
        assert_eq!(pass.len(), 9);
        assert!(pass.as_str().chars().all(|c| alphabet.contains(c)));
    }

    #[test]
    fn batch_matches_settings() {
        let settings = Settings {
            pass_length: 20,
            exclude_ambiguous: true,
            ..Settings::default()
        }
        .with_count(10);

        let passwords = generate_batch(&settings).unwrap();
        assert_eq!(passwords.len(), 10);
        for pass in &passwords {
            assert_eq!(pass.len(), 20);
            assert!(!pass.as_str().contains(&['l', '1', 'I', 'O', '0'][..]));
        }
    }

    #[test]
    fn batch_fails_whole() {
        let settings = Settings {
            explicit_chars: Some("   ".into()),
            ..Settings::default()
        }
        .with_count(3);
        assert!(matches!(generate_batch(&settings), Err(Error::Config(_))));
    }

    #[test]
    fn debug_hides_contents() {
        let pass = generate(&Alphabet::from("z"), 4).unwrap();
        assert_eq!(format!("{pass:?}"), "Password(***)");
    }
}
