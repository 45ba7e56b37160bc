//! Random string generation.
//!
//! The plain functions draw from [`rand::thread_rng`], which is seeded per
//! thread. [`crypto_string`] draws from the operating system. Every function
//! has a `_with` variant taking the generator explicitly.
use std::fmt;

use rand::{rngs::OsRng, seq::SliceRandom, thread_rng, Rng};

pub const ALPHA_LOWER: &str = "abcdefghijklmnopqrstuvwxyz";
pub const ALPHA_UPPER: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const NUMBERS: &str = "0123456789";
pub const ALPHA_NUMERIC: &str =
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
/// Characters allowed in an RFC 7235 `token68`.
pub const TOKEN68: &str =
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789-._~+/";

// Password alphabets leave out l, I, 1, O and 0.
pub const PASSWORD_LOWER: &str = "abcdefghijkmnopqrstuvwxyz";
pub const PASSWORD_UPPER: &str = "ABCDEFGHJKLMNPQRSTUVWXYZ";
pub const PASSWORD_NUM: &str = "23456789";
pub const PASSWORD_SYM: &str = "!@#%?+=_";
pub const PASSWORD_CHARS: &str =
    "abcdefghijkmnopqrstuvwxyzABCDEFGHJKLMNPQRSTUVWXYZ23456789!@#%?+=_";

/// Shortest password [`password_string`] will produce.
pub const MIN_PASSWORD_LEN: usize = 4;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// The character source has no characters to pick from.
    Empty,
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::Empty => write!(f, "character source is empty"),
        }
    }
}

impl std::error::Error for SourceError {}

/// Generates `n` characters picked uniformly from `source` with the thread
/// local generator. Not suitable for secrets, see [`crypto_string`].
///
/// ```
/// use stringkit::random::{random_string, NUMBERS};
///
/// let pin = random_string(NUMBERS, 6).unwrap();
/// assert_eq!(pin.len(), 6);
/// assert!(pin.chars().all(|c| c.is_ascii_digit()));
/// ```
pub fn random_string(source: &str, n: usize) -> Result<String, SourceError> {
    random_string_with(&mut thread_rng(), source, n)
}

/// Like [`random_string`], but draws from the operating system's secure
/// generator.
pub fn crypto_string(source: &str, n: usize) -> Result<String, SourceError> {
    random_string_with(&mut OsRng, source, n)
}

pub fn random_string_with<R>(rng: &mut R, source: &str, n: usize) -> Result<String, SourceError>
where
    R: Rng + ?Sized,
{
    let source: Vec<char> = source.chars().collect();
    if source.is_empty() {
        return Err(SourceError::Empty);
    }
    Ok((0..n)
        .map(|_| source[rng.gen_range(0..source.len())])
        .collect())
}

/// Generates a password of length `n` that contains at least one lowercase
/// letter, one uppercase letter, one digit and one symbol, avoiding
/// characters that are easily confused with each other.
///
/// Returns an empty string if `n` is smaller than [`MIN_PASSWORD_LEN`].
pub fn password_string(n: usize) -> String {
    password_string_with(&mut thread_rng(), n)
}

pub fn password_string_with<R>(rng: &mut R, n: usize) -> String
where
    R: Rng + ?Sized,
{
    if n < MIN_PASSWORD_LEN {
        return String::new();
    }
    let mut password: Vec<char> = Vec::with_capacity(n);
    for required in [PASSWORD_LOWER, PASSWORD_UPPER, PASSWORD_NUM, PASSWORD_SYM] {
        password.push(pick(rng, required));
    }
    while password.len() < n {
        password.push(pick(rng, PASSWORD_CHARS));
    }
    password.shuffle(rng);
    password.into_iter().collect()
}

/// Picks one character from a non-empty ASCII alphabet.
fn pick<R>(rng: &mut R, alphabet: &str) -> char
where
    R: Rng + ?Sized,
{
    let bytes = alphabet.as_bytes();
    char::from(bytes[rng.gen_range(0..bytes.len())])
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn alphabets() {
        assert_eq!(ALPHA_NUMERIC, format!("{ALPHA_LOWER}{ALPHA_UPPER}{NUMBERS}"));
        assert_eq!(TOKEN68, format!("{ALPHA_NUMERIC}-._~+/"));
        assert_eq!(
            PASSWORD_CHARS,
            format!("{PASSWORD_LOWER}{PASSWORD_UPPER}{PASSWORD_NUM}{PASSWORD_SYM}")
        );
        for confusable in ['l', 'I', '1', 'O', '0'] {
            assert!(!PASSWORD_CHARS.contains(confusable));
        }
    }

    #[test]
    fn random_string_lengths() {
        assert_eq!(random_string("a", 0).unwrap(), "");
        assert_eq!(random_string("a", 1).unwrap(), "a");
        assert_eq!(random_string("abc", 1).unwrap().len(), 1);
        assert_eq!(random_string("abc", 10).unwrap().len(), 10);
    }

    #[test]
    fn random_string_uses_source() {
        let s = random_string("xyz", 50).unwrap();
        assert!(s.chars().all(|c| "xyz".contains(c)));
    }

    #[test]
    fn random_string_counts_characters_not_bytes() {
        let s = random_string("äö", 5).unwrap();
        assert_eq!(s.chars().count(), 5);
        assert!(s.chars().all(|c| c == 'ä' || c == 'ö'));
    }

    #[test]
    fn empty_source() {
        assert_eq!(random_string("", 3), Err(SourceError::Empty));
        assert_eq!(crypto_string("", 3), Err(SourceError::Empty));
    }

    #[test]
    fn crypto_string_lengths() {
        assert_eq!(crypto_string("a", 0).unwrap(), "");
        assert_eq!(crypto_string("a", 1).unwrap(), "a");
        assert_eq!(crypto_string("abc", 1).unwrap().len(), 1);
        assert_eq!(crypto_string(ALPHA_NUMERIC, 10).unwrap().len(), 10);
    }

    #[test]
    fn seeded_generator_is_deterministic() {
        let first = random_string_with(&mut StdRng::seed_from_u64(7), TOKEN68, 16).unwrap();
        let second = random_string_with(&mut StdRng::seed_from_u64(7), TOKEN68, 16).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn password_too_short() {
        assert_eq!(password_string(0), "");
        assert_eq!(password_string(3), "");
    }

    #[test]
    fn password_composition() {
        let mut rng = StdRng::seed_from_u64(42);
        for n in [4, 10, 32] {
            let password = password_string_with(&mut rng, n);
            assert_eq!(password.len(), n);
            for alphabet in [PASSWORD_LOWER, PASSWORD_UPPER, PASSWORD_NUM, PASSWORD_SYM] {
                assert!(
                    password.chars().any(|c| alphabet.contains(c)),
                    "{password} has nothing from {alphabet}"
                );
            }
            assert!(password.chars().all(|c| PASSWORD_CHARS.contains(c)));
        }
    }

    #[test]
    fn source_error_display() {
        assert_eq!(SourceError::Empty.to_string(), "character source is empty");
    }
}
