//! Short identifier generation.
//!
//! Identifiers are drawn from the OS CSPRNG so they are unpredictable and
//! non-enumerable. Generation is stateless and safe to invoke concurrently
//! from any number of callers.

use crate::error::AppError;
use serde_json::json;

/// Characters a short identifier may contain.
///
/// Alphanumerics with the visually ambiguous `0`, `O`, `1`, `l`, `I` removed.
const ALPHABET: &[u8] = b"23456789abcdefghijkmnopqrstuvwxyzABCDEFGHJKLMNPQRSTUVWXYZ";

/// Largest multiple of `ALPHABET.len()` that fits in a byte.
///
/// Bytes at or above this value are discarded so every character stays
/// equally likely (no modulo bias).
const REJECTION_THRESHOLD: u8 = (u8::MAX / ALPHABET.len() as u8) * ALPHABET.len() as u8;

/// Default identifier length in characters.
pub const DEFAULT_ID_LENGTH: usize = 8;

/// Source of candidate short identifiers.
///
/// # Implementations
///
/// - [`RandomIdGenerator`] - CSPRNG-backed production generator
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait IdGenerator: Send + Sync {
    /// Produces one fixed-length candidate identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Generation`] only when the OS randomness source is
    /// unavailable. The failure is not retried here; retry policy belongs to
    /// the caller.
    fn generate(&self) -> Result<String, AppError>;
}

/// CSPRNG-backed generator producing fixed-length identifiers over
/// [`ALPHABET`].
#[derive(Debug, Clone)]
pub struct RandomIdGenerator {
    length: usize,
}

impl RandomIdGenerator {
    /// Creates a generator producing identifiers of the given length.
    pub fn new(length: usize) -> Self {
        Self { length }
    }
}

impl Default for RandomIdGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_ID_LENGTH)
    }
}

impl IdGenerator for RandomIdGenerator {
    fn generate(&self) -> Result<String, AppError> {
        let mut id = String::with_capacity(self.length);
        let mut buffer = [0u8; 32];

        while id.len() < self.length {
            getrandom::fill(&mut buffer).map_err(|e| {
                AppError::generation(
                    "Randomness source unavailable",
                    json!({ "reason": e.to_string() }),
                )
            })?;

            for &byte in &buffer {
                if id.len() == self.length {
                    break;
                }
                if byte < REJECTION_THRESHOLD {
                    id.push(ALPHABET[(byte % ALPHABET.len() as u8) as usize] as char);
                }
            }
        }

        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_has_default_length() {
        let id = RandomIdGenerator::default().generate().unwrap();
        assert_eq!(id.len(), DEFAULT_ID_LENGTH);
    }

    #[test]
    fn test_generate_respects_custom_length() {
        let id = RandomIdGenerator::new(21).generate().unwrap();
        assert_eq!(id.len(), 21);
    }

    #[test]
    fn test_generate_uses_restricted_alphabet() {
        let generator = RandomIdGenerator::default();

        for _ in 0..100 {
            let id = generator.generate().unwrap();
            assert!(
                id.bytes().all(|b| ALPHABET.contains(&b)),
                "unexpected character in '{}'",
                id
            );
        }
    }

    #[test]
    fn test_generate_excludes_ambiguous_characters() {
        for ambiguous in [b'0', b'O', b'1', b'l', b'I'] {
            assert!(!ALPHABET.contains(&ambiguous));
        }
    }

    #[test]
    fn test_generate_produces_unique_ids() {
        let generator = RandomIdGenerator::default();
        let mut ids = HashSet::new();

        for _ in 0..1000 {
            ids.insert(generator.generate().unwrap());
        }

        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_rejection_threshold_is_multiple_of_alphabet() {
        assert_eq!(REJECTION_THRESHOLD as usize % ALPHABET.len(), 0);
        assert_eq!(ALPHABET.len(), 57);
    }
}
