//! Random string generation.

use rand::Rng;
use thiserror::Error;

use crate::text::types::Pattern;

const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const MIXED: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Errors returned by [`StringGenerator`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    /// Requested length is below one.
    #[error("n must be greater than 0")]
    InvalidLength(i64),

    /// Requested length is above the configured cap.
    #[error("n must not exceed {max}")]
    TooLong { requested: i64, max: usize },
}

/// Character pool for a pattern. Unknown patterns draw from both cases.
pub fn pool_for(pattern: Option<Pattern>) -> &'static [u8] {
    match pattern {
        Some(Pattern::Lower) => LOWERCASE,
        Some(Pattern::Upper) => UPPERCASE,
        Some(Pattern::Mixed) | None => MIXED,
    }
}

/// Produces random strings drawn from a pattern's pool.
#[derive(Debug, Clone, Copy)]
pub struct StringGenerator {
    max_length: usize,
}

impl StringGenerator {
    pub fn new(max_length: usize) -> Self {
        Self { max_length }
    }

    /// Generate `n` characters using the thread-local RNG.
    pub fn generate(&self, n: i64, pattern: Option<Pattern>) -> Result<String, GenerateError> {
        self.generate_with(&mut rand::thread_rng(), n, pattern)
    }

    /// Generate `n` characters drawn uniformly, with replacement, from `rng`.
    pub fn generate_with<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        n: i64,
        pattern: Option<Pattern>,
    ) -> Result<String, GenerateError> {
        if n < 1 {
            return Err(GenerateError::InvalidLength(n));
        }
        let len = usize::try_from(n)
            .ok()
            .filter(|len| *len <= self.max_length)
            .ok_or(GenerateError::TooLong {
                requested: n,
                max: self.max_length,
            })?;

        let pool = pool_for(pattern);
        let generated = (0..len)
            .map(|_| char::from(pool[rng.gen_range(0..pool.len())]))
            .collect();

        Ok(generated)
    }
}
