//! Case conversion with iterative and recursive strategies.
//!
//! # Pattern semantics
//! ```text
//! lower            → uppercase
//! upper            → lowercase
//! mixed + to_upper → uppercase
//! mixed + to_lower → lowercase
//! mixed + swap     → swap case
//! mixed + other    → unchanged
//! other            → unchanged
//! ```
//!
//! The `lower`/`upper` inversion is part of the public contract and clients
//! depend on it.
//!
//! # Recursion bound
//! The recursive strategy uses one stack frame per character. Its input length
//! is checked against [`ConversionConfig::max_recursive_length`] before the
//! descent starts, so an oversized input is rejected rather than crashing the
//! worker thread.

use thiserror::Error;

use crate::config::ConversionConfig;
use crate::text::types::{Algorithm, Direction, Pattern};

/// Errors returned by [`CaseConverter::convert`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// Input too long for the recursive strategy.
    #[error("Recursion depth exceeded. Try iterative algorithm.")]
    StackExhausted {
        length: usize,
        max_recommended_length: usize,
    },
}

/// Per-character transform selected by a pattern/direction pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    Upper,
    Lower,
    Swap,
    Identity,
}

impl Transform {
    pub fn select(pattern: Option<Pattern>, direction: Option<Direction>) -> Self {
        match (pattern, direction) {
            (Some(Pattern::Lower), _) => Self::Upper,
            (Some(Pattern::Upper), _) => Self::Lower,
            (Some(Pattern::Mixed), Some(Direction::ToUpper)) => Self::Upper,
            (Some(Pattern::Mixed), Some(Direction::ToLower)) => Self::Lower,
            (Some(Pattern::Mixed), Some(Direction::Swap)) => Self::Swap,
            (Some(Pattern::Mixed), None) | (None, _) => Self::Identity,
        }
    }

    /// Append the transformed form of `c` to `out`.
    ///
    /// Full Unicode case mapping applies, so one input character may expand
    /// to several output characters (`ß` uppercases to `SS`).
    fn push(self, c: char, out: &mut String) {
        match self {
            Self::Upper => out.extend(c.to_uppercase()),
            Self::Lower => out.extend(c.to_lowercase()),
            Self::Swap if c.is_lowercase() => out.extend(c.to_uppercase()),
            Self::Swap if c.is_uppercase() => out.extend(c.to_lowercase()),
            Self::Swap | Self::Identity => out.push(c),
        }
    }
}

/// Applies case transforms using a configured strategy bound.
#[derive(Debug, Clone, Copy)]
pub struct CaseConverter {
    max_recursive_length: usize,
}

impl CaseConverter {
    pub fn new(config: &ConversionConfig) -> Self {
        Self {
            max_recursive_length: config.max_recursive_length,
        }
    }

    pub fn max_recursive_length(&self) -> usize {
        self.max_recursive_length
    }

    /// Convert `text` with the given strategy.
    pub fn convert(
        &self,
        text: &str,
        algorithm: Algorithm,
        pattern: Option<Pattern>,
        direction: Option<Direction>,
    ) -> Result<String, ConversionError> {
        let transform = Transform::select(pattern, direction);
        match algorithm {
            Algorithm::Iterative => Ok(convert_iterative(text, transform)),
            Algorithm::Recursive => {
                let chars: Vec<char> = text.chars().collect();
                if chars.len() > self.max_recursive_length {
                    return Err(ConversionError::StackExhausted {
                        length: chars.len(),
                        max_recommended_length: self.max_recursive_length,
                    });
                }
                let mut out = String::with_capacity(text.len());
                convert_recursive(&chars, transform, &mut out);
                Ok(out)
            }
        }
    }
}

fn convert_iterative(text: &str, transform: Transform) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        transform.push(c, &mut out);
    }
    out
}

/// Transform the head, then descend into the tail, appending to `out`.
fn convert_recursive(chars: &[char], transform: Transform, out: &mut String) {
    if let Some((head, tail)) = chars.split_first() {
        transform.push(*head, out);
        convert_recursive(tail, transform, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::validation::MAX_RECURSIVE_LENGTH_CEILING;
    use proptest::prelude::*;

    fn converter() -> CaseConverter {
        CaseConverter::new(&ConversionConfig::default())
    }

    fn both(text: &str, pattern: Option<Pattern>, direction: Option<Direction>) -> String {
        let c = converter();
        let iterative = c.convert(text, Algorithm::Iterative, pattern, direction).unwrap();
        let recursive = c.convert(text, Algorithm::Recursive, pattern, direction).unwrap();
        assert_eq!(iterative, recursive);
        iterative
    }

    #[test]
    fn test_inverted_pattern_names() {
        assert_eq!(both("Hello", Some(Pattern::Lower), None), "HELLO");
        assert_eq!(both("Hello", Some(Pattern::Upper), None), "hello");
        // direction is ignored outside `mixed`
        assert_eq!(both("Hello", Some(Pattern::Lower), Some(Direction::ToLower)), "HELLO");
    }

    #[test]
    fn test_mixed_directions() {
        assert_eq!(both("Hello", Some(Pattern::Mixed), Some(Direction::Swap)), "hELLO");
        assert_eq!(both("Hello", Some(Pattern::Mixed), Some(Direction::ToUpper)), "HELLO");
        assert_eq!(both("Hello", Some(Pattern::Mixed), Some(Direction::ToLower)), "hello");
        assert_eq!(both("Hello", Some(Pattern::Mixed), None), "Hello");
    }

    #[test]
    fn test_unknown_pattern_is_identity() {
        assert_eq!(both("MiXeD 123", None, Some(Direction::Swap)), "MiXeD 123");
    }

    #[test]
    fn test_non_letters_untouched_by_swap() {
        assert_eq!(both("a1-B_ ç", Some(Pattern::Mixed), Some(Direction::Swap)), "A1-b_ Ç");
    }

    #[test]
    fn test_full_case_mapping() {
        assert_eq!(both("straße", Some(Pattern::Lower), None), "STRASSE");
    }

    #[test]
    fn test_recursive_rejects_oversized_input() {
        let c = CaseConverter::new(&ConversionConfig {
            max_recursive_length: 8,
        });
        let text = "abcdefghi";

        let err = c
            .convert(text, Algorithm::Recursive, Some(Pattern::Lower), None)
            .unwrap_err();
        assert_eq!(
            err,
            ConversionError::StackExhausted {
                length: 9,
                max_recommended_length: 8,
            }
        );
        assert_eq!(err.to_string(), "Recursion depth exceeded. Try iterative algorithm.");

        let ok = c.convert(text, Algorithm::Iterative, Some(Pattern::Lower), None).unwrap();
        assert_eq!(ok, "ABCDEFGHI");
    }

    #[test]
    fn test_recursive_accepts_input_at_limit() {
        let c = converter();
        let text = "x".repeat(c.max_recursive_length());
        let out = c.convert(&text, Algorithm::Recursive, Some(Pattern::Lower), None).unwrap();
        assert_eq!(out, "X".repeat(c.max_recursive_length()));
    }

    #[test]
    fn test_recursive_at_ceiling_fits_worker_stack() {
        let handle = std::thread::Builder::new()
            .stack_size(2 * 1024 * 1024)
            .spawn(|| {
                let c = CaseConverter::new(&ConversionConfig {
                    max_recursive_length: MAX_RECURSIVE_LENGTH_CEILING,
                });
                let text = "a".repeat(MAX_RECURSIVE_LENGTH_CEILING);
                c.convert(&text, Algorithm::Recursive, Some(Pattern::Lower), None)
            })
            .unwrap();

        let out = handle.join().unwrap().unwrap();
        assert_eq!(out.len(), MAX_RECURSIVE_LENGTH_CEILING);
        assert!(out.chars().all(|c| c == 'A'));
    }

    #[test]
    fn test_limit_counts_characters_not_bytes() {
        let c = CaseConverter::new(&ConversionConfig {
            max_recursive_length: 3,
        });
        assert!(c.convert("éèê", Algorithm::Recursive, None, None).is_ok());
    }

    fn pattern_strategy() -> impl Strategy<Value = Option<Pattern>> {
        prop_oneof![
            Just(None),
            Just(Some(Pattern::Lower)),
            Just(Some(Pattern::Upper)),
            Just(Some(Pattern::Mixed)),
        ]
    }

    fn direction_strategy() -> impl Strategy<Value = Option<Direction>> {
        prop_oneof![
            Just(None),
            Just(Some(Direction::ToUpper)),
            Just(Some(Direction::ToLower)),
            Just(Some(Direction::Swap)),
        ]
    }

    proptest! {
        #[test]
        fn prop_strategies_agree(
            text in "\\PC{0,200}",
            pattern in pattern_strategy(),
            direction in direction_strategy(),
        ) {
            let c = converter();
            let iterative = c.convert(&text, Algorithm::Iterative, pattern, direction).unwrap();
            let recursive = c.convert(&text, Algorithm::Recursive, pattern, direction).unwrap();
            prop_assert_eq!(iterative, recursive);
        }

        #[test]
        fn prop_to_upper_is_idempotent(text in "[a-zA-Z0-9 ]{0,200}") {
            let c = converter();
            let mixed = Some(Pattern::Mixed);
            let once = c.convert(&text, Algorithm::Iterative, mixed, Some(Direction::ToUpper)).unwrap();
            let twice = c.convert(&once, Algorithm::Iterative, mixed, Some(Direction::ToUpper)).unwrap();
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn prop_to_lower_is_idempotent(text in "[a-zA-Z0-9 ]{0,200}") {
            let c = converter();
            let mixed = Some(Pattern::Mixed);
            let once = c.convert(&text, Algorithm::Iterative, mixed, Some(Direction::ToLower)).unwrap();
            let twice = c.convert(&once, Algorithm::Iterative, mixed, Some(Direction::ToLower)).unwrap();
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn prop_swap_is_involution(text in "[a-zA-Z0-9 .,!?-]{0,200}") {
            let c = converter();
            let mixed = Some(Pattern::Mixed);
            let once = c.convert(&text, Algorithm::Recursive, mixed, Some(Direction::Swap)).unwrap();
            let twice = c.convert(&once, Algorithm::Recursive, mixed, Some(Direction::Swap)).unwrap();
            prop_assert_eq!(twice, text);
        }
    }
}
