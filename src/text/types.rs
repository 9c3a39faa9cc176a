//! Selector types shared by the generator and the converter.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Character pool / transform selector.
///
/// Tags other than the three below are not an error: callers receive `None`
/// from [`Pattern::from_tag`] and fall back to their own default behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pattern {
    Lower,
    Upper,
    Mixed,
}

impl Pattern {
    /// Parse a wire tag, returning `None` for unrecognized values.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "lower" => Some(Self::Lower),
            "upper" => Some(Self::Upper),
            "mixed" => Some(Self::Mixed),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lower => "lower",
            Self::Upper => "upper",
            Self::Mixed => "mixed",
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sub-selector for the `mixed` pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    ToUpper,
    ToLower,
    Swap,
}

impl Direction {
    /// Parse a wire tag, returning `None` for unrecognized values.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "to_upper" => Some(Self::ToUpper),
            "to_lower" => Some(Self::ToLower),
            "swap" => Some(Self::Swap),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ToUpper => "to_upper",
            Self::ToLower => "to_lower",
            Self::Swap => "swap",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Conversion strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// Single left-to-right pass into one buffer.
    Iterative,
    /// Head-plus-tail descent, one stack frame per character.
    Recursive,
}

impl Algorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Iterative => "iterative",
            Self::Recursive => "recursive",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when an algorithm tag is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid algorithm")]
pub struct UnknownAlgorithm;

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "iterative" => Ok(Self::Iterative),
            "recursive" => Ok(Self::Recursive),
            _ => Err(UnknownAlgorithm),
        }
    }
}
