//! Branching model variants.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Branching model used to estimate the search space.
///
/// Both variants halve every per-position factor before multiplying it in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Starts at the alphabet length and multiplies `100 / (i + 4)` for `i` in `1..length`.
    #[default]
    Decay,
    /// Starts at 1 and multiplies `60 / (i + 1) + 1` for `i` in `0..length`.
    Harmonic,
}

impl Variant {
    /// Returns the variant as a string identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Decay => "decay",
            Self::Harmonic => "harmonic",
        }
    }

    /// Returns the pattern length estimated when none is given.
    #[must_use]
    pub const fn default_length(&self) -> usize {
        match self {
            Self::Decay => 13,
            Self::Harmonic => 14,
        }
    }

    /// Returns the number of decimals the minutes line is rounded to.
    #[must_use]
    pub const fn minutes_precision(&self) -> u32 {
        match self {
            Self::Decay => 0,
            Self::Harmonic => 2,
        }
    }

    /// Returns true if the report ends with a dump of per-index factors.
    #[must_use]
    pub const fn has_factor_dump(&self) -> bool {
        matches!(self, Self::Harmonic)
    }

    /// Returns all available variants.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Decay, Self::Harmonic]
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Variant {
    type Err = VariantParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "a" | "decay" => Ok(Self::Decay),
            "b" | "harmonic" => Ok(Self::Harmonic),
            _ => Err(VariantParseError(s.to_string())),
        }
    }
}

/// Error returned when parsing an invalid variant string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantParseError(String);

impl std::fmt::Display for VariantParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid variant '{}', expected one of: a, decay, b, harmonic",
            self.0
        )
    }
}

impl std::error::Error for VariantParseError {}
