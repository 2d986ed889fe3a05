//! Per-position branching formulas.

use possibilities_types::{EstimateError, Result, Variant};

/// Alphabet length the decay model starts from.
pub const DEFAULT_ALPHABET_LENGTH: u32 = 40;

/// Branching factor of the decay model at position `index`: `100 / (index + 4)`.
#[must_use]
pub const fn formula_a(index: usize) -> f64 {
    100.0 / (index as f64 + 4.0)
}

/// Branching factor of the harmonic model at position `index`: `60 / (index + 1) + 1`.
#[must_use]
pub const fn formula_b(index: usize) -> f64 {
    60.0 / (index as f64 + 1.0) + 1.0
}

/// A branching model: where the product starts and which factor each position contributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchingModel {
    /// Starts at the alphabet length, positions `1..length`.
    Decay {
        /// Number of symbols available at the first position.
        alphabet_length: u32,
    },
    /// Starts at 1, positions `0..length`.
    Harmonic,
}

impl BranchingModel {
    /// Creates the model for a variant with the default alphabet.
    #[must_use]
    pub const fn new(variant: Variant) -> Self {
        match variant {
            Variant::Decay => Self::Decay {
                alphabet_length: DEFAULT_ALPHABET_LENGTH,
            },
            Variant::Harmonic => Self::Harmonic,
        }
    }

    /// Creates a decay model starting from a custom alphabet length.
    ///
    /// # Errors
    ///
    /// Returns an error if the alphabet is empty.
    pub const fn decay(alphabet_length: u32) -> Result<Self> {
        if alphabet_length == 0 {
            return Err(EstimateError::InvalidAlphabet);
        }
        Ok(Self::Decay { alphabet_length })
    }

    /// Returns the variant this model implements.
    #[must_use]
    pub const fn variant(&self) -> Variant {
        match self {
            Self::Decay { .. } => Variant::Decay,
            Self::Harmonic => Variant::Harmonic,
        }
    }

    /// Returns the value the running product starts from.
    #[must_use]
    pub fn initial(&self) -> f64 {
        match self {
            Self::Decay { alphabet_length } => f64::from(*alphabet_length),
            Self::Harmonic => 1.0,
        }
    }

    /// Returns the first position that contributes a factor.
    ///
    /// The decay model covers position 0 with its starting value.
    #[must_use]
    pub const fn first_index(&self) -> usize {
        match self {
            Self::Decay { .. } => 1,
            Self::Harmonic => 0,
        }
    }

    /// Returns the unhalved branching factor at `index`.
    #[must_use]
    pub const fn factor(&self, index: usize) -> f64 {
        match self {
            Self::Decay { .. } => formula_a(index),
            Self::Harmonic => formula_b(index),
        }
    }
}

impl Default for BranchingModel {
    fn default() -> Self {
        Self::new(Variant::default())
    }
}

impl From<Variant> for BranchingModel {
    fn from(variant: Variant) -> Self {
        Self::new(variant)
    }
}
