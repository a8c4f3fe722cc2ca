//! Settings for scanning input and weighting tree leaves.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// ASCII, the alphabet the command-line tool counts by default.
pub const DEFAULT_ALPHABET_SIZE: usize = 128;

/// Largest alphabet a byte stream can address.
pub const MAX_ALPHABET_SIZE: usize = 256;

/// How a symbol's occurrence count becomes its leaf weight.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Weighting {
    #[default]
    Count,
    /// `count / total`, so leaf weights sum to 1.
    Probability,
    /// `count / divisor`.
    Scaled { divisor: f64 },
}

impl Weighting {
    pub fn weight(&self, count: u64, total: u64) -> f64 {
        match *self {
            Weighting::Count => count as f64,
            Weighting::Probability if total == 0 => 0.0,
            Weighting::Probability => count as f64 / total as f64,
            Weighting::Scaled { divisor } => count as f64 / divisor,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Symbols `0..alphabet_size` are counted; other bytes are skipped.
    pub alphabet_size: usize,
    pub weighting: Weighting,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            alphabet_size: DEFAULT_ALPHABET_SIZE,
            weighting: Weighting::default(),
        }
    }
}

impl Config {
    pub fn new(alphabet_size: usize, weighting: Weighting) -> Result<Self> {
        let config = Self {
            alphabet_size,
            weighting,
        };
        config.validate()?;
        Ok(config)
    }

    /// Leaf weights must come out finite and non-negative.
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_ALPHABET_SIZE).contains(&self.alphabet_size) {
            return Err(Error::InvalidAlphabet(self.alphabet_size));
        }

        match self.weighting {
            Weighting::Scaled { divisor } if !(divisor.is_finite() && divisor > 0.0) => {
                Err(Error::InvalidDivisor(divisor))
            }
            _ => Ok(()),
        }
    }

    /// A queue this large can hold one leaf per symbol, and every combine
    /// step frees a slot before it reinserts.
    pub fn queue_capacity(&self) -> usize {
        self.alphabet_size
    }
}
