//! Prior likelihood of a word being the hidden word
//!
//! The raw corpus frequency is mapped to a non-negative weight. Normalizing by
//! the dictionary-wide total turns weights into prior probabilities.

use std::fmt;

/// Mapping from raw frequency to weight
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Likelihood {
    /// Weight proportional to raw frequency
    Linear,
    /// `1 / (1 + exp(-(freq - center) / slope))`
    ///
    /// Squashes extreme frequency outliers into (0, 1) so rare but valid words
    /// keep a meaningful share of the mass.
    Logistic { center: f64, slope: f64 },
}

impl Likelihood {
    /// Default logistic curve, centered at 80 occurrences with slope 15
    pub const DEFAULT_LOGISTIC: Self = Self::Logistic {
        center: 80.0,
        slope: 15.0,
    };

    /// Weight for a raw frequency
    #[must_use]
    pub fn weight(self, frequency: u64) -> f64 {
        let f = frequency as f64;
        match self {
            Self::Linear => f,
            Self::Logistic { center, slope } => 1.0 / (1.0 + (-(f - center) / slope).exp()),
        }
    }
}

impl Default for Likelihood {
    fn default() -> Self {
        Self::DEFAULT_LOGISTIC
    }
}

impl fmt::Display for Likelihood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear => write!(f, "linear"),
            Self::Logistic { center, slope } => write!(f, "logistic(c={center}, k={slope})"),
        }
    }
}

/// Policy name as accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum LikelihoodKind {
    Linear,
    #[default]
    #[value(alias = "sigmoid")]
    Logistic,
}

impl LikelihoodKind {
    /// Build the policy, using `center`/`slope` for the logistic curve
    #[must_use]
    pub const fn build(self, center: f64, slope: f64) -> Likelihood {
        match self {
            Self::Linear => Likelihood::Linear,
            Self::Logistic => Likelihood::Logistic { center, slope },
        }
    }
}
