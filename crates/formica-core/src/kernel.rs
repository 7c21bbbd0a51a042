//! The turning kernel: a categorical distribution over turn magnitudes.

use crate::error::ConfigError;

/// Tolerance for the kernel-sums-to-one check.
const SUM_TOLERANCE: f64 = 1e-6;

/// A validated categorical distribution over turn magnitudes
/// {0°, 45°, 90°, 135°, 180°}, indexed by 45° turn count 0..=4.
///
/// Exploring agents draw their full turn magnitude from the kernel;
/// trail-following agents reuse the 45° and 90° entries to weight fork
/// concentrations during weighted turn selection.
///
/// Construction validates the weights once; a `TurnKernel` in hand is
/// always well-formed.
#[derive(Clone, Debug, PartialEq)]
pub struct TurnKernel {
    weights: [f64; 5],
}

impl TurnKernel {
    /// The kernel measured for the reference colony.
    ///
    /// Heavily favors going straight or nearly straight, with rare
    /// reversals.
    pub const REFERENCE: TurnKernel = TurnKernel {
        weights: [0.581, 0.36, 0.047, 0.008, 0.004],
    };

    /// Validate and build a kernel from per-magnitude weights.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidKernel`] if any weight is negative
    /// or not finite, or if the weights do not sum to 1 within `1e-6`.
    pub fn new(weights: [f64; 5]) -> Result<Self, ConfigError> {
        for (i, w) in weights.iter().enumerate() {
            if !w.is_finite() || *w < 0.0 {
                return Err(ConfigError::InvalidKernel {
                    reason: format!("weight {i} must be finite and >= 0, got {w}"),
                });
            }
        }
        let sum: f64 = weights.iter().sum();
        if (sum - 1.0).abs() > SUM_TOLERANCE {
            return Err(ConfigError::InvalidKernel {
                reason: format!("weights must sum to 1, got {sum}"),
            });
        }
        Ok(Self { weights })
    }

    /// The five weights, indexed by 45° turn count.
    pub fn weights(&self) -> &[f64; 5] {
        &self.weights
    }

    /// The weight for a single turn magnitude (0..=4 45° steps).
    ///
    /// # Panics
    ///
    /// Panics if `magnitude > 4`.
    pub fn weight(&self, magnitude: usize) -> f64 {
        self.weights[magnitude]
    }
}
