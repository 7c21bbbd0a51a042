//! Configuration error types.
//!
//! All configuration problems are detected at construction time and
//! never produced mid-run. Agents leaving the lattice are a lifecycle
//! transition, not an error, and have no type here.

use crate::heading::Pos;
use std::error::Error;
use std::fmt;

/// Errors detected while validating colony or lattice configuration.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// The turning kernel weights are malformed.
    InvalidKernel {
        /// Description of the validation failure.
        reason: String,
    },
    /// The per-deposit increment must be positive.
    NonPositiveDeposition {
        /// The rejected value.
        value: f32,
    },
    /// The saturation ceiling must be positive.
    NonPositiveSaturation {
        /// The rejected value.
        value: f32,
    },
    /// The per-step evaporation decrement must be positive.
    NonPositiveDecay {
        /// The rejected value.
        value: f32,
    },
    /// Fidelity is a probability and must lie in [0, 1].
    FidelityOutOfRange {
        /// The rejected value.
        value: f64,
    },
    /// The lattice needs a one-cell sensing margin, so both dimensions
    /// must be at least 3.
    GridTooSmall {
        /// Configured width.
        width: u32,
        /// Configured height.
        height: u32,
    },
    /// A fixed spawn position lies outside the valid interior.
    SpawnOutsideInterior {
        /// The rejected position.
        pos: Pos,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidKernel { reason } => write!(f, "invalid turning kernel: {reason}"),
            Self::NonPositiveDeposition { value } => {
                write!(f, "deposition_rate must be positive, got {value}")
            }
            Self::NonPositiveSaturation { value } => {
                write!(f, "saturation must be positive, got {value}")
            }
            Self::NonPositiveDecay { value } => {
                write!(f, "decay_step must be positive, got {value}")
            }
            Self::FidelityOutOfRange { value } => {
                write!(f, "fidelity must lie in [0, 1], got {value}")
            }
            Self::GridTooSmall { width, height } => {
                write!(f, "grid {width}x{height} has no interior; both dimensions must be >= 3")
            }
            Self::SpawnOutsideInterior { pos } => {
                write!(f, "spawn position {pos} is outside the valid interior")
            }
        }
    }
}

impl Error for ConfigError {}
