//! Colony configuration, validation, and spawn policy.
//!
//! [`ColonyConfig`] is the builder-input for constructing a colony.
//! [`validate()`](ColonyConfig::validate) checks every structural
//! invariant at startup; nothing here can fail mid-run.

use formica_core::{ConfigError, Pos, TurnKernel};
use formica_lattice::PheromoneField;

/// Where newly added agents are placed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpawnPolicy {
    /// The grid center cell (reference behavior).
    Center,
    /// A fixed cell, which must lie in the valid interior.
    Fixed(Pos),
}

/// Construction-time parameters for a [`Colony`](crate::Colony).
///
/// Plain public fields plus [`validate()`](ColonyConfig::validate),
/// checked once by [`Colony::new`](crate::Colony::new). The `Default`
/// impl is the reference run: a 256×256 grid, deposition 6, saturation
/// 6, unit decay, perfect fidelity, and the reference turning kernel.
#[derive(Clone, Debug)]
pub struct ColonyConfig {
    /// Grid width in cells.
    pub width: u32,
    /// Grid height in cells.
    pub height: u32,
    /// Concentration added per deposit.
    pub deposition_rate: f32,
    /// Concentration ceiling per cell.
    pub saturation: f32,
    /// Concentration removed per evaporation pass.
    pub decay_step: f32,
    /// Probability of staying on a sensed trail each step, in [0, 1].
    pub fidelity: f64,
    /// Turn-magnitude distribution used while exploring.
    pub kernel: TurnKernel,
    /// Placement of newly added agents.
    pub spawn: SpawnPolicy,
    /// Seed for the colony's ChaCha8 decision generator.
    pub seed: u64,
}

impl Default for ColonyConfig {
    fn default() -> Self {
        Self {
            width: 256,
            height: 256,
            deposition_rate: 6.0,
            saturation: 6.0,
            decay_step: 1.0,
            fidelity: 1.0,
            kernel: TurnKernel::REFERENCE,
            spawn: SpawnPolicy::Center,
            seed: 0,
        }
    }
}

impl ColonyConfig {
    /// Check all structural invariants.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found: grid or dynamics
    /// parameters the lattice would reject, a fidelity outside [0, 1],
    /// or a fixed spawn cell outside the valid interior. The kernel is
    /// validated by construction and needs no re-check.
    pub fn validate(&self) -> Result<(), ConfigError> {
        PheromoneField::validate_params(
            self.width,
            self.height,
            self.deposition_rate,
            self.saturation,
            self.decay_step,
        )?;
        if !self.fidelity.is_finite() || !(0.0..=1.0).contains(&self.fidelity) {
            return Err(ConfigError::FidelityOutOfRange {
                value: self.fidelity,
            });
        }
        if let SpawnPolicy::Fixed(pos) = self.spawn {
            let inside = pos.x >= 1
                && pos.x <= self.width as i32 - 2
                && pos.y >= 1
                && pos.y <= self.height as i32 - 2;
            if !inside {
                return Err(ConfigError::SpawnOutsideInterior { pos });
            }
        }
        Ok(())
    }

    /// Resolve the spawn policy to a concrete cell.
    pub(crate) fn spawn_pos(&self, field: &PheromoneField) -> Pos {
        match self.spawn {
            SpawnPolicy::Center => field.center(),
            SpawnPolicy::Fixed(pos) => pos,
        }
    }
}
