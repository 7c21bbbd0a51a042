//! The [`PheromoneField`] scalar lattice.

use formica_core::{ConfigError, Pos};

/// A bounded W×H grid of non-negative pheromone concentrations.
///
/// Cells are stored row-major (`y * width + x`) as `f32`, zero-initialized.
/// Every cell value stays inside `[0, saturation]` for the lifetime of the
/// field: deposits cap at the saturation ceiling and evaporation floors
/// at zero.
///
/// The outermost one-cell border is inside the array but outside the
/// *valid interior* — agents are removed once they reach it, which
/// guarantees diagonal sensing from any live position never indexes
/// outside the array.
///
/// # Examples
///
/// ```
/// use formica_core::Pos;
/// use formica_lattice::PheromoneField;
///
/// let mut field = PheromoneField::new(16, 16, 6.0, 6.0, 1.0).unwrap();
/// let p = field.center();
/// field.deposit(p);
/// assert_eq!(field.concentration(p), 6.0);
/// field.evaporate();
/// assert_eq!(field.concentration(p), 5.0);
/// assert_eq!(field.concentration(Pos::new(0, 0)), 0.0);
/// ```
#[derive(Clone, Debug)]
pub struct PheromoneField {
    width: u32,
    height: u32,
    deposition_rate: f32,
    saturation: f32,
    decay_step: f32,
    cells: Vec<f32>,
}

impl PheromoneField {
    /// Create a zeroed field.
    ///
    /// # Errors
    ///
    /// Fails fast at construction (never mid-run) on:
    /// - [`ConfigError::GridTooSmall`] if either dimension is below 3
    ///   (no interior would remain inside the sensing margin),
    /// - [`ConfigError::NonPositiveDeposition`],
    ///   [`ConfigError::NonPositiveSaturation`], or
    ///   [`ConfigError::NonPositiveDecay`] for non-positive or non-finite
    ///   dynamics parameters.
    pub fn new(
        width: u32,
        height: u32,
        deposition_rate: f32,
        saturation: f32,
        decay_step: f32,
    ) -> Result<Self, ConfigError> {
        Self::validate_params(width, height, deposition_rate, saturation, decay_step)?;
        Ok(Self {
            width,
            height,
            deposition_rate,
            saturation,
            decay_step,
            cells: vec![0.0; width as usize * height as usize],
        })
    }

    /// Check field parameters without allocating a grid.
    ///
    /// Shared by [`new`](Self::new) and colony-level config validation,
    /// so both report the same [`ConfigError`] for the same input.
    pub fn validate_params(
        width: u32,
        height: u32,
        deposition_rate: f32,
        saturation: f32,
        decay_step: f32,
    ) -> Result<(), ConfigError> {
        if width < 3 || height < 3 {
            return Err(ConfigError::GridTooSmall { width, height });
        }
        if !deposition_rate.is_finite() || deposition_rate <= 0.0 {
            return Err(ConfigError::NonPositiveDeposition {
                value: deposition_rate,
            });
        }
        if !saturation.is_finite() || saturation <= 0.0 {
            return Err(ConfigError::NonPositiveSaturation { value: saturation });
        }
        if !decay_step.is_finite() || decay_step <= 0.0 {
            return Err(ConfigError::NonPositiveDecay { value: decay_step });
        }
        Ok(())
    }

    /// Grid width in cells.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Grid height in cells.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The per-deposit concentration increment.
    pub fn deposition_rate(&self) -> f32 {
        self.deposition_rate
    }

    /// The concentration ceiling no cell may exceed.
    pub fn saturation(&self) -> f32 {
        self.saturation
    }

    /// The per-step evaporation decrement.
    pub fn decay_step(&self) -> f32 {
        self.decay_step
    }

    /// The cell agents spawn on under the center policy.
    pub fn center(&self) -> Pos {
        Pos::new((self.width as i32 - 1) / 2, (self.height as i32 - 1) / 2)
    }

    /// Whether `pos` lies anywhere inside the array.
    pub fn contains(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.x < self.width as i32 && pos.y >= 0 && pos.y < self.height as i32
    }

    /// Whether `pos` lies in the valid interior `[1, W−2] × [1, H−2]`.
    ///
    /// Agents outside the interior are removed before they can sense,
    /// so every sensed neighbor cell stays inside the array.
    pub fn in_interior(&self, pos: Pos) -> bool {
        pos.x >= 1 && pos.x <= self.width as i32 - 2 && pos.y >= 1 && pos.y <= self.height as i32 - 2
    }

    fn index(&self, pos: Pos) -> usize {
        pos.y as usize * self.width as usize + pos.x as usize
    }

    /// Add one deposit at `pos`, capped at the saturation ceiling.
    ///
    /// In-bounds is a caller guarantee: live agents only ever occupy
    /// array cells. A violation is a bug in the boundary-margin logic.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the array.
    pub fn deposit(&mut self, pos: Pos) {
        assert!(self.contains(pos), "deposit at {pos} outside the lattice");
        let idx = self.index(pos);
        self.cells[idx] = (self.cells[idx] + self.deposition_rate).min(self.saturation);
    }

    /// Evaporate every positive cell by one decay step, flooring at zero.
    ///
    /// Applied exactly once per simulation step, after all agents moved.
    pub fn evaporate(&mut self) {
        for v in &mut self.cells {
            if *v > 0.0 {
                *v = (*v - self.decay_step).max(0.0);
            }
        }
    }

    /// The concentration at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the array. Sensing positions are
    /// derived from interior cells and cannot violate this.
    pub fn concentration(&self, pos: Pos) -> f32 {
        assert!(self.contains(pos), "read at {pos} outside the lattice");
        self.cells[self.index(pos)]
    }

    /// Bounds-checked read for external callers.
    pub fn get(&self, pos: Pos) -> Option<f32> {
        self.contains(pos).then(|| self.cells[self.index(pos)])
    }

    /// The raw row-major grid, for visualizers and metrics exporters.
    pub fn cells(&self) -> &[f32] {
        &self.cells
    }
}
