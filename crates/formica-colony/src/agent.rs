//! A single trail-laying, trail-following agent.
//!
//! The step policy is the heart of the simulation. Each step an agent
//! deposits at its position, then either follows pheromone it senses
//! ahead of it or reverts to kernel-driven exploration. Leaving the
//! valid interior is not an error: it is the removal transition, and
//! the colony handles it.

use formica_core::{AgentId, DecisionRng, Heading, Pos, Side, TurnKernel};
use formica_lattice::PheromoneField;
use smallvec::SmallVec;

/// What a call to [`Agent::step`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// The agent deposited and moved to its new position.
    Moved,
    /// The agent left the valid interior and must be removed.
    ///
    /// The deposit at the old position still happened; no movement did.
    Exited,
}

/// A mobile agent on the shared pheromone lattice.
///
/// Agents hold no reference to the field; the colony owns the single
/// field instance and lends it to each agent for the duration of its
/// step. Fidelity and the turning kernel are copied from the colony
/// configuration at spawn time and fixed for the agent's lifetime.
#[derive(Clone, Debug)]
pub struct Agent {
    pub(crate) id: AgentId,
    pub(crate) pos: Pos,
    pub(crate) heading: Heading,
    pub(crate) lost: bool,
    pub(crate) fidelity: f64,
    pub(crate) kernel: TurnKernel,
}

impl Agent {
    /// Spawn an agent at `pos` with a uniformly random diagonal heading.
    ///
    /// New agents start lost: they have not yet made a trail-following
    /// decision.
    pub fn spawn<R: DecisionRng + ?Sized>(
        id: AgentId,
        pos: Pos,
        fidelity: f64,
        kernel: TurnKernel,
        rng: &mut R,
    ) -> Self {
        let heading = Heading::DIAGONALS[rng.pick(Heading::DIAGONALS.len())];
        Self {
            id,
            pos,
            heading,
            lost: true,
            fidelity,
            kernel,
        }
    }

    /// The agent's caller-assigned identity.
    pub fn id(&self) -> AgentId {
        self.id
    }

    /// Current grid position.
    pub fn pos(&self) -> Pos {
        self.pos
    }

    /// Current heading.
    pub fn heading(&self) -> Heading {
        self.heading
    }

    /// Whether the most recent decision was an exploration step.
    pub fn is_lost(&self) -> bool {
        self.lost
    }

    /// Probability of staying on a sensed trail each step.
    pub fn fidelity(&self) -> f64 {
        self.fidelity
    }

    /// The agent's turning kernel.
    pub fn kernel(&self) -> &TurnKernel {
        &self.kernel
    }

    /// Advance one step: deposit, then decide and move.
    ///
    /// In order: assume trail-following, deposit at the current cell,
    /// signal removal if outside the valid interior, explore if nothing
    /// is sensed or the fidelity draw fails, move straight onto a trail
    /// directly ahead, explore on a symmetric fork, otherwise pick a
    /// fork by concentration-weighted turn selection.
    pub fn step<R: DecisionRng + ?Sized>(
        &mut self,
        field: &mut PheromoneField,
        rng: &mut R,
    ) -> StepOutcome {
        // Assume following; every explore path below overwrites this.
        self.lost = false;

        field.deposit(self.pos);

        if !field.in_interior(self.pos) {
            return StepOutcome::Exited;
        }

        let surround = self.sense(field);

        // Nothing to follow anywhere nearby.
        if surround.iter().sum::<f32>() == 0.0 {
            self.explore(rng);
            return StepOutcome::Moved;
        }

        // Fidelity gate: the trail is lost with probability 1 - fidelity.
        if rng.uniform() >= self.fidelity {
            self.explore(rng);
            return StepOutcome::Moved;
        }

        // Trail directly ahead wins outright.
        if surround[0] > 0.0 {
            self.pos = self.pos.offset_by(self.heading);
            return StepOutcome::Moved;
        }

        // Symmetric fork: both 45° cells equal and both 90° cells equal
        // leaves no winner to follow.
        if surround[1] == surround[4] && surround[2] == surround[5] {
            self.explore(rng);
            return StepOutcome::Moved;
        }

        // Weighted turn selection: fork concentrations scaled by the
        // kernel's 45° and 90° weights. The two straight-ahead entries
        // carry weight zero; the ahead case was handled above.
        let k45 = self.kernel.weight(1);
        let k90 = self.kernel.weight(2);
        let weights = [
            0.0,
            f64::from(surround[1]) * k45,
            f64::from(surround[2]) * k90,
            0.0,
            f64::from(surround[4]) * k45,
            f64::from(surround[5]) * k90,
        ];
        if weights.iter().sum::<f64>() <= 0.0 {
            // A kernel with no mass on 45°/90° turns leaves nothing to
            // normalize; exploration is the only branch still defined.
            self.explore(rng);
            return StepOutcome::Moved;
        }
        let choice = rng.weighted(&weights);
        let (side, turn) = if choice < 3 {
            (Side::Right, choice)
        } else {
            (Side::Left, choice - 3)
        };
        self.heading = self.heading.rotated(side, turn);
        self.pos = self.pos.offset_by(self.heading);
        StepOutcome::Moved
    }

    /// Concentrations at the six candidate next-cells for the current
    /// heading: right side at turn magnitudes {0, 45, 90}°, then left
    /// side at {0, 45, 90}°.
    ///
    /// Entries 0 and 3 both resolve to the straight-ahead cell and are
    /// always equal — the redundancy keeps the weighting formula
    /// symmetric and is preserved deliberately.
    pub fn sense(&self, field: &PheromoneField) -> SmallVec<[f32; 6]> {
        let mut surround = SmallVec::new();
        for side in [Side::Right, Side::Left] {
            for turn in 0..3 {
                let next = self.pos.offset_by(self.heading.rotated(side, turn));
                surround.push(field.concentration(next));
            }
        }
        surround
    }

    /// Take an exploration step: kernel-driven turn, uniform side, one
    /// cell forward.
    ///
    /// Marks the agent lost. Performs no bounds check; the next step's
    /// interior test discovers an exit and triggers removal.
    fn explore<R: DecisionRng + ?Sized>(&mut self, rng: &mut R) {
        self.lost = true;
        let turn = rng.weighted(self.kernel.weights());
        let side = if rng.pick(2) == 0 { Side::Right } else { Side::Left };
        self.heading = self.heading.rotated(side, turn);
        self.pos = self.pos.offset_by(self.heading);
    }
}
