//! The colony: live-agent registry, per-step dispatch, and metrics.

use crate::agent::{Agent, StepOutcome};
use crate::config::ColonyConfig;
use formica_core::{AgentId, SeededRng, TickId};
use formica_lattice::PheromoneField;
use indexmap::IndexMap;
use std::error::Error;
use std::fmt;

/// Errors from colony operations after construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColonyError {
    /// An agent with this ID is already live in the colony.
    DuplicateAgent {
        /// The rejected ID.
        id: AgentId,
    },
}

impl fmt::Display for ColonyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateAgent { id } => write!(f, "agent {id} is already live"),
        }
    }
}

impl Error for ColonyError {}

/// What one call to [`Colony::step`] did.
///
/// The driver observes outcomes from here instead of digging through
/// colony internals. Counts describe the population *after* this step's
/// removals.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepReport {
    /// The tick just completed.
    pub tick: TickId,
    /// Agents removed this step, in processing order.
    pub exited: Vec<AgentId>,
    /// Live agents whose last decision followed a trail.
    pub following: usize,
    /// Live agents whose last decision was an exploration step.
    pub lost: usize,
}

/// A population of agents coupled through one shared pheromone field.
///
/// The colony owns the field, the live-agent registry, and the seeded
/// decision generator. Execution is single-threaded and synchronous:
/// [`step`](Colony::step) fully processes every live agent in
/// insertion order, then evaporates the field exactly once. Identical
/// configurations and agent-creation schedules replay identically.
///
/// # Examples
///
/// ```
/// use formica_colony::{Colony, ColonyConfig};
/// use formica_core::AgentId;
///
/// let mut colony = Colony::new(ColonyConfig::default()).unwrap();
/// colony.add_agent(AgentId(0)).unwrap();
/// let report = colony.step();
/// assert_eq!(report.lost + report.following, colony.agent_count());
/// ```
#[derive(Clone, Debug)]
pub struct Colony {
    field: PheromoneField,
    agents: IndexMap<AgentId, Agent>,
    config: ColonyConfig,
    rng: SeededRng,
    tick: TickId,
}

impl Colony {
    /// Build a colony from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`](formica_core::ConfigError)
    /// found by [`ColonyConfig::validate`]. Configuration problems are
    /// only ever surfaced here, never mid-run.
    pub fn new(config: ColonyConfig) -> Result<Self, formica_core::ConfigError> {
        config.validate()?;
        let field = PheromoneField::new(
            config.width,
            config.height,
            config.deposition_rate,
            config.saturation,
            config.decay_step,
        )?;
        let rng = SeededRng::from_seed(config.seed);
        Ok(Self {
            field,
            agents: IndexMap::new(),
            config,
            rng,
            tick: TickId(0),
        })
    }

    /// Spawn a new agent at the configured start position.
    ///
    /// The agent starts lost, with a uniformly random diagonal heading
    /// drawn from the colony generator.
    ///
    /// # Errors
    ///
    /// Returns [`ColonyError::DuplicateAgent`] if `id` is already live.
    pub fn add_agent(&mut self, id: AgentId) -> Result<(), ColonyError> {
        if self.agents.contains_key(&id) {
            return Err(ColonyError::DuplicateAgent { id });
        }
        let pos = self.config.spawn_pos(&self.field);
        let agent = Agent::spawn(
            id,
            pos,
            self.config.fidelity,
            self.config.kernel.clone(),
            &mut self.rng,
        );
        self.agents.insert(id, agent);
        Ok(())
    }

    /// Remove an agent from the live set.
    ///
    /// Removal is idempotent: removing an agent that is not live is a
    /// no-op returning `false`. Insertion order of the remaining agents
    /// is preserved.
    pub fn remove(&mut self, id: AgentId) -> bool {
        self.agents.shift_remove(&id).is_some()
    }

    /// Advance the whole colony one step.
    ///
    /// Snapshots the live IDs first, then advances each agent in
    /// insertion order, so removal mid-step cannot disturb iteration over
    /// the rest. After every agent has acted, the field evaporates
    /// exactly once and the tick advances. Domain exits are lifecycle,
    /// not errors: `step` never fails.
    pub fn step(&mut self) -> StepReport {
        let ids: Vec<AgentId> = self.agents.keys().copied().collect();
        let mut exited = Vec::new();

        for id in ids {
            let Some(agent) = self.agents.get_mut(&id) else {
                continue;
            };
            match agent.step(&mut self.field, &mut self.rng) {
                StepOutcome::Moved => {}
                StepOutcome::Exited => {
                    self.agents.shift_remove(&id);
                    exited.push(id);
                }
            }
        }

        self.field.evaporate();
        self.tick = TickId(self.tick.0 + 1);

        let lost = self.agents.values().filter(|a| a.is_lost()).count();
        StepReport {
            tick: self.tick,
            exited,
            following: self.agents.len() - lost,
            lost,
        }
    }

    /// Ratio of following to lost agents.
    ///
    /// With zero lost agents the following count itself is returned,
    /// the sentinel that keeps the metric finite when every agent is on
    /// a trail.
    pub fn trail_strength(&self) -> f64 {
        let lost = self.agents.values().filter(|a| a.is_lost()).count();
        let following = self.agents.len() - lost;
        if lost == 0 {
            following as f64
        } else {
            following as f64 / lost as f64
        }
    }

    /// The shared pheromone field.
    pub fn field(&self) -> &PheromoneField {
        &self.field
    }

    /// The raw row-major concentration grid, for visualizers.
    pub fn field_cells(&self) -> &[f32] {
        self.field.cells()
    }

    /// Live agents in insertion order.
    pub fn agents(&self) -> impl Iterator<Item = &Agent> {
        self.agents.values()
    }

    /// A live agent by ID.
    pub fn agent(&self, id: AgentId) -> Option<&Agent> {
        self.agents.get(&id)
    }

    /// Whether `id` is currently live.
    pub fn contains_agent(&self, id: AgentId) -> bool {
        self.agents.contains_key(&id)
    }

    /// Number of live agents.
    pub fn agent_count(&self) -> usize {
        self.agents.len()
    }

    /// Ticks completed so far.
    pub fn tick(&self) -> TickId {
        self.tick
    }

    /// The configuration the colony was built from.
    pub fn config(&self) -> &ColonyConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SpawnPolicy;
    use formica_core::{Heading, Pos, TurnKernel};

    fn small_config(seed: u64) -> ColonyConfig {
        ColonyConfig {
            width: 32,
            height: 32,
            seed,
            ..Default::default()
        }
    }

    /// Fabricate a live agent with a chosen lost flag, bypassing the
    /// spawn draw.
    fn put_agent(colony: &mut Colony, id: u32, lost: bool) {
        let agent = Agent {
            id: AgentId(id),
            pos: colony.field.center(),
            heading: Heading::NorthEast,
            lost,
            fidelity: colony.config.fidelity,
            kernel: colony.config.kernel.clone(),
        };
        colony.agents.insert(AgentId(id), agent);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut colony = Colony::new(small_config(1)).unwrap();
        colony.add_agent(AgentId(7)).unwrap();
        assert_eq!(
            colony.add_agent(AgentId(7)),
            Err(ColonyError::DuplicateAgent { id: AgentId(7) })
        );
        assert_eq!(colony.agent_count(), 1);
    }

    #[test]
    fn removed_id_can_be_reused() {
        let mut colony = Colony::new(small_config(1)).unwrap();
        colony.add_agent(AgentId(7)).unwrap();
        assert!(colony.remove(AgentId(7)));
        colony.add_agent(AgentId(7)).unwrap();
        assert!(colony.contains_agent(AgentId(7)));
    }

    #[test]
    fn remove_is_idempotent() {
        let mut colony = Colony::new(small_config(1)).unwrap();
        colony.add_agent(AgentId(0)).unwrap();
        assert!(colony.remove(AgentId(0)));
        assert!(!colony.remove(AgentId(0)));
        assert!(!colony.remove(AgentId(99)));
    }

    #[test]
    fn spawn_uses_the_configured_fixed_cell() {
        let config = ColonyConfig {
            spawn: SpawnPolicy::Fixed(Pos::new(5, 9)),
            ..small_config(2)
        };
        let mut colony = Colony::new(config).unwrap();
        colony.add_agent(AgentId(0)).unwrap();
        assert_eq!(colony.agent(AgentId(0)).unwrap().pos(), Pos::new(5, 9));
    }

    #[test]
    fn trail_strength_sentinel_without_lost_agents() {
        let mut colony = Colony::new(small_config(3)).unwrap();
        assert_eq!(colony.trail_strength(), 0.0);
        put_agent(&mut colony, 0, false);
        put_agent(&mut colony, 1, false);
        put_agent(&mut colony, 2, false);
        assert_eq!(colony.trail_strength(), 3.0);
    }

    #[test]
    fn trail_strength_is_following_over_lost() {
        let mut colony = Colony::new(small_config(3)).unwrap();
        put_agent(&mut colony, 0, false);
        put_agent(&mut colony, 1, false);
        put_agent(&mut colony, 2, false);
        put_agent(&mut colony, 3, true);
        put_agent(&mut colony, 4, true);
        assert_eq!(colony.trail_strength(), 1.5);
    }

    #[test]
    fn step_evaporates_exactly_once() {
        let mut colony = Colony::new(small_config(4)).unwrap();
        // No agents: the only field mutation is the evaporation pass.
        colony.field.deposit(Pos::new(8, 8));
        let before = colony.field.concentration(Pos::new(8, 8));
        colony.step();
        assert_eq!(
            colony.field.concentration(Pos::new(8, 8)),
            before - colony.config.decay_step
        );
    }

    #[test]
    fn tick_advances_per_step() {
        let mut colony = Colony::new(small_config(5)).unwrap();
        assert_eq!(colony.tick(), TickId(0));
        colony.step();
        colony.step();
        assert_eq!(colony.tick(), TickId(2));
    }

    #[test]
    fn report_counts_match_population() {
        let mut colony = Colony::new(small_config(6)).unwrap();
        for i in 0..5 {
            colony.add_agent(AgentId(i)).unwrap();
        }
        let report = colony.step();
        assert_eq!(report.tick, TickId(1));
        assert_eq!(
            report.following + report.lost + report.exited.len(),
            5,
            "every agent is accounted for"
        );
        assert_eq!(report.following + report.lost, colony.agent_count());
    }

    #[test]
    fn first_step_on_an_empty_field_explores() {
        // Reference scenario: single agent, default parameters,
        // perfect fidelity. The empty field forces exploration.
        let mut colony = Colony::new(ColonyConfig::default()).unwrap();
        colony.add_agent(AgentId(0)).unwrap();
        let center = colony.field.center();

        let report = colony.step();

        let agent = colony.agent(AgentId(0)).unwrap();
        assert!(agent.is_lost());
        assert_eq!(report.lost, 1);
        assert_eq!(report.following, 0);
        // Deposited 6 at the center, then one evaporation pass.
        assert_eq!(colony.field.concentration(center), 5.0);
        // Spawn headings are diagonal and exploration turned from one,
        // so the agent sits on one of the eight neighbors with both
        // coordinates changed by at most 1 and is no longer centered.
        let dx = (agent.pos().x - center.x).abs();
        let dy = (agent.pos().y - center.y).abs();
        assert!(dx <= 1 && dy <= 1 && (dx, dy) != (0, 0));
    }

    #[test]
    fn outward_bound_agent_is_removed_and_never_returns() {
        let mut colony = Colony::new(small_config(11)).unwrap();
        // A trail leading off the west edge: the agent at the interior
        // edge follows it onto the border, and the step after that is
        // the removal transition.
        colony.field.deposit(Pos::new(0, 5));
        let agent = Agent {
            id: AgentId(0),
            pos: Pos::new(1, 5),
            heading: Heading::West,
            lost: true,
            fidelity: 1.0,
            kernel: TurnKernel::REFERENCE,
        };
        colony.agents.insert(AgentId(0), agent);

        let report = colony.step();
        assert!(report.exited.is_empty());
        assert_eq!(colony.agent(AgentId(0)).unwrap().pos(), Pos::new(0, 5));

        let report = colony.step();
        assert_eq!(report.exited, vec![AgentId(0)]);
        assert!(!colony.contains_agent(AgentId(0)));
        assert_eq!(colony.agent_count(), 0);
        // The border deposit still happened before removal.
        assert!(colony.field.concentration(Pos::new(0, 5)) > 0.0);

        // Removal is final for this colony instance.
        for _ in 0..8 {
            colony.step();
            assert!(!colony.contains_agent(AgentId(0)));
        }
    }

    proptest::proptest! {
        /// Any interleaving of adds, removes, and steps keeps the
        /// registry consistent: one agent per live ID, every position
        /// inside the array, counts summing to the population.
        #[test]
        fn any_schedule_preserves_registry_invariants(
            seed in 0u64..1_000,
            schedule in proptest::collection::vec(0u8..4, 1..40),
        ) {
            use proptest::prelude::prop_assert;

            let mut colony = Colony::new(small_config(seed)).unwrap();
            let mut next_id = 0u32;
            for op in schedule {
                match op {
                    0 | 1 => {
                        colony.add_agent(AgentId(next_id)).unwrap();
                        next_id += 1;
                    }
                    2 => {
                        colony.remove(AgentId(next_id.saturating_sub(1)));
                    }
                    _ => {
                        let report = colony.step();
                        prop_assert!(
                            report.following + report.lost == colony.agent_count()
                        );
                    }
                }
                for agent in colony.agents() {
                    prop_assert!(colony.field().contains(agent.pos()));
                }
            }
        }
    }

    #[test]
    fn trail_following_locks_on_with_perfect_fidelity() {
        // Lay a straight east-west trail through the spawn cell and
        // face the agent along it: with fidelity 1 it must follow.
        let config = ColonyConfig {
            fidelity: 1.0,
            spawn: SpawnPolicy::Fixed(Pos::new(8, 8)),
            ..small_config(12)
        };
        let mut colony = Colony::new(config).unwrap();
        for x in 1..31 {
            colony.field.deposit(Pos::new(x, 8));
        }
        let agent = Agent {
            id: AgentId(0),
            pos: Pos::new(8, 8),
            heading: Heading::East,
            lost: true,
            fidelity: 1.0,
            kernel: TurnKernel::REFERENCE,
        };
        colony.agents.insert(AgentId(0), agent);

        colony.step();

        let agent = colony.agent(AgentId(0)).unwrap();
        assert!(!agent.is_lost(), "trail ahead with fidelity 1 follows");
        assert_eq!(agent.pos(), Pos::new(9, 8));
        assert_eq!(agent.heading(), Heading::East);
        assert_eq!(colony.trail_strength(), 1.0);
    }
}
