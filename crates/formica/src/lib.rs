//! Formica: a stigmergic trail simulation.
//!
//! A population of simple agents deposits and senses a decaying scalar
//! pheromone field on a bounded 2D lattice. Trails emerge from purely
//! local rules: deposition, evaporation, and a probabilistic turning
//! policy that blends exploration with trail-following.
//!
//! This is the top-level facade crate that re-exports the public API
//! from the Formica sub-crates. For most users, adding `formica` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use formica::prelude::*;
//!
//! // The reference world: 256×256 lattice, deposition 6, saturation 6,
//! // unit evaporation, perfect trail fidelity.
//! let mut colony = Colony::new(ColonyConfig::default()).unwrap();
//!
//! // One agent per 50 ticks.
//! for tick in 0..200u32 {
//!     if tick % 50 == 0 {
//!         colony.add_agent(AgentId(tick)).unwrap();
//!     }
//!     let report = colony.step();
//!     assert_eq!(report.following + report.lost, colony.agent_count());
//! }
//!
//! // The field is available for rendering, and the strength metric
//! // summarizes how much of the population is on a trail.
//! assert_eq!(colony.field_cells().len(), 256 * 256);
//! let _ = colony.trail_strength();
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `formica-core` | IDs, headings, turning kernel, RNG seam, errors |
//! | [`lattice`] | `formica-lattice` | The pheromone field |
//! | [`colony`] | `formica-colony` | Agent step policy and colony orchestration |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, traits, and IDs (`formica-core`).
pub use formica_core as types;

/// Pheromone field storage and dynamics (`formica-lattice`).
pub use formica_lattice as lattice;

/// Agent movement policy and colony orchestration (`formica-colony`).
pub use formica_colony as colony;

/// The types a simulation driver needs.
pub mod prelude {
    pub use formica_colony::{
        Agent, Colony, ColonyConfig, ColonyError, SpawnPolicy, StepOutcome, StepReport,
    };
    pub use formica_core::{
        AgentId, ConfigError, DecisionRng, Heading, Pos, SeededRng, Side, TickId, TurnKernel,
    };
    pub use formica_lattice::PheromoneField;
}
