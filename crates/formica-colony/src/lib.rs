//! Agent movement policy and colony orchestration for Formica simulations.
//!
//! The crate implements the agent-lattice interaction loop: each step,
//! every live agent deposits pheromone at its position, senses the
//! six-cell neighborhood ahead of it, and either follows the trail or
//! explores; the colony then evaporates the shared field exactly once.
//!
//! Execution is strictly sequential: agents never overlap within a
//! step, so the shared field needs no synchronization. All randomness
//! flows through the [`DecisionRng`](formica_core::DecisionRng) seam;
//! a colony owns a ChaCha8 generator seeded from its config, making
//! whole runs reproducible from `(config, schedule)` alone.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod agent;
pub mod colony;
pub mod config;

pub use agent::{Agent, StepOutcome};
pub use colony::{Colony, ColonyError, StepReport};
pub use config::{ColonyConfig, SpawnPolicy};
