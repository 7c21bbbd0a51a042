//! Core types and traits for the Formica trail simulation.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the Formica workspace:
//! typed IDs, grid positions and headings, the turning kernel, the
//! decision-RNG capability, and configuration error types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod heading;
pub mod id;
pub mod kernel;
pub mod rng;

pub use error::ConfigError;
pub use heading::{Heading, Pos, Side};
pub use id::{AgentId, TickId};
pub use kernel::TurnKernel;
pub use rng::{DecisionRng, SeededRng};
