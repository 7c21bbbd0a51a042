//! Benchmark profiles for the Formica trail simulation.
//!
//! Provides pre-built [`ColonyConfig`] profiles:
//!
//! - [`reference_profile`]: the reference 256×256 run parameters
//! - [`stress_profile`]: a 512×512 grid for stress testing
//! - [`populated_colony`]: a pre-warmed colony with live agents

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use formica_colony::{Colony, ColonyConfig};
use formica_core::AgentId;

/// The reference run: 256×256 lattice, deposition 6, saturation 6,
/// unit decay, perfect fidelity, reference kernel.
pub fn reference_profile(seed: u64) -> ColonyConfig {
    ColonyConfig {
        seed,
        ..Default::default()
    }
}

/// A 512×512 grid at the reference dynamics, 4× the cell count.
pub fn stress_profile(seed: u64) -> ColonyConfig {
    ColonyConfig {
        width: 512,
        height: 512,
        seed,
        ..Default::default()
    }
}

/// Build a colony and warm it up with `agents` live agents spread over
/// `agents` ticks, so benches measure steady-state stepping rather than
/// the first-tick spike.
pub fn populated_colony(config: ColonyConfig, agents: u32) -> Colony {
    let mut colony = Colony::new(config).expect("bench profile is valid");
    for i in 0..agents {
        colony.add_agent(AgentId(i)).expect("bench IDs are unique");
        colony.step();
    }
    colony
}
