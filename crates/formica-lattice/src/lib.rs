//! Pheromone field storage and dynamics for Formica simulations.
//!
//! This crate owns the shared scalar lattice that agents read and write:
//! bounded, non-toroidal, zero-initialized at construction, mutated by
//! per-agent deposits and a once-per-step evaporation pass. The field is
//! the stigmergic coupling mechanism with no per-agent isolation.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod field;

pub use field::PheromoneField;
