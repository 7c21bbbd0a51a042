//! Test utilities and scripted randomness for Formica development.
//!
//! Provides [`ScriptedRng`], a queue-backed [`DecisionRng`] that replays
//! exact decision outcomes instead of reverse-engineering generator bit
//! streams, and small scenario builders for integration tests and
//! benchmarks.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::collections::VecDeque;

use formica_colony::{Colony, ColonyConfig};
use formica_core::DecisionRng;

/// A [`DecisionRng`] that replays scripted outcomes.
///
/// Each draw kind has its own queue; a draw with an empty queue panics,
/// pointing at the test that under-scripted its scenario. `pick` and
/// `weighted` outcomes are validated against the request, so a script
/// cannot silently select an impossible index.
#[derive(Clone, Debug, Default)]
pub struct ScriptedRng {
    uniforms: VecDeque<f64>,
    picks: VecDeque<usize>,
    weighted: VecDeque<usize>,
}

impl ScriptedRng {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue outcomes for [`DecisionRng::uniform`] draws.
    pub fn with_uniforms(mut self, vals: impl IntoIterator<Item = f64>) -> Self {
        self.uniforms.extend(vals);
        self
    }

    /// Queue outcomes for [`DecisionRng::pick`] draws.
    pub fn with_picks(mut self, vals: impl IntoIterator<Item = usize>) -> Self {
        self.picks.extend(vals);
        self
    }

    /// Queue outcomes for [`DecisionRng::weighted`] draws.
    pub fn with_weighted(mut self, vals: impl IntoIterator<Item = usize>) -> Self {
        self.weighted.extend(vals);
        self
    }

    /// Whether every scripted outcome has been consumed.
    pub fn is_exhausted(&self) -> bool {
        self.uniforms.is_empty() && self.picks.is_empty() && self.weighted.is_empty()
    }
}

impl DecisionRng for ScriptedRng {
    fn uniform(&mut self) -> f64 {
        self.uniforms.pop_front().expect("uniform script exhausted")
    }

    fn pick(&mut self, n: usize) -> usize {
        let v = self.picks.pop_front().expect("pick script exhausted");
        assert!(v < n, "scripted pick {v} out of range 0..{n}");
        v
    }

    fn weighted(&mut self, weights: &[f64]) -> usize {
        let v = self.weighted.pop_front().expect("weighted script exhausted");
        assert!(
            v < weights.len(),
            "scripted weighted index {v} out of range 0..{}",
            weights.len()
        );
        assert!(
            weights[v] > 0.0,
            "scripted weighted index {v} has zero weight"
        );
        v
    }
}

/// A 64×64 reference-parameter colony for integration tests and benches.
pub fn reference_colony(seed: u64) -> Colony {
    let config = ColonyConfig {
        width: 64,
        height: 64,
        seed,
        ..Default::default()
    };
    Colony::new(config).expect("reference config is valid")
}
