// src/simulation/sampler.rs

use crate::core::{QuantumState, SearchError, NORM_TOLERANCE};
use crate::simulation::OutcomeTable;
use crate::validation::check_probabilities;
use rand::distr::{Distribution, StandardUniform};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

/// Draws repeated observations ("shots") from the `|amplitude|^2` distribution
/// of a state.
///
/// The random source is owned by the sampler and injected at construction, so a
/// seeded `StdRng` gives exactly reproducible outcome tables.
#[derive(Debug, Clone)]
pub struct Sampler<R = StdRng> {
    rng: R,
}

impl Sampler<StdRng> {
    /// Deterministic sampler seeded with `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Sampler seeded from the thread-local generator.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_rng(&mut rand::rng()))
    }

    /// Seeded when `seed` is given, entropy-backed otherwise.
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }
}

impl<R: rand::Rng> Sampler<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Mutable access to the underlying random source.
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Takes `shots` independent samples of `state`.
    ///
    /// Fails with `NumericalInstability` when the probabilities do not sum to 1
    /// within `NORM_TOLERANCE`; the distribution is never renormalized.
    pub fn sample(&mut self, state: &QuantumState, shots: u64) -> Result<OutcomeTable, SearchError> {
        if shots == 0 {
            return Err(SearchError::InvalidConfig {
                message: "shot count must be at least 1".to_string(),
            });
        }
        let probabilities = state.probabilities();
        check_probabilities(&probabilities, NORM_TOLERANCE)?;

        // cumulative[k] = P(0) + ... + P(k)
        let cumulative: Vec<f64> = probabilities
            .iter()
            .scan(0.0, |acc, p| {
                *acc += p;
                Some(*acc)
            })
            .collect();
        // Rolls landing past a total slightly below 1 go to the last reachable outcome
        let last_reachable = probabilities.iter().rposition(|p| *p > 0.0).unwrap_or(0);

        let mut table = OutcomeTable::new(state.num_qubits());
        for _ in 0..shots {
            let roll: f64 = StandardUniform.sample(&mut self.rng);
            let index = cumulative.partition_point(|c| *c <= roll);
            table.record(index.min(last_reachable));
        }

        debug!(shots, distinct = table.len(), "sampled outcome table");
        Ok(table)
    }
}
