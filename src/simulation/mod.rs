// src/simulation/mod.rs

//! Executes `qttt::circuits::Circuit`s on an explicit state vector and samples
//! the result.
//!
//! There is no process-wide simulator: every `Simulator::run` allocates its own
//! `QuantumState`, which lives only as long as the caller keeps it.

pub mod engine;
mod results;
mod sampler;

pub use engine::SimulationEngine;
pub use results::OutcomeTable;
pub(crate) use results::most_frequent;
pub use sampler::Sampler;

use crate::circuits::Circuit;
use crate::core::{QuantumState, SearchError};
use tracing::debug;

/// Runs circuits from `|0...0>`. Holds no state between runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct Simulator;

impl Simulator {
    pub fn new() -> Self {
        Self
    }

    /// Applies every gate of `circuit`, left to right, to a fresh `|0...0>` register.
    ///
    /// # Returns
    /// * `Ok(QuantumState)` holding the final amplitudes.
    /// * `Err(SearchError::Gate)` if a gate is out of range for the register or
    ///   normalization drifts after a gate.
    pub fn run(&self, circuit: &Circuit) -> Result<QuantumState, SearchError> {
        let mut engine = SimulationEngine::init(circuit.num_qubits())?;
        circuit.apply_to(&mut engine)?;
        debug!(
            qubits = circuit.num_qubits(),
            gates = circuit.len(),
            "circuit simulated"
        );
        Ok(engine.into_state())
    }

    /// Runs `circuit` and takes `shots` samples of the final state.
    pub fn run_and_sample<R: rand::Rng>(
        &self,
        circuit: &Circuit,
        shots: u64,
        sampler: &mut Sampler<R>,
    ) -> Result<OutcomeTable, SearchError> {
        let state = self.run(circuit)?;
        sampler.sample(&state, shots)
    }
}
