// src/config.rs

//! Tunable knobs of a move decision.

use crate::core::{
    minimum_qubits, SearchError, BOARD_CELLS, DEFAULT_NUM_QUBITS, DEFAULT_ROUNDS, DEFAULT_SHOTS,
    MAX_QUBITS,
};

/// Configuration of the amplitude-amplification search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Register width; must index every board cell.
    pub num_qubits: usize,
    /// Samples drawn from the final state.
    pub shots: u64,
    /// Oracle + diffusion repetitions.
    pub rounds: usize,
    /// Seed for the sampler's random source; `None` draws one from entropy.
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            num_qubits: DEFAULT_NUM_QUBITS,
            shots: DEFAULT_SHOTS,
            rounds: DEFAULT_ROUNDS,
            seed: None,
        }
    }
}

impl SearchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_num_qubits(mut self, num_qubits: usize) -> Self {
        self.num_qubits = num_qubits;
        self
    }

    pub fn with_shots(mut self, shots: u64) -> Self {
        self.shots = shots;
        self
    }

    pub fn with_rounds(mut self, rounds: usize) -> Self {
        self.rounds = rounds;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Rejects configurations no circuit should be built for.
    pub fn validate(&self) -> Result<(), SearchError> {
        let min = minimum_qubits(BOARD_CELLS);
        if self.num_qubits < min || self.num_qubits > MAX_QUBITS {
            return Err(SearchError::InvalidConfig {
                message: format!(
                    "qubit count must be between {} and {}, got {}",
                    min, MAX_QUBITS, self.num_qubits
                ),
            });
        }
        if self.shots == 0 {
            return Err(SearchError::InvalidConfig {
                message: "shot count must be at least 1".to_string(),
            });
        }
        if self.rounds == 0 {
            return Err(SearchError::InvalidConfig {
                message: "at least one oracle + diffusion round is required".to_string(),
            });
        }
        Ok(())
    }
}
