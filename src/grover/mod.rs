// src/grover/mod.rs

//! Amplitude amplification over board positions: the marking oracle, the
//! diffusion operator, and the full per-decision search circuit.

pub mod diffusion;
pub mod oracle;

pub use diffusion::{apply_diffusion, diffusion_circuit};
pub use oracle::{apply_oracle, bit_pattern, oracle_circuit};

use crate::circuits::{Circuit, CircuitBuilder};
use crate::core::SearchError;
use tracing::debug;

/// The complete search circuit for one move decision: Hadamard on every qubit
/// (uniform superposition from `|0...0>`), then `rounds` repetitions of
/// oracle followed by diffusion.
///
/// Fails with `NoValidMoves` before building anything if `valid_moves` is empty.
pub fn search_circuit(
    num_qubits: usize,
    valid_moves: &[usize],
    rounds: usize,
) -> Result<Circuit, SearchError> {
    let oracle = oracle_circuit(num_qubits, valid_moves)?;
    let diffusion = diffusion_circuit(num_qubits);

    let mut circuit = CircuitBuilder::new(num_qubits).hadamard_all().build();
    for _ in 0..rounds {
        circuit.append(&oracle)?;
        circuit.append(&diffusion)?;
    }
    debug!(
        num_qubits,
        marked = valid_moves.len(),
        rounds,
        gates = circuit.len(),
        "built search circuit"
    );
    Ok(circuit)
}
