// src/grover/oracle.rs

use crate::circuits::{Circuit, CircuitBuilder};
use crate::core::SearchError;
use crate::operations::Gate;
use crate::simulation::SimulationEngine;
use std::collections::BTreeSet;

/// Fixed-width bit pattern of `value`, most significant bit first, so entry `i`
/// is the bit qubit `i` must hold for the register to be in basis state `value`.
pub fn bit_pattern(value: usize, num_qubits: usize) -> Vec<bool> {
    (0..num_qubits)
        .map(|qubit| (value >> (num_qubits - 1 - qubit)) & 1 == 1)
        .collect()
}

/// Builds the marking circuit for `valid_moves`.
///
/// For each move, in ascending order: bit flips on every qubit whose bit is 0
/// (mapping the move onto `|1...1>`), the `H · MCX · H` sign flip of the
/// all-ones state, then the same bit flips again. Each move thus gets its own
/// full sequence and the net effect is `amplitude[m] *= -1` for every valid `m`,
/// magnitudes untouched.
///
/// Duplicate entries are ignored; the input is treated as a set.
///
/// # Errors
/// * `NoValidMoves` if `valid_moves` is empty.
/// * `InvalidConfig` if a move does not fit in `num_qubits` bits.
pub fn oracle_circuit(num_qubits: usize, valid_moves: &[usize]) -> Result<Circuit, SearchError> {
    if valid_moves.is_empty() {
        return Err(SearchError::NoValidMoves);
    }
    let moves: BTreeSet<usize> = valid_moves.iter().copied().collect();
    let capacity = 1usize.checked_shl(num_qubits as u32).unwrap_or(usize::MAX);
    if let Some(&m) = moves.iter().find(|&&m| m >= capacity) {
        return Err(SearchError::InvalidConfig {
            message: format!("move {} cannot be encoded in {} qubits", m, num_qubits),
        });
    }

    let mut builder = CircuitBuilder::new(num_qubits);
    for m in moves {
        let zero_bits: Vec<Gate> = bit_pattern(m, num_qubits)
            .into_iter()
            .enumerate()
            .filter(|(_, bit)| !bit)
            .map(|(qubit, _)| Gate::bit_flip(qubit))
            .collect();

        builder = builder
            .add_gates(zero_bits.iter().cloned())
            .phase_flip_all_ones()
            .add_gates(zero_bits);
    }
    Ok(builder.build())
}

/// Marks `valid_moves` on the engine's current state.
///
/// The move set is checked before the state is touched, so an empty set leaves
/// the engine exactly as it was.
pub fn apply_oracle(engine: &mut SimulationEngine, valid_moves: &[usize]) -> Result<(), SearchError> {
    let circuit = oracle_circuit(engine.num_qubits(), valid_moves)?;
    circuit.apply_to(engine)?;
    Ok(())
}
