// src/grover/diffusion.rs

use crate::circuits::{Circuit, CircuitBuilder};
use crate::core::GateError;
use crate::simulation::SimulationEngine;

/// The amplification stage of one Grover iteration:
/// `H^{⊗n} · X^{⊗n} · (H · MCX · H on the last qubit) · X^{⊗n} · H^{⊗n}`.
///
/// The middle sandwich flips the sign of `|0...0>` once conjugated by the bit
/// flips; conjugated again by the Hadamards it becomes `I - 2|s><s|`, the
/// reflection about the mean up to a global phase of -1.
pub fn diffusion_circuit(num_qubits: usize) -> Circuit {
    CircuitBuilder::new(num_qubits)
        .hadamard_all()
        .bit_flip_all()
        .phase_flip_all_ones()
        .bit_flip_all()
        .hadamard_all()
        .build()
}

/// Applies the diffusion operator to the engine's current state.
pub fn apply_diffusion(engine: &mut SimulationEngine) -> Result<(), GateError> {
    diffusion_circuit(engine.num_qubits()).apply_to(engine)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::QuantumState;
    use crate::validation::approx_equal_up_to_phase;
    use num_complex::Complex;

    #[test]
    fn gate_count() {
        // 4 H + 4 X + 3 + 4 X + 4 H
        assert_eq!(diffusion_circuit(4).len(), 19);
    }

    #[test]
    fn reflects_about_the_mean() -> Result<(), GateError> {
        let amplitudes: Vec<Complex<f64>> = [0.1, 0.3, -0.5, 0.7, 0.2, -0.1, 0.4, 0.0]
            .iter()
            .map(|&a| Complex::new(a, 0.0))
            .collect();
        let norm = amplitudes.iter().map(|c| c.norm_sqr()).sum::<f64>().sqrt();
        let amplitudes: Vec<_> = amplitudes.into_iter().map(|c| c / norm).collect();
        let mean = amplitudes.iter().sum::<Complex<f64>>() / amplitudes.len() as f64;

        let mut engine = SimulationEngine::from_state(QuantumState::from_amplitudes(amplitudes.clone())?);
        apply_diffusion(&mut engine)?;

        let reflected: Vec<_> = amplitudes.iter().map(|a| mean * 2.0 - *a).collect();
        assert!(approx_equal_up_to_phase(engine.state().amplitudes(), &reflected, 1e-9));
        Ok(())
    }
}
