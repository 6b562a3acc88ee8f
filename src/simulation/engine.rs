// src/simulation/engine.rs
use crate::core::{GateError, QuantumState};
use crate::operations::{hadamard_matrix, Gate};
use crate::validation::check_normalization;
use num_complex::Complex;

/// The state-vector engine: owns one `QuantumState` and mutates it in place,
/// one gate at a time.
///
/// Every kernel walks the `2^(n-1)` index pairs that differ only in the target
/// qubit, visiting each unordered pair exactly once. After each gate the squared
/// norm is re-checked, so a broken kernel surfaces as `GateError::NotNormalized`
/// instead of a silently skewed distribution.
#[derive(Debug, Clone)]
pub struct SimulationEngine {
    state: QuantumState,
}

impl SimulationEngine {
    /// Allocates a register of `num_qubits` qubits in `|0...0>`.
    pub fn init(num_qubits: usize) -> Result<Self, GateError> {
        Ok(Self {
            state: QuantumState::new(num_qubits)?,
        })
    }

    /// Takes ownership of an existing state.
    pub fn from_state(state: QuantumState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &QuantumState {
        &self.state
    }

    pub fn into_state(self) -> QuantumState {
        self.state
    }

    pub fn num_qubits(&self) -> usize {
        self.state.num_qubits()
    }

    /// Validates and applies a single gate from the library.
    pub fn apply_gate(&mut self, gate: &Gate) -> Result<(), GateError> {
        match gate {
            Gate::Hadamard { target } => self.apply_hadamard(*target),
            Gate::BitFlip { target } => self.apply_bit_flip(*target),
            Gate::MultiControlledBitFlip { controls, target } => {
                self.apply_multi_controlled_bit_flip(controls, *target)
            }
        }
    }

    /// `(a0, a1) -> ((a0 + a1)/√2, (a0 - a1)/√2)` on every pair differing in `qubit`.
    pub fn apply_hadamard(&mut self, qubit: usize) -> Result<(), GateError> {
        self.check_qubit(qubit)?;
        self.apply_single_qubit_matrix(qubit, &hadamard_matrix());
        check_normalization(&self.state, None)
    }

    /// Swaps the amplitudes of every pair differing in `qubit`.
    pub fn apply_bit_flip(&mut self, qubit: usize) -> Result<(), GateError> {
        self.check_qubit(qubit)?;
        let mask = self.state.qubit_mask(qubit);
        for (i0, i1) in pair_indices(self.state.dim(), mask) {
            self.state.amplitudes_mut().swap(i0, i1);
        }
        check_normalization(&self.state, None)
    }

    /// Swaps the amplitudes of `|..c..t=0..>` and `|..c..t=1..>` for every basis
    /// state whose control bits are all 1.
    ///
    /// Only the member of each pair with the target bit cleared drives the swap,
    /// so no pair is swapped twice.
    pub fn apply_multi_controlled_bit_flip(
        &mut self,
        controls: &[usize],
        target: usize,
    ) -> Result<(), GateError> {
        Gate::multi_controlled_bit_flip(controls.iter().copied(), target).validate(self.num_qubits())?;

        let control_mask = controls
            .iter()
            .fold(0usize, |mask, &c| mask | self.state.qubit_mask(c));
        let target_mask = self.state.qubit_mask(target);

        let amplitudes = self.state.amplitudes_mut();
        for (i0, i1) in pair_indices(amplitudes.len(), target_mask) {
            if i0 & control_mask == control_mask {
                amplitudes.swap(i0, i1);
            }
        }
        check_normalization(&self.state, None)
    }

    /// Applies a 2x2 matrix to `qubit`, in place.
    fn apply_single_qubit_matrix(&mut self, qubit: usize, matrix: &[[Complex<f64>; 2]; 2]) {
        let mask = self.state.qubit_mask(qubit);
        let amplitudes = self.state.amplitudes_mut();
        for (i0, i1) in pair_indices(amplitudes.len(), mask) {
            let psi_0 = amplitudes[i0];
            let psi_1 = amplitudes[i1];
            amplitudes[i0] = matrix[0][0] * psi_0 + matrix[0][1] * psi_1;
            amplitudes[i1] = matrix[1][0] * psi_0 + matrix[1][1] * psi_1;
        }
    }

    fn check_qubit(&self, qubit: usize) -> Result<(), GateError> {
        let num_qubits = self.num_qubits();
        if qubit >= num_qubits {
            return Err(GateError::QubitOutOfRange { qubit, num_qubits });
        }
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn set_state(&mut self, state: QuantumState) -> Result<(), GateError> {
        if state.dim() != self.state.dim() {
            return Err(GateError::InvalidDimensions(state.dim()));
        }
        self.state = state;
        Ok(())
    }
}

/// Yields `(i0, i1)` for every pair of basis indices that differ only in the bit
/// selected by `mask`, `i0` having that bit cleared.
fn pair_indices(dim: usize, mask: usize) -> impl Iterator<Item = (usize, usize)> {
    let lower_mask = mask - 1; // bits to the right of the target
    let upper_mask = !lower_mask; // target bit and everything left of it
    (0..dim / 2).map(move |i| {
        // insert a 0 at the target position
        let i0 = ((i & upper_mask) << 1) | (i & lower_mask);
        (i0, i0 | mask)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use num_traits::Zero;
    use std::collections::HashSet;

    const TEST_TOLERANCE: f64 = 1e-9;

    fn assert_complex_vec_approx_equal(actual: &[Complex<f64>], expected: &[Complex<f64>], context: &str) {
        assert_eq!(actual.len(), expected.len(), "Vector length mismatch - {}", context);
        for i in 0..actual.len() {
            let dist_sq = (actual[i] - expected[i]).norm_sqr();
            assert!(
                dist_sq < TEST_TOLERANCE * TEST_TOLERANCE,
                "Vector mismatch at index {} - Actual: {}, Expected: {}, Context: {}",
                i, actual[i], expected[i], context
            );
        }
    }

    /// A normalized state with distinct, non-trivial amplitudes on every index.
    fn scrambled_state(num_qubits: usize) -> QuantumState {
        let dim = 1usize << num_qubits;
        let raw: Vec<Complex<f64>> = (0..dim)
            .map(|k| Complex::new(1.0 + k as f64, 0.5 - (k % 3) as f64))
            .collect();
        let norm = raw.iter().map(|c| c.norm_sqr()).sum::<f64>().sqrt();
        QuantumState::from_amplitudes(raw.into_iter().map(|c| c / norm).collect())
            .expect("scrambled state is normalized")
    }

    #[test]
    fn pairs_cover_every_index_once() {
        for mask in [1usize, 2, 4, 8] {
            let mut seen = HashSet::new();
            for (i0, i1) in pair_indices(16, mask) {
                assert_eq!(i0 & mask, 0);
                assert_eq!(i1, i0 | mask);
                assert!(seen.insert(i0));
                assert!(seen.insert(i1));
            }
            assert_eq!(seen.len(), 16);
        }
    }

    #[test]
    fn hadamard_on_zero_state() -> Result<(), GateError> {
        let mut engine = SimulationEngine::init(1)?;
        engine.apply_hadamard(0)?;
        let h = Complex::new(std::f64::consts::FRAC_1_SQRT_2, 0.0);
        assert_complex_vec_approx_equal(engine.state().amplitudes(), &[h, h], "H|0>");
        Ok(())
    }

    #[test]
    fn hadamard_is_an_involution() -> Result<(), GateError> {
        for qubit in 0..4 {
            let original = scrambled_state(4);
            let mut engine = SimulationEngine::from_state(original.clone());
            engine.apply_hadamard(qubit)?;
            engine.apply_hadamard(qubit)?;
            assert_complex_vec_approx_equal(
                engine.state().amplitudes(),
                original.amplitudes(),
                &format!("H·H on qubit {}", qubit),
            );
        }
        Ok(())
    }

    #[test]
    fn bit_flip_is_an_involution() -> Result<(), GateError> {
        for qubit in 0..4 {
            let original = scrambled_state(4);
            let mut engine = SimulationEngine::from_state(original.clone());
            engine.apply_bit_flip(qubit)?;
            assert_ne!(engine.state(), &original);
            engine.apply_bit_flip(qubit)?;
            assert_eq!(engine.state(), &original);
        }
        Ok(())
    }

    #[test]
    fn bit_flip_moves_basis_state() -> Result<(), GateError> {
        let mut engine = SimulationEngine::init(4)?;
        engine.apply_bit_flip(0)?; // |0000> -> |1000>
        assert_eq!(engine.state().amplitude(0b1000), Some(Complex::new(1.0, 0.0)));
        engine.apply_bit_flip(3)?; // |1000> -> |1001>
        assert_eq!(engine.state().amplitude(0b1001), Some(Complex::new(1.0, 0.0)));
        Ok(())
    }

    #[test]
    fn multi_controlled_flip_needs_all_controls() -> Result<(), GateError> {
        // |110> with controls {0, 1} -> |111>
        let mut engine = SimulationEngine::init(3)?;
        engine.apply_bit_flip(0)?;
        engine.apply_bit_flip(1)?;
        engine.apply_multi_controlled_bit_flip(&[0, 1], 2)?;
        assert_eq!(engine.state().amplitude(0b111), Some(Complex::new(1.0, 0.0)));

        // |100>: control 1 is clear, nothing happens
        let mut engine = SimulationEngine::init(3)?;
        engine.apply_bit_flip(0)?;
        engine.apply_multi_controlled_bit_flip(&[0, 1], 2)?;
        assert_eq!(engine.state().amplitude(0b100), Some(Complex::new(1.0, 0.0)));
        Ok(())
    }

    #[test]
    fn multi_controlled_flip_swaps_each_pair_once() -> Result<(), GateError> {
        let original = scrambled_state(4);
        let mut engine = SimulationEngine::from_state(original.clone());
        engine.apply_multi_controlled_bit_flip(&[0, 1, 2], 3)?;

        let before = original.amplitudes();
        let after = engine.state().amplitudes();
        assert_eq!(after[0b1110], before[0b1111]);
        assert_eq!(after[0b1111], before[0b1110]);
        for k in 0..0b1110 {
            assert_eq!(after[k], before[k], "index {} should be untouched", k);
        }

        engine.apply_multi_controlled_bit_flip(&[0, 1, 2], 3)?;
        assert_eq!(engine.state(), &original);
        Ok(())
    }

    #[test]
    fn sandwich_flips_sign_of_all_ones() -> Result<(), GateError> {
        let original = scrambled_state(4);
        let mut engine = SimulationEngine::from_state(original.clone());
        engine.apply_hadamard(3)?;
        engine.apply_multi_controlled_bit_flip(&[0, 1, 2], 3)?;
        engine.apply_hadamard(3)?;

        let mut expected = original.amplitudes().to_vec();
        expected[0b1111] = -expected[0b1111];
        assert_complex_vec_approx_equal(engine.state().amplitudes(), &expected, "H·MCX·H");
        Ok(())
    }

    #[test]
    fn every_gate_preserves_normalization() -> Result<(), GateError> {
        let mut engine = SimulationEngine::from_state(scrambled_state(4));
        let gates = [
            Gate::hadamard(0),
            Gate::bit_flip(2),
            Gate::multi_controlled_bit_flip([1, 3], 0),
            Gate::hadamard(3),
            Gate::multi_controlled_bit_flip([0, 1, 2], 3),
        ];
        for gate in &gates {
            engine.apply_gate(gate)?;
            assert_abs_diff_eq!(engine.state().norm_sqr(), 1.0, epsilon = 1e-6);
        }
        Ok(())
    }

    #[test]
    fn out_of_range_qubits_are_rejected() -> Result<(), GateError> {
        let mut engine = SimulationEngine::init(2)?;
        assert_eq!(
            engine.apply_hadamard(2),
            Err(GateError::QubitOutOfRange { qubit: 2, num_qubits: 2 })
        );
        assert_eq!(
            engine.apply_multi_controlled_bit_flip(&[1], 1),
            Err(GateError::ControlTargetOverlap(1))
        );
        // state untouched by rejected gates
        assert_eq!(engine.state().amplitude(0), Some(Complex::new(1.0, 0.0)));
        Ok(())
    }

    #[test]
    fn corrupted_state_is_reported() -> Result<(), GateError> {
        let mut engine = SimulationEngine::init(1)?;
        engine.state.amplitudes_mut()[1] = Complex::new(1.0, 0.0);
        assert!(matches!(engine.apply_bit_flip(0), Err(GateError::NotNormalized(_))));

        engine.set_state(QuantumState::new(1)?)?;
        assert!(engine.state().amplitudes()[1].is_zero());
        Ok(())
    }
}
