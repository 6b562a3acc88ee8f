// src/operations/mod.rs

//! The gate library: the three gate types the search circuits are built from.
//!
//! Gates are pure descriptions. Applying them to amplitudes is the job of
//! `simulation::engine::SimulationEngine`.

use crate::core::GateError;
use num_complex::Complex;
use num_traits::{One, Zero};
use std::f64::consts::FRAC_1_SQRT_2;
use std::fmt;

/// A single gate acting on a qubit register. Immutable once constructed.
///
/// Qubits are addressed by index, `0` being the most significant bit of a basis index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Gate {
    /// Maps `|0>` to `(|0> + |1>)/√2` and `|1>` to `(|0> - |1>)/√2`.
    Hadamard {
        target: usize,
    },

    /// Swaps the `|0>` and `|1>` amplitudes of the target (Pauli-X).
    BitFlip {
        target: usize,
    },

    /// Flips `target` on every basis state whose `controls` are all `1`.
    /// With no controls this is a plain [`Gate::BitFlip`].
    MultiControlledBitFlip {
        /// Control qubits, kept in ascending order.
        controls: Vec<usize>,
        target: usize,
    },
}

impl Gate {
    pub fn hadamard(target: usize) -> Self {
        Gate::Hadamard { target }
    }

    pub fn bit_flip(target: usize) -> Self {
        Gate::BitFlip { target }
    }

    /// Builds a multi-controlled bit flip. Controls are sorted so two gates with
    /// the same control set compare equal.
    pub fn multi_controlled_bit_flip<I>(controls: I, target: usize) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        let mut controls: Vec<usize> = controls.into_iter().collect();
        controls.sort_unstable();
        Gate::MultiControlledBitFlip { controls, target }
    }

    /// The qubit whose amplitudes the gate rewrites.
    pub fn target(&self) -> usize {
        match self {
            Gate::Hadamard { target }
            | Gate::BitFlip { target }
            | Gate::MultiControlledBitFlip { target, .. } => *target,
        }
    }

    /// Every qubit the gate reads or writes, controls first.
    pub fn involved_qubits(&self) -> Vec<usize> {
        match self {
            Gate::Hadamard { target } | Gate::BitFlip { target } => vec![*target],
            Gate::MultiControlledBitFlip { controls, target } => {
                let mut qubits = controls.clone();
                qubits.push(*target);
                qubits
            }
        }
    }

    /// Checks the gate against a register of `num_qubits` qubits: every index in
    /// range, no repeated control, target not among the controls.
    pub fn validate(&self, num_qubits: usize) -> Result<(), GateError> {
        for qubit in self.involved_qubits() {
            if qubit >= num_qubits {
                return Err(GateError::QubitOutOfRange { qubit, num_qubits });
            }
        }
        if let Gate::MultiControlledBitFlip { controls, target } = self {
            if controls.contains(target) {
                return Err(GateError::ControlTargetOverlap(*target));
            }
            // controls are sorted, duplicates are adjacent
            if let Some(pair) = controls.windows(2).find(|w| w[0] == w[1]) {
                return Err(GateError::DuplicateControl(pair[0]));
            }
        }
        Ok(())
    }

    /// Short mnemonic used in circuit diagrams.
    pub fn label(&self) -> &'static str {
        match self {
            Gate::Hadamard { .. } => "H",
            Gate::BitFlip { .. } => "X",
            Gate::MultiControlledBitFlip { .. } => "MCX",
        }
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gate::Hadamard { target } => write!(f, "H(q{})", target),
            Gate::BitFlip { target } => write!(f, "X(q{})", target),
            Gate::MultiControlledBitFlip { controls, target } => {
                let controls: Vec<String> = controls.iter().map(|c| format!("q{}", c)).collect();
                write!(f, "MCX([{}] -> q{})", controls.join(", "), target)
            }
        }
    }
}

/// The Hadamard matrix `1/√2 [[1, 1], [1, -1]]`.
pub fn hadamard_matrix() -> [[Complex<f64>; 2]; 2] {
    let h = Complex::new(FRAC_1_SQRT_2, 0.0);
    [[h, h], [h, -h]]
}

/// The bit-flip (Pauli-X) matrix `[[0, 1], [1, 0]]`.
pub fn bit_flip_matrix() -> [[Complex<f64>; 2]; 2] {
    [
        [Complex::zero(), Complex::one()],
        [Complex::one(), Complex::zero()],
    ]
}
