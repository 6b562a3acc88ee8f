// src/core/state.rs

use super::constants::MAX_QUBITS;
use super::error::GateError;
use num_complex::Complex;
use num_traits::Zero;
use std::f64::consts::FRAC_1_SQRT_2;
use std::fmt;

/// Complex amplitudes of an `n`-qubit register over all `2^n` basis states.
///
/// The amplitude at index `k` belongs to the basis state whose bit pattern is the
/// binary representation of `k`. Qubit `0` is the most significant bit and qubit
/// `n - 1` (the "last" qubit) the least significant, so the fixed-width bit
/// pattern of an index reads left to right as qubits `0..n`.
///
/// A state is exclusively owned by one move decision and never persisted.
#[derive(Debug, Clone, PartialEq)] // Avoid Eq for floating-point complex numbers
pub struct QuantumState {
    amplitudes: Vec<Complex<f64>>,
    num_qubits: usize,
}

impl QuantumState {
    /// Allocates `2^n` amplitudes in the basis state `|0...0>`.
    pub fn new(num_qubits: usize) -> Result<Self, GateError> {
        if num_qubits == 0 || num_qubits > MAX_QUBITS {
            return Err(GateError::InvalidRegisterSize(num_qubits));
        }
        let dim = 1usize << num_qubits;
        let mut amplitudes = vec![Complex::zero(); dim];
        amplitudes[0] = Complex::new(1.0, 0.0);

        Ok(Self { amplitudes, num_qubits })
    }

    /// Equal superposition over every basis state, i.e. `H^{⊗n} |0...0>`.
    pub fn uniform(num_qubits: usize) -> Result<Self, GateError> {
        let mut state = Self::new(num_qubits)?;
        let amp = Complex::new(FRAC_1_SQRT_2.powi(num_qubits as i32), 0.0);
        state.amplitudes.iter_mut().for_each(|a| *a = amp);
        Ok(state)
    }

    /// Wraps an explicit amplitude vector. The length must be a power of two and
    /// the vector must already be normalized; nothing is rescaled.
    pub fn from_amplitudes(amplitudes: Vec<Complex<f64>>) -> Result<Self, GateError> {
        let dim = amplitudes.len();
        if dim < 2 || !dim.is_power_of_two() {
            return Err(GateError::InvalidDimensions(dim));
        }
        let num_qubits = dim.trailing_zeros() as usize;
        if num_qubits > MAX_QUBITS {
            return Err(GateError::InvalidRegisterSize(num_qubits));
        }
        let state = Self { amplitudes, num_qubits };
        crate::validation::check_normalization(&state, None)?;
        Ok(state)
    }

    /// Read-only access to the amplitude vector.
    pub fn amplitudes(&self) -> &[Complex<f64>] {
        &self.amplitudes
    }

    /// Mutable access for the engine's gate kernels.
    pub(crate) fn amplitudes_mut(&mut self) -> &mut [Complex<f64>] {
        &mut self.amplitudes
    }

    pub fn amplitude(&self, index: usize) -> Option<Complex<f64>> {
        self.amplitudes.get(index).copied()
    }

    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Number of basis states, `2^n`.
    pub fn dim(&self) -> usize {
        self.amplitudes.len()
    }

    /// Sum of squared magnitudes; 1 for a valid state.
    pub fn norm_sqr(&self) -> f64 {
        self.amplitudes.iter().map(|c| c.norm_sqr()).sum()
    }

    /// Probability of observing each basis state, `|amplitude|^2`.
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(|c| c.norm_sqr()).collect()
    }

    /// Bit mask selecting `qubit` within a basis index.
    pub(crate) fn qubit_mask(&self, qubit: usize) -> usize {
        1 << (self.num_qubits - 1 - qubit)
    }
}

impl fmt::Display for QuantumState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "State[")?;
        for (i, c) in self.amplitudes.iter().enumerate() {
            write!(f, "{}{:.4}", if i > 0 { ", " } else { "" }, c)?;
        }
        write!(f, "]")
    }
}
