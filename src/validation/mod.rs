// src/validation/mod.rs

//! Numerical checks on `QuantumState`s and outcome distributions.

use crate::core::{GateError, QuantumState, SearchError, NORM_TOLERANCE};
use num_complex::Complex;

// Amplitudes below this magnitude carry no usable phase
const DEFAULT_AMPLITUDE_TOLERANCE: f64 = 1e-12;

/// Checks that the state vector is normalized (sum of squared amplitudes ≈ 1.0).
///
/// # Arguments
/// * `state` - The `QuantumState` to check.
/// * `tolerance` - Allowed deviation from 1.0. Defaults to [`NORM_TOLERANCE`].
///
/// # Returns
/// * `Ok(())` if normalized within tolerance.
/// * `Err(GateError::NotNormalized)` carrying the observed squared norm otherwise.
pub fn check_normalization(state: &QuantumState, tolerance: Option<f64>) -> Result<(), GateError> {
    let effective_tolerance = tolerance.unwrap_or(NORM_TOLERANCE);
    let norm_sq = state.norm_sqr();
    if !norm_sq.is_finite() || (norm_sq - 1.0).abs() > effective_tolerance {
        return Err(GateError::NotNormalized(norm_sq));
    }
    Ok(())
}

/// Checks that a probability distribution is usable for sampling: every entry
/// finite and non-negative, total within `tolerance` of 1. Never renormalizes.
pub fn check_probabilities(probabilities: &[f64], tolerance: f64) -> Result<(), SearchError> {
    let total: f64 = probabilities.iter().sum();
    let well_formed = probabilities.iter().all(|p| p.is_finite() && *p >= 0.0);
    if !well_formed || !total.is_finite() || (total - 1.0).abs() > tolerance {
        return Err(SearchError::NumericalInstability { total });
    }
    Ok(())
}

/// Returns `true` when two amplitude vectors agree up to a global phase factor.
///
/// The phase is taken from the largest amplitude of `expected`; every component of
/// `actual` must then match `phase * expected` within `tolerance`.
pub fn approx_equal_up_to_phase(
    actual: &[Complex<f64>],
    expected: &[Complex<f64>],
    tolerance: f64,
) -> bool {
    if actual.len() != expected.len() {
        return false;
    }
    let pivot = expected
        .iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| a.norm_sqr().total_cmp(&b.norm_sqr()))
        .map(|(i, _)| i);

    let Some(pivot) = pivot else {
        return true; // both empty
    };
    if expected[pivot].norm_sqr() < DEFAULT_AMPLITUDE_TOLERANCE {
        return actual.iter().all(|a| a.norm() <= tolerance);
    }
    if actual[pivot].norm_sqr() < DEFAULT_AMPLITUDE_TOLERANCE {
        return false;
    }

    let phase = actual[pivot] / expected[pivot];
    let phase = phase / phase.norm();
    actual
        .iter()
        .zip(expected)
        .all(|(a, e)| (*a - phase * *e).norm() <= tolerance)
}

/// Validates a state against the default normalization tolerance.
pub fn validate_state(state: &QuantumState) -> Result<(), GateError> {
    check_normalization(state, None)
}
