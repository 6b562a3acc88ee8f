//! Error handling logic

use thiserror::Error;

/// Precondition violations raised by the gate library and the state-vector engine.
///
/// These indicate a programming error in whoever built the circuit (a qubit index
/// outside the register, a control that is also the target, ...). They are kept
/// apart from [`SearchError`]'s runtime conditions so a caller can tell "the board
/// had no answer" from "the simulator was driven wrongly".
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GateError {
    /// A gate referenced a qubit the register does not have.
    #[error("Qubit {qubit} is out of range for a {num_qubits}-qubit register")]
    QubitOutOfRange {
        /// Offending qubit index
        qubit: usize,
        /// Width of the register the gate was applied to
        num_qubits: usize,
    },

    #[error("Qubit {0} cannot be both control and target")]
    ControlTargetOverlap(usize),

    #[error("Duplicate control qubit found: {0}")]
    DuplicateControl(usize),

    /// Register width is zero or above [`MAX_QUBITS`](crate::core::MAX_QUBITS).
    #[error("Unsupported register width: {0} qubits")]
    InvalidRegisterSize(usize),

    /// Amplitude vector length is not a power of two.
    #[error("Amplitude vector of length {0} does not describe a qubit register")]
    InvalidDimensions(usize),

    /// Squared magnitudes no longer sum to one.
    #[error("State vector is not normalized. Norm squared: {0}")]
    NotNormalized(f64),
}

/// Failures of a move decision. All of them are recoverable by the game driver,
/// which ends the current game instead of crashing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SearchError {
    /// The board has no empty cell; raised before any circuit is constructed.
    #[error("No valid moves available")]
    NoValidMoves,

    /// None of the sampled outcomes maps to a currently empty cell.
    #[error("No valid moves found in the sampled outcomes")]
    NoValidSampledMoves,

    /// Outcome probabilities do not sum to one within tolerance.
    #[error("Numerical instability: outcome probabilities sum to {total}")]
    NumericalInstability {
        /// Observed probability mass
        total: f64,
    },

    #[error("Invalid search configuration: {message}")]
    InvalidConfig {
        /// What was rejected
        message: String,
    },

    #[error(transparent)]
    Gate(#[from] GateError),
}
