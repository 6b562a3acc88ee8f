// src/core/mod.rs

//! Core data structures and types

pub mod error;
pub mod state;
pub mod constants;

// Re-export public types for convenient access via `qttt::core::TypeName`
pub use error::{GateError, SearchError};
pub use state::QuantumState;
pub use constants::{
    minimum_qubits, BOARD_CELLS, DEFAULT_NUM_QUBITS, DEFAULT_ROUNDS, DEFAULT_SHOTS, MAX_QUBITS,
    NORM_TOLERANCE,
};
