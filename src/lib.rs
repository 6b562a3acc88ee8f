// src/lib.rs

//! `qttt` - tic-tac-toe where player X picks its moves with a simulated
//! Grover search.
//!
//! Each of X's turns marks the empty cells in a uniform superposition over a
//! small qubit register, amplifies them with one diffusion pass, samples the
//! result and plays the most frequently observed empty cell. The simulation is
//! an explicit state vector of complex amplitudes; nothing is shared between
//! decisions except the random source.

pub mod core;
pub mod operations;
pub mod circuits;
pub mod simulation;
pub mod validation;
pub mod grover;
pub mod config;
pub mod game;

// Re-export the most common types for easier top-level use
pub use crate::core::{GateError, QuantumState, SearchError};
pub use crate::operations::Gate;
pub use crate::circuits::{Circuit, CircuitBuilder};
pub use crate::simulation::{OutcomeTable, Sampler, SimulationEngine, Simulator};
pub use crate::config::SearchConfig;
pub use crate::grover::search_circuit;
pub use crate::game::{Board, Cell, Game, GameStatus, Move, Player, QuantumMoveSelector};
pub use crate::validation::{check_normalization, check_probabilities, validate_state};

// Example 1: Marking and amplifying a single basis state
/// ```
/// use qttt::{search_circuit, SearchError, Simulator};
///
/// // Mark |0110> (= 6) in a 4-qubit register and run one oracle + diffusion round
/// let circuit = search_circuit(4, &[6], 1)?;
/// let state = Simulator::new().run(&circuit)?;
///
/// let probs = state.probabilities();
/// // 6 now holds (11/16)^2 of the probability mass; every other index (3/16)^2
/// assert!((probs[6] - 0.47265625).abs() < 1e-9);
/// assert!((state.norm_sqr() - 1.0).abs() < 1e-6);
/// # Ok::<(), SearchError>(())
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item

// Example 2: Choosing a move for a board
/// ```
/// use qttt::{Board, QuantumMoveSelector, SearchConfig, SearchError};
/// use qttt::Cell::{Empty as E, O, X};
///
/// // Only cell 4 is open
/// let board = Board::from_cells([X, O, X, O, E, O, O, X, X]);
/// let mut selector = QuantumMoveSelector::new(SearchConfig::default().with_seed(7))?;
/// assert_eq!(selector.choose(&board)?, 4);
///
/// // A full board has nothing to search for
/// let full = Board::from_cells([X, O, X, O, X, O, O, X, O]);
/// assert_eq!(selector.choose(&full), Err(SearchError::NoValidMoves));
/// # Ok::<(), SearchError>(())
/// ```
#[doc(hidden)]
const _: () = ();
