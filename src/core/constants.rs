//! Constants shared by the simulator, the search and the game.

/// Register width used when none is configured; the fewest qubits that index all nine cells.
pub const DEFAULT_NUM_QUBITS: usize = 4;

/// Number of shots drawn per move decision.
pub const DEFAULT_SHOTS: u64 = 1024;

/// Oracle + diffusion rounds per move decision.
pub const DEFAULT_ROUNDS: usize = 1;

/// Allowed deviation of the squared norm (or total probability) from 1.
pub const NORM_TOLERANCE: f64 = 1e-6;

/// Cells on a tic-tac-toe board.
pub const BOARD_CELLS: usize = 9;

/// Largest register the engine will allocate (2^20 amplitudes).
pub const MAX_QUBITS: usize = 20;

/// Smallest register able to index `positions` distinct basis states.
pub const fn minimum_qubits(positions: usize) -> usize {
    if positions <= 1 {
        1
    } else {
        (usize::BITS - (positions - 1).leading_zeros()) as usize
    }
}
