// src/game/mod.rs

//! Tic-tac-toe around the search: the board, the move selector that turns
//! sampled outcomes into a move, the random opponent, and the turn loop.

pub mod board;
pub mod engine;
pub mod opponent;
pub mod selector;

pub use board::{evaluate, Board, BoardError, Cell, Move, Outcome, Player, WIN_LINES};
pub use engine::{Game, GameStatus};
pub use opponent::random_move;
pub use selector::{select_move, QuantumMoveSelector};
