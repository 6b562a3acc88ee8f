// src/game/opponent.rs

use crate::core::SearchError;
use crate::game::board::{Board, Move};
use rand::distr::{Distribution, Uniform};

/// The non-searching player: a uniformly random empty cell.
pub fn random_move<R: rand::Rng + ?Sized>(board: &Board, rng: &mut R) -> Result<Move, SearchError> {
    let valid_moves = board.valid_moves();
    if valid_moves.is_empty() {
        return Err(SearchError::NoValidMoves);
    }
    let pick = Uniform::new(0, valid_moves.len()).map_err(|e| SearchError::InvalidConfig {
        message: format!("cannot draw a random move: {}", e),
    })?;
    Ok(valid_moves[pick.sample(rng)])
}
