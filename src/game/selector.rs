// src/game/selector.rs

use crate::config::SearchConfig;
use crate::core::{SearchError, BOARD_CELLS};
use crate::game::board::{Board, Move};
use crate::grover::search_circuit;
use crate::simulation::{most_frequent, OutcomeTable, Sampler, Simulator};
use rand::rngs::StdRng;
use tracing::debug;

/// Picks a move from sampled outcomes.
///
/// Entries whose index is off the board or names an occupied cell are dropped;
/// of the rest the most frequent wins, the smallest index on equal counts.
///
/// # Errors
/// * `NoValidSampledMoves` if nothing survives the filter.
pub fn select_move(outcomes: &OutcomeTable, board: &Board) -> Result<Move, SearchError> {
    let candidates = outcomes
        .iter()
        .filter(|&(index, _)| index < BOARD_CELLS && board.is_valid(index));
    most_frequent(candidates)
        .map(|(index, _)| index)
        .ok_or(SearchError::NoValidSampledMoves)
}

/// The searching player's brain: runs the full per-turn pipeline
/// (valid moves -> search circuit -> simulation -> sampling -> selection).
///
/// Each call allocates its own state and circuit; only the random source
/// carries over between turns.
#[derive(Debug, Clone)]
pub struct QuantumMoveSelector<R = StdRng> {
    config: SearchConfig,
    sampler: Sampler<R>,
}

impl QuantumMoveSelector<StdRng> {
    /// Validates `config` and seeds the sampler from `config.seed`.
    pub fn new(config: SearchConfig) -> Result<Self, SearchError> {
        config.validate()?;
        Ok(Self {
            sampler: Sampler::from_seed_option(config.seed),
            config,
        })
    }
}

impl<R: rand::Rng> QuantumMoveSelector<R> {
    /// Uses an explicit sampler instead of the one `config.seed` would give.
    pub fn with_sampler(config: SearchConfig, sampler: Sampler<R>) -> Result<Self, SearchError> {
        config.validate()?;
        Ok(Self { config, sampler })
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Samples the amplified distribution for `board` without selecting.
    pub fn sample(&mut self, board: &Board) -> Result<OutcomeTable, SearchError> {
        let valid_moves = board.valid_moves();
        if valid_moves.is_empty() {
            return Err(SearchError::NoValidMoves);
        }
        let circuit = search_circuit(self.config.num_qubits, &valid_moves, self.config.rounds)?;
        Simulator::new().run_and_sample(&circuit, self.config.shots, &mut self.sampler)
    }

    /// Chooses a move for `board`.
    pub fn choose(&mut self, board: &Board) -> Result<Move, SearchError> {
        let outcomes = self.sample(board)?;
        let chosen = select_move(&outcomes, board)?;
        debug!(chosen, votes = outcomes.count(chosen), shots = outcomes.total(), "move selected");
        Ok(chosen)
    }
}
