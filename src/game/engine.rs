// src/game/engine.rs

use crate::config::SearchConfig;
use crate::core::SearchError;
use crate::game::board::{evaluate, Board, Move, Outcome, Player};
use crate::game::opponent::random_move;
use crate::game::selector::QuantumMoveSelector;
use crate::simulation::Sampler;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fmt;
use tracing::{info, warn};

// Keeps the opponent's stream distinct from the sampler's when both derive from one seed
const OPPONENT_SEED_OFFSET: u64 = 0x9E37_79B9_7F4A_7C15;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    XWins,
    OWins,
    Draw,
    /// Move selection failed; the reason is reported to the caller.
    Aborted(String),
}

impl GameStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

impl From<Outcome> for GameStatus {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::XWins => GameStatus::XWins,
            Outcome::OWins => GameStatus::OWins,
            Outcome::Draw => GameStatus::Draw,
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::XWins => write!(f, "Player X wins!"),
            GameStatus::OWins => write!(f, "Player O wins!"),
            GameStatus::Draw => write!(f, "It's a draw!"),
            GameStatus::Aborted(reason) => write!(f, "Game aborted: {}", reason),
        }
    }
}

/// Drives one game: X moves through the quantum search, O at random.
///
/// The board is the only state that survives between turns; each of X's
/// decisions builds and drops its own circuit and state vector.
pub struct Game<R = StdRng, Q = StdRng> {
    board: Board,
    current: Player,
    status: GameStatus,
    history: Vec<(Player, Move)>,
    searcher: QuantumMoveSelector<R>,
    opponent_rng: Q,
}

impl Game<StdRng, StdRng> {
    /// New game on an empty board with X to move. A seeded config makes the whole
    /// game reproducible.
    pub fn new(config: SearchConfig) -> Result<Self, SearchError> {
        let opponent_rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(OPPONENT_SEED_OFFSET)),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        Ok(Self::with_parts(QuantumMoveSelector::new(config)?, opponent_rng))
    }
}

impl<R: rand::Rng, Q: rand::Rng> Game<R, Q> {
    /// Builds a game from an explicit searcher and opponent random source.
    pub fn with_parts(searcher: QuantumMoveSelector<R>, opponent_rng: Q) -> Self {
        Self {
            board: Board::new(),
            current: Player::X,
            status: GameStatus::InProgress,
            history: Vec::new(),
            searcher,
            opponent_rng,
        }
    }

    /// Same as `with_parts`, with the sampler seeded separately from `config`.
    pub fn with_rngs(config: SearchConfig, search_rng: R, opponent_rng: Q) -> Result<Self, SearchError> {
        let searcher = QuantumMoveSelector::with_sampler(config, Sampler::new(search_rng))?;
        Ok(Self::with_parts(searcher, opponent_rng))
    }

    /// Starts from an arbitrary position instead of the empty board.
    pub fn starting_from(mut self, board: Board, to_move: Player) -> Self {
        self.board = board;
        self.current = to_move;
        self.status = evaluate(&board).map_or(GameStatus::InProgress, GameStatus::from);
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current
    }

    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    /// Every applied move, in order.
    pub fn history(&self) -> &[(Player, Move)] {
        &self.history
    }

    /// Plays one turn for the current player and re-evaluates the board.
    ///
    /// A failed move decision ends the game with `GameStatus::Aborted`; it is
    /// never returned as an error. Calling this on a finished game is a no-op.
    pub fn step(&mut self) -> &GameStatus {
        if self.status.is_terminal() {
            return &self.status;
        }

        let player = self.current;
        let decision = match player {
            Player::X => self.searcher.choose(&self.board),
            Player::O => random_move(&self.board, &mut self.opponent_rng),
        };

        let chosen = match decision {
            Ok(chosen) => chosen,
            Err(e) => return self.abort(player, e.to_string()),
        };
        if let Err(e) = self.board.apply(chosen, player) {
            return self.abort(player, e.to_string());
        }
        self.history.push((player, chosen));
        info!(%player, position = chosen, "move applied");

        match evaluate(&self.board) {
            Some(outcome) => {
                self.status = outcome.into();
                info!(status = %self.status, "game finished");
            }
            None => self.current = player.opponent(),
        }
        &self.status
    }

    /// Runs turns until the game ends, calling `on_turn` after each one.
    pub fn play_with<F>(&mut self, mut on_turn: F) -> &GameStatus
    where
        F: FnMut(&Board, Player, Move),
    {
        while !self.status.is_terminal() {
            let before = self.history.len();
            self.step();
            if let Some(&(player, chosen)) = self.history.get(before) {
                on_turn(&self.board, player, chosen);
            }
        }
        &self.status
    }

    /// Runs turns until the game ends.
    pub fn play(&mut self) -> &GameStatus {
        self.play_with(|_, _, _| {})
    }

    fn abort(&mut self, player: Player, reason: String) -> &GameStatus {
        warn!(%player, %reason, "move selection failed, aborting game");
        self.status = GameStatus::Aborted(reason);
        &self.status
    }
}
