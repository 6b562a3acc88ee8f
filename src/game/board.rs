// src/game/board.rs

use crate::core::BOARD_CELLS;
use std::fmt;
use thiserror::Error;

/// A board position in `0..9`, row-major from the top-left cell.
pub type Move = usize;

/// The eight three-in-a-row lines: rows, columns, diagonals.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// The cell value this player writes.
    pub fn mark(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }

    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    fn symbol(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }
}

/// Terminal result of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    XWins,
    OWins,
    Draw,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("Position {0} is off the board")]
    OutOfRange(usize),

    #[error("Position {0} is already taken")]
    Occupied(usize),
}

/// Nine cells, row-major. Only `apply` mutates it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; BOARD_CELLS],
}

impl Board {
    /// An empty board.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Cell; BOARD_CELLS]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Cell; BOARD_CELLS] {
        &self.cells
    }

    pub fn cell(&self, pos: usize) -> Option<Cell> {
        self.cells.get(pos).copied()
    }

    /// `true` iff `pos` is on the board and empty.
    pub fn is_valid(&self, pos: usize) -> bool {
        self.cell(pos) == Some(Cell::Empty)
    }

    /// Empty positions in ascending order.
    pub fn valid_moves(&self) -> Vec<Move> {
        (0..BOARD_CELLS).filter(|&pos| self.is_valid(pos)).collect()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| *c != Cell::Empty)
    }

    /// Writes `player`'s mark into an empty cell.
    pub fn apply(&mut self, pos: Move, player: Player) -> Result<(), BoardError> {
        match self.cells.get_mut(pos) {
            None => Err(BoardError::OutOfRange(pos)),
            Some(cell) if *cell != Cell::Empty => Err(BoardError::Occupied(pos)),
            Some(cell) => {
                *cell = player.mark();
                Ok(())
            }
        }
    }
}

/// Checks the eight lines, then fullness. `None` while the game is still open.
pub fn evaluate(board: &Board) -> Option<Outcome> {
    let cells = board.cells();
    for [a, b, c] in WIN_LINES {
        if cells[a] != Cell::Empty && cells[a] == cells[b] && cells[b] == cells[c] {
            return Some(if cells[a] == Cell::X { Outcome::XWins } else { Outcome::OWins });
        }
    }
    board.is_full().then_some(Outcome::Draw)
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, chunk) in self.cells.chunks(3).enumerate() {
            let symbols: Vec<String> = chunk.iter().map(|c| c.symbol().to_string()).collect();
            writeln!(f, "{}", symbols.join(" | "))?;
            if row < 2 {
                writeln!(f, "{}", "-".repeat(9))?;
            }
        }
        Ok(())
    }
}
