//! Core domain types for tic-tac-toe.

use crate::position::Position;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player X (the human by convention).
    X,
    /// Player O (the computer by convention).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// The mark drawn on the board.
    pub fn mark(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.mark())
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

/// The 8 lines that win the game: 3 rows, 3 columns, 2 diagonals.
///
/// Scan order is fixed (rows, columns, diagonals) so that win
/// detection and the opponent heuristic are deterministic.
pub const WINNING_LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Errors that can occur when placing a mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The square is already occupied.
    #[display("square {} is already occupied", _0)]
    Occupied(#[error(not(source))] Position),
    /// The game has already reached a terminal state.
    #[display("the game is already over")]
    GameOver,
}

/// 3x3 tic-tac-toe board.
///
/// Marks only ever change from empty to occupied; `reset` is the
/// one exception, clearing the whole board for a new round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.index()]
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Places a mark on an empty square.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::Occupied`] if the square is already marked;
    /// the board is left unchanged.
    #[instrument(skip(self))]
    pub fn place(&mut self, pos: Position, mark: Player) -> Result<(), MoveError> {
        if !self.is_empty(pos) {
            return Err(MoveError::Occupied(pos));
        }
        self.squares[pos.index()] = Square::Occupied(mark);
        Ok(())
    }

    /// Returns the unmarked positions in ascending square order.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|&pos| self.is_empty(pos))
            .collect()
    }

    /// Checks if the board is full.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|&s| s != Square::Empty)
    }

    /// Scans the winning lines for a uniformly marked one.
    ///
    /// Lines are checked in the fixed [`WINNING_LINES`] order; the
    /// first complete line's mark is returned.
    pub fn winning_mark(&self) -> Option<Player> {
        for [a, b, c] in WINNING_LINES {
            if let Square::Occupied(mark) = self.get(a)
                && self.get(b) == Square::Occupied(mark)
                && self.get(c) == Square::Occupied(mark)
            {
                return Some(mark);
            }
        }
        None
    }

    /// True iff some line is complete.
    pub fn someone_won(&self) -> bool {
        self.winning_mark().is_some()
    }

    /// Clears all 9 squares for a new round.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.squares = [Square::Empty; 9];
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
