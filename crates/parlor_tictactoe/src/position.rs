//! Board positions and their numeric conversions.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A square position on the tic-tac-toe board.
///
/// Callers address squares by the numbers 1-9 (reading order),
/// while the board stores squares at row-major indices 0-8.
/// Both conversions live here so the rest of the crate never
/// does position arithmetic.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Top-left (square 1).
    TopLeft,
    /// Top-center (square 2).
    TopCenter,
    /// Top-right (square 3).
    TopRight,
    /// Middle-left (square 4).
    MiddleLeft,
    /// Center (square 5).
    Center,
    /// Middle-right (square 6).
    MiddleRight,
    /// Bottom-left (square 7).
    BottomLeft,
    /// Bottom-center (square 8).
    BottomCenter,
    /// Bottom-right (square 9).
    BottomRight,
}

impl Position {
    /// All 9 positions in ascending square order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Converts position to board index (0-8).
    pub fn index(self) -> usize {
        match self {
            Position::TopLeft => 0,
            Position::TopCenter => 1,
            Position::TopRight => 2,
            Position::MiddleLeft => 3,
            Position::Center => 4,
            Position::MiddleRight => 5,
            Position::BottomLeft => 6,
            Position::BottomCenter => 7,
            Position::BottomRight => 8,
        }
    }

    /// The square number shown to players (1-9).
    pub fn number(self) -> u8 {
        self.index() as u8 + 1
    }

    /// Creates a position from a board index (0-8).
    #[instrument]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Creates a position from a player-facing square number (1-9).
    ///
    /// Returns `None` for numbers outside 1-9; the caller re-prompts.
    #[instrument]
    pub fn from_number(number: u8) -> Option<Self> {
        if number == 0 {
            return None;
        }
        Self::from_index(number as usize - 1)
    }

    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
