//! Round-level game engine for tic-tac-toe.

use crate::position::Position;
use crate::types::{Board, MoveError, Player};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended with a full board and no winner.
    Draw,
}

/// One round of tic-tac-toe: a board plus turn tracking.
///
/// The game alternates players automatically; callers only say
/// where the current player moves. Once the round reaches a
/// terminal state, further placement is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    to_move: Player,
    status: GameStatus,
}

impl Game {
    /// Creates a new game with X to move.
    #[instrument]
    pub fn new() -> Self {
        Self::starting_with(Player::X)
    }

    /// Creates a new game with the given player moving first.
    #[instrument]
    pub fn starting_with(first: Player) -> Self {
        Self {
            board: Board::new(),
            to_move: first,
            status: GameStatus::InProgress,
        }
    }

    /// Creates a new game with a randomly chosen first player.
    pub fn random_first<R: Rng>(rng: &mut R) -> Self {
        let first = if rng.gen_bool(0.5) {
            Player::X
        } else {
            Player::O
        };
        Self::starting_with(first)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Places the current player's mark and advances the turn.
    ///
    /// Returns the status after the move, so callers can stop
    /// their loop as soon as the round ends.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] after a terminal state and
    /// [`MoveError::Occupied`] for a marked square; the caller
    /// re-prompts on either.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn place(&mut self, pos: Position) -> Result<GameStatus, MoveError> {
        if self.status != GameStatus::InProgress {
            return Err(MoveError::GameOver);
        }
        self.board.place(pos, self.to_move)?;

        if let Some(winner) = self.board.winning_mark() {
            self.status = GameStatus::Won(winner);
        } else if self.board.is_full() {
            self.status = GameStatus::Draw;
        } else {
            self.to_move = self.to_move.opponent();
        }
        Ok(self.status)
    }

    /// Clears the board for a new round with the given first player.
    #[instrument(skip(self))]
    pub fn reset(&mut self, first: Player) {
        self.board.reset();
        self.to_move = first;
        self.status = GameStatus::InProgress;
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
