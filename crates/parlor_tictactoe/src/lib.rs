//! Tic-tac-toe rule engine.
//!
//! Pure game logic with no console I/O: board state, terminal-state
//! detection, and a three-tier heuristic computer opponent. An outer
//! match loop renders the board, prompts the human, and threads the
//! score; this crate only answers rule questions and applies moves.
//!
//! # Example
//!
//! ```
//! use parlor_tictactoe::{choose_move, Game, GameStatus, Player, Position};
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(7);
//! let mut game = Game::new();
//!
//! // Human takes the center.
//! game.place(Position::Center)?;
//!
//! // Computer responds.
//! let reply = choose_move(game.board(), Player::O, Player::X, &mut rng)
//!     .expect("board is not full");
//! game.place(reply)?;
//!
//! assert_eq!(game.status(), GameStatus::InProgress);
//! # Ok::<(), parlor_tictactoe::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod game;
mod heuristic;
mod position;
mod types;

pub use game::{Game, GameStatus};
pub use heuristic::choose_move;
pub use position::Position;
pub use types::{Board, MoveError, Player, Square, WINNING_LINES};

/// Alias for clarity at the match layer.
pub type Mark = Player;
