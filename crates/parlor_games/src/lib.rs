//! Parlor games library - console game rule engines.
//!
//! Two independent rule engines behind one crate:
//!
//! - **Tic-tac-toe** ([`tictactoe`]): board state, win detection,
//!   and a three-tier heuristic computer opponent.
//! - **Twenty-One** ([`twentyone`]): deck, Ace-adjusted hand totals,
//!   the fixed dealer policy, and round resolution.
//!
//! The engines do no console I/O. An orchestration layer renders
//! state, prompts the human, and threads a [`MatchState`] value
//! through its round loop to score a match to 5 points.
//!
//! # Example
//!
//! ```
//! use parlor_games::{Contender, MatchState, RoundResult};
//! use parlor_games::twentyone::{play_round, Action, Deck, Hand};
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(3);
//! let mut score = MatchState::new();
//!
//! while !score.is_over() {
//!     let mut deck = Deck::new(&mut rng);
//!     let summary = play_round(&mut deck, &mut rng, |hand: &Hand| {
//!         if hand.total() < 17 { Action::Hit } else { Action::Stay }
//!     })?;
//!     score.record(RoundResult::from(summary.winner));
//! }
//!
//! assert!(score.points(score.champion().unwrap()) >= 5);
//! # Ok::<(), parlor_games::twentyone::DeckError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod match_state;

pub use match_state::{Contender, MatchState, RoundResult, POINTS_TO_WIN};

/// Tic-tac-toe rule engine.
pub use parlor_tictactoe as tictactoe;

/// Twenty-One rule engine.
pub use parlor_twentyone as twentyone;
