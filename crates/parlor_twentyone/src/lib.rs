//! Twenty-One rule engine.
//!
//! Pure game logic for a blackjack-style console game: a shuffled
//! 52-card deck, Ace-adjusted hand totals, bust detection, the fixed
//! dealer policy (hit below 17), and round resolution. All console
//! prompting and display stays with the caller, which drives the
//! player's turn through a hit-or-stay callback.
//!
//! # Example
//!
//! ```
//! use parlor_twentyone::{play_round, Action, Deck, Hand};
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(21);
//! let mut deck = Deck::new(&mut rng);
//!
//! // A cautious player: stay unless the total is under 15.
//! let summary = play_round(&mut deck, &mut rng, |hand: &Hand| {
//!     if hand.total() < 15 { Action::Hit } else { Action::Stay }
//! })?;
//!
//! assert!(summary.player.total() >= 15 || summary.player.is_busted());
//! # Ok::<(), parlor_twentyone::DeckError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod card;
mod deck;
mod hand;
mod round;
mod turn;

pub use card::{Card, Rank, Suit};
pub use deck::{Deck, DeckError};
pub use hand::{Hand, MAX_TOTAL};
pub use round::{play_round, resolve_round, RoundSummary, RoundWinner};
pub use turn::{dealer_play, player_play, Action, Role, TurnOutcome, DEALER_STANDS_AT};
