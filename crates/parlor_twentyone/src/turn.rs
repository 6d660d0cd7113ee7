//! Turn protocols for the player and the dealer.

use crate::deck::{Deck, DeckError};
use crate::hand::Hand;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// The total at which the dealer stands.
pub const DEALER_STANDS_AT: u32 = 17;

/// Participant role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// The human player, who chooses to hit or stay.
    Player,
    /// The dealer, who plays the fixed house policy.
    Dealer,
}

/// A player's choice at one step of their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Take another card.
    Hit,
    /// End the turn.
    Stay,
}

/// How a turn ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// The hand went over 21.
    Busted,
    /// The participant stopped at 21 or under.
    Stood,
}

/// Plays the dealer's turn under the fixed house policy.
///
/// Deals into the hand while the total is below 17, then stops.
/// The outcome is `Busted` iff the stopping total exceeds 21.
///
/// # Errors
///
/// Returns [`DeckError::Empty`] if the deck runs out.
#[instrument(skip(deck, hand, rng))]
pub fn dealer_play<R: Rng>(
    deck: &mut Deck,
    hand: &mut Hand,
    rng: &mut R,
) -> Result<TurnOutcome, DeckError> {
    while hand.total() < DEALER_STANDS_AT {
        hand.add_card(deck.deal(rng)?);
        debug!(total = hand.total(), "dealer hits");
    }
    if hand.is_busted() {
        Ok(TurnOutcome::Busted)
    } else {
        Ok(TurnOutcome::Stood)
    }
}

/// Plays the player's turn, asking `choose` for each step.
///
/// The caller supplies the hit-or-stay decisions (typically from a
/// console prompt); the engine deals on `Hit` and re-checks for a
/// bust, and ends the turn on `Stay` or on a bust, whichever comes
/// first.
///
/// # Errors
///
/// Returns [`DeckError::Empty`] if the deck runs out.
#[instrument(skip_all)]
pub fn player_play<R, F>(
    deck: &mut Deck,
    hand: &mut Hand,
    rng: &mut R,
    mut choose: F,
) -> Result<TurnOutcome, DeckError>
where
    R: Rng,
    F: FnMut(&Hand) -> Action,
{
    loop {
        match choose(hand) {
            Action::Stay => return Ok(TurnOutcome::Stood),
            Action::Hit => {
                hand.add_card(deck.deal(rng)?);
                debug!(total = hand.total(), "player hits");
                if hand.is_busted() {
                    return Ok(TurnOutcome::Busted);
                }
            }
        }
    }
}
