//! Round resolution.

use crate::deck::{Deck, DeckError};
use crate::hand::Hand;
use crate::turn::{dealer_play, player_play, Action, Role, TurnOutcome};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Who won a round of Twenty-One.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundWinner {
    /// The player won.
    Player,
    /// The dealer won.
    Dealer,
    /// Equal totals.
    Tie,
}

/// Resolves a finished round from the two hands.
///
/// A busted player loses outright; otherwise a busted dealer loses;
/// otherwise the higher total wins and equal totals tie. There is no
/// special case for a natural 21.
pub fn resolve_round(player: &Hand, dealer: &Hand) -> RoundWinner {
    if player.is_busted() {
        return RoundWinner::Dealer;
    }
    if dealer.is_busted() {
        return RoundWinner::Player;
    }
    match player.total().cmp(&dealer.total()) {
        std::cmp::Ordering::Greater => RoundWinner::Player,
        std::cmp::Ordering::Less => RoundWinner::Dealer,
        std::cmp::Ordering::Equal => RoundWinner::Tie,
    }
}

/// The hands left on the table when a round ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    /// Who won the round.
    pub winner: RoundWinner,
    /// The player's final hand.
    pub player: Hand,
    /// The dealer's final hand.
    pub dealer: Hand,
}

impl RoundSummary {
    /// The final hand held by the given participant.
    pub fn hand(&self, role: Role) -> &Hand {
        match role {
            Role::Player => &self.player,
            Role::Dealer => &self.dealer,
        }
    }
}

/// Plays one complete round: opening deals, the player's turn, then
/// the dealer's turn if the player survived.
///
/// `choose` supplies the player's hit-or-stay decisions. When the
/// player busts, the dealer does not play and wins outright.
///
/// # Errors
///
/// Returns [`DeckError::Empty`] if the deck runs out.
#[instrument(skip_all)]
pub fn play_round<R, F>(
    deck: &mut Deck,
    rng: &mut R,
    choose: F,
) -> Result<RoundSummary, DeckError>
where
    R: Rng,
    F: FnMut(&Hand) -> Action,
{
    let mut player = Hand::opening(deck, rng)?;
    let mut dealer = Hand::opening(deck, rng)?;

    let winner = if player_play(deck, &mut player, rng, choose)? == TurnOutcome::Busted {
        debug!(total = player.total(), "player busted");
        RoundWinner::Dealer
    } else if dealer_play(deck, &mut dealer, rng)? == TurnOutcome::Busted {
        debug!(total = dealer.total(), "dealer busted");
        RoundWinner::Player
    } else {
        resolve_round(&player, &dealer)
    };

    Ok(RoundSummary {
        winner,
        player,
        dealer,
    })
}
