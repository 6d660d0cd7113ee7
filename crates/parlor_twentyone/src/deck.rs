//! The 52-card deck.

use crate::card::{Card, Rank, Suit};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// Errors that can occur when dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum DeckError {
    /// No cards remain in the deck.
    #[display("deal requested from an empty deck")]
    Empty,
}

/// A deck of 52 unique cards.
///
/// Each card appears at most once across the deck and all hands
/// until a fresh deck is built for the next round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Builds a full 52-card deck, shuffled with the given RNG.
    #[instrument(skip(rng))]
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        let mut cards: Vec<Card> = Suit::iter()
            .flat_map(|suit| Rank::iter().map(move |rank| Card::new(rank, suit)))
            .collect();
        cards.shuffle(rng);
        Self { cards }
    }

    /// Deals one card off the top of the deck.
    ///
    /// The remaining cards are shuffled again before every deal;
    /// each card is drawn uniformly from what remains.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] when no cards remain. A round
    /// never deals enough cards to reach this in practice.
    #[instrument(skip(self, rng), fields(remaining = self.cards.len()))]
    pub fn deal<R: Rng>(&mut self, rng: &mut R) -> Result<Card, DeckError> {
        self.cards.shuffle(rng);
        self.cards.pop().ok_or(DeckError::Empty)
    }

    /// Number of cards remaining.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// True iff no cards remain.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The remaining cards, top of the deck last.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
