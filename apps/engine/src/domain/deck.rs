//! Decks and the multi-deck draw pool.
//!
//! Drawing always removes the card from its deck. There is no "in play"
//! marker: a card is either in the pool or it has left it for good, so
//! `len()` is the single source of truth for what can still be dealt.

use std::collections::HashMap;

use rand::seq::SliceRandom;
use rand::Rng;

use super::cards_types::{Card, Rank, Suit};
use super::rules::CARDS_PER_DECK;
use crate::errors::domain::DomainError;

/// One pinochle deck: a single copy of each of the 24 rank/suit pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Build a deck in standard order: suits C, D, H, S; nine up to ace.
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(CARDS_PER_DECK);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card { suit, rank });
            }
        }
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Remove and return the card at `index`, keeping the order of the rest.
    pub fn take(&mut self, index: usize) -> Option<Card> {
        if index < self.cards.len() {
            Some(self.cards.remove(index))
        } else {
            None
        }
    }

    /// Fisher-Yates shuffle driven by the caller's generator.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

/// Owns `pack_count` decks and hands cards out without replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckPool {
    decks: Vec<Deck>,
}

impl DeckPool {
    pub fn new(pack_count: usize) -> Result<Self, DomainError> {
        if pack_count == 0 {
            return Err(DomainError::config("pack count must be at least 1"));
        }
        let decks = (0..pack_count).map(|_| Deck::new()).collect();
        Ok(Self { decks })
    }

    /// Cards still available across all decks.
    pub fn len(&self) -> usize {
        self.decks.iter().map(Deck::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.decks.iter().all(Deck::is_empty)
    }

    pub fn deck_count(&self) -> usize {
        self.decks.len()
    }

    /// Cards the pool held when it was built.
    pub fn capacity(&self) -> usize {
        self.decks.len() * CARDS_PER_DECK
    }

    pub fn decks(&self) -> &[Deck] {
        &self.decks
    }

    pub fn deck(&self, pool_index: usize) -> Option<&Deck> {
        self.decks.get(pool_index)
    }

    /// Remove one card chosen uniformly over the whole pool.
    ///
    /// Each remaining card is equally likely regardless of which deck holds
    /// it, so a nearly empty deck is not over-sampled.
    pub fn draw_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Card, DomainError> {
        let total = self.len();
        if total == 0 {
            return Err(DomainError::EmptyPool);
        }
        let mut offset = rng.random_range(0..total);
        for deck in &mut self.decks {
            if offset < deck.len() {
                return deck
                    .take(offset)
                    .ok_or_else(|| DomainError::out_of_range("random offset past deck end"));
            }
            offset -= deck.len();
        }
        Err(DomainError::out_of_range("random offset past pool end"))
    }

    /// Remove the card at `card_index` of deck `pool_index`.
    pub fn draw_at(&mut self, pool_index: usize, card_index: usize) -> Result<Card, DomainError> {
        let deck_count = self.decks.len();
        let deck = self.decks.get_mut(pool_index).ok_or_else(|| {
            DomainError::out_of_range(format!("deck {pool_index} of {deck_count}"))
        })?;
        let len = deck.len();
        deck.take(card_index).ok_or_else(|| {
            DomainError::out_of_range(format!(
                "card {card_index} of {len} in deck {pool_index}"
            ))
        })
    }

    /// Restore every deck to a full, ordered 24 cards.
    pub fn refill(&mut self) {
        for deck in &mut self.decks {
            *deck = Deck::new();
        }
    }

    /// Shuffle every constituent deck in place.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for deck in &mut self.decks {
            deck.shuffle(rng);
        }
    }

    /// Frequency table of the cards still in the pool.
    pub fn card_counts(&self) -> HashMap<Card, usize> {
        let mut counts = HashMap::with_capacity(CARDS_PER_DECK);
        for card in self.decks.iter().flat_map(Deck::cards) {
            *counts.entry(*card).or_insert(0) += 1;
        }
        counts
    }
}
