//! A player's held cards and the legality queries trick play needs.

use std::collections::HashMap;

use super::cards_logic::hand_has_suit;
use super::cards_types::{Card, Suit};
use crate::errors::domain::{DomainError, PlayViolation};

/// Unordered bag of cards. With two or more packs a hand may hold the same
/// card twice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
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

    /// Copy of the held cards in display order (suit, then trick rank).
    pub fn sorted(&self) -> Vec<Card> {
        let mut v = self.cards.clone();
        v.sort();
        v
    }

    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    pub fn has_suit(&self, suit: Suit) -> bool {
        hand_has_suit(&self.cards, suit)
    }

    /// Remove one copy of `card`.
    pub fn remove(&mut self, card: Card) -> Result<Card, DomainError> {
        let pos = self.cards.iter().position(|&c| c == card).ok_or_else(|| {
            DomainError::illegal_play(
                PlayViolation::CardNotInHand,
                format!("{card} is not in hand"),
            )
        })?;
        Ok(self.cards.remove(pos))
    }

    /// How many copies of each card the hand holds.
    pub fn card_counts(&self) -> HashMap<Card, usize> {
        let mut counts = HashMap::new();
        for &card in &self.cards {
            *counts.entry(card).or_insert(0) += 1;
        }
        counts
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

/// Cards the holder may legally play into a trick.
///
/// With no lead yet every card is legal. Otherwise: cards of the led suit if
/// any are held; failing that, trump cards if any are held; failing that, the
/// whole hand. Result is sorted and keeps duplicate copies.
pub fn legal_moves(hand: &[Card], lead: Option<Suit>, trump: Suit) -> Vec<Card> {
    let mut v: Vec<Card> = match lead {
        Some(lead) if hand_has_suit(hand, lead) => {
            hand.iter().copied().filter(|c| c.suit == lead).collect()
        }
        Some(_) if hand_has_suit(hand, trump) => {
            hand.iter().copied().filter(|c| c.suit == trump).collect()
        }
        _ => hand.to_vec(),
    };
    v.sort();
    v
}

/// Check a single play against the follow-suit and must-trump rules.
pub fn check_play(
    hand: &[Card],
    card: Card,
    lead: Option<Suit>,
    trump: Suit,
) -> Result<(), DomainError> {
    if !hand.contains(&card) {
        return Err(DomainError::illegal_play(
            PlayViolation::CardNotInHand,
            format!("{card} is not in hand"),
        ));
    }
    let Some(lead) = lead else {
        return Ok(());
    };
    if card.suit == lead {
        return Ok(());
    }
    if hand_has_suit(hand, lead) {
        return Err(DomainError::illegal_play(
            PlayViolation::MustFollowSuit,
            format!("must follow {lead}"),
        ));
    }
    if card.suit != trump && hand_has_suit(hand, trump) {
        return Err(DomainError::illegal_play(
            PlayViolation::MustPlayTrump,
            format!("void in {lead}, must play {trump}"),
        ));
    }
    Ok(())
}
