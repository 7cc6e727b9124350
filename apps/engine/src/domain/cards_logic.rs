//! Card game logic: checking suits in hands, comparing card strength

use super::cards_types::{Card, Suit};

pub fn hand_has_suit(hand: &[Card], suit: Suit) -> bool {
    hand.iter().any(|c| c.suit == suit)
}

/// Whether `a` beats the currently winning card `b` under `lead` and `trump`.
///
/// Ties (identical cards from different packs) do not beat: the card played
/// first keeps the trick.
pub fn card_beats(a: Card, b: Card, lead: Suit, trump: Suit) -> bool {
    let a_trump = a.suit == trump;
    let b_trump = b.suit == trump;
    if a_trump && !b_trump {
        return true;
    }
    if b_trump && !a_trump {
        return false;
    }
    if a_trump && b_trump {
        return a.rank > b.rank;
    }
    // Neither is trump: compare only if following lead
    let a_follows = a.suit == lead;
    let b_follows = b.suit == lead;
    if a_follows && !b_follows {
        return true;
    }
    if b_follows && !a_follows {
        return false;
    }
    if a_follows && b_follows {
        return a.rank > b.rank;
    }
    false
}

/// Index of the winning play in `cards`, in play order.
///
/// The first card sets the lead suit. Returns `None` for an empty slice.
pub fn winning_index(cards: &[Card], trump: Suit) -> Option<usize> {
    let lead = cards.first()?.suit;
    let mut best_idx = 0usize;
    for (i, &card) in cards.iter().enumerate().skip(1) {
        if card_beats(card, cards[best_idx], lead, trump) {
            best_idx = i;
        }
    }
    Some(best_idx)
}
