// Proptest generators for domain types.
// Cards are drawn from a multi-pack pool, so duplicates are allowed up to the
// pack count.

use proptest::prelude::*;

use crate::domain::{Card, PlayerId, Rank, Suit};

pub fn suit() -> impl Strategy<Value = Suit> {
    prop_oneof![
        Just(Suit::Clubs),
        Just(Suit::Diamonds),
        Just(Suit::Hearts),
        Just(Suit::Spades),
    ]
}

pub fn rank() -> impl Strategy<Value = Rank> {
    prop_oneof![
        Just(Rank::Nine),
        Just(Rank::Jack),
        Just(Rank::Queen),
        Just(Rank::King),
        Just(Rank::Ten),
        Just(Rank::Ace),
    ]
}

pub fn card() -> impl Strategy<Value = Card> {
    (suit(), rank()).prop_map(|(suit, rank)| Card { suit, rank })
}

/// Hand of 1..=max cards; duplicates allowed.
pub fn hand(max: usize) -> impl Strategy<Value = Vec<Card>> {
    prop::collection::vec(card(), 1..=max)
}

/// Hand with no card of `excluded`.
pub fn hand_without_suit(excluded: Suit, max: usize) -> impl Strategy<Value = Vec<Card>> {
    let others: Vec<Suit> = Suit::ALL.into_iter().filter(|&s| s != excluded).collect();
    let suit = proptest::sample::select(others);
    prop::collection::vec(
        (suit, rank()).prop_map(|(suit, rank)| Card { suit, rank }),
        1..=max,
    )
}

/// A full trick at a `seats`-player table: `(leader, plays in order)`.
pub fn complete_trick(seats: usize) -> impl Strategy<Value = (PlayerId, Vec<(PlayerId, Card)>)> {
    (
        0..seats as PlayerId,
        prop::collection::vec(card(), seats..=seats),
    )
        .prop_map(move |(leader, cards)| {
            let plays = cards
                .into_iter()
                .enumerate()
                .map(|(i, c)| (((leader as usize + i) % seats) as PlayerId, c))
                .collect();
            (leader, plays)
        })
}
