use crate::domain::bidding::Contract;
use crate::domain::fixtures::CardFixtures;
use crate::domain::hand::Hand;
use crate::domain::scoring::{
    counter_points, score, MeldEvaluator, NoMeld, SetPenalty, Sides,
};
use crate::domain::{Card, Rank, Suit};
use crate::errors::domain::DomainError;

fn contract(bid: u32) -> Contract {
    Contract {
        bidder: 0,
        trump: Suit::Hearts,
        bid,
    }
}

fn pile(tokens: &[&str]) -> Vec<Card> {
    CardFixtures::parse_hardcoded(tokens)
}

#[test]
fn counter_points_sums_card_values() {
    assert_eq!(counter_points(&pile(&["AS", "TS", "KS", "QS", "JS", "9S"])), 30);
    assert_eq!(counter_points(&[]), 0);
}

#[test]
fn made_contract_scores_everyone() {
    let captured = vec![pile(&["AS", "AH", "TC", "KD"]), pile(&["TS", "QH"])];
    let r = score(&contract(40), 0, &captured, &[10, 5], SetPenalty::Zero).unwrap();
    assert!(r.made);
    assert_eq!(r.sides[0].counters, 36);
    assert_eq!(r.sides[0].total, 46);
    assert_eq!(r.sides[0].awarded, 46);
    assert_eq!(r.sides[1].awarded, 18);
}

#[test]
fn set_bidder_scores_per_penalty() {
    let captured = vec![pile(&["AS"]), pile(&["TS", "TH", "AC"])];
    let zero = score(&contract(50), 0, &captured, &[0, 0], SetPenalty::Zero).unwrap();
    assert!(!zero.made);
    assert_eq!(zero.sides[0].total, 11);
    assert_eq!(zero.sides[0].awarded, 0);
    assert_eq!(zero.sides[1].awarded, 31);

    let minus = score(&contract(50), 0, &captured, &[0, 0], SetPenalty::MinusBid).unwrap();
    assert_eq!(minus.sides[0].awarded, -50);
    assert_eq!(minus.sides[1].awarded, 31);
}

#[test]
fn exact_bid_is_made() {
    let captured = vec![pile(&["AS", "AH"]), Vec::new()];
    let r = score(&contract(22), 0, &captured, &[0, 0], SetPenalty::MinusBid).unwrap();
    assert!(r.made);
    assert_eq!(r.sides[0].awarded, 22);
}

#[test]
fn scoring_is_pure() {
    let captured = vec![pile(&["AS", "KH"]), pile(&["TD"]), pile(&["JC"])];
    let a = score(&contract(20), 2, &captured, &[4, 0, 20], SetPenalty::Zero).unwrap();
    let b = score(&contract(20), 2, &captured, &[4, 0, 20], SetPenalty::Zero).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.bidding_side, 2);
    assert!(a.made);
}

#[test]
fn mismatched_inputs_rejected() {
    let captured = vec![Vec::new(), Vec::new()];
    assert!(matches!(
        score(&contract(50), 0, &captured, &[0], SetPenalty::Zero),
        Err(DomainError::IndexOutOfRange(_))
    ));
    assert!(matches!(
        score(&contract(50), 2, &captured, &[0, 0], SetPenalty::Zero),
        Err(DomainError::IndexOutOfRange(_))
    ));
}

#[test]
fn partnerships_pool_alternate_seats() {
    let sides = Sides::partnerships(4);
    assert_eq!(sides.count(), 2);
    assert_eq!(sides.side_of(2), Some(0));
    assert_eq!(sides.side_of(3), Some(1));
    assert_eq!(sides.side_of(4), None);
    assert_eq!(sides.members(1), vec![1, 3]);
    assert_eq!(sides.sum_by_side(&[1, 2, 3, 4]), vec![4, 6]);

    let by_seat = vec![pile(&["AS"]), pile(&["TS"]), pile(&["KS"]), Vec::new()];
    let grouped = sides.group_captured(&by_seat);
    assert_eq!(grouped[0].len(), 2);
    assert_eq!(grouped[1].len(), 1);
}

#[test]
fn individual_sides_map_one_to_one() {
    let sides = Sides::individual(3);
    assert_eq!(sides.count(), 3);
    assert_eq!(sides.members(2), vec![2]);
}

struct AcesInTrump;

impl MeldEvaluator for AcesInTrump {
    fn meld(&self, hand: &Hand, trump: Suit) -> u32 {
        hand.cards()
            .iter()
            .filter(|c| c.suit == trump && c.rank == Rank::Ace)
            .count() as u32
            * 10
    }
}

#[test]
fn meld_evaluators_are_pluggable() {
    let hand = Hand::from_cards(pile(&["AH", "AH", "AS"]));
    assert_eq!(NoMeld.meld(&hand, Suit::Hearts), 0);
    assert_eq!(AcesInTrump.meld(&hand, Suit::Hearts), 20);
}

#[test]
fn huge_meld_saturates() {
    let captured = vec![pile(&["AS"]), Vec::new()];
    let r = score(&contract(50), 0, &captured, &[u32::MAX, 0], SetPenalty::Zero).unwrap();
    assert!(r.made);
    assert_eq!(r.sides[0].total, u32::MAX);
    assert_eq!(r.sides[0].awarded, u32::MAX as i64);

    let sides = Sides::partnerships(4);
    assert_eq!(sides.sum_by_side(&[u32::MAX, 1, 5, 2]), vec![u32::MAX, 3]);
}
