use crate::domain::fixtures::CardFixtures;
use crate::domain::hand::Hand;
use crate::domain::state::PlayerId;
use crate::domain::tricks::{resolve_trick, TrickEngine, TrickState};
use crate::domain::{Card, Suit};
use crate::errors::domain::{DomainError, PlayViolation};

fn hands(tokens: [&[&str]; 4]) -> Vec<Hand> {
    tokens
        .iter()
        .map(|t| Hand::from_cards(CardFixtures::parse_hardcoded(t)))
        .collect()
}

fn card(token: &str) -> Card {
    token.parse().unwrap()
}

fn play_all(engine: &mut TrickEngine, hands: &mut [Hand], plays: &[(PlayerId, &str)]) {
    for &(who, token) in plays {
        engine.play_card(hands, who, card(token)).unwrap();
    }
}

#[test]
fn highest_lead_card_wins_without_trump() {
    let mut h = hands([&["9C", "AH"], &["AC", "9H"], &["TC", "KH"], &["KS", "QH"]]);
    let mut engine = TrickEngine::new(4, Suit::Diamonds, 0).unwrap();
    play_all(
        &mut engine,
        &mut h,
        &[(0, "9C"), (1, "AC"), (2, "TC"), (3, "KS")],
    );
    match engine.state() {
        TrickState::Resolved { winner, plays } => {
            assert_eq!(*winner, 1);
            assert_eq!(plays.len(), 4);
        }
        other => panic!("expected resolved trick, got {other:?}"),
    }
    assert_eq!(engine.captured(1).len(), 4);
    assert_eq!(engine.tricks_won(), &[0, 1, 0, 0]);
}

#[test]
fn lowest_trump_beats_lead_ace() {
    let mut h = hands([&["AC", "9H"], &["9S", "TH"], &["TC", "KH"], &["KC", "QH"]]);
    let mut engine = TrickEngine::new(4, Suit::Spades, 0).unwrap();
    play_all(
        &mut engine,
        &mut h,
        &[(0, "AC"), (1, "9S"), (2, "TC"), (3, "KC")],
    );
    assert_eq!(engine.to_act(), 1);
}

#[test]
fn first_of_identical_cards_keeps_trick() {
    let mut h = hands([&["KC"], &["AC"], &["AC"], &["9C"]]);
    let mut engine = TrickEngine::new(4, Suit::Hearts, 0).unwrap();
    play_all(
        &mut engine,
        &mut h,
        &[(0, "KC"), (1, "AC"), (2, "AC"), (3, "9C")],
    );
    assert!(matches!(
        engine.state(),
        TrickState::Resolved { winner: 1, .. }
    ));
}

#[test]
fn must_follow_suit_leaves_state_unchanged() {
    let mut h = hands([&["AC", "9H"], &["TC", "AH"], &["9C"], &["KC"]]);
    let mut engine = TrickEngine::new(4, Suit::Spades, 0).unwrap();
    engine.play_card(&mut h, 0, card("AC")).unwrap();

    let before_hand = h[1].clone();
    let err = engine.play_card(&mut h, 1, card("AH")).unwrap_err();
    assert!(matches!(
        err,
        DomainError::IllegalPlay(PlayViolation::MustFollowSuit, _)
    ));
    assert_eq!(h[1], before_hand);
    assert_eq!(engine.current_plays().len(), 1);
    assert_eq!(engine.to_act(), 1);
}

#[test]
fn void_in_lead_must_trump() {
    let mut h = hands([&["AC"], &["9S", "AH"], &["9C"], &["KC"]]);
    let mut engine = TrickEngine::new(4, Suit::Spades, 0).unwrap();
    engine.play_card(&mut h, 0, card("AC")).unwrap();

    assert_eq!(engine.legal_moves(&h[1]), vec![card("9S")]);
    let err = engine.play_card(&mut h, 1, card("AH")).unwrap_err();
    assert!(matches!(
        err,
        DomainError::IllegalPlay(PlayViolation::MustPlayTrump, _)
    ));
    engine.play_card(&mut h, 1, card("9S")).unwrap();
}

#[test]
fn void_in_lead_and_trump_plays_anything() {
    let mut h = hands([&["AC"], &["9D", "AH"], &["9C"], &["KC"]]);
    let mut engine = TrickEngine::new(4, Suit::Spades, 0).unwrap();
    engine.play_card(&mut h, 0, card("AC")).unwrap();
    assert_eq!(engine.legal_moves(&h[1]).len(), 2);
    engine.play_card(&mut h, 1, card("AH")).unwrap();
}

#[test]
fn out_of_turn_and_missing_cards_rejected() {
    let mut h = hands([&["AC"], &["TC"], &["9C"], &["KC"]]);
    let mut engine = TrickEngine::new(4, Suit::Spades, 2).unwrap();
    let err = engine.play_card(&mut h, 0, card("AC")).unwrap_err();
    assert!(matches!(
        err,
        DomainError::IllegalPlay(PlayViolation::OutOfTurn, _)
    ));
    let err = engine.play_card(&mut h, 2, card("AC")).unwrap_err();
    assert!(matches!(
        err,
        DomainError::IllegalPlay(PlayViolation::CardNotInHand, _)
    ));
    assert!(matches!(
        engine.state(),
        TrickState::AwaitingLead { leader: 2 }
    ));
}

#[test]
fn winner_leads_next_trick_until_hands_empty() {
    let mut h = hands([
        &["AC", "9D"],
        &["TC", "AD"],
        &["9C", "KD"],
        &["KC", "QD"],
    ]);
    let mut engine = TrickEngine::new(4, Suit::Hearts, 0).unwrap();
    play_all(
        &mut engine,
        &mut h,
        &[(0, "AC"), (1, "TC"), (2, "9C"), (3, "KC")],
    );
    assert_eq!(engine.to_act(), 0);
    assert_eq!(engine.trick_no(), 1);

    let r = engine.play_card(&mut h, 0, card("9D")).unwrap();
    assert_eq!(r.trick_no, 2);
    assert!(!r.trick_completed);
    engine.play_card(&mut h, 1, card("AD")).unwrap();
    engine.play_card(&mut h, 2, card("KD")).unwrap();
    let r = engine.play_card(&mut h, 3, card("QD")).unwrap();
    assert!(r.trick_completed);
    assert_eq!(r.trick_winner, Some(1));
    assert!(r.round_over);

    let total: usize = engine.captured_by_seat().iter().map(Vec::len).sum();
    assert_eq!(total, 8);

    let err = engine.play_card(&mut h, 1, card("AD")).unwrap_err();
    assert!(matches!(
        err,
        DomainError::IllegalPlay(PlayViolation::PhaseMismatch, _)
    ));
}

#[test]
fn resolve_trick_on_empty_is_none() {
    assert_eq!(resolve_trick(&[], Suit::Clubs), None);
    let plays = vec![(2, card("9H")), (3, card("TH"))];
    assert_eq!(resolve_trick(&plays, Suit::Clubs), Some(3));
}

#[test]
fn leader_must_be_seated() {
    assert!(matches!(
        TrickEngine::new(4, Suit::Clubs, 4),
        Err(DomainError::IndexOutOfRange(_))
    ));
    assert!(matches!(
        TrickEngine::new(0, Suit::Clubs, 0),
        Err(DomainError::InvalidConfiguration(_))
    ));
}

#[test]
fn turn_follows_leader_around_the_table() {
    let mut h = hands([&["AC"], &["TC"], &["9C"], &["KC"]]);
    let mut engine = TrickEngine::new(4, Suit::Spades, 3).unwrap();
    assert_eq!(engine.to_act(), 3);
    engine.play_card(&mut h, 3, card("KC")).unwrap();
    match engine.state() {
        TrickState::Collecting { leader, plays } => {
            assert_eq!(*leader, 3);
            assert_eq!(plays.len(), 1);
        }
        other => panic!("expected collecting trick, got {other:?}"),
    }
    assert_eq!(engine.to_act(), 0);
    engine.play_card(&mut h, 0, card("AC")).unwrap();
    assert_eq!(engine.to_act(), 1);
}
