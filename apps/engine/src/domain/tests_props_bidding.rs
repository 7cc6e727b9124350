use proptest::prelude::*;

use crate::domain::bidding::{Auction, AuctionState, BidAction};
use crate::domain::{test_prelude, PlayerId};
use crate::errors::domain::DomainError;

/// One move offered to the auction.
#[derive(Debug, Clone)]
enum Step {
    /// Seat to act raises the floor by this much.
    Raise(u32),
    Pass,
    /// Some other seat tries to bid out of turn.
    StrayBid(usize, u32),
    /// Some other seat tries to pass out of turn.
    StrayPass(usize),
    /// Seat to act bids one under the floor.
    LowBid,
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        3 => (0u32..=20).prop_map(Step::Raise),
        4 => Just(Step::Pass),
        1 => (any::<usize>(), 0u32..=300).prop_map(|(o, v)| Step::StrayBid(o, v)),
        1 => any::<usize>().prop_map(Step::StrayPass),
        1 => Just(Step::LowBid),
    ]
}

fn other_seat(current: PlayerId, offset: usize, seats: usize) -> PlayerId {
    ((current as usize + 1 + offset % (seats - 1)) % seats) as PlayerId
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: random auctions respect turn order, never hear from a
    /// passed seat, and end with the last raiser or with nobody bidding.
    #[test]
    fn prop_auction_invariants(
        seats in 2usize..=8,
        opener_seed in any::<usize>(),
        steps in prop::collection::vec(step(), 0..60),
    ) {
        let opener = (opener_seed % seats) as PlayerId;
        let mut a = Auction::new(seats, 50);
        a.open(opener).unwrap();
        let mut passed = vec![false; seats];
        let mut no_bidders = false;
        let mut steps = steps.into_iter();

        while let Some(current) = a.current_bidder() {
            prop_assert!(!passed[current as usize], "passed seat {} asked to act", current);
            for seat in 0..seats {
                prop_assert_eq!(a.is_active(seat as PlayerId), !passed[seat]);
            }

            let before = (a.state(), a.history().len());
            let rejected = match steps.next().unwrap_or(Step::Pass) {
                Step::Raise(extra) => {
                    let floor = a.legal_bid_floor().unwrap();
                    prop_assert!(a.place_bid(current, floor + extra).is_ok());
                    None
                }
                Step::Pass => {
                    match a.pass(current) {
                        Ok(_) => passed[current as usize] = true,
                        Err(DomainError::NoBidders) => {
                            no_bidders = true;
                            break;
                        }
                        Err(e) => prop_assert!(false, "legal pass rejected: {}", e),
                    }
                    None
                }
                Step::StrayBid(offset, value) => {
                    Some(a.place_bid(other_seat(current, offset, seats), value))
                }
                Step::StrayPass(offset) => Some(a.pass(other_seat(current, offset, seats))),
                Step::LowBid => {
                    let floor = a.legal_bid_floor().unwrap();
                    Some(a.place_bid(current, floor - 1))
                }
            };
            if let Some(result) = rejected {
                prop_assert!(result.is_err());
                prop_assert_eq!((a.state(), a.history().len()), before);
            }
        }

        let last_bid = a.history().iter().rev().find_map(|&(who, action)| match action {
            BidAction::Bid(value) => Some((who, value)),
            BidAction::Pass => None,
        });
        if no_bidders {
            prop_assert_eq!(last_bid, None);
            prop_assert_eq!(a.state(), AuctionState::NotStarted);
        } else {
            let (bidder, bid) = last_bid.unwrap();
            prop_assert_eq!(a.state(), AuctionState::AwaitingTrump { bidder, bid });
        }
    }
}
