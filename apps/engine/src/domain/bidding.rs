//! Turn-ordered auction that ends in a `Contract`.
//!
//! Each active seat in turn either raises (strictly above the high bid and at
//! least the table minimum) or passes, which removes it from the rest of the
//! auction. The auction closes once a single active seat remains holding the
//! high bid; that seat then names trump. If every seat passes before anyone
//! bids the round is void and `NoBidders` is returned.

use serde::{Deserialize, Serialize};

use super::cards_types::Suit;
use super::state::{next_player, PlayerId};
use crate::errors::domain::{BidViolation, DomainError};

/// Winning bidder, trump suit and the points they committed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contract {
    pub bidder: PlayerId,
    pub trump: Suit,
    pub bid: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BidAction {
    Bid(u32),
    Pass,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuctionState {
    NotStarted,
    InProgress {
        current_bidder: PlayerId,
        high_bid: Option<u32>,
        high_bidder: Option<PlayerId>,
    },
    /// Auction won; the winner still has to name trump.
    AwaitingTrump { bidder: PlayerId, bid: u32 },
    Closed(Contract),
}

#[derive(Debug, Clone)]
pub struct Auction {
    seats: usize,
    minimum_bid: u32,
    state: AuctionState,
    active: Vec<bool>,
    history: Vec<(PlayerId, BidAction)>,
}

impl Auction {
    pub fn new(seats: usize, minimum_bid: u32) -> Self {
        Self {
            seats,
            minimum_bid,
            state: AuctionState::NotStarted,
            active: vec![true; seats],
            history: Vec::new(),
        }
    }

    /// Start bidding with `opener` (normally the seat left of the dealer).
    pub fn open(&mut self, opener: PlayerId) -> Result<(), DomainError> {
        if self.state != AuctionState::NotStarted {
            return Err(DomainError::illegal_bid(
                BidViolation::AuctionClosed,
                "auction already opened",
            ));
        }
        if opener as usize >= self.seats {
            return Err(DomainError::out_of_range(format!(
                "opener seat {opener} of {}",
                self.seats
            )));
        }
        self.active = vec![true; self.seats];
        self.history.clear();
        self.state = AuctionState::InProgress {
            current_bidder: opener,
            high_bid: None,
            high_bidder: None,
        };
        Ok(())
    }

    pub fn state(&self) -> AuctionState {
        self.state
    }

    pub fn minimum_bid(&self) -> u32 {
        self.minimum_bid
    }

    pub fn history(&self) -> &[(PlayerId, BidAction)] {
        &self.history
    }

    pub fn is_active(&self, who: PlayerId) -> bool {
        self.active.get(who as usize).copied().unwrap_or(false)
    }

    /// Seat expected to bid or pass next, while the auction is open.
    pub fn current_bidder(&self) -> Option<PlayerId> {
        match self.state {
            AuctionState::InProgress { current_bidder, .. } => Some(current_bidder),
            _ => None,
        }
    }

    /// `(seat, value)` of the standing high bid, if any.
    pub fn high_bid(&self) -> Option<(PlayerId, u32)> {
        match self.state {
            AuctionState::InProgress {
                high_bid: Some(bid),
                high_bidder: Some(who),
                ..
            } => Some((who, bid)),
            AuctionState::AwaitingTrump { bidder, bid } => Some((bidder, bid)),
            AuctionState::Closed(c) => Some((c.bidder, c.bid)),
            _ => None,
        }
    }

    /// Smallest value `place_bid` would accept right now.
    pub fn legal_bid_floor(&self) -> Option<u32> {
        match self.state {
            AuctionState::InProgress { high_bid, .. } => Some(match high_bid {
                Some(high) => high.saturating_add(1).max(self.minimum_bid),
                None => self.minimum_bid,
            }),
            _ => None,
        }
    }

    pub fn contract(&self) -> Option<Contract> {
        match self.state {
            AuctionState::Closed(c) => Some(c),
            _ => None,
        }
    }

    pub fn place_bid(&mut self, who: PlayerId, value: u32) -> Result<AuctionState, DomainError> {
        let (high_bid, _) = self.require_turn(who)?;
        if value < self.minimum_bid {
            return Err(DomainError::illegal_bid(
                BidViolation::BelowMinimum,
                format!("bid {value} is below the minimum {}", self.minimum_bid),
            ));
        }
        if let Some(high) = high_bid {
            if value <= high {
                return Err(DomainError::illegal_bid(
                    BidViolation::TooLow,
                    format!("bid {value} must exceed {high}"),
                ));
            }
        }

        self.history.push((who, BidAction::Bid(value)));
        self.advance(who, Some(value), Some(who));
        Ok(self.state)
    }

    /// Pass and leave the auction.
    ///
    /// Returns `NoBidders` when this was the last seat and nobody ever bid;
    /// the auction resets to `NotStarted` so the table can redeal.
    pub fn pass(&mut self, who: PlayerId) -> Result<AuctionState, DomainError> {
        let (high_bid, high_bidder) = self.require_turn(who)?;
        self.active[who as usize] = false;
        self.history.push((who, BidAction::Pass));

        if self.active_count() == 0 {
            self.state = AuctionState::NotStarted;
            self.active = vec![true; self.seats];
            return Err(DomainError::NoBidders);
        }
        self.advance(who, high_bid, high_bidder);
        Ok(self.state)
    }

    /// Winning bidder names trump, closing the auction into a contract.
    pub fn name_trump(&mut self, who: PlayerId, trump: Suit) -> Result<Contract, DomainError> {
        let AuctionState::AwaitingTrump { bidder, bid } = self.state else {
            return Err(DomainError::illegal_bid(
                BidViolation::AuctionClosed,
                "no auction is waiting on trump",
            ));
        };
        if who != bidder {
            return Err(DomainError::illegal_bid(
                BidViolation::NotDeclarer,
                format!("seat {bidder} won the auction, not seat {who}"),
            ));
        }
        let contract = Contract { bidder, trump, bid };
        self.state = AuctionState::Closed(contract);
        Ok(contract)
    }

    fn active_count(&self) -> usize {
        self.active.iter().filter(|&&a| a).count()
    }

    fn require_turn(&self, who: PlayerId) -> Result<(Option<u32>, Option<PlayerId>), DomainError> {
        let AuctionState::InProgress {
            current_bidder,
            high_bid,
            high_bidder,
        } = self.state
        else {
            return Err(DomainError::illegal_bid(
                BidViolation::AuctionClosed,
                "auction is not open",
            ));
        };
        if (who as usize) < self.seats && !self.is_active(who) {
            return Err(DomainError::illegal_bid(
                BidViolation::AlreadyPassed,
                format!("seat {who} has passed"),
            ));
        }
        if who != current_bidder {
            return Err(DomainError::illegal_bid(
                BidViolation::OutOfTurn,
                format!("seat {current_bidder} is bidding, not seat {who}"),
            ));
        }
        Ok((high_bid, high_bidder))
    }

    fn advance(&mut self, from: PlayerId, high_bid: Option<u32>, high_bidder: Option<PlayerId>) {
        if self.active_count() == 1 {
            if let (Some(bid), Some(bidder)) = (high_bid, high_bidder) {
                if self.is_active(bidder) {
                    self.state = AuctionState::AwaitingTrump { bidder, bid };
                    return;
                }
            }
        }
        let mut next = next_player(from, self.seats);
        while !self.is_active(next) {
            next = next_player(next, self.seats);
        }
        self.state = AuctionState::InProgress {
            current_bidder: next,
            high_bid,
            high_bidder,
        };
    }
}
