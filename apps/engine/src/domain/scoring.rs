//! Round scoring: counters captured plus meld, measured against the contract.

use serde::{Deserialize, Serialize};

use super::bidding::Contract;
use super::cards_types::{Card, Suit};
use super::hand::Hand;
use super::state::PlayerId;
use crate::errors::domain::DomainError;

pub type SideId = u8;

/// What a bidding side that falls short of its contract scores.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SetPenalty {
    /// The side scores nothing for the round.
    #[default]
    Zero,
    /// The side loses the amount it bid.
    MinusBid,
}

/// Source of meld points, computed before trick play.
///
/// Meld evaluation lives outside the engine; the table only asks for a number
/// per player once trump is known.
pub trait MeldEvaluator {
    fn meld(&self, hand: &Hand, trump: Suit) -> u32;
}

/// Evaluator for tables that play without meld.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoMeld;

impl MeldEvaluator for NoMeld {
    fn meld(&self, _hand: &Hand, _trump: Suit) -> u32 {
        0
    }
}

/// Which side each seat scores for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sides {
    seat_to_side: Vec<SideId>,
    count: usize,
}

impl Sides {
    /// Two partnerships with alternating seats (0 & 2 against 1 & 3 at four).
    pub fn partnerships(seats: usize) -> Self {
        Self {
            seat_to_side: (0..seats).map(|s| (s % 2) as SideId).collect(),
            count: seats.min(2),
        }
    }

    /// Every seat plays for itself.
    pub fn individual(seats: usize) -> Self {
        Self {
            seat_to_side: (0..seats).map(|s| s as SideId).collect(),
            count: seats,
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn side_of(&self, seat: PlayerId) -> Option<SideId> {
        self.seat_to_side.get(seat as usize).copied()
    }

    pub fn members(&self, side: SideId) -> Vec<PlayerId> {
        self.seat_to_side
            .iter()
            .enumerate()
            .filter(|&(_, &s)| s == side)
            .map(|(seat, _)| seat as PlayerId)
            .collect()
    }

    /// Pool per-seat values into per-side sums.
    pub fn sum_by_side(&self, by_seat: &[u32]) -> Vec<u32> {
        let mut out = vec![0u32; self.count];
        for (seat, &v) in by_seat.iter().enumerate() {
            if let Some(&side) = self.seat_to_side.get(seat) {
                let sum = &mut out[side as usize];
                *sum = sum.saturating_add(v);
            }
        }
        out
    }

    /// Pool per-seat captured piles into per-side piles.
    pub fn group_captured(&self, by_seat: &[Vec<Card>]) -> Vec<Vec<Card>> {
        let mut out = vec![Vec::new(); self.count];
        for (seat, cards) in by_seat.iter().enumerate() {
            if let Some(&side) = self.seat_to_side.get(seat) {
                out[side as usize].extend_from_slice(cards);
            }
        }
        out
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideScore {
    pub side: SideId,
    /// Point value of the cards this side captured.
    pub counters: u32,
    pub meld: u32,
    /// counters + meld, saturating
    pub total: u32,
    /// Amount added to the side's running score.
    pub awarded: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundScore {
    pub contract: Contract,
    pub bidding_side: SideId,
    /// Whether the bidding side reached its bid.
    pub made: bool,
    pub sides: Vec<SideScore>,
}

/// Sum of point values of `cards`.
pub fn counter_points(cards: &[Card]) -> u32 {
    cards.iter().map(|c| c.points()).sum()
}

/// Score one round.
///
/// Pure function of its inputs: the bidding side scores its total when it
/// meets `contract.bid` and is set otherwise (per `penalty`); every other
/// side scores its own total either way.
pub fn score(
    contract: &Contract,
    bidding_side: SideId,
    captured_by_side: &[Vec<Card>],
    meld_by_side: &[u32],
    penalty: SetPenalty,
) -> Result<RoundScore, DomainError> {
    if captured_by_side.len() != meld_by_side.len() {
        return Err(DomainError::out_of_range(format!(
            "{} captured piles but {} meld entries",
            captured_by_side.len(),
            meld_by_side.len()
        )));
    }
    if bidding_side as usize >= captured_by_side.len() {
        return Err(DomainError::out_of_range(format!(
            "bidding side {bidding_side} of {}",
            captured_by_side.len()
        )));
    }

    let mut made = true;
    let sides = captured_by_side
        .iter()
        .zip(meld_by_side)
        .enumerate()
        .map(|(idx, (cards, &meld))| {
            let side = idx as SideId;
            let counters = counter_points(cards);
            let total = counters.saturating_add(meld);
            let awarded = if side == bidding_side && total < contract.bid {
                made = false;
                match penalty {
                    SetPenalty::Zero => 0,
                    SetPenalty::MinusBid => -(contract.bid as i64),
                }
            } else {
                total as i64
            };
            SideScore {
                side,
                counters,
                meld,
                total,
                awarded,
            }
        })
        .collect();

    Ok(RoundScore {
        contract: *contract,
        bidding_side,
        made,
        sides,
    })
}
