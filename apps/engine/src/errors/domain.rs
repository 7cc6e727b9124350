//! Engine-level error type.
//!
//! Every failing operation returns a `DomainError` synchronously and leaves
//! engine state exactly as it was before the call. Player-facing variants
//! (`IllegalPlay`, `IllegalBid`) carry a kind so a driving shell can decide
//! how to re-prompt without parsing the detail string.

use thiserror::Error;

/// Why a card play was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum PlayViolation {
    OutOfTurn,
    CardNotInHand,
    MustFollowSuit,
    MustPlayTrump,
    PhaseMismatch,
}

/// Why a bid, pass or trump declaration was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum BidViolation {
    OutOfTurn,
    /// Raise does not strictly exceed the current high bid.
    TooLow,
    BelowMinimum,
    AlreadyPassed,
    AuctionClosed,
    /// Only the auction winner may name trump.
    NotDeclarer,
}

/// Central engine error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Table setup rejected; fatal to table creation.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("pool is empty")]
    EmptyPool,
    #[error("insufficient cards: need {needed}, pool holds {available}")]
    InsufficientCards { needed: usize, available: usize },
    /// Programmer error: a positional draw referenced a missing slot.
    #[error("index out of range: {0}")]
    IndexOutOfRange(String),
    #[error("illegal play {0:?}: {1}")]
    IllegalPlay(PlayViolation, String),
    #[error("illegal bid {0:?}: {1}")]
    IllegalBid(BidViolation, String),
    /// Every player passed before any bid; the round must be redealt.
    #[error("no bidders: every player passed")]
    NoBidders,
    #[error("parse card: {0}")]
    ParseCard(String),
    #[error("phase mismatch: {0}")]
    PhaseMismatch(String),
}

impl DomainError {
    pub fn config(detail: impl Into<String>) -> Self {
        Self::InvalidConfiguration(detail.into())
    }
    pub fn out_of_range(detail: impl Into<String>) -> Self {
        Self::IndexOutOfRange(detail.into())
    }
    pub fn illegal_play(kind: PlayViolation, detail: impl Into<String>) -> Self {
        Self::IllegalPlay(kind, detail.into())
    }
    pub fn illegal_bid(kind: BidViolation, detail: impl Into<String>) -> Self {
        Self::IllegalBid(kind, detail.into())
    }
    pub fn phase(detail: impl Into<String>) -> Self {
        Self::PhaseMismatch(detail.into())
    }

    /// Player-facing errors the caller should answer with a re-prompt.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            DomainError::IllegalPlay(..)
                | DomainError::IllegalBid(..)
                | DomainError::EmptyPool
                | DomainError::InsufficientCards { .. }
                | DomainError::NoBidders
        )
    }
}
