//! Table flow: drives one table through rounds of deal, auction, trump,
//! trick play and scoring on top of the pure domain types.
//!
//! Commands validate the phase and seat first and leave the table untouched
//! when they fail. The one exception is an all-pass auction, which voids the
//! deal and returns the table to `Init` for a redeal by the same dealer.

mod player_actions;
mod round_lifecycle;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::config::TableConfig;
use crate::domain::bidding::{Auction, Contract};
use crate::domain::deck::DeckPool;
use crate::domain::hand::Hand;
use crate::domain::scoring::{MeldEvaluator, NoMeld, RoundScore, Sides};
use crate::domain::state::{dealer_for_round, Player, PlayerId};
use crate::domain::tricks::TrickEngine;
use crate::domain::Card;
use crate::errors::domain::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TablePhase {
    /// Seated, nothing dealt.
    Init,
    Bidding,
    /// Auction won; waiting on the winner to name trump.
    TrumpSelect,
    Trick,
    RoundComplete,
    GameOver,
}

/// One pinochle table. Generic over the random source so tests can seed it.
pub struct Table<R: Rng> {
    config: TableConfig,
    players: Vec<Player>,
    hands: Vec<Hand>,
    sides: Sides,
    pool: DeckPool,
    rng: R,
    meld: Box<dyn MeldEvaluator>,
    phase: TablePhase,
    /// 1-based; 0 until the first deal. A redeal keeps the number.
    round_no: u32,
    starting_dealer: PlayerId,
    auction: Auction,
    tricks: Option<TrickEngine>,
    meld_by_side: Vec<u32>,
    scores: Vec<i64>,
    last_round: Option<RoundScore>,
}

impl<R: Rng> Table<R> {
    pub fn new<I, S>(config: TableConfig, names: I, rng: R) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        config.validate()?;
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.len() != config.players {
            return Err(DomainError::config(format!(
                "{} names for {} players",
                names.len(),
                config.players
            )));
        }
        if let Some(idx) = names.iter().position(|n| n.trim().is_empty()) {
            return Err(DomainError::config(format!("player {idx} has an empty name")));
        }

        let players = names
            .into_iter()
            .enumerate()
            .map(|(id, name)| Player::new(id as PlayerId, name))
            .collect();
        let sides = config.sides();
        Ok(Self {
            pool: DeckPool::new(config.pack_count)?,
            hands: vec![Hand::new(); config.players],
            auction: Auction::new(config.players, config.minimum_bid),
            meld_by_side: vec![0; sides.count()],
            scores: vec![0; sides.count()],
            sides,
            players,
            rng,
            meld: Box::new(NoMeld),
            phase: TablePhase::Init,
            round_no: 0,
            starting_dealer: 0,
            tricks: None,
            last_round: None,
            config,
        })
    }

    /// Replace the meld source; tables default to [`NoMeld`].
    pub fn with_meld(mut self, evaluator: impl MeldEvaluator + 'static) -> Self {
        self.meld = Box::new(evaluator);
        self
    }

    /// Seat that deals the first round. Only meaningful before the first deal.
    pub fn with_starting_dealer(mut self, seat: PlayerId) -> Result<Self, DomainError> {
        if seat as usize >= self.config.players {
            return Err(DomainError::out_of_range(format!(
                "dealer seat {seat} of {}",
                self.config.players
            )));
        }
        self.starting_dealer = seat;
        Ok(self)
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn phase(&self) -> TablePhase {
        self.phase
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn sides(&self) -> &Sides {
        &self.sides
    }

    pub fn round_no(&self) -> u32 {
        self.round_no
    }

    /// Dealer of the current (or upcoming first) round.
    pub fn dealer(&self) -> PlayerId {
        dealer_for_round(
            self.starting_dealer,
            self.round_no.max(1),
            self.config.players,
        )
    }

    pub fn hand(&self, who: PlayerId) -> Option<&Hand> {
        self.hands.get(who as usize)
    }

    /// Cards left in the pool after the deal.
    pub fn pool_len(&self) -> usize {
        self.pool.len()
    }

    pub fn auction(&self) -> &Auction {
        &self.auction
    }

    pub fn contract(&self) -> Option<Contract> {
        self.auction.contract()
    }

    /// Plays in the trick being collected; empty between tricks.
    pub fn current_trick(&self) -> &[(PlayerId, Card)] {
        self.tricks
            .as_ref()
            .map(TrickEngine::current_plays)
            .unwrap_or(&[])
    }

    pub fn trick_engine(&self) -> Option<&TrickEngine> {
        self.tricks.as_ref()
    }

    /// Seat expected to act next, if the phase has one.
    pub fn turn(&self) -> Option<PlayerId> {
        match self.phase {
            TablePhase::Bidding => self.auction.current_bidder(),
            TablePhase::TrumpSelect => self.auction.high_bid().map(|(who, _)| who),
            TablePhase::Trick => self.tricks.as_ref().map(TrickEngine::to_act),
            _ => None,
        }
    }

    /// Cards `who` could legally play into the current trick.
    pub fn legal_moves(&self, who: PlayerId) -> Result<Vec<Card>, DomainError> {
        let engine = self.require_tricks("legal moves")?;
        let hand = self.require_hand(who)?;
        Ok(engine.legal_moves(hand))
    }

    /// Running score per side.
    pub fn scores(&self) -> &[i64] {
        &self.scores
    }

    /// Meld credited per side for the round in play.
    pub fn meld_by_side(&self) -> &[u32] {
        &self.meld_by_side
    }

    pub fn last_round_score(&self) -> Option<&RoundScore> {
        self.last_round.as_ref()
    }

    fn require_phase(&self, expected: TablePhase, action: &str) -> Result<(), DomainError> {
        if self.phase != expected {
            return Err(DomainError::phase(format!(
                "{action} needs phase {expected:?}, table is in {:?}",
                self.phase
            )));
        }
        Ok(())
    }

    fn require_tricks(&self, action: &str) -> Result<&TrickEngine, DomainError> {
        self.require_phase(TablePhase::Trick, action)?;
        self.tricks
            .as_ref()
            .ok_or_else(|| DomainError::phase(format!("{action}: no trick in play")))
    }

    fn require_hand(&self, who: PlayerId) -> Result<&Hand, DomainError> {
        self.hands.get(who as usize).ok_or_else(|| {
            DomainError::out_of_range(format!("seat {who} of {}", self.config.players))
        })
    }
}

impl Table<ChaCha8Rng> {
    /// Table with a reproducible deal sequence.
    pub fn with_seed<I, S>(config: TableConfig, names: I, seed: u64) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(config, names, ChaCha8Rng::seed_from_u64(seed))
    }

    /// Table seeded from operating-system entropy.
    pub fn from_os_rng<I, S>(config: TableConfig, names: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let rng = ChaCha8Rng::try_from_os_rng()
            .map_err(|e| DomainError::config(format!("no OS entropy: {e}")))?;
        Self::new(config, names, rng)
    }
}
