use rand::Rng;
use tracing::{debug, info};

use super::{Table, TablePhase};
use crate::domain::bidding::{AuctionState, Contract};
use crate::domain::tricks::{PlayCardResult, TrickEngine};
use crate::domain::{Card, PlayerId, Suit};
use crate::errors::domain::DomainError;

impl<R: Rng> Table<R> {
    /// Raise the auction to `value` for seat `who`.
    pub fn place_bid(&mut self, who: PlayerId, value: u32) -> Result<AuctionState, DomainError> {
        self.require_phase(TablePhase::Bidding, "bid")?;
        let state = self.auction.place_bid(who, value)?;
        debug!(round = self.round_no, who, value, "Bid placed");
        self.after_auction_step(state);
        Ok(state)
    }

    /// Pass for seat `who`, leaving the auction for the rest of the round.
    ///
    /// When this was the last seat and nobody bid, returns `NoBidders` and
    /// the table goes back to `Init` for a redeal.
    pub fn pass_bid(&mut self, who: PlayerId) -> Result<AuctionState, DomainError> {
        self.require_phase(TablePhase::Bidding, "pass")?;
        match self.auction.pass(who) {
            Ok(state) => {
                debug!(round = self.round_no, who, "Passed");
                self.after_auction_step(state);
                Ok(state)
            }
            Err(DomainError::NoBidders) => {
                self.void_deal();
                Err(DomainError::NoBidders)
            }
            Err(e) => Err(e),
        }
    }

    /// Auction winner names trump; meld is credited and trick play begins
    /// with the contract holder on lead.
    pub fn name_trump(&mut self, who: PlayerId, trump: Suit) -> Result<Contract, DomainError> {
        self.require_phase(TablePhase::TrumpSelect, "name trump")?;
        let contract = self.auction.name_trump(who, trump)?;
        let engine = TrickEngine::new(self.config.players, trump, contract.bidder)?;

        let meld_by_seat: Vec<u32> = self
            .hands
            .iter()
            .map(|h| self.meld.meld(h, trump))
            .collect();
        self.meld_by_side = self.sides.sum_by_side(&meld_by_seat);
        self.tricks = Some(engine);
        self.phase = TablePhase::Trick;

        info!(
            round = self.round_no,
            bidder = contract.bidder,
            bid = contract.bid,
            %trump,
            meld = ?self.meld_by_side,
            "Trump named"
        );
        debug!(round = self.round_no, "Transition: -> Trick");
        Ok(contract)
    }

    /// Play `card` from seat `who`. The round is scored after the last trick.
    pub fn play_card(&mut self, who: PlayerId, card: Card) -> Result<PlayCardResult, DomainError> {
        self.require_phase(TablePhase::Trick, "play")?;
        let engine = self
            .tricks
            .as_mut()
            .ok_or_else(|| DomainError::phase("play: no trick in play"))?;
        let result = engine.play_card(&mut self.hands, who, card)?;

        debug!(
            round = self.round_no,
            trick_no = result.trick_no,
            who,
            %card,
            "Card played"
        );
        if let Some(winner) = result.trick_winner {
            debug!(round = self.round_no, trick_no = result.trick_no, winner, "Trick resolved");
        }
        if result.round_over {
            self.finish_round()?;
        }
        Ok(result)
    }

    fn after_auction_step(&mut self, state: AuctionState) {
        if let AuctionState::AwaitingTrump { bidder, bid } = state {
            self.phase = TablePhase::TrumpSelect;
            info!(round = self.round_no, bidder, bid, "Auction won");
            debug!(round = self.round_no, "Transition: -> TrumpSelect");
        }
    }
}
