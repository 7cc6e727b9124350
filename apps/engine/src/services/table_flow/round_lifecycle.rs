use rand::Rng;
use tracing::{debug, info};

use super::{Table, TablePhase};
use crate::domain::bidding::Auction;
use crate::domain::dealing::deal;
use crate::domain::deck::DeckPool;
use crate::domain::hand::Hand;
use crate::domain::scoring::score;
use crate::domain::state::{dealer_for_round, round_start_seat};
use crate::errors::domain::DomainError;

impl<R: Rng> Table<R> {
    /// Deal a new round and open the auction.
    ///
    /// Allowed from `Init` (first round or a redeal) and `RoundComplete`.
    /// The dealer moves one seat clockwise per completed round; a redeal after
    /// an all-pass auction keeps the same dealer.
    pub fn start_round(&mut self) -> Result<(), DomainError> {
        if !matches!(self.phase, TablePhase::Init | TablePhase::RoundComplete) {
            return Err(DomainError::phase(format!(
                "cannot deal while in {:?}",
                self.phase
            )));
        }

        let round_no = if self.phase == TablePhase::RoundComplete || self.round_no == 0 {
            self.round_no + 1
        } else {
            self.round_no
        };
        let seats = self.config.players;
        let dealer = dealer_for_round(self.starting_dealer, round_no, seats);
        let opener = round_start_seat(dealer, seats);

        // Deal into fresh state and commit only once everything succeeded
        let mut pool = DeckPool::new(self.config.pack_count)?;
        let mut hands = vec![Hand::new(); seats];
        deal(
            &mut pool,
            &mut hands,
            self.config.deal_plan(opener),
            &mut self.rng,
        )?;
        let mut auction = Auction::new(seats, self.config.minimum_bid);
        auction.open(opener)?;

        self.round_no = round_no;
        self.pool = pool;
        self.hands = hands;
        self.auction = auction;
        self.tricks = None;
        self.meld_by_side = vec![0; self.sides.count()];
        for p in &mut self.players {
            p.dealer = p.id == dealer;
        }
        self.phase = TablePhase::Bidding;

        info!(
            round = round_no,
            dealer,
            opener,
            remaining = self.pool.len(),
            "Round dealt"
        );
        debug!(round = round_no, "Transition: -> Bidding");
        Ok(())
    }

    /// Void the deal after every seat passed; the next `start_round` redeals.
    pub(super) fn void_deal(&mut self) {
        for h in &mut self.hands {
            h.clear();
        }
        // Thrown-in hands go back to a full pool
        self.pool.refill();
        self.auction = Auction::new(self.config.players, self.config.minimum_bid);
        self.phase = TablePhase::Init;
        info!(round = self.round_no, dealer = self.dealer(), "All passed, redeal");
    }

    /// Score the finished round and fold it into the running totals.
    pub(super) fn finish_round(&mut self) -> Result<(), DomainError> {
        let contract = self
            .auction
            .contract()
            .ok_or_else(|| DomainError::phase("round finished without a contract"))?;
        let engine = self
            .tricks
            .as_ref()
            .ok_or_else(|| DomainError::phase("round finished without trick play"))?;
        let bidding_side = self.sides.side_of(contract.bidder).ok_or_else(|| {
            DomainError::out_of_range(format!("bidder seat {}", contract.bidder))
        })?;
        let captured = self.sides.group_captured(engine.captured_by_seat());
        let round = score(
            &contract,
            bidding_side,
            &captured,
            &self.meld_by_side,
            self.config.set_penalty,
        )?;

        for side in &round.sides {
            let total = &mut self.scores[side.side as usize];
            *total = total.saturating_add(side.awarded);
        }
        let game_over = self
            .config
            .target_score
            .is_some_and(|target| self.scores.iter().any(|&s| s >= target));
        self.phase = if game_over {
            TablePhase::GameOver
        } else {
            TablePhase::RoundComplete
        };

        info!(
            round = self.round_no,
            bid = contract.bid,
            bidding_side,
            made = round.made,
            scores = ?self.scores,
            phase = ?self.phase,
            "Round scored"
        );
        self.last_round = Some(round);
        Ok(())
    }
}
