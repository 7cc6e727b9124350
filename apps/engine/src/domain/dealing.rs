//! Round-robin dealing from a `DeckPool`.

use rand::Rng;
use tracing::debug;

use super::cards_types::Card;
use super::deck::DeckPool;
use super::hand::Hand;
use crate::errors::domain::DomainError;

/// How a deal walks the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DealPlan {
    /// Seat receiving the first packet (left of the dealer at a table).
    pub first_seat: usize,
    /// Cards each hand holds once the deal completes.
    pub hand_size: usize,
    /// Packet size handed to each seat per pass; the final pass may be short.
    pub dealt_per_pass: usize,
}

impl DealPlan {
    fn validate(&self, seats: usize) -> Result<(), DomainError> {
        if seats == 0 {
            return Err(DomainError::config("cannot deal to zero hands"));
        }
        if self.hand_size == 0 {
            return Err(DomainError::config("hand size must be at least 1"));
        }
        if self.dealt_per_pass == 0 {
            return Err(DomainError::config("cards per pass must be at least 1"));
        }
        if self.first_seat >= seats {
            return Err(DomainError::out_of_range(format!(
                "first seat {} of {seats}",
                self.first_seat
            )));
        }
        Ok(())
    }

    /// Packet sizes in pass order, e.g. hand 12 by 3 gives `[3, 3, 3, 3]`.
    pub fn passes(&self) -> Vec<usize> {
        let mut out = Vec::new();
        if self.dealt_per_pass == 0 {
            return out;
        }
        let mut dealt = 0;
        while dealt < self.hand_size {
            let packet = self.dealt_per_pass.min(self.hand_size - dealt);
            out.push(packet);
            dealt += packet;
        }
        out
    }
}

/// Deal `plan.hand_size` cards into every hand, each card drawn uniformly at
/// random from the whole pool.
///
/// Fails with `InsufficientCards` before moving anything if the pool cannot
/// cover every hand.
pub fn deal<R: Rng + ?Sized>(
    pool: &mut DeckPool,
    hands: &mut [Hand],
    plan: DealPlan,
    rng: &mut R,
) -> Result<(), DomainError> {
    deal_with(pool, hands, plan, |pool| pool.draw_random(rng))
}

/// Shuffle the pool, then deal from the top of each deck in turn.
///
/// Same distribution guarantees as [`deal`], but cards leave the pool in deck
/// order through `draw_at`, the way a physical pack is dealt.
pub fn deal_from_top<R: Rng + ?Sized>(
    pool: &mut DeckPool,
    hands: &mut [Hand],
    plan: DealPlan,
    rng: &mut R,
) -> Result<(), DomainError> {
    plan.validate(hands.len())?;
    ensure_enough(pool, hands.len(), plan.hand_size)?;
    pool.shuffle(rng);
    deal_with(pool, hands, plan, |pool| {
        let deck_idx = pool
            .decks()
            .iter()
            .position(|d| !d.is_empty())
            .ok_or(DomainError::EmptyPool)?;
        pool.draw_at(deck_idx, 0)
    })
}

fn ensure_enough(pool: &DeckPool, seats: usize, hand_size: usize) -> Result<(), DomainError> {
    let available = pool.len();
    match seats.checked_mul(hand_size) {
        Some(needed) if needed <= available => Ok(()),
        needed => Err(DomainError::InsufficientCards {
            needed: needed.unwrap_or(usize::MAX),
            available,
        }),
    }
}

fn deal_with<F>(
    pool: &mut DeckPool,
    hands: &mut [Hand],
    plan: DealPlan,
    mut draw: F,
) -> Result<(), DomainError>
where
    F: FnMut(&mut DeckPool) -> Result<Card, DomainError>,
{
    plan.validate(hands.len())?;
    ensure_enough(pool, hands.len(), plan.hand_size)?;

    let seats = hands.len();
    for packet in plan.passes() {
        for offset in 0..seats {
            let seat = (plan.first_seat + offset) % seats;
            for _ in 0..packet {
                let card = draw(pool)?;
                hands[seat].add(card);
            }
        }
    }

    debug!(
        seats,
        hand_size = plan.hand_size,
        remaining = pool.len(),
        "Deal complete"
    );
    Ok(())
}
