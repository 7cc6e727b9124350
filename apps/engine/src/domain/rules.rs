//! Fixed pinochle constants and table-size limits.

use std::ops::RangeInclusive;

/// Distinct cards in one deck: six ranks in each of four suits.
pub const CARDS_PER_DECK: usize = 24;

/// Seats a table may have.
pub const PLAYER_RANGE: RangeInclusive<usize> = 2..=8;

/// Counter points in one deck (each suit holds 11 + 10 + 4 + 3 + 2 + 0).
pub const POINTS_PER_DECK: u32 = 120;

/// Total counter points available in a pool of `pack_count` decks.
pub fn total_points(pack_count: usize) -> u32 {
    POINTS_PER_DECK * pack_count as u32
}

/// Largest hand that a table of `players` can be dealt from `pack_count` decks.
pub fn max_hand_size(players: usize, pack_count: usize) -> usize {
    if players == 0 {
        return 0;
    }
    (CARDS_PER_DECK * pack_count) / players
}
