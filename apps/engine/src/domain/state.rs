/// Seat index, assigned in seating order from 0.
pub type PlayerId = u8;

/// A seated player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Exactly one player per round holds the deal.
    pub dealer: bool,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            dealer: false,
        }
    }
}

/// Seat / turn math for a table of `seats` players.
///
/// Clockwise direction is positive (+1).
#[inline]
pub fn seat_offset(seat: PlayerId, delta: i16, seats: usize) -> PlayerId {
    let seat_i = seat as i16;
    (seat_i + delta).rem_euclid(seats as i16) as PlayerId
}

/// Returns the next player clockwise.
#[inline]
pub fn next_player(p: PlayerId, seats: usize) -> PlayerId {
    seat_offset(p, 1, seats)
}

/// Round-start seat (player to the left of the dealer).
#[inline]
pub fn round_start_seat(dealer: PlayerId, seats: usize) -> PlayerId {
    next_player(dealer, seats)
}

/// Dealer position for a 1-based round number.
///
/// Round 1 → starting_dealer
/// Round 2 → starting_dealer + 1 (mod seats)
#[inline]
pub fn dealer_for_round(starting_dealer: PlayerId, round_no: u32, seats: usize) -> PlayerId {
    debug_assert!(round_no >= 1, "round_no is 1-based and must be >= 1");
    let steps = (round_no.saturating_sub(1) as usize % seats) as i16;
    seat_offset(starting_dealer, steps, seats)
}
