use super::cards_logic::winning_index;
use super::cards_types::{Card, Suit};
use super::hand::{check_play, legal_moves, Hand};
use super::state::{seat_offset, PlayerId};
use crate::errors::domain::{DomainError, PlayViolation};

/// Where the trick in progress stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrickState {
    /// Nothing played yet; `leader` opens the trick.
    AwaitingLead { leader: PlayerId },
    /// Plays so far, in order from `leader`; the first card sets the lead
    /// suit. Never empty.
    Collecting {
        leader: PlayerId,
        plays: Vec<(PlayerId, Card)>,
    },
    /// Every seat has played. The winner leads the next trick.
    Resolved {
        winner: PlayerId,
        plays: Vec<(PlayerId, Card)>,
    },
}

/// Result of playing a card, describing what state changes occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayCardResult {
    /// Whether this play completed the trick.
    pub trick_completed: bool,
    /// Winner of the completed trick, if one was completed.
    pub trick_winner: Option<PlayerId>,
    /// 1-based number of the trick this card went into.
    pub trick_no: u32,
    /// Every hand is empty: the round's play is over.
    pub round_over: bool,
}

/// Runs the tricks of one round under a fixed trump suit.
#[derive(Debug, Clone)]
pub struct TrickEngine {
    seats: usize,
    trump: Suit,
    state: TrickState,
    trick_no: u32,
    captured: Vec<Vec<Card>>,
    tricks_won: Vec<u32>,
}

impl TrickEngine {
    pub fn new(seats: usize, trump: Suit, leader: PlayerId) -> Result<Self, DomainError> {
        if seats == 0 {
            return Err(DomainError::config("trick play needs at least one seat"));
        }
        if leader as usize >= seats {
            return Err(DomainError::out_of_range(format!(
                "leader seat {leader} of {seats}"
            )));
        }
        Ok(Self {
            seats,
            trump,
            state: TrickState::AwaitingLead { leader },
            trick_no: 1,
            captured: vec![Vec::new(); seats],
            tricks_won: vec![0; seats],
        })
    }

    pub fn state(&self) -> &TrickState {
        &self.state
    }

    pub fn trump(&self) -> Suit {
        self.trump
    }

    pub fn trick_no(&self) -> u32 {
        self.trick_no
    }

    /// Plays in the trick currently being collected; empty between tricks.
    pub fn current_plays(&self) -> &[(PlayerId, Card)] {
        match &self.state {
            TrickState::Collecting { plays, .. } => plays.as_slice(),
            _ => &[],
        }
    }

    pub fn lead_suit(&self) -> Option<Suit> {
        self.current_plays().first().map(|(_, c)| c.suit)
    }

    /// Seat expected to play next.
    pub fn to_act(&self) -> PlayerId {
        match &self.state {
            TrickState::AwaitingLead { leader } => *leader,
            TrickState::Collecting { leader, plays } => {
                seat_offset(*leader, plays.len() as i16, self.seats)
            }
            TrickState::Resolved { winner, .. } => *winner,
        }
    }

    pub fn captured(&self, who: PlayerId) -> &[Card] {
        self.captured
            .get(who as usize)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn captured_by_seat(&self) -> &[Vec<Card>] {
        &self.captured
    }

    pub fn tricks_won(&self) -> &[u32] {
        &self.tricks_won
    }

    /// Legal plays from `hand` against the trick in progress.
    pub fn legal_moves(&self, hand: &Hand) -> Vec<Card> {
        legal_moves(hand.cards(), self.lead_suit(), self.trump)
    }

    /// Play `card` from `who`'s hand, enforcing turn, follow-suit and trump.
    ///
    /// A rejected play leaves hands and trick untouched.
    pub fn play_card(
        &mut self,
        hands: &mut [Hand],
        who: PlayerId,
        card: Card,
    ) -> Result<PlayCardResult, DomainError> {
        if hands.len() != self.seats {
            return Err(DomainError::out_of_range(format!(
                "{} hands for {} seats",
                hands.len(),
                self.seats
            )));
        }
        if hands.iter().all(Hand::is_empty) {
            return Err(DomainError::illegal_play(
                PlayViolation::PhaseMismatch,
                "every hand is empty",
            ));
        }
        let expected = self.to_act();
        if who != expected {
            return Err(DomainError::illegal_play(
                PlayViolation::OutOfTurn,
                format!("seat {expected} plays next, not seat {who}"),
            ));
        }
        let hand = &mut hands[who as usize];
        check_play(hand.cards(), card, self.lead_suit(), self.trump)?;
        let played = hand.remove(card)?;

        let (leader, mut plays) = match std::mem::replace(
            &mut self.state,
            TrickState::AwaitingLead { leader: who },
        ) {
            TrickState::Collecting { leader, plays } => (leader, plays),
            TrickState::AwaitingLead { leader } => (leader, Vec::with_capacity(self.seats)),
            TrickState::Resolved { winner, .. } => {
                self.trick_no += 1;
                (winner, Vec::with_capacity(self.seats))
            }
        };
        plays.push((who, played));

        let mut result = PlayCardResult {
            trick_completed: false,
            trick_winner: None,
            trick_no: self.trick_no,
            round_over: false,
        };

        if plays.len() < self.seats {
            self.state = TrickState::Collecting { leader, plays };
            return Ok(result);
        }

        // plays is non-empty here, so resolution always yields a seat
        let winner = resolve_trick(&plays, self.trump).unwrap_or(who);
        let seat = winner as usize;
        self.captured[seat].extend(plays.iter().map(|(_, c)| *c));
        self.tricks_won[seat] += 1;
        self.state = TrickState::Resolved { winner, plays };

        result.trick_completed = true;
        result.trick_winner = Some(winner);
        result.round_over = hands.iter().all(Hand::is_empty);
        Ok(result)
    }
}

/// Winner of a full trick: the highest trump if any trump was played,
/// otherwise the highest card of the led suit. First copy played wins ties.
pub fn resolve_trick(plays: &[(PlayerId, Card)], trump: Suit) -> Option<PlayerId> {
    let cards: Vec<Card> = plays.iter().map(|(_, c)| *c).collect();
    winning_index(&cards, trump).map(|i| plays[i].0)
}
