//! Domain layer: pure game logic types and helpers.

pub mod bidding;
pub mod cards_logic;
pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod dealing;
pub mod deck;
pub mod fixtures;
pub mod hand;
pub mod rules;
pub mod scoring;
pub mod state;
pub mod tricks;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod tests_props_bidding;
#[cfg(test)]
mod tests_scoring;
#[cfg(test)]
mod tests_tricks;

// Re-exports for ergonomics
pub use bidding::{Auction, AuctionState, BidAction, Contract};
pub use cards_logic::{card_beats, hand_has_suit};
pub use cards_types::{Card, Rank, Suit};
pub use dealing::{deal, deal_from_top, DealPlan};
pub use deck::{Deck, DeckPool};
pub use hand::Hand;
pub use scoring::{score, MeldEvaluator, NoMeld, RoundScore, SetPenalty, SideId, Sides};
pub use state::{Player, PlayerId};
pub use tricks::{PlayCardResult, TrickEngine, TrickState};
