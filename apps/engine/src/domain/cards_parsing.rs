//! Card parsing from string representations (e.g., "AS", "9C")

use std::str::FromStr;

use super::cards_types::{Card, Rank, Suit};
use crate::errors::domain::DomainError;

impl FromStr for Rank {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "9" => Ok(Rank::Nine),
            "J" => Ok(Rank::Jack),
            "Q" => Ok(Rank::Queen),
            "K" => Ok(Rank::King),
            "T" => Ok(Rank::Ten),
            "A" => Ok(Rank::Ace),
            _ => Err(DomainError::ParseCard(format!("invalid rank: {s}"))),
        }
    }
}

impl FromStr for Suit {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "C" => Ok(Suit::Clubs),
            "D" => Ok(Suit::Diamonds),
            "H" => Ok(Suit::Hearts),
            "S" => Ok(Suit::Spades),
            _ => Err(DomainError::ParseCard(format!("invalid suit: {s}"))),
        }
    }
}

impl FromStr for Card {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 2 || !s.is_ascii() {
            return Err(DomainError::ParseCard(s.to_string()));
        }
        let (rank, suit) = s.split_at(1);
        let rank = rank
            .parse::<Rank>()
            .map_err(|_| DomainError::ParseCard(s.to_string()))?;
        let suit = suit
            .parse::<Suit>()
            .map_err(|_| DomainError::ParseCard(s.to_string()))?;
        Ok(Card { suit, rank })
    }
}

/// Non-panicking helper to parse card tokens (e.g., "AS", "9C") into Card instances.
pub fn try_parse_cards<I, S>(tokens: I) -> Result<Vec<Card>, DomainError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|s| s.as_ref().parse::<Card>())
        .collect()
}
