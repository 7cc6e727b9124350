use std::env;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::dealing::DealPlan;
use crate::domain::rules::{CARDS_PER_DECK, PLAYER_RANGE};
use crate::domain::scoring::{SetPenalty, Sides};
use crate::domain::state::PlayerId;
use crate::errors::domain::DomainError;

/// Table setup, validated once when a table is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    pub players: usize,
    pub pack_count: usize,
    pub hand_size: usize,
    /// Cards handed to each seat per dealing pass.
    pub dealt_per_pass: usize,
    pub minimum_bid: u32,
    /// Alternating seats play as two partnerships; otherwise every seat
    /// scores alone.
    pub partnerships: bool,
    pub set_penalty: SetPenalty,
    /// Game ends once a side's running score reaches this.
    pub target_score: Option<i64>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            players: 4,
            pack_count: 2,
            hand_size: 12,
            dealt_per_pass: 3,
            minimum_bid: 50,
            partnerships: true,
            set_penalty: SetPenalty::Zero,
            target_score: None,
        }
    }
}

impl TableConfig {
    pub fn validate(&self) -> Result<(), DomainError> {
        if !PLAYER_RANGE.contains(&self.players) {
            return Err(DomainError::config(format!(
                "players must be {}..={}, got {}",
                PLAYER_RANGE.start(),
                PLAYER_RANGE.end(),
                self.players
            )));
        }
        if self.pack_count == 0 {
            return Err(DomainError::config("pack count must be at least 1"));
        }
        if self.hand_size == 0 {
            return Err(DomainError::config("hand size must be at least 1"));
        }
        if self.dealt_per_pass == 0 || self.dealt_per_pass > self.hand_size {
            return Err(DomainError::config(format!(
                "cards per pass must be 1..={}, got {}",
                self.hand_size, self.dealt_per_pass
            )));
        }
        let needed = self.players.checked_mul(self.hand_size);
        let available = self.pack_count.checked_mul(CARDS_PER_DECK);
        match (needed, available) {
            (Some(needed), Some(available)) if needed <= available => {}
            _ => {
                return Err(DomainError::config(format!(
                    "{} hands of {} do not fit in {} packs",
                    self.players, self.hand_size, self.pack_count
                )))
            }
        }
        if self.partnerships && self.players % 2 != 0 {
            return Err(DomainError::config(format!(
                "partnerships need an even player count, got {}",
                self.players
            )));
        }
        Ok(())
    }

    /// Defaults overlaid with `PINOCHLE_*` environment variables.
    pub fn from_env() -> Result<Self, DomainError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Defaults overlaid with whatever `lookup` returns for each setting.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DomainError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let d = Self::default();
        let config = Self {
            players: var_or(&lookup, "PINOCHLE_PLAYERS", d.players)?,
            pack_count: var_or(&lookup, "PINOCHLE_PACK_COUNT", d.pack_count)?,
            hand_size: var_or(&lookup, "PINOCHLE_HAND_SIZE", d.hand_size)?,
            dealt_per_pass: var_or(&lookup, "PINOCHLE_DEALT_PER_PASS", d.dealt_per_pass)?,
            minimum_bid: var_or(&lookup, "PINOCHLE_MINIMUM_BID", d.minimum_bid)?,
            partnerships: var_or(&lookup, "PINOCHLE_PARTNERSHIPS", d.partnerships)?,
            set_penalty: match lookup("PINOCHLE_SET_PENALTY").as_deref() {
                None => d.set_penalty,
                Some("zero") => SetPenalty::Zero,
                Some("minus_bid") => SetPenalty::MinusBid,
                Some(other) => {
                    return Err(DomainError::config(format!(
                        "PINOCHLE_SET_PENALTY must be 'zero' or 'minus_bid', got '{other}'"
                    )))
                }
            },
            target_score: match lookup("PINOCHLE_TARGET_SCORE") {
                None => d.target_score,
                Some(raw) => Some(parse_var("PINOCHLE_TARGET_SCORE", &raw)?),
            },
        };
        config.validate()?;
        Ok(config)
    }

    pub fn sides(&self) -> Sides {
        if self.partnerships {
            Sides::partnerships(self.players)
        } else {
            Sides::individual(self.players)
        }
    }

    pub fn deal_plan(&self, first_seat: PlayerId) -> DealPlan {
        DealPlan {
            first_seat: first_seat as usize,
            hand_size: self.hand_size,
            dealt_per_pass: self.dealt_per_pass,
        }
    }
}

fn var_or<F, T>(lookup: &F, name: &str, default: T) -> Result<T, DomainError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(name) {
        Some(raw) => parse_var(name, &raw),
        None => Ok(default),
    }
}

fn parse_var<T: FromStr>(name: &str, raw: &str) -> Result<T, DomainError> {
    raw.trim()
        .parse()
        .map_err(|_| DomainError::config(format!("'{name}' has an invalid value: '{raw}'")))
}
