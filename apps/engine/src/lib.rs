//! Multi-deck pinochle engine: dealing, auction, trick play and scoring.

pub mod config;
pub mod domain;
pub mod errors;
pub mod services;

pub use config::TableConfig;
pub use errors::domain::DomainError;
pub use services::table_flow::{Table, TablePhase};
