#![no_std]
//! # World Cup Betting Pool
//!
//! Pari-mutuel pool for the semi-finals and final of a fixed tournament.
//! Users back a team to win a game; every accepted bet is credited at 105% as
//! a share in the share ledger. Once the event registry records a winner,
//! holders of winning shares split the whole game pool in proportion to
//! their shares.
//!
//! ## Key Features
//! - Owner-configured bet limits and bonus rate
//! - Bonus funded from a pre-seeded reserve, so payouts never exceed the pool
//! - Shares cleared before any token leaves the contract
//! - Checked arithmetic with 256-bit payout math

mod contract;
mod errors;
mod events;
mod interfaces;
mod types;

#[cfg(test)]
mod tests;

pub use contract::{WorldCupBetting, WorldCupBettingClient};
pub use errors::BettingError;
pub use types::{BetLimits, DataKey, GamePool, Settlement, TournamentConfig};
