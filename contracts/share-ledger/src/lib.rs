#![no_std]
//! # Share Ledger
//!
//! Holds every user's bonus-adjusted claim ("share") against a game pool,
//! keyed by (user, game, team). Only the wired betting contract may credit or
//! clear shares; reads are public.

mod contract;
mod errors;
mod events;
mod types;

#[cfg(test)]
mod tests;

pub use contract::{ShareLedger, ShareLedgerClient};
pub use errors::LedgerError;
pub use types::DataKey;
