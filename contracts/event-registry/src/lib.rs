#![no_std]
//! # Event Registry
//!
//! Per-game metadata for the tournament: the two valid teams, the betting
//! deadline, and the declared winner.
//!
//! ## Roles
//! - Owner: toggles the winner gate and declares winners
//! - Main contract: schedules games (once per game)
//!
//! A winner can only be declared once the gate is enabled and the betting
//! deadline has passed. Declarations are final.

mod contract;
mod errors;
mod events;
mod types;

#[cfg(test)]
mod tests;

pub use contract::{EventRegistry, EventRegistryClient};
pub use errors::RegistryError;
pub use types::DataKey;
