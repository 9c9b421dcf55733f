//! Storage keys for the share ledger.

use soroban_sdk::{contracttype, Address};
use world_cup_common::{Game, TeamId};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    // --- instance() ---
    Owner,
    MainContract,
    // --- persistent() ---
    Share(Address, Game, TeamId),
}
