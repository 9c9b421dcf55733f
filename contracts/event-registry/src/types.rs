//! Storage keys for the event registry.

use soroban_sdk::contracttype;
use world_cup_common::Game;

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    // --- instance() ---
    Owner,
    MainContract,
    WinnerSetEnabled,
    // --- persistent() ---
    Event(Game),
}
