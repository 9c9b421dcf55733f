//! Error types for the event registry.

use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum RegistryError {
    /// Registry has already been initialized
    AlreadyInitialized = 1,
    /// Owner not set - call initialize first
    NotInitialized = 2,
    /// Caller is not allowed to perform this action
    Unauthorized = 3,
    /// Winner declaration is switched off
    NotYetEnabled = 4,
    /// Betting deadline has not passed yet
    GameInProgress = 5,
    /// Team does not play in this game
    InvalidTeam = 6,
    /// Winner already declared for this game
    AlreadySettled = 7,
    /// Game has not been scheduled
    EventNotConfigured = 8,
    /// Game teams and deadline are already fixed
    EventAlreadyConfigured = 9,
    /// Main contract is already wired
    AlreadyWired = 10,
}
