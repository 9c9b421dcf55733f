//! Error types for the share ledger.

use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum LedgerError {
    /// Ledger has already been initialized
    AlreadyInitialized = 1,
    /// Owner not set - call initialize first
    NotInitialized = 2,
    /// Caller is not the owner or the wired main contract
    Unauthorized = 3,
    /// Credited amount must be greater than zero
    InvalidAmount = 4,
    /// Arithmetic overflow occurred
    Overflow = 5,
    /// Main contract is already wired
    AlreadyWired = 6,
}
