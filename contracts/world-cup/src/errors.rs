//! Contract error types for the World Cup betting pool.

use soroban_sdk::contracterror;

/// Contract error types
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum BettingError {
    /// Contract has already been initialized
    AlreadyInitialized = 1,
    /// Owner or config not set - call initialize first
    NotInitialized = 2,
    /// Only the owner can perform this action
    Unauthorized = 3,
    /// Amount must be greater than zero
    ZeroAmount = 4,
    /// Bet exceeds the per-transaction ceiling
    AmountTooLarge = 5,
    /// Bet is below the dust threshold
    AmountTooSmall = 6,
    /// Team does not play in this game
    InvalidTeam = 7,
    /// Betting deadline has passed or the winner is declared
    BettingClosed = 8,
    /// Game has not been scheduled in the event registry
    GameNotScheduled = 9,
    /// No winner declared for this game yet
    GameNotSettled = 10,
    /// Caller holds no share on the winning team
    NoShare = 11,
    /// Bonus reserve cannot fund the bet's bonus
    InsufficientBonusReserve = 12,
    /// Token transfer failed
    TransferFailed = 13,
    /// Arithmetic overflow occurred
    Overflow = 14,
    /// Bet limits are inconsistent
    InvalidLimits = 15,
    /// Betting deadline is not in the future or out of order
    InvalidSchedule = 16,
    /// Winning shares are still unclaimed
    ClaimsOutstanding = 17,
    /// Nothing left in the pool to sweep
    NothingToSweep = 18,
    /// Claimed share exceeds the winning pool left to pay out
    ShareExceedsPool = 19,
}
