//! Type definitions for the World Cup betting pool.

use soroban_sdk::{contracttype, Address};
use world_cup_common::{Game, TeamId, ONE_UNIT};

/// Smallest accepted bet (10^-6 units). Keeps the bonus from rounding to zero.
pub const DEFAULT_MIN_BET: i128 = 1_000_000_000_000;
/// Largest accepted bet per call (10 units).
pub const DEFAULT_MAX_BET: i128 = 10 * ONE_UNIT;
/// Bonus credited on every bet, in basis points (5%).
pub const DEFAULT_BONUS_BPS: u32 = 500;

/// Storage keys for contract data
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    // --- instance() ---
    Owner,
    Config,
    Limits,
    BonusReserve,
    // --- persistent() ---
    GamePool(Game),
    TeamPool(Game, TeamId),
    Settlement(Game),
}

/// Addresses of the contracts this one drives
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TournamentConfig {
    pub event_registry: Address,
    pub share_ledger: Address,
    /// SEP-41 token bets are placed in
    pub token: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BetLimits {
    pub min_bet: i128,
    pub max_bet: i128,
    pub bonus_bps: u32,
}

impl BetLimits {
    pub const fn standard() -> Self {
        BetLimits {
            min_bet: DEFAULT_MIN_BET,
            max_bet: DEFAULT_MAX_BET,
            bonus_bps: DEFAULT_BONUS_BPS,
        }
    }
}

/// Running totals for one game across all teams
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GamePool {
    /// Tokens received from bettors
    pub total_staked: i128,
    /// Tokens moved in from the bonus reserve
    pub total_bonus: i128,
    /// `total_staked + total_bonus`, equal to the sum of all shares on the game
    pub total_pool: i128,
}

/// Claim bookkeeping for a game with a declared winner
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Settlement {
    pub winning_team: TeamId,
    /// Winning team's pool, frozen at first claim
    pub winning_shares: i128,
    pub claimed_shares: i128,
    pub paid_out: i128,
    pub swept: i128,
}
