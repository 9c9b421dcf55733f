#![no_std]
//! # World Cup Betting: shared types
//!
//! Types and numeric helpers used by the share ledger, the event registry and
//! the betting contract. The tournament is fixed: two semi-finals and a final,
//! four teams.

use soroban_sdk::{contracttype, Env, I256};

/// Team identifier as stored on-chain.
pub type TeamId = u32;

pub const ARGENTINA: TeamId = 1;
pub const CROATIA: TeamId = 2;
pub const FRANCE: TeamId = 3;
pub const MOROCCO: TeamId = 4;

/// Base units per display unit (18 decimals).
pub const ONE_UNIT: i128 = 1_000_000_000_000_000_000;

/// Divisor for basis-point rates (10_000 bps = 100%).
pub const BASIS_POINTS_DIVISOR: u32 = 10_000;

/// Persistent storage TTL in ledgers (~30 days at 5 s/ledger).
pub const PERSISTENT_BUMP_LEDGERS: u32 = 518_400;

/// The three games of the tournament. Discriminants are the on-chain game ids.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Game {
    Final = 0,
    SemiFinalA = 1,
    SemiFinalB = 2,
}

impl Game {
    pub const ALL: [Game; 3] = [Game::Final, Game::SemiFinalA, Game::SemiFinalB];
}

/// A scheduled matchup.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Fixture {
    pub game: Game,
    pub team_a: TeamId,
    pub team_b: TeamId,
}

pub const FIXTURES: [Fixture; 3] = [
    Fixture {
        game: Game::SemiFinalA,
        team_a: ARGENTINA,
        team_b: CROATIA,
    },
    Fixture {
        game: Game::SemiFinalB,
        team_a: FRANCE,
        team_b: MOROCCO,
    },
    Fixture {
        game: Game::Final,
        team_a: ARGENTINA,
        team_b: FRANCE,
    },
];

/// One entry point per known (game, team) pair.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Pick {
    FinalArgentina,
    FinalFrance,
    SemiFinalAArgentina,
    SemiFinalACroatia,
    SemiFinalBFrance,
    SemiFinalBMorocco,
}

impl Pick {
    pub fn fixture(self) -> (Game, TeamId) {
        match self {
            Pick::FinalArgentina => (Game::Final, ARGENTINA),
            Pick::FinalFrance => (Game::Final, FRANCE),
            Pick::SemiFinalAArgentina => (Game::SemiFinalA, ARGENTINA),
            Pick::SemiFinalACroatia => (Game::SemiFinalA, CROATIA),
            Pick::SemiFinalBFrance => (Game::SemiFinalB, FRANCE),
            Pick::SemiFinalBMorocco => (Game::SemiFinalB, MOROCCO),
        }
    }
}

/// Per-game metadata held by the event registry.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EventInfo {
    pub team_a: TeamId,
    pub team_b: TeamId,
    /// Ledger timestamp (seconds) after which no bets are accepted
    pub betting_deadline: u64,
    pub winner_declared: bool,
    pub winning_team: Option<TeamId>,
}

impl EventInfo {
    pub fn has_team(&self, team: TeamId) -> bool {
        team == self.team_a || team == self.team_b
    }

    /// Bets are accepted up to and including the deadline.
    pub fn is_open(&self, now: u64) -> bool {
        !self.winner_declared && now <= self.betting_deadline
    }
}

/// `amount * bps / 10_000`, rounded down.
pub fn apply_bps(amount: i128, bps: u32) -> Option<i128> {
    amount
        .checked_mul(bps as i128)?
        .checked_div(BASIS_POINTS_DIVISOR as i128)
}

/// `a * b / c` with a 256-bit intermediate, rounded down.
/// Returns `None` when `c` is zero or the quotient does not fit in an `i128`.
pub fn mul_div(env: &Env, a: i128, b: i128, c: i128) -> Option<i128> {
    if c == 0 {
        return None;
    }
    let product = I256::from_i128(env, a).mul(&I256::from_i128(env, b));
    product.div(&I256::from_i128(env, c)).to_i128()
}
