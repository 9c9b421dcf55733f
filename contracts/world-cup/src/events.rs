use soroban_sdk::{contractevent, Address};
use world_cup_common::{Game, TeamId};

#[contractevent]
pub struct Initialized {
    pub owner: Address,
    pub event_registry: Address,
    pub share_ledger: Address,
    pub token: Address,
}

#[contractevent]
pub struct LimitsUpdated {
    pub min_bet: i128,
    pub max_bet: i128,
    pub bonus_bps: u32,
}

#[contractevent]
pub struct BonusFunded {
    #[topic]
    pub from: Address,
    pub amount: i128,
    pub reserve: i128,
}

#[contractevent]
pub struct BonusWithdrawn {
    #[topic]
    pub to: Address,
    pub amount: i128,
    pub reserve: i128,
}

#[contractevent]
pub struct BetPlaced {
    #[topic]
    pub user: Address,
    #[topic]
    pub game: Game,
    pub team: TeamId,
    pub amount: i128,
    pub bonus: i128,
    pub share: i128,
}

#[contractevent]
pub struct RewardClaimed {
    #[topic]
    pub user: Address,
    #[topic]
    pub game: Game,
    pub team: TeamId,
    pub share: i128,
    pub payout: i128,
}

#[contractevent]
pub struct RemainderSwept {
    #[topic]
    pub game: Game,
    pub to: Address,
    pub amount: i128,
}
