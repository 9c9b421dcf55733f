use soroban_sdk::{contractevent, Address};
use world_cup_common::{Game, TeamId};

#[contractevent]
pub struct MainContractUpdated {
    pub main_contract: Address,
}

#[contractevent]
pub struct ShareCredited {
    #[topic]
    pub user: Address,
    #[topic]
    pub game: Game,
    pub team: TeamId,
    pub amount: i128,
    pub share: i128,
}

#[contractevent]
pub struct ShareCleared {
    #[topic]
    pub user: Address,
    #[topic]
    pub game: Game,
    pub team: TeamId,
    pub amount: i128,
}
