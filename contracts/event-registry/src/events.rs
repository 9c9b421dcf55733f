use soroban_sdk::{contractevent, Address};
use world_cup_common::{Game, TeamId};

#[contractevent]
pub struct MainContractUpdated {
    pub main_contract: Address,
}

#[contractevent]
pub struct EventScheduled {
    #[topic]
    pub game: Game,
    pub team_a: TeamId,
    pub team_b: TeamId,
    pub betting_deadline: u64,
}

#[contractevent]
pub struct WinnerGateSwitched {
    pub enabled: bool,
}

#[contractevent]
pub struct WinnerDeclared {
    #[topic]
    pub game: Game,
    pub team: TeamId,
}
