//! Clients for the share ledger and event registry contracts.

use soroban_sdk::{contractclient, Address, Env};
use world_cup_common::{EventInfo, Game, TeamId};

#[contractclient(name = "LedgerClient")]
#[allow(dead_code)]
pub trait ShareLedgerInterface {
    fn place_bet(
        env: Env,
        caller: Address,
        user: Address,
        game: Game,
        team: TeamId,
        amount: i128,
    ) -> i128;

    fn clear_share(env: Env, caller: Address, user: Address, game: Game, team: TeamId) -> i128;

    fn get_share(env: Env, user: Address, game: Game, team: TeamId) -> i128;
}

#[contractclient(name = "RegistryClient")]
#[allow(dead_code)]
pub trait EventRegistryInterface {
    fn update_event_info(
        env: Env,
        caller: Address,
        game: Game,
        team_a: TeamId,
        team_b: TeamId,
        betting_deadline: u64,
    );

    fn get_event(env: Env, game: Game) -> Option<EventInfo>;
}
