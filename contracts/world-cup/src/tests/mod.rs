//! Test modules for the World Cup betting contract.
//!
//! Every test deploys the real share ledger and event registry next to the
//! betting contract, wired the same way a deployment would.

mod edge_cases;

use crate::contract::{WorldCupBetting, WorldCupBettingClient};
use soroban_sdk::{
    testutils::{Address as _, Ledger as _},
    token::{StellarAssetClient, TokenClient},
    Address, Env,
};
use world_cup_common::{Game, TeamId, ONE_UNIT};
use world_cup_event_registry::{EventRegistry, EventRegistryClient};
use world_cup_share_ledger::{ShareLedger, ShareLedgerClient};

pub(crate) const SEMI_FINAL_DEADLINE: u64 = 1_000;
pub(crate) const FINAL_DEADLINE: u64 = 2_000;
pub(crate) const BONUS_RESERVE: i128 = 5 * ONE_UNIT;
pub(crate) const USER_FUNDS: i128 = 100 * ONE_UNIT;

pub(crate) struct Setup<'a> {
    pub client: WorldCupBettingClient<'a>,
    pub ledger: ShareLedgerClient<'a>,
    pub registry: EventRegistryClient<'a>,
    pub token: TokenClient<'a>,
    pub token_sac: StellarAssetClient<'a>,
    pub owner: Address,
    pub contract_id: Address,
}

/// Deploys and wires all three contracts; no games scheduled, no bonus reserve.
fn deploy(env: &Env) -> Setup<'_> {
    env.ledger().with_mut(|li| {
        li.timestamp = 0;
    });

    let owner = Address::generate(env);
    let token_admin = Address::generate(env);

    let token_contract = env.register_stellar_asset_contract_v2(token_admin);
    let token = TokenClient::new(env, &token_contract.address());
    let token_sac = StellarAssetClient::new(env, &token_contract.address());

    let registry_id = env.register(EventRegistry, ());
    let registry = EventRegistryClient::new(env, &registry_id);

    let ledger_id = env.register(ShareLedger, ());
    let ledger = ShareLedgerClient::new(env, &ledger_id);

    let contract_id = env.register(WorldCupBetting, ());
    let client = WorldCupBettingClient::new(env, &contract_id);

    env.mock_all_auths();

    registry.initialize(&owner);
    ledger.initialize(&owner);
    client.initialize(&owner, &registry_id, &ledger_id, &token_contract.address());

    registry.update_main_contract(&owner, &contract_id);
    ledger.update_main_contract(&owner, &contract_id);

    Setup {
        client,
        ledger,
        registry,
        token,
        token_sac,
        owner,
        contract_id,
    }
}

/// Deployed, tournament open, bonus reserve funded.
fn setup(env: &Env) -> Setup<'_> {
    let s = deploy(env);

    s.client
        .open_tournament(&s.owner, &SEMI_FINAL_DEADLINE, &FINAL_DEADLINE);

    s.token_sac.mint(&s.owner, &BONUS_RESERVE);
    s.client.fund_bonus_reserve(&s.owner, &BONUS_RESERVE);

    s
}

fn funded_user(env: &Env, s: &Setup) -> Address {
    let user = Address::generate(env);
    s.token_sac.mint(&user, &USER_FUNDS);
    user
}

fn advance_to(env: &Env, timestamp: u64) {
    env.ledger().with_mut(|li| {
        li.timestamp = timestamp;
    });
}

/// Moves past the game's deadline and has the owner declare `team` the winner.
fn declare_winner(env: &Env, s: &Setup, game: Game, team: TeamId) {
    let deadline = match game {
        Game::Final => FINAL_DEADLINE,
        Game::SemiFinalA | Game::SemiFinalB => SEMI_FINAL_DEADLINE,
    };
    if env.ledger().timestamp() <= deadline {
        advance_to(env, deadline + 1);
    }
    s.registry.switch_winner_set_enabled(&s.owner, &true);
    s.registry.set_winner(&s.owner, &game, &team);
}
