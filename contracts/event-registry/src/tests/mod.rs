//! Test modules for the event registry contract.


use crate::contract::{EventRegistry, EventRegistryClient};
use soroban_sdk::{testutils::{Address as _, Ledger as _}, Address, Env};
use world_cup_common::{Game, ARGENTINA, FRANCE};

pub(crate) const DEADLINE: u64 = 1_000;

pub(crate) struct Setup<'a> {
    pub client: EventRegistryClient<'a>,
    pub owner: Address,
    pub main_contract: Address,
}

/// Registers the registry, wires a generated main contract and schedules the final.
fn setup(env: &Env) -> Setup<'_> {
    env.ledger().with_mut(|li| {
        li.timestamp = 0;
    });

    let contract_id = env.register(EventRegistry, ());
    let client = EventRegistryClient::new(env, &contract_id);

    let owner = Address::generate(env);
    let main_contract = Address::generate(env);

    env.mock_all_auths();

    client.initialize(&owner);
    client.update_main_contract(&owner, &main_contract);
    client.update_event_info(&main_contract, &Game::Final, &ARGENTINA, &FRANCE, &DEADLINE);

    Setup {
        client,
        owner,
        main_contract,
    }
}

fn advance_to(env: &Env, timestamp: u64) {
    env.ledger().with_mut(|li| {
        li.timestamp = timestamp;
    });
}
