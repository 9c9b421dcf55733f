//! Test modules for the share ledger contract.


use crate::contract::{ShareLedger, ShareLedgerClient};
use soroban_sdk::{testutils::Address as _, Address, Env};

/// Registers and initializes a ledger wired to a generated main contract address.
fn setup(env: &Env) -> (ShareLedgerClient<'_>, Address, Address) {
    let contract_id = env.register(ShareLedger, ());
    let client = ShareLedgerClient::new(env, &contract_id);

    let owner = Address::generate(env);
    let main_contract = Address::generate(env);

    env.mock_all_auths();

    client.initialize(&owner);
    client.update_main_contract(&owner, &main_contract);

    (client, owner, main_contract)
}
