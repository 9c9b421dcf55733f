//! Core contract implementation for the share ledger.

use soroban_sdk::{contract, contractimpl, Address, Env};
use world_cup_common::{Game, TeamId, PERSISTENT_BUMP_LEDGERS};

use crate::errors::LedgerError;
use crate::events::{MainContractUpdated, ShareCleared, ShareCredited};
use crate::types::DataKey;

#[contract]
pub struct ShareLedger;

#[contractimpl]
impl ShareLedger {
    /// Initializes the ledger with its owner (one-time only)
    pub fn initialize(env: Env, owner: Address) -> Result<(), LedgerError> {
        owner.require_auth();

        if env.storage().instance().has(&DataKey::Owner) {
            return Err(LedgerError::AlreadyInitialized);
        }

        env.storage().instance().set(&DataKey::Owner, &owner);

        Ok(())
    }

    /// Wires the betting contract as the only address allowed to mutate shares (owner only, once)
    pub fn update_main_contract(
        env: Env,
        owner: Address,
        main_contract: Address,
    ) -> Result<(), LedgerError> {
        require_owner(&env, &owner)?;

        if env.storage().instance().has(&DataKey::MainContract) {
            return Err(LedgerError::AlreadyWired);
        }

        env.storage()
            .instance()
            .set(&DataKey::MainContract, &main_contract);

        MainContractUpdated { main_contract }.publish(&env);

        Ok(())
    }

    pub fn get_owner(env: Env) -> Option<Address> {
        env.storage().instance().get(&DataKey::Owner)
    }

    pub fn get_main_contract(env: Env) -> Option<Address> {
        env.storage().instance().get(&DataKey::MainContract)
    }

    /// Adds `amount` to the user's share and returns the new share
    pub fn place_bet(
        env: Env,
        caller: Address,
        user: Address,
        game: Game,
        team: TeamId,
        amount: i128,
    ) -> Result<i128, LedgerError> {
        require_main_contract(&env, &caller)?;

        if amount <= 0 {
            return Err(LedgerError::InvalidAmount);
        }

        let key = DataKey::Share(user.clone(), game, team);
        let share: i128 = env.storage().persistent().get(&key).unwrap_or(0);
        let new_share = share.checked_add(amount).ok_or(LedgerError::Overflow)?;

        env.storage().persistent().set(&key, &new_share);
        env.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_BUMP_LEDGERS, PERSISTENT_BUMP_LEDGERS);

        ShareCredited {
            user,
            game,
            team,
            amount,
            share: new_share,
        }
        .publish(&env);

        Ok(new_share)
    }

    /// Zeroes the user's share and returns what it held.
    /// A second call returns 0, so a claim can never be paid twice.
    pub fn clear_share(
        env: Env,
        caller: Address,
        user: Address,
        game: Game,
        team: TeamId,
    ) -> Result<i128, LedgerError> {
        require_main_contract(&env, &caller)?;

        let key = DataKey::Share(user.clone(), game, team);
        let share: i128 = env.storage().persistent().get(&key).unwrap_or(0);

        if share > 0 {
            env.storage().persistent().remove(&key);
            ShareCleared {
                user,
                game,
                team,
                amount: share,
            }
            .publish(&env);
        }

        Ok(share)
    }

    /// Returns the user's share on a team, 0 when none
    pub fn get_share(env: Env, user: Address, game: Game, team: TeamId) -> i128 {
        let key = DataKey::Share(user, game, team);
        env.storage().persistent().get(&key).unwrap_or(0)
    }
}

fn require_owner(env: &Env, caller: &Address) -> Result<(), LedgerError> {
    let owner: Address = env
        .storage()
        .instance()
        .get(&DataKey::Owner)
        .ok_or(LedgerError::NotInitialized)?;
    caller.require_auth();
    if *caller != owner {
        return Err(LedgerError::Unauthorized);
    }
    Ok(())
}

fn require_main_contract(env: &Env, caller: &Address) -> Result<(), LedgerError> {
    if !env.storage().instance().has(&DataKey::Owner) {
        return Err(LedgerError::NotInitialized);
    }
    let main_contract: Address = env
        .storage()
        .instance()
        .get(&DataKey::MainContract)
        .ok_or(LedgerError::Unauthorized)?;
    caller.require_auth();
    if *caller != main_contract {
        return Err(LedgerError::Unauthorized);
    }
    Ok(())
}
