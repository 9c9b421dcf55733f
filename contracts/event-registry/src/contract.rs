//! Core contract implementation for the event registry.

use soroban_sdk::{contract, contractimpl, Address, Env};
use world_cup_common::{EventInfo, Game, TeamId, PERSISTENT_BUMP_LEDGERS};

use crate::errors::RegistryError;
use crate::events::{EventScheduled, MainContractUpdated, WinnerDeclared, WinnerGateSwitched};
use crate::types::DataKey;

#[contract]
pub struct EventRegistry;

#[contractimpl]
impl EventRegistry {
    /// Initializes the registry with its owner (one-time only)
    pub fn initialize(env: Env, owner: Address) -> Result<(), RegistryError> {
        owner.require_auth();

        if env.storage().instance().has(&DataKey::Owner) {
            return Err(RegistryError::AlreadyInitialized);
        }

        env.storage().instance().set(&DataKey::Owner, &owner);
        env.storage()
            .instance()
            .set(&DataKey::WinnerSetEnabled, &false);

        Ok(())
    }

    /// Wires the betting contract as the scheduler of games (owner only, once)
    pub fn update_main_contract(
        env: Env,
        owner: Address,
        main_contract: Address,
    ) -> Result<(), RegistryError> {
        require_owner(&env, &owner)?;

        if env.storage().instance().has(&DataKey::MainContract) {
            return Err(RegistryError::AlreadyWired);
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

    /// Fixes the teams and betting deadline of a game (main contract only, once per game)
    pub fn update_event_info(
        env: Env,
        caller: Address,
        game: Game,
        team_a: TeamId,
        team_b: TeamId,
        betting_deadline: u64,
    ) -> Result<(), RegistryError> {
        require_main_contract(&env, &caller)?;

        if team_a == team_b {
            return Err(RegistryError::InvalidTeam);
        }

        let key = DataKey::Event(game);
        if env.storage().persistent().has(&key) {
            return Err(RegistryError::EventAlreadyConfigured);
        }

        let info = EventInfo {
            team_a,
            team_b,
            betting_deadline,
            winner_declared: false,
            winning_team: None,
        };
        set_event(&env, game, &info);

        EventScheduled {
            game,
            team_a,
            team_b,
            betting_deadline,
        }
        .publish(&env);

        Ok(())
    }

    /// Opens or closes the gate that permits `set_winner` (owner only)
    pub fn switch_winner_set_enabled(
        env: Env,
        caller: Address,
        enabled: bool,
    ) -> Result<(), RegistryError> {
        require_owner(&env, &caller)?;

        env.storage()
            .instance()
            .set(&DataKey::WinnerSetEnabled, &enabled);

        WinnerGateSwitched { enabled }.publish(&env);

        Ok(())
    }

    pub fn is_winner_set_enabled(env: Env) -> bool {
        env.storage()
            .instance()
            .get(&DataKey::WinnerSetEnabled)
            .unwrap_or(false)
    }

    /// Declares the winning team of a game (owner only, after the deadline)
    pub fn set_winner(
        env: Env,
        caller: Address,
        game: Game,
        team: TeamId,
    ) -> Result<(), RegistryError> {
        require_owner(&env, &caller)?;

        if !Self::is_winner_set_enabled(env.clone()) {
            return Err(RegistryError::NotYetEnabled);
        }

        let mut info = Self::get_event(env.clone(), game).ok_or(RegistryError::EventNotConfigured)?;

        if info.winner_declared {
            return Err(RegistryError::AlreadySettled);
        }

        if env.ledger().timestamp() <= info.betting_deadline {
            return Err(RegistryError::GameInProgress);
        }

        if !info.has_team(team) {
            return Err(RegistryError::InvalidTeam);
        }

        info.winner_declared = true;
        info.winning_team = Some(team);
        set_event(&env, game, &info);

        WinnerDeclared { game, team }.publish(&env);

        Ok(())
    }

    pub fn get_event(env: Env, game: Game) -> Option<EventInfo> {
        env.storage().persistent().get(&DataKey::Event(game))
    }

    pub fn is_settled(env: Env, game: Game) -> bool {
        Self::get_event(env, game)
            .map(|info| info.winner_declared)
            .unwrap_or(false)
    }

    pub fn winning_team(env: Env, game: Game) -> Option<TeamId> {
        Self::get_event(env, game).and_then(|info| info.winning_team)
    }

    pub fn is_valid_team(env: Env, game: Game, team: TeamId) -> bool {
        Self::get_event(env, game)
            .map(|info| info.has_team(team))
            .unwrap_or(false)
    }
}

fn set_event(env: &Env, game: Game, info: &EventInfo) {
    let key = DataKey::Event(game);
    env.storage().persistent().set(&key, info);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_BUMP_LEDGERS, PERSISTENT_BUMP_LEDGERS);
}

fn require_owner(env: &Env, caller: &Address) -> Result<(), RegistryError> {
    let owner: Address = env
        .storage()
        .instance()
        .get(&DataKey::Owner)
        .ok_or(RegistryError::NotInitialized)?;
    caller.require_auth();
    if *caller != owner {
        return Err(RegistryError::Unauthorized);
    }
    Ok(())
}

fn require_main_contract(env: &Env, caller: &Address) -> Result<(), RegistryError> {
    if !env.storage().instance().has(&DataKey::Owner) {
        return Err(RegistryError::NotInitialized);
    }
    let main_contract: Address = env
        .storage()
        .instance()
        .get(&DataKey::MainContract)
        .ok_or(RegistryError::Unauthorized)?;
    caller.require_auth();
    if *caller != main_contract {
        return Err(RegistryError::Unauthorized);
    }
    Ok(())
}
