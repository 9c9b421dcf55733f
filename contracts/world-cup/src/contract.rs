//! Core contract implementation for the World Cup betting pool.

use soroban_sdk::{contract, contractimpl, log, token::TokenClient, Address, Env, IntoVal, Val};
use world_cup_common::{
    apply_bps, mul_div, EventInfo, Game, Pick, TeamId, BASIS_POINTS_DIVISOR, FIXTURES,
    PERSISTENT_BUMP_LEDGERS,
};

use crate::errors::BettingError;
use crate::events::{
    BetPlaced, BonusFunded, BonusWithdrawn, Initialized, LimitsUpdated, RemainderSwept,
    RewardClaimed,
};
use crate::interfaces::{LedgerClient, RegistryClient};
use crate::types::{BetLimits, DataKey, GamePool, Settlement, TournamentConfig};

#[contract]
pub struct WorldCupBetting;

#[contractimpl]
impl WorldCupBetting {
    /// Initializes the pool with its owner and collaborating contracts (one-time only)
    pub fn initialize(
        env: Env,
        owner: Address,
        event_registry: Address,
        share_ledger: Address,
        token: Address,
    ) -> Result<(), BettingError> {
        owner.require_auth();

        if env.storage().instance().has(&DataKey::Owner) {
            return Err(BettingError::AlreadyInitialized);
        }

        let config = TournamentConfig {
            event_registry: event_registry.clone(),
            share_ledger: share_ledger.clone(),
            token: token.clone(),
        };

        env.storage().instance().set(&DataKey::Owner, &owner);
        env.storage().instance().set(&DataKey::Config, &config);
        env.storage()
            .instance()
            .set(&DataKey::Limits, &BetLimits::standard());
        env.storage().instance().set(&DataKey::BonusReserve, &0i128);

        Initialized {
            owner,
            event_registry,
            share_ledger,
            token,
        }
        .publish(&env);

        Ok(())
    }

    pub fn get_owner(env: Env) -> Option<Address> {
        env.storage().instance().get(&DataKey::Owner)
    }

    pub fn get_config(env: Env) -> Option<TournamentConfig> {
        env.storage().instance().get(&DataKey::Config)
    }

    pub fn get_bet_limits(env: Env) -> Option<BetLimits> {
        env.storage().instance().get(&DataKey::Limits)
    }

    /// Replaces the bet limits and bonus rate (owner only)
    pub fn set_bet_limits(env: Env, owner: Address, limits: BetLimits) -> Result<(), BettingError> {
        require_owner(&env, &owner)?;
        validate_limits(&limits)?;

        env.storage().instance().set(&DataKey::Limits, &limits);

        LimitsUpdated {
            min_bet: limits.min_bet,
            max_bet: limits.max_bet,
            bonus_bps: limits.bonus_bps,
        }
        .publish(&env);

        Ok(())
    }

    /// Fixes a game's teams and deadline in the event registry (owner only)
    pub fn schedule_game(
        env: Env,
        owner: Address,
        game: Game,
        team_a: TeamId,
        team_b: TeamId,
        betting_deadline: u64,
    ) -> Result<(), BettingError> {
        require_owner(&env, &owner)?;
        schedule(&env, game, team_a, team_b, betting_deadline)
    }

    /// Schedules both semi-finals and the final from the fixture table (owner only)
    pub fn open_tournament(
        env: Env,
        owner: Address,
        semi_final_deadline: u64,
        final_deadline: u64,
    ) -> Result<(), BettingError> {
        require_owner(&env, &owner)?;

        if final_deadline < semi_final_deadline {
            return Err(BettingError::InvalidSchedule);
        }

        for fixture in FIXTURES {
            let deadline = match fixture.game {
                Game::Final => final_deadline,
                Game::SemiFinalA | Game::SemiFinalB => semi_final_deadline,
            };
            schedule(&env, fixture.game, fixture.team_a, fixture.team_b, deadline)?;
        }

        Ok(())
    }

    /// Moves tokens into the bonus reserve that funds the 5% uplift
    pub fn fund_bonus_reserve(env: Env, from: Address, amount: i128) -> Result<(), BettingError> {
        from.require_auth();

        if amount <= 0 {
            return Err(BettingError::ZeroAmount);
        }

        let config = get_config(&env)?;
        let reserve = get_bonus_reserve(&env)
            .checked_add(amount)
            .ok_or(BettingError::Overflow)?;
        env.storage()
            .instance()
            .set(&DataKey::BonusReserve, &reserve);

        transfer(
            &env,
            &config.token,
            &from,
            &env.current_contract_address(),
            amount,
        )?;

        BonusFunded {
            from,
            amount,
            reserve,
        }
        .publish(&env);

        Ok(())
    }

    /// Withdraws bonus capital no bet has drawn on yet (owner only)
    pub fn withdraw_bonus_reserve(
        env: Env,
        owner: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), BettingError> {
        require_owner(&env, &owner)?;

        if amount <= 0 {
            return Err(BettingError::ZeroAmount);
        }

        let config = get_config(&env)?;
        let reserve = get_bonus_reserve(&env);
        if amount > reserve {
            return Err(BettingError::InsufficientBonusReserve);
        }

        let reserve = reserve - amount;
        env.storage()
            .instance()
            .set(&DataKey::BonusReserve, &reserve);

        transfer(
            &env,
            &config.token,
            &env.current_contract_address(),
            &to,
            amount,
        )?;

        BonusWithdrawn {
            to,
            amount,
            reserve,
        }
        .publish(&env);

        Ok(())
    }

    pub fn get_bonus_reserve(env: Env) -> i128 {
        get_bonus_reserve(&env)
    }

    /// Places a bet on `team` to win `game` and returns the user's new share
    pub fn place_bet(
        env: Env,
        user: Address,
        game: Game,
        team: TeamId,
        amount: i128,
    ) -> Result<i128, BettingError> {
        user.require_auth();

        let limits = get_limits(&env)?;
        validate_amount(&limits, amount)?;

        let config = get_config(&env)?;
        let info = get_event(&env, &config, game).ok_or(BettingError::GameNotScheduled)?;

        if !info.is_open(env.ledger().timestamp()) {
            return Err(BettingError::BettingClosed);
        }

        if !info.has_team(team) {
            return Err(BettingError::InvalidTeam);
        }

        let bonus = apply_bps(amount, limits.bonus_bps).ok_or(BettingError::Overflow)?;
        let reserve = get_bonus_reserve(&env);
        if bonus > reserve {
            return Err(BettingError::InsufficientBonusReserve);
        }
        let credited = amount.checked_add(bonus).ok_or(BettingError::Overflow)?;

        env.storage()
            .instance()
            .set(&DataKey::BonusReserve, &(reserve - bonus));

        let mut pool = Self::get_game_pool(env.clone(), game);
        pool.total_staked = pool
            .total_staked
            .checked_add(amount)
            .ok_or(BettingError::Overflow)?;
        pool.total_bonus = pool
            .total_bonus
            .checked_add(bonus)
            .ok_or(BettingError::Overflow)?;
        pool.total_pool = pool
            .total_pool
            .checked_add(credited)
            .ok_or(BettingError::Overflow)?;
        set_persistent(&env, &DataKey::GamePool(game), &pool);

        let team_pool = Self::get_team_pool(env.clone(), game, team)
            .checked_add(credited)
            .ok_or(BettingError::Overflow)?;
        set_persistent(&env, &DataKey::TeamPool(game, team), &team_pool);

        let this = env.current_contract_address();
        let share = LedgerClient::new(&env, &config.share_ledger)
            .place_bet(&this, &user, &game, &team, &credited);

        transfer(&env, &config.token, &user, &this, amount)?;

        BetPlaced {
            user,
            game,
            team,
            amount,
            bonus,
            share,
        }
        .publish(&env);

        Ok(share)
    }

    /// Per-matchup entry point ("final: Argentina to win", ...)
    pub fn bet(env: Env, user: Address, pick: Pick, amount: i128) -> Result<i128, BettingError> {
        let (game, team) = pick.fixture();
        Self::place_bet(env, user, game, team, amount)
    }

    /// Claims the user's cut of a settled game and returns the amount paid
    pub fn settle(env: Env, user: Address, game: Game) -> Result<i128, BettingError> {
        user.require_auth();

        let config = get_config(&env)?;
        let winning_team = declared_winner(get_event(&env, &config, game))?;

        let this = env.current_contract_address();
        let payout_share = LedgerClient::new(&env, &config.share_ledger)
            .clear_share(&this, &user, &game, &winning_team);

        if payout_share <= 0 {
            return Err(BettingError::NoShare);
        }

        let pool = Self::get_game_pool(env.clone(), game);
        let mut settlement = settlement_for(&env, game, winning_team);

        let claimed_shares = settlement
            .claimed_shares
            .checked_add(payout_share)
            .ok_or(BettingError::Overflow)?;
        if claimed_shares > settlement.winning_shares {
            return Err(BettingError::ShareExceedsPool);
        }

        let payout = mul_div(&env, payout_share, pool.total_pool, settlement.winning_shares)
            .ok_or(BettingError::Overflow)?;

        settlement.claimed_shares = claimed_shares;
        settlement.paid_out = settlement
            .paid_out
            .checked_add(payout)
            .ok_or(BettingError::Overflow)?;
        set_persistent(&env, &DataKey::Settlement(game), &settlement);

        log!(&env, "reward payout", user, payout_share, payout);

        if payout > 0 {
            transfer(&env, &config.token, &this, &user, payout)?;
        }

        RewardClaimed {
            user,
            game,
            team: winning_team,
            share: payout_share,
            payout,
        }
        .publish(&env);

        Ok(payout)
    }

    /// Claims the user's cut of the final
    pub fn reward_final(env: Env, user: Address) -> Result<i128, BettingError> {
        Self::settle(env, user, Game::Final)
    }

    /// Sends what is left of a settled pool to `to` once every winning share is claimed.
    /// With no winning shares at all, that is the whole pool. (owner only)
    pub fn sweep_remainder(
        env: Env,
        owner: Address,
        game: Game,
        to: Address,
    ) -> Result<i128, BettingError> {
        require_owner(&env, &owner)?;

        let config = get_config(&env)?;
        let winning_team = declared_winner(get_event(&env, &config, game))?;

        let mut settlement = settlement_for(&env, game, winning_team);
        if settlement.claimed_shares < settlement.winning_shares {
            return Err(BettingError::ClaimsOutstanding);
        }

        let pool = Self::get_game_pool(env.clone(), game);
        let remainder = pool
            .total_pool
            .checked_sub(settlement.paid_out)
            .and_then(|left| left.checked_sub(settlement.swept))
            .ok_or(BettingError::Overflow)?;

        if remainder <= 0 {
            return Err(BettingError::NothingToSweep);
        }

        settlement.swept = settlement
            .swept
            .checked_add(remainder)
            .ok_or(BettingError::Overflow)?;
        set_persistent(&env, &DataKey::Settlement(game), &settlement);

        transfer(
            &env,
            &config.token,
            &env.current_contract_address(),
            &to,
            remainder,
        )?;

        RemainderSwept {
            game,
            to,
            amount: remainder,
        }
        .publish(&env);

        Ok(remainder)
    }

    /// Returns the user's share on a team as recorded in the share ledger
    pub fn get_user_share_amount(
        env: Env,
        user: Address,
        game: Game,
        team: TeamId,
    ) -> Result<i128, BettingError> {
        let config = get_config(&env)?;
        Ok(LedgerClient::new(&env, &config.share_ledger).get_share(&user, &game, &team))
    }

    /// Returns what `settle` would pay the user right now, 0 when nothing is claimable
    pub fn quote_payout(env: Env, user: Address, game: Game) -> i128 {
        let Ok(config) = get_config(&env) else {
            return 0;
        };
        let Ok(winning_team) = declared_winner(get_event(&env, &config, game)) else {
            return 0;
        };

        let share = LedgerClient::new(&env, &config.share_ledger).get_share(
            &user,
            &game,
            &winning_team,
        );
        if share <= 0 {
            return 0;
        }

        let pool = Self::get_game_pool(env.clone(), game);
        let settlement = settlement_for(&env, game, winning_team);
        mul_div(&env, share, pool.total_pool, settlement.winning_shares).unwrap_or(0)
    }

    pub fn get_game_pool(env: Env, game: Game) -> GamePool {
        env.storage()
            .persistent()
            .get(&DataKey::GamePool(game))
            .unwrap_or(GamePool {
                total_staked: 0,
                total_bonus: 0,
                total_pool: 0,
            })
    }

    /// Sum of all shares on one team of a game
    pub fn get_team_pool(env: Env, game: Game, team: TeamId) -> i128 {
        env.storage()
            .persistent()
            .get(&DataKey::TeamPool(game, team))
            .unwrap_or(0)
    }

    pub fn get_settlement(env: Env, game: Game) -> Option<Settlement> {
        env.storage().persistent().get(&DataKey::Settlement(game))
    }
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

fn require_owner(env: &Env, caller: &Address) -> Result<(), BettingError> {
    let owner: Address = env
        .storage()
        .instance()
        .get(&DataKey::Owner)
        .ok_or(BettingError::NotInitialized)?;
    caller.require_auth();
    if *caller != owner {
        return Err(BettingError::Unauthorized);
    }
    Ok(())
}

fn get_config(env: &Env) -> Result<TournamentConfig, BettingError> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(BettingError::NotInitialized)
}

fn get_limits(env: &Env) -> Result<BetLimits, BettingError> {
    env.storage()
        .instance()
        .get(&DataKey::Limits)
        .ok_or(BettingError::NotInitialized)
}

fn get_bonus_reserve(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::BonusReserve)
        .unwrap_or(0)
}

fn get_event(env: &Env, config: &TournamentConfig, game: Game) -> Option<EventInfo> {
    RegistryClient::new(env, &config.event_registry).get_event(&game)
}

fn declared_winner(info: Option<EventInfo>) -> Result<TeamId, BettingError> {
    match info {
        Some(EventInfo {
            winner_declared: true,
            winning_team: Some(team),
            ..
        }) => Ok(team),
        _ => Err(BettingError::GameNotSettled),
    }
}

/// Stored settlement, or a fresh one snapshotting the winning team's pool.
fn settlement_for(env: &Env, game: Game, winning_team: TeamId) -> Settlement {
    env.storage()
        .persistent()
        .get(&DataKey::Settlement(game))
        .unwrap_or(Settlement {
            winning_team,
            winning_shares: WorldCupBetting::get_team_pool(env.clone(), game, winning_team),
            claimed_shares: 0,
            paid_out: 0,
            swept: 0,
        })
}

fn schedule(
    env: &Env,
    game: Game,
    team_a: TeamId,
    team_b: TeamId,
    betting_deadline: u64,
) -> Result<(), BettingError> {
    if betting_deadline <= env.ledger().timestamp() {
        return Err(BettingError::InvalidSchedule);
    }
    if team_a == team_b {
        return Err(BettingError::InvalidTeam);
    }

    let config = get_config(env)?;
    RegistryClient::new(env, &config.event_registry).update_event_info(
        &env.current_contract_address(),
        &game,
        &team_a,
        &team_b,
        &betting_deadline,
    );

    Ok(())
}

fn validate_amount(limits: &BetLimits, amount: i128) -> Result<(), BettingError> {
    if amount <= 0 {
        return Err(BettingError::ZeroAmount);
    }
    if amount > limits.max_bet {
        return Err(BettingError::AmountTooLarge);
    }
    if amount < limits.min_bet {
        return Err(BettingError::AmountTooSmall);
    }
    Ok(())
}

fn validate_limits(limits: &BetLimits) -> Result<(), BettingError> {
    if limits.min_bet <= 0
        || limits.max_bet < limits.min_bet
        || limits.bonus_bps > BASIS_POINTS_DIVISOR
    {
        return Err(BettingError::InvalidLimits);
    }

    // A dust-sized bet must still earn a non-zero bonus
    if limits.bonus_bps > 0 && apply_bps(limits.min_bet, limits.bonus_bps) == Some(0) {
        return Err(BettingError::InvalidLimits);
    }

    Ok(())
}

fn set_persistent<V>(env: &Env, key: &DataKey, value: &V)
where
    V: IntoVal<Env, Val>,
{
    env.storage().persistent().set(key, value);
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_BUMP_LEDGERS, PERSISTENT_BUMP_LEDGERS);
}

/// Token transfer mapped onto `TransferFailed`. Callers run it after all
/// storage writes; an error reverts the whole invocation.
fn transfer(
    env: &Env,
    token: &Address,
    from: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), BettingError> {
    match TokenClient::new(env, token).try_transfer(from, to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(BettingError::TransferFailed),
    }
}
