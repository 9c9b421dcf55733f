//! Tests for boundary conditions and unusual pools.

use super::{declare_winner, funded_user, setup, USER_FUNDS};
use crate::errors::BettingError;
use soroban_sdk::{testutils::Address as _, Address, Env, Vec};
use world_cup_common::{Game, Pick, ARGENTINA, CROATIA, FRANCE, ONE_UNIT};

#[test]
fn test_nobody_backed_the_winner() {
    let env = Env::default();
    let s = setup(&env);
    let alice = funded_user(&env, &s);
    let bob = funded_user(&env, &s);
    let treasury = Address::generate(&env);

    s.client.bet(&alice, &Pick::FinalFrance, &ONE_UNIT);
    s.client.bet(&bob, &Pick::FinalFrance, &(2 * ONE_UNIT));

    declare_winner(&env, &s, Game::Final, ARGENTINA);

    assert_eq!(s.client.try_reward_final(&alice), Err(Ok(BettingError::NoShare)));
    assert_eq!(s.client.quote_payout(&bob, &Game::Final), 0);

    // With no winning shares the whole pool is sweepable at once
    let swept = s.client.sweep_remainder(&s.owner, &Game::Final, &treasury);
    assert_eq!(swept, 3_150_000_000_000_000_000);
    assert_eq!(s.token.balance(&treasury), swept);

    let settlement = s.client.get_settlement(&Game::Final).unwrap();
    assert_eq!(settlement.winning_shares, 0);
    assert_eq!(settlement.swept, swept);
}

#[test]
fn test_empty_game_has_nothing_to_sweep() {
    let env = Env::default();
    let s = setup(&env);

    declare_winner(&env, &s, Game::SemiFinalA, CROATIA);

    let result = s.client.try_sweep_remainder(&s.owner, &Game::SemiFinalA, &s.owner);
    assert_eq!(result, Err(Ok(BettingError::NothingToSweep)));
}

#[test]
fn test_one_sided_pool_returns_shares() {
    let env = Env::default();
    let s = setup(&env);
    let alice = funded_user(&env, &s);
    let bob = funded_user(&env, &s);

    s.client.bet(&alice, &Pick::FinalArgentina, &ONE_UNIT);
    s.client.bet(&bob, &Pick::FinalArgentina, &(3 * ONE_UNIT));

    declare_winner(&env, &s, Game::Final, ARGENTINA);

    assert_eq!(s.client.reward_final(&alice), 1_050_000_000_000_000_000);
    assert_eq!(s.client.reward_final(&bob), 3_150_000_000_000_000_000);
    assert_eq!(s.token.balance(&alice), USER_FUNDS + ONE_UNIT / 20);
}

#[test]
fn test_payouts_never_exceed_pool() {
    let env = Env::default();
    let s = setup(&env);
    let treasury = Address::generate(&env);

    let stakes = [
        ONE_UNIT / 3,
        ONE_UNIT / 7,
        2 * ONE_UNIT / 11,
        ONE_UNIT + 13,
        5 * ONE_UNIT / 9,
    ];
    let mut winners = Vec::new(&env);
    for stake in stakes {
        let user = funded_user(&env, &s);
        s.client.bet(&user, &Pick::SemiFinalBFrance, &stake);
        winners.push_back(user);
    }
    let loser = funded_user(&env, &s);
    s.client.bet(&loser, &Pick::SemiFinalBMorocco, &(7 * ONE_UNIT / 3));

    declare_winner(&env, &s, Game::SemiFinalB, FRANCE);

    let total_pool = s.client.get_game_pool(&Game::SemiFinalB).total_pool;
    let mut paid = 0;
    for user in winners.iter() {
        paid += s.client.settle(&user, &Game::SemiFinalB);
    }
    assert!(paid <= total_pool);

    let remainder = total_pool - paid;
    let result = s.client.try_sweep_remainder(&s.owner, &Game::SemiFinalB, &treasury);
    if remainder > 0 {
        assert_eq!(result, Ok(Ok(remainder)));
    } else {
        assert_eq!(result, Err(Ok(BettingError::NothingToSweep)));
    }

    let settlement = s.client.get_settlement(&Game::SemiFinalB).unwrap();
    assert_eq!(settlement.paid_out + settlement.swept, total_pool);
}

#[test]
fn test_games_are_isolated() {
    let env = Env::default();
    let s = setup(&env);
    let alice = funded_user(&env, &s);

    s.client.bet(&alice, &Pick::SemiFinalAArgentina, &ONE_UNIT);
    s.client.bet(&alice, &Pick::FinalArgentina, &(2 * ONE_UNIT));

    declare_winner(&env, &s, Game::SemiFinalA, ARGENTINA);

    assert_eq!(s.client.settle(&alice, &Game::SemiFinalA), 1_050_000_000_000_000_000);

    // The final share is untouched by the semi-final claim
    assert_eq!(
        s.client.get_user_share_amount(&alice, &Game::Final, &ARGENTINA),
        2_100_000_000_000_000_000
    );
    assert_eq!(s.client.get_game_pool(&Game::SemiFinalB).total_pool, 0);
    assert_eq!(s.client.try_reward_final(&alice), Err(Ok(BettingError::GameNotSettled)));
    assert_eq!(s.client.get_settlement(&Game::Final), None);
}

#[test]
fn test_repeated_max_bets() {
    let env = Env::default();
    let s = setup(&env);
    let whale = funded_user(&env, &s);
    let max_bet = s.client.get_bet_limits().unwrap().max_bet;

    for _ in 0..5 {
        s.client.bet(&whale, &Pick::FinalFrance, &max_bet);
    }

    assert_eq!(
        s.client.get_user_share_amount(&whale, &Game::Final, &FRANCE),
        52_500_000_000_000_000_000
    );
    assert_eq!(s.client.get_bonus_reserve(), 2_500_000_000_000_000_000);

    declare_winner(&env, &s, Game::Final, FRANCE);
    assert_eq!(s.client.reward_final(&whale), 52_500_000_000_000_000_000);
    assert_eq!(s.token.balance(&whale), USER_FUNDS + 2_500_000_000_000_000_000);
}

#[test]
fn test_bonus_reserve_runs_dry() {
    let env = Env::default();
    let s = setup(&env);
    let whale = funded_user(&env, &s);
    let max_bet = s.client.get_bet_limits().unwrap().max_bet;

    // 10 max bets draw exactly the 5 unit reserve
    for _ in 0..10 {
        s.client.bet(&whale, &Pick::SemiFinalAArgentina, &max_bet);
    }
    assert_eq!(s.client.get_bonus_reserve(), 0);

    let result = s.client.try_bet(&whale, &Pick::SemiFinalACroatia, &ONE_UNIT);
    assert_eq!(result, Err(Ok(BettingError::InsufficientBonusReserve)));

    s.token_sac.mint(&s.owner, &ONE_UNIT);
    s.token_sac.mint(&whale, &ONE_UNIT);
    s.client.fund_bonus_reserve(&s.owner, &ONE_UNIT);
    s.client.bet(&whale, &Pick::SemiFinalACroatia, &ONE_UNIT);
}
