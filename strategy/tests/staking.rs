use common_proxies::proxy_rewards_staking;
use common_structs::YieldSourceKind;
use multiversx_sc::types::{BigUint, ReturnsResult};
use multiversx_sc_scenario::{api::StaticApi, imports::TestAddress, ScenarioTxRun};

pub mod constants;
pub mod setup;
use constants::*;
use setup::*;

fn notify_rewards(state: &mut StrategyTestState, amount: BigUint<StaticApi>) {
    state
        .world
        .tx()
        .from(OWNER_ADDRESS)
        .to(&state.rewards_staking)
        .typed(proxy_rewards_staking::RewardsStakingProxy)
        .notify_reward_amount()
        .single_esdt(&INCENTIVE_TOKEN.to_token_identifier(), 0, &amount)
        .run();
}

fn earned(state: &mut StrategyTestState, depositor: TestAddress) -> BigUint<StaticApi> {
    state
        .world
        .query()
        .to(&state.rewards_staking)
        .typed(proxy_rewards_staking::RewardsStakingProxy)
        .earned(depositor.to_managed_address())
        .returns(ReturnsResult)
        .run()
}

/// Strategy shares act as staking weight for the incentive stream.
#[test]
fn staking_rewards_follow_strategy_shares() {
    let mut state = StrategyTestState::new(YieldSourceKind::Aave);
    state.deposit(ALICE, usdc(100));
    state.deposit(BOB, usdc(300));
    notify_rewards(&mut state, BigUint::from(1_000_000u64));

    state.world.current_block().block_timestamp(REWARDS_DURATION);

    assert_eq!(earned(&mut state, ALICE), BigUint::from(250_000u64));
    assert_eq!(earned(&mut state, BOB), BigUint::from(750_000u64));

    let claimed = state
        .world
        .tx()
        .from(ALICE)
        .to(&state.rewards_staking)
        .typed(proxy_rewards_staking::RewardsStakingProxy)
        .claim_rewards()
        .returns(ReturnsResult)
        .run();
    assert_eq!(claimed, BigUint::from(250_000u64));
    state.assert_token_balance(ALICE, INCENTIVE_TOKEN, BigUint::from(250_000u64));
}

#[test]
fn staking_weight_drops_on_withdraw() {
    let mut state = StrategyTestState::new(YieldSourceKind::Aave);
    state.deposit(ALICE, usdc(100));
    state.deposit(BOB, usdc(300));
    notify_rewards(&mut state, BigUint::from(1_000_000u64));

    state.world.current_block().block_timestamp(500);
    state.withdraw(ALICE, usdc(100));
    assert_eq!(state.staker_info(ALICE).balance, BigUint::zero());

    state.world.current_block().block_timestamp(REWARDS_DURATION);

    // accrued before the exit is kept
    assert_eq!(earned(&mut state, ALICE), BigUint::from(125_000u64));
    assert_eq!(earned(&mut state, BOB), BigUint::from(874_999u64));
}
