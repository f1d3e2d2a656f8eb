use common_errors::{
    ERROR_INVALID_REWARD_TOKEN, ERROR_INVALID_TOKEN, ERROR_ONLY_STRATEGY,
    ERROR_REWARD_PERIOD_NOT_FINISHED,
};
use common_proxies::proxy_rewards_staking;
use multiversx_sc::types::{
    BigUint, ManagedAddress, ReturnsNewManagedAddress, ReturnsResult, TestTokenIdentifier,
    TokenIdentifier,
};
use multiversx_sc_scenario::{
    api::StaticApi,
    imports::{ExpectMessage, MxscPath, TestAddress},
    ScenarioTxRun, ScenarioWorld,
};

const REWARDS_STAKING_PATH: MxscPath = MxscPath::new("output/rewards-staking.mxsc.json");

const OWNER_ADDRESS: TestAddress = TestAddress::new("owner");
const STRATEGY_ADDRESS: TestAddress = TestAddress::new("strategy");
const ALICE: TestAddress = TestAddress::new("alice");
const BOB: TestAddress = TestAddress::new("bob");

const REWARD_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("REWARD-123456");
const OTHER_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("OTHER-123456");

const DURATION: u64 = 1_000;

struct RewardsStakingTestState {
    world: ScenarioWorld,
    staking: ManagedAddress<StaticApi>,
}

impl RewardsStakingTestState {
    fn new() -> Self {
        let mut world = ScenarioWorld::new();
        world.register_contract(REWARDS_STAKING_PATH, rewards_staking::ContractBuilder);
        world.current_block().block_timestamp(0);

        world
            .account(OWNER_ADDRESS)
            .nonce(1)
            .esdt_balance(REWARD_TOKEN, BigUint::from(100_000_000u64))
            .esdt_balance(OTHER_TOKEN, BigUint::from(100_000_000u64));
        world.account(STRATEGY_ADDRESS).nonce(1);
        world.account(ALICE).nonce(1);
        world.account(BOB).nonce(1);

        let staking = world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(proxy_rewards_staking::RewardsStakingProxy)
            .init(
                STRATEGY_ADDRESS.to_managed_address(),
                REWARD_TOKEN.to_token_identifier(),
                DURATION,
            )
            .code(REWARDS_STAKING_PATH)
            .returns(ReturnsNewManagedAddress)
            .run();

        Self { world, staking }
    }

    fn register_deposit(&mut self, depositor: TestAddress, weight: u64) {
        self.world
            .tx()
            .from(STRATEGY_ADDRESS)
            .to(&self.staking)
            .typed(proxy_rewards_staking::RewardsStakingProxy)
            .register_deposit(depositor.to_managed_address(), BigUint::from(weight))
            .run();
    }

    fn register_withdrawal(&mut self, depositor: TestAddress, weight: u64) {
        self.world
            .tx()
            .from(STRATEGY_ADDRESS)
            .to(&self.staking)
            .typed(proxy_rewards_staking::RewardsStakingProxy)
            .register_withdrawal(depositor.to_managed_address(), BigUint::from(weight))
            .run();
    }

    fn notify(&mut self, amount: u64) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.staking)
            .typed(proxy_rewards_staking::RewardsStakingProxy)
            .notify_reward_amount()
            .single_esdt(&REWARD_TOKEN.to_token_identifier(), 0, &BigUint::from(amount))
            .run();
    }

    fn earned(&mut self, depositor: TestAddress) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.staking)
            .typed(proxy_rewards_staking::RewardsStakingProxy)
            .earned(depositor.to_managed_address())
            .returns(ReturnsResult)
            .run()
    }

    fn total_supply(&mut self) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.staking)
            .typed(proxy_rewards_staking::RewardsStakingProxy)
            .total_supply()
            .returns(ReturnsResult)
            .run()
    }

    fn set_timestamp(&mut self, timestamp: u64) {
        self.world.current_block().block_timestamp(timestamp);
    }
}

#[test]
fn staking_init_rejects_invalid_reward_token() {
    let mut world = ScenarioWorld::new();
    world.register_contract(REWARDS_STAKING_PATH, rewards_staking::ContractBuilder);
    world.account(OWNER_ADDRESS).nonce(1);

    world
        .tx()
        .from(OWNER_ADDRESS)
        .typed(proxy_rewards_staking::RewardsStakingProxy)
        .init(
            STRATEGY_ADDRESS.to_managed_address(),
            TokenIdentifier::<StaticApi>::from("REWARD"),
            DURATION,
        )
        .code(REWARDS_STAKING_PATH)
        .returns(ExpectMessage(core::str::from_utf8(ERROR_INVALID_TOKEN).unwrap()))
        .run();
}

#[test]
fn staking_register_deposit_only_from_strategy() {
    let mut state = RewardsStakingTestState::new();

    state
        .world
        .tx()
        .from(ALICE)
        .to(&state.staking)
        .typed(proxy_rewards_staking::RewardsStakingProxy)
        .register_deposit(ALICE.to_managed_address(), BigUint::from(100u64))
        .returns(ExpectMessage(core::str::from_utf8(ERROR_ONLY_STRATEGY).unwrap()))
        .run();

    state
        .world
        .tx()
        .from(ALICE)
        .to(&state.staking)
        .typed(proxy_rewards_staking::RewardsStakingProxy)
        .register_withdrawal(ALICE.to_managed_address(), BigUint::from(100u64))
        .returns(ExpectMessage(core::str::from_utf8(ERROR_ONLY_STRATEGY).unwrap()))
        .run();
}

#[test]
fn staking_single_staker_accrues_linearly() {
    let mut state = RewardsStakingTestState::new();
    state.register_deposit(ALICE, 100);
    state.notify(1_000_000);

    state.set_timestamp(500);
    assert_eq!(state.earned(ALICE), BigUint::from(500_000u64));

    state.set_timestamp(1_000);
    assert_eq!(state.earned(ALICE), BigUint::from(1_000_000u64));
}

#[test]
fn staking_accrual_stops_at_period_finish() {
    let mut state = RewardsStakingTestState::new();
    state.register_deposit(ALICE, 100);
    state.notify(1_000_000);

    state.set_timestamp(5_000);
    assert_eq!(state.earned(ALICE), BigUint::from(1_000_000u64));

    let applicable = state
        .world
        .query()
        .to(&state.staking)
        .typed(proxy_rewards_staking::RewardsStakingProxy)
        .last_time_reward_applicable()
        .returns(ReturnsResult)
        .run();
    assert_eq!(applicable, DURATION);
}

#[test]
fn staking_rewards_split_by_weight() {
    let mut state = RewardsStakingTestState::new();
    state.register_deposit(ALICE, 100);
    state.register_deposit(BOB, 300);
    state.notify(1_000_000);

    state.set_timestamp(1_000);
    assert_eq!(state.earned(ALICE), BigUint::from(250_000u64));
    assert_eq!(state.earned(BOB), BigUint::from(750_000u64));
}

#[test]
fn staking_late_joiner_only_earns_after_joining() {
    let mut state = RewardsStakingTestState::new();
    state.register_deposit(ALICE, 100);
    state.notify(1_000_000);

    state.set_timestamp(500);
    state.register_deposit(BOB, 100);

    state.set_timestamp(1_000);
    // First half to Alice alone, second half split evenly
    assert_eq!(state.earned(ALICE), BigUint::from(750_000u64));
    assert_eq!(state.earned(BOB), BigUint::from(250_000u64));
}

#[test]
fn staking_withdrawal_clamps_to_balance() {
    let mut state = RewardsStakingTestState::new();
    state.register_deposit(ALICE, 100);
    state.register_deposit(BOB, 50);

    state.register_withdrawal(ALICE, 1_000);

    let info = state
        .world
        .query()
        .to(&state.staking)
        .typed(proxy_rewards_staking::RewardsStakingProxy)
        .staker_info(ALICE.to_managed_address())
        .returns(ReturnsResult)
        .run();
    assert_eq!(info.balance, BigUint::zero());
    assert_eq!(state.total_supply(), BigUint::from(50u64));
}

#[test]
fn staking_withdrawal_keeps_accrued_rewards() {
    let mut state = RewardsStakingTestState::new();
    state.register_deposit(ALICE, 100);
    state.notify(1_000_000);

    state.set_timestamp(400);
    state.register_withdrawal(ALICE, 100);

    state.set_timestamp(900);
    assert_eq!(state.earned(ALICE), BigUint::from(400_000u64));
}

#[test]
fn staking_claim_pays_and_resets() {
    let mut state = RewardsStakingTestState::new();
    state.register_deposit(ALICE, 100);
    state.notify(1_000_000);

    state.set_timestamp(500);
    state
        .world
        .tx()
        .from(ALICE)
        .to(&state.staking)
        .typed(proxy_rewards_staking::RewardsStakingProxy)
        .claim_rewards()
        .run();

    state
        .world
        .check_account(ALICE)
        .esdt_balance(REWARD_TOKEN, BigUint::from(500_000u64));
    assert_eq!(state.earned(ALICE), BigUint::zero());

    state.set_timestamp(1_000);
    assert_eq!(state.earned(ALICE), BigUint::from(500_000u64));
}

#[test]
fn staking_claim_without_rewards_is_noop() {
    let mut state = RewardsStakingTestState::new();

    let claimed = state
        .world
        .tx()
        .from(ALICE)
        .to(&state.staking)
        .typed(proxy_rewards_staking::RewardsStakingProxy)
        .claim_rewards()
        .returns(ReturnsResult)
        .run();

    assert_eq!(claimed, BigUint::zero());
}

#[test]
fn staking_notify_rolls_over_leftover() {
    let mut state = RewardsStakingTestState::new();
    state.register_deposit(ALICE, 100);
    state.notify(1_000_000);

    // Half the period left: 500_000 leftover plus 1_000_000 new over a fresh window
    state.set_timestamp(500);
    state.notify(1_000_000);

    let rate = state
        .world
        .query()
        .to(&state.staking)
        .typed(proxy_rewards_staking::RewardsStakingProxy)
        .reward_rate()
        .returns(ReturnsResult)
        .run();
    assert_eq!(rate, BigUint::from(1_500u64));

    state.set_timestamp(1_500);
    assert_eq!(state.earned(ALICE), BigUint::from(2_000_000u64));
}

#[test]
fn staking_notify_rejects_wrong_token() {
    let mut state = RewardsStakingTestState::new();

    state
        .world
        .tx()
        .from(OWNER_ADDRESS)
        .to(&state.staking)
        .typed(proxy_rewards_staking::RewardsStakingProxy)
        .notify_reward_amount()
        .single_esdt(&OTHER_TOKEN.to_token_identifier(), 0, &BigUint::from(1_000u64))
        .returns(ExpectMessage(
            core::str::from_utf8(ERROR_INVALID_REWARD_TOKEN).unwrap(),
        ))
        .run();
}

#[test]
fn staking_duration_locked_during_period() {
    let mut state = RewardsStakingTestState::new();
    state.notify(1_000_000);

    state
        .world
        .tx()
        .from(OWNER_ADDRESS)
        .to(&state.staking)
        .typed(proxy_rewards_staking::RewardsStakingProxy)
        .set_rewards_duration(2_000u64)
        .returns(ExpectMessage(
            core::str::from_utf8(ERROR_REWARD_PERIOD_NOT_FINISHED).unwrap(),
        ))
        .run();

    state.set_timestamp(1_001);
    state
        .world
        .tx()
        .from(OWNER_ADDRESS)
        .to(&state.staking)
        .typed(proxy_rewards_staking::RewardsStakingProxy)
        .set_rewards_duration(2_000u64)
        .run();

    let duration = state
        .world
        .query()
        .to(&state.staking)
        .typed(proxy_rewards_staking::RewardsStakingProxy)
        .rewards_duration()
        .returns(ReturnsResult)
        .run();
    assert_eq!(duration, 2_000u64);
}
