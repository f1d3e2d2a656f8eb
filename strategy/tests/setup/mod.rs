use crate::constants::*;

use common_constants::WAD;
use common_proxies::{
    proxy_fee_manager, proxy_rewards_staking, proxy_strategy, proxy_yield_source_mock,
};
use common_structs::{RecipientInfo, StakerInfo, YieldSourceKind};
use multiversx_sc::types::{
    BigInt, BigUint, EgldOrEsdtTokenIdentifier, ManagedAddress, ManagedBuffer, ManagedVec,
    MultiValueEncoded, ReturnsNewManagedAddress, ReturnsResult, TestTokenIdentifier,
    TokenIdentifier,
};
use multiversx_sc_scenario::{
    api::StaticApi,
    imports::{ExpectMessage, TestAddress},
    ScenarioTxRun, ScenarioWorld,
};

pub fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();

    blockchain.register_contract(STRATEGY_PATH, strategy::ContractBuilder);
    blockchain.register_contract(FEE_MANAGER_PATH, fee_manager::ContractBuilder);
    blockchain.register_contract(REWARDS_STAKING_PATH, rewards_staking::ContractBuilder);
    blockchain.register_contract(YIELD_SOURCE_MOCK_PATH, yield_source_mock::ContractBuilder);

    blockchain
}

/// `amount` whole tokens expressed in base units.
pub fn units(amount: u64, decimals: usize) -> BigUint<StaticApi> {
    BigUint::from(amount) * BigUint::from(10u64).pow(decimals as u32)
}

pub fn usdc(amount: u64) -> BigUint<StaticApi> {
    units(amount, USDC_DECIMALS)
}

pub fn egld(amount: u64) -> BigUint<StaticApi> {
    units(amount, EGLD_DECIMALS)
}

/// Exchange rate of `bps` basis points of one, in WAD.
pub fn rate_bps(bps: u64) -> BigUint<StaticApi> {
    BigUint::from(WAD) * BigUint::from(bps) / BigUint::from(10_000u64)
}

pub fn error_message(error: &[u8]) -> ExpectMessage<'_> {
    ExpectMessage(core::str::from_utf8(error).unwrap())
}

pub struct StrategyTestState {
    pub world: ScenarioWorld,
    pub kind: YieldSourceKind,
    pub strategy: ManagedAddress<StaticApi>,
    pub fee_manager: ManagedAddress<StaticApi>,
    pub rewards_staking: ManagedAddress<StaticApi>,
    pub yield_source: ManagedAddress<StaticApi>,
}

impl StrategyTestState {
    /// Fully wired adapter of `kind`: fee manager, yield source and rewards staking.
    pub fn new(kind: YieldSourceKind) -> Self {
        let mut state = Self::without_rewards_staking(kind);
        state.attach_rewards_staking();
        state
    }

    pub fn without_rewards_staking(kind: YieldSourceKind) -> Self {
        let mut world = world();
        world.current_block().block_timestamp(0);
        setup_accounts(&mut world);

        let fee_manager = setup_fee_manager(&mut world);
        let yield_source = setup_yield_source(&mut world, kind);
        let strategy = setup_strategy(&mut world, kind, &yield_source, &fee_manager);

        Self {
            world,
            kind,
            strategy,
            fee_manager,
            rewards_staking: ManagedAddress::zero(),
            yield_source,
        }
    }

    pub fn attach_rewards_staking(&mut self) {
        self.rewards_staking = self
            .world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(proxy_rewards_staking::RewardsStakingProxy)
            .init(
                &self.strategy,
                INCENTIVE_TOKEN.to_token_identifier(),
                REWARDS_DURATION,
            )
            .code(REWARDS_STAKING_PATH)
            .returns(ReturnsNewManagedAddress)
            .run();

        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.strategy)
            .typed(proxy_strategy::StrategyProxy)
            .set_rewards_staking(&self.rewards_staking)
            .run();
    }

    pub fn token_in(&self) -> EgldOrEsdtTokenIdentifier<StaticApi> {
        token_in_of(self.kind)
    }

    pub fn deposit(
        &mut self,
        depositor: TestAddress,
        amount: BigUint<StaticApi>,
    ) -> (BigUint<StaticApi>, BigUint<StaticApi>) {
        self.deposit_with_aux(depositor, amount, ManagedBuffer::new())
    }

    pub fn deposit_with_aux(
        &mut self,
        depositor: TestAddress,
        amount: BigUint<StaticApi>,
        aux_data: ManagedBuffer<StaticApi>,
    ) -> (BigUint<StaticApi>, BigUint<StaticApi>) {
        let token = self.token_in();
        self.world
            .tx()
            .from(MANAGER_ADDRESS)
            .to(&self.strategy)
            .typed(proxy_strategy::StrategyProxy)
            .deposit(depositor.to_managed_address(), aux_data)
            .egld_or_single_esdt(&token, 0u64, &amount)
            .returns(ReturnsResult)
            .run()
            .into_tuple()
    }

    /// Deposit attempt with an arbitrary caller and payment, expected to fail.
    pub fn deposit_error(
        &mut self,
        caller: TestAddress,
        depositor: TestAddress,
        token: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
        aux_data: ManagedBuffer<StaticApi>,
        error: &[u8],
    ) {
        self.world
            .tx()
            .from(caller)
            .to(&self.strategy)
            .typed(proxy_strategy::StrategyProxy)
            .deposit(depositor.to_managed_address(), aux_data)
            .egld_or_single_esdt(
                &EgldOrEsdtTokenIdentifier::esdt(token.to_token_identifier()),
                0u64,
                &amount,
            )
            .returns(error_message(error))
            .run();
    }

    pub fn withdraw(
        &mut self,
        depositor: TestAddress,
        shares: BigUint<StaticApi>,
    ) -> (
        BigUint<StaticApi>,
        BigUint<StaticApi>,
        BigInt<StaticApi>,
        BigUint<StaticApi>,
    ) {
        let token = self.token_in();
        self.world
            .tx()
            .from(MANAGER_ADDRESS)
            .to(&self.strategy)
            .typed(proxy_strategy::StrategyProxy)
            .withdraw(shares, depositor.to_managed_address(), token, ManagedBuffer::new())
            .returns(ReturnsResult)
            .run()
            .into_tuple()
    }

    pub fn withdraw_error(
        &mut self,
        caller: TestAddress,
        depositor: TestAddress,
        shares: BigUint<StaticApi>,
        asset: EgldOrEsdtTokenIdentifier<StaticApi>,
        error: &[u8],
    ) {
        self.world
            .tx()
            .from(caller)
            .to(&self.strategy)
            .typed(proxy_strategy::StrategyProxy)
            .withdraw(shares, depositor.to_managed_address(), asset, ManagedBuffer::new())
            .returns(error_message(error))
            .run();
    }

    pub fn claim_rewards(
        &mut self,
        depositor: TestAddress,
    ) -> (
        ManagedVec<StaticApi, BigUint<StaticApi>>,
        ManagedVec<StaticApi, TokenIdentifier<StaticApi>>,
    ) {
        self.world
            .tx()
            .from(MANAGER_ADDRESS)
            .to(&self.strategy)
            .typed(proxy_strategy::StrategyProxy)
            .claim_rewards(depositor.to_managed_address(), ManagedBuffer::new())
            .returns(ReturnsResult)
            .run()
            .into_tuple()
    }

    pub fn claim_rewards_error(&mut self, depositor: TestAddress, error: &[u8]) {
        self.world
            .tx()
            .from(MANAGER_ADDRESS)
            .to(&self.strategy)
            .typed(proxy_strategy::StrategyProxy)
            .claim_rewards(depositor.to_managed_address(), ManagedBuffer::new())
            .returns(error_message(error))
            .run();
    }

    pub fn pause(&mut self) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.strategy)
            .typed(proxy_strategy::StrategyProxy)
            .pause_endpoint()
            .run();
    }

    pub fn unpause(&mut self) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.strategy)
            .typed(proxy_strategy::StrategyProxy)
            .unpause_endpoint()
            .run();
    }

    /// Simulates yield accrual (or loss) at the source.
    pub fn set_exchange_rate(&mut self, rate: BigUint<StaticApi>) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.yield_source)
            .typed(proxy_yield_source_mock::YieldSourceMockProxy)
            .set_exchange_rate(rate)
            .run();
    }

    /// Makes the source call back into the adapter from inside supply and withdraw.
    pub fn set_source_reentrancy(&mut self, enabled: bool) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.yield_source)
            .typed(proxy_yield_source_mock::YieldSourceMockProxy)
            .set_reentrancy(enabled)
            .run();
    }

    /// Rewards the source will pay out to the adapter on its next claim.
    pub fn set_pending_rewards(&mut self, amount: BigUint<StaticApi>) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.yield_source)
            .typed(proxy_yield_source_mock::YieldSourceMockProxy)
            .set_pending_rewards(&self.strategy, amount)
            .run();
    }

    pub fn set_custom_fee(&mut self, depositor: TestAddress, fee_bps: u64) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.fee_manager)
            .typed(proxy_fee_manager::FeeManagerProxy)
            .set_custom_fee(
                &self.strategy,
                depositor.to_managed_address(),
                BigUint::from(fee_bps),
            )
            .run();
    }

    pub fn recipient_info(&mut self, depositor: TestAddress) -> RecipientInfo<StaticApi> {
        self.world
            .query()
            .to(&self.strategy)
            .typed(proxy_strategy::StrategyProxy)
            .recipient_info(depositor.to_managed_address())
            .returns(ReturnsResult)
            .run()
    }

    pub fn receipt_balance(&mut self, depositor: TestAddress) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.strategy)
            .typed(proxy_strategy::StrategyProxy)
            .receipt_balance(depositor.to_managed_address())
            .returns(ReturnsResult)
            .run()
    }

    pub fn receipt_supply(&mut self) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.strategy)
            .typed(proxy_strategy::StrategyProxy)
            .receipt_supply()
            .returns(ReturnsResult)
            .run()
    }

    pub fn total_investments(&mut self) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.strategy)
            .typed(proxy_strategy::StrategyProxy)
            .total_investments()
            .returns(ReturnsResult)
            .run()
    }

    pub fn total_shares(&mut self) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.strategy)
            .typed(proxy_strategy::StrategyProxy)
            .total_shares()
            .returns(ReturnsResult)
            .run()
    }

    pub fn position_balance(&mut self) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.strategy)
            .typed(proxy_strategy::StrategyProxy)
            .get_position_balance()
            .returns(ReturnsResult)
            .run()
    }

    pub fn pending_rewards(
        &mut self,
        depositor: TestAddress,
    ) -> ManagedVec<StaticApi, BigUint<StaticApi>> {
        self.world
            .query()
            .to(&self.strategy)
            .typed(proxy_strategy::StrategyProxy)
            .pending_rewards(depositor.to_managed_address())
            .returns(ReturnsResult)
            .run()
    }

    pub fn staker_info(&mut self, depositor: TestAddress) -> StakerInfo<StaticApi> {
        self.world
            .query()
            .to(&self.rewards_staking)
            .typed(proxy_rewards_staking::RewardsStakingProxy)
            .staker_info(depositor.to_managed_address())
            .returns(ReturnsResult)
            .run()
    }

    pub fn assert_recipient(
        &mut self,
        depositor: TestAddress,
        invested_amount: BigUint<StaticApi>,
        total_shares: BigUint<StaticApi>,
    ) {
        let info = self.recipient_info(depositor);
        assert_eq!(info.invested_amount, invested_amount);
        assert_eq!(info.total_shares, total_shares);
    }

    pub fn assert_token_balance(
        &mut self,
        address: TestAddress,
        token: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
    ) {
        self.world.check_account(address).esdt_balance(token, amount);
    }

    pub fn assert_strategy_token_balance(
        &mut self,
        token: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
    ) {
        self.world
            .check_account(self.strategy.clone())
            .esdt_balance(token, amount);
    }
}

pub fn token_in_of(kind: YieldSourceKind) -> EgldOrEsdtTokenIdentifier<StaticApi> {
    match kind {
        YieldSourceKind::Dinero => EgldOrEsdtTokenIdentifier::egld(),
        _ => EgldOrEsdtTokenIdentifier::esdt(USDC_TOKEN.to_token_identifier()),
    }
}

fn token_out_of(kind: YieldSourceKind) -> TestTokenIdentifier<'static> {
    match kind {
        YieldSourceKind::Dinero => APXEGLD_TOKEN,
        _ => XUSDC_TOKEN,
    }
}

fn shares_decimals_of(kind: YieldSourceKind) -> usize {
    match kind {
        YieldSourceKind::Dinero => EGLD_DECIMALS,
        _ => USDC_DECIMALS,
    }
}

pub fn setup_accounts(world: &mut ScenarioWorld) {
    world
        .account(OWNER_ADDRESS)
        .nonce(1)
        .esdt_balance(INCENTIVE_TOKEN, usdc(1_000_000));

    world
        .account(MANAGER_ADDRESS)
        .nonce(1)
        .balance(egld(1_000))
        .esdt_balance(USDC_TOKEN, usdc(1_000_000))
        .esdt_balance(REWARD_TOKEN, usdc(1_000));

    world
        .account(STRANGER)
        .nonce(1)
        .esdt_balance(USDC_TOKEN, usdc(1_000));

    world.account(FEE_COLLECTOR).nonce(1);
    world.account(ALICE).nonce(1);
    world.account(BOB).nonce(1);
}

pub fn setup_fee_manager(world: &mut ScenarioWorld) -> ManagedAddress<StaticApi> {
    world
        .tx()
        .from(OWNER_ADDRESS)
        .typed(proxy_fee_manager::FeeManagerProxy)
        .init(
            BigUint::from(DEFAULT_FEE_BPS),
            FEE_COLLECTOR.to_managed_address(),
        )
        .code(FEE_MANAGER_PATH)
        .returns(ReturnsNewManagedAddress)
        .run()
}

/// Deploys the simulated source and pre-funds it so it can pay out yield.
pub fn setup_yield_source(
    world: &mut ScenarioWorld,
    kind: YieldSourceKind,
) -> ManagedAddress<StaticApi> {
    let yield_source = world
        .tx()
        .from(OWNER_ADDRESS)
        .typed(proxy_yield_source_mock::YieldSourceMockProxy)
        .init(
            token_in_of(kind),
            token_out_of(kind).to_token_identifier(),
            REWARD_TOKEN.to_token_identifier(),
        )
        .code(YIELD_SOURCE_MOCK_PATH)
        .returns(ReturnsNewManagedAddress)
        .run();

    world.set_esdt_balance(yield_source.clone(), USDC_TOKEN.as_bytes(), usdc(1_000_000));
    world.set_esdt_balance(yield_source.clone(), XUSDC_TOKEN.as_bytes(), usdc(1_000_000));
    world.set_esdt_balance(yield_source.clone(), APXEGLD_TOKEN.as_bytes(), egld(1_000_000));
    world.set_esdt_balance(yield_source.clone(), REWARD_TOKEN.as_bytes(), usdc(1_000_000));
    world.set_egld_balance(yield_source.clone(), egld(1_000_000));

    yield_source
}

pub fn setup_strategy(
    world: &mut ScenarioWorld,
    kind: YieldSourceKind,
    yield_source: &ManagedAddress<StaticApi>,
    fee_manager: &ManagedAddress<StaticApi>,
) -> ManagedAddress<StaticApi> {
    let mut reward_tokens = MultiValueEncoded::new();
    if kind.supports_rewards() {
        reward_tokens.push(REWARD_TOKEN.to_token_identifier());
    }

    world
        .tx()
        .from(OWNER_ADDRESS)
        .typed(proxy_strategy::StrategyProxy)
        .init(
            kind,
            token_in_of(kind),
            token_out_of(kind).to_token_identifier(),
            shares_decimals_of(kind),
            yield_source,
            fee_manager,
            MANAGER_ADDRESS.to_managed_address(),
            reward_tokens,
        )
        .code(STRATEGY_PATH)
        .returns(ReturnsNewManagedAddress)
        .run()
}
