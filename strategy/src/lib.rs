#![no_std]

multiversx_sc::imports!();

pub mod accrual;
pub mod cache;
pub mod config;
pub mod fees;
pub mod integrations;
pub mod ledger;
pub mod positions;
pub mod receipt;
pub mod staking;
pub mod storage;
pub mod validation;
pub mod views;

pub use common_errors::*;
pub use common_structs::*;

use common_constants::WAD_PRECISION;

/// Yield strategy adapter.
///
/// Deposits collateral into one external yield source and keeps, per
/// depositor, the principal invested against the shares held. Withdrawals
/// return principal plus the proportional yield, net of the performance fee
/// set by the fee manager.
#[multiversx_sc::contract]
pub trait Strategy:
    positions::deposit::DepositModule
    + positions::withdraw::WithdrawModule
    + positions::rewards::RewardsModule
    + integrations::IntegrationsModule
    + integrations::lending::LendingIntegrationModule
    + integrations::pendle::PendleIntegrationModule
    + integrations::dinero::DineroIntegrationModule
    + integrations::reservoir::ReservoirIntegrationModule
    + integrations::elixir::ElixirIntegrationModule
    + storage::Storage
    + validation::ValidationModule
    + ledger::LedgerModule
    + receipt::ReceiptModule
    + fees::FeesModule
    + staking::StakingModule
    + accrual::RewardAccrualModule
    + config::ConfigModule
    + views::ViewsModule
    + common_math::SharedMathModule
    + common_events::strategy_events::StrategyEventsModule
    + multiversx_sc_modules::pause::PauseModule
{
    /// Initializes the adapter wiring.
    ///
    /// # Arguments
    /// - `kind`: Yield source family, selects the integration shim.
    /// - `token_in`: Asset accepted from and returned to depositors.
    /// - `token_out`: Share or position token of the source.
    /// - `shares_decimals`: Decimals of the source shares, also the ratio precision.
    /// - `yield_source`: Address of the pool, router or vault.
    /// - `fee_manager`: Fee policy contract queried on every settlement.
    /// - `strategy_manager`: Orchestrator allowed to operate the adapter.
    /// - `reward_tokens`: Tokens of the source reward stream, if any.
    #[init]
    fn init(
        &self,
        kind: YieldSourceKind,
        token_in: EgldOrEsdtTokenIdentifier,
        token_out: TokenIdentifier,
        shares_decimals: usize,
        yield_source: ManagedAddress,
        fee_manager: ManagedAddress,
        strategy_manager: ManagedAddress,
        reward_tokens: MultiValueEncoded<TokenIdentifier>,
    ) {
        require!(token_in.is_valid(), ERROR_INVALID_TOKEN);
        require!(token_out.is_valid_esdt_identifier(), ERROR_INVALID_TOKEN);
        require!(
            shares_decimals <= 2 * WAD_PRECISION,
            ERROR_INVALID_SHARES_DECIMALS
        );
        self.require_non_zero_address(&yield_source);
        self.require_non_zero_address(&fee_manager);
        self.require_non_zero_address(&strategy_manager);

        let reward_tokens = reward_tokens.to_vec();
        for token in reward_tokens.iter() {
            require!(token.is_valid_esdt_identifier(), ERROR_INVALID_TOKEN);
        }

        self.strategy_config().set(StrategyConfig {
            kind,
            token_in,
            token_out,
            reward_tokens,
            shares_decimals,
            yield_source,
        });
        self.fee_manager_address().set(&fee_manager);
        self.strategy_manager().set(&strategy_manager);
    }

    #[upgrade]
    fn upgrade(&self) {}
}
