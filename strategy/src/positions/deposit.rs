multiversx_sc::imports!();

use common_errors::ERROR_NO_SHARES_MINTED;

use crate::{accrual, cache::Cache, integrations, ledger, receipt, staking, storage, validation};

#[multiversx_sc::module]
pub trait DepositModule:
    storage::Storage
    + validation::ValidationModule
    + ledger::LedgerModule
    + receipt::ReceiptModule
    + staking::StakingModule
    + accrual::RewardAccrualModule
    + integrations::IntegrationsModule
    + integrations::lending::LendingIntegrationModule
    + integrations::pendle::PendleIntegrationModule
    + integrations::dinero::DineroIntegrationModule
    + integrations::reservoir::ReservoirIntegrationModule
    + integrations::elixir::ElixirIntegrationModule
    + common_math::SharedMathModule
    + common_events::strategy_events::StrategyEventsModule
    + multiversx_sc_modules::pause::PauseModule
{
    /// Invests the attached payment in the yield source on behalf of `depositor`.
    ///
    /// The shares credited come from the measured growth of the adapter
    /// position, whatever the source reports.
    ///
    /// # Arguments
    /// - `depositor`: Owner of the ledger entry credited.
    /// - `aux_data`: Source specific data, a minimum PT output for Pendle.
    ///
    /// # Returns
    /// - `(shares_minted, amount)`
    ///
    /// # Errors
    /// - `ERROR_ONLY_STRATEGY_MANAGER`, `ERROR_ASSET_MISMATCH`, `ERROR_INVALID_AMOUNT`
    /// - `ERROR_NO_SHARES_MINTED` when the position did not grow.
    #[payable]
    #[endpoint(deposit)]
    fn deposit(
        &self,
        depositor: ManagedAddress,
        aux_data: ManagedBuffer,
    ) -> MultiValue2<BigUint, BigUint> {
        self.lock_operation();
        self.require_strategy_manager();
        self.require_not_paused();
        self.require_rewards_staking_set();
        self.require_non_zero_address(&depositor);

        let payment = self.call_value().egld_or_single_esdt();
        let mut cache = Cache::new(self);
        self.require_token_in(&cache.config, &payment.token_identifier);
        self.require_amount_greater_than_zero(&payment.amount);
        self.require_valid_aux_data(&cache.config, &aux_data);

        let mut recipient = self.get_recipient(&depositor);
        self.harvest_rewards(&cache.config, &cache.total_shares);
        self.checkpoint_rewards(&cache.config, &depositor, &recipient.total_shares);

        let shares_minted = self.invest(
            &cache.config,
            &payment.amount,
            &aux_data,
            &cache.total_shares,
        );
        require!(shares_minted > 0u32, ERROR_NO_SHARES_MINTED);

        recipient.record_deposit(&payment.amount, &shares_minted);
        self.store_recipient(&depositor, &recipient);
        cache.record_deposit(&payment.amount, &shares_minted);

        self.mint_receipt(&depositor, &shares_minted, cache.shares_decimals());
        self.register_staking_deposit(&depositor, &shares_minted);

        self.deposit_event(
            &payment.token_identifier,
            &payment.amount,
            &shares_minted,
            &depositor,
        );

        self.unlock_operation();

        (shares_minted, payment.amount).into()
    }
}
