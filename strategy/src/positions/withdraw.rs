multiversx_sc::imports!();

use common_errors::ERROR_INSUFFICIENT_SHARES;
use common_math::Rounding;
use common_structs::{RecipientInfo, WithdrawalComputation};

use crate::{
    accrual, cache::Cache, fees, integrations, ledger, receipt, staking, storage, validation,
};

#[multiversx_sc::module]
pub trait WithdrawModule:
    storage::Storage
    + validation::ValidationModule
    + ledger::LedgerModule
    + receipt::ReceiptModule
    + fees::FeesModule
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
{
    /// Redeems `shares` of `depositor` and settles principal and yield.
    ///
    /// The principal released is the depositor's invested amount scaled by the
    /// share ratio. Whatever the source returns above it is yield, charged the
    /// performance fee; a loss is passed through without fee.
    ///
    /// # Returns
    /// - `(net_amount, investment_portion, yield, fee)` where `yield` is
    ///   negative when less than the principal came back.
    ///
    /// # Errors
    /// - `ERROR_ASSET_MISMATCH`, `ERROR_INVALID_AMOUNT`
    /// - `ERROR_INSUFFICIENT_SHARES` when `shares` exceeds the depositor's shares.
    #[endpoint(withdraw)]
    fn withdraw(
        &self,
        shares: BigUint,
        depositor: ManagedAddress,
        asset: EgldOrEsdtTokenIdentifier,
        aux_data: ManagedBuffer,
    ) -> MultiValue4<BigUint, BigUint, BigInt, BigUint> {
        self.lock_operation();
        self.require_strategy_manager();
        self.require_rewards_staking_set();

        let mut cache = Cache::new(self);
        self.require_token_in(&cache.config, &asset);
        self.require_amount_greater_than_zero(&shares);
        self.require_valid_aux_data(&cache.config, &aux_data);

        let mut recipient = self.get_recipient(&depositor);
        require!(shares <= recipient.total_shares, ERROR_INSUFFICIENT_SHARES);

        self.harvest_rewards(&cache.config, &cache.total_shares);
        self.checkpoint_rewards(&cache.config, &depositor, &recipient.total_shares);

        let computation =
            self.settle_withdrawal(&cache, &recipient, &shares, &depositor, &aux_data);

        recipient.record_withdrawal(&computation.investment_portion, &shares);
        self.store_recipient(&depositor, &recipient);
        cache.record_withdrawal(&computation.investment_portion, &shares);

        self.register_staking_withdrawal(&depositor, &shares);

        let net_amount = computation.net_amount();
        self.tx()
            .to(&depositor)
            .egld_or_single_esdt(&asset, 0, &net_amount)
            .transfer_if_not_empty();

        self.withdraw_event(&asset, &depositor, &shares, &net_amount);

        self.unlock_operation();

        (
            net_amount,
            computation.investment_portion,
            computation.yield_amount,
            computation.fee,
        )
            .into()
    }

    /// Redeems from the source and splits what came back into principal,
    /// yield and fee. The fee is forwarded here; the net amount is left to the caller.
    fn settle_withdrawal(
        &self,
        cache: &Cache<Self>,
        recipient: &RecipientInfo<Self::Api>,
        shares: &BigUint,
        depositor: &ManagedAddress,
        aux_data: &ManagedBuffer,
    ) -> WithdrawalComputation<Self::Api> {
        let share_ratio = self.get_ratio(
            shares,
            &recipient.total_shares,
            cache.shares_decimals(),
            Rounding::Ceil,
        );

        self.burn_receipt(depositor, shares, cache.shares_decimals());

        let investment_portion =
            self.apply_ratio(&recipient.invested_amount, &share_ratio, Rounding::Floor);

        let units = self.redemption_units(&cache.config, shares, &cache.total_shares);
        let withdrawn_amount = self.divest(&cache.config, &units, aux_data);

        let yield_amount =
            BigInt::from(withdrawn_amount.clone()) - BigInt::from(investment_portion.clone());

        let mut computation = WithdrawalComputation {
            investment_portion,
            withdrawn_amount,
            yield_amount,
            fee: BigUint::zero(),
        };

        if computation.has_yield() {
            let gain = &computation.withdrawn_amount - &computation.investment_portion;
            let fee_bps = self.depositor_performance_fee(depositor);
            computation.fee =
                self.take_performance_fee(&cache.config.token_in, &gain, &fee_bps, depositor);
        }

        computation
    }
}
