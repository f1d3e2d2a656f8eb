multiversx_sc::imports!();

use common_errors::{ERROR_NO_POSITION, ERROR_OPERATION_NOT_SUPPORTED};

use crate::{accrual, fees, integrations, ledger, storage, validation};

#[multiversx_sc::module]
pub trait RewardsModule:
    storage::Storage
    + validation::ValidationModule
    + ledger::LedgerModule
    + fees::FeesModule
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
    /// Harvests the source reward stream and pays `depositor` its share of
    /// every reward token, net of the performance fee.
    ///
    /// # Returns
    /// - Net amounts and the matching reward tokens, in configuration order.
    ///
    /// # Errors
    /// - `ERROR_OPERATION_NOT_SUPPORTED` for sources without a reward stream.
    /// - `ERROR_NO_POSITION` when the depositor holds no shares and has nothing booked.
    #[endpoint(claimRewards)]
    fn claim_rewards(
        &self,
        depositor: ManagedAddress,
        aux_data: ManagedBuffer,
    ) -> MultiValue2<ManagedVec<BigUint>, ManagedVec<TokenIdentifier>> {
        self.lock_operation();
        self.require_strategy_manager();
        self.require_not_paused();

        let config = self.strategy_config().get();
        require!(config.has_rewards(), ERROR_OPERATION_NOT_SUPPORTED);
        self.require_valid_aux_data(&config, &aux_data);
        self.require_non_zero_address(&depositor);

        let shares = self.get_recipient(&depositor).total_shares;
        self.harvest_rewards(&config, &self.total_shares().get());
        self.checkpoint_rewards(&config, &depositor, &shares);

        let mut owed = ManagedVec::<Self::Api, BigUint>::new();
        let mut has_booked = false;
        for token in config.reward_tokens.iter() {
            let amount = self.accrued_rewards(&depositor, &token).take();
            has_booked |= amount > 0u32;
            owed.push(amount);
        }
        require!(shares > 0u32 || has_booked, ERROR_NO_POSITION);

        let mut fee_bps_opt: Option<BigUint> = None;
        let mut amounts = ManagedVec::new();
        let mut tokens = ManagedVec::new();
        for (index, token) in config.reward_tokens.iter().enumerate() {
            let gross = owed.get(index).clone_value();

            let net = if gross > 0u32 {
                let fee_bps = fee_bps_opt
                    .get_or_insert_with(|| self.depositor_performance_fee(&depositor))
                    .clone();
                let reward_token = EgldOrEsdtTokenIdentifier::esdt(token.clone_value());
                let fee = self.take_performance_fee(&reward_token, &gross, &fee_bps, &depositor);
                let net = &gross - &fee;

                self.tx()
                    .to(&depositor)
                    .single_esdt(&token, 0, &net)
                    .transfer_if_not_empty();
                net
            } else {
                gross
            };

            amounts.push(net);
            tokens.push(token.clone_value());
        }

        self.rewards_claimed_event(&depositor, &tokens, &amounts);

        self.unlock_operation();

        (amounts, tokens).into()
    }
}
