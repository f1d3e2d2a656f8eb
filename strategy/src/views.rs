multiversx_sc::imports!();

use common_structs::RecipientInfo;

use crate::{accrual, integrations, ledger, storage};

#[multiversx_sc::module]
pub trait ViewsModule:
    storage::Storage
    + ledger::LedgerModule
    + accrual::RewardAccrualModule
    + integrations::IntegrationsModule
    + integrations::lending::LendingIntegrationModule
    + integrations::pendle::PendleIntegrationModule
    + integrations::dinero::DineroIntegrationModule
    + integrations::reservoir::ReservoirIntegrationModule
    + integrations::elixir::ElixirIntegrationModule
    + common_math::SharedMathModule
{
    #[view(getRecipientInfo)]
    fn recipient_info(&self, depositor: ManagedAddress) -> RecipientInfo<Self::Api> {
        self.get_recipient(&depositor)
    }

    /// Current size of the adapter position in the yield source, yield included
    /// for rebasing sources.
    #[view(getPositionBalance)]
    fn get_position_balance(&self) -> BigUint {
        self.position_balance(&self.strategy_config().get())
    }

    /// Rewards already harvested and attributed to `depositor`, gross of fees,
    /// in reward token order. Rewards still pending at the source are not included.
    #[view(getPendingRewards)]
    fn pending_rewards(&self, depositor: ManagedAddress) -> ManagedVec<BigUint> {
        let config = self.strategy_config().get();
        let shares = self.get_recipient(&depositor).total_shares;

        self.booked_rewards(&config, &depositor, &shares)
    }
}
