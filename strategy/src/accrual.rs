multiversx_sc::imports!();

use common_constants::REWARD_PRECISION;
use common_math::Rounding;
use common_structs::StrategyConfig;

use crate::{integrations, storage};

/// Splits the source reward stream between depositors by shares.
///
/// Rewards are harvested into the adapter before any share balance moves and
/// booked into a per share index, so a depositor only earns on the shares it
/// held while the rewards accrued.
#[multiversx_sc::module]
pub trait RewardAccrualModule:
    storage::Storage
    + integrations::IntegrationsModule
    + integrations::lending::LendingIntegrationModule
    + integrations::pendle::PendleIntegrationModule
    + integrations::dinero::DineroIntegrationModule
    + integrations::reservoir::ReservoirIntegrationModule
    + integrations::elixir::ElixirIntegrationModule
    + common_math::SharedMathModule
{
    /// Pulls the pending source rewards and books them against `total_shares`.
    /// What arrives while nobody holds shares stays unassigned in the adapter.
    fn harvest_rewards(&self, config: &StrategyConfig<Self::Api>, total_shares: &BigUint) {
        if !config.has_rewards() {
            return;
        }

        let mut balances_before = ManagedVec::<Self::Api, BigUint>::new();
        for token in config.reward_tokens.iter() {
            balances_before.push(self.reward_balance(&token));
        }

        self.claim_source_rewards(config);

        if *total_shares == 0u32 {
            return;
        }

        for (index, token) in config.reward_tokens.iter().enumerate() {
            let before = balances_before.get(index);
            let claimed = self.saturating_sub(&self.reward_balance(&token), &before);
            if claimed == 0u32 {
                continue;
            }

            let increase = self.mul_div(
                &claimed,
                &BigUint::from(REWARD_PRECISION),
                total_shares,
                Rounding::Floor,
            );
            self.reward_per_share(&token)
                .update(|reward_per_share| *reward_per_share += increase);
        }
    }

    /// Moves what `depositor` earned on `shares` since its last checkpoint into
    /// its accrued balance. Must run before its shares change.
    fn checkpoint_rewards(
        &self,
        config: &StrategyConfig<Self::Api>,
        depositor: &ManagedAddress,
        shares: &BigUint,
    ) {
        if !config.has_rewards() {
            return;
        }

        for token in config.reward_tokens.iter() {
            let reward_per_share = self.reward_per_share(&token).get();
            let paid_mapper = self.reward_per_share_paid(depositor, &token);

            let earned = self.earned_since(shares, &reward_per_share, &paid_mapper.get());
            if earned > 0u32 {
                self.accrued_rewards(depositor, &token)
                    .update(|accrued| *accrued += earned);
            }

            paid_mapper.set(reward_per_share);
        }
    }

    /// Booked but unpaid rewards of `depositor`, gross of fees, in reward token order.
    fn booked_rewards(
        &self,
        config: &StrategyConfig<Self::Api>,
        depositor: &ManagedAddress,
        shares: &BigUint,
    ) -> ManagedVec<BigUint> {
        let mut booked = ManagedVec::new();
        for token in config.reward_tokens.iter() {
            let earned = self.earned_since(
                shares,
                &self.reward_per_share(&token).get(),
                &self.reward_per_share_paid(depositor, &token).get(),
            );
            booked.push(earned + self.accrued_rewards(depositor, &token).get());
        }

        booked
    }

    fn earned_since(
        &self,
        shares: &BigUint,
        reward_per_share: &BigUint,
        paid: &BigUint,
    ) -> BigUint {
        let delta = self.saturating_sub(reward_per_share, paid);

        self.mul_div(shares, &delta, &BigUint::from(REWARD_PRECISION), Rounding::Floor)
    }

    fn reward_balance(&self, token: &TokenIdentifier) -> BigUint {
        self.blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::esdt(token.clone()), 0)
    }
}
