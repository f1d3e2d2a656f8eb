multiversx_sc::imports!();

use crate::{storage, validation};

#[multiversx_sc::module]
pub trait ConfigModule:
    storage::Storage
    + validation::ValidationModule
    + common_events::strategy_events::StrategyEventsModule
{
    /// Binds the rewards staking contract that tracks depositor weight.
    /// Required before the first deposit.
    #[only_owner]
    #[endpoint(setRewardsStaking)]
    fn set_rewards_staking(&self, address: ManagedAddress) {
        self.require_non_zero_address(&address);
        self.rewards_staking_address().set(&address);
        self.emit_config_update();
    }

    #[only_owner]
    #[endpoint(setFeeManager)]
    fn set_fee_manager(&self, address: ManagedAddress) {
        self.require_non_zero_address(&address);
        self.fee_manager_address().set(&address);
        self.emit_config_update();
    }

    #[only_owner]
    #[endpoint(setStrategyManager)]
    fn set_strategy_manager(&self, address: ManagedAddress) {
        self.require_non_zero_address(&address);
        self.strategy_manager().set(&address);
        self.emit_config_update();
    }

    fn emit_config_update(&self) {
        let rewards_staking = if self.rewards_staking_address().is_empty() {
            ManagedAddress::zero()
        } else {
            self.rewards_staking_address().get()
        };

        self.strategy_config_update_event(
            &rewards_staking,
            &self.fee_manager_address().get(),
            &self.strategy_manager().get(),
        );
    }
}
