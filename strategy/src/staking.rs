multiversx_sc::imports!();

use common_proxies::proxy_rewards_staking;

use crate::storage;

/// Mirrors share movements as staking weight on the rewards staking contract.
#[multiversx_sc::module]
pub trait StakingModule: storage::Storage {
    fn register_staking_deposit(&self, depositor: &ManagedAddress, shares: &BigUint) {
        self.tx()
            .to(self.rewards_staking_address().get())
            .typed(proxy_rewards_staking::RewardsStakingProxy)
            .register_deposit(depositor, shares)
            .sync_call();
    }

    fn register_staking_withdrawal(&self, depositor: &ManagedAddress, shares: &BigUint) {
        self.tx()
            .to(self.rewards_staking_address().get())
            .typed(proxy_rewards_staking::RewardsStakingProxy)
            .register_withdrawal(depositor, shares)
            .sync_call();
    }
}
