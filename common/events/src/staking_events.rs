multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait StakingEventsModule {
    #[event("staked")]
    fn staked_event(&self, #[indexed] depositor: &ManagedAddress, #[indexed] weight: &BigUint);

    #[event("unstaked")]
    fn unstaked_event(&self, #[indexed] depositor: &ManagedAddress, #[indexed] weight: &BigUint);

    #[event("reward_paid")]
    fn reward_paid_event(
        &self,
        #[indexed] depositor: &ManagedAddress,
        #[indexed] token: &TokenIdentifier,
        #[indexed] amount: &BigUint,
    );

    #[event("reward_added")]
    fn reward_added_event(
        &self,
        #[indexed] amount: &BigUint,
        #[indexed] reward_rate: &BigUint,
        #[indexed] period_finish: u64,
    );

    #[event("rewards_duration_update")]
    fn rewards_duration_update_event(&self, #[indexed] duration: u64);
}
