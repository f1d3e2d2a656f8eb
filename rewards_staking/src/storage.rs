use common_structs::StakerInfo;

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait Storage {
    /// The strategy adapter allowed to move staking weight.
    #[view(getStrategyAddress)]
    #[storage_mapper("strategy_address")]
    fn strategy_address(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getRewardToken)]
    #[storage_mapper("reward_token")]
    fn reward_token(&self) -> SingleValueMapper<TokenIdentifier>;

    /// Length in seconds over which a reward notification is streamed.
    #[view(getRewardsDuration)]
    #[storage_mapper("rewards_duration")]
    fn rewards_duration(&self) -> SingleValueMapper<u64>;

    #[view(getPeriodFinish)]
    #[storage_mapper("period_finish")]
    fn period_finish(&self) -> SingleValueMapper<u64>;

    /// Reward token units released per second during the current period.
    #[view(getRewardRate)]
    #[storage_mapper("reward_rate")]
    fn reward_rate(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("last_update_time")]
    fn last_update_time(&self) -> SingleValueMapper<u64>;

    /// Accumulated reward per staked unit, scaled by `REWARD_PRECISION`.
    #[storage_mapper("reward_per_token_stored")]
    fn reward_per_token_stored(&self) -> SingleValueMapper<BigUint>;

    #[view(getTotalSupply)]
    #[storage_mapper("total_supply")]
    fn total_supply(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("stakers")]
    fn stakers(&self, depositor: &ManagedAddress) -> SingleValueMapper<StakerInfo<Self::Api>>;
}
