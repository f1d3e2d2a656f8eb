multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait Storage {
    #[storage_mapper("underlying")]
    fn underlying(&self) -> SingleValueMapper<EgldOrEsdtTokenIdentifier>;

    #[storage_mapper("share_token")]
    fn share_token(&self) -> SingleValueMapper<TokenIdentifier>;

    #[storage_mapper("reward_token")]
    fn reward_token(&self) -> SingleValueMapper<TokenIdentifier>;

    /// Underlying per share, or the liquidity index of the lending pool, in WAD.
    #[view(getExchangeRate)]
    #[storage_mapper("exchange_rate")]
    fn exchange_rate(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("scaled_balance")]
    fn scaled_balance(&self, user: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[view(getPendingRewards)]
    #[storage_mapper("pending_rewards")]
    fn pending_rewards(&self, user: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[storage_mapper("reenter_caller_enabled")]
    fn reenter_caller_enabled(&self) -> SingleValueMapper<bool>;
}
