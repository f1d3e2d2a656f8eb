use common_structs::{RecipientInfo, StrategyConfig};

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait Storage {
    /// Token wiring, share decimals and yield source of the adapter.
    #[view(getStrategyConfig)]
    #[storage_mapper("strategy_config")]
    fn strategy_config(&self) -> SingleValueMapper<StrategyConfig<Self::Api>>;

    /// Ledger entry per depositor. Empty until the first deposit.
    #[storage_mapper("recipients")]
    fn recipients(&self, depositor: &ManagedAddress) -> SingleValueMapper<RecipientInfo<Self::Api>>;

    /// Principal of every depositor, derived from the ledger and kept for reporting.
    #[view(getTotalInvestments)]
    #[storage_mapper("total_investments")]
    fn total_investments(&self) -> SingleValueMapper<BigUint>;

    /// Shares of every depositor; the denominator of rebasing redemptions.
    #[view(getTotalShares)]
    #[storage_mapper("total_shares")]
    fn total_shares(&self) -> SingleValueMapper<BigUint>;

    #[view(getReceiptBalance)]
    #[storage_mapper("receipt_balance")]
    fn receipt_balance(&self, depositor: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[view(getReceiptSupply)]
    #[storage_mapper("receipt_supply")]
    fn receipt_supply(&self) -> SingleValueMapper<BigUint>;

    #[view(getFeeManager)]
    #[storage_mapper("fee_manager_address")]
    fn fee_manager_address(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getRewardsStaking)]
    #[storage_mapper("rewards_staking_address")]
    fn rewards_staking_address(&self) -> SingleValueMapper<ManagedAddress>;

    /// Orchestrator allowed to deposit, withdraw and claim on behalf of depositors.
    #[view(getStrategyManager)]
    #[storage_mapper("strategy_manager")]
    fn strategy_manager(&self) -> SingleValueMapper<ManagedAddress>;

    /// Reward booked per share for each reward token, scaled by `REWARD_PRECISION`.
    #[view(getRewardPerShare)]
    #[storage_mapper("reward_per_share")]
    fn reward_per_share(&self, token: &TokenIdentifier) -> SingleValueMapper<BigUint>;

    /// Value of `reward_per_share` at the depositor's last checkpoint.
    #[storage_mapper("reward_per_share_paid")]
    fn reward_per_share_paid(
        &self,
        depositor: &ManagedAddress,
        token: &TokenIdentifier,
    ) -> SingleValueMapper<BigUint>;

    /// Rewards earned by the depositor up to its last checkpoint and not yet paid.
    #[storage_mapper("accrued_rewards")]
    fn accrued_rewards(
        &self,
        depositor: &ManagedAddress,
        token: &TokenIdentifier,
    ) -> SingleValueMapper<BigUint>;

    #[storage_mapper("operation_ongoing")]
    fn operation_ongoing(&self) -> SingleValueMapper<bool>;
}
