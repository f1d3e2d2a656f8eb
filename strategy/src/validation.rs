multiversx_sc::imports!();

use common_errors::{
    ERROR_ADDRESS_IS_ZERO, ERROR_ASSET_MISMATCH, ERROR_INVALID_AMOUNT, ERROR_INVALID_AUX_DATA,
    ERROR_ONLY_STRATEGY_MANAGER, ERROR_REENTRANCY, ERROR_REWARDS_STAKING_NOT_SET,
};
use common_structs::{StrategyConfig, YieldSourceKind};

use crate::storage;

#[multiversx_sc::module]
pub trait ValidationModule: storage::Storage {
    /// Deposits, withdrawals and claims are only accepted from the orchestrator.
    fn require_strategy_manager(&self) {
        let caller = self.blockchain().get_caller();
        require!(
            caller == self.strategy_manager().get(),
            ERROR_ONLY_STRATEGY_MANAGER
        );
    }

    fn require_token_in(
        &self,
        config: &StrategyConfig<Self::Api>,
        asset: &EgldOrEsdtTokenIdentifier,
    ) {
        require!(asset == &config.token_in, ERROR_ASSET_MISMATCH);
    }

    fn require_amount_greater_than_zero(&self, amount: &BigUint) {
        require!(amount > &BigUint::zero(), ERROR_INVALID_AMOUNT);
    }

    fn require_non_zero_address(&self, address: &ManagedAddress) {
        require!(!address.is_zero(), ERROR_ADDRESS_IS_ZERO);
    }

    fn require_rewards_staking_set(&self) {
        require!(
            !self.rewards_staking_address().is_empty(),
            ERROR_REWARDS_STAKING_NOT_SET
        );
    }

    /// Pendle accepts an optional big-endian minimum output amount, every other
    /// source expects no auxiliary data.
    fn require_valid_aux_data(&self, config: &StrategyConfig<Self::Api>, aux_data: &ManagedBuffer) {
        match config.kind {
            YieldSourceKind::Pendle => {},
            _ => require!(aux_data.is_empty(), ERROR_INVALID_AUX_DATA),
        }
    }

    /// Non-reentrant section start, taken before any other check. Released by
    /// `unlock_operation`; a failed call reverts the flag with every other write.
    fn lock_operation(&self) {
        let ongoing = self.operation_ongoing();
        require!(!ongoing.get(), ERROR_REENTRANCY);
        ongoing.set(true);
    }

    fn unlock_operation(&self) {
        self.operation_ongoing().set(false);
    }
}
