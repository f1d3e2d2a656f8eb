#![no_std]

multiversx_sc::imports!();

pub mod lending;
pub mod storage;
pub mod utils;
pub mod vault;

use common_constants::WAD;
use common_errors::ERROR_INVALID_EXCHANGE_RATE;

/// Simulates the external yield sources the strategy adapters integrate with.
///
/// The owner drives the exchange rate and pending rewards; the contract must
/// be pre-funded with underlying, share and reward tokens.
#[multiversx_sc::contract]
pub trait YieldSourceMock:
    storage::Storage
    + utils::UtilsModule
    + lending::LendingModule
    + vault::VaultModule
    + common_math::SharedMathModule
{
    #[init]
    fn init(
        &self,
        underlying: EgldOrEsdtTokenIdentifier,
        share_token: TokenIdentifier,
        reward_token: TokenIdentifier,
    ) {
        self.underlying().set(&underlying);
        self.share_token().set(&share_token);
        self.reward_token().set(&reward_token);
        self.exchange_rate().set(BigUint::from(WAD));
    }

    #[upgrade]
    fn upgrade(&self) {}

    #[only_owner]
    #[endpoint(setExchangeRate)]
    fn set_exchange_rate(&self, rate: BigUint) {
        require!(rate > 0, ERROR_INVALID_EXCHANGE_RATE);
        self.exchange_rate().set(&rate);
    }

    /// Makes the next supply or withdrawal call back into the caller.
    #[only_owner]
    #[endpoint(setReentrancy)]
    fn set_reentrancy(&self, enabled: bool) {
        self.reenter_caller_enabled().set(enabled);
    }

    #[only_owner]
    #[endpoint(setPendingRewards)]
    fn set_pending_rewards(&self, user: ManagedAddress, amount: BigUint) {
        self.pending_rewards(&user).set(&amount);
    }
}
