#![no_std]

multiversx_sc::imports!();

pub mod storage;

use common_constants::MAX_PERFORMANCE_FEE_BPS;
use common_errors::{ERROR_ADDRESS_IS_ZERO, ERROR_FEE_TOO_HIGH};

/// Owns the performance fee policy shared by every strategy adapter.
///
/// Adapters query it on each settlement, so a change here applies to the
/// next withdrawal or reward claim without touching the adapters.
#[multiversx_sc::contract]
pub trait FeeManager:
    storage::Storage + common_events::fee_events::FeeEventsModule
{
    /// # Arguments
    /// - `performance_fee`: Default fee in basis points, at most `MAX_PERFORMANCE_FEE_BPS`.
    /// - `fee_address`: Collector of the fees.
    #[init]
    fn init(&self, performance_fee: BigUint, fee_address: ManagedAddress) {
        self.update_performance_fee(performance_fee);
        self.update_fee_address(fee_address);
    }

    #[upgrade]
    fn upgrade(&self) {}

    #[only_owner]
    #[endpoint(setPerformanceFee)]
    fn set_performance_fee(&self, fee_bps: BigUint) {
        self.update_performance_fee(fee_bps);
    }

    #[only_owner]
    #[endpoint(setFeeAddress)]
    fn set_fee_address(&self, fee_address: ManagedAddress) {
        self.update_fee_address(fee_address);
    }

    /// Sets a depositor specific fee for one strategy. The same cap as the default fee applies.
    #[only_owner]
    #[endpoint(setCustomFee)]
    fn set_custom_fee(
        &self,
        strategy: ManagedAddress,
        depositor: ManagedAddress,
        fee_bps: BigUint,
    ) {
        self.require_valid_fee(&fee_bps);

        self.custom_fees(&strategy).insert(depositor.clone(), fee_bps.clone());
        self.custom_fee_update_event(&strategy, &depositor, Some(&fee_bps));
    }

    #[only_owner]
    #[endpoint(removeCustomFee)]
    fn remove_custom_fee(&self, strategy: ManagedAddress, depositor: ManagedAddress) {
        self.custom_fees(&strategy).remove(&depositor);
        self.custom_fee_update_event(&strategy, &depositor, None);
    }

    #[view(getCustomFee)]
    fn get_custom_fee(
        &self,
        strategy: ManagedAddress,
        depositor: ManagedAddress,
    ) -> Option<BigUint> {
        self.custom_fees(&strategy).get(&depositor)
    }

    /// Fee that applies to `depositor` in `strategy`: the override when one
    /// exists, the default performance fee otherwise.
    #[view(getDepositorPerformanceFee)]
    fn get_depositor_performance_fee(
        &self,
        strategy: ManagedAddress,
        depositor: ManagedAddress,
    ) -> BigUint {
        self.get_custom_fee(strategy, depositor)
            .unwrap_or_else(|| self.performance_fee().get())
    }

    fn update_performance_fee(&self, fee_bps: BigUint) {
        self.require_valid_fee(&fee_bps);

        self.performance_fee().set(&fee_bps);
        self.performance_fee_update_event(&fee_bps);
    }

    fn update_fee_address(&self, fee_address: ManagedAddress) {
        require!(!fee_address.is_zero(), ERROR_ADDRESS_IS_ZERO);

        self.fee_address().set(&fee_address);
        self.fee_address_update_event(&fee_address);
    }

    fn require_valid_fee(&self, fee_bps: &BigUint) {
        require!(
            fee_bps <= &BigUint::from(MAX_PERFORMANCE_FEE_BPS),
            ERROR_FEE_TOO_HIGH
        );
    }
}
