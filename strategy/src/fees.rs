multiversx_sc::imports!();

use common_proxies::proxy_fee_manager;

use crate::storage;

#[multiversx_sc::module]
pub trait FeesModule:
    storage::Storage
    + common_math::SharedMathModule
    + common_events::strategy_events::StrategyEventsModule
{
    /// Current fee for `depositor`, custom override included. Read from the
    /// fee manager on every settlement.
    fn depositor_performance_fee(&self, depositor: &ManagedAddress) -> BigUint {
        self.tx()
            .to(self.fee_manager_address().get())
            .typed(proxy_fee_manager::FeeManagerProxy)
            .depositor_performance_fee(self.blockchain().get_sc_address(), depositor)
            .returns(ReturnsResult)
            .sync_call_readonly()
    }

    fn fee_collection_address(&self) -> ManagedAddress {
        self.tx()
            .to(self.fee_manager_address().get())
            .typed(proxy_fee_manager::FeeManagerProxy)
            .fee_address()
            .returns(ReturnsResult)
            .sync_call_readonly()
    }

    /// Takes the performance fee out of `gain` and forwards it to the fee
    /// collection address. Returns the fee.
    fn take_performance_fee(
        &self,
        token: &EgldOrEsdtTokenIdentifier,
        gain: &BigUint,
        fee_bps: &BigUint,
        depositor: &ManagedAddress,
    ) -> BigUint {
        let fee = self.get_fee_absolute(gain, fee_bps);
        if fee == 0 {
            return fee;
        }

        let fee_address = self.fee_collection_address();
        self.tx()
            .to(&fee_address)
            .egld_or_single_esdt(token, 0, &fee)
            .transfer();

        self.fee_taken_event(token, depositor, &fee, &fee_address);

        fee
    }
}
