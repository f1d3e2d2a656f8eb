multiversx_sc::imports!();

use crate::storage;

/// Receipt token ledger. Balances follow shares one to one, expressed in
/// 18 decimals whatever the share decimals are.
#[multiversx_sc::module]
pub trait ReceiptModule:
    storage::Storage
    + common_math::SharedMathModule
    + common_events::strategy_events::StrategyEventsModule
{
    fn mint_receipt(&self, depositor: &ManagedAddress, shares: &BigUint, shares_decimals: usize) {
        let amount = self.to_receipt_units(shares, shares_decimals);

        let balance = self
            .receipt_balance(depositor)
            .update(|balance| {
                *balance += &amount;
                balance.clone()
            });
        let supply = self.receipt_supply().update(|supply| {
            *supply += &amount;
            supply.clone()
        });

        self.receipt_update_event(depositor, &balance, &supply);
    }

    /// Burns the receipt for `shares`, never more than the depositor holds.
    fn burn_receipt(&self, depositor: &ManagedAddress, shares: &BigUint, shares_decimals: usize) {
        let requested = self.to_receipt_units(shares, shares_decimals);
        let balance_mapper = self.receipt_balance(depositor);
        let held = balance_mapper.get();
        let burned = if requested > held { held.clone() } else { requested };

        let balance = &held - &burned;
        balance_mapper.set(&balance);
        let supply = self
            .receipt_supply()
            .update(|supply| {
                *supply = self.saturating_sub(supply, &burned);
                supply.clone()
            });

        self.receipt_update_event(depositor, &balance, &supply);
    }
}
