use common_structs::StrategyConfig;

multiversx_sc::imports!();

/// In-memory view of the adapter aggregates for the duration of one operation.
///
/// The totals are written back to storage when the cache is dropped, so every
/// exit path of an operation commits them exactly once.
pub struct Cache<'a, C>
where
    C: crate::storage::Storage,
{
    sc_ref: &'a C,
    pub config: StrategyConfig<C::Api>,
    /// Aggregate principal across depositors, in `token_in` units.
    pub total_investments: BigUint<C::Api>,
    /// Aggregate shares across depositors.
    pub total_shares: BigUint<C::Api>,
}

impl<'a, C> Cache<'a, C>
where
    C: crate::storage::Storage,
{
    pub fn new(sc_ref: &'a C) -> Self {
        Cache {
            config: sc_ref.strategy_config().get(),
            total_investments: sc_ref.total_investments().get(),
            total_shares: sc_ref.total_shares().get(),
            sc_ref,
        }
    }

    pub fn shares_decimals(&self) -> usize {
        self.config.shares_decimals
    }

    pub fn record_deposit(&mut self, amount: &BigUint<C::Api>, shares: &BigUint<C::Api>) {
        self.total_investments += amount;
        self.total_shares += shares;
    }

    /// Clamped at zero like the per depositor ledger.
    pub fn record_withdrawal(
        &mut self,
        investment_portion: &BigUint<C::Api>,
        shares: &BigUint<C::Api>,
    ) {
        self.total_investments = if &self.total_investments > investment_portion {
            &self.total_investments - investment_portion
        } else {
            BigUint::zero()
        };
        self.total_shares = if &self.total_shares > shares {
            &self.total_shares - shares
        } else {
            BigUint::zero()
        };
    }
}

impl<C> Drop for Cache<'_, C>
where
    C: crate::storage::Storage,
{
    fn drop(&mut self) {
        // commit changes to storage for the mutable fields
        self.sc_ref.total_investments().set(&self.total_investments);
        self.sc_ref.total_shares().set(&self.total_shares);
    }
}
