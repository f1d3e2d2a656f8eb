multiversx_sc::imports!();

use common_proxies::proxy_lending_pool;

/// Aave and Ion lending pools. The position is the rebasing balance the
/// pool reports for the adapter.
#[multiversx_sc::module]
pub trait LendingIntegrationModule {
    fn lending_supply(
        &self,
        pool: &ManagedAddress,
        token: &EgldOrEsdtTokenIdentifier,
        amount: &BigUint,
    ) {
        self.tx()
            .to(pool)
            .typed(proxy_lending_pool::LendingPoolProxy)
            .supply(self.blockchain().get_sc_address())
            .egld_or_single_esdt(token, 0, amount)
            .sync_call();
    }

    fn lending_withdraw(
        &self,
        pool: &ManagedAddress,
        token: &EgldOrEsdtTokenIdentifier,
        amount: &BigUint,
    ) {
        self.tx()
            .to(pool)
            .typed(proxy_lending_pool::LendingPoolProxy)
            .withdraw(token, amount, self.blockchain().get_sc_address())
            .sync_call();
    }

    fn lending_position(&self, pool: &ManagedAddress) -> BigUint {
        self.tx()
            .to(pool)
            .typed(proxy_lending_pool::LendingPoolProxy)
            .balance_of(self.blockchain().get_sc_address())
            .returns(ReturnsResult)
            .sync_call_readonly()
    }

    fn lending_claim_rewards(&self, pool: &ManagedAddress) {
        self.tx()
            .to(pool)
            .typed(proxy_lending_pool::LendingPoolProxy)
            .claim_all_rewards(self.blockchain().get_sc_address())
            .sync_call();
    }
}
