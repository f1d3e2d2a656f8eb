multiversx_sc::imports!();

use common_proxies::proxy_pirex_eth;

/// Dinero (Pirex) takes native EGLD and mints the auto-compounding apxEGLD share.
#[multiversx_sc::module]
pub trait DineroIntegrationModule {
    fn dinero_deposit(
        &self,
        pirex: &ManagedAddress,
        token_in: &EgldOrEsdtTokenIdentifier,
        amount: &BigUint,
    ) {
        self.tx()
            .to(pirex)
            .typed(proxy_pirex_eth::PirexEthProxy)
            .deposit(self.blockchain().get_sc_address(), true)
            .egld_or_single_esdt(token_in, 0, amount)
            .sync_call();
    }

    fn dinero_redeem(&self, pirex: &ManagedAddress, apx_token: &TokenIdentifier, amount: &BigUint) {
        self.tx()
            .to(pirex)
            .typed(proxy_pirex_eth::PirexEthProxy)
            .instant_redeem_with_apx_eth(self.blockchain().get_sc_address())
            .single_esdt(apx_token, 0, amount)
            .sync_call();
    }
}
