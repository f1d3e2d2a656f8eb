multiversx_sc::imports!();

use common_proxies::proxy_pendle_router;

#[multiversx_sc::module]
pub trait PendleIntegrationModule {
    fn pendle_buy_pt(
        &self,
        router: &ManagedAddress,
        token_in: &EgldOrEsdtTokenIdentifier,
        amount: &BigUint,
        min_pt_out: &BigUint,
    ) {
        self.tx()
            .to(router)
            .typed(proxy_pendle_router::PendleRouterProxy)
            .swap_exact_token_for_pt(self.blockchain().get_sc_address(), min_pt_out)
            .egld_or_single_esdt(token_in, 0, amount)
            .sync_call();
    }

    fn pendle_sell_pt(
        &self,
        router: &ManagedAddress,
        pt_token: &TokenIdentifier,
        pt_amount: &BigUint,
        min_token_out: &BigUint,
    ) {
        self.tx()
            .to(router)
            .typed(proxy_pendle_router::PendleRouterProxy)
            .swap_exact_pt_for_token(self.blockchain().get_sc_address(), min_token_out)
            .single_esdt(pt_token, 0, pt_amount)
            .sync_call();
    }

    fn pendle_redeem_rewards(&self, router: &ManagedAddress) {
        self.tx()
            .to(router)
            .typed(proxy_pendle_router::PendleRouterProxy)
            .redeem_due_interest_and_rewards(self.blockchain().get_sc_address())
            .sync_call();
    }

    /// Empty aux data means no slippage bound.
    fn pendle_min_out(&self, aux_data: &ManagedBuffer) -> BigUint {
        BigUint::from_bytes_be_buffer(aux_data)
    }
}
