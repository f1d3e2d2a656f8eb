multiversx_sc::imports!();

use common_proxies::proxy_staked_deusd;

#[multiversx_sc::module]
pub trait ElixirIntegrationModule {
    fn elixir_stake(
        &self,
        vault: &ManagedAddress,
        token_in: &EgldOrEsdtTokenIdentifier,
        amount: &BigUint,
    ) {
        self.tx()
            .to(vault)
            .typed(proxy_staked_deusd::StakedDeusdProxy)
            .deposit(self.blockchain().get_sc_address())
            .egld_or_single_esdt(token_in, 0, amount)
            .sync_call();
    }

    fn elixir_unstake(&self, vault: &ManagedAddress, sdeusd: &TokenIdentifier, amount: &BigUint) {
        self.tx()
            .to(vault)
            .typed(proxy_staked_deusd::StakedDeusdProxy)
            .redeem(self.blockchain().get_sc_address())
            .single_esdt(sdeusd, 0, amount)
            .sync_call();
    }
}
