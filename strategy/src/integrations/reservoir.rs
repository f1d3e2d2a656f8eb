multiversx_sc::imports!();

use common_proxies::proxy_saving_module;

#[multiversx_sc::module]
pub trait ReservoirIntegrationModule {
    fn reservoir_mint(
        &self,
        saving_module: &ManagedAddress,
        token_in: &EgldOrEsdtTokenIdentifier,
        amount: &BigUint,
    ) {
        self.tx()
            .to(saving_module)
            .typed(proxy_saving_module::SavingModuleProxy)
            .mint_savingcoin(self.blockchain().get_sc_address())
            .egld_or_single_esdt(token_in, 0, amount)
            .sync_call();
    }

    fn reservoir_redeem(
        &self,
        saving_module: &ManagedAddress,
        savingcoin: &TokenIdentifier,
        amount: &BigUint,
    ) {
        self.tx()
            .to(saving_module)
            .typed(proxy_saving_module::SavingModuleProxy)
            .redeem_savingcoin(self.blockchain().get_sc_address())
            .single_esdt(savingcoin, 0, amount)
            .sync_call();
    }
}
