use common_errors::ERROR_INSUFFICIENT_LIQUIDITY;
use common_proxies::proxy_strategy;

use crate::storage;

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait UtilsModule: storage::Storage {
    fn send_out(&self, to: &ManagedAddress, token: &EgldOrEsdtTokenIdentifier, amount: &BigUint) {
        let liquidity = self.blockchain().get_sc_balance(token, 0);
        require!(amount <= &liquidity, ERROR_INSUFFICIENT_LIQUIDITY);

        self.tx()
            .to(to)
            .egld_or_single_esdt(token, 0, amount)
            .transfer_if_not_empty();
    }

    /// Pays out whatever is pending for `user`; nothing pending is not an error.
    fn pay_rewards(&self, user: &ManagedAddress, to: &ManagedAddress) {
        let pending = self.pending_rewards(user).take();

        let reward_token = EgldOrEsdtTokenIdentifier::esdt(self.reward_token().get());
        self.send_out(to, &reward_token, &pending);
    }

    /// Calls `claimRewards` back on the calling adapter while it is still
    /// inside its own operation, when enabled by the owner.
    fn reenter_caller(&self) {
        if !self.reenter_caller_enabled().get() {
            return;
        }

        let caller = self.blockchain().get_caller();
        self.tx()
            .to(&caller)
            .typed(proxy_strategy::StrategyProxy)
            .claim_rewards(&caller, ManagedBuffer::new())
            .sync_call();
    }
}
