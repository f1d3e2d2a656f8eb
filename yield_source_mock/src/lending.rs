use common_constants::WAD;
use common_errors::{ERROR_ASSET_MISMATCH, ERROR_INSUFFICIENT_POSITION};
use common_math::Rounding;

use crate::{storage, utils};

multiversx_sc::imports!();

/// Rebasing lending pool: positions are scaled balances that grow with the index.
#[multiversx_sc::module]
pub trait LendingModule:
    storage::Storage + utils::UtilsModule + common_math::SharedMathModule
{
    #[payable]
    #[endpoint(supply)]
    fn supply(&self, on_behalf_of: ManagedAddress) {
        let payment = self.call_value().egld_or_single_esdt();
        require!(
            payment.token_identifier == self.underlying().get(),
            ERROR_ASSET_MISMATCH
        );

        let scaled = self.mul_div(
            &payment.amount,
            &BigUint::from(WAD),
            &self.exchange_rate().get(),
            Rounding::Floor,
        );
        self.scaled_balance(&on_behalf_of)
            .update(|balance| *balance += scaled);

        self.reenter_caller();
    }

    #[endpoint(withdraw)]
    fn withdraw(
        &self,
        asset: EgldOrEsdtTokenIdentifier,
        amount: BigUint,
        to: ManagedAddress,
    ) -> BigUint {
        require!(asset == self.underlying().get(), ERROR_ASSET_MISMATCH);

        let caller = self.blockchain().get_caller();
        let burned = self.mul_div(
            &amount,
            &BigUint::from(WAD),
            &self.exchange_rate().get(),
            Rounding::Ceil,
        );
        let mapper = self.scaled_balance(&caller);
        let scaled = mapper.get();
        require!(burned <= scaled, ERROR_INSUFFICIENT_POSITION);
        mapper.set(scaled - burned);

        self.reenter_caller();
        self.send_out(&to, &asset, &amount);

        amount
    }

    #[view(balanceOf)]
    fn balance_of(&self, user: ManagedAddress) -> BigUint {
        self.mul_div(
            &self.scaled_balance(&user).get(),
            &self.exchange_rate().get(),
            &BigUint::from(WAD),
            Rounding::Floor,
        )
    }

    #[endpoint(claimAllRewards)]
    fn claim_all_rewards(&self, to: ManagedAddress) {
        let caller = self.blockchain().get_caller();
        self.pay_rewards(&caller, &to);
    }
}
