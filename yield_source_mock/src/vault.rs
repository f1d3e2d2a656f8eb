use common_constants::WAD;
use common_errors::{ERROR_ASSET_MISMATCH, ERROR_SLIPPAGE_EXCEEDED};
use common_math::Rounding;

use crate::{storage, utils};

multiversx_sc::imports!();

/// Share token vaults: a fixed share balance whose exchange rate floats.
/// Each protocol entry point maps to the same mint and redeem paths.
#[multiversx_sc::module]
pub trait VaultModule:
    storage::Storage + utils::UtilsModule + common_math::SharedMathModule
{
    #[payable]
    #[endpoint(swapExactTokenForPt)]
    fn swap_exact_token_for_pt(&self, receiver: ManagedAddress, min_pt_out: BigUint) -> BigUint {
        self.mint_shares(&receiver, &min_pt_out)
    }

    #[payable]
    #[endpoint(swapExactPtForToken)]
    fn swap_exact_pt_for_token(&self, receiver: ManagedAddress, min_token_out: BigUint) -> BigUint {
        self.redeem_shares(&receiver, &min_token_out)
    }

    #[endpoint(redeemDueInterestAndRewards)]
    fn redeem_due_interest_and_rewards(&self, user: ManagedAddress) {
        self.pay_rewards(&user, &user);
    }

    #[payable]
    #[endpoint(deposit)]
    fn deposit(&self, receiver: ManagedAddress, _should_compound: OptionalValue<bool>) -> BigUint {
        self.mint_shares(&receiver, &BigUint::zero())
    }

    #[payable]
    #[endpoint(instantRedeemWithApxEth)]
    fn instant_redeem_with_apx_eth(&self, receiver: ManagedAddress) -> BigUint {
        self.redeem_shares(&receiver, &BigUint::zero())
    }

    #[payable]
    #[endpoint(mintSavingcoin)]
    fn mint_savingcoin(&self, to: ManagedAddress) -> BigUint {
        self.mint_shares(&to, &BigUint::zero())
    }

    #[payable]
    #[endpoint(redeemSavingcoin)]
    fn redeem_savingcoin(&self, to: ManagedAddress) -> BigUint {
        self.redeem_shares(&to, &BigUint::zero())
    }

    #[payable]
    #[endpoint(redeem)]
    fn redeem(&self, receiver: ManagedAddress) -> BigUint {
        self.redeem_shares(&receiver, &BigUint::zero())
    }

    fn mint_shares(&self, receiver: &ManagedAddress, min_out: &BigUint) -> BigUint {
        let payment = self.call_value().egld_or_single_esdt();
        require!(
            payment.token_identifier == self.underlying().get(),
            ERROR_ASSET_MISMATCH
        );

        let shares = self.mul_div(
            &payment.amount,
            &BigUint::from(WAD),
            &self.exchange_rate().get(),
            Rounding::Floor,
        );
        require!(&shares >= min_out, ERROR_SLIPPAGE_EXCEEDED);

        let share_token = EgldOrEsdtTokenIdentifier::esdt(self.share_token().get());
        self.send_out(receiver, &share_token, &shares);

        shares
    }

    fn redeem_shares(&self, receiver: &ManagedAddress, min_out: &BigUint) -> BigUint {
        let payment = self.call_value().single_esdt();
        require!(
            payment.token_identifier == self.share_token().get(),
            ERROR_ASSET_MISMATCH
        );

        let amount = self.mul_div(
            &payment.amount,
            &self.exchange_rate().get(),
            &BigUint::from(WAD),
            Rounding::Floor,
        );
        require!(&amount >= min_out, ERROR_SLIPPAGE_EXCEEDED);

        self.send_out(receiver, &self.underlying().get(), &amount);

        amount
    }
}
