multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait StrategyEventsModule {
    #[event("deposit")]
    fn deposit_event(
        &self,
        #[indexed] asset: &EgldOrEsdtTokenIdentifier,
        #[indexed] amount: &BigUint,
        #[indexed] shares: &BigUint,
        #[indexed] depositor: &ManagedAddress,
    );

    #[event("withdraw")]
    fn withdraw_event(
        &self,
        #[indexed] asset: &EgldOrEsdtTokenIdentifier,
        #[indexed] depositor: &ManagedAddress,
        #[indexed] shares: &BigUint,
        #[indexed] net_amount: &BigUint,
    );

    // Emitted for withdrawal yield and for every claimed reward token
    #[event("fee_taken")]
    fn fee_taken_event(
        &self,
        #[indexed] token: &EgldOrEsdtTokenIdentifier,
        #[indexed] depositor: &ManagedAddress,
        #[indexed] fee: &BigUint,
        #[indexed] fee_address: &ManagedAddress,
    );

    #[event("rewards_claimed")]
    fn rewards_claimed_event(
        &self,
        #[indexed] depositor: &ManagedAddress,
        #[indexed] tokens: &ManagedVec<TokenIdentifier>,
        #[indexed] amounts: &ManagedVec<BigUint>,
    );

    #[event("receipt_update")]
    fn receipt_update_event(
        &self,
        #[indexed] depositor: &ManagedAddress,
        #[indexed] balance: &BigUint,
        #[indexed] supply: &BigUint,
    );

    #[event("strategy_config_update")]
    fn strategy_config_update_event(
        &self,
        #[indexed] rewards_staking: &ManagedAddress,
        #[indexed] fee_manager: &ManagedAddress,
        #[indexed] strategy_manager: &ManagedAddress,
    );
}
