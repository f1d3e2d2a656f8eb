multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait FeeEventsModule {
    #[event("performance_fee_update")]
    fn performance_fee_update_event(&self, #[indexed] fee_bps: &BigUint);

    #[event("fee_address_update")]
    fn fee_address_update_event(&self, #[indexed] fee_address: &ManagedAddress);

    // A `None` fee means the override was removed
    #[event("custom_fee_update")]
    fn custom_fee_update_event(
        &self,
        #[indexed] strategy: &ManagedAddress,
        #[indexed] depositor: &ManagedAddress,
        #[indexed] fee_bps: Option<&BigUint>,
    );
}
