multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait Storage {
    /// Default performance fee in basis points, applied to the yield of every withdrawal.
    #[view(getPerformanceFee)]
    #[storage_mapper("performance_fee")]
    fn performance_fee(&self) -> SingleValueMapper<BigUint>;

    /// Address receiving every performance fee.
    #[view(getFeeAddress)]
    #[storage_mapper("fee_address")]
    fn fee_address(&self) -> SingleValueMapper<ManagedAddress>;

    /// Overrides of the default fee for the depositors of one strategy. A
    /// present key is an override even when its fee is zero.
    #[storage_mapper("custom_fees")]
    fn custom_fees(&self, strategy: &ManagedAddress) -> MapMapper<ManagedAddress, BigUint>;
}
