#![no_std]

use core::cmp::Ordering;

use common_constants::{BPS, RECEIPT_TOKEN_DECIMALS};

multiversx_sc::imports!();

/// Direction applied to the remainder of an integer division.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Rounding {
    Floor,
    Ceil,
}

#[multiversx_sc::module]
pub trait SharedMathModule {
    fn to_decimal(
        &self,
        value: BigUint,
        precision: NumDecimals,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        ManagedDecimal::from_raw_units(value, precision)
    }

    /// `a * b / denominator`, rounded as requested.
    /// The caller guarantees a non-zero denominator.
    fn mul_div(
        &self,
        a: &BigUint,
        b: &BigUint,
        denominator: &BigUint,
        rounding: Rounding,
    ) -> BigUint {
        let product = a * b;
        let quotient = &product / denominator;

        match rounding {
            Rounding::Floor => quotient,
            Rounding::Ceil => {
                if &product % denominator == 0u32 {
                    quotient
                } else {
                    quotient + 1u32
                }
            },
        }
    }

    /// Fraction `numerator / denominator` expressed with `precision` decimals.
    ///
    /// Returns zero when either operand is zero, so a depositor without
    /// shares never produces a division by zero.
    fn get_ratio(
        &self,
        numerator: &BigUint,
        denominator: &BigUint,
        precision: NumDecimals,
        rounding: Rounding,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        if *numerator == 0u32 || *denominator == 0u32 {
            return self.to_decimal(BigUint::zero(), precision);
        }

        let scale = BigUint::from(10u64).pow(precision as u32);
        let raw = self.mul_div(numerator, &scale, denominator, rounding);

        self.to_decimal(raw, precision)
    }

    /// Applies a ratio produced by `get_ratio` to an amount.
    fn apply_ratio(
        &self,
        amount: &BigUint,
        ratio: &ManagedDecimal<Self::Api, NumDecimals>,
        rounding: Rounding,
    ) -> BigUint {
        let scale = BigUint::from(10u64).pow(ratio.scale() as u32);

        self.mul_div(amount, ratio.into_raw_units(), &scale, rounding)
    }

    /// Fee in absolute units for an amount and a fee expressed in basis points, floored.
    fn get_fee_absolute(&self, amount: &BigUint, fee_bps: &BigUint) -> BigUint {
        if *fee_bps == 0u32 || *amount == 0u32 {
            return BigUint::zero();
        }

        self.mul_div(amount, fee_bps, &BigUint::from(BPS), Rounding::Floor)
    }

    /// Subtraction clamped at zero.
    fn saturating_sub(&self, a: &BigUint, b: &BigUint) -> BigUint {
        if a > b {
            a - b
        } else {
            BigUint::zero()
        }
    }

    /// Converts share units into receipt token units (always 18 decimals).
    fn to_receipt_units(&self, shares: &BigUint, shares_decimals: NumDecimals) -> BigUint {
        match shares_decimals.cmp(&RECEIPT_TOKEN_DECIMALS) {
            Ordering::Equal => shares.clone(),
            Ordering::Less => {
                let factor =
                    BigUint::from(10u64).pow((RECEIPT_TOKEN_DECIMALS - shares_decimals) as u32);
                shares * &factor
            },
            Ordering::Greater => {
                let factor =
                    BigUint::from(10u64).pow((shares_decimals - RECEIPT_TOKEN_DECIMALS) as u32);
                shares / &factor
            },
        }
    }
}
