#![no_std]

pub const BPS: u64 = 10_000; // 100%
pub const BPS_PRECISION: usize = 4;

/// Maximum performance fee the fee manager accepts, default or custom (25%)
pub const MAX_PERFORMANCE_FEE_BPS: u64 = 2_500;

/// Receipt tokens are always accounted with 18 decimals, whatever the share decimals are
pub const RECEIPT_TOKEN_DECIMALS: usize = 18;

pub const WAD: u128 = 1_000_000_000_000_000_000;
pub const WAD_PRECISION: usize = 18;

/// Precision of the accumulated reward per staked unit
pub const REWARD_PRECISION: u128 = 1_000_000_000_000_000_000;

/// Default distribution window of a reward notification (7 days)
pub const DEFAULT_REWARDS_DURATION: u64 = 604_800;

pub const EGLD_DECIMALS: usize = 18;
