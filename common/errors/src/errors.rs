#![no_std]

pub static ERROR_ASSET_MISMATCH: &[u8] = b"Asset mismatch.";

pub static ERROR_INVALID_AMOUNT: &[u8] = b"Invalid amount.";

pub static ERROR_INSUFFICIENT_SHARES: &[u8] = b"Insufficient shares.";

pub static ERROR_NO_POSITION: &[u8] = b"Depositor has no position.";

pub static ERROR_OPERATION_NOT_SUPPORTED: &[u8] = b"Operation not supported.";

pub static ERROR_NO_SHARES_MINTED: &[u8] = b"Yield source did not mint any shares.";

pub static ERROR_REENTRANCY: &[u8] = b"Operation already ongoing.";

pub static ERROR_ONLY_STRATEGY_MANAGER: &[u8] = b"Only the strategy manager can call this endpoint.";

pub static ERROR_ONLY_STRATEGY: &[u8] = b"Only the strategy can call this endpoint.";

pub static ERROR_INVALID_AUX_DATA: &[u8] = b"Invalid auxiliary data for this yield source.";

pub static ERROR_INVALID_SHARES_DECIMALS: &[u8] = b"Invalid shares decimals.";

pub static ERROR_INVALID_TOKEN: &[u8] = b"Invalid token identifier.";

pub static ERROR_ADDRESS_IS_ZERO: &[u8] = b"Address is zero.";

pub static ERROR_REWARDS_STAKING_NOT_SET: &[u8] = b"Rewards staking address not set.";

pub static ERROR_FEE_TOO_HIGH: &[u8] = b"Performance fee exceeds the maximum allowed.";

pub static ERROR_FEE_ADDRESS_NOT_SET: &[u8] = b"Fee address not set.";

pub static ERROR_SLIPPAGE_EXCEEDED: &[u8] = b"Output amount below the minimum requested.";

pub static ERROR_INSUFFICIENT_LIQUIDITY: &[u8] = b"Not enough liquidity in the yield source.";

pub static ERROR_INSUFFICIENT_POSITION: &[u8] = b"Not enough balance in the yield source position.";

pub static ERROR_INVALID_EXCHANGE_RATE: &[u8] = b"Exchange rate must be greater than zero.";

pub static ERROR_REWARD_TOO_HIGH: &[u8] = b"Provided reward too high.";

pub static ERROR_REWARD_PERIOD_NOT_FINISHED: &[u8] =
    b"Previous rewards period must be complete before changing the duration.";

pub static ERROR_INVALID_DURATION: &[u8] = b"Rewards duration must be greater than zero.";

pub static ERROR_INVALID_REWARD_TOKEN: &[u8] = b"Payment is not the reward token.";
