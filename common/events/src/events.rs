#![no_std]

pub mod fee_events;
pub mod staking_events;
pub mod strategy_events;

pub use common_structs::*;
