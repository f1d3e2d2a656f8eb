#![no_std]

pub mod proxy_fee_manager;
pub mod proxy_rewards_staking;
pub mod proxy_strategy;
pub mod proxy_yield_source_mock;

// External protocol interfaces
pub mod proxy_lending_pool;
pub mod proxy_pendle_router;
pub mod proxy_pirex_eth;
pub mod proxy_saving_module;
pub mod proxy_staked_deusd;
