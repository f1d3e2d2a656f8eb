use multiversx_sc::types::TestTokenIdentifier;
use multiversx_sc_scenario::imports::{MxscPath, TestAddress};

pub const STRATEGY_PATH: MxscPath = MxscPath::new("output/strategy.mxsc.json");
pub const FEE_MANAGER_PATH: MxscPath = MxscPath::new("../fee_manager/output/fee-manager.mxsc.json");
pub const REWARDS_STAKING_PATH: MxscPath =
    MxscPath::new("../rewards_staking/output/rewards-staking.mxsc.json");
pub const YIELD_SOURCE_MOCK_PATH: MxscPath =
    MxscPath::new("../yield_source_mock/output/yield-source-mock.mxsc.json");

pub const OWNER_ADDRESS: TestAddress = TestAddress::new("owner");
pub const MANAGER_ADDRESS: TestAddress = TestAddress::new("strategy-manager");
pub const FEE_COLLECTOR: TestAddress = TestAddress::new("fee-collector");
pub const ALICE: TestAddress = TestAddress::new("alice");
pub const BOB: TestAddress = TestAddress::new("bob");
pub const STRANGER: TestAddress = TestAddress::new("stranger");

pub const USDC_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("USDC-123456");
pub const USDC_DECIMALS: usize = 6;
pub const XUSDC_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("XUSDC-123456");
pub const APXEGLD_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("APXEGLD-123456");
pub const EGLD_DECIMALS: usize = 18;
pub const REWARD_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("REWARD-123456");
pub const INCENTIVE_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("INCENT-123456");

/// 10% default performance fee.
pub const DEFAULT_FEE_BPS: u64 = 1_000;
pub const REWARDS_DURATION: u64 = 1_000;
