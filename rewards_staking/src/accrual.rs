use common_constants::REWARD_PRECISION;
use common_math::Rounding;
use common_structs::StakerInfo;

use crate::storage;

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait AccrualModule: storage::Storage + common_math::SharedMathModule {
    #[view(lastTimeRewardApplicable)]
    fn last_time_reward_applicable(&self) -> u64 {
        let now = self.blockchain().get_block_timestamp();
        core::cmp::min(now, self.period_finish().get())
    }

    #[view(rewardPerToken)]
    fn reward_per_token(&self) -> BigUint {
        let stored = self.reward_per_token_stored().get();
        let total_supply = self.total_supply().get();
        if total_supply == 0u32 {
            return stored;
        }

        let last_update = self.last_update_time().get();
        let applicable = self.last_time_reward_applicable();
        let elapsed = applicable.saturating_sub(last_update);
        if elapsed == 0 {
            return stored;
        }

        let released = self.reward_rate().get() * BigUint::from(elapsed);
        let increase = self.mul_div(
            &released,
            &BigUint::from(REWARD_PRECISION),
            &total_supply,
            Rounding::Floor,
        );

        stored + increase
    }

    /// Rewards accrued by `depositor` and not yet claimed.
    #[view(earned)]
    fn earned(&self, depositor: ManagedAddress) -> BigUint {
        let staker = self.get_staker(&depositor);
        self.earned_with(&staker, &self.reward_per_token())
    }

    #[view(getStakerInfo)]
    fn staker_info(&self, depositor: ManagedAddress) -> StakerInfo<Self::Api> {
        self.get_staker(&depositor)
    }

    fn get_staker(&self, depositor: &ManagedAddress) -> StakerInfo<Self::Api> {
        let mapper = self.stakers(depositor);
        if mapper.is_empty() {
            StakerInfo::new()
        } else {
            mapper.get()
        }
    }

    fn earned_with(&self, staker: &StakerInfo<Self::Api>, reward_per_token: &BigUint) -> BigUint {
        let delta = if reward_per_token > &staker.reward_per_token_paid {
            reward_per_token - &staker.reward_per_token_paid
        } else {
            BigUint::zero()
        };

        let pending = self.mul_div(
            &staker.balance,
            &delta,
            &BigUint::from(REWARD_PRECISION),
            Rounding::Floor,
        );

        pending + &staker.rewards
    }

    /// Checkpoints the global accumulator and, when given, the depositor's
    /// pending rewards. Must run before any balance or rate change.
    fn update_reward(&self, depositor: Option<&ManagedAddress>) -> Option<StakerInfo<Self::Api>> {
        let reward_per_token = self.reward_per_token();
        self.reward_per_token_stored().set(&reward_per_token);
        self.last_update_time()
            .set(self.last_time_reward_applicable());

        depositor.map(|address| {
            let mut staker = self.get_staker(address);
            staker.rewards = self.earned_with(&staker, &reward_per_token);
            staker.reward_per_token_paid = reward_per_token;
            staker
        })
    }
}
