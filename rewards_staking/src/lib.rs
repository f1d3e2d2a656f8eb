#![no_std]

multiversx_sc::imports!();

pub mod accrual;
pub mod storage;

use common_constants::DEFAULT_REWARDS_DURATION;
use common_errors::{
    ERROR_ADDRESS_IS_ZERO, ERROR_INVALID_AMOUNT, ERROR_INVALID_DURATION,
    ERROR_INVALID_REWARD_TOKEN, ERROR_INVALID_TOKEN, ERROR_ONLY_STRATEGY,
    ERROR_REWARD_PERIOD_NOT_FINISHED, ERROR_REWARD_TOO_HIGH,
};
use common_structs::StakerInfo;

/// Streams a reward token to the depositors of one strategy adapter,
/// weighted by the shares each depositor holds in it.
///
/// Weight is only moved by the adapter through `registerDeposit` and
/// `registerWithdrawal`; depositors never stake directly.
#[multiversx_sc::contract]
pub trait RewardsStaking:
    storage::Storage
    + accrual::AccrualModule
    + common_math::SharedMathModule
    + common_events::staking_events::StakingEventsModule
{
    /// # Arguments
    /// - `strategy`: Adapter allowed to register staking weight.
    /// - `reward_token`: Token distributed to stakers.
    /// - `rewards_duration`: Streaming window in seconds, the default window when zero.
    #[init]
    fn init(&self, strategy: ManagedAddress, reward_token: TokenIdentifier, rewards_duration: u64) {
        require!(!strategy.is_zero(), ERROR_ADDRESS_IS_ZERO);
        require!(reward_token.is_valid_esdt_identifier(), ERROR_INVALID_TOKEN);

        let duration = if rewards_duration == 0 {
            DEFAULT_REWARDS_DURATION
        } else {
            rewards_duration
        };

        self.strategy_address().set(&strategy);
        self.reward_token().set(&reward_token);
        self.rewards_duration().set(duration);
    }

    #[upgrade]
    fn upgrade(&self) {}

    #[endpoint(registerDeposit)]
    fn register_deposit(&self, depositor: ManagedAddress, weight: BigUint) {
        self.require_strategy_caller();

        let mut staker = self.checkpoint(&depositor);
        staker.balance += &weight;
        self.total_supply().update(|total| *total += &weight);
        self.stakers(&depositor).set(&staker);

        self.staked_event(&depositor, &weight);
    }

    /// Removes staking weight. A weight above the recorded balance removes
    /// the whole balance.
    #[endpoint(registerWithdrawal)]
    fn register_withdrawal(&self, depositor: ManagedAddress, weight: BigUint) {
        self.require_strategy_caller();

        let mut staker = self.checkpoint(&depositor);
        let removed = if weight > staker.balance {
            staker.balance.clone()
        } else {
            weight
        };
        staker.balance -= &removed;
        self.total_supply()
            .update(|total| *total = self.saturating_sub(total, &removed));
        self.stakers(&depositor).set(&staker);

        self.unstaked_event(&depositor, &removed);
    }

    /// Funds a new reward period. Leftovers of a running period are rolled
    /// into the new rate.
    #[only_owner]
    #[payable]
    #[endpoint(notifyRewardAmount)]
    fn notify_reward_amount(&self) {
        let payment = self.call_value().single_esdt();
        let reward_token = self.reward_token().get();
        require!(
            payment.token_identifier == reward_token,
            ERROR_INVALID_REWARD_TOKEN
        );
        require!(payment.amount > 0, ERROR_INVALID_AMOUNT);

        self.update_reward(None);

        let now = self.blockchain().get_block_timestamp();
        let duration = BigUint::from(self.rewards_duration().get());
        let period_finish = self.period_finish().get();

        let reward_rate = if now >= period_finish {
            &payment.amount / &duration
        } else {
            let remaining = BigUint::from(period_finish - now);
            let leftover = remaining * self.reward_rate().get();
            (&payment.amount + &leftover) / &duration
        };

        let balance = self
            .blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::esdt(reward_token), 0);
        require!(reward_rate <= &balance / &duration, ERROR_REWARD_TOO_HIGH);

        let new_finish = now + self.rewards_duration().get();
        self.reward_rate().set(&reward_rate);
        self.last_update_time().set(now);
        self.period_finish().set(new_finish);

        self.reward_added_event(&payment.amount, &reward_rate, new_finish);
    }

    /// Pays the caller everything accrued so far.
    #[endpoint(claimRewards)]
    fn claim_rewards(&self) -> BigUint {
        let caller = self.blockchain().get_caller();
        let mut staker = self.checkpoint(&caller);
        let reward = core::mem::replace(&mut staker.rewards, BigUint::zero());
        self.stakers(&caller).set(&staker);

        if reward > 0 {
            let reward_token = self.reward_token().get();
            self.tx()
                .to(&caller)
                .single_esdt(&reward_token, 0, &reward)
                .transfer();
            self.reward_paid_event(&caller, &reward_token, &reward);
        }

        reward
    }

    #[only_owner]
    #[endpoint(setRewardsDuration)]
    fn set_rewards_duration(&self, duration: u64) {
        require!(duration > 0, ERROR_INVALID_DURATION);
        require!(
            self.blockchain().get_block_timestamp() > self.period_finish().get(),
            ERROR_REWARD_PERIOD_NOT_FINISHED
        );

        self.rewards_duration().set(duration);
        self.rewards_duration_update_event(duration);
    }

    fn checkpoint(&self, depositor: &ManagedAddress) -> StakerInfo<Self::Api> {
        self.update_reward(Some(depositor))
            .unwrap_or_else(|| StakerInfo::new())
    }

    fn require_strategy_caller(&self) {
        let caller = self.blockchain().get_caller();
        require!(
            caller == self.strategy_address().get(),
            ERROR_ONLY_STRATEGY
        );
    }
}
