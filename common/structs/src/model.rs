#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

/// External protocol family an adapter is wired to.
///
/// Rebasing sources (Aave, Ion) grow the position balance in place. The
/// others mint a share token whose exchange rate floats against the input.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum YieldSourceKind {
    Aave,
    Ion,
    Pendle,
    Dinero,
    Reservoir,
    Elixir,
}

impl YieldSourceKind {
    pub fn is_rebasing(&self) -> bool {
        matches!(self, YieldSourceKind::Aave | YieldSourceKind::Ion)
    }

    pub fn supports_rewards(&self) -> bool {
        matches!(self, YieldSourceKind::Aave | YieldSourceKind::Pendle)
    }
}

/// Immutable wiring of an adapter, set at deployment.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct StrategyConfig<M: ManagedTypeApi> {
    pub kind: YieldSourceKind,
    /// Asset accepted from depositors and paid back on withdrawal.
    pub token_in: EgldOrEsdtTokenIdentifier<M>,
    /// Share or position token received from the yield source.
    pub token_out: TokenIdentifier<M>,
    /// Tokens distributed by the source reward stream, empty when there is none.
    pub reward_tokens: ManagedVec<M, TokenIdentifier<M>>,
    pub shares_decimals: usize,
    pub yield_source: ManagedAddress<M>,
}

impl<M: ManagedTypeApi> StrategyConfig<M> {
    pub fn has_rewards(&self) -> bool {
        self.kind.supports_rewards() && !self.reward_tokens.is_empty()
    }
}

/// Per depositor ledger entry of an adapter.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct RecipientInfo<M: ManagedTypeApi> {
    /// Principal deposited and not yet withdrawn, in `token_in` units.
    pub invested_amount: BigUint<M>,
    /// Yield source shares attributed to the depositor.
    pub total_shares: BigUint<M>,
}

impl<M: ManagedTypeApi> RecipientInfo<M> {
    pub fn new() -> Self {
        RecipientInfo {
            invested_amount: BigUint::zero(),
            total_shares: BigUint::zero(),
        }
    }

    pub fn record_deposit(&mut self, amount: &BigUint<M>, shares: &BigUint<M>) {
        self.invested_amount += amount;
        self.total_shares += shares;
    }

    /// Removes a withdrawn portion. Rounding can make the portion exceed what
    /// is recorded, in which case the fields settle at zero.
    pub fn record_withdrawal(&mut self, investment_portion: &BigUint<M>, shares: &BigUint<M>) {
        self.invested_amount = clamped_sub(&self.invested_amount, investment_portion);
        self.total_shares = clamped_sub(&self.total_shares, shares);
    }

    pub fn is_empty(&self) -> bool {
        self.invested_amount == 0u32 && self.total_shares == 0u32
    }
}

/// Intermediate values of a withdrawal settlement.
pub struct WithdrawalComputation<M: ManagedTypeApi> {
    pub investment_portion: BigUint<M>,
    pub withdrawn_amount: BigUint<M>,
    /// `withdrawn_amount - investment_portion`, negative on a loss.
    pub yield_amount: BigInt<M>,
    pub fee: BigUint<M>,
}

impl<M: ManagedTypeApi> WithdrawalComputation<M> {
    pub fn net_amount(&self) -> BigUint<M> {
        clamped_sub(&self.withdrawn_amount, &self.fee)
    }

    pub fn has_yield(&self) -> bool {
        self.withdrawn_amount > self.investment_portion
    }
}

/// Staking weight and reward checkpoint of one depositor.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct StakerInfo<M: ManagedTypeApi> {
    pub balance: BigUint<M>,
    pub reward_per_token_paid: BigUint<M>,
    pub rewards: BigUint<M>,
}

impl<M: ManagedTypeApi> StakerInfo<M> {
    pub fn new() -> Self {
        StakerInfo {
            balance: BigUint::zero(),
            reward_per_token_paid: BigUint::zero(),
            rewards: BigUint::zero(),
        }
    }
}

fn clamped_sub<M: ManagedTypeApi>(a: &BigUint<M>, b: &BigUint<M>) -> BigUint<M> {
    if a > b {
        a - b
    } else {
        BigUint::zero()
    }
}
