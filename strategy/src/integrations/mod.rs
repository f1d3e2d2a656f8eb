pub mod dinero;
pub mod elixir;
pub mod lending;
pub mod pendle;
pub mod reservoir;

multiversx_sc::imports!();

use common_errors::ERROR_OPERATION_NOT_SUPPORTED;
use common_math::Rounding;
use common_structs::{StrategyConfig, YieldSourceKind};

/// Routes the generic adapter steps to the protocol shim of the configured kind.
///
/// Every amount returned here is measured as a balance difference around the
/// external call; return values of the yield sources are never trusted.
#[multiversx_sc::module]
pub trait IntegrationsModule:
    lending::LendingIntegrationModule
    + pendle::PendleIntegrationModule
    + dinero::DineroIntegrationModule
    + reservoir::ReservoirIntegrationModule
    + elixir::ElixirIntegrationModule
    + common_math::SharedMathModule
{
    /// Size of the adapter position in yield source units.
    fn position_balance(&self, config: &StrategyConfig<Self::Api>) -> BigUint {
        if config.kind.is_rebasing() {
            self.lending_position(&config.yield_source)
        } else {
            self.blockchain()
                .get_sc_balance(&EgldOrEsdtTokenIdentifier::esdt(config.token_out.clone()), 0)
        }
    }

    /// Puts `amount` of `token_in` to work and returns the shares it minted.
    ///
    /// Share token sources credit the measured share balance growth. A
    /// rebasing position is priced against the shares outstanding, so growth
    /// accrued before the deposit stays with the shares that earned it.
    fn invest(
        &self,
        config: &StrategyConfig<Self::Api>,
        amount: &BigUint,
        aux_data: &ManagedBuffer,
        total_shares: &BigUint,
    ) -> BigUint {
        let before = self.position_balance(config);

        let source = &config.yield_source;
        let token_in = &config.token_in;
        match config.kind {
            YieldSourceKind::Aave | YieldSourceKind::Ion => {
                self.lending_supply(source, token_in, amount)
            },
            YieldSourceKind::Pendle => {
                let min_pt_out = self.pendle_min_out(aux_data);
                self.pendle_buy_pt(source, token_in, amount, &min_pt_out)
            },
            YieldSourceKind::Dinero => self.dinero_deposit(source, token_in, amount),
            YieldSourceKind::Reservoir => self.reservoir_mint(source, token_in, amount),
            YieldSourceKind::Elixir => self.elixir_stake(source, token_in, amount),
        }

        let after = self.position_balance(config);
        let growth = self.saturating_sub(&after, &before);

        if !config.kind.is_rebasing() || *total_shares == 0u32 || before == 0u32 {
            return growth;
        }

        self.mul_div(&growth, total_shares, &before, Rounding::Floor)
    }

    /// Units to hand back to the source when redeeming `shares`.
    ///
    /// A rebasing position grows in place, so the redeemer gets its pro rata
    /// slice of the current position; share tokens are redeemed one to one.
    fn redemption_units(
        &self,
        config: &StrategyConfig<Self::Api>,
        shares: &BigUint,
        total_shares: &BigUint,
    ) -> BigUint {
        if !config.kind.is_rebasing() || *total_shares == 0u32 {
            return shares.clone();
        }

        let position = self.position_balance(config);
        self.mul_div(shares, &position, total_shares, Rounding::Floor)
    }

    /// Redeems `units` and returns the `token_in` amount received.
    fn divest(
        &self,
        config: &StrategyConfig<Self::Api>,
        units: &BigUint,
        aux_data: &ManagedBuffer,
    ) -> BigUint {
        if *units == 0u32 {
            return BigUint::zero();
        }

        let before = self.blockchain().get_sc_balance(&config.token_in, 0);

        let source = &config.yield_source;
        let token_out = &config.token_out;
        match config.kind {
            YieldSourceKind::Aave | YieldSourceKind::Ion => {
                self.lending_withdraw(source, &config.token_in, units)
            },
            YieldSourceKind::Pendle => {
                let min_token_out = self.pendle_min_out(aux_data);
                self.pendle_sell_pt(source, token_out, units, &min_token_out)
            },
            YieldSourceKind::Dinero => self.dinero_redeem(source, token_out, units),
            YieldSourceKind::Reservoir => self.reservoir_redeem(source, token_out, units),
            YieldSourceKind::Elixir => self.elixir_unstake(source, token_out, units),
        }

        let after = self.blockchain().get_sc_balance(&config.token_in, 0);
        self.saturating_sub(&after, &before)
    }

    /// Pulls the source reward stream into the adapter. Callers measure what arrived.
    fn claim_source_rewards(&self, config: &StrategyConfig<Self::Api>) {
        match config.kind {
            YieldSourceKind::Aave => self.lending_claim_rewards(&config.yield_source),
            YieldSourceKind::Pendle => self.pendle_redeem_rewards(&config.yield_source),
            _ => sc_panic!(ERROR_OPERATION_NOT_SUPPORTED),
        }
    }
}
