//! Derivation of gains and totals from leaf invested/current values.

use super::portfolio_model::{Holding, Portfolio};

fn derive_gain(holding: &mut Holding) {
    holding.gain = holding.current - holding.invested;
    holding.gain_percentage = if holding.invested > 0.0 {
        holding.gain / holding.invested * 100.0
    } else {
        0.0
    };
}

fn sum_current(holdings: &[Holding]) -> f64 {
    holdings.iter().map(|h| h.current).sum()
}

fn sum_invested(holdings: &[Holding]) -> f64 {
    holdings.iter().map(|h| h.invested).sum()
}

/// Recomputes every derived field of a portfolio from its leaf values.
///
/// Pure over the leaf inputs and idempotent: running it twice, or on its
/// own output, yields identical derived fields. Callers must invoke it
/// before every write so stale totals never reach the store. Negative leaf
/// values are valid (losses, cash adjustments); there are no error paths.
pub fn aggregate(portfolio: &mut Portfolio) {
    let equity = &mut portfolio.equity;
    let non_equity = &mut portfolio.non_equity;
    let emergency = &mut portfolio.emergency;

    equity.direct_stocks.iter_mut().for_each(derive_gain);
    equity.mutual_funds.iter_mut().for_each(derive_gain);
    non_equity.fixed_income_assets.iter_mut().for_each(derive_gain);

    equity.total = sum_current(&equity.direct_stocks) + sum_current(&equity.mutual_funds);

    non_equity.total = non_equity.cash.current
        + non_equity.commodities.gold.current
        + non_equity.commodities.silver.current
        + sum_current(&non_equity.fixed_income_assets);
    non_equity.total_invested = non_equity.cash.invested
        + non_equity.commodities.gold.invested
        + non_equity.commodities.silver.invested
        + sum_invested(&non_equity.fixed_income_assets);

    emergency.total = emergency.invested.current_amount + emergency.bank_account.current_amount;
    emergency.total_invested =
        emergency.invested.invested_amount + emergency.bank_account.invested_amount;

    portfolio.grand_total = equity.total + non_equity.total + emergency.total;
    portfolio.invested = sum_invested(&equity.direct_stocks)
        + sum_invested(&equity.mutual_funds)
        + non_equity.total_invested
        + emergency.total_invested;
    portfolio.current_value = portfolio.grand_total;
}
