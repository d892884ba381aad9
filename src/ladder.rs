//! Single-leg ladder builder: position sizing plus a three-rung
//! out-of-the-money strike ladder for covered calls or cash-secured puts.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::config;
use crate::error::AnalyzerError;
use crate::locator::{nearest_at_or_above, nearest_at_or_below};
use crate::models::{OptionQuote, OptionSide};
use crate::rounding::{round_half_even, round_to_strike_step};

/// Position sizing derived once per (symbol, expiration) group from a
/// fixed investment amount and the group's share price.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentBasis {
    pub symbol: String,
    pub share_price: f64,
    pub expiration_date: NaiveDate,
    pub contracts: u32,
    pub shares: u32,
    pub cost_basis: f64,

    pub put_call_ratio: Option<f64>,
    pub beta: Option<f64>,
}

/// Sizing for one contract-lot: whole contracts the amount can carry,
/// the matching share count, and a per-lot cost proxy.
pub fn investment_basis(quote: &OptionQuote, amount: f64) -> Result<InvestmentBasis, AnalyzerError> {
    if quote.share_price <= 0.0 {
        return Err(AnalyzerError::InvalidSharePrice {
            symbol: quote.symbol.clone(),
            share_price: quote.share_price,
        });
    }

    let contracts = (amount / quote.share_price / config::SHARES_PER_CONTRACT) as u32;
    Ok(InvestmentBasis {
        symbol: quote.symbol.clone(),
        share_price: quote.share_price,
        expiration_date: quote.expiration_date,
        contracts,
        shares: contracts * config::SHARES_PER_CONTRACT as u32,
        cost_basis: quote.share_price * quote.share_price / config::SHARES_PER_CONTRACT,
        put_call_ratio: quote.put_call_ratio,
        beta: quote.beta,
    })
}

/// Ladder output: basis fields plus three (strike, price, income) slots.
/// A missing rung leaves its slots absent rather than erroring.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegLadder {
    pub symbol: String,
    pub share_price: f64,
    pub expiration_date: NaiveDate,
    pub contracts: u32,
    pub shares: u32,
    pub cost_basis: f64,

    pub put_call_ratio: Option<f64>,
    pub beta: Option<f64>,

    pub strike_price1: Option<f64>,
    pub strike_price2: Option<f64>,
    pub strike_price3: Option<f64>,

    pub option_price1: Option<f64>,
    pub option_price2: Option<f64>,
    pub option_price3: Option<f64>,

    pub income_percent1: Option<f64>,
    pub income_percent2: Option<f64>,
    pub income_percent3: Option<f64>,
}

/// True when any strike in the snapshot sits off the whole-point grid.
///
/// Deliberately scans the entire snapshot, not just one group, so a
/// single rounding convention applies to every symbol in a run.
pub fn has_fractional_strike(quotes: &[OptionQuote]) -> bool {
    quotes.iter().any(|q| q.strike_price != q.strike_price.trunc())
}

/// Build the three-rung ladder for one (symbol, expiration) group.
///
/// `quotes` is the full snapshot; the group is filtered out of it, while
/// strike-granularity detection still looks at the whole snapshot.
/// Returns Ok(None) when the group is empty or the investment amount
/// cannot cover a single contract.
pub fn leg_ladder(
    quotes: &[OptionQuote],
    symbol: &str,
    expiration: NaiveDate,
    side: OptionSide,
    amount: f64,
) -> Result<Option<LegLadder>, AnalyzerError> {
    let mut group: Vec<&OptionQuote> = quotes
        .iter()
        .filter(|q| q.symbol == symbol && q.expiration_date == expiration)
        .collect();
    group.sort_by(|a, b| {
        a.strike_price
            .partial_cmp(&b.strike_price)
            .unwrap_or(Ordering::Equal)
    });

    let Some(first) = group.first() else {
        return Ok(None);
    };
    let basis = investment_basis(first, amount)?;
    if basis.contracts == 0 {
        return Ok(None);
    }

    let fractional = has_fractional_strike(quotes);
    let multipliers = match side {
        OptionSide::Call => config::CALL_LADDER_TARGETS,
        OptionSide::Put => config::PUT_LADDER_TARGETS,
    };
    let target1 = round_to_strike_step(multipliers[0] * basis.share_price, fractional);
    let target2 = round_to_strike_step(multipliers[1] * basis.share_price, fractional);
    let target3 = round_to_strike_step(multipliers[2] * basis.share_price, fractional);

    let strikes: Vec<f64> = group.iter().map(|q| q.strike_price).collect();

    // Rung 1 hunts away from the money, rung 3 hunts back toward it, so
    // the pair brackets the 1%..3% band from inside.
    let (index1, index3) = match side {
        OptionSide::Call => (
            nearest_at_or_above(&strikes, target1),
            nearest_at_or_below(&strikes, target3),
        ),
        OptionSide::Put => (
            nearest_at_or_below(&strikes, target1),
            nearest_at_or_above(&strikes, target3),
        ),
    };

    // Rung 2 is the positional midpoint when rungs 1 and 3 leave room,
    // otherwise a direct search on the 2% target.
    let index2 = match (index1, index3) {
        (Some(i1), Some(i3)) if i1.abs_diff(i3) > 1 => Some((i1 + i3) / 2),
        _ => match side {
            OptionSide::Call => nearest_at_or_above(&strikes, target2),
            OptionSide::Put => nearest_at_or_below(&strikes, target2),
        },
    };

    let rung = |index: Option<usize>| -> (Option<f64>, Option<f64>, Option<f64>) {
        match index {
            Some(i) => {
                let quote = group[i];
                let price = quote.side(side).last_price;
                let income = round_half_even(price / basis.share_price * 100.0, 2);
                (Some(quote.strike_price), Some(price), Some(income))
            }
            None => (None, None, None),
        }
    };

    let (strike_price1, option_price1, income_percent1) = rung(index1);
    let (strike_price2, option_price2, income_percent2) = rung(index2);
    let (strike_price3, option_price3, income_percent3) = rung(index3);

    Ok(Some(LegLadder {
        symbol: basis.symbol,
        share_price: basis.share_price,
        expiration_date: basis.expiration_date,
        contracts: basis.contracts,
        shares: basis.shares,
        cost_basis: basis.cost_basis,
        put_call_ratio: basis.put_call_ratio,
        beta: basis.beta,
        strike_price1,
        strike_price2,
        strike_price3,
        option_price1,
        option_price2,
        option_price3,
        income_percent1,
        income_percent2,
        income_percent3,
    }))
}
