//! Vertical credit spread enumeration and the delta-based
//! expected-value model used to rank candidates.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::error::AnalyzerError;
use crate::estimate::estimate_side;
use crate::ladder::investment_basis;
use crate::models::{OptionQuote, OptionSide};
use crate::rounding::round_half_even;

/// A two-leg vertical credit spread: sell the leg nearer the money,
/// buy the protective wing further out.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Spread {
    pub symbol: String,
    pub share_price: f64,
    pub expiration_date: NaiveDate,

    pub put_call_ratio: Option<f64>,
    pub beta: Option<f64>,

    pub strike_price_sell: f64,
    pub option_price_sell: f64,
    pub strike_price_buy: f64,
    pub option_price_buy: f64,

    pub max_gain: f64,
    pub max_loss: f64,
    /// Loss per unit of gain, rounded to 4 places. Smaller is better;
    /// 1.0 means risk equals reward.
    pub max_ratio: f64,

    pub delta_sell: f64,
    pub delta_buy: f64,
    pub spread_value: f64,
}

/// Probability-weighted expected value of a credit spread.
///
/// Delta magnitudes stand in for probabilities: the sell leg's delta is
/// the chance the spread does not expire worthless, the buy leg's delta
/// the chance the move runs past the wing for a full loss. Whatever
/// probability is left lands between the strikes and is valued as the
/// mean of the two extremes. Returns None when the deltas make the
/// three buckets ill-posed.
pub fn spread_value(
    max_gain: f64,
    max_loss: f64,
    delta_sell: f64,
    delta_buy: f64,
) -> Option<f64> {
    let chance_expire_worthless = 1.0 - delta_sell.abs();
    let chance_assignment = delta_buy.abs();
    let chance_between = 1.0 - chance_expire_worthless - chance_assignment;

    if chance_between <= 0.0 || chance_expire_worthless == 1.0 || chance_assignment == 0.0 {
        return None;
    }

    let average_between = (max_gain - max_loss) / 2.0;
    Some(
        max_gain * chance_expire_worthless - max_loss * chance_assignment
            + chance_between * average_between,
    )
}

/// Enumerate and rank credit spreads for one (symbol, expiration) group.
///
/// `quotes` is the full snapshot; only strictly out-of-the-money strikes
/// are paired, nearest the money first. Pairs are dropped when either
/// leg's price estimate is unusable, when the credit or the risk is not
/// positive, when a leg lacks a delta, or when the valuation model
/// rejects the deltas. Survivors are sorted descending by expected value
/// and truncated to `limit`. Returns Ok(None) when fewer than two OTM
/// strikes exist or the amount cannot cover a contract.
pub fn credit_spreads(
    quotes: &[OptionQuote],
    symbol: &str,
    expiration: NaiveDate,
    side: OptionSide,
    amount: f64,
    limit: usize,
) -> Result<Option<Vec<Spread>>, AnalyzerError> {
    let mut otm: Vec<&OptionQuote> = quotes
        .iter()
        .filter(|q| q.symbol == symbol && q.expiration_date == expiration)
        .filter(|q| match side {
            OptionSide::Call => q.strike_price > q.share_price,
            OptionSide::Put => q.strike_price < q.share_price,
        })
        .collect();

    // Nearest-to-money first: ascending for calls, descending for puts.
    otm.sort_by(|a, b| {
        let ord = a
            .strike_price
            .partial_cmp(&b.strike_price)
            .unwrap_or(Ordering::Equal);
        match side {
            OptionSide::Call => ord,
            OptionSide::Put => ord.reverse(),
        }
    });

    if otm.len() < 2 {
        return Ok(None);
    }
    let basis = investment_basis(otm[0], amount)?;
    if basis.contracts == 0 {
        return Ok(None);
    }

    let mut spreads = Vec::new();
    for i in 0..otm.len() {
        let sell = otm[i];
        let Some(price_sell) = estimate_side(sell.side(side), side) else {
            continue;
        };
        if price_sell <= 0.0 {
            continue;
        }

        for buy in &otm[i + 1..] {
            let Some(price_buy) = estimate_side(buy.side(side), side) else {
                continue;
            };
            if price_buy <= 0.0 {
                continue;
            }

            let max_gain = price_sell - price_buy;
            let width = match side {
                OptionSide::Call => buy.strike_price - sell.strike_price,
                OptionSide::Put => sell.strike_price - buy.strike_price,
            };
            let max_loss = width - max_gain;
            // Only classical credit spreads: positive reward, positive risk
            if max_gain <= 0.0 || max_loss <= 0.0 {
                continue;
            }

            let (Some(delta_sell), Some(delta_buy)) =
                (sell.side(side).delta, buy.side(side).delta)
            else {
                continue;
            };
            let Some(value) = spread_value(max_gain, max_loss, delta_sell, delta_buy) else {
                continue;
            };

            spreads.push(Spread {
                symbol: basis.symbol.clone(),
                share_price: basis.share_price,
                expiration_date: basis.expiration_date,
                put_call_ratio: basis.put_call_ratio,
                beta: basis.beta,
                strike_price_sell: sell.strike_price,
                option_price_sell: price_sell,
                strike_price_buy: buy.strike_price,
                option_price_buy: price_buy,
                max_gain,
                max_loss,
                max_ratio: round_half_even(max_loss / max_gain, 4),
                delta_sell,
                delta_buy,
                spread_value: value,
            });
        }
    }

    spreads.sort_by(|a, b| {
        b.spread_value
            .partial_cmp(&a.spread_value)
            .unwrap_or(Ordering::Equal)
    });
    spreads.truncate(limit);

    Ok(Some(spreads))
}
