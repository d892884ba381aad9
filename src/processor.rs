//! Batch runs over the snapshot: one independent computation per
//! (symbol, expiration) group, ranked collections out.

use chrono::NaiveDate;
use rayon::prelude::*;
use std::cmp::Ordering;
use std::collections::BTreeSet;
use tracing::debug;

use crate::error::AnalyzerError;
use crate::ladder::{leg_ladder, LegLadder};
use crate::models::{OptionQuote, OptionSide};
use crate::spread::{credit_spreads, Spread};

/// Distinct symbols in the snapshot, sorted for deterministic runs.
pub fn symbols(quotes: &[OptionQuote]) -> BTreeSet<String> {
    quotes.iter().map(|q| q.symbol.clone()).collect()
}

/// Distinct (symbol, expiration) grouping keys, sorted.
pub fn groups(quotes: &[OptionQuote]) -> BTreeSet<(String, NaiveDate)> {
    quotes
        .iter()
        .map(|q| (q.symbol.clone(), q.expiration_date))
        .collect()
}

/// One ladder per group, ranked descending by rung-1 income percent
/// (groups without a rung-1 income sort as zero).
pub fn build_ladders(
    quotes: &[OptionQuote],
    side: OptionSide,
    amount: f64,
) -> Result<Vec<LegLadder>, AnalyzerError> {
    let keys: Vec<(String, NaiveDate)> = groups(quotes).into_iter().collect();

    let ladders: Vec<Option<LegLadder>> = keys
        .par_iter()
        .map(|(symbol, expiration)| leg_ladder(quotes, symbol, *expiration, side, amount))
        .collect::<Result<_, _>>()?;

    let mut ladders: Vec<LegLadder> = ladders.into_iter().flatten().collect();
    debug!(groups = keys.len(), ladders = ladders.len(), "ladder pass done");

    ladders.sort_by(|a, b| {
        let a_income = a.income_percent1.unwrap_or(0.0);
        let b_income = b.income_percent1.unwrap_or(0.0);
        b_income.partial_cmp(&a_income).unwrap_or(Ordering::Equal)
    });
    Ok(ladders)
}

/// Top `limit` spreads per group, flattened and ranked descending by
/// expected value across the whole snapshot.
pub fn build_spreads(
    quotes: &[OptionQuote],
    side: OptionSide,
    amount: f64,
    limit: usize,
) -> Result<Vec<Spread>, AnalyzerError> {
    let keys: Vec<(String, NaiveDate)> = groups(quotes).into_iter().collect();

    let per_group: Vec<Option<Vec<Spread>>> = keys
        .par_iter()
        .map(|(symbol, expiration)| {
            credit_spreads(quotes, symbol, *expiration, side, amount, limit)
        })
        .collect::<Result<_, _>>()?;

    let mut spreads: Vec<Spread> = per_group.into_iter().flatten().flatten().collect();
    debug!(groups = keys.len(), spreads = spreads.len(), "spread pass done");

    spreads.sort_by(|a, b| {
        b.spread_value
            .partial_cmp(&a.spread_value)
            .unwrap_or(Ordering::Equal)
    });
    Ok(spreads)
}
