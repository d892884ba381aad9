//! Snapshot boundary: CSV in, CSV reports out. The engine itself never
//! touches files; everything here just maps rows to and from models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use crate::error::AnalyzerError;
use crate::ladder::LegLadder;
use crate::models::{OptionQuote, SideQuote};
use crate::spread::Spread;

/// Flat row matching the snapshot file's column layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotRow {
    pub symbol: String,
    pub share_price: f64,
    pub beta: Option<f64>,
    pub strike_price: f64,
    pub expiration_date: NaiveDate,
    pub put_call_ratio: Option<f64>,

    pub call_last_price: f64,
    pub call_bid_price: Option<f64>,
    pub call_ask_price: Option<f64>,
    pub call_open_interest: Option<f64>,
    pub call_implied_volatility: Option<f64>,
    pub call_delta: Option<f64>,

    pub put_last_price: f64,
    pub put_bid_price: Option<f64>,
    pub put_ask_price: Option<f64>,
    pub put_open_interest: Option<f64>,
    pub put_implied_volatility: Option<f64>,
    pub put_delta: Option<f64>,
}

impl From<SnapshotRow> for OptionQuote {
    fn from(row: SnapshotRow) -> Self {
        OptionQuote {
            symbol: row.symbol,
            share_price: row.share_price,
            strike_price: row.strike_price,
            expiration_date: row.expiration_date,
            call: SideQuote {
                last_price: row.call_last_price,
                bid_price: row.call_bid_price,
                ask_price: row.call_ask_price,
                open_interest: row.call_open_interest,
                implied_volatility: row.call_implied_volatility,
                delta: row.call_delta,
            },
            put: SideQuote {
                last_price: row.put_last_price,
                bid_price: row.put_bid_price,
                ask_price: row.put_ask_price,
                open_interest: row.put_open_interest,
                implied_volatility: row.put_implied_volatility,
                delta: row.put_delta,
            },
            put_call_ratio: row.put_call_ratio,
            beta: row.beta,
        }
    }
}

/// Load the quote snapshot from a CSV file.
pub fn load_snapshot(path: impl AsRef<Path>) -> Result<Vec<OptionQuote>, AnalyzerError> {
    let mut reader = csv::Reader::from_path(path.as_ref())?;
    let mut quotes = Vec::new();
    for row in reader.deserialize::<SnapshotRow>() {
        quotes.push(row?.into());
    }
    info!(quotes = quotes.len(), path = %path.as_ref().display(), "snapshot loaded");
    Ok(quotes)
}

/// Write the ladder report.
pub fn write_ladders(path: impl AsRef<Path>, ladders: &[LegLadder]) -> Result<(), AnalyzerError> {
    let mut writer = csv::Writer::from_path(path.as_ref())?;
    for ladder in ladders {
        writer.serialize(ladder)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write the spread report.
pub fn write_spreads(path: impl AsRef<Path>, spreads: &[Spread]) -> Result<(), AnalyzerError> {
    let mut writer = csv::Writer::from_path(path.as_ref())?;
    for spread in spreads {
        writer.serialize(spread)?;
    }
    writer.flush()?;
    Ok(())
}
