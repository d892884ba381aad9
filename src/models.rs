use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Which side of a quote an operation works on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OptionSide {
    Call,
    Put,
}

/// Market data for one side (call or put) of a strike.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SideQuote {
    pub last_price: f64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bid_price: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ask_price: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_interest: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub implied_volatility: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub delta: Option<f64>,
}

/// One row of snapshot market data for a symbol/strike/expiration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionQuote {
    pub symbol: String,
    pub share_price: f64,
    pub strike_price: f64,
    pub expiration_date: NaiveDate,
    pub call: SideQuote,
    pub put: SideQuote,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub put_call_ratio: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub beta: Option<f64>,
}

impl OptionQuote {
    pub fn side(&self, side: OptionSide) -> &SideQuote {
        match side {
            OptionSide::Call => &self.call,
            OptionSide::Put => &self.put,
        }
    }
}
