// -----------------------------------------------
// POSITION SIZING
// -----------------------------------------------
pub const DEFAULT_INVESTMENT_AMOUNT: f64 = 100_000.0;
pub const SHARES_PER_CONTRACT: f64 = 100.0;

// -----------------------------------------------
// LADDER TARGETS
// -----------------------------------------------
// Percent-of-share-price multipliers for the three rungs,
// nearest the money first.
pub const CALL_LADDER_TARGETS: [f64; 3] = [1.01, 1.02, 1.03];
pub const PUT_LADDER_TARGETS: [f64; 3] = [0.99, 0.98, 0.97];

// -----------------------------------------------
// SPREAD RANKING
// -----------------------------------------------
// Spreads kept per (symbol, expiration) group after ranking
// by expected value.
pub const SPREAD_RESULT_LIMIT: usize = 10;

// -----------------------------------------------
// FILE NAMES
// -----------------------------------------------
pub const SNAPSHOT_FILE: &str = "options_prices.csv";
pub const CALL_LADDER_FILE: &str = "options_values.csv";
pub const PUT_LADDER_FILE: &str = "options_puts.csv";
pub const CALL_SPREAD_FILE: &str = "options_call_spreads.csv";
pub const PUT_SPREAD_FILE: &str = "options_put_spreads.csv";
pub const SUMMARY_FILE: &str = "analysis_summary.json";
