use chrono::NaiveDate;
use options_analyzer::models::{OptionQuote, OptionSide, SideQuote};
use options_analyzer::processor::build_spreads;
use options_analyzer::spread::credit_spreads;

fn expiry() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 9, 19).unwrap()
}

/// Put quote with a tight book around `last` so the estimator returns
/// the last price unchanged.
fn put_quote(symbol: &str, share: f64, strike: f64, last: f64, delta: Option<f64>) -> OptionQuote {
    OptionQuote {
        symbol: symbol.to_string(),
        share_price: share,
        strike_price: strike,
        expiration_date: expiry(),
        call: SideQuote::default(),
        put: SideQuote {
            last_price: last,
            bid_price: Some(last - 0.05),
            ask_price: Some(last + 0.05),
            open_interest: Some(250.0),
            implied_volatility: Some(0.30),
            delta,
        },
        put_call_ratio: None,
        beta: None,
    }
}

/// OTM put chain under share price 100: strikes 90..=99, premium and
/// delta magnitude shrinking away from the money.
fn put_chain(symbol: &str) -> Vec<OptionQuote> {
    (90..=99)
        .map(|s| {
            let distance = (s - 89) as f64;
            put_quote(
                symbol,
                100.0,
                s as f64,
                distance * 0.25,
                Some(-(distance * 0.045)),
            )
        })
        .collect()
}

#[test]
fn test_put_spreads_hold_credit_invariants() {
    let quotes = put_chain("XYZ");
    let spreads = credit_spreads(&quotes, "XYZ", expiry(), OptionSide::Put, 100_000.0, 50)
        .unwrap()
        .unwrap();

    assert!(!spreads.is_empty());
    for spread in &spreads {
        assert!(spread.max_gain > 0.0);
        assert!(spread.max_loss > 0.0);
        // Put sell leg sits nearer the money than its wing
        assert!(spread.strike_price_sell > spread.strike_price_buy);
        assert!(spread.strike_price_sell < spread.share_price);
        assert!(spread.max_ratio > 0.0);
    }
}

#[test]
fn test_spreads_ranked_and_truncated() {
    let quotes = put_chain("XYZ");
    let spreads = credit_spreads(&quotes, "XYZ", expiry(), OptionSide::Put, 100_000.0, 5)
        .unwrap()
        .unwrap();

    assert_eq!(spreads.len(), 5);
    for pair in spreads.windows(2) {
        assert!(pair[0].spread_value >= pair[1].spread_value);
    }
}

#[test]
fn test_leg_without_delta_is_skipped() {
    let mut quotes = put_chain("XYZ");
    // Strip the delta from strike 99; no pair may use it
    quotes.last_mut().unwrap().put.delta = None;

    let spreads = credit_spreads(&quotes, "XYZ", expiry(), OptionSide::Put, 100_000.0, 50)
        .unwrap()
        .unwrap();

    assert!(!spreads.is_empty());
    for spread in &spreads {
        assert_ne!(spread.strike_price_sell, 99.0);
        assert_ne!(spread.strike_price_buy, 99.0);
    }
}

#[test]
fn test_unusable_market_is_skipped() {
    let mut quotes = put_chain("XYZ");
    // Cross the book on strike 98
    let q = &mut quotes[8];
    assert_eq!(q.strike_price, 98.0);
    q.put.bid_price = Some(3.0);
    q.put.ask_price = Some(2.0);

    let spreads = credit_spreads(&quotes, "XYZ", expiry(), OptionSide::Put, 100_000.0, 50)
        .unwrap()
        .unwrap();

    for spread in &spreads {
        assert_ne!(spread.strike_price_sell, 98.0);
        assert_ne!(spread.strike_price_buy, 98.0);
    }
}

#[test]
fn test_too_few_otm_strikes_is_no_result() {
    // Only one strike below the share price
    let quotes = vec![
        put_quote("XYZ", 100.0, 99.0, 2.0, Some(-0.40)),
        put_quote("XYZ", 100.0, 105.0, 0.5, Some(-0.70)),
    ];
    let result = credit_spreads(&quotes, "XYZ", expiry(), OptionSide::Put, 100_000.0, 50).unwrap();
    assert!(result.is_none());
}

#[test]
fn test_call_spreads_use_upper_wing() {
    let quotes: Vec<OptionQuote> = (101..=108)
        .map(|s| {
            let distance = (109 - s) as f64;
            OptionQuote {
                symbol: "XYZ".to_string(),
                share_price: 100.0,
                strike_price: s as f64,
                expiration_date: expiry(),
                call: SideQuote {
                    last_price: distance * 0.30,
                    bid_price: Some(distance * 0.30 - 0.05),
                    ask_price: Some(distance * 0.30 + 0.05),
                    open_interest: Some(100.0),
                    implied_volatility: Some(0.25),
                    delta: Some(distance * 0.05),
                },
                put: SideQuote::default(),
                put_call_ratio: None,
                beta: None,
            }
        })
        .collect();

    let spreads = credit_spreads(&quotes, "XYZ", expiry(), OptionSide::Call, 100_000.0, 50)
        .unwrap()
        .unwrap();

    assert!(!spreads.is_empty());
    for spread in &spreads {
        // Call sell leg is the lower strike, wing is above it
        assert!(spread.strike_price_buy > spread.strike_price_sell);
        assert!(spread.strike_price_sell > spread.share_price);
        assert!(spread.max_gain > 0.0);
        assert!(spread.max_loss > 0.0);
    }
}

#[test]
fn test_batch_spreads_are_deterministic() {
    let mut quotes = put_chain("AAA");
    quotes.extend(put_chain("BBB"));

    let first = build_spreads(&quotes, OptionSide::Put, 100_000.0, 10).unwrap();
    let second = build_spreads(&quotes, OptionSide::Put, 100_000.0, 10).unwrap();

    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
    for pair in first.windows(2) {
        assert!(pair[0].spread_value >= pair[1].spread_value);
    }
}
