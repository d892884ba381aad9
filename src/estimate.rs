//! Best-guess trade price from last/bid/ask for one side of a quote.

use crate::models::{OptionSide, SideQuote};

/// Collapse last/bid/ask into a single usable price estimate.
///
/// Returns None for unusable markets: missing or zero bid/ask, a crossed
/// book (bid >= ask), or a stale zero last. Otherwise the last price is
/// trusted when it sits inside the bid/ask band, and pushed toward the
/// credible side of the book when it strays:
/// - puts trading at or under the bid come back as 90/10 bid-weighted
/// - calls trading at or over the ask come back as 90/10 ask-weighted
/// - anything overshooting the far side of the band falls to the midpoint
pub fn best_guess_price(
    side: OptionSide,
    last: f64,
    bid: Option<f64>,
    ask: Option<f64>,
) -> Option<f64> {
    let bid = bid?;
    let ask = ask?;
    if bid == 0.0 || ask == 0.0 || bid >= ask || last == 0.0 {
        return None;
    }

    let midpoint = (bid + ask) / 2.0;
    let weighted_low = bid * 0.75 + ask * 0.25;
    let weighted_high = bid * 0.25 + ask * 0.75;

    let estimate = match side {
        OptionSide::Put => {
            if last >= weighted_low && last <= weighted_high {
                last
            } else if last > bid && last < weighted_low {
                last
            } else if last <= bid {
                bid * 0.90 + ask * 0.10
            } else {
                midpoint
            }
        }
        OptionSide::Call => {
            if last >= weighted_low && last <= weighted_high {
                last
            } else if last > weighted_high && last < ask {
                last
            } else if last >= ask {
                ask * 0.90 + bid * 0.10
            } else {
                midpoint
            }
        }
    };

    Some(estimate)
}

/// Estimate from a full side quote.
pub fn estimate_side(quote: &SideQuote, side: OptionSide) -> Option<f64> {
    best_guess_price(side, quote.last_price, quote.bid_price, quote.ask_price)
}
