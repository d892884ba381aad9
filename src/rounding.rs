/// Round to `decimals` places, ties to even (banker's rounding).
pub fn round_half_even(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round_ties_even() / factor
}

/// Round a target price to the strike grid: half-point increments when
/// the snapshot carries fractional strikes, whole points otherwise.
pub fn round_to_strike_step(price: f64, fractional: bool) -> f64 {
    if fractional {
        (price * 2.0).round_ties_even() / 2.0
    } else {
        price.round_ties_even()
    }
}
