//! Nearest-strike search over a ladder sorted ascending by strike.

/// Index of the strike closest to `target` among those at or above it.
///
/// Scans ascending for the first strike >= target, then lets the
/// next-lower strike win only when it is strictly closer. Returns None
/// when every strike sits below the target.
pub fn nearest_at_or_above(strikes: &[f64], target: f64) -> Option<usize> {
    for (i, &strike) in strikes.iter().enumerate() {
        if strike >= target {
            if i == 0 {
                return Some(i);
            }
            let adjacent = strikes[i - 1];
            if (adjacent - target).abs() < (strike - target).abs() {
                return Some(i - 1);
            }
            return Some(i);
        }
    }
    None
}

/// Index of the strike closest to `target` among those at or below it.
///
/// Mirror of [`nearest_at_or_above`]: scans descending, tie goes to the
/// at-or-below candidate.
pub fn nearest_at_or_below(strikes: &[f64], target: f64) -> Option<usize> {
    for i in (0..strikes.len()).rev() {
        let strike = strikes[i];
        if strike <= target {
            if i + 1 >= strikes.len() {
                return Some(i);
            }
            let adjacent = strikes[i + 1];
            if (adjacent - target).abs() < (strike - target).abs() {
                return Some(i + 1);
            }
            return Some(i);
        }
    }
    None
}
