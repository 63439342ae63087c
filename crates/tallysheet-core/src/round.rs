//! Quarter-hour rounding policy.
//!
//! Billing rounds up to the next quarter-hour boundary, with one
//! concession: a remainder under 0.08 hours (just shy of five minutes)
//! rounds down to the whole hour instead.

/// Round an hour value to a quarter-hour boundary.
///
/// Values less than 0.08 above the whole hour below them round down to it;
/// everything else lands on the next `.25` / `.5` / `.75` boundary or the
/// next whole hour. Exact quarter boundaries are fixed points, so the
/// function is idempotent.
pub fn round_quarter(hours: f64) -> f64 {
    let base = hours.floor();

    // Under five minutes past the hour is close enough to round down.
    if base <= hours && hours < base + 0.08 {
        return base;
    }

    if hours <= base + 0.25 {
        base + 0.25
    } else if hours <= base + 0.5 {
        base + 0.5
    } else if hours <= base + 0.75 {
        base + 0.75
    } else {
        hours.ceil()
    }
}
