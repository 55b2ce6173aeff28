//! Human-readable span between the two instants of an interval row.
//! The policy varies by type: hotels count nights, cruises count days,
//! anything else (flights, trains) shows hours and minutes.

use super::time::{MS_PER_DAY, MS_PER_MINUTE};
use crate::models::item_type::ItemType;

/// Stable stand-in for `i64::div_ceil` (unstable `int_roundings` on signed
/// ints): divide rounding toward positive infinity.
fn div_ceil(lhs: i64, rhs: i64) -> i64 {
    let d = lhs / rhs;
    let r = lhs % rhs;
    if r != 0 && (r > 0) == (rhs > 0) { d + 1 } else { d }
}

/// Callers guarantee start <= end; interval rows with reversed instants are
/// a sheet data error and produce nonsense rather than a crash.
pub fn duration_label(kind: &ItemType, start_ms: i64, end_ms: i64) -> String {
    let delta = end_ms - start_ms;
    match kind {
        ItemType::Hotel => {
            // Raw ceil of the millisecond delta, clamped so a same-day
            // check-in/check-out still reads "1 night".
            let nights = div_ceil(delta, MS_PER_DAY).max(1);
            format!("{} night{}", nights, if nights != 1 { "s" } else { "" })
        }
        ItemType::Cruise => {
            let days = div_ceil(delta, MS_PER_DAY);
            format!("{} day{}", days, if days > 1 { "s" } else { "" })
        }
        _ => {
            let mins = (delta as f64 / MS_PER_MINUTE as f64).round() as i64;
            format!("{}h {}m", mins / 60, mins % 60)
        }
    }
}
