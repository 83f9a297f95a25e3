use crate::models::Direction;

/// Leveraged percent return at `target_price` for a position opened at
/// `entry_price`, rounded to one decimal. `None` when any input is missing
/// or non-finite, or the entry is zero; the caller renders "N/A". The sign
/// is surfaced as-is, even when it looks like a data error.
pub fn compute_roi(
    target_price: Option<f64>,
    entry_price: Option<f64>,
    leverage: Option<u32>,
    direction: Direction,
) -> Option<f64> {
    let target = target_price?;
    let entry = entry_price?;
    let leverage = leverage? as f64;
    if entry == 0_f64 || !entry.is_finite() || !target.is_finite() {
        return None;
    }

    let fraction = match direction {
        Direction::Buy => (target - entry) / entry,
        Direction::Sell => (entry - target) / entry,
    };
    Some(round_to_tenth(fraction * 100_f64 * leverage))
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10_f64).round() / 10_f64
}
