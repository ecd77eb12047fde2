use crate::constants::{FEE_RATE_DENOMINATOR, FEE_RATE_PER_PERCENT, PERCENT_DENOMINATOR};

/// `amount * bps / denominator`, rounded down.
pub fn bps_mul(bps: u64, amount: u64, denominator: u64) -> Option<u64> {
    (amount as u128)
        .checked_mul(bps as u128)?
        .checked_div(denominator as u128)?
        .try_into()
        .ok()
}

/// Converts a fee percentage (0..=100, fractional) to a rate in billionths of a percent.
/// Digits below that resolution are rounded to nearest.
pub fn percent_to_fee_rate(percent: f64) -> Option<u64> {
    if !percent.is_finite() || percent < 0.0 || percent > PERCENT_DENOMINATOR as f64 {
        return None;
    }
    let rate = (percent * FEE_RATE_PER_PERCENT as f64).round() as u64;
    (rate <= FEE_RATE_DENOMINATOR).then_some(rate)
}

/// Splits `amount` into `(net, fee)` where `net = amount * (FEE_RATE_DENOMINATOR - fee_rate) / FEE_RATE_DENOMINATOR`.
pub fn split_fee(amount: u64, fee_rate: u64) -> Option<(u64, u64)> {
    let net = bps_mul(
        FEE_RATE_DENOMINATOR.checked_sub(fee_rate)?,
        amount,
        FEE_RATE_DENOMINATOR,
    )?;
    Some((net, amount.checked_sub(net)?))
}
