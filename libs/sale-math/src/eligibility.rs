/// Amount of a requested contribution the sale will accept
///
/// # Arguments
/// * `cap` - Cumulative per-account cap currently in force
/// * `contributed` - What the account has already had accepted
/// * `requested` - Amount offered in this purchase
/// * `min_contribution` - Floor below which nothing is accepted
///
/// # Returns
/// `min(requested, cap - contributed)`, or 0 when that is below the floor
/// or not positive.
pub fn eligible_amount(cap: i128, contributed: i128, requested: i128, min_contribution: i128) -> i128 {
    let remaining = cap.saturating_sub(contributed).max(0);
    let candidate = requested.min(remaining);

    if candidate <= 0 || candidate < min_contribution {
        0
    } else {
        candidate
    }
}

/// Token units issued for an accepted contribution, `None` on overflow
pub fn tokens_for(accepted: i128, rate: i128) -> Option<i128> {
    accepted.checked_mul(rate)
}

/// Split a payment into (accepted, refund)
pub fn split_payment(payment: i128, accepted: i128) -> (i128, i128) {
    (accepted, payment - accepted)
}
