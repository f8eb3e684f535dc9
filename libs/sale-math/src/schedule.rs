use sale_types::{Phase, SaleConfig};

/// Phase of the sale at `now`
///
/// The window is half-open: `[start_time, end_time)`. The halt flag only
/// matters inside the window.
pub fn phase_at(config: &SaleConfig, now: u64, halted: bool) -> Phase {
    if now < config.start_time {
        Phase::Pending
    } else if now >= config.end_time {
        Phase::Closed
    } else if halted {
        Phase::Halted
    } else {
        Phase::Open
    }
}

/// Per-account cumulative cap in force at `now`
pub fn effective_cap(config: &SaleConfig, now: u64) -> i128 {
    if now < config.cap_lift_time {
        config.max_contribution
    } else {
        config.post_lift_max_contribution
    }
}
