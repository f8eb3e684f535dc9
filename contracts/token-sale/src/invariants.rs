// ============================================================================
// SALE INVARIANTS
// ============================================================================
//
// 1. CAP INVARIANTS
//    - An account's cumulative contribution never exceeds the cap in force
//    - Contributions only grow
//
// 2. SETTLEMENT INVARIANTS
//    - Every escrowed payment is split exactly into accepted + refund
//
// 3. ALLOCATION INVARIANTS
//    - premint + presale + public == total supply at initialization
//
// ============================================================================

/// Invariant: cumulative contribution is within the cap
///
/// Property:
///   0 <= contributed <= cap
pub fn contribution_within_cap(contributed: i128, cap: i128) -> bool {
    contributed >= 0 && contributed <= cap
}

/// Invariant: per-account contribution is monotonically non-decreasing
pub fn contribution_monotonic(before: i128, after: i128) -> bool {
    after >= before
}

/// Invariant: payment is fully accounted for
///
/// Property:
///   accepted > 0, refund >= 0, accepted + refund == payment
pub fn payment_conserved(payment: i128, accepted: i128, refund: i128) -> bool {
    accepted > 0 && refund >= 0 && accepted.checked_add(refund) == Some(payment)
}

/// Invariant: the three allocations partition the supply
pub fn allocation_exact(premint: i128, presale: i128, public: i128, total_supply: i128) -> bool {
    premint >= 0
        && presale >= 0
        && public >= 0
        && premint
            .checked_add(presale)
            .and_then(|reserved| reserved.checked_add(public))
            == Some(total_supply)
}
