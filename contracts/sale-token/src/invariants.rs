// ============================================================================
// TOKEN LEDGER INVARIANTS
// ============================================================================
//
// 1. CONSERVATION
//    - sum(balances) + total_burned == initial_supply
//
// 2. NON-NEGATIVITY
//    - No balance, allowance or supply is ever negative
//
// 3. SUPPLY
//    - total_supply only decreases (burns), never increases after issuance
//    - No single balance exceeds the total supply
//
// ============================================================================

/// Invariant: issued units are either held or burned
///
/// Property:
///   sum_of_balances + total_burned == initial_supply
pub fn supply_conserved(initial_supply: i128, sum_of_balances: i128, total_burned: i128) -> bool {
    sum_of_balances.checked_add(total_burned) == Some(initial_supply)
}

/// Invariant: stored amounts are never negative
pub fn amount_non_negative(amount: i128) -> bool {
    amount >= 0
}

/// Invariant: a single holder never owns more than the whole supply
pub fn balance_within_supply(balance: i128, total_supply: i128) -> bool {
    amount_non_negative(balance) && balance <= total_supply
}

/// Invariant: total supply is monotonically non-increasing
pub fn supply_non_increasing(supply_before: i128, supply_after: i128) -> bool {
    supply_after <= supply_before
}
