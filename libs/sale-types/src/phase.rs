use soroban_sdk::contracttype;

/// Sale phase, derived from the ledger clock and the halt flag.
///
/// Never stored: every entry point recomputes it from `(config, now, halted)`.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Phase {
    /// now < start_time
    Pending,
    /// start_time <= now < end_time and not halted
    Open,
    /// Open window, but the admin has halted the sale
    Halted,
    /// now >= end_time
    Closed,
}

impl Phase {
    /// Only an open sale accepts purchases
    pub fn accepts_purchases(&self) -> bool {
        matches!(self, Phase::Open)
    }
}
