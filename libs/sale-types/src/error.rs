use soroban_sdk::contracterror;

/// Broad category of a rejected operation.
///
/// Codes are grouped by range so the category can be read off the raw value:
/// 1-9 validation, 10-19 authorization, 20-39 invariant, 40-49 phase.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// Malformed parameters, rejected before any state is created
    Validation,
    /// Caller lacks the required role
    Authorization,
    /// Operation would breach a balance, allowance, supply or cap invariant
    InvariantViolation,
    /// Operation attempted outside its valid sale phase
    Phase,
}

fn kind_of(code: u32) -> ErrorKind {
    match code {
        0..=9 => ErrorKind::Validation,
        10..=19 => ErrorKind::Authorization,
        20..=39 => ErrorKind::InvariantViolation,
        _ => ErrorKind::Phase,
    }
}

/// Errors returned by the token ledger contract
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd)]
#[repr(u32)]
pub enum TokenError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    /// Initial supply must be positive
    InvalidSupply = 3,
    /// Caller is not the administrator
    Unauthorized = 10,
    /// Token is not yet transferable and `from` is not privileged
    TransfersLocked = 11,
    NegativeAmount = 20,
    InsufficientBalance = 21,
    InsufficientAllowance = 22,
    /// Destination is the ledger's own contract account
    InvalidDestination = 23,
    /// Emergency drain pointed at the ledger's own asset
    OwnAssetDrain = 24,
    Overflow = 25,
}

impl TokenError {
    pub fn kind(&self) -> ErrorKind {
        kind_of(*self as u32)
    }
}

/// Errors returned by the sale controller contract
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd)]
#[repr(u32)]
pub enum SaleError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    /// Total, premint or presale supply is not positive, or the split exceeds the total
    InvalidSupply = 3,
    /// The controller does not hold the whole token supply at initialisation
    SupplyMismatch = 4,
    /// end <= start, or cap lift before start
    InvalidSchedule = 5,
    InvalidRate = 6,
    /// max <= 0, min < 0, min > max, or post-lift cap below max
    InvalidContribution = 7,
    /// Batch whitelist arrays differ in length
    LengthMismatch = 8,
    /// Admin or treasury is the sale contract itself
    InvalidAccount = 9,
    /// Caller is not the sale admin
    Unauthorized = 10,
    NotWhitelisted = 11,
    NegativeAmount = 20,
    /// Requested amount or remaining headroom is below the minimum contribution
    NothingEligible = 21,
    /// Controller's token balance cannot cover the purchase
    AllocationExhausted = 22,
    Overflow = 23,
    /// Tokens cannot be issued to the sale contract itself
    InvalidBeneficiary = 24,
    NotStarted = 40,
    Ended = 41,
    Halted = 42,
}

impl SaleError {
    pub fn kind(&self) -> ErrorKind {
        kind_of(*self as u32)
    }
}
