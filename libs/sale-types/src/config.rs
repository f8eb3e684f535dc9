use crate::SaleError;
use soroban_sdk::{contracttype, Address};

/// Sale configuration - immutable after initialization
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SaleConfig {
    /// Account allowed to manage the whitelist and halt the sale
    pub admin: Address,
    /// Receives accepted contributions and the premint allocation
    pub treasury: Address,
    /// Token distributed by the sale
    pub token: Address,
    /// Asset contributions are paid in
    pub base_asset: Address,
    /// First second purchases are accepted
    pub start_time: u64,
    /// First second purchases are rejected again
    pub end_time: u64,
    /// From this second on the post-lift cap applies
    pub cap_lift_time: u64,
    /// Token units per base-asset unit
    pub rate: i128,
    /// Smallest accepted contribution
    pub min_contribution: i128,
    /// Per-account cumulative cap before `cap_lift_time`
    pub max_contribution: i128,
    /// Per-account cumulative cap from `cap_lift_time` on
    pub post_lift_max_contribution: i128,
}

impl SaleConfig {
    /// Check schedule, rate and contribution bounds
    pub fn validate(&self) -> Result<(), SaleError> {
        if self.end_time <= self.start_time || self.cap_lift_time < self.start_time {
            return Err(SaleError::InvalidSchedule);
        }
        if self.rate <= 0 {
            return Err(SaleError::InvalidRate);
        }
        if self.max_contribution <= 0
            || self.min_contribution < 0
            || self.min_contribution > self.max_contribution
            || self.post_lift_max_contribution < self.max_contribution
        {
            return Err(SaleError::InvalidContribution);
        }
        Ok(())
    }
}

/// How the token supply is split when the sale is initialized
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Allocation {
    /// Entire token supply, held by the sale contract before the split
    pub total_supply: i128,
    /// Sent to the treasury
    pub premint_supply: i128,
    /// Sent to the admin
    pub presale_supply: i128,
}

impl Allocation {
    pub fn validate(&self) -> Result<(), SaleError> {
        if self.total_supply <= 0 || self.premint_supply <= 0 || self.presale_supply <= 0 {
            return Err(SaleError::InvalidSupply);
        }
        match self.premint_supply.checked_add(self.presale_supply) {
            Some(reserved) if reserved <= self.total_supply => Ok(()),
            _ => Err(SaleError::InvalidSupply),
        }
    }

    /// Units left with the sale contract for public distribution
    pub fn public_supply(&self) -> i128 {
        self.total_supply - self.premint_supply - self.presale_supply
    }
}
