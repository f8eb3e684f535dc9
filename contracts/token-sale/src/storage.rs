use sale_types::{SaleConfig, SaleError};
use soroban_sdk::{contracttype, Address, Env};

// ============================================================================
// SOROBAN RESOURCE LIMITS - Constraints relevant to the sale:
// ============================================================================
// - Write entries per tx: 50 entries / 132 KB
// - Max footprint keys: 100 keys per tx
//
// Design choices:
// - Config, halt flag and raised total live in Instance storage
// - Whitelist and contribution entries are one Persistent entry per account
// - A purchase writes one contribution entry plus instance state; the token
//   and settlement legs touch their own contracts' storage
// - Batch whitelisting writes one entry per account, so batches must stay
//   well below the write-entry limit
// ============================================================================

/// Storage keys for the sale contract
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Sale configuration (Instance storage)
    Config,
    /// Halt flag (Instance storage)
    Halted,
    /// Sum of accepted contributions (Instance storage)
    TotalRaised,
    /// Whitelist: account -> bool (Persistent storage)
    Whitelist(Address),
    /// Cumulative accepted contribution: account -> i128 (Persistent storage)
    Contributed(Address),
}

// TTL constants
const INSTANCE_TTL_THRESHOLD: u32 = 17280; // ~1 day
const INSTANCE_TTL_EXTEND: u32 = 518400; // ~30 days
const PERSISTENT_TTL_THRESHOLD: u32 = 17280;
const PERSISTENT_TTL_EXTEND: u32 = 518400;

/// Extend instance storage TTL
pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}

/// Extend persistent storage TTL for a key
pub fn extend_persistent_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND);
}

// === Config ===

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> Result<SaleConfig, SaleError> {
    extend_instance_ttl(env);
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(SaleError::NotInitialized)
}

pub fn set_config(env: &Env, config: &SaleConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    extend_instance_ttl(env);
}

// === Halt ===

pub fn is_halted(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Halted)
        .unwrap_or(false)
}

pub fn set_halted(env: &Env, halted: bool) {
    env.storage().instance().set(&DataKey::Halted, &halted);
    extend_instance_ttl(env);
}

// === Raised ===

pub fn get_total_raised(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalRaised)
        .unwrap_or(0)
}

pub fn set_total_raised(env: &Env, raised: i128) {
    env.storage().instance().set(&DataKey::TotalRaised, &raised);
}

// === Whitelist ===

pub fn is_whitelisted(env: &Env, account: &Address) -> bool {
    let key = DataKey::Whitelist(account.clone());
    env.storage().persistent().get(&key).unwrap_or(false)
}

pub fn set_whitelisted(env: &Env, account: &Address, value: bool) {
    let key = DataKey::Whitelist(account.clone());
    if value {
        env.storage().persistent().set(&key, &true);
        extend_persistent_ttl(env, &key);
    } else {
        // Unknown accounts read as not whitelisted
        env.storage().persistent().remove(&key);
    }
}

// === Contributions ===

pub fn get_contributed(env: &Env, account: &Address) -> i128 {
    let key = DataKey::Contributed(account.clone());
    env.storage().persistent().get(&key).unwrap_or(0)
}

pub fn set_contributed(env: &Env, account: &Address, amount: i128) {
    let key = DataKey::Contributed(account.clone());
    env.storage().persistent().set(&key, &amount);
    extend_persistent_ttl(env, &key);
}
