use sale_types::TokenError;
use soroban_sdk::{contracttype, Address, Env, String};

/// Storage keys for the token contract
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Administrator address (Instance storage)
    Administrator,
    /// Account credited with the initial supply (Instance storage)
    Issuer,
    /// Name, symbol, decimals (Instance storage)
    Metadata,
    /// Transferability gate (Instance storage)
    Transferable,
    /// Current total supply (Instance storage)
    TotalSupply,
    /// Cumulative burned units (Instance storage)
    TotalBurned,
    /// Balance: account -> i128 (Persistent storage)
    Balance(Address),
    /// Allowance: (owner, spender) -> i128 (Persistent storage)
    Allowance(Address, Address),
}

/// Token metadata, fixed at initialization
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenMetadata {
    pub name: String,
    pub symbol: String,
    pub decimals: u32,
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

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Administrator)
}

// === Roles ===

pub fn get_administrator(env: &Env) -> Result<Address, TokenError> {
    extend_instance_ttl(env);
    env.storage()
        .instance()
        .get(&DataKey::Administrator)
        .ok_or(TokenError::NotInitialized)
}

pub fn set_administrator(env: &Env, administrator: &Address) {
    env.storage()
        .instance()
        .set(&DataKey::Administrator, administrator);
}

pub fn get_issuer(env: &Env) -> Result<Address, TokenError> {
    env.storage()
        .instance()
        .get(&DataKey::Issuer)
        .ok_or(TokenError::NotInitialized)
}

pub fn set_issuer(env: &Env, issuer: &Address) {
    env.storage().instance().set(&DataKey::Issuer, issuer);
}

// === Metadata ===

pub fn get_metadata(env: &Env) -> Result<TokenMetadata, TokenError> {
    extend_instance_ttl(env);
    env.storage()
        .instance()
        .get(&DataKey::Metadata)
        .ok_or(TokenError::NotInitialized)
}

pub fn set_metadata(env: &Env, metadata: &TokenMetadata) {
    env.storage().instance().set(&DataKey::Metadata, metadata);
}

// === Gate ===

pub fn is_transferable(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Transferable)
        .unwrap_or(false)
}

pub fn set_transferable(env: &Env, value: bool) {
    env.storage().instance().set(&DataKey::Transferable, &value);
    extend_instance_ttl(env);
}

// === Supply ===

pub fn get_total_supply(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalSupply)
        .unwrap_or(0)
}

pub fn set_total_supply(env: &Env, supply: i128) {
    env.storage().instance().set(&DataKey::TotalSupply, &supply);
    extend_instance_ttl(env);
}

pub fn get_total_burned(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalBurned)
        .unwrap_or(0)
}

pub fn set_total_burned(env: &Env, burned: i128) {
    env.storage().instance().set(&DataKey::TotalBurned, &burned);
}

// === Balances ===

pub fn get_balance(env: &Env, id: &Address) -> i128 {
    let key = DataKey::Balance(id.clone());
    env.storage().persistent().get(&key).unwrap_or(0)
}

pub fn set_balance(env: &Env, id: &Address, amount: i128) {
    let key = DataKey::Balance(id.clone());
    env.storage().persistent().set(&key, &amount);
    extend_persistent_ttl(env, &key);
}

// === Allowances ===

pub fn get_allowance(env: &Env, owner: &Address, spender: &Address) -> i128 {
    let key = DataKey::Allowance(owner.clone(), spender.clone());
    env.storage().persistent().get(&key).unwrap_or(0)
}

pub fn set_allowance(env: &Env, owner: &Address, spender: &Address, amount: i128) {
    let key = DataKey::Allowance(owner.clone(), spender.clone());
    if amount == 0 {
        // Absent entries read as zero
        env.storage().persistent().remove(&key);
    } else {
        env.storage().persistent().set(&key, &amount);
        extend_persistent_ttl(env, &key);
    }
}
