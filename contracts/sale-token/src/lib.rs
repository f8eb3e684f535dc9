#![no_std]

mod invariants;
mod ledger;
mod storage;

use sale_types::TokenError;
use soroban_sdk::{contract, contractimpl, token, Address, Env, String, Symbol};
use storage::{
    extend_instance_ttl, get_administrator, get_issuer, get_metadata, get_total_burned,
    get_total_supply, is_initialized, is_transferable, set_administrator, set_issuer,
    set_metadata, set_transferable,
};

pub use storage::TokenMetadata;

/// Fixed-supply token with a transferability gate.
///
/// The whole supply is issued once, to `issuer`. Until the administrator
/// opens the gate, only the administrator and the issuer may send tokens.
#[contract]
pub struct SaleToken;

#[contractimpl]
impl SaleToken {
    /// Initialize the token and credit the entire supply to `issuer`
    pub fn initialize(
        env: Env,
        administrator: Address,
        issuer: Address,
        total_supply: i128,
        name: String,
        symbol: String,
        decimals: u32,
    ) -> Result<(), TokenError> {
        if is_initialized(&env) {
            return Err(TokenError::AlreadyInitialized);
        }
        if total_supply <= 0 {
            return Err(TokenError::InvalidSupply);
        }

        set_administrator(&env, &administrator);
        set_issuer(&env, &issuer);
        set_metadata(
            &env,
            &TokenMetadata {
                name,
                symbol,
                decimals,
            },
        );
        set_transferable(&env, false);
        ledger::issue(&env, &issuer, total_supply)?;

        env.events().publish(
            (Symbol::new(&env, "init"), administrator, issuer),
            total_supply,
        );

        extend_instance_ttl(&env);
        Ok(())
    }

    // === Transfers ===

    /// Move `amount` from `from` to `to`
    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), TokenError> {
        from.require_auth();
        check_gate(&env, &from)?;
        ledger::transfer(&env, &from, &to, amount)
    }

    /// Allow `spender` to move up to `amount` of `owner`'s tokens
    pub fn approve(env: Env, owner: Address, spender: Address, amount: i128) -> Result<(), TokenError> {
        owner.require_auth();
        ledger::approve(&env, &owner, &spender, amount)
    }

    /// Move `amount` from `from` to `to` using `spender`'s allowance
    ///
    /// The gate applies to `from`, the party whose tokens move.
    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), TokenError> {
        spender.require_auth();
        check_gate(&env, &from)?;
        ledger::transfer_from(&env, &spender, &from, &to, amount)
    }

    /// Destroy `amount` of the holder's tokens. Not subject to the gate.
    pub fn burn(env: Env, holder: Address, amount: i128) -> Result<(), TokenError> {
        holder.require_auth();
        ledger::burn(&env, &holder, amount)
    }

    /// Destroy `amount` of `from`'s tokens using `spender`'s allowance
    pub fn burn_from(env: Env, spender: Address, from: Address, amount: i128) -> Result<(), TokenError> {
        spender.require_auth();
        ledger::burn_from(&env, &spender, &from, amount)
    }

    // === Administration ===

    /// Open or close the transferability gate
    pub fn toggle_transferable(env: Env, caller: Address, value: bool) -> Result<(), TokenError> {
        caller.require_auth();
        require_administrator(&env, &caller)?;

        set_transferable(&env, value);
        env.events()
            .publish((Symbol::new(&env, "transferable"),), value);
        Ok(())
    }

    /// Send `amount` of a foreign asset held by this contract to the administrator
    ///
    /// Rescues tokens mistakenly sent to the ledger's own address. The
    /// ledger's own asset can never be moved this way.
    pub fn emergency_drain(env: Env, caller: Address, asset: Address, amount: i128) -> Result<(), TokenError> {
        caller.require_auth();
        require_administrator(&env, &caller)?;

        let this = env.current_contract_address();
        if asset == this {
            return Err(TokenError::OwnAssetDrain);
        }
        if amount < 0 {
            return Err(TokenError::NegativeAmount);
        }

        token::Client::new(&env, &asset).transfer(&this, &caller, &amount);

        env.events().publish(
            (Symbol::new(&env, "drain"), asset, caller),
            amount,
        );
        Ok(())
    }

    // === View Functions ===

    pub fn balance(env: Env, id: Address) -> i128 {
        ledger::balance_of(&env, &id)
    }

    pub fn allowance(env: Env, owner: Address, spender: Address) -> i128 {
        ledger::allowance(&env, &owner, &spender)
    }

    pub fn total_supply(env: Env) -> i128 {
        extend_instance_ttl(&env);
        get_total_supply(&env)
    }

    /// Units destroyed since issuance
    pub fn total_burned(env: Env) -> i128 {
        extend_instance_ttl(&env);
        get_total_burned(&env)
    }

    pub fn is_transferable(env: Env) -> bool {
        extend_instance_ttl(&env);
        is_transferable(&env)
    }

    pub fn administrator(env: Env) -> Result<Address, TokenError> {
        get_administrator(&env)
    }

    pub fn issuer(env: Env) -> Result<Address, TokenError> {
        extend_instance_ttl(&env);
        get_issuer(&env)
    }

    pub fn name(env: Env) -> Result<String, TokenError> {
        get_metadata(&env).map(|m| m.name)
    }

    pub fn symbol(env: Env) -> Result<String, TokenError> {
        get_metadata(&env).map(|m| m.symbol)
    }

    pub fn decimals(env: Env) -> Result<u32, TokenError> {
        get_metadata(&env).map(|m| m.decimals)
    }
}

fn require_administrator(env: &Env, caller: &Address) -> Result<(), TokenError> {
    if *caller != get_administrator(env)? {
        return Err(TokenError::Unauthorized);
    }
    Ok(())
}

/// While the gate is closed only the administrator and the issuer may send
fn check_gate(env: &Env, from: &Address) -> Result<(), TokenError> {
    if is_transferable(env) {
        return Ok(());
    }
    if *from == get_administrator(env)? || *from == get_issuer(env)? {
        return Ok(());
    }
    Err(TokenError::TransfersLocked)
}
