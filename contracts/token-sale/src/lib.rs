#![no_std]

mod invariants;
mod purchase;
mod storage;

use invariants::allocation_exact;
use sale_math::{effective_cap, phase_at};
use sale_types::{Allocation, Phase, SaleConfig, SaleError};
use soroban_sdk::{contract, contractimpl, Address, Env, IntoVal, Symbol, Vec};
use storage::{
    extend_instance_ttl, get_config, get_contributed, get_total_raised, has_config, is_halted,
    is_whitelisted, set_config, set_halted, set_whitelisted,
};

/// Capped, time-windowed public sale of a fixed-supply token.
///
/// The sale contract must be the token's issuer: it holds the whole supply
/// when initialized, hands out the premint and presale allocations, and
/// sells the remainder.
#[contract]
pub struct TokenSale;

#[contractimpl]
impl TokenSale {
    /// Initialize the sale and split the token supply
    ///
    /// # Arguments
    /// * `config` - Schedule, rate, caps and participating accounts
    /// * `allocation` - Total supply and the premint (treasury) and presale (admin) shares
    pub fn initialize(env: Env, config: SaleConfig, allocation: Allocation) -> Result<(), SaleError> {
        if has_config(&env) {
            return Err(SaleError::AlreadyInitialized);
        }

        let this = env.current_contract_address();
        if config.admin == this || config.treasury == this {
            return Err(SaleError::InvalidAccount);
        }

        config.admin.require_auth();

        allocation.validate()?;
        config.validate()?;

        if token_total_supply(&env, &config.token) != allocation.total_supply
            || token_balance(&env, &config.token, &this) != allocation.total_supply
        {
            return Err(SaleError::SupplyMismatch);
        }

        set_config(&env, &config);
        set_halted(&env, false);

        token_transfer(&env, &config.token, &this, &config.treasury, allocation.premint_supply);
        token_transfer(&env, &config.token, &this, &config.admin, allocation.presale_supply);

        let public_supply = token_balance(&env, &config.token, &this);
        debug_assert_eq!(public_supply, allocation.public_supply());
        debug_assert!(allocation_exact(
            allocation.premint_supply,
            allocation.presale_supply,
            public_supply,
            allocation.total_supply
        ));

        env.events().publish(
            (Symbol::new(&env, "sale_init"), config.admin, config.treasury),
            (allocation.premint_supply, allocation.presale_supply, public_supply),
        );

        Ok(())
    }

    // === Admin Functions ===

    /// Add or remove a single account from the whitelist
    pub fn update_whitelist(env: Env, caller: Address, account: Address, value: bool) -> Result<(), SaleError> {
        require_admin(&env, &caller)?;
        whitelist(&env, &account, value);
        Ok(())
    }

    /// Apply `values[i]` to `accounts[i]`; fails entirely on length mismatch
    pub fn update_whitelists(
        env: Env,
        caller: Address,
        accounts: Vec<Address>,
        values: Vec<bool>,
    ) -> Result<(), SaleError> {
        require_admin(&env, &caller)?;
        if accounts.len() != values.len() {
            return Err(SaleError::LengthMismatch);
        }

        for (account, value) in accounts.iter().zip(values.iter()) {
            whitelist(&env, &account, value);
        }
        Ok(())
    }

    /// Halt or resume purchases, effective immediately
    pub fn set_halt(env: Env, caller: Address, value: bool) -> Result<(), SaleError> {
        require_admin(&env, &caller)?;
        set_halted(&env, value);
        env.events().publish((Symbol::new(&env, "halt"),), value);
        Ok(())
    }

    // === Purchase ===

    /// Buy tokens for `beneficiary`, paying `payment` units of the base asset
    ///
    /// Only the eligible part of the payment is kept; the rest is refunded
    /// to `caller` in the same invocation.
    ///
    /// # Returns
    /// Token units issued
    pub fn purchase(env: Env, caller: Address, beneficiary: Address, payment: i128) -> Result<i128, SaleError> {
        caller.require_auth();
        purchase::execute_purchase(&env, &caller, &beneficiary, payment)
    }

    // === View Functions ===

    /// Amount of `requested` that would be accepted from `account` right now
    pub fn eligible_amount(env: Env, account: Address, requested: i128) -> Result<i128, SaleError> {
        let config = get_config(&env)?;
        let now = env.ledger().timestamp();
        Ok(purchase::preview(&env, &config, &account, requested, now))
    }

    /// Current phase of the sale
    pub fn phase(env: Env) -> Result<Phase, SaleError> {
        let config = get_config(&env)?;
        Ok(phase_at(&config, env.ledger().timestamp(), is_halted(&env)))
    }

    /// Per-account cap in force right now
    pub fn effective_cap(env: Env) -> Result<i128, SaleError> {
        let config = get_config(&env)?;
        Ok(effective_cap(&config, env.ledger().timestamp()))
    }

    pub fn get_config(env: Env) -> Result<SaleConfig, SaleError> {
        get_config(&env)
    }

    pub fn admin(env: Env) -> Result<Address, SaleError> {
        get_config(&env).map(|c| c.admin)
    }

    pub fn treasury(env: Env) -> Result<Address, SaleError> {
        get_config(&env).map(|c| c.treasury)
    }

    pub fn token(env: Env) -> Result<Address, SaleError> {
        get_config(&env).map(|c| c.token)
    }

    pub fn base_asset(env: Env) -> Result<Address, SaleError> {
        get_config(&env).map(|c| c.base_asset)
    }

    pub fn start_time(env: Env) -> Result<u64, SaleError> {
        get_config(&env).map(|c| c.start_time)
    }

    pub fn end_time(env: Env) -> Result<u64, SaleError> {
        get_config(&env).map(|c| c.end_time)
    }

    pub fn cap_lift_time(env: Env) -> Result<u64, SaleError> {
        get_config(&env).map(|c| c.cap_lift_time)
    }

    pub fn rate(env: Env) -> Result<i128, SaleError> {
        get_config(&env).map(|c| c.rate)
    }

    pub fn min_contribution(env: Env) -> Result<i128, SaleError> {
        get_config(&env).map(|c| c.min_contribution)
    }

    pub fn max_contribution(env: Env) -> Result<i128, SaleError> {
        get_config(&env).map(|c| c.max_contribution)
    }

    pub fn post_lift_max_contribution(env: Env) -> Result<i128, SaleError> {
        get_config(&env).map(|c| c.post_lift_max_contribution)
    }

    pub fn is_halted(env: Env) -> bool {
        extend_instance_ttl(&env);
        is_halted(&env)
    }

    pub fn is_whitelisted(env: Env, account: Address) -> bool {
        is_whitelisted(&env, &account)
    }

    /// Cumulative accepted contribution of `account`
    pub fn contributed(env: Env, account: Address) -> i128 {
        get_contributed(&env, &account)
    }

    /// Sum of all accepted contributions
    pub fn total_raised(env: Env) -> i128 {
        extend_instance_ttl(&env);
        get_total_raised(&env)
    }
}

fn require_admin(env: &Env, caller: &Address) -> Result<(), SaleError> {
    caller.require_auth();
    if *caller != get_config(env)?.admin {
        return Err(SaleError::Unauthorized);
    }
    Ok(())
}

fn whitelist(env: &Env, account: &Address, value: bool) {
    set_whitelisted(env, account, value);
    env.events()
        .publish((Symbol::new(env, "whitelist"), account.clone()), value);
}

fn token_balance(env: &Env, token: &Address, id: &Address) -> i128 {
    env.invoke_contract(token, &Symbol::new(env, "balance"), (id,).into_val(env))
}

fn token_total_supply(env: &Env, token: &Address) -> i128 {
    env.invoke_contract(token, &Symbol::new(env, "total_supply"), ().into_val(env))
}

fn token_transfer(env: &Env, token: &Address, from: &Address, to: &Address, amount: i128) {
    env.invoke_contract::<()>(
        token,
        &Symbol::new(env, "transfer"),
        (from, to, amount).into_val(env),
    );
}
