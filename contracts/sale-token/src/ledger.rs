// ============================================================================
// ACCOUNT LEDGER
// ============================================================================
//
// Balance and allowance bookkeeping with no notion of roles or gates. The
// contract layer in lib.rs authenticates callers and applies the
// transferability gate before calling in here.
//
// Conservation: every function either moves units between balances or
// removes them from a balance and from the total supply together, so
// sum(balances) == total_supply holds after each call.
//
// ============================================================================

use crate::invariants::{balance_within_supply, supply_conserved, supply_non_increasing};
use crate::storage::{
    get_allowance, get_balance, get_total_burned, get_total_supply, set_allowance, set_balance,
    set_total_burned, set_total_supply,
};
use sale_types::TokenError;
use soroban_sdk::{Address, Env, Symbol};

pub fn balance_of(env: &Env, id: &Address) -> i128 {
    get_balance(env, id)
}

pub fn allowance(env: &Env, owner: &Address, spender: &Address) -> i128 {
    get_allowance(env, owner, spender)
}

/// Credit freshly issued units. Only used when the supply is created.
pub fn issue(env: &Env, to: &Address, amount: i128) -> Result<(), TokenError> {
    check_amount(amount)?;
    let balance = get_balance(env, to)
        .checked_add(amount)
        .ok_or(TokenError::Overflow)?;
    let supply = get_total_supply(env)
        .checked_add(amount)
        .ok_or(TokenError::Overflow)?;

    set_balance(env, to, balance);
    set_total_supply(env, supply);
    Ok(())
}

/// Move `amount` from `from` to `to`
pub fn transfer(env: &Env, from: &Address, to: &Address, amount: i128) -> Result<(), TokenError> {
    check_amount(amount)?;
    check_destination(env, to)?;

    let from_balance = get_balance(env, from);
    if from_balance < amount {
        return Err(TokenError::InsufficientBalance);
    }
    set_balance(env, from, from_balance - amount);

    // Read after the debit so a self-transfer nets to zero
    let to_balance = get_balance(env, to)
        .checked_add(amount)
        .ok_or(TokenError::Overflow)?;
    set_balance(env, to, to_balance);

    env.events().publish(
        (Symbol::new(env, "transfer"), from.clone(), to.clone()),
        amount,
    );
    Ok(())
}

/// Overwrite the allowance of `spender` over `owner`'s balance
///
/// No balance check: an owner may approve more than it holds.
pub fn approve(env: &Env, owner: &Address, spender: &Address, amount: i128) -> Result<(), TokenError> {
    check_amount(amount)?;
    set_allowance(env, owner, spender, amount);

    env.events().publish(
        (Symbol::new(env, "approve"), owner.clone(), spender.clone()),
        amount,
    );
    Ok(())
}

/// Move `amount` from `from` to `to` against `spender`'s allowance
pub fn transfer_from(
    env: &Env,
    spender: &Address,
    from: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), TokenError> {
    let remaining = spend_allowance(env, from, spender, amount)?;
    transfer(env, from, to, amount)?;
    set_allowance(env, from, spender, remaining);
    Ok(())
}

/// Destroy `amount` units held by `holder`
pub fn burn(env: &Env, holder: &Address, amount: i128) -> Result<(), TokenError> {
    check_amount(amount)?;

    let balance = get_balance(env, holder);
    if balance < amount {
        return Err(TokenError::InsufficientBalance);
    }

    let supply_before = get_total_supply(env);
    let burned_before = get_total_burned(env);
    let burned = burned_before
        .checked_add(amount)
        .ok_or(TokenError::Overflow)?;

    set_balance(env, holder, balance - amount);
    set_total_supply(env, supply_before - amount);
    set_total_burned(env, burned);

    debug_assert!(balance_within_supply(balance, supply_before));
    debug_assert!(supply_non_increasing(supply_before, get_total_supply(env)));
    debug_assert!(supply_conserved(
        supply_before + burned_before,
        get_total_supply(env),
        get_total_burned(env)
    ));

    env.events()
        .publish((Symbol::new(env, "burn"), holder.clone()), amount);
    Ok(())
}

/// Destroy `amount` units held by `from` against `spender`'s allowance
pub fn burn_from(env: &Env, spender: &Address, from: &Address, amount: i128) -> Result<(), TokenError> {
    let remaining = spend_allowance(env, from, spender, amount)?;
    burn(env, from, amount)?;
    set_allowance(env, from, spender, remaining);
    Ok(())
}

/// Allowance left after spending `amount`, without writing it
fn spend_allowance(env: &Env, owner: &Address, spender: &Address, amount: i128) -> Result<i128, TokenError> {
    check_amount(amount)?;
    let allowance = get_allowance(env, owner, spender);
    if allowance < amount {
        return Err(TokenError::InsufficientAllowance);
    }
    Ok(allowance - amount)
}

fn check_amount(amount: i128) -> Result<(), TokenError> {
    if amount < 0 {
        return Err(TokenError::NegativeAmount);
    }
    Ok(())
}

/// Units sent to the ledger's own account could never be moved again
fn check_destination(env: &Env, to: &Address) -> Result<(), TokenError> {
    if *to == env.current_contract_address() {
        return Err(TokenError::InvalidDestination);
    }
    Ok(())
}
