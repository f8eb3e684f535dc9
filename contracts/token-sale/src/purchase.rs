use crate::invariants::{contribution_monotonic, contribution_within_cap, payment_conserved};
use crate::storage::{
    get_config, get_contributed, get_total_raised, is_halted, is_whitelisted, set_contributed,
    set_total_raised,
};
use crate::{token_balance, token_transfer};
use sale_math::{effective_cap, eligible_amount, phase_at, split_payment, tokens_for};
use sale_types::{Phase, SaleConfig, SaleError};
use soroban_sdk::{log, token, Address, Env, Symbol};

/// Amount of `requested` the sale would accept from `account` at `now`
pub fn preview(env: &Env, config: &SaleConfig, account: &Address, requested: i128, now: u64) -> i128 {
    eligible_amount(
        effective_cap(config, now),
        get_contributed(env, account),
        requested,
        config.min_contribution,
    )
}

/// Execute a purchase
///
/// All checks run before anything moves. The token leg goes first, then
/// the contribution is recorded, then the payment is escrowed, forwarded
/// and the excess refunded. A failure in any leg aborts the invocation and
/// rolls back every earlier write.
///
/// # Returns
/// Token units issued to `beneficiary`
pub fn execute_purchase(
    env: &Env,
    caller: &Address,
    beneficiary: &Address,
    payment: i128,
) -> Result<i128, SaleError> {
    let config = get_config(env)?;
    let now = env.ledger().timestamp();

    if payment < 0 {
        return Err(SaleError::NegativeAmount);
    }

    let this = env.current_contract_address();
    if *beneficiary == this {
        return Err(SaleError::InvalidBeneficiary);
    }

    let phase = phase_at(&config, now, is_halted(env));
    if !phase.accepts_purchases() {
        return Err(match phase {
            Phase::Pending => SaleError::NotStarted,
            Phase::Halted => SaleError::Halted,
            _ => SaleError::Ended,
        });
    }

    if !is_whitelisted(env, beneficiary) {
        return Err(SaleError::NotWhitelisted);
    }

    let contributed = get_contributed(env, beneficiary);
    let accepted = preview(env, &config, beneficiary, payment, now);
    if accepted == 0 {
        log!(env, "nothing eligible", beneficiary.clone(), contributed, payment);
        return Err(SaleError::NothingEligible);
    }

    let tokens = tokens_for(accepted, config.rate).ok_or(SaleError::Overflow)?;
    if token_balance(env, &config.token, &this) < tokens {
        log!(env, "allocation exhausted", tokens);
        return Err(SaleError::AllocationExhausted);
    }

    let new_contributed = contributed
        .checked_add(accepted)
        .ok_or(SaleError::Overflow)?;
    let raised = get_total_raised(env)
        .checked_add(accepted)
        .ok_or(SaleError::Overflow)?;
    let (accepted, refund) = split_payment(payment, accepted);

    // Token leg
    token_transfer(env, &config.token, &this, beneficiary, tokens);

    debug_assert!(contribution_monotonic(contributed, new_contributed));
    debug_assert!(contribution_within_cap(new_contributed, effective_cap(&config, now)));
    set_contributed(env, beneficiary, new_contributed);
    set_total_raised(env, raised);

    // Settlement leg: escrow, forward, refund
    debug_assert!(payment_conserved(payment, accepted, refund));
    let base = token::Client::new(env, &config.base_asset);
    base.transfer(caller, &this, &payment);
    base.transfer(&this, &config.treasury, &accepted);
    if refund > 0 {
        base.transfer(&this, caller, &refund);
    }

    env.events().publish(
        (Symbol::new(env, "purchase"), caller.clone(), beneficiary.clone()),
        (accepted, tokens, refund),
    );

    Ok(tokens)
}
