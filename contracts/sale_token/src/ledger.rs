use crate::events;
use crate::guard;
use crate::storage;
use crate::types::{TokenError, TransferPolicy};
use crate::validation;
use soroban_sdk::{Address, Env};

// ============================================================================
// BALANCE LEDGER
// ============================================================================

/// Credits `to` and grows total supply. Internal only: minting happens
/// exclusively through a purchase, there is no public mint entry point.
pub fn mint(env: &Env, to: &Address, amount: i128) -> Result<(), TokenError> {
    validation::require_positive_amount(amount)?;

    let balance = storage::get_balance(env, to);
    let new_balance = balance
        .checked_add(amount)
        .ok_or(TokenError::InvalidAmount)?;

    let supply = storage::get_total_supply(env);
    let new_supply = supply
        .checked_add(amount)
        .ok_or(TokenError::InvalidAmount)?;

    storage::set_balance(env, to, new_balance);
    storage::set_total_supply(env, new_supply);
    storage::register_holder(env, to);
    storage::bump_balance(env, to);

    Ok(())
}

/// Moves `amount` from `from` to `to`, subject to the generation's transfer
/// policy. Debit and credit are a single atomic effect: any failed check
/// leaves both balances untouched.
pub fn transfer(
    env: &Env,
    from: &Address,
    to: &Address,
    amount: i128,
    policy: TransferPolicy,
) -> Result<(), TokenError> {
    // === CHECKS ===
    storage::bump_instance(env);
    validation::require_positive_amount(amount)?;
    guard::require_transfer_allowed(env, from, to, policy)?;
    validation::require_sufficient_balance(env, from, amount)?;

    // === EFFECTS ===
    let from_balance = storage::get_balance(env, from);
    let to_balance = storage::get_balance(env, to);

    let new_from_balance = from_balance
        .checked_sub(amount)
        .ok_or(TokenError::InsufficientBalance)?;
    let new_to_balance = to_balance
        .checked_add(amount)
        .ok_or(TokenError::InvalidAmount)?;

    storage::set_balance(env, from, new_from_balance);
    storage::set_balance(env, to, new_to_balance);
    storage::register_holder(env, to);
    storage::bump_balance(env, from);
    storage::bump_balance(env, to);

    // === INTERACTIONS ===
    events::emit_transfer(env, from, to, amount);

    Ok(())
}

pub fn balance_of(env: &Env, addr: &Address) -> i128 {
    storage::get_balance(env, addr)
}
