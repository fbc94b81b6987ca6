use crate::events;
use crate::ledger;
use crate::storage;
use crate::types::TokenError;
use crate::validation;
use soroban_sdk::{token, Address, Env};

// ============================================================================
// SALE PRICING
// ============================================================================

/// Sets the initial sale price. Owner-only; re-callable until the first
/// purchase, locked afterwards (the price is then mutated only by round
/// resolution).
pub fn set_initial_price(env: &Env, caller: &Address, price: i128) -> Result<(), TokenError> {
    // === CHECKS ===
    validation::require_owner(env, caller)?;
    if price <= 0 {
        return Err(TokenError::InvalidPrice);
    }
    if storage::get_total_supply(env) > 0 {
        return Err(TokenError::SaleAlreadyStarted);
    }
    storage::bump_instance(env);

    // === EFFECTS ===
    storage::set_price(env, price);

    // === INTERACTIONS ===
    events::emit_price_set(env, price);

    Ok(())
}

/// Fixed-price purchase: pulls `value` of the payment token from the buyer,
/// mints `value / current_price` units. The integer-division remainder stays
/// with the contract and is returned to the owner at cleanup.
///
/// Returns the minted amount.
pub fn buy(env: &Env, buyer: &Address, value: i128) -> Result<i128, TokenError> {
    // === CHECKS ===
    validation::require_positive_amount(value)?;
    let price = storage::get_price(env);
    if price == 0 {
        return Err(TokenError::ZeroPrice);
    }
    storage::bump_instance(env);

    // === EFFECTS ===
    let amount = value / price;
    let collected = storage::get_collected(env);
    let new_collected = collected
        .checked_add(value)
        .ok_or(TokenError::InvalidAmount)?;
    storage::set_collected(env, new_collected);
    if amount > 0 {
        ledger::mint(env, buyer, amount)?;
    }

    // === INTERACTIONS ===
    let payment = token::Client::new(env, &storage::get_payment_token(env));
    payment.transfer(buyer, &env.current_contract_address(), &value);
    events::emit_purchase(env, buyer, value, amount);

    Ok(amount)
}
