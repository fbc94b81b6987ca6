use crate::storage;
use crate::types::TokenError;
use soroban_sdk::{Address, Env};

// ============================================================================
// SHARED CHECKS
// ============================================================================

/// Validates that the caller is the configured owner.
pub fn require_owner(env: &Env, caller: &Address) -> Result<(), TokenError> {
    let owner = storage::get_owner(env);
    if caller != &owner {
        return Err(TokenError::Unauthorized);
    }
    Ok(())
}

/// Validates that the amount is positive.
pub fn require_positive_amount(amount: i128) -> Result<(), TokenError> {
    if amount <= 0 {
        return Err(TokenError::InvalidAmount);
    }
    Ok(())
}

/// Validates that the address holds at least `required`.
pub fn require_sufficient_balance(
    env: &Env,
    addr: &Address,
    required: i128,
) -> Result<(), TokenError> {
    let balance = storage::get_balance(env, addr);
    if balance < required {
        return Err(TokenError::InsufficientBalance);
    }
    Ok(())
}

/// Validates that a voting round is currently open.
pub fn require_voting_active(env: &Env) -> Result<(), TokenError> {
    if !storage::is_voting_active(env) {
        return Err(TokenError::NotActive);
    }
    Ok(())
}

/// Validates that no voting round is currently open.
pub fn require_no_active_voting(env: &Env) -> Result<(), TokenError> {
    if storage::is_voting_active(env) {
        return Err(TokenError::AlreadyActive);
    }
    Ok(())
}
