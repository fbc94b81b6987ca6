use crate::storage;
use crate::types::{TokenError, TransferPolicy};
use soroban_sdk::{Address, Env};

// ============================================================================
// REENTRANCY BARRIER
// ============================================================================

/// Takes the reentrancy lock for a value-moving entry point. A nested call
/// arriving while the lock is held is rejected instead of executed.
pub fn acquire(env: &Env) -> Result<(), TokenError> {
    if storage::is_reentrancy_locked(env) {
        return Err(TokenError::ReentrantCall);
    }
    storage::set_reentrancy_guard(env, true);
    Ok(())
}

/// Releases the lock. Must run on every exit path of the outer call,
/// including error returns.
pub fn release(env: &Env) {
    storage::set_reentrancy_guard(env, false);
}

// ============================================================================
// TRANSFER GUARD
// ============================================================================

/// Vetoes transfers according to the generation's policy.
///
/// Restrictive: while a round is active, an account with a cast price vote
/// can neither send nor receive. Moving weighted balance mid-round would let
/// it be counted twice or walk away from a cast vote.
///
/// Snapshot: transfers always pass; `VotingInfo.weight` was frozen at cast
/// time, so later movement cannot change the tally.
pub fn require_transfer_allowed(
    env: &Env,
    from: &Address,
    to: &Address,
    policy: TransferPolicy,
) -> Result<(), TokenError> {
    match policy {
        TransferPolicy::Snapshot => Ok(()),
        TransferPolicy::Restrictive => {
            if storage::is_voting_active(env)
                && (storage::get_voting_info(env, from).is_some()
                    || storage::get_voting_info(env, to).is_some())
            {
                return Err(TokenError::TransferRestricted);
            }
            Ok(())
        }
    }
}
