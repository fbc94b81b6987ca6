use crate::storage;
use crate::types::{OpenVotePolicy, TokenError};
use soroban_sdk::{Address, Env};

// ============================================================================
// DEPLOYMENT CONFIGURATION
// ============================================================================

/// One-shot post-deployment initialization. All configuration is explicit:
/// the owner identity, the payment asset and the voting parameters. There is
/// no ambient admin.
#[allow(clippy::too_many_arguments)]
pub fn initialize(
    env: &Env,
    owner: &Address,
    payment_token: &Address,
    time_to_vote: u64,
    change_voting_threshold: u32,
    price_voting_threshold: u32,
    open_vote_policy: OpenVotePolicy,
) -> Result<(), TokenError> {
    if storage::is_initialized(env) {
        return Err(TokenError::AlreadyInitialized);
    }

    storage::set_owner(env, owner);
    storage::set_payment_token(env, payment_token);
    storage::set_time_to_vote(env, time_to_vote);
    storage::set_change_threshold(env, change_voting_threshold);
    storage::set_price_threshold(env, price_voting_threshold);
    storage::set_open_vote_policy(env, &open_vote_policy);
    storage::set_voting_active(env, false);
    storage::set_reentrancy_guard(env, false);
    storage::bump_instance(env);

    Ok(())
}
