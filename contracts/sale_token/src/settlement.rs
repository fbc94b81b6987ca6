use crate::events;
use crate::guard;
use crate::storage;
use crate::types::TokenError;
use crate::voting;
use soroban_sdk::{token, Address, Env, Vec};

// ============================================================================
// VALUE-TRANSFER SAFETY
//
// Cleanup moves native value out of the contract, which is the only point
// where adversarial code can run. Two settlement strategies share one
// interface so the vulnerable and the hardened generation can be tested
// against each other:
//
// - guarded: commit every state change, then pay under the reentrancy lock.
// - unguarded: pay first against stale state, then clear. This is the
//   demonstration target for the reentrancy exploit.
// ============================================================================

/// Delivery channel for the refund payment. The production sink pays through
/// the configured payment token; tests substitute adversarial sinks.
pub trait RefundSink {
    fn pay(&self, env: &Env, to: &Address, amount: i128);
}

/// Pays out of the contract's payment-token balance.
pub struct TokenSink;

impl RefundSink for TokenSink {
    fn pay(&self, env: &Env, to: &Address, amount: i128) {
        let payment = token::Client::new(env, &storage::get_payment_token(env));
        payment.transfer(&env.current_contract_address(), to, &amount);
    }
}

/// State-first settlement: the ledger and voting state are wiped and the
/// collected value zeroed before the payment leaves, and the reentrancy lock
/// rejects any nested entry for the duration of the outer call.
///
/// Returns the refunded value.
pub fn settle_guarded(env: &Env, sink: &dyn RefundSink) -> Result<i128, TokenError> {
    guard::acquire(env)?;

    // === EFFECTS ===
    let owner = storage::get_owner(env);
    let refund = storage::get_collected(env);
    wipe_state(env);

    // === INTERACTIONS ===
    if refund > 0 {
        sink.pay(env, &owner, refund);
    }
    events::emit_cleared(env, &owner, refund);

    guard::release(env);
    Ok(refund)
}

/// Payment-first settlement without a barrier. A payee calling back in
/// during its payment observes the pre-cleanup state and can draw the refund
/// again.
pub fn settle_unguarded(env: &Env, sink: &dyn RefundSink) -> Result<i128, TokenError> {
    let owner = storage::get_owner(env);
    let refund = storage::get_collected(env);

    // === INTERACTIONS (before effects: the exploitable window) ===
    if refund > 0 {
        sink.pay(env, &owner, refund);
    }

    // === EFFECTS ===
    wipe_state(env);
    events::emit_cleared(env, &owner, refund);

    Ok(refund)
}

/// Wipes the ledger and all voting state: every registered holder balance,
/// total supply, collected value, round flags, open tally and price votes.
fn wipe_state(env: &Env) {
    let holders = storage::get_holders(env);
    for holder in holders.iter() {
        storage::set_balance(env, &holder, 0);
        storage::clear_holder(env, &holder);
    }
    storage::set_holders(env, &Vec::new(env));
    storage::set_total_supply(env, 0);
    storage::set_collected(env, 0);

    voting::clear_round(env);
    storage::set_voting_active(env, false);
}
