use crate::config;
use crate::guard;
use crate::ledger;
use crate::sale;
use crate::settlement;
use crate::storage;
use crate::types::{OpenVotePolicy, TokenError, TransferPolicy, VotingInfo};
use crate::validation;
use crate::voting;
use soroban_sdk::{contract, contractimpl, Address, Env};

//
// HARDENED DEMONSTRATION TOKEN
//
// The remediated half of the vulnerable/hardened pair: same surface as
// `VulnerableSaleToken`, but cleanup commits every state change before the
// payment leaves and rejects nested entry for the duration of the call.
// No sequence of nested calls can extract more value or wipe state more
// than once per logical cleanup.
//

#[contract]
pub struct HardenedSaleToken;

#[contractimpl]
impl HardenedSaleToken {
    pub fn initialize(
        env: Env,
        owner: Address,
        payment_token: Address,
        time_to_vote: u64,
        change_voting_threshold: u32,
        price_voting_threshold: u32,
        open_vote_policy: OpenVotePolicy,
    ) -> Result<(), TokenError> {
        config::initialize(
            &env,
            &owner,
            &payment_token,
            time_to_vote,
            change_voting_threshold,
            price_voting_threshold,
            open_vote_policy,
        )
    }

    pub fn set_initial_price(env: Env, caller: Address, price: i128) -> Result<(), TokenError> {
        caller.require_auth();
        sale::set_initial_price(&env, &caller, price)
    }

    pub fn buy(env: Env, buyer: Address, value: i128) -> Result<i128, TokenError> {
        buyer.require_auth();
        guard::acquire(&env)?;
        let result = sale::buy(&env, &buyer, value);
        guard::release(&env);
        result
    }

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), TokenError> {
        from.require_auth();
        ledger::transfer(&env, &from, &to, amount, TransferPolicy::Restrictive)
    }

    pub fn vote_change(env: Env, voter: Address, approve: bool) {
        voter.require_auth();
        voting::vote_change(&env, &voter, approve);
    }

    pub fn start_voting(env: Env) -> Result<u32, TokenError> {
        voting::start_voting(&env)
    }

    pub fn vote_price(env: Env, voter: Address, price: i128) -> Result<(), TokenError> {
        voter.require_auth();
        voting::vote_price(&env, &voter, price)
    }

    pub fn end_voting(env: Env) -> Result<i128, TokenError> {
        voting::end_voting(&env)
    }

    /// Owner-only cleanup, state-first and lock-protected.
    pub fn clear_all(env: Env, caller: Address) -> Result<i128, TokenError> {
        caller.require_auth();
        validation::require_owner(&env, &caller)?;
        settlement::settle_guarded(&env, &settlement::TokenSink)
    }

    //
    // READS
    //

    pub fn balance(env: Env, addr: Address) -> i128 {
        ledger::balance_of(&env, &addr)
    }

    pub fn total_supply(env: Env) -> i128 {
        storage::get_total_supply(&env)
    }

    pub fn current_price(env: Env) -> i128 {
        storage::get_price(&env)
    }

    pub fn owner(env: Env) -> Address {
        storage::get_owner(&env)
    }

    pub fn collected_value(env: Env) -> i128 {
        storage::get_collected(&env)
    }

    pub fn voting_active(env: Env) -> bool {
        storage::is_voting_active(&env)
    }

    pub fn voting_number(env: Env) -> u32 {
        storage::get_voting_number(&env)
    }

    pub fn voting_start_time(env: Env) -> u64 {
        storage::get_voting_start_time(&env)
    }

    pub fn voting_info(env: Env, addr: Address) -> Option<VotingInfo> {
        storage::get_voting_info(&env, &addr)
    }
}
