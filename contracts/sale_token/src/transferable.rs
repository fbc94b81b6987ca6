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
// SNAPSHOT-GENERATION SALE TOKEN
//
// Same surface as `SaleToken`, but transfers stay open during a voting
// round: vote weight is frozen in `VotingInfo` at cast time, so moving
// balance afterwards cannot change the tally, and acquiring tokens after
// casting cannot inflate a recorded weight.
//

#[contract]
pub struct TransferableSaleToken;

#[contractimpl]
impl TransferableSaleToken {
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

    /// Transfers are never vetoed by voting state in this generation.
    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), TokenError> {
        from.require_auth();
        ledger::transfer(&env, &from, &to, amount, TransferPolicy::Snapshot)
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
