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
// RESTRICTIVE-GENERATION SALE TOKEN
//
// Fixed-price sale of a balance ledger against a payment asset, with a
// two-stage governance vote over the sale price. While a round is active,
// accounts holding a cast price vote can neither send nor receive.
//

#[contract]
pub struct SaleToken;

#[contractimpl]
impl SaleToken {
    /// One-shot initialization, invoked by the deployment layer.
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

    /// Sets the sale price. Owner-only; locked once the first sale happened.
    pub fn set_initial_price(env: Env, caller: Address, price: i128) -> Result<(), TokenError> {
        caller.require_auth();
        sale::set_initial_price(&env, &caller, price)
    }

    /// Buys `value / current_price` units for `value` of the payment asset.
    /// Value-moving entry point: runs under the reentrancy lock.
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

    /// Open-window threshold vote: toggles membership in the open tally.
    pub fn vote_change(env: Env, voter: Address, approve: bool) {
        voter.require_auth();
        voting::vote_change(&env, &voter, approve);
    }

    /// Opens a voting round; gated by the configured open-vote policy.
    pub fn start_voting(env: Env) -> Result<u32, TokenError> {
        voting::start_voting(&env)
    }

    /// Casts a balance-gated price vote in the active round.
    pub fn vote_price(env: Env, voter: Address, price: i128) -> Result<(), TokenError> {
        voter.require_auth();
        voting::vote_price(&env, &voter, price)
    }

    /// Resolves the round once `time_to_vote` has elapsed. Returns the price
    /// in force afterwards.
    pub fn end_voting(env: Env) -> Result<i128, TokenError> {
        voting::end_voting(&env)
    }

    /// Owner-only cleanup: wipes the ledger and voting state, then refunds
    /// the collected value. State-first, under the reentrancy lock.
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

//
// TESTS
//

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::testutils::Address as _;
    use soroban_sdk::token::StellarAssetClient;

    fn create_client(env: &Env) -> (SaleTokenClient, Address, Address) {
        let issuer = Address::generate(env);
        let payment_token = env.register_stellar_asset_contract(issuer);

        let contract_id = env.register_contract(None, SaleToken);
        let client = SaleTokenClient::new(env, &contract_id);
        let owner = Address::generate(env);

        client.initialize(
            &owner,
            &payment_token,
            &3600,
            &1000,
            &500,
            &OpenVotePolicy::SupplyWeighted,
        );
        (client, owner, payment_token)
    }

    #[test]
    fn test_initialize_once() {
        let env = Env::default();
        let (client, owner, payment_token) = create_client(&env);

        assert_eq!(client.owner(), owner);
        assert_eq!(client.current_price(), 0);
        assert_eq!(client.total_supply(), 0);
        assert!(!client.voting_active());

        let res = client.try_initialize(
            &owner,
            &payment_token,
            &3600,
            &1000,
            &500,
            &OpenVotePolicy::SupplyWeighted,
        );
        assert_eq!(res.unwrap_err().unwrap(), TokenError::AlreadyInitialized);
    }

    #[test]
    fn test_buy_mints_value_over_price() {
        let env = Env::default();
        env.mock_all_auths();
        let (client, owner, payment_token) = create_client(&env);
        let buyer = Address::generate(&env);

        client.set_initial_price(&owner, &100);
        StellarAssetClient::new(&env, &payment_token).mint(&buyer, &1_050);

        assert_eq!(client.buy(&buyer, &1_050), 10);
        assert_eq!(client.balance(&buyer), 10);
        assert_eq!(client.total_supply(), 10);
        // The division remainder stays with the contract.
        assert_eq!(client.collected_value(), 1_050);
    }

    #[test]
    fn test_buy_requires_price() {
        let env = Env::default();
        env.mock_all_auths();
        let (client, _owner, payment_token) = create_client(&env);
        let buyer = Address::generate(&env);
        StellarAssetClient::new(&env, &payment_token).mint(&buyer, &1_000);

        let res = client.try_buy(&buyer, &1_000);
        assert_eq!(res.unwrap_err().unwrap(), TokenError::ZeroPrice);
    }

    #[test]
    fn test_reentrancy_guard_blocks_buy() {
        let env = Env::default();
        env.mock_all_auths();
        let (client, owner, payment_token) = create_client(&env);
        let buyer = Address::generate(&env);

        client.set_initial_price(&owner, &100);
        StellarAssetClient::new(&env, &payment_token).mint(&buyer, &1_000);

        // Simulate an in-progress value transfer holding the lock.
        env.as_contract(&client.address, || {
            storage::set_reentrancy_guard(&env, true);
        });

        let res = client.try_buy(&buyer, &1_000);
        assert_eq!(res.unwrap_err().unwrap(), TokenError::ReentrantCall);

        env.as_contract(&client.address, || {
            storage::set_reentrancy_guard(&env, false);
        });
        assert_eq!(client.buy(&buyer, &1_000), 10);
    }

    #[test]
    fn test_guard_resets_after_failed_buy() {
        let env = Env::default();
        env.mock_all_auths();
        let (client, owner, _) = create_client(&env);
        let buyer = Address::generate(&env);

        client.set_initial_price(&owner, &100);
        let res = client.try_buy(&buyer, &0);
        assert_eq!(res.unwrap_err().unwrap(), TokenError::InvalidAmount);

        env.as_contract(&client.address, || {
            assert!(!storage::is_reentrancy_locked(&env));
        });
    }
}
