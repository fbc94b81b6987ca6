#![cfg(test)]
#![cfg(not(tarpaulin_include))]
mod setup;

use sale_token::{OpenVotePolicy, TokenError, VulnerableSaleToken, VulnerableSaleTokenClient};
use setup::{register_payment_token, TestEnv, PRICE, PRICE_THRESHOLD_PPM, TIME_TO_VOTE};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::token::{StellarAssetClient, TokenClient};
use soroban_sdk::{Address, Env};

#[test]
fn test_clear_all_owner_only() {
    let t = TestEnv::new();
    let stranger = Address::generate(&t.env);

    let res = t.client.try_clear_all(&stranger);
    assert_eq!(res.unwrap_err().unwrap(), TokenError::Unauthorized);
}

#[test]
fn test_clear_all_refunds_proceeds_and_wipes_ledger() {
    let t = TestEnv::new();
    let a = Address::generate(&t.env);
    let b = Address::generate(&t.env);

    t.buy(&a, 1_000_050);
    t.buy(&b, 2_000_000);
    assert_eq!(t.client.collected_value(), 3_000_050);

    // Leave a round and votes in flight to prove cleanup clears them too.
    t.client.vote_change(&a, &true);
    t.client.start_voting();
    t.client.vote_price(&a, &140);

    let owner_before = t.payment_balance(&t.owner);
    assert_eq!(t.client.clear_all(&t.owner), 3_000_050);

    assert_eq!(t.payment_balance(&t.owner), owner_before + 3_000_050);
    assert_eq!(t.payment_balance(&t.client.address), 0);
    assert_eq!(t.client.collected_value(), 0);
    assert_eq!(t.client.total_supply(), 0);
    assert_eq!(t.client.balance(&a), 0);
    assert_eq!(t.client.balance(&b), 0);
    assert!(!t.client.voting_active());
    assert_eq!(t.client.voting_info(&a), None);
}

#[test]
fn test_clear_all_with_nothing_collected() {
    let t = TestEnv::new();
    assert_eq!(t.client.clear_all(&t.owner), 0);
}

#[test]
fn test_sale_restarts_after_cleanup() {
    let t = TestEnv::new();
    let a = Address::generate(&t.env);

    t.buy(&a, 1_000_000);
    t.client.clear_all(&t.owner);

    // Supply is back to zero, so the owner may reprice before reopening.
    t.client.set_initial_price(&t.owner, &200);
    assert_eq!(t.buy(&a, 1_000), 5);
    assert_eq!(t.client.total_supply(), 5);
    assert_eq!(t.client.collected_value(), 1_000);
}

// ============================================================================
// VULNERABLE GENERATION
//
// Without an adversarial payee both generations settle identically; the
// divergence under reentry is covered by the settlement unit tests.
// ============================================================================

#[test]
fn test_vulnerable_clear_all_happy_path() {
    let env = Env::default();
    env.mock_all_auths();

    let owner = Address::generate(&env);
    let payment_token = register_payment_token(&env);
    let contract_id = env.register_contract(None, VulnerableSaleToken);
    let client = VulnerableSaleTokenClient::new(&env, &contract_id);

    client.initialize(
        &owner,
        &payment_token,
        &TIME_TO_VOTE,
        &1000,
        &PRICE_THRESHOLD_PPM,
        &OpenVotePolicy::SupplyWeighted,
    );
    client.set_initial_price(&owner, &PRICE);

    let buyer = Address::generate(&env);
    StellarAssetClient::new(&env, &payment_token).mint(&buyer, &500_000);
    client.buy(&buyer, &500_000);

    assert_eq!(client.clear_all(&owner), 500_000);
    assert_eq!(
        TokenClient::new(&env, &payment_token).balance(&owner),
        500_000
    );
    assert_eq!(client.total_supply(), 0);
    assert_eq!(client.balance(&buyer), 0);
}
