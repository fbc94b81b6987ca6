#![cfg(test)]
#![cfg(not(tarpaulin_include))]
use soroban_sdk::testutils::{Address as _, Ledger as _};
use soroban_sdk::token::{StellarAssetClient, TokenClient};
use soroban_sdk::{Address, Env};

use sale_token::{OpenVotePolicy, SaleToken, SaleTokenClient};

pub const PRICE: i128 = 100;
pub const TIME_TO_VOTE: u64 = 3600;
pub const CHANGE_THRESHOLD_PPM: u32 = 1000;
pub const PRICE_THRESHOLD_PPM: u32 = 500; // 0.05% of supply

pub struct TestEnv<'a> {
    pub env: Env,
    pub client: SaleTokenClient<'a>,
    pub owner: Address,
    pub payment_token: Address,
}

impl<'a> TestEnv<'a> {
    /// Deploys the restrictive-generation token with the default deployment
    /// parameters and the sale price already set, like the deployment
    /// pipeline does.
    pub fn new() -> Self {
        let t = Self::with_policy(OpenVotePolicy::SupplyWeighted, CHANGE_THRESHOLD_PPM);
        t.client.set_initial_price(&t.owner, &PRICE);
        t
    }

    /// Deploys with a custom open-vote gate; no price set.
    pub fn with_policy(policy: OpenVotePolicy, change_threshold: u32) -> Self {
        let env = Env::default();
        env.mock_all_auths();
        // A plausible chain time; Env::default() starts at zero.
        env.ledger().with_mut(|li| li.timestamp = 1_700_000_000);

        let owner = Address::generate(&env);
        let payment_token = register_payment_token(&env);

        let contract_id = env.register_contract(None, SaleToken);
        let client = SaleTokenClient::new(&env, &contract_id);

        client.initialize(
            &owner,
            &payment_token,
            &TIME_TO_VOTE,
            &change_threshold,
            &PRICE_THRESHOLD_PPM,
            &policy,
        );

        Self {
            env,
            client,
            owner,
            payment_token,
        }
    }

    /// Mints payment-token funds to an account.
    pub fn fund(&self, addr: &Address, amount: i128) {
        StellarAssetClient::new(&self.env, &self.payment_token).mint(addr, &amount);
    }

    /// Funds and buys in one step; returns the minted amount.
    pub fn buy(&self, addr: &Address, value: i128) -> i128 {
        self.fund(addr, value);
        self.client.buy(addr, &value)
    }

    pub fn payment_balance(&self, addr: &Address) -> i128 {
        TokenClient::new(&self.env, &self.payment_token).balance(addr)
    }

    pub fn advance_time(&self, seconds: u64) {
        self.env.ledger().with_mut(|li| li.timestamp += seconds);
    }
}

/// Registers a Stellar asset to stand in for native value.
pub fn register_payment_token(env: &Env) -> Address {
    let issuer = Address::generate(env);
    env.register_stellar_asset_contract(issuer)
}
