use soroban_sdk::{symbol_short, Address, Env};

//
// TOKEN EVENTS
//

// Sale price set or changed (by the owner or by round resolution)
pub fn emit_price_set(env: &Env, price: i128) {
    env.events().publish((symbol_short!("price"),), price);
}

// Purchase: value paid and units minted
pub fn emit_purchase(env: &Env, buyer: &Address, value: i128, amount: i128) {
    env.events()
        .publish((symbol_short!("buy"), buyer), (value, amount));
}

pub fn emit_transfer(env: &Env, from: &Address, to: &Address, amount: i128) {
    env.events()
        .publish((symbol_short!("transfer"), from, to), amount);
}

//
// VOTING EVENTS
//

// Open-window threshold vote cast or withdrawn
pub fn emit_open_vote(env: &Env, voter: &Address, approve: bool) {
    env.events()
        .publish((symbol_short!("openvote"), voter), approve);
}

// Round opened
pub fn emit_voting_started(env: &Env, voting_number: u32) {
    env.events()
        .publish((symbol_short!("vstart"),), voting_number);
}

// Price vote cast with its snapshot weight
pub fn emit_price_vote(env: &Env, voter: &Address, price: i128, weight: i128) {
    env.events()
        .publish((symbol_short!("pvote"), voter), (price, weight));
}

// Round resolved; `price` is the price in force afterwards
pub fn emit_voting_ended(env: &Env, voting_number: u32, price: i128) {
    env.events()
        .publish((symbol_short!("vend"),), (voting_number, price));
}

//
// SETTLEMENT EVENTS
//

// Cleanup completed; `refund` is the native value returned to the owner
pub fn emit_cleared(env: &Env, owner: &Address, refund: i128) {
    env.events()
        .publish((symbol_short!("cleared"), owner), refund);
}

//
// TESTS
//
