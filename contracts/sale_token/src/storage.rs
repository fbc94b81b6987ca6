use crate::types::{OpenVotePolicy, VotingInfo};
use soroban_sdk::{symbol_short, Address, Env, Vec};

// ============================================================================
// CONSTANTS
// ============================================================================

/// Denominator for the threshold fractions (`change_voting_threshold` and
/// `price_voting_threshold` are expressed in parts per million of supply).
pub const PPM_DENOMINATOR: i128 = 1_000_000;

/// TTL for critical storage (1 year in ledgers ~= 6.3M ledgers)
const CRITICAL_STORAGE_TTL: u32 = 6_307_200;

/// TTL threshold for bumps (30 days ~= 518K ledgers)
const CRITICAL_STORAGE_THRESHOLD: u32 = 518_400;

// ============================================================================
// TTL BUMPS
// ============================================================================

/// Bumps the TTL of instance storage (config, supply, voting round state).
pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(CRITICAL_STORAGE_THRESHOLD, CRITICAL_STORAGE_TTL);
}

/// Bumps the TTL of an address balance entry.
pub fn bump_balance(env: &Env, addr: &Address) {
    let key = (symbol_short!("balance"), addr);
    env.storage()
        .persistent()
        .extend_ttl(&key, CRITICAL_STORAGE_THRESHOLD, CRITICAL_STORAGE_TTL);
}

// ============================================================================
// OWNER & PAYMENT TOKEN
// ============================================================================

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&symbol_short!("owner"))
}

pub fn get_owner(env: &Env) -> Address {
    env.storage().instance().get(&symbol_short!("owner")).unwrap()
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&symbol_short!("owner"), owner);
}

pub fn get_payment_token(env: &Env) -> Address {
    env.storage().instance().get(&symbol_short!("paytoken")).unwrap()
}

pub fn set_payment_token(env: &Env, token: &Address) {
    env.storage().instance().set(&symbol_short!("paytoken"), token);
}

// ============================================================================
// SALE STATE
// ============================================================================

pub fn get_price(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&symbol_short!("price"))
        .unwrap_or(0)
}

pub fn set_price(env: &Env, price: i128) {
    env.storage().instance().set(&symbol_short!("price"), &price);
}

pub fn get_total_supply(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&symbol_short!("supply"))
        .unwrap_or(0)
}

pub fn set_total_supply(env: &Env, amount: i128) {
    env.storage().instance().set(&symbol_short!("supply"), &amount);
}

/// Native value held by the contract: purchase proceeds plus the integer
/// division remainders retained by `buy`.
pub fn get_collected(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&symbol_short!("collected"))
        .unwrap_or(0)
}

pub fn set_collected(env: &Env, amount: i128) {
    env.storage()
        .instance()
        .set(&symbol_short!("collected"), &amount);
}

// ============================================================================
// BALANCES & HOLDER REGISTRY
// ============================================================================

pub fn get_balance(env: &Env, addr: &Address) -> i128 {
    let key = (symbol_short!("balance"), addr);
    env.storage().persistent().get(&key).unwrap_or(0)
}

pub fn set_balance(env: &Env, addr: &Address, amount: i128) {
    let key = (symbol_short!("balance"), addr);
    env.storage().persistent().set(&key, &amount);
}

pub fn get_holders(env: &Env) -> Vec<Address> {
    env.storage()
        .instance()
        .get(&symbol_short!("holders"))
        .unwrap_or_else(|| Vec::new(env))
}

pub fn set_holders(env: &Env, holders: &Vec<Address>) {
    env.storage().instance().set(&symbol_short!("holders"), holders);
}

pub fn is_registered_holder(env: &Env, addr: &Address) -> bool {
    let key = (symbol_short!("held"), addr);
    env.storage().persistent().get(&key).unwrap_or(false)
}

/// Records an address in the holder registry exactly once. The registry is
/// what `clear_all` walks when wiping the ledger.
pub fn register_holder(env: &Env, addr: &Address) {
    if is_registered_holder(env, addr) {
        return;
    }
    let key = (symbol_short!("held"), addr);
    env.storage().persistent().set(&key, &true);
    let mut holders = get_holders(env);
    holders.push_back(addr.clone());
    set_holders(env, &holders);
}

pub fn clear_holder(env: &Env, addr: &Address) {
    let key = (symbol_short!("held"), addr);
    env.storage().persistent().remove(&key);
}

// ============================================================================
// VOTING CONFIGURATION
// ============================================================================

pub fn get_time_to_vote(env: &Env) -> u64 {
    env.storage().instance().get(&symbol_short!("ttv")).unwrap_or(0)
}

pub fn set_time_to_vote(env: &Env, duration: u64) {
    env.storage().instance().set(&symbol_short!("ttv"), &duration);
}

pub fn get_change_threshold(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&symbol_short!("cthresh"))
        .unwrap_or(0)
}

pub fn set_change_threshold(env: &Env, threshold: u32) {
    env.storage()
        .instance()
        .set(&symbol_short!("cthresh"), &threshold);
}

pub fn get_price_threshold(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&symbol_short!("pthresh"))
        .unwrap_or(0)
}

pub fn set_price_threshold(env: &Env, threshold: u32) {
    env.storage()
        .instance()
        .set(&symbol_short!("pthresh"), &threshold);
}

pub fn get_open_vote_policy(env: &Env) -> OpenVotePolicy {
    env.storage()
        .instance()
        .get(&symbol_short!("opolicy"))
        .unwrap_or(OpenVotePolicy::SupplyWeighted)
}

pub fn set_open_vote_policy(env: &Env, policy: &OpenVotePolicy) {
    env.storage().instance().set(&symbol_short!("opolicy"), policy);
}

// ============================================================================
// VOTING ROUND STATE
// ============================================================================

pub fn get_voting_number(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&symbol_short!("vnum"))
        .unwrap_or(0)
}

pub fn set_voting_number(env: &Env, number: u32) {
    env.storage().instance().set(&symbol_short!("vnum"), &number);
}

pub fn is_voting_active(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&symbol_short!("vactive"))
        .unwrap_or(false)
}

pub fn set_voting_active(env: &Env, active: bool) {
    env.storage().instance().set(&symbol_short!("vactive"), &active);
}

pub fn get_voting_start_time(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&symbol_short!("vstart"))
        .unwrap_or(0)
}

pub fn set_voting_start_time(env: &Env, timestamp: u64) {
    env.storage()
        .instance()
        .set(&symbol_short!("vstart"), &timestamp);
}

// ============================================================================
// OPEN-VOTE TALLY
// ============================================================================

pub fn is_open_voter(env: &Env, addr: &Address) -> bool {
    let key = (symbol_short!("ovote"), addr);
    env.storage().persistent().get(&key).unwrap_or(false)
}

pub fn set_open_voter(env: &Env, addr: &Address, approve: bool) {
    let key = (symbol_short!("ovote"), addr);
    if approve {
        env.storage().persistent().set(&key, &true);
    } else {
        env.storage().persistent().remove(&key);
    }
}

pub fn get_open_voters(env: &Env) -> Vec<Address> {
    env.storage()
        .instance()
        .get(&symbol_short!("ovoters"))
        .unwrap_or_else(|| Vec::new(env))
}

pub fn set_open_voters(env: &Env, voters: &Vec<Address>) {
    env.storage().instance().set(&symbol_short!("ovoters"), voters);
}

// ============================================================================
// PRICE VOTES
// ============================================================================

pub fn get_voting_info(env: &Env, addr: &Address) -> Option<VotingInfo> {
    let key = (symbol_short!("vinfo"), addr);
    env.storage().persistent().get(&key)
}

pub fn set_voting_info(env: &Env, addr: &Address, info: &VotingInfo) {
    let key = (symbol_short!("vinfo"), addr);
    env.storage().persistent().set(&key, info);
}

pub fn remove_voting_info(env: &Env, addr: &Address) {
    let key = (symbol_short!("vinfo"), addr);
    env.storage().persistent().remove(&key);
}

pub fn get_price_voters(env: &Env) -> Vec<Address> {
    env.storage()
        .instance()
        .get(&symbol_short!("pvoters"))
        .unwrap_or_else(|| Vec::new(env))
}

pub fn set_price_voters(env: &Env, voters: &Vec<Address>) {
    env.storage().instance().set(&symbol_short!("pvoters"), voters);
}

// ============================================================================
// REENTRANCY GUARD
// ============================================================================

pub fn is_reentrancy_locked(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&symbol_short!("reguard"))
        .unwrap_or(false)
}

pub fn set_reentrancy_guard(env: &Env, locked: bool) {
    env.storage().instance().set(&symbol_short!("reguard"), &locked);
}
