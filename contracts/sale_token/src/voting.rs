use crate::events;
use crate::storage;
use crate::types::{OpenVotePolicy, TokenError, VotingInfo};
use crate::validation;
use soroban_sdk::{Address, Env, Map};

// ============================================================================
// GOVERNANCE VOTE CONTROLLER
//
// Two-stage process: a non-weighted open-window vote gates `start_voting`;
// once a round is open, balance-gated price votes are collected until
// `end_voting` resolves the round after `time_to_vote` has elapsed.
// ============================================================================

/// Minimum balance required to cast a price vote: `price_voting_threshold`
/// parts-per-million of total supply.
pub fn min_vote_balance(env: &Env) -> Result<i128, TokenError> {
    let supply = storage::get_total_supply(env);
    let threshold = i128::from(storage::get_price_threshold(env));
    let scaled = supply
        .checked_mul(threshold)
        .ok_or(TokenError::InvalidAmount)?;
    Ok(scaled / storage::PPM_DENOMINATOR)
}

/// Toggles the caller's membership in the open-vote tally. Callable with any
/// balance, including zero: this stage counts participation, not weight.
pub fn vote_change(env: &Env, voter: &Address, approve: bool) {
    storage::bump_instance(env);
    let member = storage::is_open_voter(env, voter);
    if approve && !member {
        storage::set_open_voter(env, voter, true);
        let mut voters = storage::get_open_voters(env);
        voters.push_back(voter.clone());
        storage::set_open_voters(env, &voters);
    } else if !approve && member {
        storage::set_open_voter(env, voter, false);
        let mut voters = storage::get_open_voters(env);
        if let Some(index) = voters.first_index_of(voter) {
            voters.remove(index);
        }
        storage::set_open_voters(env, &voters);
    }
    events::emit_open_vote(env, voter, approve);
}

/// Opens a voting round if the configured gate is satisfied.
///
/// Returns the new round number.
pub fn start_voting(env: &Env) -> Result<u32, TokenError> {
    // === CHECKS ===
    validation::require_no_active_voting(env)?;
    require_open_threshold(env)?;
    storage::bump_instance(env);

    // === EFFECTS ===
    let number = storage::get_voting_number(env) + 1;
    storage::set_voting_number(env, number);
    storage::set_voting_start_time(env, env.ledger().timestamp());
    storage::set_voting_active(env, true);

    // === INTERACTIONS ===
    events::emit_voting_started(env, number);

    Ok(number)
}

/// Casts a balance-gated price vote in the active round. The caller's weight
/// is snapshotted at cast time and never updated afterwards.
///
/// Check order is observable behavior: round activity, price validity,
/// supply, weight, double vote.
pub fn vote_price(env: &Env, voter: &Address, price: i128) -> Result<(), TokenError> {
    // === CHECKS ===
    validation::require_voting_active(env)?;
    if price <= 0 || price == storage::get_price(env) {
        return Err(TokenError::InvalidPrice);
    }
    if storage::get_total_supply(env) == 0 {
        return Err(TokenError::NoSupply);
    }
    let balance = storage::get_balance(env, voter);
    if balance < min_vote_balance(env)? {
        return Err(TokenError::InsufficientWeight);
    }
    if storage::get_voting_info(env, voter).is_some() {
        return Err(TokenError::AlreadyVoted);
    }
    storage::bump_instance(env);

    // === EFFECTS ===
    let info = VotingInfo {
        weight: balance,
        price_voted: price,
    };
    storage::set_voting_info(env, voter, &info);
    let mut voters = storage::get_price_voters(env);
    voters.push_back(voter.clone());
    storage::set_price_voters(env, &voters);

    // === INTERACTIONS ===
    events::emit_price_vote(env, voter, price, balance);

    Ok(())
}

/// Closes the round once `time_to_vote` has elapsed, applies the resolved
/// price and clears all per-round voting state.
///
/// Tally rule: cumulative snapshot weight per distinct proposed price; the
/// highest cumulative weight wins, ties break toward the lower price. A
/// round with no price votes leaves the price unchanged.
///
/// Returns the price in force after resolution.
pub fn end_voting(env: &Env) -> Result<i128, TokenError> {
    // === CHECKS ===
    validation::require_voting_active(env)?;
    let now = env.ledger().timestamp();
    let deadline = storage::get_voting_start_time(env) + storage::get_time_to_vote(env);
    if now < deadline {
        return Err(TokenError::TooEarly);
    }
    storage::bump_instance(env);

    // === EFFECTS ===
    if let Some(winner) = tally_votes(env)? {
        storage::set_price(env, winner);
    }
    clear_round(env);
    storage::set_voting_active(env, false);

    // === INTERACTIONS ===
    let price = storage::get_price(env);
    events::emit_voting_ended(env, storage::get_voting_number(env), price);

    Ok(price)
}

/// Accumulates cast weights per proposed price and picks the winner.
/// Map iteration is ascending by key, so on equal weights the lower price
/// is retained.
fn tally_votes(env: &Env) -> Result<Option<i128>, TokenError> {
    let voters = storage::get_price_voters(env);
    let mut weights: Map<i128, i128> = Map::new(env);
    for voter in voters.iter() {
        if let Some(info) = storage::get_voting_info(env, &voter) {
            let total = weights.get(info.price_voted).unwrap_or(0);
            let new_total = total
                .checked_add(info.weight)
                .ok_or(TokenError::InvalidAmount)?;
            weights.set(info.price_voted, new_total);
        }
    }

    let mut best: Option<(i128, i128)> = None;
    for (price, weight) in weights.iter() {
        match best {
            Some((_, best_weight)) if weight <= best_weight => {}
            _ => best = Some((price, weight)),
        }
    }
    Ok(best.map(|(price, _)| price))
}

/// Drops every per-round record: price votes, the price-voter list and the
/// open tally. The next round starts from an empty slate.
pub fn clear_round(env: &Env) {
    let price_voters = storage::get_price_voters(env);
    for voter in price_voters.iter() {
        storage::remove_voting_info(env, &voter);
    }
    storage::set_price_voters(env, &soroban_sdk::Vec::new(env));

    let open_voters = storage::get_open_voters(env);
    for voter in open_voters.iter() {
        storage::set_open_voter(env, &voter, false);
    }
    storage::set_open_voters(env, &soroban_sdk::Vec::new(env));
}

/// Applies the round-open gate configured at deployment.
fn require_open_threshold(env: &Env) -> Result<(), TokenError> {
    let threshold = storage::get_change_threshold(env);
    match storage::get_open_vote_policy(env) {
        OpenVotePolicy::ParticipantCount => {
            if storage::get_open_voters(env).len() < threshold {
                return Err(TokenError::ThresholdNotMet);
            }
        }
        OpenVotePolicy::SupplyWeighted => {
            let voters = storage::get_open_voters(env);
            let mut combined: i128 = 0;
            for voter in voters.iter() {
                combined = combined
                    .checked_add(storage::get_balance(env, &voter))
                    .ok_or(TokenError::InvalidAmount)?;
            }
            let supply = storage::get_total_supply(env);
            let required = supply
                .checked_mul(i128::from(threshold))
                .ok_or(TokenError::InvalidAmount)?
                / storage::PPM_DENOMINATOR;
            if combined < required {
                return Err(TokenError::ThresholdNotMet);
            }
        }
    }
    Ok(())
}
