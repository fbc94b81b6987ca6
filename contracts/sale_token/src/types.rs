use soroban_sdk::{contracterror, contracttype};

// ============================================================================
// CONTRACT ERRORS
// ============================================================================

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum TokenError {
    AlreadyInitialized = 1,
    Unauthorized = 2,
    InsufficientBalance = 3,
    InvalidAmount = 4,
    TransferRestricted = 5,
    ZeroPrice = 6,
    SaleAlreadyStarted = 7,
    AlreadyActive = 8,
    NotActive = 9,
    TooEarly = 10,
    InvalidPrice = 11,
    NoSupply = 12,
    InsufficientWeight = 13,
    AlreadyVoted = 14,
    ThresholdNotMet = 15,
    ReentrantCall = 16,
}

// ============================================================================
// VOTING RECORDS
// ============================================================================

/// Per-account record of a price vote in the current round.
///
/// `weight` is the caller's balance at the moment the vote was cast and is
/// never updated afterwards. `price_voted` is the proposed price; 0 is not a
/// castable value, so presence of the record implies a cast vote.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VotingInfo {
    pub weight: i128,
    pub price_voted: i128,
}

// ============================================================================
// OPEN-VOTE GATE POLICY
// ============================================================================

/// Gating rule applied by `start_voting` against `change_voting_threshold`.
///
/// The threshold semantics are deployment configuration, not a hardcoded
/// formula:
/// - `SupplyWeighted`: the combined balance of the open-vote tally must reach
///   `change_voting_threshold` parts-per-million of total supply. Trivially
///   satisfied while supply is zero.
/// - `ParticipantCount`: the open-vote tally must contain at least
///   `change_voting_threshold` accounts, regardless of balance.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OpenVotePolicy {
    SupplyWeighted = 0,
    ParticipantCount = 1,
}

// ============================================================================
// TRANSFER POLICY (fixed per token generation)
// ============================================================================

/// How a token generation treats transfers touching accounts with a cast
/// price vote while a round is active.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TransferPolicy {
    /// Transfers from or to a voting account are rejected until the round
    /// resolves.
    Restrictive,
    /// Transfers always go through; vote weight was frozen at cast time.
    Snapshot,
}
