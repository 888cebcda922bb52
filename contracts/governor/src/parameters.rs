//! Governance Parameters Module
//!
//! Voting delay, voting period, proposal threshold and timelock delay. All
//! parameters live in `instance()` storage and every write is checked against
//! min/max bounds. Quorum bounds have their own module (`quorum`) because
//! they are checkpointed.
//!
//! ## Admin Control
//! Setters are restricted to the governor admin and fail with
//! `ContractError::AdminOnly` for any other caller.
//!
//! ## Event Emission
//! Every successful update emits `<parameter>_set` with `(old, new)`.

use crate::events;
use crate::types::DataKey;
use governor_errors::ContractError;
use soroban_sdk::{Address, Env};

// ============================================================================
// Parameter Bounds Constants
// ============================================================================

/// Ledgers per day at a 5 second close time.
pub const ONE_DAY_LEDGERS: u32 = 17_280;

/// Minimum voting period in ledgers (1 hour).
pub const MIN_VOTING_PERIOD: u32 = 720;
/// Maximum voting period in ledgers (14 days).
pub const MAX_VOTING_PERIOD: u32 = 14 * ONE_DAY_LEDGERS;

/// Minimum voting delay in ledgers.
pub const MIN_VOTING_DELAY: u32 = 1;
/// Maximum voting delay in ledgers (7 days).
pub const MAX_VOTING_DELAY: u32 = 7 * ONE_DAY_LEDGERS;

/// Minimum proposal threshold (1 bps = 0.01%).
pub const MIN_PROPOSAL_THRESHOLD_BPS: u32 = 1;
/// Maximum proposal threshold (1000 bps = 10%).
pub const MAX_PROPOSAL_THRESHOLD_BPS: u32 = 1_000;

/// Minimum timelock delay in seconds (2 days).
pub const MIN_TIMELOCK_DELAY: u64 = 2 * 86_400;
/// Maximum timelock delay in seconds (30 days).
pub const MAX_TIMELOCK_DELAY: u64 = 30 * 86_400;
/// Seconds after `eta` during which a queued proposal stays executable.
pub const GRACE_PERIOD: u64 = 14 * 86_400;

/// Maximum number of actions in one proposal.
pub const PROPOSAL_MAX_OPERATIONS: u32 = 10;

// ============================================================================
// Validation
// ============================================================================

pub fn validate_voting_period(value: u32) -> Result<(), ContractError> {
    if !(MIN_VOTING_PERIOD..=MAX_VOTING_PERIOD).contains(&value) {
        return Err(ContractError::InvalidVotingPeriod);
    }
    Ok(())
}

pub fn validate_voting_delay(value: u32) -> Result<(), ContractError> {
    if !(MIN_VOTING_DELAY..=MAX_VOTING_DELAY).contains(&value) {
        return Err(ContractError::InvalidVotingDelay);
    }
    Ok(())
}

pub fn validate_proposal_threshold_bps(value: u32) -> Result<(), ContractError> {
    if !(MIN_PROPOSAL_THRESHOLD_BPS..=MAX_PROPOSAL_THRESHOLD_BPS).contains(&value) {
        return Err(ContractError::InvalidProposalThresholdBps);
    }
    Ok(())
}

pub fn validate_timelock_delay(value: u64) -> Result<(), ContractError> {
    if !(MIN_TIMELOCK_DELAY..=MAX_TIMELOCK_DELAY).contains(&value) {
        return Err(ContractError::InvalidTimelockDelay);
    }
    Ok(())
}

// ============================================================================
// Getters
// ============================================================================

fn get_u32(e: &Env, key: &DataKey) -> Result<u32, ContractError> {
    e.storage()
        .instance()
        .get(key)
        .ok_or(ContractError::NotInitialized)
}

pub fn get_voting_delay(e: &Env) -> Result<u32, ContractError> {
    get_u32(e, &DataKey::VotingDelay)
}

pub fn get_voting_period(e: &Env) -> Result<u32, ContractError> {
    get_u32(e, &DataKey::VotingPeriod)
}

pub fn get_proposal_threshold_bps(e: &Env) -> Result<u32, ContractError> {
    get_u32(e, &DataKey::ProposalThresholdBps)
}

pub fn get_timelock_delay(e: &Env) -> Result<u64, ContractError> {
    e.storage()
        .instance()
        .get(&DataKey::TimelockDelay)
        .ok_or(ContractError::NotInitialized)
}

// ============================================================================
// Setters (Admin-Only)
// ============================================================================

/// Set the voting delay in ledgers.
///
/// # Errors
/// - `AdminOnly` if caller is not the admin
/// - `InvalidVotingDelay` if value is outside [MIN_VOTING_DELAY, MAX_VOTING_DELAY]
pub fn set_voting_delay(e: &Env, caller: &Address, value: u32) -> Result<(), ContractError> {
    crate::require_admin(e, caller)?;
    validate_voting_delay(value)?;

    let old_value = get_voting_delay(e)?;
    e.storage().instance().set(&DataKey::VotingDelay, &value);
    events::emit_parameter_set(e, "voting_delay_set", old_value, value);
    Ok(())
}

/// Set the voting period in ledgers.
///
/// # Errors
/// - `AdminOnly` if caller is not the admin
/// - `InvalidVotingPeriod` if value is outside [MIN_VOTING_PERIOD, MAX_VOTING_PERIOD]
pub fn set_voting_period(e: &Env, caller: &Address, value: u32) -> Result<(), ContractError> {
    crate::require_admin(e, caller)?;
    validate_voting_period(value)?;

    let old_value = get_voting_period(e)?;
    e.storage().instance().set(&DataKey::VotingPeriod, &value);
    events::emit_parameter_set(e, "voting_period_set", old_value, value);
    Ok(())
}

/// Set the proposal threshold in basis points of total supply.
///
/// # Errors
/// - `AdminOnly` if caller is not the admin
/// - `InvalidProposalThresholdBps` if value is outside
///   [MIN_PROPOSAL_THRESHOLD_BPS, MAX_PROPOSAL_THRESHOLD_BPS]
pub fn set_proposal_threshold_bps(
    e: &Env,
    caller: &Address,
    value: u32,
) -> Result<(), ContractError> {
    crate::require_admin(e, caller)?;
    validate_proposal_threshold_bps(value)?;

    let old_value = get_proposal_threshold_bps(e)?;
    e.storage()
        .instance()
        .set(&DataKey::ProposalThresholdBps, &value);
    events::emit_parameter_set(e, "proposal_threshold_bps_set", old_value, value);
    Ok(())
}
