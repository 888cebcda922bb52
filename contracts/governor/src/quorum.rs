//! Dynamic Quorum Module
//!
//! Quorum is expressed in basis points of the token supply captured when a
//! proposal is created. It starts at `min_quorum_votes_bps` and rises with the
//! share of against votes, scaled by `quorum_coefficient` (1e6 = 1.0), up to
//! `max_quorum_votes_bps`.
//!
//! Parameters are checkpointed by ledger so that a proposal is always judged
//! with the parameters in force when it was created, regardless of later
//! admin changes.
//!
//! ## Bounds
//! - `min_quorum_votes_bps` in [MIN_QUORUM_VOTES_BPS_LOWER_BOUND, MIN_QUORUM_VOTES_BPS_UPPER_BOUND]
//! - `max_quorum_votes_bps` <= MAX_QUORUM_VOTES_BPS_UPPER_BOUND
//! - `min_quorum_votes_bps` <= `max_quorum_votes_bps`

use crate::events;
use crate::math::BPS_SCALAR;
use crate::types::{DataKey, DynamicQuorumParams, QuorumCheckpoint};
use crate::{BUMP_TARGET, BUMP_THRESHOLD};
use governor_errors::ContractError;
use soroban_sdk::{Address, Env, Vec};

/// Lowest accepted `min_quorum_votes_bps` (2%).
pub const MIN_QUORUM_VOTES_BPS_LOWER_BOUND: u32 = 200;
/// Highest accepted `min_quorum_votes_bps` (19%).
pub const MIN_QUORUM_VOTES_BPS_UPPER_BOUND: u32 = 1_900;
/// Highest accepted `max_quorum_votes_bps` (19%).
pub const MAX_QUORUM_VOTES_BPS_UPPER_BOUND: u32 = 1_900;

/// Fixed-point scale of `quorum_coefficient`.
pub const QUORUM_COEFFICIENT_SCALE: u64 = 1_000_000;

// ============================================================================
// Math
// ============================================================================

/// Quorum, in votes, for a proposal with `against_votes` against out of
/// `total_supply`.
///
/// Params within the setter bounds keep the result at or below
/// `total_supply`. Unbounded params can push it past `u32::MAX`, which is
/// reported as `Overflow`.
pub fn dynamic_quorum_votes(
    against_votes: u32,
    total_supply: u32,
    params: &DynamicQuorumParams,
) -> Result<u32, ContractError> {
    if total_supply == 0 {
        return Ok(0);
    }
    let scalar = BPS_SCALAR as u128;
    let total = total_supply as u128;
    let against_bps = scalar * against_votes as u128 / total;
    let adjustment_bps =
        params.quorum_coefficient as u128 * against_bps / QUORUM_COEFFICIENT_SCALE as u128;
    let adjusted_bps = params.min_quorum_votes_bps as u128 + adjustment_bps;
    let quorum_bps = adjusted_bps.min(params.max_quorum_votes_bps as u128);
    u32::try_from(quorum_bps * total / scalar).map_err(|_| ContractError::Overflow)
}

// ============================================================================
// Validation
// ============================================================================

pub fn validate_min_bps(value: u32) -> Result<(), ContractError> {
    if !(MIN_QUORUM_VOTES_BPS_LOWER_BOUND..=MIN_QUORUM_VOTES_BPS_UPPER_BOUND).contains(&value) {
        return Err(ContractError::InvalidMinQuorumVotesBps);
    }
    Ok(())
}

pub fn validate_max_bps(value: u32) -> Result<(), ContractError> {
    if value > MAX_QUORUM_VOTES_BPS_UPPER_BOUND {
        return Err(ContractError::InvalidMaxQuorumVotesBps);
    }
    Ok(())
}

pub fn validate_params(params: &DynamicQuorumParams) -> Result<(), ContractError> {
    validate_min_bps(params.min_quorum_votes_bps)?;
    validate_max_bps(params.max_quorum_votes_bps)?;
    if params.min_quorum_votes_bps > params.max_quorum_votes_bps {
        return Err(ContractError::MinQuorumVotesBpsGreaterThanMax);
    }
    Ok(())
}

// ============================================================================
// Checkpoints
// ============================================================================

fn load_checkpoints(e: &Env) -> Vec<QuorumCheckpoint> {
    let key = DataKey::QuorumCheckpoints;
    let storage = e.storage().persistent();
    match storage.get::<_, Vec<QuorumCheckpoint>>(&key) {
        Some(list) => {
            storage.extend_ttl(&key, BUMP_THRESHOLD, BUMP_TARGET);
            list
        }
        None => Vec::new(e),
    }
}

/// Record `params` as in force from the current ledger. A second write in
/// the same ledger replaces the first.
pub fn write_checkpoint(e: &Env, params: &DynamicQuorumParams) {
    let ledger = e.ledger().sequence();
    let mut list = load_checkpoints(e);
    let n = list.len();
    let checkpoint = QuorumCheckpoint {
        from_ledger: ledger,
        params: params.clone(),
    };
    if n > 0 && list.get_unchecked(n - 1).from_ledger == ledger {
        list.set(n - 1, checkpoint);
    } else {
        list.push_back(checkpoint);
    }
    let key = DataKey::QuorumCheckpoints;
    e.storage().persistent().set(&key, &list);
    e.storage()
        .persistent()
        .extend_ttl(&key, BUMP_THRESHOLD, BUMP_TARGET);
}

/// Parameters in force at `ledger`. Ledgers before the first checkpoint
/// resolve to the first checkpoint.
pub fn params_at(e: &Env, ledger: u32) -> Result<DynamicQuorumParams, ContractError> {
    let list = load_checkpoints(e);
    let n = list.len();
    if n == 0 {
        return Err(ContractError::NotInitialized);
    }
    let last = list.get_unchecked(n - 1);
    if last.from_ledger <= ledger {
        return Ok(last.params);
    }
    let first = list.get_unchecked(0);
    if first.from_ledger >= ledger {
        return Ok(first.params);
    }

    let mut lower = 0_u32;
    let mut upper = n - 1;
    while upper > lower {
        let center = upper - (upper - lower) / 2;
        let cp = list.get_unchecked(center);
        if cp.from_ledger == ledger {
            return Ok(cp.params);
        } else if cp.from_ledger < ledger {
            lower = center;
        } else {
            upper = center - 1;
        }
    }
    Ok(list.get_unchecked(lower).params)
}

pub fn current_params(e: &Env) -> Result<DynamicQuorumParams, ContractError> {
    params_at(e, e.ledger().sequence())
}

// ============================================================================
// Setters (Admin-Only)
// ============================================================================

/// Set the quorum floor.
///
/// # Errors
/// - `AdminOnly` if caller is not the admin
/// - `InvalidMinQuorumVotesBps` if value is outside
///   [MIN_QUORUM_VOTES_BPS_LOWER_BOUND, MIN_QUORUM_VOTES_BPS_UPPER_BOUND]
/// - `MinQuorumVotesBpsGreaterThanMax` if value exceeds the current max
pub fn set_min_quorum_votes_bps(
    e: &Env,
    caller: &Address,
    value: u32,
) -> Result<(), ContractError> {
    crate::require_admin(e, caller)?;
    validate_min_bps(value)?;

    let mut params = current_params(e)?;
    if value > params.max_quorum_votes_bps {
        return Err(ContractError::MinQuorumVotesBpsGreaterThanMax);
    }
    let old_value = params.min_quorum_votes_bps;
    params.min_quorum_votes_bps = value;
    write_checkpoint(e, &params);

    events::emit_parameter_set(e, "min_quorum_votes_bps_set", old_value, value);
    Ok(())
}

/// Set the quorum ceiling.
///
/// # Errors
/// - `AdminOnly` if caller is not the admin
/// - `InvalidMaxQuorumVotesBps` if value exceeds MAX_QUORUM_VOTES_BPS_UPPER_BOUND
/// - `MinQuorumVotesBpsGreaterThanMax` if value is below the current min
pub fn set_max_quorum_votes_bps(
    e: &Env,
    caller: &Address,
    value: u32,
) -> Result<(), ContractError> {
    crate::require_admin(e, caller)?;
    validate_max_bps(value)?;

    let mut params = current_params(e)?;
    if params.min_quorum_votes_bps > value {
        return Err(ContractError::MinQuorumVotesBpsGreaterThanMax);
    }
    let old_value = params.max_quorum_votes_bps;
    params.max_quorum_votes_bps = value;
    write_checkpoint(e, &params);

    events::emit_parameter_set(e, "max_quorum_votes_bps_set", old_value, value);
    Ok(())
}

/// Set the against-votes multiplier (1e6 = 1.0).
pub fn set_quorum_coefficient(
    e: &Env,
    caller: &Address,
    value: u32,
) -> Result<(), ContractError> {
    crate::require_admin(e, caller)?;

    let mut params = current_params(e)?;
    let old_value = params.quorum_coefficient;
    params.quorum_coefficient = value;
    write_checkpoint(e, &params);

    events::emit_parameter_set(e, "quorum_coefficient_set", old_value, value);
    Ok(())
}

/// Replace all three quorum parameters at once.
pub fn set_dynamic_quorum_params(
    e: &Env,
    caller: &Address,
    params: &DynamicQuorumParams,
) -> Result<(), ContractError> {
    crate::require_admin(e, caller)?;
    validate_params(params)?;

    let old = current_params(e)?;
    write_checkpoint(e, params);

    events::emit_parameter_set(
        e,
        "min_quorum_votes_bps_set",
        old.min_quorum_votes_bps,
        params.min_quorum_votes_bps,
    );
    events::emit_parameter_set(
        e,
        "max_quorum_votes_bps_set",
        old.max_quorum_votes_bps,
        params.max_quorum_votes_bps,
    );
    events::emit_parameter_set(
        e,
        "quorum_coefficient_set",
        old.quorum_coefficient,
        params.quorum_coefficient,
    );
    Ok(())
}
