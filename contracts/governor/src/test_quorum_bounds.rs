#![cfg(test)]

use crate::test_helpers::*;
use crate::ContractError;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, Env, FromVal, Symbol};

fn assert_bps_event(e: &Env, s: &Setup, name: &str, old: u32, new: u32) {
    let (topics, data) = last_event(e, &s.governor_id).unwrap();
    assert_eq!(
        Symbol::from_val(e, &topics.get(0).unwrap()),
        Symbol::new(e, name)
    );
    assert_eq!(<(u32, u32)>::from_val(e, &data), (old, new));
}

// ─── min_quorum_votes_bps ──────────────────────────────────────────────────

#[test]
fn test_set_min_quorum_votes_bps_non_admin() {
    let e = Env::default();
    let s = setup(&e);
    let stranger = Address::generate(&e);

    assert_eq!(
        s.governor.try_set_min_quorum_votes_bps(&stranger, &1_200),
        Err(Ok(ContractError::AdminOnly))
    );
}

#[test]
fn test_set_min_quorum_votes_bps_below_lower_bound() {
    let e = Env::default();
    let s = setup(&e);

    assert_eq!(
        s.governor.try_set_min_quorum_votes_bps(&s.admin, &199),
        Err(Ok(ContractError::InvalidMinQuorumVotesBps))
    );
}

#[test]
fn test_set_min_quorum_votes_bps_above_upper_bound() {
    let e = Env::default();
    let s = setup(&e);

    assert_eq!(
        s.governor.try_set_min_quorum_votes_bps(&s.admin, &1_901),
        Err(Ok(ContractError::InvalidMinQuorumVotesBps))
    );
}

#[test]
fn test_set_min_quorum_votes_bps_above_max() {
    let e = Env::default();
    let s = setup(&e);

    assert_eq!(
        s.governor
            .try_set_min_quorum_votes_bps(&s.admin, &(MAX_QUORUM_BPS + 1)),
        Err(Ok(ContractError::MinQuorumVotesBpsGreaterThanMax))
    );
}

#[test]
fn test_set_min_quorum_votes_bps_success() {
    let e = Env::default();
    let s = setup(&e);

    s.governor.set_min_quorum_votes_bps(&s.admin, &200);
    assert_bps_event(&e, &s, "min_quorum_votes_bps_set", MIN_QUORUM_BPS, 200);

    s.governor.set_min_quorum_votes_bps(&s.admin, &MAX_QUORUM_BPS);
    assert_bps_event(
        &e,
        &s,
        "min_quorum_votes_bps_set",
        200,
        MAX_QUORUM_BPS,
    );

    let params = s.governor.get_dynamic_quorum_params_at(&START_LEDGER);
    assert_eq!(params.min_quorum_votes_bps, MAX_QUORUM_BPS);
    assert_eq!(params.max_quorum_votes_bps, MAX_QUORUM_BPS);
}

// ─── max_quorum_votes_bps ──────────────────────────────────────────────────

#[test]
fn test_set_max_quorum_votes_bps_non_admin() {
    let e = Env::default();
    let s = setup(&e);
    let stranger = Address::generate(&e);

    assert_eq!(
        s.governor.try_set_max_quorum_votes_bps(&stranger, &1_800),
        Err(Ok(ContractError::AdminOnly))
    );
}

#[test]
fn test_set_max_quorum_votes_bps_above_upper_bound() {
    let e = Env::default();
    let s = setup(&e);

    assert_eq!(
        s.governor.try_set_max_quorum_votes_bps(&s.admin, &1_901),
        Err(Ok(ContractError::InvalidMaxQuorumVotesBps))
    );
}

#[test]
fn test_set_max_quorum_votes_bps_below_min() {
    let e = Env::default();
    let s = setup(&e);

    assert_eq!(
        s.governor
            .try_set_max_quorum_votes_bps(&s.admin, &(MIN_QUORUM_BPS - 1)),
        Err(Ok(ContractError::MinQuorumVotesBpsGreaterThanMax))
    );
}

#[test]
fn test_set_max_quorum_votes_bps_success() {
    let e = Env::default();
    let s = setup(&e);

    s.governor.set_max_quorum_votes_bps(&s.admin, &1_900);
    assert_bps_event(&e, &s, "max_quorum_votes_bps_set", MAX_QUORUM_BPS, 1_900);

    s.governor.set_max_quorum_votes_bps(&s.admin, &MIN_QUORUM_BPS);
    assert_bps_event(
        &e,
        &s,
        "max_quorum_votes_bps_set",
        1_900,
        MIN_QUORUM_BPS,
    );
}

#[test]
fn test_bound_checks_across_range() {
    let e = Env::default();
    let s = setup(&e);

    // Max is 1_500 throughout: min succeeds only inside [200, 1_500].
    for bps in [0_u32, 199, 200, 750, 1_500, 1_501, 1_900, 1_901, 10_000] {
        let result = s.governor.try_set_min_quorum_votes_bps(&s.admin, &bps);
        let expected = if !(200..=1_900).contains(&bps) {
            Err(Ok(ContractError::InvalidMinQuorumVotesBps))
        } else if bps > MAX_QUORUM_BPS {
            Err(Ok(ContractError::MinQuorumVotesBpsGreaterThanMax))
        } else {
            Ok(Ok(()))
        };
        assert_eq!(result, expected, "min bps {}", bps);
    }

    // Reset the floor, then max succeeds only inside [min, 1_900].
    s.governor.set_min_quorum_votes_bps(&s.admin, &MIN_QUORUM_BPS);
    for bps in [0_u32, 999, 1_000, 1_900, 1_901, u32::MAX] {
        let result = s.governor.try_set_max_quorum_votes_bps(&s.admin, &bps);
        let expected = if bps > 1_900 {
            Err(Ok(ContractError::InvalidMaxQuorumVotesBps))
        } else if bps < MIN_QUORUM_BPS {
            Err(Ok(ContractError::MinQuorumVotesBpsGreaterThanMax))
        } else {
            Ok(Ok(()))
        };
        assert_eq!(result, expected, "max bps {}", bps);
    }
}

#[test]
fn test_failed_setter_leaves_params_unchanged() {
    let e = Env::default();
    let s = setup(&e);

    let _ = s.governor.try_set_min_quorum_votes_bps(&s.admin, &1_901);
    let _ = s.governor.try_set_max_quorum_votes_bps(&s.admin, &100);
    assert_eq!(
        s.governor.get_dynamic_quorum_params_at(&START_LEDGER),
        default_quorum()
    );
}

#[test]
fn test_set_quorum_coefficient() {
    let e = Env::default();
    let s = setup(&e);

    s.governor.set_quorum_coefficient(&s.admin, &2_500_000);
    assert_bps_event(
        &e,
        &s,
        "quorum_coefficient_set",
        QUORUM_COEFFICIENT,
        2_500_000,
    );
    assert_eq!(
        s.governor
            .get_dynamic_quorum_params_at(&START_LEDGER)
            .quorum_coefficient,
        2_500_000
    );
}
