#![cfg(test)]

use crate::refund::{MAX_REFUND_BASE_FEE, MAX_REFUND_GAS_USED, MAX_REFUND_PRIORITY_FEE};
use crate::test_helpers::*;
use crate::{ContractError, FeeReport, Receipt};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, Env, FromVal, String};

const FUNDING: i128 = 1_000_000_000;

/// 64_000 reported gas + 36_000 base at 50 per gas.
fn typical_fee() -> FeeReport {
    FeeReport {
        gas_used: 64_000,
        gas_price: 50,
        base_fee: 40,
    }
}

fn active_proposal<'a>(e: &'a Env) -> (Setup<'a>, Address, u64) {
    let s = setup(e);
    let voter = Address::generate(e);
    let others = Address::generate(e);
    mint_votes(&s, &voter, 30);
    mint_votes(&s, &others, 170);
    advance_ledgers(e, 1);
    let id = propose(e, &s, &others);
    open_voting(e);
    (s, voter, id)
}

fn refund_event(e: &Env, s: &Setup) -> Option<(Address, i128, bool)> {
    let (topics, data) = find_event(e, &s.governor_id, "refundable_vote")?;
    let voter = Address::from_val(e, &topics.get(1).unwrap());
    let (amount, sent) = <(i128, bool)>::from_val(e, &data);
    Some((voter, amount, sent))
}

#[test]
fn test_refundable_vote_full_refund() {
    let e = Env::default();
    let (s, voter, id) = active_proposal(&e);
    fund_governor(&s, FUNDING);

    s.governor
        .cast_refundable_vote(&voter, &id, &1, &typical_fee());
    let expected = 100_000 * 50;
    assert_eq!(refund_event(&e, &s), Some((voter.clone(), expected, true)));
    let (_, data) = find_event(&e, &s.governor_id, "vote_cast").unwrap();
    assert_eq!(
        <(u64, u32, u32, String)>::from_val(&e, &data),
        (id, 1, 30, String::from_str(&e, ""))
    );

    assert_eq!(s.refund.balance(&voter), expected);
    assert_eq!(s.refund.balance(&s.governor_id), FUNDING - expected);
    assert_eq!(s.governor.get_proposal(&id).for_votes, 30);
}

#[test]
fn test_refundable_vote_with_reason() {
    let e = Env::default();
    let (s, voter, id) = active_proposal(&e);
    fund_governor(&s, FUNDING);
    let reason = String::from_str(&e, "for the treasury");

    s.governor
        .cast_refundable_vote_with_reason(&voter, &id, &0, &reason, &typical_fee());

    let (_, data) = find_event(&e, &s.governor_id, "vote_cast").unwrap();
    assert_eq!(
        <(u64, u32, u32, String)>::from_val(&e, &data),
        (id, 0, 30, reason)
    );
    assert_eq!(s.refund.balance(&voter), 100_000 * 50);
}

#[test]
fn test_refund_caps_priority_fee() {
    let e = Env::default();
    let (s, voter, id) = active_proposal(&e);
    fund_governor(&s, FUNDING);

    let fee = FeeReport {
        gas_used: 64_000,
        gas_price: 500,
        base_fee: 40,
    };
    s.governor.cast_refundable_vote(&voter, &id, &1, &fee);

    // Price capped at base fee + MAX_REFUND_PRIORITY_FEE.
    let expected = 100_000 * (40 + MAX_REFUND_PRIORITY_FEE);
    assert_eq!(s.refund.balance(&voter), expected);
}

#[test]
fn test_refund_caps_under_fee_spike() {
    let e = Env::default();
    let (s, voter, id) = active_proposal(&e);
    fund_governor(&s, FUNDING);

    let fee = FeeReport {
        gas_used: 10_000_000,
        gas_price: 1_000_000,
        base_fee: 900_000,
    };
    s.governor.cast_refundable_vote(&voter, &id, &1, &fee);

    let expected =
        MAX_REFUND_GAS_USED as i128 * (MAX_REFUND_BASE_FEE + MAX_REFUND_PRIORITY_FEE);
    assert_eq!(s.refund.balance(&voter), expected);
}

#[test]
fn test_partial_refund_when_balance_is_short() {
    let e = Env::default();
    let (s, voter, id) = active_proposal(&e);
    fund_governor(&s, 1_234);

    s.governor
        .cast_refundable_vote(&voter, &id, &1, &typical_fee());
    assert_eq!(refund_event(&e, &s), Some((voter.clone(), 1_234, true)));

    assert_eq!(s.refund.balance(&voter), 1_234);
    assert_eq!(s.refund.balance(&s.governor_id), 0);
}

#[test]
fn test_no_refund_without_balance() {
    let e = Env::default();
    let (s, voter, id) = active_proposal(&e);

    s.governor
        .cast_refundable_vote(&voter, &id, &1, &typical_fee());
    assert_eq!(refund_event(&e, &s), None);
    assert!(find_event(&e, &s.governor_id, "vote_cast").is_some());

    assert_eq!(s.refund.balance(&voter), 0);
    assert_eq!(
        s.governor.get_receipt(&id, &voter),
        Some(Receipt {
            support: 1,
            votes: 30
        })
    );
}

#[test]
fn test_no_refund_for_zero_weight_voter() {
    let e = Env::default();
    let (s, _, id) = active_proposal(&e);
    fund_governor(&s, FUNDING);
    let empty_voter = Address::generate(&e);

    s.governor
        .cast_refundable_vote(&empty_voter, &id, &1, &typical_fee());
    assert_eq!(refund_event(&e, &s), None);
    assert!(find_event(&e, &s.governor_id, "vote_cast").is_some());

    assert_eq!(s.refund.balance(&empty_voter), 0);
    assert_eq!(s.refund.balance(&s.governor_id), FUNDING);
    assert_eq!(s.governor.get_receipt(&id, &empty_voter).unwrap().votes, 0);
}

#[test]
fn test_no_refund_when_fee_computes_to_zero() {
    let e = Env::default();
    let (s, voter, id) = active_proposal(&e);
    fund_governor(&s, FUNDING);

    let fee = FeeReport {
        gas_used: 64_000,
        gas_price: 0,
        base_fee: 40,
    };
    s.governor.cast_refundable_vote(&voter, &id, &1, &fee);
    assert_eq!(refund_event(&e, &s), None);
    assert!(find_event(&e, &s.governor_id, "vote_cast").is_some());

    assert_eq!(s.refund.balance(&voter), 0);
    assert_eq!(s.refund.balance(&s.governor_id), FUNDING);
    assert_eq!(
        s.governor.get_receipt(&id, &voter),
        Some(Receipt {
            support: 1,
            votes: 30
        })
    );
}

#[test]
fn test_second_refundable_vote_rejected() {
    let e = Env::default();
    let (s, voter, id) = active_proposal(&e);
    fund_governor(&s, FUNDING);

    s.governor
        .cast_refundable_vote(&voter, &id, &1, &typical_fee());
    let paid = s.refund.balance(&voter);

    assert_eq!(
        s.governor
            .try_cast_refundable_vote(&voter, &id, &1, &typical_fee()),
        Err(Ok(ContractError::AlreadyVoted))
    );
    assert_eq!(s.refund.balance(&voter), paid);
}

#[test]
fn test_refundable_vote_on_closed_proposal() {
    let e = Env::default();
    let (s, voter, id) = active_proposal(&e);
    fund_governor(&s, FUNDING);
    close_voting(&e);

    assert_eq!(
        s.governor
            .try_cast_refundable_vote(&voter, &id, &1, &typical_fee()),
        Err(Ok(ContractError::VotingClosed))
    );
    assert_eq!(s.refund.balance(&s.governor_id), FUNDING);
}
