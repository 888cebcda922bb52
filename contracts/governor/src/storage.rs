//! Persistent records: proposals, their actions, receipts and the per-proposer
//! latest proposal pointer. Every read and write bumps the entry's TTL.

use crate::types::{DataKey, Proposal, ProposalAction, Receipt};
use crate::{BUMP_TARGET, BUMP_THRESHOLD};
use governor_errors::ContractError;
use soroban_sdk::{Address, Env, IntoVal, TryFromVal, Val, Vec};

fn read<T: TryFromVal<Env, Val>>(e: &Env, key: &DataKey) -> Option<T> {
    let storage = e.storage().persistent();
    let value = storage.get::<_, T>(key)?;
    storage.extend_ttl(key, BUMP_THRESHOLD, BUMP_TARGET);
    Some(value)
}

fn write<T: IntoVal<Env, Val>>(e: &Env, key: &DataKey, value: &T) {
    let storage = e.storage().persistent();
    storage.set(key, value);
    storage.extend_ttl(key, BUMP_THRESHOLD, BUMP_TARGET);
}

pub fn proposal_count(e: &Env) -> u64 {
    e.storage()
        .instance()
        .get(&DataKey::ProposalCount)
        .unwrap_or(0)
}

/// Reserve the next proposal id. Ids start at 1.
pub fn next_proposal_id(e: &Env) -> Result<u64, ContractError> {
    let id = proposal_count(e)
        .checked_add(1)
        .ok_or(ContractError::Overflow)?;
    e.storage().instance().set(&DataKey::ProposalCount, &id);
    Ok(id)
}

pub fn load_proposal(e: &Env, proposal_id: u64) -> Result<Proposal, ContractError> {
    read(e, &DataKey::Proposal(proposal_id)).ok_or(ContractError::ProposalNotFound)
}

pub fn save_proposal(e: &Env, proposal: &Proposal) {
    write(e, &DataKey::Proposal(proposal.id), proposal);
}

pub fn load_actions(e: &Env, proposal_id: u64) -> Result<Vec<ProposalAction>, ContractError> {
    read(e, &DataKey::ProposalActions(proposal_id)).ok_or(ContractError::ProposalNotFound)
}

pub fn save_actions(e: &Env, proposal_id: u64, actions: &Vec<ProposalAction>) {
    write(e, &DataKey::ProposalActions(proposal_id), actions);
}

pub fn load_receipt(e: &Env, proposal_id: u64, voter: &Address) -> Option<Receipt> {
    read(e, &DataKey::Receipt(proposal_id, voter.clone()))
}

pub fn save_receipt(e: &Env, proposal_id: u64, voter: &Address, receipt: &Receipt) {
    write(e, &DataKey::Receipt(proposal_id, voter.clone()), receipt);
}

pub fn latest_proposal_id(e: &Env, proposer: &Address) -> Option<u64> {
    read(e, &DataKey::LatestProposalId(proposer.clone()))
}

pub fn set_latest_proposal_id(e: &Env, proposer: &Address, proposal_id: u64) {
    write(e, &DataKey::LatestProposalId(proposer.clone()), &proposal_id);
}
