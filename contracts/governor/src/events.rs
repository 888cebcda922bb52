use soroban_sdk::{Address, BytesN, Env, String, Symbol};

/// Emitted when a proposal is created.
///
/// # Topics
/// * `Symbol` - "proposal_created"
/// * `u64` - The proposal id
///
/// # Data
/// * `Address` - The proposer
/// * `u32` - First ledger after which votes are accepted
/// * `u32` - Last ledger on which votes are accepted
/// * `u32` - Proposal threshold at creation
/// * `String` - The description
pub fn emit_proposal_created(
    e: &Env,
    proposal_id: u64,
    proposer: &Address,
    start_ledger: u32,
    end_ledger: u32,
    proposal_threshold: u32,
    description: &String,
) {
    let topics = (Symbol::new(e, "proposal_created"), proposal_id);
    let data = (
        proposer.clone(),
        start_ledger,
        end_ledger,
        proposal_threshold,
        description.clone(),
    );
    e.events().publish(topics, data);
}

/// Emitted for every recorded ballot, refundable or not.
///
/// # Topics
/// * `Symbol` - "vote_cast"
/// * `Address` - The voter
///
/// # Data
/// * `u64` - The proposal id
/// * `u32` - Support (0 against, 1 for, 2 abstain)
/// * `u32` - Voting weight
/// * `String` - Reason (empty when none was given)
pub fn emit_vote_cast(
    e: &Env,
    voter: &Address,
    proposal_id: u64,
    support: u32,
    votes: u32,
    reason: &String,
) {
    let topics = (Symbol::new(e, "vote_cast"), voter.clone());
    e.events()
        .publish(topics, (proposal_id, support, votes, reason.clone()));
}

/// Emitted when a refundable vote attempted a payout.
///
/// # Topics
/// * `Symbol` - "refundable_vote"
/// * `Address` - The voter
///
/// # Data
/// * `i128` - Refund amount attempted
/// * `bool` - Whether the transfer succeeded
pub fn emit_refundable_vote(e: &Env, voter: &Address, amount: i128, sent: bool) {
    let topics = (Symbol::new(e, "refundable_vote"), voter.clone());
    e.events().publish(topics, (amount, sent));
}

/// Emitted when the admin sweeps the refund balance.
///
/// # Data
/// * `i128` - Amount swept
/// * `bool` - Whether the transfer succeeded
pub fn emit_withdraw(e: &Env, amount: i128, sent: bool) {
    e.events()
        .publish((Symbol::new(e, "withdraw"),), (amount, sent));
}

/// Emitted by every bounded parameter setter with `(old, new)` as data.
///
/// `name` is the event symbol, e.g. "min_quorum_votes_bps_set".
pub fn emit_parameter_set(e: &Env, name: &str, old_value: u32, new_value: u32) {
    e.events()
        .publish((Symbol::new(e, name),), (old_value, new_value));
}

pub fn emit_proposal_canceled(e: &Env, proposal_id: u64) {
    e.events()
        .publish((Symbol::new(e, "proposal_canceled"), proposal_id), ());
}

pub fn emit_proposal_vetoed(e: &Env, proposal_id: u64) {
    e.events()
        .publish((Symbol::new(e, "proposal_vetoed"), proposal_id), ());
}

pub fn emit_proposal_queued(e: &Env, proposal_id: u64, eta: u64) {
    e.events()
        .publish((Symbol::new(e, "proposal_queued"), proposal_id), eta);
}

pub fn emit_proposal_executed(e: &Env, proposal_id: u64) {
    e.events()
        .publish((Symbol::new(e, "proposal_executed"), proposal_id), ());
}

/// Emitted by the two-step admin handover and by vetoer changes.
///
/// `name` is one of "new_pending_admin", "new_admin", "new_vetoer".
pub fn emit_role_changed(e: &Env, name: &str, old: Option<Address>, new: Option<Address>) {
    e.events().publish((Symbol::new(e, name),), (old, new));
}

pub fn emit_upgraded(e: &Env, new_wasm_hash: &BytesN<32>) {
    e.events()
        .publish((Symbol::new(e, "upgraded"),), new_wasm_hash.clone());
}
