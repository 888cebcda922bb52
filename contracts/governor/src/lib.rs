//! # DAO Governor Contract
//!
//! Token-weighted governance over a voting token that checkpoints delegated
//! votes by ledger.
//!
//! * Proposals carry up to `PROPOSAL_MAX_OPERATIONS` contract calls and move
//!   through Pending, Active, Succeeded/Defeated, Queued and Executed, with
//!   Canceled, Vetoed and Expired as terminal side exits.
//! * Quorum is dynamic: it rises with the share of against votes, between
//!   admin-set bounds that are checkpointed per ledger.
//! * Refundable votes reimburse the voter's fees out of a token balance held
//!   by the governor. A failed reimbursement never fails the vote.
//! * The timelock is built in: a queued proposal executes after
//!   `timelock_delay` seconds and before `GRACE_PERIOD` runs out.
//!
//! ## Storage Layout
//!
//! | Key                                   | Tier           |
//! |---------------------------------------|----------------|
//! | roles, tokens, parameters, `ProposalCount` | `instance()` |
//! | `QuorumCheckpoints`                   | `persistent()` |
//! | `Proposal(id)`, `ProposalActions(id)` | `persistent()` |
//! | `Receipt(id, voter)`                  | `persistent()` |
//! | `LatestProposalId(proposer)`          | `persistent()` |

#![no_std]

mod events;
pub mod math;
pub mod parameters;
pub mod quorum;
pub mod refund;
mod storage;
mod types;
mod votes;

pub use governor_errors::ContractError;
pub use types::{
    DynamicQuorumParams, FeeReport, GovernorConfig, Proposal, ProposalAction, ProposalState,
    QuorumCheckpoint, Receipt,
};
pub use votes::{VotesClient, VotesInterface};

use types::DataKey;

use soroban_sdk::{contract, contractimpl, Address, BytesN, Env, String, Val, Vec};



#[cfg(test)]
mod test_quorum_bounds;



#[cfg(test)]
mod test_refundable_vote;



/// Minimum TTL before a bump is requested (~1 day at 5 s/ledger).
pub(crate) const BUMP_THRESHOLD: u32 = 17_280;
/// Target TTL after a bump (~30 days).
pub(crate) const BUMP_TARGET: u32 = 518_400;

const SUPPORT_AGAINST: u32 = 0;
const SUPPORT_FOR: u32 = 1;
const SUPPORT_ABSTAIN: u32 = 2;

// ─── Helpers ───────────────────────────────────────────────────────────────

fn bump_instance(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(BUMP_THRESHOLD, BUMP_TARGET);
}

/// Authenticate `caller` and check it is the admin.
pub(crate) fn require_admin(e: &Env, caller: &Address) -> Result<(), ContractError> {
    caller.require_auth();
    let admin: Address = e
        .storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(ContractError::NotInitialized)?;
    if admin != *caller {
        return Err(ContractError::AdminOnly);
    }
    Ok(())
}

fn require_vetoer(e: &Env, caller: &Address) -> Result<Address, ContractError> {
    let vetoer: Address = e
        .storage()
        .instance()
        .get(&DataKey::Vetoer)
        .ok_or(ContractError::VetoPowerBurned)?;
    caller.require_auth();
    if vetoer != *caller {
        return Err(ContractError::VetoerOnly);
    }
    Ok(vetoer)
}

fn votes_client(e: &Env) -> Result<VotesClient<'_>, ContractError> {
    let token: Address = e
        .storage()
        .instance()
        .get(&DataKey::VotingToken)
        .ok_or(ContractError::NotInitialized)?;
    Ok(VotesClient::new(e, &token))
}

/// Last fully closed ledger; vote snapshots can only be read up to here.
fn previous_ledger(e: &Env) -> u32 {
    e.ledger().sequence().saturating_sub(1)
}

fn state_of(e: &Env, proposal: &Proposal) -> Result<ProposalState, ContractError> {
    let sequence = e.ledger().sequence();
    if proposal.vetoed {
        return Ok(ProposalState::Vetoed);
    }
    if proposal.canceled {
        return Ok(ProposalState::Canceled);
    }
    if sequence <= proposal.start_ledger {
        return Ok(ProposalState::Pending);
    }
    if sequence <= proposal.end_ledger {
        return Ok(ProposalState::Active);
    }

    let params = quorum::params_at(e, proposal.creation_ledger)?;
    let quorum_votes =
        quorum::dynamic_quorum_votes(proposal.against_votes, proposal.total_supply, &params)?;
    if proposal.for_votes <= proposal.against_votes || proposal.for_votes < quorum_votes {
        return Ok(ProposalState::Defeated);
    }
    if proposal.eta == 0 {
        return Ok(ProposalState::Succeeded);
    }
    if proposal.executed {
        return Ok(ProposalState::Executed);
    }
    if e.ledger().timestamp() >= proposal.eta.saturating_add(parameters::GRACE_PERIOD) {
        return Ok(ProposalState::Expired);
    }
    Ok(ProposalState::Queued)
}

/// Record a ballot and return its weight.
fn record_vote(
    e: &Env,
    voter: &Address,
    proposal_id: u64,
    support: u32,
    reason: &String,
) -> Result<u32, ContractError> {
    voter.require_auth();
    let mut proposal = storage::load_proposal(e, proposal_id)?;
    if state_of(e, &proposal)? != ProposalState::Active {
        return Err(ContractError::VotingClosed);
    }
    if support > SUPPORT_ABSTAIN {
        return Err(ContractError::InvalidVoteType);
    }
    if storage::load_receipt(e, proposal_id, voter).is_some() {
        return Err(ContractError::AlreadyVoted);
    }

    let votes = votes_client(e)?.get_prior_votes(voter, &proposal.creation_ledger);
    match support {
        SUPPORT_AGAINST => proposal.against_votes = math::add_u32(proposal.against_votes, votes)?,
        SUPPORT_FOR => proposal.for_votes = math::add_u32(proposal.for_votes, votes)?,
        _ => proposal.abstain_votes = math::add_u32(proposal.abstain_votes, votes)?,
    }

    storage::save_receipt(e, proposal_id, voter, &Receipt { support, votes });
    storage::save_proposal(e, &proposal);
    bump_instance(e);

    events::emit_vote_cast(e, voter, proposal_id, support, votes, reason);
    Ok(votes)
}

// ─── Contract ──────────────────────────────────────────────────────────────

#[contract]
pub struct Governor;

#[contractimpl]
impl Governor {
    /// One-time setup. Every configuration value is checked against the same
    /// bounds its setter enforces.
    pub fn initialize(
        e: Env,
        admin: Address,
        vetoer: Option<Address>,
        voting_token: Address,
        refund_token: Address,
        config: GovernorConfig,
    ) -> Result<(), ContractError> {
        if e.storage().instance().has(&DataKey::Admin) {
            return Err(ContractError::AlreadyInitialized);
        }
        admin.require_auth();

        parameters::validate_voting_period(config.voting_period)?;
        parameters::validate_voting_delay(config.voting_delay)?;
        parameters::validate_proposal_threshold_bps(config.proposal_threshold_bps)?;
        parameters::validate_timelock_delay(config.timelock_delay)?;
        quorum::validate_params(&config.quorum)?;

        let instance = e.storage().instance();
        instance.set(&DataKey::Admin, &admin);
        if let Some(vetoer) = &vetoer {
            instance.set(&DataKey::Vetoer, vetoer);
        }
        instance.set(&DataKey::VotingToken, &voting_token);
        instance.set(&DataKey::RefundToken, &refund_token);
        instance.set(&DataKey::VotingPeriod, &config.voting_period);
        instance.set(&DataKey::VotingDelay, &config.voting_delay);
        instance.set(&DataKey::ProposalThresholdBps, &config.proposal_threshold_bps);
        instance.set(&DataKey::TimelockDelay, &config.timelock_delay);
        instance.set(&DataKey::ProposalCount, &0_u64);
        quorum::write_checkpoint(&e, &config.quorum);
        bump_instance(&e);
        Ok(())
    }

    // ── Proposals ─────────────────────────────────────────────────────────

    /// Create a proposal. The proposer's votes at the previous ledger must
    /// exceed `proposal_threshold()`.
    ///
    /// # Errors
    /// * `BelowProposalThreshold`
    /// * `ActionsRequired` / `TooManyActions` - action count outside 1..=10
    /// * `ProposerHasLiveProposal` - the proposer's last proposal is Pending or Active
    pub fn propose(
        e: Env,
        proposer: Address,
        actions: Vec<ProposalAction>,
        description: String,
    ) -> Result<u64, ContractError> {
        proposer.require_auth();
        let votes = votes_client(&e)?;
        let total_supply = votes.total_supply();
        let proposal_threshold =
            math::bps_of(total_supply, parameters::get_proposal_threshold_bps(&e)?)?;
        if votes.get_prior_votes(&proposer, &previous_ledger(&e)) <= proposal_threshold {
            return Err(ContractError::BelowProposalThreshold);
        }
        if actions.is_empty() {
            return Err(ContractError::ActionsRequired);
        }
        if actions.len() > parameters::PROPOSAL_MAX_OPERATIONS {
            return Err(ContractError::TooManyActions);
        }
        if let Some(latest_id) = storage::latest_proposal_id(&e, &proposer) {
            let latest = storage::load_proposal(&e, latest_id)?;
            let latest_state = state_of(&e, &latest)?;
            if latest_state == ProposalState::Pending || latest_state == ProposalState::Active {
                return Err(ContractError::ProposerHasLiveProposal);
            }
        }

        let sequence = e.ledger().sequence();
        let start_ledger = math::add_u32(sequence, parameters::get_voting_delay(&e)?)?;
        let end_ledger = math::add_u32(start_ledger, parameters::get_voting_period(&e)?)?;
        let id = storage::next_proposal_id(&e)?;

        let proposal = Proposal {
            id,
            proposer: proposer.clone(),
            proposal_threshold,
            eta: 0,
            start_ledger,
            end_ledger,
            creation_ledger: sequence,
            total_supply,
            for_votes: 0,
            against_votes: 0,
            abstain_votes: 0,
            canceled: false,
            vetoed: false,
            executed: false,
            description: description.clone(),
        };
        storage::save_proposal(&e, &proposal);
        storage::save_actions(&e, id, &actions);
        storage::set_latest_proposal_id(&e, &proposer, id);
        bump_instance(&e);

        events::emit_proposal_created(
            &e,
            id,
            &proposer,
            start_ledger,
            end_ledger,
            proposal_threshold,
            &description,
        );
        Ok(id)
    }

    pub fn state(e: Env, proposal_id: u64) -> Result<ProposalState, ContractError> {
        let proposal = storage::load_proposal(&e, proposal_id)?;
        state_of(&e, &proposal)
    }

    /// Schedule a succeeded proposal for execution after the timelock delay.
    pub fn queue(e: Env, proposal_id: u64) -> Result<u64, ContractError> {
        let mut proposal = storage::load_proposal(&e, proposal_id)?;
        if state_of(&e, &proposal)? != ProposalState::Succeeded {
            return Err(ContractError::ProposalNotSucceeded);
        }
        let eta = e
            .ledger()
            .timestamp()
            .checked_add(parameters::get_timelock_delay(&e)?)
            .ok_or(ContractError::Overflow)?;
        proposal.eta = eta;
        storage::save_proposal(&e, &proposal);

        events::emit_proposal_queued(&e, proposal_id, eta);
        Ok(eta)
    }

    /// Run every action of a queued proposal whose timelock has elapsed.
    ///
    /// The proposal is marked executed before the first call goes out.
    pub fn execute(e: Env, proposal_id: u64) -> Result<(), ContractError> {
        let mut proposal = storage::load_proposal(&e, proposal_id)?;
        match state_of(&e, &proposal)? {
            ProposalState::Queued => {}
            ProposalState::Expired => return Err(ContractError::ProposalStale),
            _ => return Err(ContractError::ProposalNotQueued),
        }
        if e.ledger().timestamp() < proposal.eta {
            return Err(ContractError::TimelockNotElapsed);
        }

        proposal.executed = true;
        storage::save_proposal(&e, &proposal);

        for action in storage::load_actions(&e, proposal_id)?.iter() {
            e.invoke_contract::<Val>(&action.target, &action.function, action.args);
        }

        events::emit_proposal_executed(&e, proposal_id);
        Ok(())
    }

    /// Cancel a proposal. The proposer may always cancel; anyone else may
    /// once the proposer's votes dropped below the proposal's threshold.
    pub fn cancel(e: Env, caller: Address, proposal_id: u64) -> Result<(), ContractError> {
        caller.require_auth();
        let mut proposal = storage::load_proposal(&e, proposal_id)?;
        if state_of(&e, &proposal)? == ProposalState::Executed {
            return Err(ContractError::ProposalAlreadyExecuted);
        }
        if caller != proposal.proposer {
            let proposer_votes =
                votes_client(&e)?.get_prior_votes(&proposal.proposer, &previous_ledger(&e));
            if proposer_votes >= proposal.proposal_threshold {
                return Err(ContractError::ProposerAboveThreshold);
            }
        }

        proposal.canceled = true;
        storage::save_proposal(&e, &proposal);
        events::emit_proposal_canceled(&e, proposal_id);
        Ok(())
    }

    pub fn veto(e: Env, caller: Address, proposal_id: u64) -> Result<(), ContractError> {
        require_vetoer(&e, &caller)?;
        let mut proposal = storage::load_proposal(&e, proposal_id)?;
        if state_of(&e, &proposal)? == ProposalState::Executed {
            return Err(ContractError::ProposalAlreadyExecuted);
        }

        proposal.vetoed = true;
        storage::save_proposal(&e, &proposal);
        events::emit_proposal_vetoed(&e, proposal_id);
        Ok(())
    }

    // ── Voting ────────────────────────────────────────────────────────────

    /// Vote on an active proposal: 0 against, 1 for, 2 abstain.
    pub fn cast_vote(
        e: Env,
        voter: Address,
        proposal_id: u64,
        support: u32,
    ) -> Result<(), ContractError> {
        record_vote(&e, &voter, proposal_id, support, &String::from_str(&e, ""))?;
        Ok(())
    }

    pub fn cast_vote_with_reason(
        e: Env,
        voter: Address,
        proposal_id: u64,
        support: u32,
        reason: String,
    ) -> Result<(), ContractError> {
        record_vote(&e, &voter, proposal_id, support, &reason)?;
        Ok(())
    }

    /// Vote, then reimburse the voter's fees from the refund token balance.
    ///
    /// The receipt is stored before any tokens move. Refund failures are
    /// reported on the `refundable_vote` event and do not undo the vote.
    pub fn cast_refundable_vote(
        e: Env,
        voter: Address,
        proposal_id: u64,
        support: u32,
        fee: FeeReport,
    ) -> Result<(), ContractError> {
        let votes = record_vote(&e, &voter, proposal_id, support, &String::from_str(&e, ""))?;
        refund::refund_voter(&e, &voter, votes, &fee)
    }

    pub fn cast_refundable_vote_with_reason(
        e: Env,
        voter: Address,
        proposal_id: u64,
        support: u32,
        reason: String,
        fee: FeeReport,
    ) -> Result<(), ContractError> {
        let votes = record_vote(&e, &voter, proposal_id, support, &reason)?;
        refund::refund_voter(&e, &voter, votes, &fee)
    }

    pub fn get_receipt(e: Env, proposal_id: u64, voter: Address) -> Option<Receipt> {
        storage::load_receipt(&e, proposal_id, &voter)
    }

    pub fn get_proposal(e: Env, proposal_id: u64) -> Result<Proposal, ContractError> {
        storage::load_proposal(&e, proposal_id)
    }

    pub fn get_actions(e: Env, proposal_id: u64) -> Result<Vec<ProposalAction>, ContractError> {
        storage::load_actions(&e, proposal_id)
    }

    pub fn proposal_count(e: Env) -> u64 {
        storage::proposal_count(&e)
    }

    // ── Quorum ────────────────────────────────────────────────────────────

    pub fn set_min_quorum_votes_bps(
        e: Env,
        caller: Address,
        bps: u32,
    ) -> Result<(), ContractError> {
        quorum::set_min_quorum_votes_bps(&e, &caller, bps)
    }

    pub fn set_max_quorum_votes_bps(
        e: Env,
        caller: Address,
        bps: u32,
    ) -> Result<(), ContractError> {
        quorum::set_max_quorum_votes_bps(&e, &caller, bps)
    }

    pub fn set_quorum_coefficient(
        e: Env,
        caller: Address,
        coefficient: u32,
    ) -> Result<(), ContractError> {
        quorum::set_quorum_coefficient(&e, &caller, coefficient)
    }

    pub fn set_dynamic_quorum_params(
        e: Env,
        caller: Address,
        params: DynamicQuorumParams,
    ) -> Result<(), ContractError> {
        quorum::set_dynamic_quorum_params(&e, &caller, &params)
    }

    /// Quorum a proposal currently has to reach, given its against votes.
    pub fn quorum_votes(e: Env, proposal_id: u64) -> Result<u32, ContractError> {
        let proposal = storage::load_proposal(&e, proposal_id)?;
        let params = quorum::params_at(&e, proposal.creation_ledger)?;
        quorum::dynamic_quorum_votes(proposal.against_votes, proposal.total_supply, &params)
    }

    pub fn dynamic_quorum_votes(
        _e: Env,
        against_votes: u32,
        total_supply: u32,
        params: DynamicQuorumParams,
    ) -> Result<u32, ContractError> {
        quorum::validate_params(&params)?;
        quorum::dynamic_quorum_votes(against_votes, total_supply, &params)
    }

    pub fn get_dynamic_quorum_params_at(
        e: Env,
        ledger: u32,
    ) -> Result<DynamicQuorumParams, ContractError> {
        quorum::params_at(&e, ledger)
    }

    /// Current quorum floor in votes.
    pub fn min_quorum_votes(e: Env) -> Result<u32, ContractError> {
        let params = quorum::current_params(&e)?;
        math::bps_of(votes_client(&e)?.total_supply(), params.min_quorum_votes_bps)
    }

    /// Current quorum ceiling in votes.
    pub fn max_quorum_votes(e: Env) -> Result<u32, ContractError> {
        let params = quorum::current_params(&e)?;
        math::bps_of(votes_client(&e)?.total_supply(), params.max_quorum_votes_bps)
    }

    // ── Treasury ──────────────────────────────────────────────────────────

    /// Send the whole refund token balance to the admin.
    pub fn withdraw(e: Env, caller: Address) -> Result<(i128, bool), ContractError> {
        require_admin(&e, &caller)?;
        refund::withdraw_all(&e, &caller)
    }

    // ── Administration ────────────────────────────────────────────────────

    pub fn set_voting_delay(e: Env, caller: Address, value: u32) -> Result<(), ContractError> {
        parameters::set_voting_delay(&e, &caller, value)
    }

    pub fn set_voting_period(e: Env, caller: Address, value: u32) -> Result<(), ContractError> {
        parameters::set_voting_period(&e, &caller, value)
    }

    pub fn set_proposal_threshold_bps(
        e: Env,
        caller: Address,
        value: u32,
    ) -> Result<(), ContractError> {
        parameters::set_proposal_threshold_bps(&e, &caller, value)
    }

    /// First step of an admin handover; `pending` must call `accept_admin`.
    pub fn set_pending_admin(
        e: Env,
        caller: Address,
        pending: Address,
    ) -> Result<(), ContractError> {
        require_admin(&e, &caller)?;
        let old: Option<Address> = e.storage().instance().get(&DataKey::PendingAdmin);
        e.storage().instance().set(&DataKey::PendingAdmin, &pending);
        events::emit_role_changed(&e, "new_pending_admin", old, Some(pending));
        Ok(())
    }

    pub fn accept_admin(e: Env, caller: Address) -> Result<(), ContractError> {
        caller.require_auth();
        let pending: Option<Address> = e.storage().instance().get(&DataKey::PendingAdmin);
        if pending.as_ref() != Some(&caller) {
            return Err(ContractError::PendingAdminOnly);
        }
        let old_admin: Option<Address> = e.storage().instance().get(&DataKey::Admin);
        e.storage().instance().set(&DataKey::Admin, &caller);
        e.storage().instance().remove(&DataKey::PendingAdmin);

        events::emit_role_changed(&e, "new_admin", old_admin, Some(caller));
        events::emit_role_changed(&e, "new_pending_admin", pending, None);
        Ok(())
    }

    pub fn set_vetoer(e: Env, caller: Address, new_vetoer: Address) -> Result<(), ContractError> {
        let old = require_vetoer(&e, &caller)?;
        e.storage().instance().set(&DataKey::Vetoer, &new_vetoer);
        events::emit_role_changed(&e, "new_vetoer", Some(old), Some(new_vetoer));
        Ok(())
    }

    /// Give up the veto for good.
    pub fn burn_veto_power(e: Env, caller: Address) -> Result<(), ContractError> {
        let old = require_vetoer(&e, &caller)?;
        e.storage().instance().remove(&DataKey::Vetoer);
        events::emit_role_changed(&e, "new_vetoer", Some(old), None);
        Ok(())
    }

    /// Replace the contract code. Storage is kept.
    pub fn upgrade(e: Env, caller: Address, new_wasm_hash: BytesN<32>) -> Result<(), ContractError> {
        require_admin(&e, &caller)?;
        e.deployer()
            .update_current_contract_wasm(new_wasm_hash.clone());
        events::emit_upgraded(&e, &new_wasm_hash);
        Ok(())
    }

    // ── Views ─────────────────────────────────────────────────────────────

    /// Votes a proposer must exceed right now.
    pub fn proposal_threshold(e: Env) -> Result<u32, ContractError> {
        math::bps_of(
            votes_client(&e)?.total_supply(),
            parameters::get_proposal_threshold_bps(&e)?,
        )
    }

    pub fn admin(e: Env) -> Result<Address, ContractError> {
        e.storage()
            .instance()
            .get(&DataKey::Admin)
            .ok_or(ContractError::NotInitialized)
    }

    pub fn pending_admin(e: Env) -> Option<Address> {
        e.storage().instance().get(&DataKey::PendingAdmin)
    }

    pub fn vetoer(e: Env) -> Option<Address> {
        e.storage().instance().get(&DataKey::Vetoer)
    }

    pub fn voting_delay(e: Env) -> Result<u32, ContractError> {
        parameters::get_voting_delay(&e)
    }

    pub fn voting_period(e: Env) -> Result<u32, ContractError> {
        parameters::get_voting_period(&e)
    }

    pub fn proposal_threshold_bps(e: Env) -> Result<u32, ContractError> {
        parameters::get_proposal_threshold_bps(&e)
    }

    pub fn timelock_delay(e: Env) -> Result<u64, ContractError> {
        parameters::get_timelock_delay(&e)
    }

    pub fn voting_token(e: Env) -> Result<Address, ContractError> {
        e.storage()
            .instance()
            .get(&DataKey::VotingToken)
            .ok_or(ContractError::NotInitialized)
    }

    pub fn refund_token(e: Env) -> Result<Address, ContractError> {
        refund::refund_token(&e)
    }
}
