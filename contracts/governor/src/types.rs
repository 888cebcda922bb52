use soroban_sdk::{contracttype, Address, String, Symbol, Val, Vec};

// ─── Configuration ─────────────────────────────────────────────────────────

/// Quorum parameters. The effective quorum of a proposal grows from
/// `min_quorum_votes_bps` with the share of against votes, scaled by
/// `quorum_coefficient`, and is capped at `max_quorum_votes_bps`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DynamicQuorumParams {
    /// Floor of the quorum, in basis points of total supply.
    pub min_quorum_votes_bps: u32,
    /// Ceiling of the quorum, in basis points of total supply.
    pub max_quorum_votes_bps: u32,
    /// Fixed-point multiplier (1e6 = 1.0) applied to the against-votes share.
    pub quorum_coefficient: u32,
}

/// Quorum parameters in force from `from_ledger` on.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct QuorumCheckpoint {
    pub from_ledger: u32,
    pub params: DynamicQuorumParams,
}

/// Deployment parameters passed to `initialize`.
#[contracttype]
#[derive(Clone, Debug)]
pub struct GovernorConfig {
    /// Ledgers between `start_ledger` and `end_ledger`.
    pub voting_period: u32,
    /// Ledgers between proposal creation and `start_ledger`.
    pub voting_delay: u32,
    /// Proposal threshold in basis points of total supply.
    pub proposal_threshold_bps: u32,
    /// Seconds between queueing and the earliest execution.
    pub timelock_delay: u64,
    pub quorum: DynamicQuorumParams,
}

// ─── Proposals ─────────────────────────────────────────────────────────────

/// One contract call executed when a proposal passes.
#[contracttype]
#[derive(Clone, Debug)]
pub struct ProposalAction {
    pub target: Address,
    pub function: Symbol,
    pub args: Vec<Val>,
}

/// Proposal record. Actions are stored separately under `ProposalActions(id)`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Proposal {
    pub id: u64,
    pub proposer: Address,
    /// Votes the proposer had to exceed, fixed at creation.
    pub proposal_threshold: u32,
    /// Earliest execution timestamp; 0 until queued.
    pub eta: u64,
    pub start_ledger: u32,
    pub end_ledger: u32,
    /// Ledger whose vote snapshot weights every receipt.
    pub creation_ledger: u32,
    /// Token supply at creation; quorum is computed against it.
    pub total_supply: u32,
    pub for_votes: u32,
    pub against_votes: u32,
    pub abstain_votes: u32,
    pub canceled: bool,
    pub vetoed: bool,
    pub executed: bool,
    pub description: String,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ProposalState {
    Pending = 0,
    Active = 1,
    Canceled = 2,
    Defeated = 3,
    Succeeded = 4,
    Queued = 5,
    Expired = 6,
    Executed = 7,
    Vetoed = 8,
}

/// A voter's ballot on one proposal. Immutable once written.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Receipt {
    /// 0 = against, 1 = for, 2 = abstain.
    pub support: u32,
    pub votes: u32,
}

// ─── Refunds ───────────────────────────────────────────────────────────────

/// Fee metering of the voting transaction as reported by the voter.
///
/// The contract cannot observe transaction fees, so every field is capped
/// before use; see `refund::refund_amount`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeeReport {
    /// Gas consumed by the vote, excluding the fixed base cost.
    pub gas_used: u64,
    /// Price paid per gas, in refund token units.
    pub gas_price: i128,
    /// Network base fee per gas at inclusion, in refund token units.
    pub base_fee: i128,
}

// ─── Storage keys ──────────────────────────────────────────────────────────

/// * Configuration and counters live in `instance()`.
/// * Proposals, actions, receipts and quorum history live in `persistent()`.
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,
    PendingAdmin,
    Vetoer,
    VotingToken,
    RefundToken,
    VotingDelay,
    VotingPeriod,
    ProposalThresholdBps,
    TimelockDelay,
    ProposalCount,
    QuorumCheckpoints,
    Proposal(u64),
    ProposalActions(u64),
    Receipt(u64, Address),
    LatestProposalId(Address),
}
