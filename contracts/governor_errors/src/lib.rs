#![no_std]

use soroban_sdk::contracterror;

/// @title  ErrorCategory
/// @notice Groups errors by domain for monitoring and off-chain display.
/// @dev    Consumers should switch on this value first, then on the specific
///         `ContractError` code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Contract setup errors (codes 1-99).
    Initialization,
    /// Caller identity and permission errors (codes 100-199).
    Authorization,
    /// Governance parameter bound violations (codes 200-299).
    Parameters,
    /// Proposal lifecycle errors (codes 300-399).
    Proposal,
    /// Vote casting errors (codes 400-499).
    Voting,
    /// Voting token errors (codes 500-599).
    Token,
    /// Safe-math errors (codes 700-799).
    Arithmetic,
}

/// @title  ContractError
/// @notice Error enum shared by the governor and voting token contracts.
/// @dev    Codes are wire-stable. Never renumber a variant after deployment.
///         Append new variants at the end of their category block only.
///
/// Error Code Layout:
///   1  -  99  : Initialization
///   100 - 199 : Authorization
///   200 - 299 : Parameters
///   300 - 399 : Proposal
///   400 - 499 : Voting
///   500 - 599 : Token
///   700 - 799 : Arithmetic
#[contracterror]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    // --- Initialization (1-99) ---
    /// Contract has not been initialized yet.
    NotInitialized = 1,

    /// Contract has already been initialized.
    AlreadyInitialized = 2,

    // --- Authorization (100-199) ---
    /// Caller is not the governor admin. Every admin-gated entry point
    /// returns this exact code.
    AdminOnly = 100,

    /// Caller is not the pending admin.
    PendingAdminOnly = 101,

    /// Caller is not the vetoer.
    VetoerOnly = 102,

    /// Veto power has been burned; nobody can veto.
    VetoPowerBurned = 103,

    /// Only the proposer may cancel while they stay above the threshold.
    ProposerAboveThreshold = 104,

    /// Caller is not the voting token minter.
    MinterOnly = 105,

    /// Caller does not own the voting token.
    NotTokenOwner = 106,

    // --- Parameters (200-299) ---
    /// Min quorum bps outside [lower bound, upper bound].
    InvalidMinQuorumVotesBps = 200,

    /// Max quorum bps above the upper bound.
    InvalidMaxQuorumVotesBps = 201,

    /// Min quorum bps would exceed max quorum bps.
    MinQuorumVotesBpsGreaterThanMax = 202,

    /// Voting period outside its bounds.
    InvalidVotingPeriod = 203,

    /// Voting delay outside its bounds.
    InvalidVotingDelay = 204,

    /// Proposal threshold bps outside its bounds.
    InvalidProposalThresholdBps = 205,

    /// Timelock delay outside its bounds.
    InvalidTimelockDelay = 206,

    // --- Proposal (300-399) ---
    /// No proposal exists for the given id.
    ProposalNotFound = 300,

    /// A proposal must carry at least one action.
    ActionsRequired = 301,

    /// A proposal carries more actions than allowed.
    TooManyActions = 302,

    /// Proposer votes do not exceed the proposal threshold.
    BelowProposalThreshold = 303,

    /// Proposer already has a pending or active proposal.
    ProposerHasLiveProposal = 304,

    /// Only succeeded proposals can be queued.
    ProposalNotSucceeded = 305,

    /// Only queued proposals can be executed.
    ProposalNotQueued = 306,

    /// The timelock eta has not been reached.
    TimelockNotElapsed = 307,

    /// The grace period after eta has passed.
    ProposalStale = 308,

    /// Executed proposals cannot be canceled or vetoed.
    ProposalAlreadyExecuted = 309,

    // --- Voting (400-499) ---
    /// Proposal is not accepting votes.
    VotingClosed = 400,

    /// Support must be 0 (against), 1 (for) or 2 (abstain).
    InvalidVoteType = 401,

    /// Voter already has a receipt for this proposal.
    AlreadyVoted = 402,

    // --- Token (500-599) ---
    /// No voting token exists for the given id.
    TokenNotFound = 500,

    /// Prior votes can only be read for past ledgers.
    VotesNotYetDetermined = 501,

    // --- Arithmetic (700-799) ---
    /// Integer overflow detected during a checked arithmetic operation.
    Overflow = 700,
}

/// @title  ErrorExt
/// @notice Provides category() and description() on every ContractError variant.
pub trait ErrorExt {
    /// @return The ErrorCategory bucket this error belongs to.
    fn category(&self) -> ErrorCategory;

    /// @return A static description safe for logging or display.
    fn description(&self) -> &'static str;
}

impl ErrorExt for ContractError {
    fn category(&self) -> ErrorCategory {
        match self {
            ContractError::NotInitialized | ContractError::AlreadyInitialized => {
                ErrorCategory::Initialization
            }

            ContractError::AdminOnly
            | ContractError::PendingAdminOnly
            | ContractError::VetoerOnly
            | ContractError::VetoPowerBurned
            | ContractError::ProposerAboveThreshold
            | ContractError::MinterOnly
            | ContractError::NotTokenOwner => ErrorCategory::Authorization,

            ContractError::InvalidMinQuorumVotesBps
            | ContractError::InvalidMaxQuorumVotesBps
            | ContractError::MinQuorumVotesBpsGreaterThanMax
            | ContractError::InvalidVotingPeriod
            | ContractError::InvalidVotingDelay
            | ContractError::InvalidProposalThresholdBps
            | ContractError::InvalidTimelockDelay => ErrorCategory::Parameters,

            ContractError::ProposalNotFound
            | ContractError::ActionsRequired
            | ContractError::TooManyActions
            | ContractError::BelowProposalThreshold
            | ContractError::ProposerHasLiveProposal
            | ContractError::ProposalNotSucceeded
            | ContractError::ProposalNotQueued
            | ContractError::TimelockNotElapsed
            | ContractError::ProposalStale
            | ContractError::ProposalAlreadyExecuted => ErrorCategory::Proposal,

            ContractError::VotingClosed
            | ContractError::InvalidVoteType
            | ContractError::AlreadyVoted => ErrorCategory::Voting,

            ContractError::TokenNotFound | ContractError::VotesNotYetDetermined => {
                ErrorCategory::Token
            }

            ContractError::Overflow => ErrorCategory::Arithmetic,
        }
    }

    fn description(&self) -> &'static str {
        match self {
            ContractError::NotInitialized => "contract has not been initialized",
            ContractError::AlreadyInitialized => "contract has already been initialized",
            ContractError::AdminOnly => "admin only",
            ContractError::PendingAdminOnly => "pending admin only",
            ContractError::VetoerOnly => "vetoer only",
            ContractError::VetoPowerBurned => "veto power burned",
            ContractError::ProposerAboveThreshold => "proposer above threshold",
            ContractError::MinterOnly => "minter only",
            ContractError::NotTokenOwner => "caller does not own the token",
            ContractError::InvalidMinQuorumVotesBps => "invalid min quorum votes bps",
            ContractError::InvalidMaxQuorumVotesBps => "invalid max quorum votes bps",
            ContractError::MinQuorumVotesBpsGreaterThanMax => {
                "min quorum votes bps greater than max"
            }
            ContractError::InvalidVotingPeriod => "invalid voting period",
            ContractError::InvalidVotingDelay => "invalid voting delay",
            ContractError::InvalidProposalThresholdBps => "invalid proposal threshold bps",
            ContractError::InvalidTimelockDelay => "invalid timelock delay",
            ContractError::ProposalNotFound => "proposal not found",
            ContractError::ActionsRequired => "must provide actions",
            ContractError::TooManyActions => "too many actions",
            ContractError::BelowProposalThreshold => "proposer votes below proposal threshold",
            ContractError::ProposerHasLiveProposal => {
                "one live proposal per proposer, found a pending or active proposal"
            }
            ContractError::ProposalNotSucceeded => "proposal can only be queued if it is succeeded",
            ContractError::ProposalNotQueued => "proposal can only be executed if it is queued",
            ContractError::TimelockNotElapsed => "transaction hasn't surpassed time lock",
            ContractError::ProposalStale => "transaction is stale",
            ContractError::ProposalAlreadyExecuted => "cannot cancel or veto executed proposal",
            ContractError::VotingClosed => "voting is closed",
            ContractError::InvalidVoteType => "invalid vote type",
            ContractError::AlreadyVoted => "voter already voted",
            ContractError::TokenNotFound => "token does not exist",
            ContractError::VotesNotYetDetermined => "votes not yet determined",
            ContractError::Overflow => "integer overflow in checked arithmetic",
        }
    }
}

#[cfg(test)]
mod test_errors;
