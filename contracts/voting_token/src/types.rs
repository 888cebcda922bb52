use soroban_sdk::{contracttype, Address};

// ─── Vote history ──────────────────────────────────────────────────────────

/// Voting weight of an account starting at `from_ledger`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VoteCheckpoint {
    /// First ledger sequence at which `votes` applies.
    pub from_ledger: u32,
    /// Delegated votes held from that ledger on.
    pub votes: u32,
}

// ─── Storage keys ──────────────────────────────────────────────────────────

/// * `Minter`, `NextTokenId`, `TotalSupply` live in `instance()`.
/// * Everything keyed by token id or account lives in `persistent()`.
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Address allowed to mint and burn.
    Minter,
    /// Id assigned to the next minted token.
    NextTokenId,
    /// Number of tokens in existence.
    TotalSupply,
    /// Owner of a token id.
    Owner(u32),
    /// Number of tokens held by an account.
    Balance(Address),
    /// Explicit delegatee of an account. Absent means self-delegation.
    Delegate(Address),
    /// Vote checkpoints of a delegatee.
    Checkpoints(Address),
}
