//! Voting Token Contract
//!
//! Non-fungible voting units. Every token carries exactly one vote, which is
//! credited to the holder's delegatee (the holder itself unless it delegated).
//! Vote totals are checkpointed per ledger so a governor can read the weight
//! an account held at any past ledger.
//!
//! ## Storage Layout
//!
//! | Key                          | Tier           |
//! |------------------------------|----------------|
//! | `Minter`, `NextTokenId`, `TotalSupply` | `instance()` |
//! | `Owner(id)`, `Balance(addr)` | `persistent()` |
//! | `Delegate(addr)`             | `persistent()` |
//! | `Checkpoints(addr)`          | `persistent()` |

#![no_std]

mod checkpoints;
mod events;
mod types;

pub use governor_errors::ContractError;
pub use types::VoteCheckpoint;
use types::DataKey;

use soroban_sdk::{contract, contractimpl, Address, Env, Vec};


/// Minimum TTL before a bump is requested (~1 day at 5 s/ledger).
pub(crate) const BUMP_THRESHOLD: u32 = 17_280;
/// Target TTL after a bump (~30 days).
pub(crate) const BUMP_TARGET: u32 = 518_400;

// ─── Helpers ───────────────────────────────────────────────────────────────

fn bump_instance(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(BUMP_THRESHOLD, BUMP_TARGET);
}

fn require_minter(e: &Env, caller: &Address) -> Result<(), ContractError> {
    caller.require_auth();
    let minter: Address = e
        .storage()
        .instance()
        .get(&DataKey::Minter)
        .ok_or(ContractError::NotInitialized)?;
    if minter != *caller {
        return Err(ContractError::MinterOnly);
    }
    Ok(())
}

fn persistent_get<V: soroban_sdk::TryFromVal<Env, soroban_sdk::Val>>(
    e: &Env,
    key: &DataKey,
) -> Option<V> {
    let storage = e.storage().persistent();
    let value = storage.get(key);
    if value.is_some() {
        storage.extend_ttl(key, BUMP_THRESHOLD, BUMP_TARGET);
    }
    value
}

fn persistent_set<V: soroban_sdk::IntoVal<Env, soroban_sdk::Val>>(
    e: &Env,
    key: &DataKey,
    value: &V,
) {
    e.storage().persistent().set(key, value);
    e.storage()
        .persistent()
        .extend_ttl(key, BUMP_THRESHOLD, BUMP_TARGET);
}

fn delegate_of(e: &Env, account: &Address) -> Address {
    persistent_get(e, &DataKey::Delegate(account.clone())).unwrap_or_else(|| account.clone())
}

fn balance(e: &Env, account: &Address) -> u32 {
    persistent_get(e, &DataKey::Balance(account.clone())).unwrap_or(0)
}

fn set_balance(e: &Env, account: &Address, amount: u32) {
    persistent_set(e, &DataKey::Balance(account.clone()), &amount);
}

fn owner(e: &Env, token_id: u32) -> Result<Address, ContractError> {
    persistent_get(e, &DataKey::Owner(token_id)).ok_or(ContractError::TokenNotFound)
}

// ─── Contract ──────────────────────────────────────────────────────────────

#[contract]
pub struct VotingToken;

#[contractimpl]
impl VotingToken {
    /// One-time initialization. Stores the `minter`.
    pub fn initialize(e: Env, minter: Address) -> Result<(), ContractError> {
        if e.storage().instance().has(&DataKey::Minter) {
            return Err(ContractError::AlreadyInitialized);
        }
        e.storage().instance().set(&DataKey::Minter, &minter);
        e.storage().instance().set(&DataKey::NextTokenId, &0_u32);
        e.storage().instance().set(&DataKey::TotalSupply, &0_u32);
        bump_instance(&e);
        Ok(())
    }

    /// Mint a new token to `to` and credit one vote to its delegatee.
    /// Returns the new token id.
    pub fn mint(e: Env, minter: Address, to: Address) -> Result<u32, ContractError> {
        require_minter(&e, &minter)?;
        bump_instance(&e);

        let token_id: u32 = e
            .storage()
            .instance()
            .get(&DataKey::NextTokenId)
            .unwrap_or(0);
        let next = token_id.checked_add(1).ok_or(ContractError::Overflow)?;
        let supply: u32 = e
            .storage()
            .instance()
            .get(&DataKey::TotalSupply)
            .unwrap_or(0);
        let supply = supply.checked_add(1).ok_or(ContractError::Overflow)?;
        e.storage().instance().set(&DataKey::NextTokenId, &next);
        e.storage().instance().set(&DataKey::TotalSupply, &supply);

        persistent_set(&e, &DataKey::Owner(token_id), &to);
        let held = balance(&e, &to)
            .checked_add(1)
            .ok_or(ContractError::Overflow)?;
        set_balance(&e, &to, held);

        checkpoints::move_votes(&e, None, Some(&delegate_of(&e, &to)), 1)?;
        events::emit_transfer(&e, token_id, None, Some(to));
        Ok(token_id)
    }

    /// Burn `token_id` and remove its vote from the owner's delegatee.
    pub fn burn(e: Env, minter: Address, token_id: u32) -> Result<(), ContractError> {
        require_minter(&e, &minter)?;
        bump_instance(&e);

        let holder = owner(&e, token_id)?;
        let supply: u32 = e
            .storage()
            .instance()
            .get(&DataKey::TotalSupply)
            .unwrap_or(0);
        let supply = supply.checked_sub(1).ok_or(ContractError::Overflow)?;
        e.storage().instance().set(&DataKey::TotalSupply, &supply);

        e.storage().persistent().remove(&DataKey::Owner(token_id));
        let held = balance(&e, &holder)
            .checked_sub(1)
            .ok_or(ContractError::Overflow)?;
        set_balance(&e, &holder, held);

        checkpoints::move_votes(&e, Some(&delegate_of(&e, &holder)), None, 1)?;
        events::emit_transfer(&e, token_id, Some(holder), None);
        Ok(())
    }

    /// Transfer `token_id` from `from` to `to`; the vote follows the token.
    pub fn transfer(e: Env, from: Address, to: Address, token_id: u32) -> Result<(), ContractError> {
        from.require_auth();
        bump_instance(&e);

        if owner(&e, token_id)? != from {
            return Err(ContractError::NotTokenOwner);
        }
        persistent_set(&e, &DataKey::Owner(token_id), &to);

        if from != to {
            let from_held = balance(&e, &from)
                .checked_sub(1)
                .ok_or(ContractError::Overflow)?;
            set_balance(&e, &from, from_held);
            let to_held = balance(&e, &to)
                .checked_add(1)
                .ok_or(ContractError::Overflow)?;
            set_balance(&e, &to, to_held);
        }

        checkpoints::move_votes(
            &e,
            Some(&delegate_of(&e, &from)),
            Some(&delegate_of(&e, &to)),
            1,
        )?;
        events::emit_transfer(&e, token_id, Some(from), Some(to));
        Ok(())
    }

    /// Delegate all of `delegator`'s votes to `delegatee`.
    pub fn delegate(e: Env, delegator: Address, delegatee: Address) -> Result<(), ContractError> {
        delegator.require_auth();
        bump_instance(&e);

        let current = delegate_of(&e, &delegator);
        persistent_set(&e, &DataKey::Delegate(delegator.clone()), &delegatee);
        events::emit_delegate_changed(&e, &delegator, &current, &delegatee);

        let held = balance(&e, &delegator);
        checkpoints::move_votes(&e, Some(&current), Some(&delegatee), held)
    }

    // ── Queries ────────────────────────────────────────────────────────────

    /// Current delegatee of `account` (itself when it never delegated).
    pub fn delegates(e: Env, account: Address) -> Address {
        delegate_of(&e, &account)
    }

    pub fn owner_of(e: Env, token_id: u32) -> Result<Address, ContractError> {
        owner(&e, token_id)
    }

    pub fn balance_of(e: Env, account: Address) -> u32 {
        balance(&e, &account)
    }

    pub fn total_supply(e: Env) -> u32 {
        e.storage()
            .instance()
            .get(&DataKey::TotalSupply)
            .unwrap_or(0)
    }

    pub fn get_current_votes(e: Env, account: Address) -> u32 {
        checkpoints::current_votes(&e, &account)
    }

    /// Votes held by `account` at the end of `ledger`.
    ///
    /// Only past ledgers are final, so `ledger` must be strictly below the
    /// current sequence.
    pub fn get_prior_votes(e: Env, account: Address, ledger: u32) -> Result<u32, ContractError> {
        if ledger >= e.ledger().sequence() {
            return Err(ContractError::VotesNotYetDetermined);
        }
        Ok(checkpoints::votes_at(&checkpoints::load(&e, &account), ledger))
    }

    /// Full checkpoint history of `account`.
    pub fn get_checkpoints(e: Env, account: Address) -> Vec<VoteCheckpoint> {
        checkpoints::load(&e, &account)
    }
}
