//! Per-account vote checkpoints.
//!
//! Each delegatee owns an append-only list of `(from_ledger, votes)` pairs,
//! sorted by ledger. A second write in the same ledger overwrites the last
//! entry instead of appending, so the list holds at most one entry per ledger.

use crate::events;
use crate::types::{DataKey, VoteCheckpoint};
use crate::{BUMP_TARGET, BUMP_THRESHOLD};
use governor_errors::ContractError;
use soroban_sdk::{Address, Env, Vec};

pub fn load(e: &Env, account: &Address) -> Vec<VoteCheckpoint> {
    let key = DataKey::Checkpoints(account.clone());
    let storage = e.storage().persistent();
    match storage.get::<_, Vec<VoteCheckpoint>>(&key) {
        Some(list) => {
            storage.extend_ttl(&key, BUMP_THRESHOLD, BUMP_TARGET);
            list
        }
        None => Vec::new(e),
    }
}

fn save(e: &Env, account: &Address, list: &Vec<VoteCheckpoint>) {
    let key = DataKey::Checkpoints(account.clone());
    e.storage().persistent().set(&key, list);
    e.storage()
        .persistent()
        .extend_ttl(&key, BUMP_THRESHOLD, BUMP_TARGET);
}

/// Votes currently held by `account`.
pub fn current_votes(e: &Env, account: &Address) -> u32 {
    load(e, account).last().map(|cp| cp.votes).unwrap_or(0)
}

/// Votes held by `account` at the end of `ledger`.
///
/// Binary search over the checkpoint list; 0 before the first checkpoint.
pub fn votes_at(list: &Vec<VoteCheckpoint>, ledger: u32) -> u32 {
    let n = list.len();
    if n == 0 {
        return 0;
    }
    let last = list.get_unchecked(n - 1);
    if last.from_ledger <= ledger {
        return last.votes;
    }
    if list.get_unchecked(0).from_ledger > ledger {
        return 0;
    }

    let mut lower = 0_u32;
    let mut upper = n - 1;
    while upper > lower {
        let center = upper - (upper - lower) / 2;
        let cp = list.get_unchecked(center);
        if cp.from_ledger == ledger {
            return cp.votes;
        } else if cp.from_ledger < ledger {
            lower = center;
        } else {
            upper = center - 1;
        }
    }
    list.get_unchecked(lower).votes
}

fn write(e: &Env, account: &Address, old_votes: u32, new_votes: u32) {
    let ledger = e.ledger().sequence();
    let mut list = load(e, account);
    let n = list.len();
    let checkpoint = VoteCheckpoint {
        from_ledger: ledger,
        votes: new_votes,
    };
    if n > 0 && list.get_unchecked(n - 1).from_ledger == ledger {
        list.set(n - 1, checkpoint);
    } else {
        list.push_back(checkpoint);
    }
    save(e, account, &list);
    events::emit_delegate_votes_changed(e, account, old_votes, new_votes);
}

/// Move `amount` votes from `src` to `dst`. Either side may be `None`
/// (mint and burn).
pub fn move_votes(
    e: &Env,
    src: Option<&Address>,
    dst: Option<&Address>,
    amount: u32,
) -> Result<(), ContractError> {
    if amount == 0 || src == dst {
        return Ok(());
    }
    if let Some(src) = src {
        let old = current_votes(e, src);
        let new = old.checked_sub(amount).ok_or(ContractError::Overflow)?;
        write(e, src, old, new);
    }
    if let Some(dst) = dst {
        let old = current_votes(e, dst);
        let new = old.checked_add(amount).ok_or(ContractError::Overflow)?;
        write(e, dst, old, new);
    }
    Ok(())
}
