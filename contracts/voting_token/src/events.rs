use soroban_sdk::{Address, Env, Symbol};

/// Emitted when a token changes hands, including mint and burn.
///
/// # Topics
/// * `Symbol` - "transfer"
/// * `u32` - The token id
///
/// # Data
/// * `Option<Address>` - Previous owner (`None` on mint)
/// * `Option<Address>` - New owner (`None` on burn)
pub fn emit_transfer(e: &Env, token_id: u32, from: Option<Address>, to: Option<Address>) {
    let topics = (Symbol::new(e, "transfer"), token_id);
    e.events().publish(topics, (from, to));
}

/// Emitted when an account changes its delegatee.
///
/// # Topics
/// * `Symbol` - "delegate_changed"
/// * `Address` - The delegator
///
/// # Data
/// * `Address` - Previous delegatee
/// * `Address` - New delegatee
pub fn emit_delegate_changed(e: &Env, delegator: &Address, from: &Address, to: &Address) {
    let topics = (Symbol::new(e, "delegate_changed"), delegator.clone());
    e.events().publish(topics, (from.clone(), to.clone()));
}

/// Emitted whenever a delegatee's vote count is checkpointed.
pub fn emit_delegate_votes_changed(e: &Env, delegate: &Address, old_votes: u32, new_votes: u32) {
    let topics = (Symbol::new(e, "delegate_votes_changed"), delegate.clone());
    e.events().publish(topics, (old_votes, new_votes));
}
