//! Client for the voting token the governor reads vote weights from.
//!
//! Any contract exposing these two functions can back the governor; the
//! `voting_token` crate in this workspace is the reference implementation.

use soroban_sdk::{contractclient, Address, Env};

#[allow(dead_code)]
#[contractclient(name = "VotesClient")]
pub trait VotesInterface {
    /// Votes delegated to `account` as of the end of `ledger`.
    /// `ledger` must be strictly before the current ledger.
    fn get_prior_votes(e: Env, account: Address, ledger: u32) -> u32;

    /// Number of voting units in existence.
    fn total_supply(e: Env) -> u32;
}
