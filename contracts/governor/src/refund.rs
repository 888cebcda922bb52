//! Vote Refund Module
//!
//! Reimburses voters for the fees of a refundable vote out of the refund
//! token balance held by the governor, and lets the admin sweep that
//! balance.
//!
//! The host does not expose transaction fees to contracts, so the voter
//! reports them in a `FeeReport`. Every reported figure is clamped to
//! protocol constants before use, which bounds the payout of a single vote
//! to `MAX_REFUND_GAS_USED * (MAX_REFUND_BASE_FEE + MAX_REFUND_PRIORITY_FEE)`.
//!
//! Transfers go through `try_transfer`: a failing payout is reported on the
//! event and never unwinds the vote that triggered it.

use crate::events;
use crate::math::{add_i128, mul_i128};
use crate::types::{DataKey, FeeReport};
use governor_errors::ContractError;
use soroban_sdk::token::TokenClient;
use soroban_sdk::{log, Address, Env};

/// Gas charged for a vote on top of the reported execution cost.
pub const REFUND_BASE_GAS: u64 = 36_000;
/// Ceiling on refunded gas, base cost included.
pub const MAX_REFUND_GAS_USED: u64 = 200_000;
/// Ceiling on the base fee per gas, in refund token units.
pub const MAX_REFUND_BASE_FEE: i128 = 200;
/// Ceiling on the priority fee per gas above the base fee.
pub const MAX_REFUND_PRIORITY_FEE: i128 = 20;

pub fn refund_token(e: &Env) -> Result<Address, ContractError> {
    e.storage()
        .instance()
        .get(&DataKey::RefundToken)
        .ok_or(ContractError::NotInitialized)
}

fn token_client(e: &Env) -> Result<TokenClient<'_>, ContractError> {
    Ok(TokenClient::new(e, &refund_token(e)?))
}

/// Amount owed for `fee`, limited to `balance`.
///
/// `min(gas_used + REFUND_BASE_GAS, MAX_REFUND_GAS_USED)` gas at
/// `min(gas_price, min(base_fee, MAX_REFUND_BASE_FEE) + MAX_REFUND_PRIORITY_FEE)`.
/// Negative prices count as zero.
pub fn refund_amount(fee: &FeeReport, balance: i128) -> Result<i128, ContractError> {
    if balance <= 0 {
        return Ok(0);
    }
    let gas = fee
        .gas_used
        .saturating_add(REFUND_BASE_GAS)
        .min(MAX_REFUND_GAS_USED);
    let base_fee = fee.base_fee.clamp(0, MAX_REFUND_BASE_FEE);
    let price_cap = add_i128(base_fee, MAX_REFUND_PRIORITY_FEE)?;
    let gas_price = fee.gas_price.max(0).min(price_cap);
    let owed = mul_i128(gas as i128, gas_price)?;
    Ok(owed.min(balance))
}

/// Pay `voter` for a vote carrying `votes` weight.
///
/// Must run after the receipt has been stored. Nothing moves and no event is
/// emitted when the weight, the balance or the computed refund is zero.
pub fn refund_voter(
    e: &Env,
    voter: &Address,
    votes: u32,
    fee: &FeeReport,
) -> Result<(), ContractError> {
    if votes == 0 {
        return Ok(());
    }
    let token = token_client(e)?;
    let contract = e.current_contract_address();
    let balance = token.balance(&contract);
    if balance <= 0 {
        return Ok(());
    }

    let amount = refund_amount(fee, balance)?;
    if amount == 0 {
        return Ok(());
    }
    let sent = matches!(token.try_transfer(&contract, voter, &amount), Ok(Ok(())));
    if !sent {
        log!(e, "refund transfer failed", voter.clone(), amount);
    }

    events::emit_refundable_vote(e, voter, amount, sent);
    Ok(())
}

/// Send the whole refund balance to `admin`. Returns `(amount, sent)`.
pub fn withdraw_all(e: &Env, admin: &Address) -> Result<(i128, bool), ContractError> {
    let token = token_client(e)?;
    let contract = e.current_contract_address();
    let amount = token.balance(&contract);

    let sent = if amount > 0 {
        let ok = matches!(token.try_transfer(&contract, admin, &amount), Ok(Ok(())));
        if !ok {
            log!(e, "withdraw transfer failed", amount);
        }
        ok
    } else {
        true
    };

    events::emit_withdraw(e, amount, sent);
    Ok((amount, sent))
}
