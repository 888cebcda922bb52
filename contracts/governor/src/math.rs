//! Overflow-safe arithmetic helpers for vote and refund calculations.
//!
//! Every helper returns `ContractError::Overflow` instead of wrapping.

use governor_errors::ContractError;

/// Basis-point denominator (10_000 bps = 100%).
pub const BPS_SCALAR: u64 = 10_000;

/// `bps` basis points of `amount`, rounded down: `amount * bps / 10_000`.
#[inline]
pub fn bps_of(amount: u32, bps: u32) -> Result<u32, ContractError> {
    let scaled = (amount as u64) * (bps as u64) / BPS_SCALAR;
    u32::try_from(scaled).map_err(|_| ContractError::Overflow)
}

/// Checked `u32` addition.
#[inline]
pub fn add_u32(a: u32, b: u32) -> Result<u32, ContractError> {
    a.checked_add(b).ok_or(ContractError::Overflow)
}

/// Checked `i128` multiplication.
#[inline]
pub fn mul_i128(a: i128, b: i128) -> Result<i128, ContractError> {
    a.checked_mul(b).ok_or(ContractError::Overflow)
}

/// Checked `i128` addition.
#[inline]
pub fn add_i128(a: i128, b: i128) -> Result<i128, ContractError> {
    a.checked_add(b).ok_or(ContractError::Overflow)
}
