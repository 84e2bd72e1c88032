//! # yevefi_sdk::math::bit_math
//!
//! Overflow-checked big-integer primitives shared by the price, token and swap math.
//!
//! Intermediates are held in an `ethnum::U256` scratch value and checked against a
//! bit-width limit of 64, 128 or 256 that mirrors the integer type the on-chain
//! program stores the value in. Overflow is always surfaced as a `MathError`,
//! never wrapped or saturated.

use crate::error::MathError;
use crate::utils::constants::FRAC_BITS;
use anchor_lang::prelude::*;
use ethnum::U256;

pub const U64_LIMIT: u32 = 64;
pub const U128_LIMIT: u32 = 128;
pub const U256_LIMIT: u32 = 256;

// ---------- Limit helpers ---------------------------------------------------

#[inline(always)]
fn limit_max(limit: u32) -> Result<U256> {
    match limit {
        U64_LIMIT => Ok(U256::from(u64::MAX)),
        U128_LIMIT => Ok(U256::from(u128::MAX)),
        U256_LIMIT => Ok(U256::MAX),
        _ => err!(MathError::InvalidBitLimit),
    }
}

/// Returns true when `n` does not fit in an unsigned integer of `limit` bits.
#[inline(always)]
pub fn is_over_limit(n: U256, limit: u32) -> Result<bool> {
    Ok(n > limit_max(limit)?)
}

// ---------- Multiplication --------------------------------------------------

/// Multiplies `n0 * n1`, failing with `MultiplicationOverflow` when the product
/// exceeds `2^limit - 1`.
#[inline(always)]
pub fn checked_mul(n0: U256, n1: U256, limit: u32) -> Result<U256> {
    let max = limit_max(limit)?;
    let product = n0
        .checked_mul(n1)
        .ok_or(MathError::MultiplicationOverflow)?;
    require!(product <= max, MathError::MultiplicationOverflow);
    Ok(product)
}

// ---------- Mul-div ---------------------------------------------------------

#[inline(always)]
pub fn mul_div(n0: U256, n1: U256, d: U256, limit: u32) -> Result<U256> {
    mul_div_round_up_if(n0, n1, d, false, limit)
}

#[inline(always)]
pub fn mul_div_round_up(n0: U256, n1: U256, d: U256, limit: u32) -> Result<U256> {
    mul_div_round_up_if(n0, n1, d, true, limit)
}

/// Computes `(n0 * n1) / d`, rounding up when `round_up` is set and the division
/// leaves a remainder.
///
/// # Errors
/// * `DivideByZero` if `d == 0`, checked before the product is formed.
/// * `MultiplicationOverflow` if `n0 * n1` exceeds the limit.
#[inline(always)]
pub fn mul_div_round_up_if(
    n0: U256,
    n1: U256,
    d: U256,
    round_up: bool,
    limit: u32,
) -> Result<U256> {
    require!(d != U256::ZERO, MathError::DivideByZero);

    let p = checked_mul(n0, n1, limit)?;
    let n = p / d;

    Ok(if round_up && p % d > U256::ZERO {
        n + U256::ONE
    } else {
        n
    })
}

/// `mul_div` over u128 operands whose result must fit back into a u128.
/// Used for fee and reward growth where the program works in 128-bit storage.
#[inline(always)]
pub fn checked_mul_div_u128(n0: u128, n1: u128, d: u128, round_up: bool) -> Result<u128> {
    let result = mul_div_round_up_if(
        U256::from(n0),
        U256::from(n1),
        U256::from(d),
        round_up,
        U256_LIMIT,
    )?;
    if is_over_limit(result, U128_LIMIT)? {
        return err!(MathError::MulDivOverflow);
    }
    Ok(result.as_u128())
}

// ---------- Multiply then shift right by 64 --------------------------------

#[inline(always)]
pub fn checked_mul_shift_right(n0: U256, n1: U256, limit: u32) -> Result<U256> {
    checked_mul_shift_right_round_up_if(n0, n1, false, limit)
}

/// Computes `(n0 * n1) >> 64`.
///
/// Returns zero immediately if either operand is zero. When `round_up` is set and
/// the discarded low 64 bits are non-zero the result is incremented; if the result
/// already sits at the largest value representable after the shift this fails with
/// `MultiplicationOverflow` instead of carrying out of range.
///
/// # Errors
/// * `MultiplicationShiftRightOverflow` if `n0 * n1` exceeds the limit.
/// * `MultiplicationOverflow` if rounding up would overflow.
#[inline(always)]
pub fn checked_mul_shift_right_round_up_if(
    n0: U256,
    n1: U256,
    round_up: bool,
    limit: u32,
) -> Result<U256> {
    let max = limit_max(limit)?;
    if n0 == U256::ZERO || n1 == U256::ZERO {
        return Ok(U256::ZERO);
    }

    let product = n0
        .checked_mul(n1)
        .ok_or(MathError::MultiplicationShiftRightOverflow)?;
    require!(product <= max, MathError::MultiplicationShiftRightOverflow);

    let result = product >> FRAC_BITS;
    let should_round = round_up && (product & U256::from(u64::MAX)) > U256::ZERO;
    if should_round && result == max >> FRAC_BITS {
        return err!(MathError::MultiplicationOverflow);
    }

    Ok(if should_round {
        result + U256::ONE
    } else {
        result
    })
}

// ---------- Division --------------------------------------------------------

#[inline(always)]
pub fn div_round_up(n: U256, d: U256) -> Result<U256> {
    div_round_up_if(n, d, true)
}

#[inline(always)]
pub fn div_round_up_if(n: U256, d: U256, round_up: bool) -> Result<U256> {
    require!(d != U256::ZERO, MathError::DivideByZero);

    let q = n / d;
    Ok(if round_up && n % d > U256::ZERO {
        q + U256::ONE
    } else {
        q
    })
}

/// Integer square root, floor. Newton-Raphson seeded from the bit length so it
/// converges in a handful of iterations for any 256-bit input.
pub fn isqrt(n: U256) -> U256 {
    if n < U256::from(2u8) {
        return n;
    }

    let bits = 256 - n.leading_zeros();
    let mut x = U256::ONE << bits.div_ceil(2);
    loop {
        let y = (x + n / x) >> 1;
        if y >= x {
            return x;
        }
        x = y;
    }
}
