use crate::error::{LiquidityError, MathError};
use crate::math::bit_math::{div_round_up_if, is_over_limit, U128_LIMIT};
use crate::math::token_math::{get_amount_delta_a, get_amount_delta_b};
use crate::utils::constants::FRAC_BITS;
use anchor_lang::prelude::*;
use ethnum::U256;

/// Applies a signed liquidity delta to an unsigned liquidity value.
///
/// # Errors
/// * `LiquidityUnderflow` if a negative delta would take liquidity below zero.
/// * `LiquidityOverflow` if a positive delta would exceed `u128::MAX`.
#[inline(always)]
pub fn add_liquidity_delta(liquidity: u128, delta: i128) -> Result<u128> {
    if delta >= 0 {
        Ok(liquidity
            .checked_add(delta as u128)
            .ok_or(LiquidityError::LiquidityOverflow)?)
    } else {
        Ok(liquidity
            .checked_sub(delta.unsigned_abs())
            .ok_or(LiquidityError::LiquidityUnderflow)?)
    }
}

/// Liquidity after crossing a tick with `liquidity_net`. Moving left (a to b) the
/// net is subtracted, moving right it is added.
#[inline(always)]
pub fn next_liquidity_after_cross(liquidity: u128, liquidity_net: i128, a_to_b: bool) -> Result<u128> {
    if a_to_b {
        match liquidity_net.checked_neg() {
            Some(signed_net) => add_liquidity_delta(liquidity, signed_net),
            // -i128::MIN only exists as an unsigned magnitude.
            None => Ok(liquidity
                .checked_add(liquidity_net.unsigned_abs())
                .ok_or(LiquidityError::LiquidityOverflow)?),
        }
    } else {
        add_liquidity_delta(liquidity, liquidity_net)
    }
}

#[inline(always)]
fn to_liquidity(value: U256) -> Result<u128> {
    if is_over_limit(value, U128_LIMIT)? {
        return err!(LiquidityError::LiquidityOverflow);
    }
    Ok(value.as_u128())
}

/// Liquidity that `amount` of token A buys over `[lower, upper]`.
///
/// `liquidity = amount * lower * upper / (upper - lower) / 2^64`
///
/// # Errors
/// * `DivideByZero` unless `lower < upper`.
/// * `MultiplicationOverflow` if `amount * lower * upper` exceeds 256 bits.
/// * `LiquidityOverflow` if the result does not fit in a u128.
pub fn get_liquidity_from_token_a(
    amount: u64,
    sqrt_price_lower: u128,
    sqrt_price_upper: u128,
    round_up: bool,
) -> Result<u128> {
    require!(sqrt_price_lower < sqrt_price_upper, MathError::DivideByZero);

    let product = U256::from(amount)
        .checked_mul(U256::from(sqrt_price_lower))
        .and_then(|n| n.checked_mul(U256::from(sqrt_price_upper)))
        .ok_or(MathError::MultiplicationOverflow)?;
    let quotient = product / U256::from(sqrt_price_upper - sqrt_price_lower);

    let shifted = quotient >> FRAC_BITS;
    let has_remainder = quotient & U256::from(u64::MAX) != U256::ZERO;
    to_liquidity(if round_up && has_remainder {
        shifted + U256::ONE
    } else {
        shifted
    })
}

/// Liquidity that `amount` of token B buys over `[lower, upper]`.
///
/// `liquidity = amount * 2^64 / (upper - lower)`
pub fn get_liquidity_from_token_b(
    amount: u64,
    sqrt_price_lower: u128,
    sqrt_price_upper: u128,
    round_up: bool,
) -> Result<u128> {
    require!(sqrt_price_lower < sqrt_price_upper, MathError::DivideByZero);

    let numerator = U256::from(amount) << FRAC_BITS;
    let denominator = U256::from(sqrt_price_upper - sqrt_price_lower);
    to_liquidity(div_round_up_if(numerator, denominator, round_up)?)
}

/// Token amounts `liquidity` is worth over `[lower, upper]` at `sqrt_price`.
///
/// At or below the lower bound the position is all token A, at or above the
/// upper bound it is all token B.
pub fn get_token_amounts_from_liquidity(
    liquidity: u128,
    sqrt_price: u128,
    sqrt_price_lower: u128,
    sqrt_price_upper: u128,
    round_up: bool,
) -> Result<(u64, u64)> {
    if sqrt_price <= sqrt_price_lower {
        Ok((
            get_amount_delta_a(sqrt_price_lower, sqrt_price_upper, liquidity, round_up)?,
            0,
        ))
    } else if sqrt_price >= sqrt_price_upper {
        Ok((
            0,
            get_amount_delta_b(sqrt_price_lower, sqrt_price_upper, liquidity, round_up)?,
        ))
    } else {
        Ok((
            get_amount_delta_a(sqrt_price, sqrt_price_upper, liquidity, round_up)?,
            get_amount_delta_b(sqrt_price_lower, sqrt_price, liquidity, round_up)?,
        ))
    }
}
