use crate::error::{MathError, SwapError};
use crate::math::bit_math::checked_mul_div_u128;
use crate::math::token_math::{get_amount_delta_a, get_amount_delta_b, get_next_sqrt_price};
use crate::utils::constants::FEE_RATE_MUL_VALUE;
use anchor_lang::prelude::*;

/// Result of a single step of the swap loop, bounded by one price target.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SwapStepComputation {
    pub amount_in: u64,
    pub amount_out: u64,
    pub next_price: u128,
    pub fee_amount: u64,
}

/// Moves the price from `sqrt_price_current` towards `sqrt_price_target` using as
/// much of `amount_remaining` as the range absorbs.
///
/// The fee is taken from the input side. For exact input the tradable amount is
/// `amount_remaining * (1e6 - fee_rate) / 1e6`, and a step that stops short of the
/// target keeps the whole remainder as fee. Otherwise the fee is grossed up from
/// `amount_in` with ceiling rounding so it is never under-collected.
pub fn compute_swap_step(
    amount_remaining: u64,
    fee_rate: u16,
    liquidity: u128,
    sqrt_price_current: u128,
    sqrt_price_target: u128,
    amount_specified_is_input: bool,
    a_to_b: bool,
) -> Result<SwapStepComputation> {
    let fee_rate = fee_rate as u128;

    let mut amount_fixed_delta = get_amount_fixed_delta(
        sqrt_price_current,
        sqrt_price_target,
        liquidity,
        amount_specified_is_input,
        a_to_b,
    )?;

    let amount_calc = if amount_specified_is_input {
        to_u64(checked_mul_div_u128(
            amount_remaining as u128,
            FEE_RATE_MUL_VALUE - fee_rate,
            FEE_RATE_MUL_VALUE,
            false,
        )?)?
    } else {
        amount_remaining
    };

    let next_sqrt_price = if amount_calc >= amount_fixed_delta {
        sqrt_price_target
    } else {
        get_next_sqrt_price(
            sqrt_price_current,
            liquidity,
            amount_calc,
            amount_specified_is_input,
            a_to_b,
        )?
    };

    let is_max_swap = next_sqrt_price == sqrt_price_target;

    let amount_unfixed_delta = get_amount_unfixed_delta(
        sqrt_price_current,
        next_sqrt_price,
        liquidity,
        amount_specified_is_input,
        a_to_b,
    )?;

    // A partial step only consumes the fixed amount up to the price it reached.
    if !is_max_swap {
        amount_fixed_delta = get_amount_fixed_delta(
            sqrt_price_current,
            next_sqrt_price,
            liquidity,
            amount_specified_is_input,
            a_to_b,
        )?;
    }

    let (amount_in, mut amount_out) = if amount_specified_is_input {
        (amount_fixed_delta, amount_unfixed_delta)
    } else {
        (amount_unfixed_delta, amount_fixed_delta)
    };

    if !amount_specified_is_input && amount_out > amount_remaining {
        amount_out = amount_remaining;
    }

    let fee_amount = if amount_specified_is_input && !is_max_swap {
        amount_remaining
            .checked_sub(amount_in)
            .ok_or(SwapError::AmountRemainingOverflow)?
    } else {
        to_u64(checked_mul_div_u128(
            amount_in as u128,
            fee_rate,
            FEE_RATE_MUL_VALUE - fee_rate,
            true,
        )?)?
    };

    Ok(SwapStepComputation {
        amount_in,
        amount_out,
        next_price: next_sqrt_price,
        fee_amount,
    })
}

#[inline(always)]
fn to_u64(value: u128) -> Result<u64> {
    Ok(u64::try_from(value).map_err(|_| MathError::MulDivOverflow)?)
}

// The token whose amount the caller specified, rounded in the pool's favour.
fn get_amount_fixed_delta(
    sqrt_price_current: u128,
    sqrt_price_target: u128,
    liquidity: u128,
    amount_specified_is_input: bool,
    a_to_b: bool,
) -> Result<u64> {
    if a_to_b == amount_specified_is_input {
        get_amount_delta_a(
            sqrt_price_current,
            sqrt_price_target,
            liquidity,
            amount_specified_is_input,
        )
    } else {
        get_amount_delta_b(
            sqrt_price_current,
            sqrt_price_target,
            liquidity,
            amount_specified_is_input,
        )
    }
}

// The other token, rounded in the pool's favour.
fn get_amount_unfixed_delta(
    sqrt_price_current: u128,
    sqrt_price_target: u128,
    liquidity: u128,
    amount_specified_is_input: bool,
    a_to_b: bool,
) -> Result<u64> {
    if a_to_b == amount_specified_is_input {
        get_amount_delta_b(
            sqrt_price_current,
            sqrt_price_target,
            liquidity,
            !amount_specified_is_input,
        )
    } else {
        get_amount_delta_a(
            sqrt_price_current,
            sqrt_price_target,
            liquidity,
            !amount_specified_is_input,
        )
    }
}
