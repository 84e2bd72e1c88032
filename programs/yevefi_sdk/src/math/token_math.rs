use crate::error::{MathError, TokenError};
use crate::math::bit_math::{
    checked_mul, checked_mul_shift_right_round_up_if, div_round_up, div_round_up_if,
    is_over_limit, U128_LIMIT, U256_LIMIT, U64_LIMIT,
};
use crate::utils::constants::{FRAC_BITS, MAX_SQRT_PRICE_X64, MIN_SQRT_PRICE_X64};
use crate::utils::Percentage;
use anchor_lang::prelude::*;
use ethnum::U256;

#[inline(always)]
fn to_increasing_price_order(sqrt_price_0: u128, sqrt_price_1: u128) -> (u128, u128) {
    if sqrt_price_0 > sqrt_price_1 {
        (sqrt_price_1, sqrt_price_0)
    } else {
        (sqrt_price_0, sqrt_price_1)
    }
}

#[inline(always)]
fn to_u64(value: U256) -> Result<u64> {
    if is_over_limit(value, U64_LIMIT)? {
        return err!(TokenError::TokenMaxExceeded);
    }
    Ok(value.as_u64())
}

/// Amount of token A covering the sqrt price range for `liquidity`.
///
/// `amount_a = liquidity * (upper - lower) * 2^64 / (lower * upper)`
///
/// The prices may be given in either order.
///
/// # Errors
/// * `MultiplicationOverflow` if `liquidity * (upper - lower) << 64` exceeds 256 bits.
/// * `DivideByZero` if the lower price is zero.
/// * `TokenMaxExceeded` if the result does not fit in a u64.
pub fn get_amount_delta_a(
    sqrt_price_0: u128,
    sqrt_price_1: u128,
    liquidity: u128,
    round_up: bool,
) -> Result<u64> {
    let (sqrt_price_lower, sqrt_price_upper) = to_increasing_price_order(sqrt_price_0, sqrt_price_1);
    require!(sqrt_price_lower != 0, MathError::DivideByZero);

    let sqrt_price_diff = sqrt_price_upper - sqrt_price_lower;
    let product = U256::from(liquidity) * U256::from(sqrt_price_diff);
    // The shift must not push bits out of the 256-bit word.
    require!(
        product.leading_zeros() >= FRAC_BITS,
        MathError::MultiplicationOverflow
    );
    let numerator = product << FRAC_BITS;
    let denominator = U256::from(sqrt_price_lower) * U256::from(sqrt_price_upper);

    let quotient = numerator / denominator;
    let remainder = numerator % denominator;
    let result = if round_up && remainder != U256::ZERO {
        quotient + U256::ONE
    } else {
        quotient
    };

    to_u64(result)
}

/// Amount of token B covering the sqrt price range for `liquidity`.
///
/// `amount_b = liquidity * (upper - lower) / 2^64`, via the 128-bit mul-shift primitive.
pub fn get_amount_delta_b(
    sqrt_price_0: u128,
    sqrt_price_1: u128,
    liquidity: u128,
    round_up: bool,
) -> Result<u64> {
    let (sqrt_price_lower, sqrt_price_upper) = to_increasing_price_order(sqrt_price_0, sqrt_price_1);
    let sqrt_price_diff = sqrt_price_upper - sqrt_price_lower;

    let result = checked_mul_shift_right_round_up_if(
        U256::from(liquidity),
        U256::from(sqrt_price_diff),
        round_up,
        U128_LIMIT,
    )?;

    to_u64(result)
}

/// Sqrt price reached after adding (or removing) `amount` of the fixed token.
///
/// When the fixed token is A (`amount_specified_is_input == a_to_b`) the price is
/// rounded up, when it is B the price is rounded down. Either way the simulated move
/// never under-estimates the cost compared to the program.
pub fn get_next_sqrt_price(
    sqrt_price: u128,
    liquidity: u128,
    amount: u64,
    amount_specified_is_input: bool,
    a_to_b: bool,
) -> Result<u128> {
    if amount_specified_is_input == a_to_b {
        get_next_sqrt_price_from_a_round_up(
            sqrt_price,
            liquidity,
            amount,
            amount_specified_is_input,
        )
    } else {
        get_next_sqrt_price_from_b_round_down(
            sqrt_price,
            liquidity,
            amount,
            amount_specified_is_input,
        )
    }
}

// price' = (L * P) / (L ± amount * P), rounded up
fn get_next_sqrt_price_from_a_round_up(
    sqrt_price: u128,
    liquidity: u128,
    amount: u64,
    amount_specified_is_input: bool,
) -> Result<u128> {
    if amount == 0 {
        return Ok(sqrt_price);
    }

    let p = checked_mul(U256::from(sqrt_price), U256::from(amount), U256_LIMIT)?;
    let liquidity_x_price = checked_mul(U256::from(liquidity), U256::from(sqrt_price), U256_LIMIT)?;
    require!(
        liquidity_x_price.leading_zeros() >= FRAC_BITS,
        MathError::MultiplicationOverflow
    );
    let numerator = liquidity_x_price << FRAC_BITS;

    let liquidity_shift_left = U256::from(liquidity) << FRAC_BITS;
    if !amount_specified_is_input && liquidity_shift_left <= p {
        return err!(MathError::DivideByZero);
    }

    let denominator = if amount_specified_is_input {
        liquidity_shift_left + p
    } else {
        liquidity_shift_left - p
    };

    let price = div_round_up(numerator, denominator)?;

    if price < U256::from(MIN_SQRT_PRICE_X64) {
        return err!(TokenError::TokenMinSubceeded);
    }
    if price > U256::from(MAX_SQRT_PRICE_X64) {
        return err!(TokenError::TokenMaxExceeded);
    }

    Ok(price.as_u128())
}

// price' = P ± amount / L, rounded down
fn get_next_sqrt_price_from_b_round_down(
    sqrt_price: u128,
    liquidity: u128,
    amount: u64,
    amount_specified_is_input: bool,
) -> Result<u128> {
    let amount_x64 = U256::from(amount) << FRAC_BITS;
    let delta = div_round_up_if(amount_x64, U256::from(liquidity), !amount_specified_is_input)?;

    let price = if amount_specified_is_input {
        U256::from(sqrt_price) + delta
    } else {
        U256::from(sqrt_price)
            .checked_sub(delta)
            .ok_or(TokenError::TokenMinSubceeded)?
    };

    if price < U256::from(MIN_SQRT_PRICE_X64) {
        return err!(TokenError::TokenMinSubceeded);
    }
    if price > U256::from(MAX_SQRT_PRICE_X64) {
        return err!(TokenError::TokenMaxExceeded);
    }

    Ok(price.as_u128())
}

/// Widens (`adjust_up`) or narrows an amount by a slippage tolerance.
///
/// * up:   `n * (den + num) / den`
/// * down: `n * den / (den + num)`
///
/// Both round down. An upward adjustment past `u64::MAX` is capped there, since a
/// threshold can never ask for more than the token range holds.
pub fn adjust_for_slippage(n: u64, slippage: Percentage, adjust_up: bool) -> Result<u64> {
    let numerator = U256::from(slippage.numerator);
    let denominator = U256::from(slippage.denominator);
    require!(denominator != U256::ZERO, MathError::DivideByZero);

    let adjusted = if adjust_up {
        U256::from(n) * (denominator + numerator) / denominator
    } else {
        U256::from(n) * denominator / (denominator + numerator)
    };

    Ok(if is_over_limit(adjusted, U64_LIMIT)? {
        u64::MAX
    } else {
        adjusted.as_u64()
    })
}
