use crate::error::{LiquidityError, MathError};
use crate::math::liquidity_math::get_token_amounts_from_liquidity;
use crate::math::price_math::{get_slippage_bound_for_sqrt_price, tick_index_to_sqrt_price_x64};
use crate::state::{Position, Yevefi};
use crate::utils::tick_utils::TickUtils;
use crate::utils::Percentage;
use anchor_lang::prelude::*;

#[derive(Clone, Debug)]
pub struct DecreaseLiquidityQuoteParam {
    pub liquidity: u128,
    pub sqrt_price: u128,
    pub tick_lower_index: i32,
    pub tick_upper_index: i32,
    pub slippage_tolerance: Percentage,
}

/// Arguments for the decrease liquidity instruction, plus the token estimates at
/// the current price.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DecreaseLiquidityQuote {
    pub liquidity_amount: u128,
    pub token_min_a: u64,
    pub token_min_b: u64,
    pub token_est_a: u64,
    pub token_est_b: u64,
}

/// Quote for withdrawing `liquidity` from `position`.
///
/// # Errors
/// * `LiquidityUnderflow` if the position holds less than `liquidity`.
pub fn decrease_liquidity_quote_by_liquidity(
    liquidity: u128,
    slippage_tolerance: Percentage,
    position: &Position,
    yevefi: &Yevefi,
) -> Result<DecreaseLiquidityQuote> {
    if liquidity > position.liquidity {
        msg!(
            "withdraw {} exceeds position liquidity {}",
            liquidity,
            position.liquidity
        );
        return err!(LiquidityError::LiquidityUnderflow);
    }

    decrease_liquidity_quote_by_liquidity_with_params(&DecreaseLiquidityQuoteParam {
        liquidity,
        sqrt_price: yevefi.sqrt_price,
        tick_lower_index: position.tick_lower_index,
        tick_upper_index: position.tick_upper_index,
        slippage_tolerance,
    })
}

/// Token minimums are the smallest of the estimates at the current price and at
/// both edges of the slippage band. Estimates round down, since the owner
/// receives them.
///
/// # Errors
/// * `TickIndexOutOfBounds` if either tick is out of bounds.
/// * `InvalidTickRange` unless `tick_lower_index < tick_upper_index`.
pub fn decrease_liquidity_quote_by_liquidity_with_params(
    param: &DecreaseLiquidityQuoteParam,
) -> Result<DecreaseLiquidityQuote> {
    require!(
        TickUtils::check_tick_in_bounds(param.tick_lower_index)
            && TickUtils::check_tick_in_bounds(param.tick_upper_index),
        MathError::TickIndexOutOfBounds
    );
    if param.liquidity == 0 {
        return Ok(DecreaseLiquidityQuote::default());
    }
    require!(
        param.tick_lower_index < param.tick_upper_index,
        LiquidityError::InvalidTickRange
    );

    let sqrt_price_lower = tick_index_to_sqrt_price_x64(param.tick_lower_index)?;
    let sqrt_price_upper = tick_index_to_sqrt_price_x64(param.tick_upper_index)?;
    let estimate_at = |sqrt_price: u128| {
        get_token_amounts_from_liquidity(
            param.liquidity,
            sqrt_price,
            sqrt_price_lower,
            sqrt_price_upper,
            false,
        )
    };

    let (token_est_a, token_est_b) = estimate_at(param.sqrt_price)?;
    let bound = get_slippage_bound_for_sqrt_price(param.sqrt_price, param.slippage_tolerance)?;
    let (lower_a, lower_b) = estimate_at(bound.lower_sqrt_price_x64)?;
    let (upper_a, upper_b) = estimate_at(bound.upper_sqrt_price_x64)?;

    Ok(DecreaseLiquidityQuote {
        liquidity_amount: param.liquidity,
        token_min_a: token_est_a.min(lower_a).min(upper_a),
        token_min_b: token_est_b.min(lower_b).min(upper_b),
        token_est_a,
        token_est_b,
    })
}
