//! # yevefi_sdk::quote::increase_liquidity_quote
//!
//! Deposit quotes for a position range.
//!
//! The token maximums guard against price movement rather than against the token
//! estimates themselves: the deposit is re-estimated at both edges of the
//! slippage band returned by `get_slippage_bound_for_sqrt_price`, and each
//! maximum is the largest of the three estimates. Estimates round up, since the
//! depositor pays them.

use crate::error::{LiquidityError, MathError, SwapError};
use crate::math::liquidity_math::{
    get_liquidity_from_token_a, get_liquidity_from_token_b, get_token_amounts_from_liquidity,
};
use crate::math::price_math::{get_slippage_bound_for_sqrt_price, tick_index_to_sqrt_price_x64};
use crate::state::Yevefi;
use crate::utils::pool_utils::TokenType;
use crate::utils::position_utils::{PositionStatus, PositionUtils};
use crate::utils::tick_utils::TickUtils;
use crate::utils::Percentage;
use anchor_lang::prelude::*;

#[derive(Clone, Debug)]
pub struct IncreaseLiquidityQuoteParam {
    pub input_token_mint: Pubkey,
    pub input_token_amount: u64,
    pub token_mint_a: Pubkey,
    pub token_mint_b: Pubkey,
    pub sqrt_price: u128,
    pub tick_lower_index: i32,
    pub tick_upper_index: i32,
    pub slippage_tolerance: Percentage,
}

#[derive(Clone, Debug)]
pub struct IncreaseLiquidityQuoteByLiquidityParam {
    pub liquidity: u128,
    pub sqrt_price: u128,
    pub tick_lower_index: i32,
    pub tick_upper_index: i32,
    pub slippage_tolerance: Percentage,
}

/// Arguments for the increase liquidity instruction, plus the token estimates
/// at the current price.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IncreaseLiquidityQuote {
    pub liquidity_amount: u128,
    pub token_max_a: u64,
    pub token_max_b: u64,
    pub token_est_a: u64,
    pub token_est_b: u64,
}

/// Quote for depositing `input_token_amount` of one pool token into
/// `[tick_lower, tick_upper]`. Both ticks are snapped onto the pool's spacing grid.
pub fn increase_liquidity_quote_by_input_token(
    input_token_mint: &Pubkey,
    input_token_amount: u64,
    tick_lower: i32,
    tick_upper: i32,
    slippage_tolerance: Percentage,
    yevefi: &Yevefi,
) -> Result<IncreaseLiquidityQuote> {
    require!(yevefi.tick_spacing != 0, SwapError::InvalidTickSpacing);

    increase_liquidity_quote_by_input_token_with_params(&IncreaseLiquidityQuoteParam {
        input_token_mint: *input_token_mint,
        input_token_amount,
        token_mint_a: yevefi.token_mint_a,
        token_mint_b: yevefi.token_mint_b,
        sqrt_price: yevefi.sqrt_price,
        tick_lower_index: TickUtils::get_initializable_tick_index(tick_lower, yevefi.tick_spacing),
        tick_upper_index: TickUtils::get_initializable_tick_index(tick_upper, yevefi.tick_spacing),
        slippage_tolerance,
    })
}

/// Converts the input amount to liquidity at the current price, then quotes that
/// liquidity. A token the range cannot use at this price (A above the range,
/// B below it) yields the all-zero quote.
///
/// # Errors
/// * `TickIndexOutOfBounds` if either tick is out of bounds.
/// * `TokenMintNotInPool` if the input mint is neither pool token.
/// * `InvalidTickRange` unless `tick_lower_index < tick_upper_index`.
pub fn increase_liquidity_quote_by_input_token_with_params(
    param: &IncreaseLiquidityQuoteParam,
) -> Result<IncreaseLiquidityQuote> {
    require!(
        TickUtils::check_tick_in_bounds(param.tick_lower_index)
            && TickUtils::check_tick_in_bounds(param.tick_upper_index),
        MathError::TickIndexOutOfBounds
    );
    let input_token_type = if param.input_token_mint == param.token_mint_a {
        TokenType::TokenA
    } else if param.input_token_mint == param.token_mint_b {
        TokenType::TokenB
    } else {
        return err!(SwapError::TokenMintNotInPool);
    };

    let liquidity = get_liquidity_from_input_token(param, input_token_type)?;
    increase_liquidity_quote_by_liquidity_with_params(&IncreaseLiquidityQuoteByLiquidityParam {
        liquidity,
        sqrt_price: param.sqrt_price,
        tick_lower_index: param.tick_lower_index,
        tick_upper_index: param.tick_upper_index,
        slippage_tolerance: param.slippage_tolerance,
    })
}

fn get_liquidity_from_input_token(
    param: &IncreaseLiquidityQuoteParam,
    input_token_type: TokenType,
) -> Result<u128> {
    require!(
        param.tick_lower_index < param.tick_upper_index,
        LiquidityError::InvalidTickRange
    );
    if param.input_token_amount == 0 {
        return Ok(0);
    }

    let sqrt_price_lower = tick_index_to_sqrt_price_x64(param.tick_lower_index)?;
    let sqrt_price_upper = tick_index_to_sqrt_price_x64(param.tick_upper_index)?;
    let status = PositionUtils::get_strict_position_status(
        param.sqrt_price,
        param.tick_lower_index,
        param.tick_upper_index,
    )?;
    let amount = param.input_token_amount;

    match (status, input_token_type) {
        (PositionStatus::BelowRange, TokenType::TokenA) => {
            get_liquidity_from_token_a(amount, sqrt_price_lower, sqrt_price_upper, false)
        }
        (PositionStatus::AboveRange, TokenType::TokenB) => {
            get_liquidity_from_token_b(amount, sqrt_price_lower, sqrt_price_upper, false)
        }
        (PositionStatus::InRange, TokenType::TokenA) => {
            get_liquidity_from_token_a(amount, param.sqrt_price, sqrt_price_upper, false)
        }
        (PositionStatus::InRange, TokenType::TokenB) => {
            get_liquidity_from_token_b(amount, sqrt_price_lower, param.sqrt_price, false)
        }
        _ => Ok(0),
    }
}

/// Quote for depositing exactly `liquidity`.
pub fn increase_liquidity_quote_by_liquidity_with_params(
    param: &IncreaseLiquidityQuoteByLiquidityParam,
) -> Result<IncreaseLiquidityQuote> {
    if param.liquidity == 0 {
        return Ok(IncreaseLiquidityQuote::default());
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
            true,
        )
    };

    let (token_est_a, token_est_b) = estimate_at(param.sqrt_price)?;
    let bound = get_slippage_bound_for_sqrt_price(param.sqrt_price, param.slippage_tolerance)?;
    let (lower_a, lower_b) = estimate_at(bound.lower_sqrt_price_x64)?;
    let (upper_a, upper_b) = estimate_at(bound.upper_sqrt_price_x64)?;

    Ok(IncreaseLiquidityQuote {
        liquidity_amount: param.liquidity,
        token_max_a: token_est_a.max(lower_a).max(upper_a),
        token_max_b: token_est_b.max(lower_b).max(upper_b),
        token_est_a,
        token_est_b,
    })
}
