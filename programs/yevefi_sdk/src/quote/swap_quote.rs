//! # yevefi_sdk::quote::swap_quote
//!
//! Entry points that turn a pool snapshot and fetched tick arrays into an
//! instruction-ready swap quote.
//!
//! `simulate_swap` validates the request, runs the swap loop and checks the
//! caller's threshold. `swap_quote_with_params` then replaces the threshold with
//! a slippage bound derived from the estimate. The `*_by_input_token` /
//! `*_by_output_token` helpers resolve direction, tick arrays and defaults from a
//! mint and a fetcher.

use crate::error::SwapError;
use crate::quote::fetcher::AccountFetcher;
use crate::quote::swap_manager::compute_swap;
use crate::quote::tick_array_sequence::TickArraySequence;
use crate::state::{TickArrayState, Yevefi};
use crate::utils::constants::{MAX_SQRT_PRICE_X64, MAX_SWAP_TICK_ARRAYS, MIN_SQRT_PRICE_X64};
use crate::utils::swap_utils::SwapUtils;
use crate::utils::Percentage;
use anchor_lang::prelude::*;

/// Inputs of a swap simulation.
///
/// `tick_arrays` are in trade order, starting with the array that holds the
/// pool's current tick.
#[derive(Clone, Debug)]
pub struct SwapQuoteParam {
    pub yevefi_data: Yevefi,
    pub token_amount: u64,
    pub other_amount_threshold: u64,
    pub sqrt_price_limit: u128,
    pub a_to_b: bool,
    pub amount_specified_is_input: bool,
    pub tick_arrays: Vec<TickArrayState>,
}

/// Estimated outcome of a swap, plus the swap instruction arguments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SwapQuote {
    pub estimated_amount_in: u64,
    pub estimated_amount_out: u64,
    pub estimated_end_tick_index: i32,
    pub estimated_end_sqrt_price: u128,
    /// All fees charged by the pool, LP and protocol.
    pub estimated_fee_amount: u64,

    pub amount: u64,
    pub other_amount_threshold: u64,
    pub sqrt_price_limit: u128,
    pub amount_specified_is_input: bool,
    pub a_to_b: bool,
    pub tick_array_0: Pubkey,
    pub tick_array_1: Pubkey,
    pub tick_array_2: Pubkey,
}

/// Simulates the swap the program would run for `params`.
///
/// Checks run in this order:
/// 1. the pool has a non-zero tick spacing (`InvalidTickSpacing`)
/// 2. the limit is inside the sqrt price range (`SqrtPriceOutOfBounds`)
/// 3. the limit is on the trade side of the current price (`InvalidSqrtPriceLimitDirection`)
/// 4. the amount is non-zero (`ZeroTradableAmount`)
/// 5. the first array holds the current tick (`TickArraySequenceInvalid`)
/// 6. the swap loop itself
/// 7. the caller's threshold (`AmountOutBelowMinimum` / `AmountInAboveMaximum`)
/// 8. at most `MAX_SWAP_TICK_ARRAYS` arrays were touched (`TickArrayCrossingAboveMax`)
pub fn simulate_swap(params: &SwapQuoteParam) -> Result<SwapQuote> {
    let SwapQuoteParam {
        yevefi_data,
        token_amount,
        other_amount_threshold,
        sqrt_price_limit,
        a_to_b,
        amount_specified_is_input,
        tick_arrays,
    } = params;
    let (token_amount, other_amount_threshold, sqrt_price_limit) =
        (*token_amount, *other_amount_threshold, *sqrt_price_limit);
    let (a_to_b, amount_specified_is_input) = (*a_to_b, *amount_specified_is_input);

    require!(yevefi_data.tick_spacing != 0, SwapError::InvalidTickSpacing);
    require!(
        (MIN_SQRT_PRICE_X64..=MAX_SQRT_PRICE_X64).contains(&sqrt_price_limit),
        SwapError::SqrtPriceOutOfBounds
    );
    require!(
        !(a_to_b && sqrt_price_limit > yevefi_data.sqrt_price
            || !a_to_b && sqrt_price_limit < yevefi_data.sqrt_price),
        SwapError::InvalidSqrtPriceLimitDirection
    );
    require!(token_amount != 0, SwapError::ZeroTradableAmount);

    let mut sequence = TickArraySequence::new(tick_arrays, yevefi_data.tick_spacing, a_to_b)?;
    if !sequence.is_valid_tick_array_0(yevefi_data.tick_current_index) {
        msg!(
            "tick array 0 does not contain tick {}",
            yevefi_data.tick_current_index
        );
        return err!(SwapError::TickArraySequenceInvalid);
    }

    let result = compute_swap(
        yevefi_data,
        &mut sequence,
        token_amount,
        sqrt_price_limit,
        amount_specified_is_input,
        a_to_b,
        yevefi_data.reward_last_updated_timestamp,
    )?;

    let (estimated_amount_in, estimated_amount_out) = if a_to_b {
        (result.amount_a, result.amount_b)
    } else {
        (result.amount_b, result.amount_a)
    };

    if amount_specified_is_input {
        require!(
            other_amount_threshold <= estimated_amount_out,
            SwapError::AmountOutBelowMinimum
        );
    } else {
        require!(
            other_amount_threshold >= estimated_amount_in,
            SwapError::AmountInAboveMaximum
        );
    }

    let touched_count = sequence.touched_array_count();
    if touched_count > MAX_SWAP_TICK_ARRAYS {
        msg!("swap touches {} tick arrays", touched_count);
        return err!(SwapError::TickArrayCrossingAboveMax);
    }
    let touched = sequence.touched_arrays(MAX_SWAP_TICK_ARRAYS);

    Ok(SwapQuote {
        estimated_amount_in,
        estimated_amount_out,
        estimated_end_tick_index: result.next_tick_index,
        estimated_end_sqrt_price: result.next_sqrt_price,
        estimated_fee_amount: result.total_fee_amount,
        amount: token_amount,
        other_amount_threshold,
        sqrt_price_limit,
        amount_specified_is_input,
        a_to_b,
        tick_array_0: touched[0],
        tick_array_1: touched[1],
        tick_array_2: touched[2],
    })
}

/// `simulate_swap`, then a threshold that tolerates `slippage` on the estimate.
pub fn swap_quote_with_params(params: &SwapQuoteParam, slippage: Percentage) -> Result<SwapQuote> {
    let quote = simulate_swap(params)?;
    let amounts = SwapUtils::calculate_swap_amounts_from_quote(
        quote.amount,
        quote.estimated_amount_in,
        quote.estimated_amount_out,
        slippage,
        quote.amount_specified_is_input,
    )?;

    Ok(SwapQuote {
        amount: amounts.amount,
        other_amount_threshold: amounts.other_amount_threshold,
        ..quote
    })
}

/// Quote for paying exactly `token_amount` of `input_token_mint` into the pool.
pub fn swap_quote_by_input_token<F: AccountFetcher + ?Sized>(
    yevefi_address: &Pubkey,
    yevefi: &Yevefi,
    input_token_mint: &Pubkey,
    token_amount: u64,
    slippage: Percentage,
    program_id: &Pubkey,
    fetcher: &F,
) -> Result<SwapQuote> {
    let params = swap_quote_params_by_token(
        yevefi_address,
        yevefi,
        input_token_mint,
        token_amount,
        true,
        program_id,
        fetcher,
    )?;
    swap_quote_with_params(&params, slippage)
}

/// Quote for receiving exactly `token_amount` of `output_token_mint` from the pool.
pub fn swap_quote_by_output_token<F: AccountFetcher + ?Sized>(
    yevefi_address: &Pubkey,
    yevefi: &Yevefi,
    output_token_mint: &Pubkey,
    token_amount: u64,
    slippage: Percentage,
    program_id: &Pubkey,
    fetcher: &F,
) -> Result<SwapQuote> {
    let params = swap_quote_params_by_token(
        yevefi_address,
        yevefi,
        output_token_mint,
        token_amount,
        false,
        program_id,
        fetcher,
    )?;
    swap_quote_with_params(&params, slippage)
}

/// Builds `SwapQuoteParam` from a mint, with the default limit and threshold.
///
/// # Errors
/// * `InvalidTickSpacing` if the pool's tick spacing is zero.
/// * `TokenMintNotInPool` if the mint is neither token of the pool.
pub fn swap_quote_params_by_token<F: AccountFetcher + ?Sized>(
    yevefi_address: &Pubkey,
    yevefi: &Yevefi,
    token_mint: &Pubkey,
    token_amount: u64,
    amount_specified_is_input: bool,
    program_id: &Pubkey,
    fetcher: &F,
) -> Result<SwapQuoteParam> {
    require!(yevefi.tick_spacing != 0, SwapError::InvalidTickSpacing);
    let a_to_b = SwapUtils::get_swap_direction(yevefi, token_mint, amount_specified_is_input)
        .ok_or(SwapError::TokenMintNotInPool)?
        .is_a_to_b();

    let tick_arrays = SwapUtils::get_tick_arrays(
        yevefi.tick_current_index,
        yevefi.tick_spacing,
        a_to_b,
        program_id,
        yevefi_address,
        fetcher,
    )?;

    Ok(SwapQuoteParam {
        yevefi_data: yevefi.clone(),
        token_amount,
        other_amount_threshold: SwapUtils::get_default_other_amount_threshold(
            amount_specified_is_input,
        ),
        sqrt_price_limit: SwapUtils::get_default_sqrt_price_limit(a_to_b),
        a_to_b,
        amount_specified_is_input,
        tick_arrays,
    })
}
