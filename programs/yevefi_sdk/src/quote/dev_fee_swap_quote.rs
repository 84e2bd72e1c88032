use crate::error::SwapError;
use crate::math::bit_math::checked_mul_div_u128;
use crate::quote::fetcher::AccountFetcher;
use crate::quote::swap_quote::{swap_quote_by_input_token, SwapQuote};
use crate::state::Yevefi;
use crate::utils::Percentage;
use anchor_lang::prelude::*;

/// A swap quote where part of the input is routed to a developer wallet before
/// the swap. Only exact-input swaps are supported.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DevFeeSwapQuote {
    /// `estimated_amount_in` and `estimated_fee_amount` include the dev fee.
    pub quote: SwapQuote,
    /// LP and protocol fees only.
    pub estimated_swap_fee_amount: u64,
    pub dev_fee_amount: u64,
}

/// Quote for paying `token_amount` in total, of which `dev_fee` goes to the
/// developer and the rest is swapped.
///
/// # Errors
/// * `InvalidDevFeePercentage` if the dev fee is 100% or more.
#[allow(clippy::too_many_arguments)]
pub fn swap_quote_by_input_token_with_dev_fees<F: AccountFetcher + ?Sized>(
    yevefi_address: &Pubkey,
    yevefi: &Yevefi,
    input_token_mint: &Pubkey,
    token_amount: u64,
    slippage: Percentage,
    program_id: &Pubkey,
    fetcher: &F,
    dev_fee: Percentage,
) -> Result<DevFeeSwapQuote> {
    require!(
        !dev_fee.is_at_least_whole(),
        SwapError::InvalidDevFeePercentage
    );

    let dev_fee_amount = dev_fee_amount(token_amount, dev_fee)?;
    let quote = swap_quote_by_input_token(
        yevefi_address,
        yevefi,
        input_token_mint,
        token_amount - dev_fee_amount,
        slippage,
        program_id,
        fetcher,
    )?;

    Ok(DevFeeSwapQuote {
        estimated_swap_fee_amount: quote.estimated_fee_amount,
        dev_fee_amount,
        quote: SwapQuote {
            estimated_amount_in: quote
                .estimated_amount_in
                .checked_add(dev_fee_amount)
                .ok_or(SwapError::AmountCalcOverflow)?,
            estimated_fee_amount: quote
                .estimated_fee_amount
                .checked_add(dev_fee_amount)
                .ok_or(SwapError::AmountCalcOverflow)?,
            ..quote
        },
    })
}

/// `floor(amount * numerator / denominator)`. Below `amount` for any fee under 100%.
pub fn dev_fee_amount(amount: u64, dev_fee: Percentage) -> Result<u64> {
    let fee = checked_mul_div_u128(
        amount as u128,
        dev_fee.numerator as u128,
        dev_fee.denominator as u128,
        false,
    )?;
    Ok(u64::try_from(fee).map_err(|_| SwapError::AmountCalcOverflow)?)
}
