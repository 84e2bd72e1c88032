use crate::math::token_math::adjust_for_slippage;
use crate::quote::fetcher::AccountFetcher;
use crate::state::{TickArrayState, Yevefi};
use crate::utils::constants::{MAX_SQRT_PRICE_X64, MAX_SWAP_TICK_ARRAYS, MIN_SQRT_PRICE_X64};
use crate::utils::pda::PdaManager;
use crate::utils::pool_utils::{PoolUtils, TokenType};
use crate::utils::tick_utils::TickUtils;
use crate::utils::Percentage;
use anchor_lang::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwapDirection {
    AtoB,
    BtoA,
}

impl SwapDirection {
    pub fn is_a_to_b(self) -> bool {
        self == SwapDirection::AtoB
    }
}

/// The two swap instruction amounts a quote resolves to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SwapAmounts {
    pub amount: u64,
    pub other_amount_threshold: u64,
}

pub struct SwapUtils;

impl SwapUtils {
    /// Furthest price in the trade direction.
    pub fn get_default_sqrt_price_limit(a_to_b: bool) -> u128 {
        if a_to_b {
            MIN_SQRT_PRICE_X64
        } else {
            MAX_SQRT_PRICE_X64
        }
    }

    /// A threshold that accepts any quote: no minimum output, no maximum input.
    pub fn get_default_other_amount_threshold(amount_specified_is_input: bool) -> u64 {
        if amount_specified_is_input {
            0
        } else {
            u64::MAX
        }
    }

    /// Direction implied by the mint the caller specified and whether it is the
    /// input. `None` if the mint is not in the pool.
    pub fn get_swap_direction(
        pool: &Yevefi,
        swap_token_mint: &Pubkey,
        swap_token_is_input: bool,
    ) -> Option<SwapDirection> {
        let token_type = PoolUtils::get_token_type(pool, swap_token_mint)?;
        if (token_type == TokenType::TokenA) == swap_token_is_input {
            Some(SwapDirection::AtoB)
        } else {
            Some(SwapDirection::BtoA)
        }
    }

    /// Addresses of the tick arrays a swap from `tick_current_index` may traverse,
    /// in trade order. Stops early once an array would start out of range.
    pub fn get_tick_array_public_keys(
        tick_current_index: i32,
        tick_spacing: u16,
        a_to_b: bool,
        program_id: &Pubkey,
        yevefi: &Pubkey,
    ) -> Vec<Pubkey> {
        let shift = if a_to_b { 0 } else { tick_spacing as i32 };
        let step = if a_to_b { -1 } else { 1 };

        let mut addresses = Vec::with_capacity(MAX_SWAP_TICK_ARRAYS);
        for i in 0..MAX_SWAP_TICK_ARRAYS as i32 {
            let Ok(start_tick_index) = TickUtils::get_start_tick_index(
                tick_current_index + shift,
                tick_spacing,
                i * step,
            ) else {
                break;
            };
            addresses.push(PdaManager::tick_array(program_id, yevefi, start_tick_index).address);
        }
        addresses
    }

    /// Derives and fetches the tick arrays for a swap. Accounts that do not exist
    /// come back with `data: None`.
    pub fn get_tick_arrays<F: AccountFetcher + ?Sized>(
        tick_current_index: i32,
        tick_spacing: u16,
        a_to_b: bool,
        program_id: &Pubkey,
        yevefi: &Pubkey,
        fetcher: &F,
    ) -> Result<Vec<TickArrayState>> {
        let addresses = Self::get_tick_array_public_keys(
            tick_current_index,
            tick_spacing,
            a_to_b,
            program_id,
            yevefi,
        );
        let data = fetcher.get_tick_arrays(&addresses)?;

        Ok(addresses
            .into_iter()
            .zip(data)
            .map(|(address, data)| TickArrayState::new(address, data))
            .collect())
    }

    /// Instruction amounts for a quote: the requested amount plus a threshold
    /// widened by `slippage` against the caller.
    ///
    /// Exact input bounds the output from below, exact output bounds the input
    /// from above.
    pub fn calculate_swap_amounts_from_quote(
        amount: u64,
        estimated_amount_in: u64,
        estimated_amount_out: u64,
        slippage: Percentage,
        amount_specified_is_input: bool,
    ) -> Result<SwapAmounts> {
        let other_amount_threshold = if amount_specified_is_input {
            adjust_for_slippage(estimated_amount_out, slippage, false)?
        } else {
            adjust_for_slippage(estimated_amount_in, slippage, true)?
        };
        Ok(SwapAmounts {
            amount,
            other_amount_threshold,
        })
    }
}
