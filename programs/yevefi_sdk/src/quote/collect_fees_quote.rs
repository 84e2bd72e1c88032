//! # yevefi_sdk::quote::collect_fees_quote
//!
//! Fees a position could collect right now.
//!
//! Fee growth inside a range is the pool's global growth minus the growth below
//! the lower tick and above the upper tick. A tick stores the growth on its far
//! side from the current price, so which side "outside" means flips as the price
//! crosses it. Every accumulator is a wrapping Q64.64 value: only differences
//! between two readings are meaningful.

use crate::error::MathError;
use crate::math::bit_math::{checked_mul_shift_right, is_over_limit, U256_LIMIT, U64_LIMIT};
use crate::state::{Position, Tick, Yevefi};
use anchor_lang::prelude::*;
use ethnum::U256;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CollectFeesQuote {
    pub fee_owed_a: u64,
    pub fee_owed_b: u64,
}

/// Fees owed to `position`: what it has already banked plus what has accrued
/// inside its range since its last checkpoint.
///
/// `tick_lower` and `tick_upper` are the pool's ticks at the position's bounds.
pub fn collect_fees_quote(
    yevefi: &Yevefi,
    position: &Position,
    tick_lower: &Tick,
    tick_upper: &Tick,
) -> Result<CollectFeesQuote> {
    let fee_growth_inside_a = growth_inside(
        yevefi.tick_current_index,
        position.tick_lower_index,
        position.tick_upper_index,
        yevefi.fee_growth_global_a,
        tick_lower.initialized.then_some(tick_lower.fee_growth_outside_a),
        tick_upper.initialized.then_some(tick_upper.fee_growth_outside_a),
    );
    let fee_growth_inside_b = growth_inside(
        yevefi.tick_current_index,
        position.tick_lower_index,
        position.tick_upper_index,
        yevefi.fee_growth_global_b,
        tick_lower.initialized.then_some(tick_lower.fee_growth_outside_b),
        tick_upper.initialized.then_some(tick_upper.fee_growth_outside_b),
    );

    Ok(CollectFeesQuote {
        fee_owed_a: position.fee_owed_a.wrapping_add(owed_since_checkpoint(
            position.liquidity,
            fee_growth_inside_a,
            position.fee_growth_checkpoint_a,
        )?),
        fee_owed_b: position.fee_owed_b.wrapping_add(owed_since_checkpoint(
            position.liquidity,
            fee_growth_inside_b,
            position.fee_growth_checkpoint_b,
        )?),
    })
}

/// Growth inside `[tick_lower_index, tick_upper_index)` from a global accumulator
/// and each bound's outside value. `None` marks an uninitialized tick: below an
/// uninitialized lower tick everything counts, above an uninitialized upper tick
/// nothing does.
pub(crate) fn growth_inside(
    tick_current_index: i32,
    tick_lower_index: i32,
    tick_upper_index: i32,
    growth_global: u128,
    lower_outside: Option<u128>,
    upper_outside: Option<u128>,
) -> u128 {
    let growth_below = match lower_outside {
        None => growth_global,
        Some(outside) if tick_current_index < tick_lower_index => {
            growth_global.wrapping_sub(outside)
        }
        Some(outside) => outside,
    };
    let growth_above = match upper_outside {
        None => 0,
        Some(outside) if tick_current_index < tick_upper_index => outside,
        Some(outside) => growth_global.wrapping_sub(outside),
    };

    growth_global
        .wrapping_sub(growth_below)
        .wrapping_sub(growth_above)
}

/// `liquidity * (growth_inside - checkpoint) >> 64`, the growth difference wrapping.
///
/// # Errors
/// * `MultiplicationShiftRightOverflow` if the amount does not fit in a u64.
pub(crate) fn owed_since_checkpoint(
    liquidity: u128,
    growth_inside: u128,
    checkpoint: u128,
) -> Result<u64> {
    let owed = checked_mul_shift_right(
        U256::from(liquidity),
        U256::from(growth_inside.wrapping_sub(checkpoint)),
        U256_LIMIT,
    )?;
    if is_over_limit(owed, U64_LIMIT)? {
        return err!(MathError::MultiplicationShiftRightOverflow);
    }
    Ok(owed.as_u64())
}
