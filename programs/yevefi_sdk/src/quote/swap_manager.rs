use crate::error::SwapError;
use crate::math::liquidity_math::next_liquidity_after_cross;
use crate::math::price_math::{sqrt_price_x64_to_tick_index, tick_index_to_sqrt_price_x64};
use crate::math::swap_math::compute_swap_step;
use crate::quote::tick_array_sequence::TickArraySequence;
use crate::state::{Tick, Yevefi, YevefiRewardInfo};
use crate::utils::constants::{FRAC_BITS, NUM_REWARDS, PROTOCOL_FEE_RATE_MUL_VALUE};
use anchor_lang::prelude::*;

/// Growth values a crossed tick would hold after the swap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CrossedTick {
    pub tick_index: i32,
    pub fee_growth_outside_a: u128,
    pub fee_growth_outside_b: u128,
    pub reward_growths_outside: [u128; NUM_REWARDS],
}

/// Outcome of the simulated tick-crossing loop.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SwapResult {
    pub amount_a: u64,
    pub amount_b: u64,
    pub next_tick_index: i32,
    pub next_sqrt_price: u128,
    pub total_fee_amount: u64,
    pub next_liquidity: u128,
    pub next_fee_growth_global: u128,
    pub next_protocol_fee: u64,
    pub next_reward_infos: [YevefiRewardInfo; NUM_REWARDS],
    pub crossed_ticks: Vec<CrossedTick>,
}

/// Runs the swap loop the program executes, without writing anything back.
///
/// Each iteration steps toward whichever comes first of the next initialized
/// tick and `sqrt_price_limit`, accrues the step fee, and crosses the tick when
/// the step lands on it. The loop stops when the amount is used up or the limit
/// is reached.
///
/// `timestamp` drives reward growth. Passing the pool's
/// `reward_last_updated_timestamp` leaves it unchanged.
///
/// The caller validates the limit and amount; see `simulate_swap`.
pub fn compute_swap(
    yevefi: &Yevefi,
    sequence: &mut TickArraySequence,
    amount: u64,
    sqrt_price_limit: u128,
    amount_specified_is_input: bool,
    a_to_b: bool,
    timestamp: u64,
) -> Result<SwapResult> {
    let next_reward_infos = yevefi.next_reward_infos(timestamp)?;

    let mut amount_remaining = amount;
    let mut amount_calculated: u64 = 0;
    let mut curr_sqrt_price = yevefi.sqrt_price;
    let mut curr_tick_index = yevefi.tick_current_index;
    let mut curr_liquidity = yevefi.liquidity;
    let mut curr_protocol_fee: u64 = 0;
    let mut curr_fee_growth_global_input = yevefi.input_fee_growth_global(a_to_b);
    let mut total_fee_amount: u64 = 0;
    let mut crossed_ticks = Vec::new();

    while amount_remaining > 0 && sqrt_price_limit != curr_sqrt_price {
        let (next_tick_index, next_tick) =
            sequence.find_next_initialized_tick_index(curr_tick_index)?;

        let next_tick_sqrt_price = tick_index_to_sqrt_price_x64(next_tick_index)?;
        let sqrt_price_target = if a_to_b {
            sqrt_price_limit.max(next_tick_sqrt_price)
        } else {
            sqrt_price_limit.min(next_tick_sqrt_price)
        };

        let step = compute_swap_step(
            amount_remaining,
            yevefi.fee_rate,
            curr_liquidity,
            curr_sqrt_price,
            sqrt_price_target,
            amount_specified_is_input,
            a_to_b,
        )?;

        if amount_specified_is_input {
            amount_remaining = amount_remaining
                .checked_sub(step.amount_in)
                .and_then(|r| r.checked_sub(step.fee_amount))
                .ok_or(SwapError::AmountRemainingOverflow)?;
            amount_calculated = amount_calculated
                .checked_add(step.amount_out)
                .ok_or(SwapError::AmountCalcOverflow)?;
        } else {
            amount_remaining = amount_remaining
                .checked_sub(step.amount_out)
                .ok_or(SwapError::AmountRemainingOverflow)?;
            amount_calculated = amount_calculated
                .checked_add(step.amount_in)
                .and_then(|c| c.checked_add(step.fee_amount))
                .ok_or(SwapError::AmountCalcOverflow)?;
        }
        total_fee_amount = total_fee_amount
            .checked_add(step.fee_amount)
            .ok_or(SwapError::AmountCalcOverflow)?;

        (curr_protocol_fee, curr_fee_growth_global_input) = accrue_fees(
            step.fee_amount,
            yevefi.protocol_fee_rate,
            curr_liquidity,
            curr_protocol_fee,
            curr_fee_growth_global_input,
        );

        if step.next_price == next_tick_sqrt_price {
            // The exhausted-sequence boundary may not be a tick the arrays hold.
            let tick = next_tick.or_else(|| sequence.get_tick(next_tick_index).ok().copied());
            if let Some(tick) = tick.filter(|t| t.initialized) {
                let (fee_growth_global_a, fee_growth_global_b) = if a_to_b {
                    (curr_fee_growth_global_input, yevefi.fee_growth_global_b)
                } else {
                    (yevefi.fee_growth_global_a, curr_fee_growth_global_input)
                };

                curr_liquidity =
                    next_liquidity_after_cross(curr_liquidity, tick.liquidity_net, a_to_b)?;
                crossed_ticks.push(cross_tick(
                    next_tick_index,
                    &tick,
                    fee_growth_global_a,
                    fee_growth_global_b,
                    &next_reward_infos,
                ));
            }

            // The a to b search is inclusive, so step left of the crossed tick.
            curr_tick_index = if a_to_b {
                next_tick_index - 1
            } else {
                next_tick_index
            };
        } else if step.next_price != curr_sqrt_price {
            curr_tick_index = sqrt_price_x64_to_tick_index(step.next_price)?;
        }

        curr_sqrt_price = step.next_price;
    }

    let (amount_a, amount_b) = if a_to_b == amount_specified_is_input {
        (amount - amount_remaining, amount_calculated)
    } else {
        (amount_calculated, amount - amount_remaining)
    };

    let fee_growth =
        curr_fee_growth_global_input.wrapping_sub(yevefi.input_fee_growth_global(a_to_b));
    msg!("fee_growth: {}", fee_growth);

    Ok(SwapResult {
        amount_a,
        amount_b,
        next_tick_index: curr_tick_index,
        next_sqrt_price: curr_sqrt_price,
        total_fee_amount,
        next_liquidity: curr_liquidity,
        next_fee_growth_global: curr_fee_growth_global_input,
        next_protocol_fee: curr_protocol_fee,
        next_reward_infos,
        crossed_ticks,
    })
}

// Splits a step fee into the protocol cut and LP fee growth per unit of liquidity.
fn accrue_fees(
    fee_amount: u64,
    protocol_fee_rate: u16,
    curr_liquidity: u128,
    curr_protocol_fee: u64,
    curr_fee_growth_global_input: u128,
) -> (u64, u128) {
    let mut next_protocol_fee = curr_protocol_fee;
    let mut next_fee_growth_global_input = curr_fee_growth_global_input;
    let mut global_fee = fee_amount;

    if protocol_fee_rate > 0 {
        // Capped at the fee for rates above 100%, which the program never stores.
        let delta = (fee_amount as u128 * protocol_fee_rate as u128
            / PROTOCOL_FEE_RATE_MUL_VALUE)
            .min(fee_amount as u128) as u64;
        global_fee -= delta;
        next_protocol_fee = next_protocol_fee.wrapping_add(delta);
    }

    if curr_liquidity > 0 {
        next_fee_growth_global_input = next_fee_growth_global_input
            .wrapping_add(((global_fee as u128) << FRAC_BITS) / curr_liquidity);
    }

    (next_protocol_fee, next_fee_growth_global_input)
}

fn cross_tick(
    tick_index: i32,
    tick: &Tick,
    fee_growth_global_a: u128,
    fee_growth_global_b: u128,
    reward_infos: &[YevefiRewardInfo; NUM_REWARDS],
) -> CrossedTick {
    let mut reward_growths_outside = tick.reward_growths_outside;
    for (outside, reward) in reward_growths_outside.iter_mut().zip(reward_infos) {
        if reward.initialized() {
            *outside = reward.growth_global_x64.wrapping_sub(*outside);
        }
    }

    CrossedTick {
        tick_index,
        fee_growth_outside_a: fee_growth_global_a.wrapping_sub(tick.fee_growth_outside_a),
        fee_growth_outside_b: fee_growth_global_b.wrapping_sub(tick.fee_growth_outside_b),
        reward_growths_outside,
    }
}
