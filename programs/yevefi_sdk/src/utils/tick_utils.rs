use crate::error::MathError;
use crate::utils::constants::{MAX_TICK_INDEX, MIN_TICK_INDEX, TICK_ARRAY_SIZE};
use anchor_lang::prelude::*;

/// Tick grid helpers. `tick_spacing` is assumed non-zero, as for every pool the
/// program can create.
pub struct TickUtils;

impl TickUtils {
    /// Number of ticks a tick array spans at the given spacing.
    #[inline(always)]
    pub fn ticks_in_array(tick_spacing: u16) -> i32 {
        TICK_ARRAY_SIZE * tick_spacing as i32
    }

    /// Offset of `tick_index` within the array starting at `start_tick_index`, floored.
    #[inline(always)]
    pub fn get_offset_index(tick_index: i32, start_tick_index: i32, tick_spacing: u16) -> i32 {
        (tick_index - start_tick_index).div_euclid(tick_spacing as i32)
    }

    /// Start index of the tick array containing `tick_index`, shifted by `offset`
    /// whole arrays.
    ///
    /// # Errors
    /// * `TickIndexOutOfBounds` if the start index lies outside the range that
    ///   tick arrays can be created for.
    pub fn get_start_tick_index(tick_index: i32, tick_spacing: u16, offset: i32) -> Result<i32> {
        let ticks_in_array = Self::ticks_in_array(tick_spacing);
        let real_index = tick_index.div_euclid(ticks_in_array);
        let start_tick_index = (real_index + offset) * ticks_in_array;

        let min_tick_index = MIN_TICK_INDEX - ((MIN_TICK_INDEX % ticks_in_array) + ticks_in_array);
        require!(
            start_tick_index >= min_tick_index && start_tick_index <= MAX_TICK_INDEX,
            MathError::TickIndexOutOfBounds
        );
        Ok(start_tick_index)
    }

    /// Rounds toward zero onto the spacing grid.
    #[inline(always)]
    pub fn get_initializable_tick_index(tick_index: i32, tick_spacing: u16) -> i32 {
        tick_index - tick_index % tick_spacing as i32
    }

    #[inline(always)]
    pub fn get_next_initializable_tick_index(tick_index: i32, tick_spacing: u16) -> i32 {
        Self::get_initializable_tick_index(tick_index, tick_spacing) + tick_spacing as i32
    }

    #[inline(always)]
    pub fn get_prev_initializable_tick_index(tick_index: i32, tick_spacing: u16) -> i32 {
        Self::get_initializable_tick_index(tick_index, tick_spacing) - tick_spacing as i32
    }

    #[inline(always)]
    pub fn check_tick_in_bounds(tick_index: i32) -> bool {
        (MIN_TICK_INDEX..=MAX_TICK_INDEX).contains(&tick_index)
    }

    #[inline(always)]
    pub fn is_tick_initializable(tick_index: i32, tick_spacing: u16) -> bool {
        tick_index % tick_spacing as i32 == 0
    }

    /// A start index is valid when it is aligned to a whole array and the array it
    /// opens still contains an in-bounds tick.
    pub fn check_is_valid_start_tick(start_tick_index: i32, tick_spacing: u16) -> bool {
        let ticks_in_array = Self::ticks_in_array(tick_spacing);
        if start_tick_index % ticks_in_array != 0 {
            return false;
        }
        if start_tick_index < MIN_TICK_INDEX {
            // The array holding MIN_TICK_INDEX starts below it.
            return start_tick_index > MIN_TICK_INDEX - ticks_in_array;
        }
        start_tick_index <= MAX_TICK_INDEX
    }

    /// Flips a tick to the inverse price (B/A becomes A/B).
    #[inline(always)]
    pub fn invert_tick(tick_index: i32) -> i32 {
        -tick_index
    }

    /// Widest usable `(lower, upper)` range for the spacing.
    pub fn get_full_range_tick_indexes(tick_spacing: u16) -> (i32, i32) {
        let spacing = tick_spacing as i32;
        let max = (MAX_TICK_INDEX / spacing) * spacing;
        (-max, max)
    }

    pub fn is_full_range(tick_spacing: u16, tick_lower_index: i32, tick_upper_index: i32) -> bool {
        let (min, max) = Self::get_full_range_tick_indexes(tick_spacing);
        tick_lower_index == min && tick_upper_index == max
    }
}
