use crate::math::price_math::tick_index_to_sqrt_price_x64;
use anchor_lang::prelude::*;

/// Where the pool price sits relative to a position's range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PositionStatus {
    BelowRange,
    InRange,
    AboveRange,
}

pub struct PositionUtils;

impl PositionUtils {
    /// Status by tick index. A current tick equal to the lower tick is in range,
    /// one equal to the upper tick is above it.
    pub fn get_position_status(
        tick_current_index: i32,
        tick_lower_index: i32,
        tick_upper_index: i32,
    ) -> PositionStatus {
        if tick_current_index < tick_lower_index {
            PositionStatus::BelowRange
        } else if tick_current_index < tick_upper_index {
            PositionStatus::InRange
        } else {
            PositionStatus::AboveRange
        }
    }

    /// Status by sqrt price. A price exactly on either bound counts as outside.
    pub fn get_strict_position_status(
        sqrt_price_x64: u128,
        tick_lower_index: i32,
        tick_upper_index: i32,
    ) -> Result<PositionStatus> {
        let sqrt_price_lower_x64 = tick_index_to_sqrt_price_x64(tick_lower_index)?;
        let sqrt_price_upper_x64 = tick_index_to_sqrt_price_x64(tick_upper_index)?;

        Ok(if sqrt_price_x64 <= sqrt_price_lower_x64 {
            PositionStatus::BelowRange
        } else if sqrt_price_x64 >= sqrt_price_upper_x64 {
            PositionStatus::AboveRange
        } else {
            PositionStatus::InRange
        })
    }
}
