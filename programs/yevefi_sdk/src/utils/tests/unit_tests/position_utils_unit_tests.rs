#[cfg(test)]
mod tests {
    use crate::error::MathError;
    use crate::math::price_math::tick_index_to_sqrt_price_x64;
    use crate::utils::position_utils::{PositionStatus, PositionUtils};

    #[test]
    fn test_position_status_by_tick() {
        assert_eq!(
            PositionUtils::get_position_status(-65, -64, 64),
            PositionStatus::BelowRange
        );
        assert_eq!(
            PositionUtils::get_position_status(-64, -64, 64),
            PositionStatus::InRange
        );
        assert_eq!(
            PositionUtils::get_position_status(63, -64, 64),
            PositionStatus::InRange
        );
        assert_eq!(
            PositionUtils::get_position_status(64, -64, 64),
            PositionStatus::AboveRange
        );
    }

    #[test]
    fn test_strict_position_status_treats_bounds_as_outside() {
        let lower = tick_index_to_sqrt_price_x64(-64).unwrap();
        let upper = tick_index_to_sqrt_price_x64(64).unwrap();

        assert_eq!(
            PositionUtils::get_strict_position_status(lower, -64, 64).unwrap(),
            PositionStatus::BelowRange
        );
        assert_eq!(
            PositionUtils::get_strict_position_status(lower + 1, -64, 64).unwrap(),
            PositionStatus::InRange
        );
        assert_eq!(
            PositionUtils::get_strict_position_status(upper - 1, -64, 64).unwrap(),
            PositionStatus::InRange
        );
        assert_eq!(
            PositionUtils::get_strict_position_status(upper, -64, 64).unwrap(),
            PositionStatus::AboveRange
        );
    }

    #[test]
    fn test_strict_position_status_rejects_out_of_range_ticks() {
        assert_eq!(
            PositionUtils::get_strict_position_status(1u128 << 64, -443_637, 64).unwrap_err(),
            MathError::TickIndexOutOfBounds.into()
        );
    }
}
