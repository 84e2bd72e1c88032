#[cfg(test)]
mod tests {
    use crate::error::{LiquidityError, MathError};
    use crate::math::liquidity_math::*;
    use crate::math::price_math::tick_index_to_sqrt_price_x64;
    use crate::utils::constants::MAX_SQRT_PRICE_X64;

    #[test]
    fn test_add_liquidity_delta() {
        assert_eq!(add_liquidity_delta(100, 50).unwrap(), 150);
        assert_eq!(add_liquidity_delta(100, -100).unwrap(), 0);
        assert_eq!(add_liquidity_delta(0, 0).unwrap(), 0);
    }

    #[test]
    fn test_add_liquidity_delta_errors() {
        assert_eq!(
            add_liquidity_delta(100, -101).unwrap_err(),
            LiquidityError::LiquidityUnderflow.into()
        );
        assert_eq!(
            add_liquidity_delta(u128::MAX, 1).unwrap_err(),
            LiquidityError::LiquidityOverflow.into()
        );
    }

    #[test]
    fn test_cross_direction() {
        // Moving left removes the net, moving right adds it.
        assert_eq!(next_liquidity_after_cross(1_000, 400, true).unwrap(), 600);
        assert_eq!(next_liquidity_after_cross(1_000, 400, false).unwrap(), 1_400);
        assert_eq!(next_liquidity_after_cross(1_000, -400, true).unwrap(), 1_400);
        assert_eq!(
            next_liquidity_after_cross(1_000, -1_001, false).unwrap_err(),
            LiquidityError::LiquidityUnderflow.into()
        );
    }

    #[test]
    fn test_cross_min_net() {
        let magnitude = i128::MIN.unsigned_abs();
        assert_eq!(next_liquidity_after_cross(0, i128::MIN, true).unwrap(), magnitude);
        assert_eq!(
            next_liquidity_after_cross(magnitude, i128::MIN, true).unwrap_err(),
            LiquidityError::LiquidityOverflow.into()
        );
    }

    #[test]
    fn test_liquidity_from_token_amounts() {
        let lower = tick_index_to_sqrt_price_x64(-128).unwrap();
        let upper = tick_index_to_sqrt_price_x64(128).unwrap();

        assert_eq!(get_liquidity_from_token_a(1_000_000, lower, upper, false).unwrap(), 78_128_372);
        assert_eq!(get_liquidity_from_token_a(1_000_000, lower, upper, true).unwrap(), 78_128_373);
        assert_eq!(get_liquidity_from_token_b(1_000_000, lower, upper, false).unwrap(), 78_128_372);
        assert_eq!(get_liquidity_from_token_b(1_000_000, lower, upper, true).unwrap(), 78_128_373);
        assert_eq!(get_liquidity_from_token_a(0, lower, upper, true).unwrap(), 0);
    }

    #[test]
    fn test_liquidity_from_token_amounts_errors() {
        let price = 1u128 << 64;
        assert_eq!(
            get_liquidity_from_token_a(1, price, price, false).unwrap_err(),
            MathError::DivideByZero.into()
        );
        assert_eq!(
            get_liquidity_from_token_b(1, price + 1, price, false).unwrap_err(),
            MathError::DivideByZero.into()
        );
        assert_eq!(
            get_liquidity_from_token_a(
                u64::MAX,
                MAX_SQRT_PRICE_X64 - 1,
                MAX_SQRT_PRICE_X64,
                false
            )
            .unwrap_err(),
            LiquidityError::LiquidityOverflow.into()
        );
    }

    #[test]
    fn test_token_amounts_from_liquidity_by_price_position() {
        let lower = tick_index_to_sqrt_price_x64(-128).unwrap();
        let upper = tick_index_to_sqrt_price_x64(128).unwrap();
        let liquidity = 1_000_000_000;

        // A price on a bound counts as outside the range.
        assert_eq!(
            get_token_amounts_from_liquidity(liquidity, lower, lower, upper, false).unwrap(),
            (12_799_447, 0)
        );
        assert_eq!(
            get_token_amounts_from_liquidity(liquidity, upper, lower, upper, true).unwrap(),
            (0, 12_799_448)
        );
        assert_eq!(
            get_token_amounts_from_liquidity(liquidity, 1u128 << 64, lower, upper, false).unwrap(),
            (6_379_245, 6_379_245)
        );
        assert_eq!(
            get_token_amounts_from_liquidity(liquidity, 1u128 << 64, lower, upper, true).unwrap(),
            (6_379_246, 6_379_246)
        );
    }
}
