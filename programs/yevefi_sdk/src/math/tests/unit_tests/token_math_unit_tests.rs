#[cfg(test)]
mod tests {
    use crate::error::{MathError, TokenError};
    use crate::math::price_math::tick_index_to_sqrt_price_x64;
    use crate::math::token_math::*;
    use crate::utils::constants::*;
    use crate::utils::Percentage;

    const ONE: u128 = 1u128 << 64;

    #[test]
    fn test_amount_delta_a() {
        let upper = tick_index_to_sqrt_price_x64(64).unwrap();
        assert_eq!(get_amount_delta_a(ONE, upper, 1_000_000, false).unwrap(), 3_194);
        assert_eq!(get_amount_delta_a(ONE, upper, 1_000_000, true).unwrap(), 3_195);
        // Order of the prices does not matter.
        assert_eq!(get_amount_delta_a(upper, ONE, 1_000_000, true).unwrap(), 3_195);
        assert_eq!(get_amount_delta_a(ONE, ONE, 1_000_000, true).unwrap(), 0);
    }

    #[test]
    fn test_amount_delta_b() {
        let upper = tick_index_to_sqrt_price_x64(64).unwrap();
        assert_eq!(get_amount_delta_b(ONE, upper, 1_000_000, false).unwrap(), 3_204);
        assert_eq!(get_amount_delta_b(upper, ONE, 1_000_000, true).unwrap(), 3_205);
        assert_eq!(get_amount_delta_b(ONE, upper, 0, true).unwrap(), 0);
    }

    #[test]
    fn test_amount_delta_a_exceeds_u64() {
        let res = get_amount_delta_a(MIN_SQRT_PRICE_X64, MAX_SQRT_PRICE_X64, u64::MAX as u128, false);
        assert_eq!(res.unwrap_err(), TokenError::TokenMaxExceeded.into());
    }

    #[test]
    fn test_amount_delta_a_zero_price() {
        let res = get_amount_delta_a(0, ONE, 1, false);
        assert_eq!(res.unwrap_err(), MathError::DivideByZero.into());
    }

    #[test]
    fn test_amount_delta_b_product_overflow() {
        let res = get_amount_delta_b(MIN_SQRT_PRICE_X64, MAX_SQRT_PRICE_X64, u64::MAX as u128, false);
        assert_eq!(
            res.unwrap_err(),
            MathError::MultiplicationShiftRightOverflow.into()
        );
    }

    #[test]
    fn test_next_sqrt_price_from_a() {
        // a in, price falls and rounds up
        assert_eq!(
            get_next_sqrt_price(ONE, 1_000_000, 1_000, true, true).unwrap(),
            18_428_315_757_951_600_016
        );
        // a out, price rises and rounds up
        assert_eq!(
            get_next_sqrt_price(ONE, 1_000_000, 1_000, false, false).unwrap(),
            18_465_209_282_992_544_161
        );
    }

    #[test]
    fn test_next_sqrt_price_from_b() {
        // b in, price rises and rounds down
        assert_eq!(
            get_next_sqrt_price(ONE, 1_000_000, 1_000, true, false).unwrap(),
            18_465_190_817_783_261_167
        );
        // b out, price falls and rounds down
        assert_eq!(
            get_next_sqrt_price(ONE, 1_000_000, 1_000, false, true).unwrap(),
            18_428_297_329_635_842_064
        );
    }

    #[test]
    fn test_next_sqrt_price_zero_amount() {
        assert_eq!(get_next_sqrt_price(ONE, 1_000_000, 0, true, true).unwrap(), ONE);
        assert_eq!(get_next_sqrt_price(ONE, 1_000_000, 0, true, false).unwrap(), ONE);
    }

    #[test]
    fn test_next_sqrt_price_errors() {
        // Removing more token a than the range holds.
        let res = get_next_sqrt_price(ONE, 1_000, 1_000, false, false);
        assert_eq!(res.unwrap_err(), MathError::DivideByZero.into());

        // Removing more token b than the price allows.
        let res = get_next_sqrt_price(ONE, 1, 2, false, true);
        assert_eq!(res.unwrap_err(), TokenError::TokenMinSubceeded.into());

        // Pushing the price above the maximum.
        let res = get_next_sqrt_price(MAX_SQRT_PRICE_X64 - 1, 1, 1_000, true, false);
        assert_eq!(res.unwrap_err(), TokenError::TokenMaxExceeded.into());
    }

    #[test]
    fn test_adjust_for_slippage() {
        let one_percent = Percentage::from_fraction(1, 100);
        assert_eq!(adjust_for_slippage(1_000, one_percent, true).unwrap(), 1_010);
        assert_eq!(adjust_for_slippage(1_000, one_percent, false).unwrap(), 990);
        assert_eq!(adjust_for_slippage(1_000, Percentage::zero(), true).unwrap(), 1_000);
        assert_eq!(adjust_for_slippage(u64::MAX, one_percent, true).unwrap(), u64::MAX);
        assert_eq!(
            adjust_for_slippage(1, Percentage::from_fraction(1, 0), true).unwrap_err(),
            MathError::DivideByZero.into()
        );
    }
}
