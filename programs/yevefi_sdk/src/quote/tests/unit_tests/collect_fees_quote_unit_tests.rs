#[cfg(test)]
mod tests {
    use crate::error::MathError;
    use crate::quote::collect_fees_quote::*;
    use crate::quote::tests::fixtures::pool;
    use crate::state::{Position, Tick, Yevefi};

    const HALF_X64: u128 = 1 << 63;
    const QUARTER_X64: u128 = 1 << 62;

    fn tick(fee_growth_outside_a: u128, fee_growth_outside_b: u128) -> Tick {
        Tick {
            initialized: true,
            fee_growth_outside_a,
            fee_growth_outside_b,
            ..Default::default()
        }
    }

    fn position(fee_growth_checkpoint_a: u128, fee_owed_a: u64) -> Position {
        Position {
            liquidity: 1_000_000_000,
            tick_lower_index: -128,
            tick_upper_index: 128,
            fee_growth_checkpoint_a,
            fee_owed_a,
            ..Default::default()
        }
    }

    fn pool_at(tick_current_index: i32) -> Yevefi {
        Yevefi {
            tick_current_index,
            fee_growth_global_a: (2u128 << 64) + 12_345,
            fee_growth_global_b: 3u128 << 64,
            ..pool(1_000_000_000)
        }
    }

    #[test]
    fn test_in_range_position_accrues_since_checkpoint() {
        // inside = global - lower outside - upper outside = 1.25, checkpoint 1.0
        let quote = collect_fees_quote(
            &pool_at(0),
            &position(1u128 << 64, 7),
            &tick(HALF_X64, 0),
            &tick(QUARTER_X64, 0),
        )
        .unwrap();
        assert_eq!(quote.fee_owed_a, 250_000_007);
        assert_eq!(quote.fee_owed_b, 3_000_000_000);
    }

    #[test]
    fn test_out_of_range_uses_outside_values_only() {
        let lower = tick(HALF_X64, 0);
        let upper = tick(QUARTER_X64, 0);

        // Below the range only the growth between the two ticks counts.
        let quote = collect_fees_quote(&pool_at(-200), &position(0, 0), &lower, &upper).unwrap();
        assert_eq!(quote.fee_owed_a, 250_000_000);

        // Above the range the inside growth is upper - lower, which wraps here.
        let wrapped_checkpoint = 0u128.wrapping_sub(QUARTER_X64);
        let quote = collect_fees_quote(
            &pool_at(200),
            &position(wrapped_checkpoint, 11),
            &lower,
            &upper,
        )
        .unwrap();
        assert_eq!(quote.fee_owed_a, 11);

        let upper = tick(3u128 << 61, 0);
        let quote = collect_fees_quote(
            &pool_at(200),
            &position(wrapped_checkpoint, 11),
            &lower,
            &upper,
        )
        .unwrap();
        assert_eq!(quote.fee_owed_a, 125_000_011);
    }

    #[test]
    fn test_uninitialized_bounds_accrue_nothing() {
        let quote = collect_fees_quote(
            &pool_at(0),
            &position(0, 42),
            &Tick::default(),
            &Tick::default(),
        )
        .unwrap();
        assert_eq!(quote.fee_owed_a, 42);
        assert_eq!(quote.fee_owed_b, 0);
    }

    #[test]
    fn test_empty_position_owes_only_banked_fees() {
        let mut empty = position(0, 9);
        empty.liquidity = 0;
        let quote =
            collect_fees_quote(&pool_at(0), &empty, &tick(HALF_X64, 0), &tick(0, 0)).unwrap();
        assert_eq!(quote.fee_owed_a, 9);
        assert_eq!(quote.fee_owed_b, 0);
    }

    #[test]
    fn test_owed_amount_must_fit_u64() {
        let mut whale = position(0, 0);
        whale.liquidity = u128::MAX;
        let res = collect_fees_quote(&pool_at(0), &whale, &tick(0, 0), &tick(0, 0));
        assert_eq!(
            res.unwrap_err(),
            MathError::MultiplicationShiftRightOverflow.into()
        );
    }
}
