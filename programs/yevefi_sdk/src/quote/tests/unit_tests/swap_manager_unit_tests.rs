#[cfg(test)]
mod tests {
    use crate::error::{LiquidityError, SwapError};
    use crate::math::price_math::tick_index_to_sqrt_price_x64;
    use crate::quote::swap_manager::*;
    use crate::quote::tests::fixtures::*;
    use crate::quote::tick_array_sequence::TickArraySequence;
    use crate::state::{TickArrayState, Yevefi, YevefiRewardInfo};
    use crate::utils::constants::{MAX_SQRT_PRICE_X64, MIN_SQRT_PRICE_X64};
    use anchor_lang::prelude::*;

    fn run(
        pool: &Yevefi,
        arrays: &[TickArrayState],
        amount: u64,
        sqrt_price_limit: u128,
        amount_specified_is_input: bool,
        a_to_b: bool,
    ) -> Result<SwapResult> {
        let mut sequence = TickArraySequence::new(arrays, pool.tick_spacing, a_to_b)?;
        compute_swap(
            pool,
            &mut sequence,
            amount,
            sqrt_price_limit,
            amount_specified_is_input,
            a_to_b,
            pool.reward_last_updated_timestamp,
        )
    }

    #[test]
    fn test_exact_input_a_to_b_single_step() {
        let pool = pool(1_000_000);
        let arrays = tick_arrays(&[(0, &[]), (-704, &[])]);
        let result = run(&pool, &arrays, 1_000, MIN_SQRT_PRICE_X64, true, true).unwrap();

        assert_eq!(result.amount_a, 1_000);
        assert_eq!(result.amount_b, 996);
        assert_eq!(result.next_tick_index, -20);
        assert_eq!(result.next_sqrt_price, 18_428_370_987_834_680_440);
        assert_eq!(result.total_fee_amount, 3);
        assert_eq!(result.next_fee_growth_global, 55_340_232_221_128);
        assert_eq!(result.next_protocol_fee, 0);
        assert_eq!(result.next_liquidity, 1_000_000);
        assert!(result.crossed_ticks.is_empty());
    }

    #[test]
    fn test_exact_input_b_to_a_single_step() {
        let pool = pool(1_000_000);
        let arrays = tick_arrays(&[(0, &[])]);
        let result = run(&pool, &arrays, 10_000, MAX_SQRT_PRICE_X64, true, false).unwrap();

        assert_eq!(result.amount_a, 9_871);
        assert_eq!(result.amount_b, 10_000);
        assert_eq!(result.next_tick_index, 198);
        assert_eq!(result.next_sqrt_price, 18_630_658_112_124_435_845);
        assert_eq!(result.total_fee_amount, 30);
        assert_eq!(result.next_fee_growth_global, (30u128 << 64) / 1_000_000);
    }

    #[test]
    fn test_protocol_fee_split() {
        let pool = pool(1_000_000_000);
        let arrays = tick_arrays(&[(0, &[])]);
        let result = run(&pool, &arrays, 1_000_000, MAX_SQRT_PRICE_X64, true, false).unwrap();

        assert_eq!(result.amount_a, 996_006);
        assert_eq!(result.amount_b, 1_000_000);
        assert_eq!(result.next_tick_index, 19);
        assert_eq!(result.next_sqrt_price, 18_465_135_477_551_040_038);
        assert_eq!(result.total_fee_amount, 3_000);
        // 3% of the fee goes to the protocol, the rest grows per unit of liquidity.
        assert_eq!(result.next_protocol_fee, 90);
        assert_eq!(result.next_fee_growth_global, (2_910u128 << 64) / 1_000_000_000);
        assert_eq!(result.next_fee_growth_global, 53_680_025_254_494);
    }

    #[test]
    fn test_cross_tick_a_to_b() {
        let mut pool = pool(1_000_000);
        pool.reward_infos[0] = YevefiRewardInfo {
            mint: Pubkey::new_unique(),
            growth_global_x64: 1_000,
            ..Default::default()
        };
        let mut arrays = tick_arrays(&[(0, &[]), (-704, &[(-64, 500_000)])]);
        let tick = arrays[1]
            .data
            .as_mut()
            .unwrap()
            .get_tick_mut(-64, TICK_SPACING)
            .unwrap();
        tick.fee_growth_outside_b = 5;
        tick.reward_growths_outside = [3, 7, 0];

        let result = run(&pool, &arrays, 10_000, MIN_SQRT_PRICE_X64, true, true).unwrap();

        assert_eq!(result.amount_a, 10_000);
        assert_eq!(result.amount_b, 9_825);
        assert_eq!(result.next_tick_index, -332);
        assert_eq!(result.next_sqrt_price, 18_143_155_291_881_382_531);
        assert_eq!(result.total_fee_amount, 31);
        assert_eq!(result.next_liquidity, 500_000);
        assert_eq!(result.next_fee_growth_global, 959_230_691_832_896);

        // Values as of the crossing: 10 of fee accrued on 1e6 liquidity so far.
        assert_eq!(
            result.crossed_ticks,
            vec![CrossedTick {
                tick_index: -64,
                fee_growth_outside_a: 184_467_440_737_095,
                fee_growth_outside_b: 0u128.wrapping_sub(5),
                reward_growths_outside: [997, 7, 0],
            }]
        );
    }

    #[test]
    fn test_stop_before_tick() {
        let pool = pool(1_000_000);
        let arrays = tick_arrays(&[(0, &[]), (-704, &[(-64, 500_000)])]);
        let result = run(&pool, &arrays, 2_000, MIN_SQRT_PRICE_X64, true, true).unwrap();

        assert_eq!(result.amount_a, 2_000);
        assert_eq!(result.amount_b, 1_990);
        assert_eq!(result.next_tick_index, -40);
        assert_eq!(result.next_sqrt_price, 18_410_034_464_986_368_797);
        assert_eq!(result.total_fee_amount, 6);
        assert_eq!(result.next_liquidity, 1_000_000);
        assert!(result.crossed_ticks.is_empty());
    }

    #[test]
    fn test_cross_tick_b_to_a() {
        let pool = pool(1_000_000);
        let arrays = tick_arrays(&[(0, &[(64, 500_000)])]);
        let result = run(&pool, &arrays, 10_000, MAX_SQRT_PRICE_X64, true, false).unwrap();

        assert_eq!(result.amount_a, 9_884);
        assert_eq!(result.amount_b, 10_000);
        assert_eq!(result.next_tick_index, 153);
        assert_eq!(result.next_sqrt_price, 18_589_047_760_101_297_645);
        assert_eq!(result.total_fee_amount, 31);
        assert_eq!(result.next_liquidity, 1_500_000);
        assert_eq!(result.next_fee_growth_global, 442_721_857_769_028);
        assert_eq!(result.crossed_ticks.len(), 1);
        assert_eq!(result.crossed_ticks[0].tick_index, 64);
    }

    #[test]
    fn test_exact_output() {
        let pool = pool(1_000_000);
        let arrays = tick_arrays(&[(0, &[]), (-704, &[(-64, 500_000)])]);
        let result = run(&pool, &arrays, 5_000, MIN_SQRT_PRICE_X64, false, true).unwrap();

        // Input includes the fee.
        assert_eq!(result.amount_a, 5_046);
        assert_eq!(result.amount_b, 5_000);
        assert_eq!(result.next_tick_index, -137);
        assert_eq!(result.next_sqrt_price, 18_321_182_141_599_352_451);
        assert_eq!(result.total_fee_amount, 16);
        assert_eq!(result.next_liquidity, 500_000);
        assert_eq!(result.next_fee_growth_global, 405_828_369_621_609);

        let arrays = tick_arrays(&[(0, &[])]);
        let result = run(&pool, &arrays, 5_000, MAX_SQRT_PRICE_X64, false, false).unwrap();
        assert_eq!(result.amount_a, 5_000);
        assert_eq!(result.amount_b, 5_042);
        assert_eq!(result.next_tick_index, 100);
        assert_eq!(result.next_sqrt_price, 18_539_441_280_110_102_127);
        assert_eq!(result.total_fee_amount, 16);
    }

    #[test]
    fn test_stops_at_price_limit() {
        let pool = pool(1_000_000);
        let arrays = tick_arrays(&[(0, &[]), (-704, &[])]);
        let limit = tick_index_to_sqrt_price_x64(-10).unwrap();
        let result = run(&pool, &arrays, 1_000_000, limit, true, true).unwrap();

        assert_eq!(result.amount_a, 503);
        assert_eq!(result.amount_b, 499);
        assert_eq!(result.next_sqrt_price, limit);
        assert_eq!(result.next_tick_index, -10);
        assert_eq!(result.total_fee_amount, 2);
    }

    #[test]
    fn test_zero_liquidity_moves_price_only() {
        let pool = pool(0);
        let arrays = tick_arrays(&[(0, &[]), (-704, &[])]);
        let limit = tick_index_to_sqrt_price_x64(-10).unwrap();
        let result = run(&pool, &arrays, 1_000, limit, true, true).unwrap();

        assert_eq!((result.amount_a, result.amount_b), (0, 0));
        assert_eq!(result.next_sqrt_price, limit);
        assert_eq!(result.next_tick_index, -10);
        assert_eq!(result.total_fee_amount, 0);
        assert_eq!(result.next_fee_growth_global, 0);
    }

    #[test]
    fn test_limit_at_current_price_is_noop() {
        let pool = pool(1_000_000);
        let arrays = tick_arrays(&[(0, &[])]);
        let result = run(&pool, &arrays, 1_000, pool.sqrt_price, true, true).unwrap();

        assert_eq!((result.amount_a, result.amount_b), (0, 0));
        assert_eq!(result.next_tick_index, 0);
        assert_eq!(result.next_sqrt_price, pool.sqrt_price);
    }

    #[test]
    fn test_runs_out_of_tick_arrays() {
        let pool = pool(1_000_000);

        let full = tick_arrays(&[(0, &[]), (-704, &[]), (-1_408, &[])]);
        let res = run(&pool, &full, 1_000_000, MIN_SQRT_PRICE_X64, true, true);
        assert_eq!(res.unwrap_err(), SwapError::TickArrayCrossingAboveMax.into());

        let short = tick_arrays(&[(0, &[]), (-704, &[])]);
        let res = run(&pool, &short, 1_000_000, MIN_SQRT_PRICE_X64, true, true);
        assert_eq!(res.unwrap_err(), SwapError::TickArraySequenceInvalid.into());
    }

    #[test]
    fn test_liquidity_underflow_on_cross() {
        let pool = pool(1_000_000);
        let arrays = tick_arrays(&[(0, &[(64, -2_000_000)])]);
        let res = run(&pool, &arrays, 1_000_000, MAX_SQRT_PRICE_X64, true, false);
        assert_eq!(res.unwrap_err(), LiquidityError::LiquidityUnderflow.into());
    }

    #[test]
    fn test_reward_growth_at_timestamp() {
        let mut pool = pool(1_000_000);
        pool.reward_last_updated_timestamp = 100;
        pool.reward_infos[0] = YevefiRewardInfo {
            mint: Pubkey::new_unique(),
            emissions_per_second_x64: 1u128 << 64,
            ..Default::default()
        };
        let arrays = tick_arrays(&[(0, &[])]);

        let mut sequence = TickArraySequence::new(&arrays, TICK_SPACING, false).unwrap();
        let result = compute_swap(
            &pool,
            &mut sequence,
            10_000,
            MAX_SQRT_PRICE_X64,
            true,
            false,
            110,
        )
        .unwrap();
        assert_eq!(result.next_reward_infos[0].growth_global_x64, 184_467_440_737_095);

        let mut sequence = TickArraySequence::new(&arrays, TICK_SPACING, false).unwrap();
        let res = compute_swap(
            &pool,
            &mut sequence,
            10_000,
            MAX_SQRT_PRICE_X64,
            true,
            false,
            99,
        );
        assert_eq!(res.unwrap_err(), SwapError::InvalidTimestamp.into());
    }
}
