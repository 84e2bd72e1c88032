#[cfg(test)]
mod tests {
    use crate::math::price_math::tick_index_to_sqrt_price_x64;
    use crate::math::swap_math::*;
    use crate::utils::constants::*;

    const ONE: u128 = 1u128 << 64;

    #[test]
    fn test_exact_input_partial_step() {
        let step = compute_swap_step(1_000, 3_000, 1_000_000, ONE, MIN_SQRT_PRICE_X64, true, true)
            .unwrap();
        assert_eq!(
            step,
            SwapStepComputation {
                amount_in: 997,
                amount_out: 996,
                next_price: 18_428_370_987_834_680_440,
                fee_amount: 3,
            }
        );
        // A partial exact-input step keeps the whole remainder.
        assert_eq!(step.amount_in + step.fee_amount, 1_000);
    }

    #[test]
    fn test_exact_input_reaches_target() {
        let target = tick_index_to_sqrt_price_x64(-64).unwrap();
        let step =
            compute_swap_step(1_000_000_000, 3_000, 1_000_000, ONE, target, true, true).unwrap();
        assert_eq!(
            step,
            SwapStepComputation {
                amount_in: 3_205,
                amount_out: 3_194,
                next_price: target,
                fee_amount: 10,
            }
        );
    }

    #[test]
    fn test_exact_output_step() {
        let step = compute_swap_step(1_000, 3_000, 1_000_000, ONE, MAX_SQRT_PRICE_X64, false, false)
            .unwrap();
        assert_eq!(
            step,
            SwapStepComputation {
                amount_in: 1_002,
                amount_out: 1_000,
                next_price: 18_465_209_282_992_544_161,
                fee_amount: 4,
            }
        );
    }

    #[test]
    fn test_zero_liquidity_jumps_to_target() {
        let target = tick_index_to_sqrt_price_x64(-64).unwrap();
        let step = compute_swap_step(1_000, 3_000, 0, ONE, target, true, true).unwrap();
        assert_eq!(step.next_price, target);
        assert_eq!(step.amount_in, 0);
        assert_eq!(step.amount_out, 0);
        assert_eq!(step.fee_amount, 0);
    }

    #[test]
    fn test_zero_fee_rate() {
        let step = compute_swap_step(1_000, 0, 1_000_000, ONE, MIN_SQRT_PRICE_X64, true, true)
            .unwrap();
        assert_eq!(step.fee_amount, 0);
        assert_eq!(step.amount_in, 1_000);
    }
}
