#![no_main]

use arbitrary::{Arbitrary, Unstructured};
use honggfuzz::fuzz;
use yevefi_sdk::math::swap_math::compute_swap_step;
use yevefi_sdk::utils::constants::{MAX_FEE_RATE, MAX_SQRT_PRICE_X64, MIN_SQRT_PRICE_X64};

#[derive(Debug, Clone)]
struct StepInput {
    amount_remaining: u64,
    fee_rate: u16,
    liquidity: u128,
    sqrt_price_current: u128,
    sqrt_price_target: u128,
    amount_specified_is_input: bool,
    a_to_b: bool,
}

impl<'a> Arbitrary<'a> for StepInput {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        let p0 = u.int_in_range(MIN_SQRT_PRICE_X64..=MAX_SQRT_PRICE_X64)?;
        let p1 = u.int_in_range(MIN_SQRT_PRICE_X64..=MAX_SQRT_PRICE_X64)?;
        let a_to_b: bool = u.arbitrary()?;
        // The target always lies in the trade direction.
        let (sqrt_price_current, sqrt_price_target) = if a_to_b == (p0 >= p1) {
            (p0, p1)
        } else {
            (p1, p0)
        };

        Ok(StepInput {
            amount_remaining: u.arbitrary()?,
            fee_rate: u.int_in_range(0..=MAX_FEE_RATE)?,
            liquidity: u.int_in_range(0..=u64::MAX as u128 * 1_000)?,
            sqrt_price_current,
            sqrt_price_target,
            amount_specified_is_input: u.arbitrary()?,
            a_to_b,
        })
    }
}

fn fuzz_swap_step(input: StepInput) {
    let Ok(step) = compute_swap_step(
        input.amount_remaining,
        input.fee_rate,
        input.liquidity,
        input.sqrt_price_current,
        input.sqrt_price_target,
        input.amount_specified_is_input,
        input.a_to_b,
    ) else {
        return;
    };

    // The step never overshoots the target.
    let (lower, upper) = if input.a_to_b {
        (input.sqrt_price_target, input.sqrt_price_current)
    } else {
        (input.sqrt_price_current, input.sqrt_price_target)
    };
    assert!((lower..=upper).contains(&step.next_price));

    if input.amount_specified_is_input {
        let spent = step.amount_in as u128 + step.fee_amount as u128;
        assert!(spent <= input.amount_remaining as u128);
        // Stopping short of the target spends everything.
        if step.next_price != input.sqrt_price_target {
            assert_eq!(spent, input.amount_remaining as u128);
        }
    } else {
        assert!(step.amount_out <= input.amount_remaining);
    }

    if input.fee_rate == 0 {
        assert!(
            step.fee_amount == 0
                || input.amount_specified_is_input && step.next_price != input.sqrt_price_target
        );
    }
}

fn main() {
    loop {
        fuzz!(|data: StepInput| {
            fuzz_swap_step(data);
        });
    }
}
