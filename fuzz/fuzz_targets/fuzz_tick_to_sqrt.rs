#![no_main]

use arbitrary::{Arbitrary, Unstructured};
use honggfuzz::fuzz;
use yevefi_sdk::error::MathError;
use yevefi_sdk::math::price_math::{sqrt_price_x64_to_tick_index, tick_index_to_sqrt_price_x64};
use yevefi_sdk::utils::constants::{
    MAX_SQRT_PRICE_X64, MAX_TICK_INDEX, MIN_SQRT_PRICE_X64, MIN_TICK_INDEX,
};

#[derive(Debug, Clone)]
struct TickInput {
    tick: i32,
}

impl<'a> Arbitrary<'a> for TickInput {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        let tick = match u.int_in_range(0..=100)? {
            0..=80 => u.int_in_range(MIN_TICK_INDEX..=MAX_TICK_INDEX)?,
            81..=90 => *u.choose(&[MIN_TICK_INDEX, MAX_TICK_INDEX, 0, -1, 1])?,
            _ => u.arbitrary::<i32>()?,
        };

        Ok(TickInput { tick })
    }
}

fn fuzz_tick_to_sqrt(input: TickInput) {
    let tick = input.tick;
    match tick_index_to_sqrt_price_x64(tick) {
        Ok(sqrt_price) => {
            assert!((MIN_TICK_INDEX..=MAX_TICK_INDEX).contains(&tick));
            assert!((MIN_SQRT_PRICE_X64..=MAX_SQRT_PRICE_X64).contains(&sqrt_price));

            // Exact tick prices map back to their tick.
            assert_eq!(sqrt_price_x64_to_tick_index(sqrt_price).unwrap(), tick);

            if tick < MAX_TICK_INDEX {
                let next = tick_index_to_sqrt_price_x64(tick + 1).unwrap();
                assert!(next > sqrt_price);

                // Any price strictly between two ticks floors to the lower one.
                if next - sqrt_price > 1 {
                    assert_eq!(sqrt_price_x64_to_tick_index(next - 1).unwrap(), tick);
                }
            }
        }
        Err(e) => {
            assert_eq!(e, MathError::TickIndexOutOfBounds.into());
            assert!(!(MIN_TICK_INDEX..=MAX_TICK_INDEX).contains(&tick));
        }
    }
}

fn main() {
    loop {
        fuzz!(|data: TickInput| {
            fuzz_tick_to_sqrt(data);
        });
    }
}
