#![no_main]

use arbitrary::{Arbitrary, Unstructured};
use honggfuzz::fuzz;
use yevefi_sdk::math::token_math::{get_amount_delta_a, get_amount_delta_b, get_next_sqrt_price};
use yevefi_sdk::utils::constants::{MAX_SQRT_PRICE_X64, MIN_SQRT_PRICE_X64};

type DeltaFn = fn(u128, u128, u128, bool) -> anchor_lang::Result<u64>;

#[derive(Debug, Clone)]
struct DeltaInput {
    sqrt_price_0: u128,
    sqrt_price_1: u128,
    liquidity: u128,
    amount: u64,
    a_to_b: bool,
}

impl<'a> Arbitrary<'a> for DeltaInput {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        let sqrt_price_0 = u.int_in_range(MIN_SQRT_PRICE_X64..=MAX_SQRT_PRICE_X64)?;
        let sqrt_price_1 = u.int_in_range(MIN_SQRT_PRICE_X64..=MAX_SQRT_PRICE_X64)?;
        let liquidity = match u.int_in_range(0..=3)? {
            0 => u.int_in_range(0..=u64::MAX as u128)?,
            1 => *u.choose(&[0, 1, u64::MAX as u128, u128::MAX])?,
            _ => u.arbitrary()?,
        };

        Ok(DeltaInput {
            sqrt_price_0,
            sqrt_price_1,
            liquidity,
            amount: u.arbitrary()?,
            a_to_b: u.arbitrary()?,
        })
    }
}

fn fuzz_token_delta(input: DeltaInput) {
    let DeltaInput {
        sqrt_price_0,
        sqrt_price_1,
        liquidity,
        amount,
        a_to_b,
    } = input;

    // Deltas are symmetric in price order and rounding up adds at most one.
    let deltas: [DeltaFn; 2] = [get_amount_delta_a, get_amount_delta_b];
    for delta in deltas {
        let down = delta(sqrt_price_0, sqrt_price_1, liquidity, false);
        let up = delta(sqrt_price_0, sqrt_price_1, liquidity, true);
        if let (Ok(down), Ok(up)) = (&down, &up) {
            assert!(*up >= *down && *up - *down <= 1);
        }
        if let Ok(swapped) = delta(sqrt_price_1, sqrt_price_0, liquidity, false) {
            assert_eq!(down.ok(), Some(swapped));
        }
        if sqrt_price_0 == sqrt_price_1 || liquidity == 0 {
            assert_eq!(down.ok(), Some(0));
        }
    }

    // Exact input moves the price in the trade direction by no more than the
    // amount pays for.
    if liquidity == 0 {
        return;
    }
    let Ok(next) = get_next_sqrt_price(sqrt_price_0, liquidity, amount, true, a_to_b) else {
        return;
    };
    assert!((MIN_SQRT_PRICE_X64..=MAX_SQRT_PRICE_X64).contains(&next));
    if a_to_b {
        assert!(next <= sqrt_price_0);
        if let Ok(cost) = get_amount_delta_a(sqrt_price_0, next, liquidity, true) {
            assert!(cost <= amount);
        }
    } else {
        assert!(next >= sqrt_price_0);
        if let Ok(cost) = get_amount_delta_b(sqrt_price_0, next, liquidity, true) {
            assert!(cost <= amount);
        }
    }
}

fn main() {
    loop {
        fuzz!(|data: DeltaInput| {
            fuzz_token_delta(data);
        });
    }
}
