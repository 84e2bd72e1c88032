#![no_main]

use arbitrary::Arbitrary;
use ethnum::U256;
use honggfuzz::fuzz;
use yevefi_sdk::error::MathError;
use yevefi_sdk::math::bit_math::checked_mul_div_u128;

#[derive(Debug, Clone, Arbitrary)]
struct MulDivInput {
    n0: u128,
    n1: u128,
    d: u128,
    round_up: bool,
}

fn fuzz_mul_div(input: MulDivInput) {
    let MulDivInput {
        n0,
        n1,
        d,
        round_up,
    } = input;

    match checked_mul_div_u128(n0, n1, d, round_up) {
        Ok(value) => {
            assert!(d != 0);

            let product = U256::from(n0) * U256::from(n1);
            let expected = product / U256::from(d);
            let rounds = round_up && product % U256::from(d) != U256::ZERO;
            let expected = if rounds { expected + U256::ONE } else { expected };
            assert_eq!(U256::from(value), expected);

            if n0 == 0 || n1 == 0 {
                assert_eq!(value, 0);
            }
        }
        Err(e) => {
            if d == 0 {
                assert_eq!(e, MathError::DivideByZero.into());
            } else {
                assert_eq!(e, MathError::MulDivOverflow.into());
                let floor = U256::from(n0) * U256::from(n1) / U256::from(d);
                assert!(floor >= U256::from(u128::MAX));
            }
        }
    }
}

fn main() {
    loop {
        fuzz!(|data: MulDivInput| {
            fuzz_mul_div(data);
        });
    }
}
