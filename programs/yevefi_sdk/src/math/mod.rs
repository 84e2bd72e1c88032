pub mod bit_math;
pub mod liquidity_math;
pub mod price_math;
pub mod swap_math;
pub mod token_math;
