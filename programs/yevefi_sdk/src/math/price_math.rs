//! # yevefi_sdk::math::price_math
//!
//! Conversions between tick index, Q64.64 sqrt price and decimal price.
//!
//! ## Main Components
//! - `tick_index_to_sqrt_price_x64`: table-driven binary exponentiation of `1.0001^(tick/2)`.
//!   Positive ticks accumulate in Q96 and are shifted down to Q64 at the end, non-positive
//!   ticks accumulate directly in Q64. The magic constants match the on-chain program
//!   bit for bit and must not be re-derived.
//! - `sqrt_price_x64_to_tick_index`: integer log2 with a 14-bit fractional refinement,
//!   converted to a log base `sqrt(1.0001)` and resolved between two candidate ticks.
//! - Decimal helpers (`price_to_sqrt_price_x64`, `sqrt_price_x64_to_price`, inversions):
//!   lossy `f64` conversions meant for display and UI inputs only.

use crate::error::MathError;
use crate::math::bit_math::isqrt;
use crate::utils::constants::{
    FRAC_BITS, MAX_SQRT_PRICE_X64, MAX_TICK_INDEX, MIN_SQRT_PRICE_X64, MIN_TICK_INDEX,
};
use crate::utils::tick_utils::TickUtils;
use crate::utils::Percentage;
use anchor_lang::prelude::*;
use ethnum::U256;

const BIT_PRECISION: u32 = 14;
const LOG_B_2_X32: i128 = 59_543_866_431_248;
const LOG_B_P_ERR_MARGIN_LOWER_X64: i128 = 184_467_440_737_095_516;
const LOG_B_P_ERR_MARGIN_UPPER_X64: i128 = 15_793_534_762_490_258_745;

// ---------- Tick -> sqrt price tables ---------------------------------------

const Q96: u128 = 79_228_162_514_264_337_593_543_950_336;

// sqrt(1.0001)^(2^i) in Q96, bit 0 is the accumulator seed.
const POSITIVE_RATIOS_X96: [u128; 19] = [
    79_232_123_823_359_799_118_286_999_567,
    79_236_085_330_515_764_027_303_304_731,
    79_244_008_939_048_815_603_706_035_061,
    79_259_858_533_276_714_757_314_932_305,
    79_291_567_232_598_584_799_939_703_904,
    79_355_022_692_464_371_645_785_046_466,
    79_482_085_999_252_804_386_437_311_141,
    79_736_823_300_114_093_921_829_183_326,
    80_248_749_790_819_932_309_965_073_892,
    81_282_483_887_344_747_381_513_967_011,
    83_390_072_131_320_151_908_154_831_281,
    87_770_609_709_833_776_024_991_924_138,
    97_234_110_755_111_693_312_479_820_773,
    119_332_217_159_966_728_226_237_229_890,
    179_736_315_981_702_064_433_883_588_727,
    407_748_233_172_238_350_107_850_275_304,
    2_098_478_828_474_011_932_436_660_412_517,
    55_581_415_166_113_811_149_459_800_483_533,
    38_992_368_544_603_139_932_233_054_999_993_551,
];

// sqrt(1.0001)^(-2^i) in Q64, bit 0 is the accumulator seed.
const NEGATIVE_RATIOS_X64: [u128; 19] = [
    18_445_821_805_675_392_311,
    18_444_899_583_751_176_498,
    18_443_055_278_223_354_162,
    18_439_367_220_385_604_838,
    18_431_993_317_065_449_817,
    18_417_254_355_718_160_513,
    18_387_811_781_193_591_352,
    18_329_067_761_203_520_168,
    18_212_142_134_806_087_854,
    17_980_523_815_641_551_639,
    17_526_086_738_831_147_013,
    16_651_378_430_235_024_244,
    15_030_750_278_693_429_944,
    12_247_334_978_882_834_399,
    8_131_365_268_884_726_200,
    3_584_323_654_723_342_297,
    696_457_651_847_595_233,
    26_294_789_957_452_057,
    37_481_735_321_082,
];

#[inline(always)]
fn accumulate_ratio(abs_tick: u32, table: &[u128; 19], one: u128, shift: u32) -> U256 {
    let mut ratio = if abs_tick & 1 != 0 {
        U256::from(table[0])
    } else {
        U256::from(one)
    };

    for (bit, coeff) in table.iter().enumerate().skip(1) {
        if abs_tick & (1 << bit) != 0 {
            // Both factors stay below 2^128, so the product fits in 256 bits.
            ratio = (ratio * U256::from(*coeff)) >> shift;
        }
    }
    ratio
}

/// Converts a tick index to its Q64.64 sqrt price.
///
/// # Errors
/// * `TickIndexOutOfBounds` if `tick` is outside `[MIN_TICK_INDEX, MAX_TICK_INDEX]`.
pub fn tick_index_to_sqrt_price_x64(tick: i32) -> Result<u128> {
    require!(
        (MIN_TICK_INDEX..=MAX_TICK_INDEX).contains(&tick),
        MathError::TickIndexOutOfBounds
    );

    let abs_tick = tick.unsigned_abs();
    let sqrt_price = if tick > 0 {
        accumulate_ratio(abs_tick, &POSITIVE_RATIOS_X96, Q96, 96) >> 32
    } else {
        accumulate_ratio(abs_tick, &NEGATIVE_RATIOS_X64, 1u128 << FRAC_BITS, 64)
    };

    Ok(sqrt_price.as_u128())
}

/// Converts a Q64.64 sqrt price to the tick index whose price is the greatest one
/// not above `sqrt_price_x64`.
///
/// # Errors
/// * `SqrtPriceOutOfBounds` if the input is outside `[MIN_SQRT_PRICE_X64, MAX_SQRT_PRICE_X64]`.
pub fn sqrt_price_x64_to_tick_index(sqrt_price_x64: u128) -> Result<i32> {
    require!(
        (MIN_SQRT_PRICE_X64..=MAX_SQRT_PRICE_X64).contains(&sqrt_price_x64),
        MathError::SqrtPriceOutOfBounds
    );

    // Integer part of log2, stored as X32.
    let msb = 127 - sqrt_price_x64.leading_zeros();
    let log2p_integer_x32 = (msb as i128 - 64) << 32;

    // Fractional part of log2 by repeated squaring, normalized to [2^63, 2^64).
    let mut bit: u128 = 0x8000_0000_0000_0000;
    let mut precision = 0;
    let mut log2p_fraction_x64: u128 = 0;
    let mut r = if msb >= 64 {
        sqrt_price_x64 >> (msb - 63)
    } else {
        sqrt_price_x64 << (63 - msb)
    };

    while bit > 0 && precision < BIT_PRECISION {
        r *= r;
        let r_more_than_two = r >> 127;
        r >>= 63 + r_more_than_two as u32;
        log2p_fraction_x64 += bit * r_more_than_two;
        bit >>= 1;
        precision += 1;
    }

    let log2p_fraction_x32 = (log2p_fraction_x64 >> 32) as i128;
    let log2p_x32 = log2p_integer_x32 + log2p_fraction_x32;

    // Change of base to sqrt(1.0001), then bracket with the error margins.
    let logbp_x64 = log2p_x32 * LOG_B_2_X32;
    let tick_low = ((logbp_x64 - LOG_B_P_ERR_MARGIN_LOWER_X64) >> 64) as i32;
    let tick_high = ((logbp_x64 + LOG_B_P_ERR_MARGIN_UPPER_X64) >> 64) as i32;

    if tick_low == tick_high {
        return Ok(tick_low);
    }

    // tick_high may land one past MAX_TICK_INDEX for inputs at the very top of the range.
    match tick_index_to_sqrt_price_x64(tick_high) {
        Ok(derived) if derived <= sqrt_price_x64 => Ok(tick_high),
        _ => Ok(tick_low),
    }
}

// ---------- Decimal price helpers (lossy) -----------------------------------

const X64_F64: f64 = 18_446_744_073_709_551_616.0;

/// `sqrt(price * 10^(decimals_b - decimals_a))` in Q64.64, truncated.
///
/// # Errors
/// * `InvalidPrice` if `price` is NaN, infinite or negative.
pub fn price_to_sqrt_price_x64(price: f64, decimals_a: u8, decimals_b: u8) -> Result<u128> {
    require!(price.is_finite() && price >= 0.0, MathError::InvalidPrice);

    let scale = 10f64.powi(decimals_b as i32 - decimals_a as i32);
    Ok(((price * scale).sqrt() * X64_F64) as u128)
}

pub fn sqrt_price_x64_to_price(sqrt_price_x64: u128, decimals_a: u8, decimals_b: u8) -> f64 {
    let sqrt_price = sqrt_price_x64 as f64 / X64_F64;
    sqrt_price * sqrt_price * 10f64.powi(decimals_a as i32 - decimals_b as i32)
}

pub fn tick_index_to_price(tick: i32, decimals_a: u8, decimals_b: u8) -> Result<f64> {
    Ok(sqrt_price_x64_to_price(
        tick_index_to_sqrt_price_x64(tick)?,
        decimals_a,
        decimals_b,
    ))
}

pub fn price_to_tick_index(price: f64, decimals_a: u8, decimals_b: u8) -> Result<i32> {
    sqrt_price_x64_to_tick_index(price_to_sqrt_price_x64(price, decimals_a, decimals_b)?)
}

pub fn price_to_initializable_tick_index(
    price: f64,
    decimals_a: u8,
    decimals_b: u8,
    tick_spacing: u16,
) -> Result<i32> {
    Ok(TickUtils::get_initializable_tick_index(
        price_to_tick_index(price, decimals_a, decimals_b)?,
        tick_spacing,
    ))
}

/// Inverts a B/A price into an A/B price through the tick grid. Precision is lost.
pub fn invert_price(price: f64, decimals_a: u8, decimals_b: u8) -> Result<f64> {
    let tick = price_to_tick_index(price, decimals_a, decimals_b)?;
    tick_index_to_price(TickUtils::invert_tick(tick), decimals_b, decimals_a)
}

/// Inverts `sqrt(B/A)` into `sqrt(A/B)` through the tick grid. Precision is lost.
pub fn invert_sqrt_price_x64(sqrt_price_x64: u128) -> Result<u128> {
    let tick = sqrt_price_x64_to_tick_index(sqrt_price_x64)?;
    tick_index_to_sqrt_price_x64(TickUtils::invert_tick(tick))
}

// ---------- Slippage bounds --------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlippageBound {
    pub lower_sqrt_price_x64: u128,
    pub lower_tick_index: i32,
    pub upper_sqrt_price_x64: u128,
    pub upper_tick_index: i32,
}

// round(sqrt_price * sqrt(ratio_num / den)), clamped into the protocol range.
fn scale_sqrt_price(sqrt_price_x64: u128, ratio_num: u128, den: u128) -> Result<u128> {
    require!(den != 0, MathError::DivideByZero);

    let factor_x64 = isqrt((U256::from(ratio_num) << 128) / U256::from(den));
    let half = U256::ONE << (FRAC_BITS - 1);
    let scaled = (U256::from(sqrt_price_x64) * factor_x64 + half) >> FRAC_BITS;

    Ok(scaled
        .min(U256::from(MAX_SQRT_PRICE_X64))
        .max(U256::from(MIN_SQRT_PRICE_X64))
        .as_u128())
}

/// Computes the sqrt prices (and their ticks) a price can move to before the given
/// slippage is exceeded in either direction. The bounds are rounded and clamped to
/// the protocol sqrt price range, so this loses precision.
pub fn get_slippage_bound_for_sqrt_price(
    sqrt_price_x64: u128,
    slippage: Percentage,
) -> Result<SlippageBound> {
    let numerator = slippage.numerator as u128;
    let denominator = slippage.denominator as u128;

    let lower_sqrt_price_x64 = scale_sqrt_price(
        sqrt_price_x64,
        denominator.saturating_sub(numerator),
        denominator,
    )?;
    let upper_sqrt_price_x64 =
        scale_sqrt_price(sqrt_price_x64, denominator + numerator, denominator)?;

    Ok(SlippageBound {
        lower_sqrt_price_x64,
        lower_tick_index: sqrt_price_x64_to_tick_index(lower_sqrt_price_x64)?,
        upper_sqrt_price_x64,
        upper_tick_index: sqrt_price_x64_to_tick_index(upper_sqrt_price_x64)?,
    })
}
