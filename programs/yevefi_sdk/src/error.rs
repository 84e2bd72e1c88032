use anchor_lang::prelude::*;

#[error_code]
pub enum MathError {
    #[msg("Multiplication result exceeds the bit limit")]
    MultiplicationOverflow = 9000,

    #[msg("Mul-div result exceeds the target integer width")]
    MulDivOverflow = 9001,

    #[msg("Multiply-shift-right intermediate exceeds the bit limit")]
    MultiplicationShiftRightOverflow = 9002,

    #[msg("Division by zero attempted")]
    DivideByZero = 9003,

    #[msg("Sqrt price outside [MIN_SQRT_PRICE, MAX_SQRT_PRICE]")]
    SqrtPriceOutOfBounds = 9004,

    #[msg("Tick index outside [-443636, 443636]")]
    TickIndexOutOfBounds = 9005,

    #[msg("Bit limit must be one of 64, 128 or 256")]
    InvalidBitLimit = 9006,

    #[msg("Price must be finite and non-negative")]
    InvalidPrice = 9007,
}

#[error_code]
pub enum TokenError {
    #[msg("Token amount or price exceeds the representable maximum")]
    TokenMaxExceeded = 9100,

    #[msg("Token amount or price is below the representable minimum")]
    TokenMinSubceeded = 9101,
}

#[error_code]
pub enum SwapError {
    #[msg("Dev fee percentage must be less than 100%")]
    InvalidDevFeePercentage = 9200,

    #[msg("Sqrt price limit is in the opposite direction of the trade")]
    InvalidSqrtPriceLimitDirection = 9201,

    #[msg("Sqrt price limit is out of bounds")]
    SqrtPriceOutOfBounds = 9202,

    #[msg("Token amount is zero")]
    ZeroTradableAmount = 9203,

    #[msg("Quoted output is below the other amount threshold")]
    AmountOutBelowMinimum = 9204,

    #[msg("Quoted input is above the other amount threshold")]
    AmountInAboveMaximum = 9205,

    #[msg("Swap traverses more tick arrays than a single instruction allows")]
    TickArrayCrossingAboveMax = 9206,

    #[msg("Tick array for the requested index is not initialized")]
    TickArrayIndexNotInitialized = 9207,

    #[msg("Tick array sequence does not cover the requested tick index")]
    TickArraySequenceInvalid = 9208,

    #[msg("Amount remaining overflowed")]
    AmountRemainingOverflow = 9209,

    #[msg("Amount calculated overflowed")]
    AmountCalcOverflow = 9210,

    #[msg("Timestamp is earlier than the last reward update")]
    InvalidTimestamp = 9211,

    #[msg("Token mint is not part of this pool")]
    TokenMintNotInPool = 9212,

    #[msg("Tick spacing must be non-zero")]
    InvalidTickSpacing = 9213,
}

#[error_code]
pub enum LiquidityError {
    #[msg("Liquidity underflow")]
    LiquidityUnderflow = 9300,

    #[msg("Liquidity overflow")]
    LiquidityOverflow = 9301,

    #[msg("Lower tick must be below the upper tick")]
    InvalidTickRange = 9302,
}

#[error_code]
pub enum AccountError {
    #[msg("Account data is shorter than the discriminator")]
    AccountDataTooSmall = 9400,

    #[msg("Account discriminator does not match a known Yevefi account")]
    UnknownAccountDiscriminator = 9401,

    #[msg("Account data could not be decoded")]
    AccountDecodeFailed = 9402,
}
