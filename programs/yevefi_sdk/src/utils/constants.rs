use anchor_lang::prelude::Pubkey;

pub const MIN_TICK_INDEX: i32 = -443_636;
pub const MAX_TICK_INDEX: i32 = 443_636;
pub const MIN_SQRT_PRICE_X64: u128 = 4_295_048_016;
pub const MAX_SQRT_PRICE_X64: u128 = 79_226_673_515_401_279_992_447_579_055;
pub const FRAC_BITS: u32 = 64; // Q64.64
pub const ONE_X64: u128 = 1u128 << FRAC_BITS;
pub const U64_MASK: u128 = u64::MAX as u128;

/// Number of ticks held by a single tick array account.
pub const TICK_ARRAY_SIZE: i32 = 88;
pub const TICK_ARRAY_SIZE_USIZE: usize = 88;

/// Tick arrays a single swap instruction can reference.
pub const MAX_SWAP_TICK_ARRAYS: usize = 3;
pub const NUM_REWARDS: usize = 3;
pub const POSITION_BUNDLE_SIZE: u16 = 256;

pub const FEE_RATE_MUL_VALUE: u128 = 1_000_000;
pub const PROTOCOL_FEE_RATE_MUL_VALUE: u128 = 10_000;
pub const MAX_FEE_RATE: u16 = 30_000; // 3%
pub const MAX_PROTOCOL_FEE_RATE: u16 = 2_500; // 25%

pub const SUPPORTED_TICK_SPACINGS: [u16; 8] = [1, 2, 4, 8, 16, 64, 128, 256];

/// Default pool config the public deployment uses.
pub const YEVEFIS_CONFIG: Pubkey =
    solana_program::pubkey!("4j3k61AqzTbwJvEghEtvkMz72SNs6UGSWXd9Sopakasb");

/// Update authority of position NFTs minted with metadata.
pub const YEVEFI_NFT_UPDATE_AUTH: Pubkey =
    solana_program::pubkey!("DuNGiWTqprnHNpe7KVfmaN8PNmH7RgvXntm6uPLdH2F3");
