//! PDA (Program Derived Address) derivation for Yevefi accounts.
//!
//! Every function is a pure mapping from identifiers to an address, nothing is cached.
//! Seeds mirror the ones the program validates, so derived addresses can be embedded
//! directly as instruction accounts.

use crate::math::price_math::sqrt_price_x64_to_tick_index;
use crate::utils::tick_utils::TickUtils;
use anchor_lang::prelude::*;
use anchor_lang::Id;
use anchor_spl::metadata::Metadata;

const PDA_YEVEFI_SEED: &[u8] = b"yevefi";
const PDA_POSITION_SEED: &[u8] = b"position";
const PDA_METADATA_SEED: &[u8] = b"metadata";
const PDA_TICK_ARRAY_SEED: &[u8] = b"tick_array";
const PDA_FEE_TIER_SEED: &[u8] = b"fee_tier";
const PDA_ORACLE_SEED: &[u8] = b"oracle";
const PDA_POSITION_BUNDLE_SEED: &[u8] = b"position_bundle";
const PDA_BUNDLED_POSITION_SEED: &[u8] = b"bundled_position";

/// Information about a derived PDA.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PdaInfo {
    pub address: Pubkey,
    pub bump: u8,
}

impl PdaInfo {
    #[inline(always)]
    fn find(seeds: &[&[u8]], program_id: &Pubkey) -> Self {
        let (address, bump) = Pubkey::find_program_address(seeds, program_id);
        PdaInfo { address, bump }
    }
}

/// Derivation of every PDA the client needs to build Yevefi instructions.
pub struct PdaManager;

impl PdaManager {
    /// Derives the pool address for a config, an ordered mint pair and a tick spacing.
    /// # Arguments
    /// * `program_id` - The Yevefi program id.
    /// * `yevefis_config` - The config account the pool was created under.
    /// * `token_mint_a` / `token_mint_b` - The pool mints, in pool order.
    /// * `tick_spacing` - Tick spacing of the pool, encoded as a little-endian u16 seed.
    pub fn yevefi(
        program_id: &Pubkey,
        yevefis_config: &Pubkey,
        token_mint_a: &Pubkey,
        token_mint_b: &Pubkey,
        tick_spacing: u16,
    ) -> PdaInfo {
        let tick_spacing_bytes = tick_spacing.to_le_bytes();
        PdaInfo::find(
            &[
                PDA_YEVEFI_SEED,
                yevefis_config.as_ref(),
                token_mint_a.as_ref(),
                token_mint_b.as_ref(),
                &tick_spacing_bytes,
            ],
            program_id,
        )
    }

    pub fn position(program_id: &Pubkey, position_mint: &Pubkey) -> PdaInfo {
        PdaInfo::find(&[PDA_POSITION_SEED, position_mint.as_ref()], program_id)
    }

    /// Token metadata account of a position NFT, owned by the metadata program.
    pub fn position_metadata(position_mint: &Pubkey) -> PdaInfo {
        let metadata_program = Metadata::id();
        PdaInfo::find(
            &[
                PDA_METADATA_SEED,
                metadata_program.as_ref(),
                position_mint.as_ref(),
            ],
            &metadata_program,
        )
    }

    /// Derives a tick array address. The start tick is seeded as its decimal string.
    pub fn tick_array(program_id: &Pubkey, yevefi: &Pubkey, start_tick_index: i32) -> PdaInfo {
        let start_tick = start_tick_index.to_string();
        PdaInfo::find(
            &[PDA_TICK_ARRAY_SEED, yevefi.as_ref(), start_tick.as_bytes()],
            program_id,
        )
    }

    /// Derives the tick array holding `tick_index`, shifted by `tick_array_offset` arrays.
    /// # Returns
    /// * `Err(MathError::TickIndexOutOfBounds)` - If the shifted array cannot exist.
    pub fn tick_array_from_tick_index(
        program_id: &Pubkey,
        yevefi: &Pubkey,
        tick_index: i32,
        tick_spacing: u16,
        tick_array_offset: i32,
    ) -> Result<PdaInfo> {
        let start_tick_index =
            TickUtils::get_start_tick_index(tick_index, tick_spacing, tick_array_offset)?;
        Ok(Self::tick_array(program_id, yevefi, start_tick_index))
    }

    pub fn tick_array_from_sqrt_price(
        program_id: &Pubkey,
        yevefi: &Pubkey,
        sqrt_price_x64: u128,
        tick_spacing: u16,
        tick_array_offset: i32,
    ) -> Result<PdaInfo> {
        let tick_index = sqrt_price_x64_to_tick_index(sqrt_price_x64)?;
        Self::tick_array_from_tick_index(
            program_id,
            yevefi,
            tick_index,
            tick_spacing,
            tick_array_offset,
        )
    }

    /// Same as `tick_array_from_tick_index` for a pool known only by its fee tier key set.
    pub fn tick_array_from_fee_tier(
        program_id: &Pubkey,
        yevefis_config: &Pubkey,
        token_mint_a: &Pubkey,
        token_mint_b: &Pubkey,
        tick_index: i32,
        tick_spacing: u16,
        tick_array_offset: i32,
    ) -> Result<PdaInfo> {
        let pool = Self::yevefi(
            program_id,
            yevefis_config,
            token_mint_a,
            token_mint_b,
            tick_spacing,
        );
        Self::tick_array_from_tick_index(
            program_id,
            &pool.address,
            tick_index,
            tick_spacing,
            tick_array_offset,
        )
    }

    pub fn fee_tier(program_id: &Pubkey, yevefis_config: &Pubkey, tick_spacing: u16) -> PdaInfo {
        let tick_spacing_bytes = tick_spacing.to_le_bytes();
        PdaInfo::find(
            &[PDA_FEE_TIER_SEED, yevefis_config.as_ref(), &tick_spacing_bytes],
            program_id,
        )
    }

    pub fn oracle(program_id: &Pubkey, yevefi: &Pubkey) -> PdaInfo {
        PdaInfo::find(&[PDA_ORACLE_SEED, yevefi.as_ref()], program_id)
    }

    pub fn position_bundle(program_id: &Pubkey, position_bundle_mint: &Pubkey) -> PdaInfo {
        PdaInfo::find(
            &[PDA_POSITION_BUNDLE_SEED, position_bundle_mint.as_ref()],
            program_id,
        )
    }

    pub fn position_bundle_metadata(position_bundle_mint: &Pubkey) -> PdaInfo {
        Self::position_metadata(position_bundle_mint)
    }

    /// Position inside a bundle. The bundle index is seeded as its decimal string.
    pub fn bundled_position(
        program_id: &Pubkey,
        position_bundle_mint: &Pubkey,
        bundle_index: u16,
    ) -> PdaInfo {
        let index = bundle_index.to_string();
        PdaInfo::find(
            &[
                PDA_BUNDLED_POSITION_SEED,
                position_bundle_mint.as_ref(),
                index.as_bytes(),
            ],
            program_id,
        )
    }
}
