use crate::utils::constants::{NUM_REWARDS, POSITION_BUNDLE_SIZE};
use anchor_lang::prelude::*;

/// A liquidity position over `[tick_lower_index, tick_upper_index)`.
#[account]
#[derive(Default, Debug, PartialEq, Eq)]
pub struct Position {
    pub yevefi: Pubkey,        // 32
    pub position_mint: Pubkey, // 32
    pub liquidity: u128,       // 16
    pub tick_lower_index: i32, // 4
    pub tick_upper_index: i32, // 4

    // Q64.64
    pub fee_growth_checkpoint_a: u128, // 16
    pub fee_owed_a: u64,               // 8
    // Q64.64
    pub fee_growth_checkpoint_b: u128, // 16
    pub fee_owed_b: u64,               // 8

    pub reward_infos: [PositionRewardInfo; NUM_REWARDS], // 72
}

#[derive(AnchorSerialize, AnchorDeserialize, Copy, Clone, Default, Debug, PartialEq, Eq)]
pub struct PositionRewardInfo {
    // Q64.64
    pub growth_inside_checkpoint: u128,
    pub amount_owed: u64,
}

impl Position {
    pub const LEN: usize = 8 + 136 + 72;

    /// No liquidity, no fees owed and no rewards owed.
    pub fn is_empty(&self) -> bool {
        self.liquidity == 0
            && self.fee_owed_a == 0
            && self.fee_owed_b == 0
            && self.reward_infos.iter().all(|r| r.amount_owed == 0)
    }
}

/// Bitmap of the positions opened out of one bundle NFT.
#[account]
#[derive(Default, Debug, PartialEq, Eq)]
pub struct PositionBundle {
    pub position_bundle_mint: Pubkey, // 32
    pub position_bitmap: [u8; 32],    // 32
}

impl PositionBundle {
    pub const LEN: usize = 8 + 32 + 32;

    /// Whether the bundle slot `bundle_index` currently holds an open position.
    pub fn is_bundle_index_in_use(&self, bundle_index: u16) -> bool {
        if bundle_index >= POSITION_BUNDLE_SIZE {
            return false;
        }
        let byte = self.position_bitmap[(bundle_index / 8) as usize];
        byte & (1 << (bundle_index % 8)) != 0
    }

    /// Lowest free slot, if any.
    pub fn first_unoccupied_index(&self) -> Option<u16> {
        (0..POSITION_BUNDLE_SIZE).find(|i| !self.is_bundle_index_in_use(*i))
    }
}
