use crate::error::SwapError;
use crate::math::bit_math::checked_mul_div_u128;
use crate::utils::constants::NUM_REWARDS;
use anchor_lang::prelude::*;

/// Pool account. Field order is the on-chain borsh layout.
#[account]
#[derive(Default, Debug, PartialEq, Eq)]
pub struct Yevefi {
    pub yevefis_config: Pubkey, // 32
    pub yevefi_bump: [u8; 1],   // 1

    pub tick_spacing: u16,          // 2
    pub tick_spacing_seed: [u8; 2], // 2

    // Stored as hundredths of a basis point
    // u16::MAX corresponds to ~6.5%
    pub fee_rate: u16, // 2

    // Portion of fee rate taken stored as basis points
    pub protocol_fee_rate: u16, // 2

    // Maximum amount that can be held by Solana account
    pub liquidity: u128, // 16

    // MAX/MIN at Q32.64, but using Q64.64 for rounder bytes
    // Q64.64
    pub sqrt_price: u128,        // 16
    pub tick_current_index: i32, // 4

    pub protocol_fee_owed_a: u64, // 8
    pub protocol_fee_owed_b: u64, // 8

    pub token_mint_a: Pubkey,  // 32
    pub token_vault_a: Pubkey, // 32

    // Q64.64
    pub fee_growth_global_a: u128, // 16

    pub token_mint_b: Pubkey,  // 32
    pub token_vault_b: Pubkey, // 32

    // Q64.64
    pub fee_growth_global_b: u128, // 16

    pub reward_last_updated_timestamp: u64, // 8

    pub reward_infos: [YevefiRewardInfo; NUM_REWARDS], // 384
}

/// Stores the state relevant for tracking liquidity mining rewards at the pool level.
#[derive(AnchorSerialize, AnchorDeserialize, Copy, Clone, Default, Debug, PartialEq, Eq)]
pub struct YevefiRewardInfo {
    /// Reward token mint.
    pub mint: Pubkey,
    /// Reward vault token account.
    pub vault: Pubkey,
    /// Authority account that has permission to initialize the reward and set emissions.
    pub authority: Pubkey,
    /// Q64.64 number that indicates how many tokens per second are earned per unit of liquidity.
    pub emissions_per_second_x64: u128,
    /// Q64.64 number that tracks the total tokens earned per unit of liquidity since the reward
    /// emissions were turned on.
    pub growth_global_x64: u128,
}

impl YevefiRewardInfo {
    /// A reward slot is live once a mint has been assigned to it.
    #[inline(always)]
    pub fn initialized(&self) -> bool {
        self.mint != Pubkey::default()
    }
}

impl Yevefi {
    pub const LEN: usize = 8 + 261 + 384;

    /// Global reward growth as of `next_timestamp`.
    ///
    /// Each initialized reward grows by `elapsed * emissions_per_second_x64 / liquidity`.
    /// A growth delta that overflows is treated as zero, which halts that reward rather
    /// than failing the caller. Nothing moves while the pool holds no liquidity.
    ///
    /// # Errors
    /// * `InvalidTimestamp` if `next_timestamp` is before the last update.
    pub fn next_reward_infos(&self, next_timestamp: u64) -> Result<[YevefiRewardInfo; NUM_REWARDS]> {
        let curr_timestamp = self.reward_last_updated_timestamp;
        require!(
            next_timestamp >= curr_timestamp,
            SwapError::InvalidTimestamp
        );

        if self.liquidity == 0 || next_timestamp == curr_timestamp {
            return Ok(self.reward_infos);
        }

        let mut next_reward_infos = self.reward_infos;
        let time_delta = u128::from(next_timestamp - curr_timestamp);
        for reward_info in next_reward_infos.iter_mut().filter(|r| r.initialized()) {
            let reward_growth_delta = checked_mul_div_u128(
                time_delta,
                reward_info.emissions_per_second_x64,
                self.liquidity,
                false,
            )
            .unwrap_or(0);

            reward_info.growth_global_x64 = reward_info
                .growth_global_x64
                .wrapping_add(reward_growth_delta);
        }

        Ok(next_reward_infos)
    }

    /// Fee growth accumulator of the token paid in for the given direction.
    #[inline(always)]
    pub fn input_fee_growth_global(&self, a_to_b: bool) -> u128 {
        if a_to_b {
            self.fee_growth_global_a
        } else {
            self.fee_growth_global_b
        }
    }
}
