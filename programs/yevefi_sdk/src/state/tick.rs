use crate::error::SwapError;
use crate::utils::constants::{NUM_REWARDS, TICK_ARRAY_SIZE, TICK_ARRAY_SIZE_USIZE};
use crate::utils::tick_utils::TickUtils;
use anchor_lang::prelude::*;

#[derive(AnchorSerialize, AnchorDeserialize, Copy, Clone, Default, Debug, PartialEq, Eq)]
pub struct Tick {
    // Total 113 bytes
    pub initialized: bool,     // 1
    pub liquidity_net: i128,   // 16
    pub liquidity_gross: u128, // 16

    // Q64.64
    pub fee_growth_outside_a: u128, // 16
    // Q64.64
    pub fee_growth_outside_b: u128, // 16

    // Array of Q64.64
    pub reward_growths_outside: [u128; NUM_REWARDS], // 48 = 16 * 3
}

impl Tick {
    pub const LEN: usize = 113;

    /// A tick can hold liquidity when it is in bounds and on the spacing grid.
    pub fn check_is_usable_tick(tick_index: i32, tick_spacing: u16) -> bool {
        TickUtils::check_tick_in_bounds(tick_index)
            && TickUtils::is_tick_initializable(tick_index, tick_spacing)
    }
}

/// Tick array account: 88 consecutive initializable ticks of one pool.
///
/// The program stores this account zero-copy and packed; its byte image is the same
/// as the borsh encoding of this struct.
#[account]
#[derive(Debug, PartialEq, Eq)]
pub struct TickArray {
    pub start_tick_index: i32,
    pub ticks: [Tick; TICK_ARRAY_SIZE_USIZE],
    pub yevefi: Pubkey,
}

impl Default for TickArray {
    fn default() -> Self {
        Self {
            start_tick_index: 0,
            ticks: [Tick::default(); TICK_ARRAY_SIZE_USIZE],
            yevefi: Pubkey::default(),
        }
    }
}

impl TickArray {
    pub const LEN: usize = 8 + 36 + (Tick::LEN * TICK_ARRAY_SIZE_USIZE);

    pub fn new(yevefi: Pubkey, start_tick_index: i32) -> Self {
        Self {
            start_tick_index,
            yevefi,
            ..Default::default()
        }
    }

    /// True when `tick_index` falls inside the span of this array.
    pub fn in_search_range(&self, tick_index: i32, tick_spacing: u16) -> bool {
        let end = self.start_tick_index + TickUtils::ticks_in_array(tick_spacing);
        tick_index >= self.start_tick_index && tick_index < end
    }

    /// Slot of `tick_index` within this array.
    ///
    /// # Errors
    /// * `TickArrayIndexNotInitialized` if the tick lies outside this array.
    /// * `TickArraySequenceInvalid` if the tick is not on the spacing grid.
    pub fn tick_offset(&self, tick_index: i32, tick_spacing: u16) -> Result<usize> {
        require!(
            self.in_search_range(tick_index, tick_spacing),
            SwapError::TickArrayIndexNotInitialized
        );
        require!(
            TickUtils::is_tick_initializable(tick_index, tick_spacing),
            SwapError::TickArraySequenceInvalid
        );

        let offset = TickUtils::get_offset_index(tick_index, self.start_tick_index, tick_spacing);
        debug_assert!((0..TICK_ARRAY_SIZE).contains(&offset));
        Ok(offset as usize)
    }

    pub fn get_tick(&self, tick_index: i32, tick_spacing: u16) -> Result<&Tick> {
        let offset = self.tick_offset(tick_index, tick_spacing)?;
        Ok(&self.ticks[offset])
    }

    pub fn get_tick_mut(&mut self, tick_index: i32, tick_spacing: u16) -> Result<&mut Tick> {
        let offset = self.tick_offset(tick_index, tick_spacing)?;
        Ok(&mut self.ticks[offset])
    }
}

/// A tick array address together with its fetched data, if the account exists.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TickArrayState {
    pub address: Pubkey,
    pub data: Option<TickArray>,
}

impl TickArrayState {
    pub fn new(address: Pubkey, data: Option<TickArray>) -> Self {
        Self { address, data }
    }
}
