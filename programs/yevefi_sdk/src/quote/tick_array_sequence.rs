//! # yevefi_sdk::quote::tick_array_sequence
//!
//! Ordered view over the 1 to 3 tick arrays a swap may traverse.
//!
//! Arrays are held in trade order: descending start index for a to b, ascending
//! for b to a. A missing array ends the sequence, so only trailing arrays may be
//! absent. Every array the search reaches is marked as touched so the quote can
//! report which accounts the swap instruction must reference.

use crate::error::SwapError;
use crate::state::{Tick, TickArray, TickArrayState};
use crate::utils::constants::{
    MAX_SWAP_TICK_ARRAYS, MAX_TICK_INDEX, MIN_TICK_INDEX, TICK_ARRAY_SIZE,
};
use crate::utils::tick_utils::TickUtils;
use anchor_lang::prelude::*;

/// A tick located by the array it falls in and its slot inside that array.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickArrayIndex {
    pub array_index: i32,
    pub offset_index: i32,
    pub tick_spacing: u16,
}

impl TickArrayIndex {
    /// Locates `tick_index`, rounding down onto the spacing grid.
    pub fn from_tick_index(tick_index: i32, tick_spacing: u16) -> Self {
        let ticks_in_array = TickUtils::ticks_in_array(tick_spacing);
        let array_index = tick_index.div_euclid(ticks_in_array);
        let offset_index =
            TickUtils::get_offset_index(tick_index, array_index * ticks_in_array, tick_spacing);
        Self {
            array_index,
            offset_index,
            tick_spacing,
        }
    }

    pub fn to_tick_index(&self) -> i32 {
        self.array_index * TickUtils::ticks_in_array(self.tick_spacing)
            + self.offset_index * self.tick_spacing as i32
    }

    pub fn to_next_initializable_tick_index(&self) -> Self {
        if self.offset_index + 1 == TICK_ARRAY_SIZE {
            Self {
                array_index: self.array_index + 1,
                offset_index: 0,
                ..*self
            }
        } else {
            Self {
                offset_index: self.offset_index + 1,
                ..*self
            }
        }
    }

    pub fn to_prev_initializable_tick_index(&self) -> Self {
        if self.offset_index == 0 {
            Self {
                array_index: self.array_index - 1,
                offset_index: TICK_ARRAY_SIZE - 1,
                ..*self
            }
        } else {
            Self {
                offset_index: self.offset_index - 1,
                ..*self
            }
        }
    }
}

#[derive(Clone, Debug)]
struct SequenceEntry {
    address: Pubkey,
    data: TickArray,
}

#[derive(Clone, Debug)]
pub struct TickArraySequence {
    sequence: Vec<SequenceEntry>,
    touched: Vec<bool>,
    start_array_index: i32,
    tick_spacing: u16,
    a_to_b: bool,
}

impl TickArraySequence {
    /// Builds the sequence from fetched arrays in trade order.
    ///
    /// Arrays after the first missing one are dropped, as are any beyond
    /// `MAX_SWAP_TICK_ARRAYS`.
    ///
    /// # Errors
    /// * `InvalidTickSpacing` if `tick_spacing` is zero.
    /// * `TickArraySequenceInvalid` if the first array has no data.
    pub fn new(tick_arrays: &[TickArrayState], tick_spacing: u16, a_to_b: bool) -> Result<Self> {
        require!(tick_spacing != 0, SwapError::InvalidTickSpacing);
        let sequence: Vec<SequenceEntry> = tick_arrays
            .iter()
            .take(MAX_SWAP_TICK_ARRAYS)
            .map_while(|state| {
                state.data.as_ref().map(|data| SequenceEntry {
                    address: state.address,
                    data: data.clone(),
                })
            })
            .collect();

        let first = sequence
            .first()
            .ok_or(SwapError::TickArraySequenceInvalid)?;
        let start_array_index =
            TickArrayIndex::from_tick_index(first.data.start_tick_index, tick_spacing).array_index;

        Ok(Self {
            touched: vec![false; sequence.len()],
            sequence,
            start_array_index,
            tick_spacing,
            a_to_b,
        })
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    pub fn tick_spacing(&self) -> u16 {
        self.tick_spacing
    }

    pub fn a_to_b(&self) -> bool {
        self.a_to_b
    }

    /// The first array must hold the tick the program starts its search from.
    pub fn is_valid_tick_array_0(&self, tick_current_index: i32) -> bool {
        let shift = if self.a_to_b {
            0
        } else {
            self.tick_spacing as i32
        };
        self.sequence.first().is_some_and(|first| {
            first
                .data
                .in_search_range(tick_current_index + shift, self.tick_spacing)
        })
    }

    pub fn touched_array_count(&self) -> usize {
        self.touched.iter().filter(|t| **t).count()
    }

    /// Touched array addresses in trade order, padded with the last touched address
    /// up to `min_len`. When nothing was touched the first array stands in.
    pub fn touched_arrays(&self, min_len: usize) -> Vec<Pubkey> {
        let mut touched: Vec<Pubkey> = self
            .sequence
            .iter()
            .zip(self.touched.iter())
            .filter(|(_, t)| **t)
            .map(|(entry, _)| entry.address)
            .collect();

        let pad = touched
            .last()
            .copied()
            .or_else(|| self.sequence.first().map(|e| e.address));
        if let Some(pad) = pad {
            while touched.len() < min_len {
                touched.push(pad);
            }
        }
        touched
    }

    // Position of an array in the held sequence, negative or past the end if absent.
    fn local_array_index(&self, array_index: i32) -> i32 {
        if self.a_to_b {
            self.start_array_index - array_index
        } else {
            array_index - self.start_array_index
        }
    }

    fn local_index_in_bounds(&self, index: &TickArrayIndex) -> Option<usize> {
        let local = self.local_array_index(index.array_index);
        usize::try_from(local)
            .ok()
            .filter(|local| *local < self.sequence.len())
    }

    // A search that starts outside the held arrays. Running off the far end of a
    // full sequence means the swap needs more arrays than one instruction takes.
    fn out_of_range_error(&self, index: &TickArrayIndex) -> Error {
        let past_end = self.local_array_index(index.array_index) >= self.sequence.len() as i32;
        if past_end && self.sequence.len() >= MAX_SWAP_TICK_ARRAYS {
            SwapError::TickArrayCrossingAboveMax.into()
        } else {
            SwapError::TickArraySequenceInvalid.into()
        }
    }

    fn tick_at(&self, index: &TickArrayIndex) -> Option<(usize, &Tick)> {
        let local = self.local_index_in_bounds(index)?;
        let tick = self.sequence[local].data.ticks.get(index.offset_index as usize)?;
        Some((local, tick))
    }

    /// Tick data at `tick_index` without marking anything touched.
    ///
    /// # Errors
    /// * `TickArraySequenceInvalid` if the index is not on the spacing grid.
    /// * `TickArrayIndexNotInitialized` if no held array contains the index.
    pub fn get_tick(&self, tick_index: i32) -> Result<&Tick> {
        require!(
            TickUtils::is_tick_initializable(tick_index, self.tick_spacing),
            SwapError::TickArraySequenceInvalid
        );
        let index = TickArrayIndex::from_tick_index(tick_index, self.tick_spacing);
        self.tick_at(&index)
            .map(|(_, tick)| tick)
            .ok_or_else(|| SwapError::TickArrayIndexNotInitialized.into())
    }

    /// Next initialized tick in trade direction, searching from `curr_index`
    /// inclusive for a to b and from the following grid tick for b to a.
    ///
    /// Returns the index and the tick. When the held arrays contain no initialized
    /// tick the far boundary of the last array is returned, clamped to the tick
    /// range, with no tick data; the swap then stops there or fails on its next
    /// search.
    ///
    /// # Errors
    /// * `TickArrayCrossingAboveMax` if the search starts past a full sequence.
    /// * `TickArraySequenceInvalid` if the search starts outside the held arrays.
    pub fn find_next_initialized_tick_index(
        &mut self,
        curr_index: i32,
    ) -> Result<(i32, Option<Tick>)> {
        let search_index = if self.a_to_b {
            curr_index
        } else {
            curr_index + self.tick_spacing as i32
        };
        let mut cursor = TickArrayIndex::from_tick_index(search_index, self.tick_spacing);
        if self.local_index_in_bounds(&cursor).is_none() {
            return Err(self.out_of_range_error(&cursor));
        }

        while let Some((local, tick)) = self.tick_at(&cursor) {
            let tick = *tick;
            self.touched[local] = true;
            if tick.initialized {
                return Ok((cursor.to_tick_index(), Some(tick)));
            }
            cursor = if self.a_to_b {
                cursor.to_prev_initializable_tick_index()
            } else {
                cursor.to_next_initializable_tick_index()
            };
        }

        // The cursor sits one grid tick beyond the last held array.
        let boundary = if self.a_to_b {
            cursor.to_tick_index() + self.tick_spacing as i32
        } else {
            cursor.to_tick_index() - self.tick_spacing as i32
        };
        Ok((boundary.clamp(MIN_TICK_INDEX, MAX_TICK_INDEX), None))
    }

    /// Lazy walk over the initialized ticks reachable from `from_index`, in trade
    /// direction. Ends when the held arrays end. Nothing is marked touched.
    pub fn next_initialized_ticks(&self, from_index: i32) -> NextInitializedTicks<'_> {
        let search_index = if self.a_to_b {
            from_index
        } else {
            from_index + self.tick_spacing as i32
        };
        NextInitializedTicks {
            sequence: self,
            cursor: TickArrayIndex::from_tick_index(search_index, self.tick_spacing),
        }
    }
}

pub struct NextInitializedTicks<'a> {
    sequence: &'a TickArraySequence,
    cursor: TickArrayIndex,
}

impl<'a> Iterator for NextInitializedTicks<'a> {
    type Item = (i32, &'a Tick);

    fn next(&mut self) -> Option<Self::Item> {
        let sequence = self.sequence;
        loop {
            let (_, tick) = sequence.tick_at(&self.cursor)?;
            let tick_index = self.cursor.to_tick_index();
            self.cursor = if sequence.a_to_b {
                self.cursor.to_prev_initializable_tick_index()
            } else {
                self.cursor.to_next_initializable_tick_index()
            };
            if tick.initialized {
                return Some((tick_index, tick));
            }
        }
    }
}
